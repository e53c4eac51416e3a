use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_meta::Title;

use super::PageHero;
use crate::components::footer::SocialLinks;
use crate::components::icon::{Glyph, Icon};
use crate::components::motion::{Motion, Reveal};
use crate::config::COMPANY;
use crate::content::CONTACT_CHANNELS;
use crate::state::contact::{ContactForm, Field, SUBMIT_DELAY_MS, SUCCESS_DISPLAY_MS};

const INPUT: &str = "w-full rounded-xl border border-gray-200 bg-white px-4 py-2 text-sm \
                     focus:outline-none focus:ring-2 focus:ring-primary-600/40";

#[component]
fn ContactInfo() -> impl IntoView {
    let channels = CONTACT_CHANNELS
        .iter()
        .enumerate()
        .map(|(i, channel)| {
            let lines = channel
                .lines
                .iter()
                .map(|l| view! { <span class="block">{ *l }</span> })
                .collect_view();
            let body = match channel.href {
                Some(href) => view! {
                    <a href=href class="text-gray-600 hover:text-primary-600">{ lines }</a>
                }
                .into_any(),
                None => view! { <p class="text-gray-600">{ lines }</p> }.into_any(),
            };

            view! {
                <Reveal motion=Motion::fade_up(20).duration(500).delay(200).stagger(i, 100) class="flex items-start gap-4">
                    <div class="h-12 w-12 rounded-2xl red-yellow-gradient text-white flex items-center justify-center shrink-0 glow-gradient">
                        <Glyph icon=channel.icon class="h-5 w-5"/>
                    </div>
                    <div>
                        <h3 class="text-xl font-semibold mb-2">{ channel.label }</h3>
                        { body }
                    </div>
                </Reveal>
            }
        })
        .collect_view();

    view! {
        <Reveal motion=Motion::slide(-50).duration(800)>
            <h2 class="text-3xl font-bold mb-8 text-red-yellow-gradient crossfire-header crossfire-border pb-3">
                "Contact Information"
            </h2>
            <div class="space-y-8">{ channels }</div>

            <div class="mt-12">
                <h3 class="text-xl font-semibold mb-6">"Follow Us"</h3>
                <div class="flex gap-4">
                    <SocialLinks/>
                </div>
            </div>
        </Reveal>
    }
}

#[component]
fn MessageForm() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let ticket = match form.try_update(|f| f.begin_submit()) {
            Some(Ok(ticket)) => ticket,
            Some(Err(err)) => {
                log::warn!("contact form not sent: {err}");
                return;
            }
            None => return,
        };
        log::info!("sending contact message {ticket:?}");

        Timeout::new(SUBMIT_DELAY_MS, move || {
            form.maybe_update(|f| f.complete_submit(ticket));
            Timeout::new(SUCCESS_DISPLAY_MS, move || {
                form.maybe_update(|f| f.dismiss_success(ticket));
            })
            .forget();
        })
        .forget();
    };

    let fields = Field::ALL
        .into_iter()
        .map(|field| {
            let value = move || form.with(|f| f.field(field).to_owned());
            let on_input = move |ev: leptos::ev::Event| form.update(|f| f.set_field(field, event_target_value(&ev)));

            let kind = if field == Field::Email { "email" } else { "text" };
            let input = match field {
                Field::Message => view! {
                    <textarea
                        id=field.key()
                        name=field.key()
                        rows="6"
                        placeholder=field.placeholder()
                        required=true
                        class=INPUT
                        prop:value=value
                        on:input=on_input
                    ></textarea>
                }
                .into_any(),
                _ => view! {
                    <input
                        id=field.key()
                        name=field.key()
                        type=kind
                        placeholder=field.placeholder()
                        required=true
                        class=INPUT
                        prop:value=value
                        on:input=on_input
                    />
                }
                .into_any(),
            };

            view! {
                <div>
                    <label for=field.key() class="block mb-2 text-sm font-medium text-gray-700">
                        { field.label() }
                    </label>
                    { input }
                </div>
            }
        })
        .collect_view();

    let submitting = move || form.with(|f| f.is_submitting);

    view! {
        <Reveal motion=Motion::slide(50).duration(800)>
            <div class="bg-white p-8 md:p-10 rounded-3xl shadow-sm border border-gray-100 glow-card relative overflow-hidden">
                <div class="absolute -top-24 -right-24 w-48 h-48 rounded-full bg-primary-600/10 blur-xl"></div>
                <div class="absolute -bottom-24 -left-24 w-48 h-48 rounded-full bg-secondary-400/10 blur-xl"></div>
                <div class="relative z-10">
                    <h2 class="text-3xl font-bold mb-8 text-red-yellow-gradient crossfire-header">"Send a Message"</h2>
                    <form on:submit=on_submit>
                        <Show when=move || form.with(|f| f.is_submitted)>
                            <Reveal motion=Motion::fade_up(-10).duration(300) on_mount=true>
                                <div class="mb-6 p-4 rounded-lg bg-green-50 text-green-700 border border-green-200">
                                    "Thank you for your message! We'll get back to you soon."
                                </div>
                            </Reveal>
                        </Show>

                        <div class="space-y-6">
                            { fields }
                            <button
                                type="submit"
                                disabled=submitting
                                class="w-full inline-flex items-center justify-center gap-2 rounded-full px-8 py-3 \
                                       font-medium text-white red-yellow-gradient border-0 glow-gradient disabled:opacity-70"
                            >
                                { move || form.with(|f| f.button_label()) }
                                <Show when=move || !submitting()>
                                    <Glyph icon=Icon::Send/>
                                </Show>
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Reveal>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <Title text=format!("Contact | {COMPANY}")/>
        <PageHero
            title="Get in Touch"
            blurb="Ready to start your project? Have questions about our services? Let's talk!"
        />

        <section class="py-16 md:py-24">
            <div class="container mx-auto px-4">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-16">
                    <ContactInfo/>
                    <MessageForm/>
                </div>
            </div>
        </section>
    }
}
