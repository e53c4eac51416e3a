use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::prelude::Children;
use leptos::{IntoView, component, view};

use crate::components::motion::{Motion, Reveal};

pub mod about;
pub mod contact;
pub mod gallery;
pub mod home;
pub mod not_found;
pub mod services;

pub(crate) const CTA: &str = "inline-flex items-center justify-center gap-2 rounded-full px-8 py-3 \
                              font-medium text-white red-yellow-gradient border-0 glow-gradient";
pub(crate) const CTA_OUTLINE: &str = "inline-flex items-center justify-center gap-2 rounded-full px-8 py-3 \
                                      font-medium border-2 border-primary-600 hover:bg-primary-600/5";
pub(crate) const HEADING: &str = "font-bold text-red-yellow-gradient text-glow crossfire-header";

/// Two blurred brand-colour blobs in opposite corners.
#[component]
pub fn CornerGlow(#[prop(optional)] gradient: bool) -> impl IntoView {
    let (a, b) = if gradient {
        ("red-yellow-gradient", "red-yellow-gradient")
    } else {
        ("bg-primary-600", "bg-secondary-400")
    };

    view! {
        <div class=format!("absolute top-0 right-0 w-96 h-96 {a} rounded-full opacity-10 blur-3xl")></div>
        <div class=format!("absolute bottom-0 left-0 w-80 h-80 {b} rounded-full opacity-10 blur-3xl")></div>
    }
}

/// Title band shared by the inner pages.
#[component]
pub fn PageHero(
    title: &'static str,
    blurb: &'static str,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <section class="py-16 md:py-24 bg-light-gray bg-dots relative overflow-hidden">
            <CornerGlow/>
            <div class="container mx-auto px-4 text-center relative z-10">
                <Reveal on_mount=true>
                    <h1 class=format!("text-4xl md:text-5xl lg:text-6xl mb-6 {HEADING}")>{ title }</h1>
                </Reveal>
                <Reveal motion=Motion::fade_up(20).delay(200) on_mount=true>
                    <p class="text-xl text-gray-600 max-w-2xl mx-auto mb-8">{ blurb }</p>
                </Reveal>
                { children.map(|c| view! {
                    <Reveal motion=Motion::fade_up(20).delay(400) on_mount=true>{ c() }</Reveal>
                }) }
            </div>
        </section>
    }
}

/// Closing call-to-action block at the foot of a page.
#[component]
pub fn CtaBand(title: &'static str, blurb: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class="py-16 md:py-24 bg-light-gray bg-pattern relative overflow-hidden">
            <CornerGlow gradient=true/>
            <div class="container mx-auto px-4 text-center relative z-10">
                <Reveal motion=Motion::fade_up(30).duration(700)>
                    <h2 class=format!("text-3xl md:text-4xl mb-6 {HEADING}")>{ title }</h2>
                    <p class="text-gray-600 max-w-xl mx-auto mb-10">{ blurb }</p>
                    { children() }
                </Reveal>
            </div>
        </section>
    }
}
