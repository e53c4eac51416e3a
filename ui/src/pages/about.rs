use chrono::Datelike;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use super::{CTA, CornerGlow, HEADING};
use crate::components::icon::{Glyph, Icon};
use crate::components::motion::{Motion, Reveal};
use crate::config::{self, COMPANY};
use crate::content::{EXPERIENCE, VALUES};

#[component]
fn Intro() -> impl IntoView {
    let badge = config::experience_badge(chrono::Local::now().year());

    view! {
        <section class="py-16 md:py-24 bg-light-gray bg-dots relative overflow-hidden">
            <CornerGlow/>
            <div class="container mx-auto px-4">
                <div class="flex flex-col md:flex-row gap-16 items-center">
                    <Reveal motion=Motion::slide(-50).duration(800) on_mount=true class="w-full md:w-1/2 relative">
                        <div class="aspect-square rounded-3xl overflow-hidden shadow-lg glow-gradient">
                            <img src="/images/testingapp.png" alt="About Us" class="w-full h-full object-cover"/>
                        </div>
                        <Reveal
                            motion=Motion::pop(0.8).duration(500).delay(400)
                            on_mount=true
                            class="absolute -bottom-8 -right-8 bg-white p-6 rounded-3xl shadow-lg max-w-xs glow-red"
                        >
                            <p class="text-5xl font-bold text-red-yellow-gradient">{ badge }</p>
                            <p class="text-gray-600">"Years of Experience"</p>
                        </Reveal>
                    </Reveal>

                    <Reveal motion=Motion::slide(50).duration(800).delay(200) on_mount=true class="w-full md:w-1/2">
                        <h1 class=format!("text-4xl md:text-5xl mb-6 {HEADING}")>{ format!("About {COMPANY}") }</h1>
                        <p class="text-gray-600 mb-6">
                            { format!(
                                "Established in {}, CROSSFIRE is a multidisciplinary fire safety consultancy and \
                                 service provider based in Hyderabad. Our team of experienced professionals combines \
                                 technical expertise with practical knowledge to deliver reliable fire protection \
                                 systems that adhere to the highest safety standards.",
                                config::FOUNDED,
                            ) }
                        </p>
                        <p class="text-gray-600 mb-8">
                            "We follow Indian and international fire safety codes such as BIS Standards, NBC of \
                             India, and Local Fire Department Regulations to ensure comprehensive protection for \
                             all types of buildings and facilities."
                        </p>
                        <A href="/contact" attr:class=CTA>"Get in Touch"</A>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[component]
fn MissionVision() -> impl IntoView {
    let card = "bg-white p-8 rounded-3xl shadow-sm border border-gray-100 glow-card relative overflow-hidden";

    view! {
        <section class="py-16 md:py-24">
            <div class="container mx-auto px-4">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-16">
                    <Reveal motion=Motion::fade_up(30).duration(600) class=card>
                        <div class="absolute -top-24 -right-24 w-48 h-48 rounded-full bg-primary-600/10 blur-xl"></div>
                        <div class="relative z-10">
                            <h2 class="text-3xl font-bold mb-6 crossfire-border pb-3">"Mission"</h2>
                            <p class="text-gray-600 mb-6">
                                "Our mission is to provide multidisciplinary fire safety solutions through technical \
                                 expertise, practical implementation, and adherence to national and international \
                                 standards. We are committed to excellence, integrity, and building long-term trust \
                                 by delivering every project with quality, compliance, and zero conflict."
                            </p>
                        </div>
                    </Reveal>
                    <Reveal motion=Motion::fade_up(30).duration(600).delay(200) class=card>
                        <div class="absolute -top-24 -left-24 w-48 h-48 rounded-full bg-secondary-400/10 blur-xl"></div>
                        <div class="relative z-10">
                            <h2 class="text-3xl font-bold mb-6 crossfire-border pb-3">"Vision"</h2>
                            <p class="text-gray-600 mb-6">
                                "To be the most trusted and respected fire safety partner in India, delivering \
                                 innovative, compliant, and reliable protection systems that safeguard lives and \
                                 property across all sectors."
                            </p>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[component]
fn CoreValues() -> impl IntoView {
    let values = VALUES
        .iter()
        .enumerate()
        .map(|(i, value)| {
            view! {
                <Reveal
                    motion=Motion::fade_up(30).duration(500).stagger(i, 100)
                    class="bg-white p-8 rounded-3xl shadow-sm border border-gray-100 hover-scale glow-card"
                >
                    <div class="flex items-center gap-3 mb-4">
                        <div class="h-10 w-10 rounded-full red-yellow-gradient flex items-center justify-center">
                            <Glyph icon=Icon::CheckCircle class="h-5 w-5 text-white"/>
                        </div>
                        <h3 class="text-xl font-semibold">{ value.title }</h3>
                    </div>
                    <p class="text-gray-600">{ value.description }</p>
                </Reveal>
            }
        })
        .collect_view();

    view! {
        <section class="py-16 md:py-24 bg-light-gray bg-pattern relative overflow-hidden">
            <CornerGlow gradient=true/>
            <div class="container mx-auto px-4 relative z-10">
                <Reveal motion=Motion::fade_up(20).duration(600)>
                    <h2 class=format!("text-3xl md:text-4xl text-center mb-6 {HEADING}")>"Core Values"</h2>
                    <p class="text-gray-600 text-center max-w-2xl mx-auto mb-16">
                        "Our fundamental beliefs that guide our actions, unite our teams, and define our brand."
                    </p>
                </Reveal>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">{ values }</div>
            </div>
        </section>
    }
}

#[component]
fn Timeline() -> impl IntoView {
    let entries = EXPERIENCE
        .iter()
        .map(|entry| {
            view! {
                <Reveal motion=Motion::slide(-50).duration(800) class="experience-item flex flex-col md:flex-row gap-8 relative">
                    <div class="hidden md:block absolute left-1/4 top-0 w-4 h-4 rounded-full red-yellow-gradient -translate-x-1/2"></div>
                    <div class="md:w-1/4">
                        <div class="text-xl font-semibold text-red-yellow-gradient">{ entry.years }</div>
                    </div>
                    <div class="md:w-3/4 pl-0 md:pl-8 border-l-0 md:border-l-2 md:border-gray-200">
                        <h3 class="text-2xl font-semibold mb-2 highlight-text">{ entry.position }</h3>
                        <h4 class="text-xl text-gray-600 mb-4">{ entry.company }</h4>
                        <p class="text-gray-600">{ entry.description }</p>
                    </div>
                </Reveal>
            }
        })
        .collect_view();

    view! {
        <section class="py-16 md:py-24">
            <div class="container mx-auto px-4">
                <Reveal motion=Motion::fade_up(20).duration(600)>
                    <h2 class=format!("text-3xl md:text-4xl mb-6 text-center {HEADING}")>"Experience"</h2>
                    <p class="text-gray-600 text-center max-w-2xl mx-auto mb-16">
                        "A journey of growth, innovation, and impactful digital solutions."
                    </p>
                </Reveal>

                <div class="space-y-12 relative">
                    <div class="hidden md:block absolute left-1/4 top-0 bottom-0 w-0.5 bg-gradient-to-b from-primary-600 to-secondary-400 -translate-x-1/2"></div>
                    { entries }
                </div>

                <Reveal motion=Motion::fade_up(20).duration(600).delay(300) class="mt-16 text-center">
                    <A href="/contact" attr:class=CTA>
                        "Work with me" <Glyph icon=Icon::ArrowRight/>
                    </A>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <Title text=format!("About | {COMPANY}")/>
        <Intro/>
        <MissionVision/>
        <CoreValues/>
        <Timeline/>
    }
}
