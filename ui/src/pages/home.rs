use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_use::use_window_scroll;

use super::{CTA, CTA_OUTLINE, HEADING};
use crate::components::decor::{FloatingBubbles, GradientText};
use crate::components::icon::{Glyph, Icon};
use crate::components::motion::{Motion, Reveal, parallax_percent, scroll_progress};
use crate::config::{self, COMPANY, FOUNDED, TAGLINE};
use crate::content::{BRANDS, SECTORS, STATS};

/// Current parallax drift in percent, recomputed on scroll.
fn use_parallax() -> Memo<f64> {
    let (_, scroll_y) = use_window_scroll();

    Memo::new(move |_| {
        let y = scroll_y.get();
        let doc_height = document()
            .document_element()
            .map(|el| el.scroll_height() as f64)
            .unwrap_or_default();
        let viewport = window()
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or_default();
        parallax_percent(scroll_progress(y, doc_height, viewport))
    })
}

#[component]
fn Hero() -> impl IntoView {
    let drift = use_parallax();
    let drifting = move |pos: &'static str| {
        move || format!("{pos} transform: translateY({:.2}%);", drift.get())
    };

    view! {
        <section class="relative min-h-screen flex flex-col items-center justify-center overflow-hidden bg-dots">
            <div class="absolute inset-0 -z-10">
                <div
                    class="floating-object absolute w-64 h-64 rounded-full red-yellow-gradient opacity-20 blur-3xl"
                    style=drifting("top: 10%; left: 10%;")
                ></div>
                <div
                    class="floating-object absolute w-80 h-80 rounded-full red-yellow-gradient opacity-20 blur-3xl"
                    style=drifting("top: 60%; right: 5%;")
                ></div>
                <div
                    class="floating-object absolute w-32 h-32 rounded-full bg-primary-600/30 blur-xl"
                    style="top: 30%; right: 20%; animation-delay: 1s;"
                ></div>
                <div
                    class="floating-object absolute w-40 h-40 rounded-full bg-secondary-400/30 blur-xl"
                    style="bottom: 15%; left: 15%; animation-delay: 1.5s;"
                ></div>
            </div>
            <FloatingBubbles/>

            <div class="container mx-auto px-4 z-10 text-center">
                <Reveal motion=Motion::fade_up(50).duration(800) on_mount=true>
                    <Reveal motion=Motion::pop(0.0).duration(500) on_mount=true class="mb-8 flex justify-center">
                        <div class="h-20 w-20 rounded-full red-yellow-gradient flex items-center justify-center glow-gradient">
                            <Glyph icon=Icon::Flame class="h-10 w-10 text-white"/>
                        </div>
                    </Reveal>

                    <Reveal motion=Motion::fade_up(50).duration(1000).delay(200) on_mount=true>
                        <h1 class=format!("text-4xl md:text-5xl lg:text-7xl mb-6 {HEADING}")>
                            { COMPANY.to_uppercase() }
                        </h1>
                    </Reveal>
                    <Reveal motion=Motion::fade().duration(1000).delay(300) on_mount=true>
                        <h2 class="text-3xl md:text-4xl text-red-yellow-gradient mb-4 crossfire-header">
                            { TAGLINE }
                        </h2>
                    </Reveal>
                    <Reveal motion=Motion::fade().duration(1000).delay(500) on_mount=true>
                        <p class="text-xl text-gray-600 max-w-2xl mx-auto mb-12">
                            { format!(
                                "Fire Protection Engineers & Consultants - Providing comprehensive fire safety solutions since {FOUNDED}"
                            ) }
                        </p>
                    </Reveal>

                    <Reveal
                        motion=Motion::fade_up(20).duration(800).delay(800)
                        on_mount=true
                        class="flex flex-col sm:flex-row gap-4 justify-center mb-16"
                    >
                        <A href="/services" attr:class=CTA>
                            "Choose Services" <Glyph icon=Icon::ArrowRight/>
                        </A>
                    </Reveal>

                    <div class="hidden md:block absolute bottom-10 left-1/2 -translate-x-1/2 animate-bob">
                        <div class="w-6 h-10 rounded-full border-2 border-gray-400 flex justify-center pt-2">
                            <div class="w-1 h-2 bg-gray-400 rounded-full animate-bob-small"></div>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn AboutBrief() -> impl IntoView {
    let stats = STATS
        .iter()
        .enumerate()
        .map(|(i, stat)| {
            view! {
                <div class="stat-item text-center p-6">
                    <Reveal motion=Motion::pop(0.9).duration(500).stagger(i, 100) class="relative">
                        <div class="absolute inset-0 red-yellow-gradient rounded-full opacity-10 blur-xl scale-150"></div>
                        <h3 class="text-5xl font-bold text-red-yellow-gradient mb-2 relative z-10 text-glow">
                            { stat.number }
                        </h3>
                        <p class="text-gray-600">{ stat.label }</p>
                    </Reveal>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="py-16 md:py-24 bg-white">
            <div class="container mx-auto px-4">
                <div class="flex flex-col md:flex-row gap-16 items-center">
                    <Reveal motion=Motion::slide(-50).duration(800) class="w-full md:w-1/2">
                        <h2 class="text-4xl md:text-5xl mb-6 crossfire-border pb-3">
                            <GradientText class="text-glow crossfire-header">"ABOUT"</GradientText>
                        </h2>
                        <p class="text-gray-600 mb-6">
                            "We are a multidisciplinary fire safety consultancy and service provider offering \
                             comprehensive solutions that help businesses and institutions maintain the highest \
                             levels of fire safety. Our team combines technical expertise with practical knowledge \
                             to deliver reliable fire protection systems."
                        </p>
                        <p class="text-gray-600 mb-8">
                            "With a perfect track record of completed projects and no confrontations or litigation \
                             to date, we have built a reputation for reliability, quality, and exceptional service \
                             in the fire safety industry."
                        </p>
                        <A href="/about" attr:class=CTA_OUTLINE>
                            "More" <Glyph icon=Icon::ArrowRight/>
                        </A>
                    </Reveal>

                    <div class="w-full md:w-1/2">
                        <div class="grid grid-cols-1 md:grid-cols-3 gap-8">{ stats }</div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Sectors() -> impl IntoView {
    let cards = SECTORS
        .iter()
        .enumerate()
        .map(|(i, sector)| {
            let (corner, tint) = if i % 2 == 0 {
                ("-right-24", "bg-primary-600/10")
            } else {
                ("-left-24", "bg-secondary-400/10")
            };

            view! {
                <Reveal
                    motion=Motion::fade_up(30).duration(500).stagger(i, 100)
                    class="service-item bg-white p-8 rounded-3xl shadow-sm border border-gray-100 glow-card \
                           relative overflow-hidden transition-all hover:-translate-y-1 hover:shadow-lg"
                >
                    <div class=format!("absolute -top-24 {corner} w-48 h-48 rounded-full {tint} blur-xl")></div>
                    <div class="relative z-10">
                        <div class="h-12 w-12 rounded-2xl red-yellow-gradient text-white flex items-center justify-center mb-6 glow-gradient">
                            <Glyph icon=sector.icon class="h-6 w-6"/>
                        </div>
                        <h3 class="text-xl font-semibold mb-3 crossfire-border pb-2">{ sector.title }</h3>
                        <p class="text-gray-600 mb-6">{ sector.description }</p>
                        <A href="/services" attr:class="text-primary-600 font-medium flex items-center gap-2 group">
                            "Learn more"
                            <Glyph icon=Icon::ArrowRight class="h-4 w-4 group-hover:translate-x-1 transition-transform"/>
                        </A>
                    </div>
                </Reveal>
            }
        })
        .collect_view();

    view! {
        <section class="py-24 bg-light-gray bg-pattern relative overflow-hidden">
            <super::CornerGlow/>
            <div class="container mx-auto px-4 relative z-10">
                <Reveal motion=Motion::fade_up(20).duration(500)>
                    <h2 class=format!("text-4xl md:text-5xl text-center mb-6 {HEADING}")>"TO WHOM DO WE CATER"</h2>
                </Reveal>
                <Reveal motion=Motion::fade_up(20).duration(500).delay(200)>
                    <p class="text-center text-lg text-gray-600 mb-16 max-w-2xl mx-auto">
                        "Explore our range of fire safety solutions, from residential protection to \
                         industrial-grade systems, designed to safeguard lives and property while ensuring \
                         full compliance and peace of mind."
                    </p>
                </Reveal>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">{ cards }</div>
            </div>
        </section>
    }
}

#[component]
fn Brands() -> impl IntoView {
    let brands = BRANDS
        .iter()
        .enumerate()
        .map(|(i, brand)| {
            view! {
                <Reveal motion=Motion::fade_up(20).duration(500).stagger(i, 100) class="flex items-center justify-center">
                    <div class="h-16 w-16 rounded-full bg-white shadow-sm flex items-center justify-center glow-card">
                        <span class="text-xl font-semibold text-gray-800">{ brand.monogram }</span>
                    </div>
                    <span class="ml-4 font-medium hidden md:block">{ brand.name }</span>
                </Reveal>
            }
        })
        .collect_view();

    view! {
        <section class="py-16 bg-white">
            <div class="container mx-auto px-4">
                <Reveal motion=Motion::fade_up(20).duration(500)>
                    <h3 class="text-center text-lg text-gray-500 mb-10">"Trusted by leading brands"</h3>
                </Reveal>
                <div class="grid grid-cols-2 md:grid-cols-5 gap-8">{ brands }</div>
            </div>
        </section>
    }
}

#[component]
fn KnowMore() -> impl IntoView {
    view! {
        <section class="py-24 bg-light-gray bg-dots relative overflow-hidden">
            <super::CornerGlow gradient=true/>
            <div class="container mx-auto px-4 text-center relative z-10">
                <Reveal motion=Motion::fade_up(30).duration(700) class="max-w-4xl mx-auto">
                    <h2 class="text-4xl md:text-5xl lg:text-6xl font-bold mb-6 crossfire-header">
                        <span class="text-red-yellow-gradient text-glow">"WANT TO"</span>
                        <br/>"KNOW"<br/>
                        <span class="text-red-yellow-gradient text-glow">"MORE ABOUT US"</span>
                    </h2>
                    <p class="text-gray-600 max-w-xl mx-auto mb-10">
                        "With over two decades of expertise, CROSSFIRE has earned a trusted name in fire safety. \
                         From technical consultancy to end-to-end protection systems, we ensure compliance with \
                         national and international standards, delivering safety without compromise."
                    </p>
                    <A href="/about" attr:class=CTA>
                        "Learn More" <Glyph icon=Icon::ArrowRight/>
                    </A>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn ContactCta() -> impl IntoView {
    view! {
        <section class="py-24 bg-white">
            <div class="container mx-auto px-4 text-center">
                <Reveal motion=Motion::fade_up(30).duration(700)>
                    <h2 class=format!("text-3xl md:text-4xl mb-6 {HEADING}")>"Tell me about your next project"</h2>
                    <p class="text-gray-600 max-w-xl mx-auto mb-10">
                        "Let's work together to create something amazing. Reach out to discuss your ideas."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <a href=format!("mailto:{}", config::EMAIL) class=CTA>
                            <Glyph icon=Icon::Mail/> "Email Me"
                        </a>
                        <a href=format!("tel:{}", config::PHONE) class=CTA_OUTLINE>
                            <Glyph icon=Icon::Phone/> "WhatsApp"
                        </a>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <Title text=format!("{COMPANY} | Fire Protection Engineers & Consultants")/>
        <Hero/>
        <AboutBrief/>
        <Sectors/>
        <Brands/>
        <KnowMore/>
        <ContactCta/>
    }
}
