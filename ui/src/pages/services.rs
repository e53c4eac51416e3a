use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use super::{CTA, CTA_OUTLINE, CornerGlow, CtaBand, HEADING, PageHero};
use crate::components::icon::{Glyph, Icon};
use crate::components::motion::{Motion, Reveal};
use crate::config::COMPANY;
use crate::content::{PRODUCTS, SERVICES, ServiceOffering};

/// Odd rows put the picture on the right.
fn row_class(index: usize) -> &'static str {
    if index % 2 == 1 {
        "service-item flex flex-col md:flex-row-reverse gap-16 items-center"
    } else {
        "service-item flex flex-col md:flex-row gap-16 items-center"
    }
}

#[component]
fn ServiceRow(index: usize, service: &'static ServiceOffering) -> impl IntoView {
    let tint = if index % 2 == 0 { "bg-primary-600/10" } else { "bg-secondary-400/10" };
    let features = service
        .features
        .iter()
        .map(|feature| {
            view! {
                <div class="flex items-center gap-3">
                    <div class="h-2 w-2 rounded-full red-yellow-gradient glow-red"></div>
                    <span>{ *feature }</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <Reveal motion=Motion::fade_up(50).duration(800) class=row_class(index)>
            <div class="w-full md:w-1/2">
                <div class=format!(
                    "aspect-square rounded-3xl overflow-hidden bg-light-gray flex items-center justify-center relative {tint}"
                )>
                    <div class="absolute w-40 h-40 red-yellow-gradient rounded-full opacity-20 blur-xl translate-x-1/4 -translate-y-1/4"></div>
                    <div class="absolute w-32 h-32 red-yellow-gradient rounded-full opacity-20 blur-xl bottom-0 right-0 -translate-x-1/4 translate-y-1/4"></div>
                    <div class="h-24 w-24 rounded-2xl red-yellow-gradient text-white flex items-center justify-center z-10 glow-gradient \
                                transition-transform hover:scale-110 hover:rotate-[5deg]">
                        <Glyph icon=service.icon class="h-12 w-12"/>
                    </div>
                </div>
            </div>

            <div class="w-full md:w-1/2">
                <h2 class="text-3xl font-bold mb-4 text-red-yellow-gradient crossfire-border pb-3">{ service.title }</h2>
                <p class="text-gray-600 mb-8">{ service.description }</p>
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4 mb-8">{ features }</div>
                <A href="/contact" attr:class=CTA_OUTLINE>
                    "Inquire Now" <Glyph icon=Icon::ArrowRight/>
                </A>
            </div>
        </Reveal>
    }
}

#[component]
fn Products() -> impl IntoView {
    let cards = PRODUCTS
        .iter()
        .enumerate()
        .map(|(i, product)| {
            view! {
                <Reveal
                    motion=Motion::fade_up(30).duration(500).stagger(i, 100)
                    class="bg-white p-8 rounded-3xl shadow-sm border border-gray-100 hover-scale glow-card relative overflow-hidden"
                >
                    <div class="absolute -top-24 -right-24 w-48 h-48 rounded-full bg-primary-600/10 blur-xl"></div>
                    <div class="relative z-10">
                        <div class="h-12 w-12 rounded-2xl red-yellow-gradient text-white flex items-center justify-center mb-6 glow-gradient">
                            <Glyph icon=product.icon class="h-6 w-6"/>
                        </div>
                        <h3 class="text-xl font-semibold mb-3">{ product.title }</h3>
                        <p class="text-gray-600 mb-6">{ product.description }</p>
                        <A href="/contact" attr:class="text-primary-600 font-medium flex items-center gap-2 group">
                            "Learn more"
                            <Glyph icon=Icon::ArrowRight class="h-4 w-4 group-hover:translate-x-1 transition-transform"/>
                        </A>
                    </div>
                </Reveal>
            }
        })
        .collect_view();

    view! {
        <section class="py-16 md:py-24 bg-light-gray bg-pattern relative overflow-hidden">
            <CornerGlow gradient=true/>
            <div class="container mx-auto px-4 relative z-10">
                <Reveal motion=Motion::fade_up(20).duration(600)>
                    <h2 class=format!("text-3xl md:text-4xl text-center mb-6 {HEADING}")>"Our Products"</h2>
                </Reveal>
                <Reveal motion=Motion::fade_up(20).duration(600).delay(200)>
                    <p class="text-center text-gray-600 mb-16 max-w-2xl mx-auto">
                        "Discover our high-quality fire safety products, from alarms and extinguishers to advanced \
                         detection systems, engineered to meet the highest standards of safety and performance."
                    </p>
                </Reveal>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">{ cards }</div>
            </div>
        </section>
    }
}

#[component]
pub fn Services() -> impl IntoView {
    let rows = SERVICES
        .iter()
        .enumerate()
        .map(|(index, service)| view! { <ServiceRow index service/> })
        .collect_view();

    view! {
        <Title text=format!("Services | {COMPANY}")/>
        <PageHero
            title="Services"
            blurb="Explore our comprehensive range of fire safety services, including system design, installation, \
                   inspection, and compliance, ensuring complete protection for every type of property."
        >
            <A href="/contact" attr:class=CTA>"Get Started"</A>
        </PageHero>

        <section class="py-16 md:py-24">
            <div class="container mx-auto px-4">
                <div class="grid grid-cols-1 gap-16">{ rows }</div>
            </div>
        </section>

        <Products/>

        <CtaBand
            title="Ready to start your project?"
            blurb="Let's work together to create something amazing. Reach out today to discuss your ideas and \
                   how we can bring them to life."
        >
            <A href="/contact" attr:class=CTA>"Contact Now"</A>
        </CtaBand>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_alternate_sides() {
        assert!(row_class(0).contains("md:flex-row "));
        assert!(row_class(1).contains("md:flex-row-reverse"));
        assert!(row_class(2).contains("md:flex-row "));
    }
}
