use chrono::Datelike;
use leptos::prelude::*;
use leptos_router::components::A;

use super::icon::{Glyph, Icon};
use super::motion::{Motion, Reveal};
use crate::config::{COMPANY, TAGLINE};
use crate::content::{CONTACT_CHANNELS, SOCIAL_LINKS};
use crate::routes::Page;

pub fn copyright(year: i32) -> String {
    format!("© {year} {COMPANY}. All rights reserved.")
}

#[component]
pub fn SocialLinks() -> impl IntoView {
    SOCIAL_LINKS
        .iter()
        .map(|s| {
            view! {
                <a
                    href=s.href
                    target="_blank"
                    rel="noreferrer"
                    aria-label=s.label
                    class="h-10 w-10 rounded-full bg-white shadow-sm flex items-center justify-center \
                           transition-all hover:scale-110 hover:bg-primary-600 hover:text-white"
                >
                    <Glyph icon=s.icon class="h-[18px] w-[18px]"/>
                </a>
            }
        })
        .collect_view()
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    let quick_links = Page::ALL
        .into_iter()
        .enumerate()
        .map(|(i, page)| {
            view! {
                <li>
                    <Reveal motion=Motion::slide(-10).stagger(i, 100)>
                        <A href=page.path() attr:class="text-gray-600 hover:text-primary-600 transition-colors">
                            { page.label() }
                        </A>
                    </Reveal>
                </li>
            }
        })
        .collect_view();

    let contact_lines = CONTACT_CHANNELS
        .iter()
        .map(|c| {
            let lines = c.lines.iter().map(|l| view! { <span class="block">{ *l }</span> }).collect_view();
            view! { <li>{ lines }</li> }
        })
        .collect_view();

    view! {
        <footer class="bg-light-gray py-16">
            <div class="container mx-auto px-4">
                <div class="grid grid-cols-1 gap-8 md:grid-cols-3 lg:grid-cols-4">
                    <div class="md:col-span-1 lg:col-span-2">
                        <A href="/" attr:class="flex items-center gap-2 mb-4">
                            <div class="h-10 w-10 rounded-full red-yellow-gradient flex items-center justify-center \
                                        transition-transform hover:rotate-[10deg] hover:scale-110">
                                <Glyph icon=Icon::Flame class="h-5 w-5 text-white"/>
                            </div>
                            <span class="text-xl font-bold crossfire-header">{ COMPANY }</span>
                        </A>
                        <p class="text-gray-600 mb-6 max-w-md">{ TAGLINE }"."</p>
                        <div class="flex gap-4">
                            <SocialLinks/>
                        </div>
                    </div>

                    <div>
                        <h3 class="text-base font-semibold mb-4">"Quick Links"</h3>
                        <ul class="space-y-3">{ quick_links }</ul>
                    </div>

                    <div>
                        <h3 class="text-base font-semibold mb-4">"Contact Info"</h3>
                        <Reveal motion=Motion::fade().delay(200)>
                            <ul class="space-y-3 text-gray-600">{ contact_lines }</ul>
                        </Reveal>
                    </div>
                </div>

                <Reveal motion=Motion::fade_up(20).delay(500) class="border-t border-gray-200 mt-12 pt-8 text-center text-gray-500">
                    <p>{ copyright(year) }</p>
                </Reveal>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_year_and_company() {
        assert_eq!(copyright(2026), "© 2026 CrossFire. All rights reserved.");
    }
}
