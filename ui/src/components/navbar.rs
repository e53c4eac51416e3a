use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;
use leptos_use::use_window_scroll;

use super::icon::{Glyph, Icon};
use super::motion::{Motion, Reveal};
use crate::config::COMPANY;
use crate::routes::Page;
use crate::state::nav::NavState;

fn link_class(active: bool, mobile: bool) -> String {
    let base = if mobile {
        "text-xl font-medium transition-colors hover:text-primary-600 block py-2"
    } else {
        "text-sm font-medium transition-colors hover:text-primary-600 relative py-2"
    };
    let state = match (active, mobile) {
        (true, false) => "text-primary-600 crossfire-border",
        (true, true) => "text-primary-600",
        (false, _) => "text-gray-700",
    };
    format!("{base} {state}")
}

#[component]
fn Logo() -> impl IntoView {
    view! {
        <A href="/" attr:class="flex items-center gap-2 z-20">
            <div class="h-10 w-10 rounded-full red-yellow-gradient flex items-center justify-center \
                        glow-gradient transition-transform hover:scale-110 active:scale-95">
                <Glyph icon=Icon::Flame class="h-5 w-5 text-white"/>
            </div>
            <Reveal motion=Motion::slide(-10).duration(300).delay(100) on_mount=true>
                <span class="text-xl font-bold crossfire-header">{ COMPANY }</span>
            </Reveal>
        </A>
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let nav = RwSignal::new(NavState::default());
    let pathname = use_location().pathname;
    let (_, scroll_y) = use_window_scroll();

    Effect::new(move |_| {
        let y = scroll_y.get();
        nav.maybe_update(|n| n.on_scroll(y));
    });

    Effect::new(move |_| {
        let path = pathname.get();
        log::debug!("route -> {path}");
        nav.maybe_update(|n| n.on_route_change());
    });

    let current = Memo::new(move |_| Page::from_path(&pathname.get()));
    let close = move |_: leptos::ev::MouseEvent| nav.maybe_update(|n| n.close_menu());

    let desktop_links = Page::ALL
        .into_iter()
        .enumerate()
        .map(|(i, page)| {
            view! {
                <Reveal motion=Motion::fade_up(-10).duration(300).stagger(i, 100) on_mount=true>
                    <A
                        href=page.path()
                        attr:class=move || link_class(current.get() == Some(page), false)
                    >
                        { page.label() }
                    </A>
                </Reveal>
            }
        })
        .collect_view();

    let mobile_links = move || {
        Page::ALL
            .into_iter()
            .enumerate()
            .map(|(i, page)| {
                view! {
                    <Reveal motion=Motion::slide(20).stagger(i, 100) on_mount=true>
                        <A
                            href=page.path()
                            attr:class=move || link_class(current.get() == Some(page), true)
                            on:click=close
                        >
                            { page.label() }
                        </A>
                    </Reveal>
                }
            })
            .collect_view()
    };

    view! {
        <header class=move || format!(
            "sticky top-0 z-50 w-full transition-all duration-300 {}",
            nav.get().header_class()
        )>
            <div class="container mx-auto flex h-20 items-center justify-between px-4">
                <Logo/>

                <nav class="hidden md:flex items-center gap-8">
                    { desktop_links }
                    <Reveal
                        motion=Motion::fade_up(-10).duration(300).stagger(Page::ALL.len(), 100)
                        on_mount=true
                    >
                        <A
                            href=Page::Contact.path()
                            attr:class="inline-flex items-center rounded-full px-4 py-2 text-sm \
                                        text-white red-yellow-gradient border-0 glow-gradient"
                        >
                            "Get in Touch"
                        </A>
                    </Reveal>
                </nav>

                <button
                    class="md:hidden text-gray-700 focus:outline-none z-20 active:scale-95"
                    aria-label=move || if nav.get().menu_open { "Close menu" } else { "Open menu" }
                    on:click=move |_| nav.update(|n| n.toggle_menu())
                >
                    { move || {
                        let icon = if nav.get().menu_open { Icon::Close } else { Icon::Menu };
                        view! { <Glyph icon class="h-6 w-6"/> }
                    }}
                </button>
            </div>

            <Show when=move || nav.get().menu_open>
                <div class="md:hidden fixed inset-0 z-10 bg-white mobile-panel-enter">
                    <div class="container mx-auto px-4 py-6 pt-24">
                        <nav class="flex flex-col gap-6">
                            { mobile_links() }
                            <Reveal motion=Motion::slide(20).stagger(Page::ALL.len(), 100) on_mount=true>
                                <A
                                    href=Page::Contact.path()
                                    attr:class="mt-4 block w-full text-center rounded-full py-3 \
                                                text-white red-yellow-gradient border-0 glow-gradient"
                                    on:click=close
                                >
                                    "Get in Touch"
                                </A>
                            </Reveal>
                        </nav>
                    </div>
                </div>
            </Show>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_desktop_link_gets_underline() {
        assert!(link_class(true, false).ends_with("text-primary-600 crossfire-border"));
        assert!(link_class(false, false).ends_with("text-gray-700"));
        assert!(link_class(true, true).starts_with("text-xl"));
    }
}
