use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use super::CTA;
use crate::components::icon::{Glyph, Icon};
use crate::config::COMPANY;
use crate::routes::Page;

/// Where "Back to Home" leads.
fn back_link() -> &'static str {
    Page::Home.path()
}

#[component]
pub fn NotFound() -> impl IntoView {
    log::warn!("no route for {}", leptos_router::hooks::use_location().pathname.get_untracked());

    view! {
        <Title text=format!("Page Not Found | {COMPANY}")/>
        <div class="min-h-[70vh] flex items-center justify-center">
            <div class="container max-w-lg px-4 py-16 text-center">
                <h1 class="text-9xl font-bold text-primary-600">"404"</h1>
                <h2 class="text-3xl font-semibold mt-6 mb-4">"Page Not Found"</h2>
                <p class="text-gray-600 mb-8">
                    "Sorry, the page you are looking for doesn't exist or has been moved."
                </p>
                <A href=back_link() attr:class=CTA>
                    <Glyph icon=Icon::ArrowLeft/> "Back to Home"
                </A>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_link_points_at_root() {
        assert_eq!(back_link(), "/");
        assert_eq!(Page::from_path(back_link()), Some(Page::Home));
    }
}
