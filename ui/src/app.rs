use leptos::{IntoView, component, view};
use leptos_meta::{Meta, provide_meta_context};
use leptos_router::components::Router;

use crate::components::layout::Layout;
use crate::config::TAGLINE;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Meta name="description" content=TAGLINE/>
        <Router>
            <Layout/>
        </Router>
    }
}
