use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::{IntoView, component, view};

use super::footer::Footer;
use super::navbar::Navbar;
use crate::routes::RoutesMenu;

/// Header and footer around whichever page the router picked.
#[component]
pub fn Layout() -> impl IntoView {
    view! {
        <div class="flex min-h-screen flex-col bg-white">
            <Navbar/>
            <main class="flex-grow">
                <RoutesMenu/>
            </main>
            <Footer/>
        </div>
    }
}
