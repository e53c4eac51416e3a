#[cfg(feature = "web")]
use leptos::prelude::*;
#[cfg(feature = "web")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "web")]
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    // a second init only happens on hot reload; keep the first logger
    console_log::init_with_level(level).ok();

    log::info!("{} v{}", config::COMPANY, env!("CARGO_PKG_VERSION"));
    mount_to_body(|| view! { <App/> });
}

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod pages;
pub mod routes;
pub mod state;

pub use crate::app::App;
