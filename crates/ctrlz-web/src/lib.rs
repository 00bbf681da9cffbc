//! CTRL-Z storefront, browser side
//!
//! Built with Trunk from `index.html`. The product API base is baked in at
//! build time from `CTRLZ_BACKEND_URL`; when unset, requests go to the page
//! origin. Panics are forwarded to the browser console before the app
//! mounts.

mod app;
mod pages;
mod components;
mod api;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
