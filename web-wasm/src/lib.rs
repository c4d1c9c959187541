//! Trust WEDO Web App (Leptos + WASM)

mod app;
mod components;
mod pages;
pub mod api;
pub mod log;
pub mod store;
pub mod timer;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}
