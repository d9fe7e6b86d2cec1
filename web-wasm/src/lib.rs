//! MedAI Consensus Web Client (Leptos + WASM)

mod anim;
mod api;
mod app;
mod components;
mod export;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}
