pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod models;
pub mod pages;
pub mod services;
pub mod state;

// Re-export for convenience
pub use app::App;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
