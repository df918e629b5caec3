//! # client
//!
//! Leptos + WASM frontend for the portfolio blog and its chat widget.
//!
//! This crate contains the static post content, the markdown renderer,
//! routing, page chrome and the chat widget with its session protocol.
//! Built with `ssr` it is rendered by the `server` crate; built with
//! `hydrate` it runs in the browser.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: attach the app to the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
