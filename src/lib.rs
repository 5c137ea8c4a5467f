//! # nia-chat-widget
//!
//! Leptos + WASM chat widget for the Nia chat endpoint.
//!
//! The widget renders user and bot turns, shows a typing indicator while a
//! reply is pending, and posts each message to `POST {api_base}/{thread_id}`,
//! echoing back the thread id the server assigns.
//!
//! Only the `components` and `mount` layers touch the DOM; `net` and `state`
//! are plain Rust and carry the unit tests.

pub mod components;
pub mod config;
#[cfg(feature = "csr")]
pub mod mount;
pub mod net;
pub mod state;
pub mod util;

/// WASM start hook: install the panic hook and console logger, then mount.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger already set: {e}");
    }
    mount::mount_widget();
}
