//! Chatline Web Client
//!
//! Single-page chat client built with Leptos (WASM).
//!
//! # Routes
//!
//! - `/` - Log in
//! - `/create-user` - Sign up
//! - `/chat` - Channel list with no channel open
//! - `/chat/:channel_id` - Channel list with a channel open
//!
//! # Architecture
//!
//! A client-side rendered (CSR) Leptos application compiled to WebAssembly.
//! It talks to the Chatline API over plain HTTP and polls for new messages.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
