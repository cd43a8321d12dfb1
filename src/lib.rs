//! # pawfinder
//!
//! Leptos + WASM frontend for the PawFinder lost-and-found pet application:
//! client-side routing with an authentication guard, a reusable remote data
//! hook for authenticated JSON fetches, and one page component per route.
//!
//! The session store is provided as reactive context at the app root; the
//! hook and the route guard both read it, pages mutate it through its
//! sign-in/sign-out operations.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;

/// WASM entry point: wires up panic reporting and console logging, then
/// hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
