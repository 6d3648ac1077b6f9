//! Sterling Dashboard
//!
//! Clinic management dashboard for Sterling Dental Clinic, built with
//! Leptos (WASM).
//!
//! # Features
//!
//! - Login gate with 24 hour sessions and "remember me"
//! - Sidebar navigation across the clinic's sections
//! - Appointment, revenue and patient overviews
//! - Self-dismissing toast notices
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Session, navigation and notice rules come from the
//! `sterling` core crate; this crate supplies the browser storage, timers
//! and HTTP client they run on.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
