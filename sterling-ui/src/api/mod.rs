//! API access
//!
//! Talks to the clinic's backend services from the browser.

pub mod client;

pub use client::GlooCredentialVerifier;
