//! Section Navigation
//!
//! The dashboard shows one section at a time; the controller owns which
//! one and dispatches the section's data load on every navigation.

pub mod controller;
pub mod section;

pub use controller::{NavigationController, SectionLoader, TracingLoader};
pub use section::Section;

use thiserror::Error;

/// Navigation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Unknown section: {0}")]
    UnknownSection(String),
}
