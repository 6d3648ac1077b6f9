//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod loading;
pub mod nav;
pub mod toast;

pub use loading::InlineLoading;
pub use nav::Sidebar;
pub use toast::Toast;
