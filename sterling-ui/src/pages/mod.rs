//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod login;
pub mod sections;

pub use dashboard::Dashboard;
pub use login::Login;
