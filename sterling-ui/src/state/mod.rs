//! State Management
//!
//! Global application state and the browser implementations of the core's
//! storage and clock traits.

pub mod clock;
pub mod global;
pub mod storage;
