//! Application state for Sourcedex.
//!
//! Submodules:
//! - [`types`]: serde-facing record types, filter state, and projection types
//! - [`app_state`]: the single mutable [`AppState`] driven by the event loop

pub mod app_state;
pub mod types;

pub use app_state::AppState;
pub use types::*;
