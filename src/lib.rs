//! Library entry for Sourcedex exposing core logic for integration tests.

pub mod catalog;
pub mod events;
pub mod feed;
pub mod lang;
pub mod logic;
pub mod state;
pub mod theme;
pub mod ui;
pub mod util;

// Keep `crate::ui_helpers::*` working for tests and callers.
pub use crate::ui::helpers as ui_helpers;
