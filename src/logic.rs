//! Filtering and visibility logic.
//!
//! The filter engine is a pure per-record predicate over the current
//! [`crate::state::FilterState`]; the visibility projection applies it to
//! the whole fixed group structure on every filter change.

pub mod filter;
pub mod visibility;

pub use filter::is_visible;
pub use visibility::recompute;
