//! Catalog normalization and grouping.
//!
//! Turns the flat record list from the feed into the fixed render skeleton:
//! decorated records, the selectable-language option list, and ordered
//! language groups. Everything here runs exactly once after load; filter
//! changes never re-enter this module.

pub mod group;
pub mod normalize;

pub use group::group_by_language;
pub use normalize::{language_options, normalize};
