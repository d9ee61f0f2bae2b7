//! Visibility projection over the fixed group structure.

use crate::logic::filter::is_visible;
use crate::state::{FilterState, LanguageGroup, VisibilityProjection};

/// What: Re-evaluate every record against the current filters.
///
/// Inputs:
/// - `groups`: Fixed, pre-sorted language groups.
/// - `filters`: Current filter state.
///
/// Output:
/// - Fresh [`VisibilityProjection`]: per-record flags aligned with the group
///   structure, per-group visible counts, and the total count.
///
/// Details:
/// - Full pass, no incremental diffing; the catalog is small (tens to low
///   hundreds of records) and every filter change re-runs this.
/// - Never reorders anything; ordering was fixed at load time.
#[must_use]
pub fn recompute(groups: &[LanguageGroup], filters: &FilterState) -> VisibilityProjection {
    let mut per_record = Vec::with_capacity(groups.len());
    let mut group_counts = Vec::with_capacity(groups.len());
    let mut total = 0usize;
    for group in groups {
        let flags: Vec<bool> = group
            .records
            .iter()
            .map(|d| is_visible(d, filters))
            .collect();
        let count = flags.iter().filter(|v| **v).count();
        total += count;
        per_record.push(flags);
        group_counts.push(count);
    }
    VisibilityProjection {
        per_record,
        group_counts,
        total,
    }
}
