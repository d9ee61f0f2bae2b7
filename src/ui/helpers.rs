//! Pure helpers between the projection and the rendered list.
//!
//! Everything here is free of terminal handles so the row model can be unit
//! tested without a backend.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::state::{AppState, DecoratedSource, LanguageGroup, VersionField, VisibilityProjection};

/// One row of the rendered catalog list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlatRow {
    /// Language-section header for `groups[group]`.
    Header {
        /// Group index into the fixed group structure.
        group: usize,
    },
    /// A visible source row at `groups[group].records[index]`.
    Record {
        /// Group index into the fixed group structure.
        group: usize,
        /// Record index within the group.
        index: usize,
    },
}

/// What: Flatten groups plus projection into the rows actually rendered.
///
/// Inputs:
/// - `groups`: Fixed group structure.
/// - `projection`: Current visibility pass.
///
/// Output:
/// - Header and record rows in render order; hidden records are skipped and
///   a group with no visible records is dropped wholesale, header included.
#[must_use]
pub fn flatten_visible(
    groups: &[LanguageGroup],
    projection: &VisibilityProjection,
) -> Vec<FlatRow> {
    let mut rows = Vec::new();
    for (gi, group) in groups.iter().enumerate() {
        if !projection.group_visible(gi) {
            continue;
        }
        rows.push(FlatRow::Header { group: gi });
        for ri in 0..group.records.len() {
            if projection.record_visible(gi, ri) {
                rows.push(FlatRow::Record {
                    group: gi,
                    index: ri,
                });
            }
        }
    }
    rows
}

/// What: Map the selection (nth visible record) to its flat row index.
///
/// Inputs:
/// - `rows`: Output of [`flatten_visible`].
/// - `selected`: Index among visible record rows only.
///
/// Output:
/// - Flat index usable with the rendered list, or `None` when out of range.
#[must_use]
pub fn flat_index_of_selected(rows: &[FlatRow], selected: usize) -> Option<usize> {
    rows.iter()
        .enumerate()
        .filter(|(_, row)| matches!(row, FlatRow::Record { .. }))
        .nth(selected)
        .map(|(i, _)| i)
}

/// What: Resolve the currently selected record, if any.
///
/// Inputs:
/// - `app`: Application state.
///
/// Output:
/// - The decorated record under the selection cursor, or `None` when the
///   visible set is empty.
#[must_use]
pub fn selected_record(app: &AppState) -> Option<&DecoratedSource> {
    flatten_visible(&app.groups, &app.projection)
        .iter()
        .filter_map(|row| match row {
            FlatRow::Record { group, index } => Some((*group, *index)),
            FlatRow::Header { .. } => None,
        })
        .nth(app.selected)
        .and_then(|(gi, ri)| app.groups.get(gi)?.records.get(ri))
}

/// What: Badge and tooltip text for a record's content rating.
///
/// Inputs:
/// - `rating`: Raw `contentRating` value.
///
/// Output:
/// - `Some((badge, tooltip))` for ratings 1 and 2; `None` otherwise.
#[must_use]
pub const fn rating_badge(rating: Option<i64>) -> Option<(&'static str, &'static str)> {
    match rating {
        Some(1) => Some(("17+", "This source contains NSFW content")),
        Some(2) => Some(("18+", "This source contains primarily NSFW content")),
        _ => None,
    }
}

/// Render the feed version for display (`v` prefix, string and number forms).
#[must_use]
pub fn version_text(version: &VersionField) -> String {
    format!("v{version}")
}

/// What: Truncate a string to a display width, appending an ellipsis.
///
/// Inputs:
/// - `s`: Text to fit.
/// - `width`: Maximum display columns.
///
/// Output:
/// - The input unchanged when it fits, otherwise a prefix plus `…` that fits.
#[must_use]
pub fn truncate_to_width(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0usize;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width.saturating_sub(1) {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{group_by_language, normalize};
    use crate::logic::recompute;
    use crate::state::{FilterState, SourceRecord};

    fn record(name: &str, languages: &[&str], rating: Option<i64>) -> SourceRecord {
        SourceRecord {
            name: name.to_string(),
            languages: languages.iter().map(|s| (*s).to_string()).collect(),
            content_rating: rating,
            ..Default::default()
        }
    }

    fn sample() -> Vec<LanguageGroup> {
        group_by_language(normalize(&[
            record("Alpha", &["multi"], None),
            record("Zeta", &["en"], Some(2)),
            record("Beta", &["en"], None),
        ]))
    }

    #[test]
    /// What: Flattening interleaves headers and visible records in order
    ///
    /// - Input: Unfiltered projection over two groups
    /// - Output: Header, record, header, record, record
    fn ui_helpers_flatten_unfiltered() {
        let groups = sample();
        let p = recompute(&groups, &FilterState::default());
        let rows = flatten_visible(&groups, &p);
        assert_eq!(
            rows,
            vec![
                FlatRow::Header { group: 0 },
                FlatRow::Record { group: 0, index: 0 },
                FlatRow::Header { group: 1 },
                FlatRow::Record { group: 1, index: 0 },
                FlatRow::Record { group: 1, index: 1 },
            ]
        );
    }

    #[test]
    /// What: Hidden groups drop their header row entirely
    ///
    /// - Input: Query matching only "Beta"
    /// - Output: One header (English) and one record
    fn ui_helpers_flatten_hides_empty_groups() {
        let groups = sample();
        let filters = FilterState {
            query: "beta".to_string(),
            ..Default::default()
        };
        let p = recompute(&groups, &filters);
        let rows = flatten_visible(&groups, &p);
        assert_eq!(
            rows,
            vec![
                FlatRow::Header { group: 1 },
                FlatRow::Record { group: 1, index: 0 },
            ]
        );
    }

    #[test]
    /// What: Selection maps over record rows, skipping headers
    ///
    /// - Input: Unfiltered rows; selections 0, 2, 3
    /// - Output: Flat indices 1 and 4; None past the end
    fn ui_helpers_selected_flat_index() {
        let groups = sample();
        let p = recompute(&groups, &FilterState::default());
        let rows = flatten_visible(&groups, &p);
        assert_eq!(flat_index_of_selected(&rows, 0), Some(1));
        assert_eq!(flat_index_of_selected(&rows, 2), Some(4));
        assert_eq!(flat_index_of_selected(&rows, 3), None);
    }

    #[test]
    /// What: Rating badges only exist for tiers 1 and 2
    ///
    /// - Input: None, 0, 1, 2, 3
    /// - Output: 17+/18+ with tooltips; None elsewhere
    fn ui_helpers_rating_badges() {
        assert_eq!(rating_badge(None), None);
        assert_eq!(rating_badge(Some(0)), None);
        assert_eq!(rating_badge(Some(3)), None);
        let (b1, t1) = rating_badge(Some(1)).expect("tier 1 badge");
        assert_eq!(b1, "17+");
        assert!(t1.contains("NSFW"));
        let (b2, t2) = rating_badge(Some(2)).expect("tier 2 badge");
        assert_eq!(b2, "18+");
        assert!(t2.contains("primarily"));
    }

    #[test]
    /// What: Truncation keeps short strings and ellipsizes long ones
    ///
    /// - Input: Short and long strings at width 8
    /// - Output: Unchanged short string; truncated long string ending in …
    fn ui_helpers_truncate() {
        assert_eq!(truncate_to_width("short", 8), "short");
        let cut = truncate_to_width("a-very-long-url.example", 8);
        assert!(cut.ends_with('…'));
        assert!(cut.width() <= 8);
    }
}
