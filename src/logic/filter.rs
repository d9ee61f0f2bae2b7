//! Per-record filter predicates.

use crate::lang;
use crate::state::{DecoratedSource, FilterState, RatingFilter, SourceRecord};

/// What: Decide whether one record is visible under the current filters.
///
/// Inputs:
/// - `d`: Decorated record.
/// - `filters`: Current filter state (all fields always populated).
///
/// Output:
/// - `true` when the language, rating, and text predicates all hold.
///
/// Details:
/// - Pure and total: no reachable state/record combination errors or panics.
/// - Each predicate is independently monotonic — widening one constraint to
///   "no constraint" can only add visible records.
#[must_use]
pub fn is_visible(d: &DecoratedSource, filters: &FilterState) -> bool {
    language_matches(d, &filters.language)
        && rating_matches(filters.rating, d.record.content_rating)
        && query_matches(&d.record, &filters.query)
}

/// What: Language predicate as an explicit decision table.
///
/// Inputs:
/// - `d`: Decorated record (label plus raw codes).
/// - `selected`: Selected label, or empty for no constraint.
///
/// Output:
/// - `true` when the record belongs under the selected language.
///
/// Details:
/// - The last arm is the deliberate widening rule: a concrete selection also
///   surfaces multi-language records whose raw codes contain the selection's
///   reverse-mapped code. The converse does not hold — selecting
///   `Multi-Language` never surfaces single-language records.
#[must_use]
pub fn language_matches(d: &DecoratedSource, selected: &str) -> bool {
    match (selected, d.language_label.as_str()) {
        // No constraint.
        ("", _) => true,
        // Exact label match, including Multi-Language == Multi-Language.
        (sel, label) if sel == label => true,
        // Widening: concrete selection vs. a multi-language record.
        (sel, lang::MULTI_LABEL) => lang::code_for_label(sel)
            .is_some_and(|code| d.record.languages.iter().any(|c| c == code)),
        _ => false,
    }
}

/// What: Rating predicate over the raw feed integer.
///
/// Inputs:
/// - `filter`: Selected rating tier.
/// - `rating`: Raw `contentRating` value, `None` when absent.
///
/// Output:
/// - `true` when the record's rating satisfies the selected tier.
///
/// Details:
/// - Out-of-range integers satisfy only `Any`; they are neither safe nor a
///   known mature tier.
#[must_use]
pub const fn rating_matches(filter: RatingFilter, rating: Option<i64>) -> bool {
    match filter {
        RatingFilter::Any => true,
        RatingFilter::Safe => matches!(rating, None | Some(0)),
        RatingFilter::ContainsNsfw => matches!(rating, Some(1)),
        RatingFilter::Nsfw => matches!(rating, Some(2)),
    }
}

/// What: Case-insensitive substring predicate over name, aliases, and URL.
///
/// Inputs:
/// - `record`: Raw record.
/// - `query`: Free-text query; surrounding whitespace is ignored.
///
/// Output:
/// - `true` for an empty query, or when the query occurs in the name, any
///   alias, or the base URL.
///
/// Details:
/// - Missing optional fields never match; they are not errors.
#[must_use]
pub fn query_matches(record: &SourceRecord, query: &str) -> bool {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return true;
    }
    let hit = |s: &str| s.to_lowercase().contains(&q);
    hit(&record.name)
        || record.alt_names.iter().any(|alt| hit(alt))
        || record.base_url.as_deref().is_some_and(hit)
}
