//! Record decoration and the selectable-language option list.

use std::collections::BTreeSet;

use crate::lang;
use crate::state::{DecoratedSource, SourceRecord};

/// What: Decorate raw feed records with derived classification keys.
///
/// Inputs:
/// - `records`: Flat record list as loaded from the feed.
///
/// Output:
/// - New decorated collection; the input records are cloned, never mutated.
///
/// Details:
/// - `language_label` comes from [`lang::resolve_label`].
/// - `sort_key` is empty for `Multi-Language` (so it orders before every
///   other group) and the lowercased label otherwise.
/// - Idempotent: the derived fields are a pure function of the raw record.
#[must_use]
pub fn normalize(records: &[SourceRecord]) -> Vec<DecoratedSource> {
    records
        .iter()
        .map(|record| {
            let language_label = lang::resolve_label(&record.languages);
            let sort_key = if language_label == lang::MULTI_LABEL {
                String::new()
            } else {
                language_label.to_lowercase()
            };
            DecoratedSource {
                record: record.clone(),
                language_label,
                sort_key,
            }
        })
        .collect()
}

/// What: Derive the distinct language labels offered as filter options.
///
/// Inputs:
/// - `decorated`: Normalized catalog.
///
/// Output:
/// - De-duplicated labels, `Multi-Language` first, the rest ascending.
///
/// Details:
/// - The empty "all languages" choice is the input layer's concern and is
///   not part of this list.
#[must_use]
pub fn language_options(decorated: &[DecoratedSource]) -> Vec<String> {
    let labels: BTreeSet<&str> = decorated
        .iter()
        .map(|d| d.language_label.as_str())
        .collect();
    let mut out = Vec::with_capacity(labels.len());
    if labels.contains(lang::MULTI_LABEL) {
        out.push(lang::MULTI_LABEL.to_string());
    }
    out.extend(
        labels
            .into_iter()
            .filter(|l| *l != lang::MULTI_LABEL)
            .map(str::to_string),
    );
    out
}
