//! Grouping and ordering of the normalized catalog.

use crate::state::{DecoratedSource, LanguageGroup};

/// What: Partition normalized records into ordered language groups.
///
/// Inputs:
/// - `decorated`: Normalized catalog (ownership taken; records move into
///   their groups).
///
/// Output:
/// - Ordered `(label, records)` groups, the fixed skeleton the render layer
///   walks once.
///
/// Details:
/// - Records are first sorted ascending by `(sort_key, lowercased name)`, so
///   in-group order is purely alphabetical by name and `Multi-Language`
///   (empty sort key) always leads the stream.
/// - Groups are emitted in first-seen order of the sorted stream. Distinct
///   labels can share a sort key (an unrecognized code that lowercases to an
///   existing label), so membership is matched by label, not by contiguous
///   runs.
#[must_use]
pub fn group_by_language(mut decorated: Vec<DecoratedSource>) -> Vec<LanguageGroup> {
    decorated.sort_by(|a, b| {
        a.sort_key.cmp(&b.sort_key).then_with(|| {
            a.record
                .name
                .to_lowercase()
                .cmp(&b.record.name.to_lowercase())
        })
    });

    let mut groups: Vec<LanguageGroup> = Vec::new();
    for d in decorated {
        if let Some(g) = groups.iter_mut().find(|g| g.label == d.language_label) {
            g.records.push(d);
        } else {
            groups.push(LanguageGroup {
                label: d.language_label.clone(),
                records: vec![d],
            });
        }
    }
    groups
}
