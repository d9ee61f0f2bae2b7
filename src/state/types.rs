//! Core value types used by Sourcedex state.

use crate::lang;

/// One entry of the source catalog feed.
///
/// Field names follow the feed's camelCase JSON. Everything except `name` and
/// `downloadURL` is optional; missing optional fields are treated as absent,
/// never as errors.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceRecord {
    /// Display name and primary sort/search key.
    pub name: String,
    /// Searchable aliases.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alt_names: Vec<String>,
    /// Homepage of the provider; searchable when present.
    #[serde(rename = "baseURL", default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Artifact location for the download affordance; opaque to the core.
    #[serde(rename = "downloadURL", default)]
    pub download_url: String,
    /// Icon location; opaque, display-only.
    #[serde(rename = "iconURL", default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    /// Version as published by the feed (string or number), display-only.
    #[serde(default)]
    pub version: VersionField,
    /// Raw language codes; may be empty or contain the `multi` sentinel.
    #[serde(default)]
    pub languages: Vec<String>,
    /// Content rating tier: absent/0 safe, 1 contains mature, 2 mature.
    ///
    /// Stored as the raw integer so out-of-range values match no restrictive
    /// rating filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_rating: Option<i64>,
}

/// Feed version field accepting either a JSON string or a number.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum VersionField {
    /// Version published as a string (e.g., "1.4.2").
    Text(String),
    /// Version published as a bare number (e.g., 3).
    Number(serde_json::Number),
}

impl Default for VersionField {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl std::fmt::Display for VersionField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

/// A source record decorated with derived classification keys.
///
/// Produced once by normalization after load; the raw record is kept intact
/// for rendering and for the raw-code widening rule of the language filter.
#[derive(Clone, Debug)]
pub struct DecoratedSource {
    /// The unmodified feed record.
    pub record: SourceRecord,
    /// Resolved display label (see [`crate::lang::resolve_label`]).
    pub language_label: String,
    /// Group sort key: empty for `Multi-Language` so it orders first,
    /// otherwise the lowercased label.
    pub sort_key: String,
}

/// One rendered language section: a label and its records in display order.
#[derive(Clone, Debug)]
pub struct LanguageGroup {
    /// Resolved language label shared by all records in the group.
    pub label: String,
    /// Records sorted ascending by name.
    pub records: Vec<DecoratedSource>,
}

/// Content-rating filter selection.
///
/// `Any` means "no constraint"; unknown config keys also parse to `Any` so
/// the filter engine stays total over whatever the input layer produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RatingFilter {
    /// No rating constraint.
    #[default]
    Any,
    /// Only records with an absent or zero rating.
    Safe,
    /// Only records rated 1 (contains mature content).
    ContainsNsfw,
    /// Only records rated 2 (predominantly mature content).
    Nsfw,
}

impl RatingFilter {
    /// Return the string key used by the input layer for this filter.
    ///
    /// Inputs: none
    ///
    /// Output: Static key string (empty for `Any`).
    #[must_use]
    pub const fn as_config_key(self) -> &'static str {
        match self {
            Self::Any => "",
            Self::Safe => "safe",
            Self::ContainsNsfw => "contains-nsfw",
            Self::Nsfw => "nsfw",
        }
    }

    /// Parse a rating filter from its input-layer key.
    ///
    /// Inputs: `s` key string (case-insensitive).
    ///
    /// Output: Matching variant; unknown keys fall back to `Any`.
    #[must_use]
    pub fn from_config_key(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "safe" => Self::Safe,
            "contains-nsfw" => Self::ContainsNsfw,
            "nsfw" => Self::Nsfw,
            _ => Self::Any,
        }
    }

    /// Advance to the next filter value in cycle order.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Any => Self::Safe,
            Self::Safe => Self::ContainsNsfw,
            Self::ContainsNsfw => Self::Nsfw,
            Self::Nsfw => Self::Any,
        }
    }

    /// Short human label for the status line.
    #[must_use]
    pub const fn display(self) -> &'static str {
        match self {
            Self::Any => "All",
            Self::Safe => "Safe",
            Self::ContainsNsfw => "Contains NSFW",
            Self::Nsfw => "NSFW",
        }
    }
}

/// Current combination of active filter constraints.
///
/// All three fields always hold a value; empty string / [`RatingFilter::Any`]
/// means "no constraint", so the filter engine is total over this space.
#[derive(Clone, Debug, Default)]
pub struct FilterState {
    /// Free-text query, matched as a case-insensitive substring.
    pub query: String,
    /// Selected language label, or empty for all languages.
    pub language: String,
    /// Selected content-rating tier.
    pub rating: RatingFilter,
}

/// Result of one visibility pass over the fixed group structure.
///
/// Rows are index-aligned with the groups and records they were computed
/// from; the render layer needs nothing else to reconcile show/hide state.
#[derive(Clone, Debug, Default)]
pub struct VisibilityProjection {
    /// Per-group rows of per-record visibility flags.
    pub per_record: Vec<Vec<bool>>,
    /// Number of visible records per group.
    pub group_counts: Vec<usize>,
    /// Total visible records across all groups.
    pub total: usize,
}

impl VisibilityProjection {
    /// Whether a whole group should be shown (it has at least one visible record).
    #[must_use]
    pub fn group_visible(&self, group: usize) -> bool {
        self.group_counts.get(group).copied().unwrap_or(0) > 0
    }

    /// Whether one record should be shown.
    #[must_use]
    pub fn record_visible(&self, group: usize, index: usize) -> bool {
        self.per_record
            .get(group)
            .and_then(|row| row.get(index))
            .copied()
            .unwrap_or(false)
    }
}

/// Catalog load lifecycle.
///
/// The two terminal states are final: no filtering runs after entering them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// Feed request still in flight.
    Loading,
    /// Catalog normalized and grouped; filtering active.
    Loaded,
    /// Feed had a missing, non-array, or empty `sources` field.
    NoSources,
    /// Feed fetch or parse failed.
    Error,
}

impl SourceRecord {
    /// Resolve this record's language display label.
    #[must_use]
    pub fn language_label(&self) -> String {
        lang::resolve_label(&self.languages)
    }
}
