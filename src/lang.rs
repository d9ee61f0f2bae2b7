//! Language taxonomy for source records.
//!
//! A source record carries a list of raw language codes. This module owns the
//! fixed code-to-label taxonomy, the derived reverse lookup, and the single
//! classification rule ([`resolve_label`]) shared by normalization and
//! filtering. The taxonomy is built once and never changes at runtime.

/// Sentinel code a feed may use to mark a source as multi-language.
pub const MULTI_CODE: &str = "multi";

/// Display label for sources spanning more than one language.
pub const MULTI_LABEL: &str = "Multi-Language";

/// Display label for sources with no declared language.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Fixed mapping of language codes to display labels.
///
/// Codes outside this table pass through [`resolve_label`] verbatim; they are
/// never an error.
const LANG_MAP: [(&str, &str); 17] = [
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("ja", "Japanese"),
    ("zh", "Chinese"),
    ("ru", "Russian"),
    ("it", "Italian"),
    ("ko", "Korean"),
    ("pt", "Portuguese"),
    ("id", "Indonesian"),
    ("th", "Thai"),
    ("vi", "Vietnamese"),
    ("tr", "Turkish"),
    ("pl", "Polish"),
    ("ar", "Arabic"),
    ("hi", "Hindi"),
];

/// What: Look up the display label for a single language code.
///
/// Inputs:
/// - `code`: Raw language code from a feed (e.g., "en").
///
/// Output:
/// - `Some(label)` for codes in the taxonomy; `None` otherwise.
#[must_use]
pub fn label_for_code(code: &str) -> Option<&'static str> {
    LANG_MAP
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
}

/// What: Reverse-map a display label back to its language code.
///
/// Inputs:
/// - `label`: Display label (e.g., "English").
///
/// Output:
/// - `Some(code)` for labels in the taxonomy; `None` for `Multi-Language`,
///   `Unknown`, and pass-through codes.
#[must_use]
pub fn code_for_label(label: &str) -> Option<&'static str> {
    LANG_MAP
        .iter()
        .find(|(_, l)| *l == label)
        .map(|(code, _)| *code)
}

/// What: Resolve a record's raw language codes to one display label.
///
/// Inputs:
/// - `languages`: Ordered codes as declared by the feed (may be empty).
///
/// Output:
/// - `Unknown` for an empty list; `Multi-Language` when more than one code is
///   present or any code equals the `multi` sentinel; otherwise the mapped
///   label, falling back to the raw code verbatim for unrecognized codes.
///
/// Details:
/// - Total and pure: never panics, never errors, no side effects.
#[must_use]
pub fn resolve_label(languages: &[String]) -> String {
    if languages.is_empty() {
        return UNKNOWN_LABEL.to_string();
    }
    if languages.len() > 1 || languages.iter().any(|c| c == MULTI_CODE) {
        return MULTI_LABEL.to_string();
    }
    label_for_code(&languages[0]).map_or_else(|| languages[0].clone(), str::to_string)
}
