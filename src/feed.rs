//! One-shot catalog feed loading.
//!
//! The feed is a single JSON document `{ "sources": [ ... ] }`. It is loaded
//! exactly once at startup, from an `http(s)` URL or a local file path, with
//! no retries and no timeout. A missing, non-array, or empty `sources` field
//! is the terminal "no sources" condition; any fetch or parse failure is the
//! terminal error condition. Neither propagates as a panic.

use serde_json::Value;

use crate::state::SourceRecord;

/// Error alias shared by the loading path.
type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Default feed location, relative to the working directory.
pub const DEFAULT_FEED: &str = "index.min.json";

/// Outcome of a successful feed fetch.
#[derive(Debug)]
pub enum FeedOutcome {
    /// Feed delivered at least one record.
    Loaded(Vec<SourceRecord>),
    /// Feed was well-formed JSON but `sources` was missing, not an array, or
    /// empty.
    Empty,
}

/// What: Parse a feed body into records, distinguishing "empty" from "bad".
///
/// Inputs:
/// - `body`: Raw response or file contents.
///
/// Output:
/// - `Ok(FeedOutcome::Loaded)` with the records, `Ok(FeedOutcome::Empty)`
///   when the shape check fails softly, or `Err` on malformed JSON.
///
/// Details:
/// - The shape check mirrors the catalog contract: `sources` must exist and
///   be a non-empty array. A `sources` of the wrong type is "no sources",
///   not a parse error.
pub fn parse_feed(body: &str) -> Result<FeedOutcome> {
    let doc: Value = serde_json::from_str(body)?;
    let Some(arr) = doc.get("sources").and_then(Value::as_array) else {
        return Ok(FeedOutcome::Empty);
    };
    if arr.is_empty() {
        return Ok(FeedOutcome::Empty);
    }
    let records: Vec<SourceRecord> = serde_json::from_value(Value::Array(arr.clone()))?;
    Ok(FeedOutcome::Loaded(records))
}

/// What: Load the feed from a URL or local file and parse it.
///
/// Inputs:
/// - `location`: `http(s)` URL, or any other string treated as a file path.
///
/// Output:
/// - Parsed [`FeedOutcome`], or the underlying fetch/read/parse error.
///
/// Details:
/// - File reads go through `spawn_blocking` to stay off the event loop.
/// - Callers translate `Err` into the terminal error display state and log
///   it; nothing here retries.
pub async fn load_feed(location: &str) -> Result<FeedOutcome> {
    let body = if location.starts_with("http://") || location.starts_with("https://") {
        fetch_url(location).await?
    } else {
        let path = location.to_string();
        tokio::task::spawn_blocking(move || std::fs::read_to_string(path)).await??
    };
    parse_feed(&body)
}

/// Fetch a feed URL, failing on non-success status.
async fn fetch_url(url: &str) -> Result<String> {
    let resp = reqwest::get(url).await?;
    if !resp.status().is_success() {
        return Err(format!("feed request failed: {}", resp.status()).into());
    }
    Ok(resp.text().await?)
}
