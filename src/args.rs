//! Command-line argument definition.

use clap::Parser;

/// Sourcedex - A fast, friendly TUI for browsing and filtering source catalogs
#[derive(Parser, Debug, Clone)]
#[command(name = "sourcedex")]
#[command(version)]
#[command(about = "A fast, friendly TUI for browsing and filtering catalogs of content sources", long_about = None)]
pub struct Args {
    /// Feed location: an http(s) URL or a local file path
    #[arg(long, default_value = crate::feed::DEFAULT_FEED)]
    pub feed: String,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Defaults apply when no flags are given
    ///
    /// - Input: Bare invocation
    /// - Output: Default feed path and info log level
    fn args_defaults() {
        let args = Args::parse_from(["sourcedex"]);
        assert_eq!(args.feed, crate::feed::DEFAULT_FEED);
        assert_eq!(args.log_level, "info");
    }

    #[test]
    /// What: Feed override is accepted for URLs and paths
    ///
    /// - Input: --feed with a URL
    /// - Output: Value passed through verbatim
    fn args_feed_override() {
        let args = Args::parse_from(["sourcedex", "--feed", "https://s.example/index.min.json"]);
        assert_eq!(args.feed, "https://s.example/index.min.json");
    }
}
