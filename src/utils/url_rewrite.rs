//! URL rewriting helpers for product links.
//!
//! Everything here is plain string work. Nothing is fetched and malformed
//! input is passed through rather than rejected.

use url::form_urlencoded;

/// Web Archive lookup endpoint listing every capture of a URL.
pub const ARCHIVE_LOOKUP_BASE: &str = "https://web.archive.org/web/*/";

/// Google search endpoint.
pub const GOOGLE_SEARCH_BASE: &str = "https://google.com/search";

/// Reddit search scoped to the brand's subreddit.
pub const REDDIT_SEARCH_BASE: &str = "https://www.reddit.com/r/Outlier/search";

/// Upgrades a leading `http://` to `https://`.
///
/// Already-secure URLs and schemeless strings are returned unchanged. The
/// match is case-sensitive, mirroring how catalog URLs are captured.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(upgrade_to_https("http://outlier.nyc/x"), "https://outlier.nyc/x");
/// assert_eq!(upgrade_to_https("outlier.nyc/x"), "outlier.nyc/x");
/// ```
pub fn upgrade_to_https(url: &str) -> String {
    match url.strip_prefix("http://") {
        Some(rest) => format!("https://{rest}"),
        None => url.to_string(),
    }
}

/// Builds a search URL with `query` as the `q` parameter.
///
/// The query is form-encoded, so spaces become `+`.
pub fn search_url(base: &str, query: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();
    format!("{base}?q={encoded}")
}

/// Builds the Web Archive lookup URL for `target`.
///
/// `target` is appended verbatim; the archive expects the raw URL.
pub fn archive_lookup_url(target: &str) -> String {
    format!("{ARCHIVE_LOOKUP_BASE}{target}")
}
