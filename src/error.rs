// src/error.rs
// =============================================================================
// Error types used by the crawler.
//
// There are two families of errors:
// - FetchError: something went wrong fetching ONE page. These are "soft":
//   the engine logs them and keeps crawling.
// - CrawlError: the crawl could not even start (bad seed, bad config).
//
// We use the `thiserror` crate so each variant gets a Display message
// from its #[error(...)] attribute instead of a hand-written impl.
// =============================================================================

use thiserror::Error;

/// Errors that can happen while fetching a single page
#[derive(Error, Debug)]
pub enum FetchError {
    /// The URL could not be parsed (e.g. "google.com" has no scheme)
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The URL parsed but is not http or https (mailto:, ftp:, ...)
    #[error("unsupported URL scheme '{0}'")]
    UnsupportedScheme(String),

    /// Network / transport failure (DNS, connection refused, timeout, ...)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with something other than 200 OK
    #[error("HTTP {0}")]
    Status(u16),

    /// The body was not valid UTF-8
    #[error("invalid encoding: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
}

/// Errors that stop a crawl before the first wave
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CrawlError {
    /// No seed URL was given
    #[error("a seed URL is required")]
    MissingSeed,

    /// A pool of zero workers would never make progress
    #[error("concurrency must be at least 1")]
    ZeroConcurrency,
}
