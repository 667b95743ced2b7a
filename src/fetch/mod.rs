// src/fetch/mod.rs
// =============================================================================
// This module contains the two collaborators the crawl engine talks to.
//
// Submodules:
// - http: Downloads a page's HTML (the ContentFetcher)
// - html: Pulls absolute links out of HTML (the LinkExtractor)
//
// Both are traits so the engine can be driven by fakes in tests. The engine
// only ever sees `impl ContentFetcher` and `impl LinkExtractor`.
// =============================================================================

mod html;
mod http;

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::FetchError;

pub use html::HtmlLinkExtractor;
pub use http::HttpFetcher;

/// Something that can turn a URL into page content
///
/// Failures are returned as `FetchError` values, never panics. The engine
/// treats every error as "this page has no links".
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

// Lets callers keep a handle on a fetcher they gave to the engine
#[async_trait]
impl<T: ContentFetcher + ?Sized> ContentFetcher for Arc<T> {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        (**self).fetch(url).await
    }
}

/// Something that can list the absolute links in a page, in document order
pub trait LinkExtractor: Send + Sync {
    fn extract(&self, content: &str) -> Vec<String>;
}
