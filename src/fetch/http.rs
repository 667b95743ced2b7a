// src/fetch/http.rs
// =============================================================================
// This module downloads pages over HTTP.
//
// A fetch only succeeds when:
// - the URL is a well-formed absolute http/https URL
// - the server answers 200 OK
// - the body is valid UTF-8
//
// Everything else becomes a FetchError. The engine decides what to do with
// it (log a warning and move on).
//
// Rust concepts:
// - async/await: For network I/O
// - The ? operator: Converts reqwest / utf8 errors into FetchError via #[from]
// =============================================================================

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use url::Url;

use super::ContentFetcher;
use crate::error::FetchError;

// Name the user agent after the app
static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Fetches pages with a shared reqwest client
///
/// The client is cheap to clone (it's an Arc internally) and pools
/// connections, so one HttpFetcher serves every worker in a wave.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    // Creates a fetcher whose requests give up after `timeout`
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(APP_USER_AGENT)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl ContentFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        // Validate before touching the network
        // "google.com" fails here with "relative URL without a base"
        let parsed = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(FetchError::UnsupportedScheme(parsed.scheme().to_string()));
        }

        let response = self.client.get(parsed).send().await?;

        // Only a plain 200 counts; redirects are already followed by reqwest
        if response.status() != StatusCode::OK {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        // Decode strictly: response.text() would silently replace bad bytes
        let body = response.bytes().await?;
        let html = String::from_utf8(body.to_vec())?;
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fetcher() -> HttpFetcher {
        HttpFetcher::new(Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let mock_server = MockServer::start().await;
        let body = r#"<a href="http://google.com">Test link</a>"#;

        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&mock_server)
            .await;

        let result = fetcher().fetch(&mock_server.uri()).await;
        assert_eq!(result.unwrap(), body);
    }

    #[tokio::test]
    async fn test_fetch_rejects_url_without_scheme() {
        let result = fetcher().fetch("google.com").await;
        assert!(matches!(result, Err(FetchError::InvalidUrl { .. })));
    }

    #[tokio::test]
    async fn test_fetch_rejects_non_http_scheme() {
        let result = fetcher().fetch("mailto:someone@example.com").await;
        assert!(matches!(result, Err(FetchError::UnsupportedScheme(s)) if s == "mailto"));
    }

    #[tokio::test]
    async fn test_fetch_fails_on_404() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&mock_server)
            .await;

        let url = format!("{}/missing", mock_server.uri());
        let result = fetcher().fetch(&url).await;
        assert!(matches!(result, Err(FetchError::Status(404))));
    }

    #[tokio::test]
    async fn test_fetch_fails_on_non_200_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/accepted"))
            .respond_with(ResponseTemplate::new(202).set_body_string("later"))
            .mount(&mock_server)
            .await;

        let url = format!("{}/accepted", mock_server.uri());
        let result = fetcher().fetch(&url).await;
        assert!(matches!(result, Err(FetchError::Status(202))));
    }

    #[tokio::test]
    async fn test_fetch_fails_on_invalid_utf8() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/latin1"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0x66, 0x6f, 0xff, 0xfe]))
            .mount(&mock_server)
            .await;

        let url = format!("{}/latin1", mock_server.uri());
        let result = fetcher().fetch(&url).await;
        assert!(matches!(result, Err(FetchError::Decode(_))));
    }

    #[tokio::test]
    async fn test_fetch_fails_on_refused_connection() {
        // Port 9 (discard) is essentially never listening on localhost
        let result = fetcher().fetch("http://127.0.0.1:9/").await;
        assert!(matches!(result, Err(FetchError::Transport(_))));
    }
}
