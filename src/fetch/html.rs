// src/fetch/html.rs
// =============================================================================
// This module extracts links from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever, so broken markup still parses
//
// Only absolute http/https links are kept. Relative links ("/about"),
// fragments ("#top") and other schemes (mailto:, javascript:) are dropped.
// Links are returned exactly as written in the page, in document order,
// duplicates included.
// =============================================================================

use scraper::{Html, Selector};
use url::Url;

use super::LinkExtractor;

/// Extracts `<a href>` targets that are absolute http(s) URLs
#[derive(Debug, Clone)]
pub struct HtmlLinkExtractor {
    anchors: Selector,
}

impl HtmlLinkExtractor {
    pub fn new() -> Self {
        // "a[href]" is a constant and known to be valid, so this can't fail
        let anchors = Selector::parse("a[href]").expect("a[href] is a valid selector");
        Self { anchors }
    }
}

impl Default for HtmlLinkExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkExtractor for HtmlLinkExtractor {
    fn extract(&self, content: &str) -> Vec<String> {
        let document = Html::parse_document(content);

        document
            .select(&self.anchors)
            .filter_map(|element| element.value().attr("href"))
            .filter(|href| is_absolute_http_link(href))
            .map(str::to_string)
            .collect()
    }
}

// Checks if an href is an absolute http or https URL
//
// Url::parse only succeeds for absolute URLs, so relative paths and
// fragments are rejected without any string prefix tricks.
fn is_absolute_http_link(href: &str) -> bool {
    match Url::parse(href) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(html: &str) -> Vec<String> {
        HtmlLinkExtractor::new().extract(html)
    }

    #[test]
    fn test_extracts_link_tags_in_order() {
        let html = r#"
            <div>
                <head> Test markup </head>
                <a href="https://google.com"></a>
                <a href="https://facebook.com"></a>
            </div>
        "#;
        assert_eq!(extract(html), vec!["https://google.com", "https://facebook.com"]);
    }

    #[test]
    fn test_keeps_only_absolute_links() {
        let html = r#"<a href="/about">About</a><a href="https://x.com">X</a>"#;
        assert_eq!(extract(html), vec!["https://x.com"]);
    }

    #[test]
    fn test_skips_fragments_and_other_schemes() {
        let html = r##"
            <a href="#top">Top</a>
            <a href="mailto:test@example.com">Email</a>
            <a href="javascript:void(0)">JS</a>
            <a href="ftp://files.example.com">FTP</a>
            <a href="http://plain.example.com/page">Plain</a>
        "##;
        assert_eq!(extract(html), vec!["http://plain.example.com/page"]);
    }

    #[test]
    fn test_keeps_duplicates() {
        let html = r#"<a href="https://a.com">1</a><a href="https://a.com">2</a>"#;
        assert_eq!(extract(html), vec!["https://a.com", "https://a.com"]);
    }

    #[test]
    fn test_no_links_is_empty() {
        let html = "<div><head> Test markup </head></div>";
        assert!(extract(html).is_empty());
    }

    #[test]
    fn test_malformed_markup_is_not_an_error() {
        assert!(extract("<<<a href=").is_empty());
        assert!(extract("").is_empty());
    }

    #[test]
    fn test_anchor_without_href_is_ignored() {
        let html = r#"<a name="anchor">no href</a><a href="https://b.com">b</a>"#;
        assert_eq!(extract(html), vec!["https://b.com"]);
    }
}
