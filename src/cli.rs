// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Usage:
//   link-swarm --url=URL [--levels=LIMIT] [--indent]
//
// Two things differ from a stock clap CLI:
// - --url is optional as far as clap is concerned, so that a missing URL
//   can print our own "Invalid usage" message plus help, and exit with 2
// - clap's built-in --help is disabled and replaced with a plain flag,
//   because asking for help also exits with 2 here
// =============================================================================

use clap::builder::TypedValueParser; // gives value parsers .map()
use clap::{CommandFactory, Parser};
use std::time::Duration;

use crate::crawl::{CrawlConfig, OutputFormat, DEFAULT_CONCURRENCY, DEFAULT_MAX_LEVEL};

/// Exit code for a crawl that ran to completion
pub const EXIT_OK: i32 = 0;
/// Exit code for a missing URL, --help, or a crawl that could not start
pub const EXIT_USAGE: i32 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "link-swarm",
    version = "0.1.0",
    about = "Crawl a website level by level and print the links on every page",
    long_about = "link-swarm starts at one URL, prints every absolute link on that page, \
                  then does the same for each of those links, up to --levels hops away.",
    disable_help_flag = true
)]
pub struct Cli {
    /// URL to crawl
    #[arg(long)]
    pub url: Option<String>,

    /// Maximum level of links to crawl from the starting URL
    ///
    /// Level 0 = just the starting page
    /// Level 1 = starting page + the pages it links to
    /// etc.
    #[arg(long, default_value_t = DEFAULT_MAX_LEVEL)]
    pub levels: usize,

    /// Nest URL output by level
    #[arg(long)]
    pub indent: bool,

    /// Number of pages fetched at the same time
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY, value_parser = clap::value_parser!(u16).range(1..).map(usize::from))]
    pub concurrency: usize,

    /// Print one JSON object per page instead of text
    #[arg(long)]
    pub json: bool,

    /// Seconds to wait for a single page before giving up on it
    ///
    /// A page that times out counts as a failed fetch: it is logged as a
    /// warning and its links are not crawled.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Show debug logs
    #[arg(short, long)]
    pub verbose: bool,

    /// Print usage
    #[arg(long)]
    pub help: bool,
}

impl Cli {
    // Handles --help and a missing --url
    //
    // Prints help (and an error for a missing URL) and returns the exit
    // code to stop with, or None if the crawl should go ahead.
    pub fn usage_exit(&self) -> Option<i32> {
        if self.help {
            println!("{}", Self::command().render_help());
            return Some(EXIT_USAGE);
        }

        if self.url.is_none() {
            eprintln!("Invalid usage: --url is required\n");
            eprintln!("{}", Self::command().render_help());
            return Some(EXIT_USAGE);
        }

        None
    }

    // Builds the crawl settings from the parsed flags
    pub fn crawl_config(&self) -> CrawlConfig {
        CrawlConfig {
            max_level: self.levels,
            concurrency: self.concurrency,
            indent: self.indent,
            output: if self.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
        }
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["link-swarm"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["--url=https://example.com"]);
        assert_eq!(cli.url.as_deref(), Some("https://example.com"));

        let config = cli.crawl_config();
        assert_eq!(config, CrawlConfig::default());
        assert_eq!(cli.fetch_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_levels_sets_max_level() {
        let cli = parse(&["--url=https://example.com", "--levels=4", "--indent"]);
        let config = cli.crawl_config();
        assert_eq!(config.max_level, 4);
        assert!(config.indent);
    }

    #[test]
    fn test_url_is_optional_for_clap() {
        let cli = parse(&[]);
        assert!(cli.url.is_none());
        assert!(!cli.help);
    }

    #[test]
    fn test_help_is_a_plain_flag() {
        let cli = parse(&["--help"]);
        assert!(cli.help);
    }

    #[test]
    fn test_json_output() {
        let cli = parse(&["--url=https://example.com", "--json"]);
        assert_eq!(cli.crawl_config().output, OutputFormat::Json);
    }

    #[test]
    fn test_zero_concurrency_is_rejected() {
        let result = Cli::try_parse_from(["link-swarm", "--url=https://a.com", "--concurrency=0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let result = Cli::try_parse_from(["link-swarm", "--url=https://a.com", "--timeout=0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_custom_timeout() {
        let cli = parse(&["--url=https://a.com", "--timeout=3"]);
        assert_eq!(cli.fetch_timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_help_exits_with_usage_code() {
        // --help wins even when a URL is given
        let cli = parse(&["--url=https://a.com", "--help"]);
        assert_eq!(cli.usage_exit(), Some(EXIT_USAGE));
    }

    #[test]
    fn test_missing_url_exits_with_usage_code() {
        let cli = parse(&["--levels=1"]);
        assert_eq!(cli.usage_exit(), Some(EXIT_USAGE));
    }

    #[test]
    fn test_url_given_starts_crawl() {
        let cli = parse(&["--url=https://a.com"]);
        assert_eq!(cli.usage_exit(), None);
    }

    #[test]
    fn test_version_flag_is_available() {
        let result = Cli::try_parse_from(["link-swarm", "--version"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_non_numeric_levels_is_rejected() {
        let result = Cli::try_parse_from(["link-swarm", "--url=https://a.com", "--levels=abc"]);
        assert!(result.is_err());
    }
}
