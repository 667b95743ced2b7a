// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (warnings go to stderr, crawl output to stdout)
// 3. Build the crawl engine and run it until it runs out of pages
// 4. Exit with proper code (0 = crawl finished, 2 = usage error)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;   // src/cli.rs - command-line parsing
mod crawl; // src/crawl/ - the wave-by-wave crawl engine
mod error; // src/error.rs - fetch and crawl error types
mod fetch; // src/fetch/ - downloading pages and extracting links

use clap::Parser;
use cli::{Cli, EXIT_OK, EXIT_USAGE};
use crawl::{CrawlEngine, Report};
use fetch::{HtmlLinkExtractor, HttpFetcher};
use tracing_subscriber::EnvFilter;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {:#}", e);
            EXIT_USAGE
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    // Bad flag values (e.g. --levels=abc) make clap print an error and exit 2
    let cli = Cli::parse();

    if let Some(code) = cli.usage_exit() {
        return Ok(code);
    }
    // usage_exit() already returned for a missing URL
    let url = cli.url.as_deref().unwrap_or_default();

    init_tracing(cli.verbose)?;

    let config = cli.crawl_config();
    let fetcher = HttpFetcher::new(cli.fetch_timeout())?;
    let report = Report::new(std::io::stdout(), &config);

    let mut engine = CrawlEngine::new(url, config, fetcher, HtmlLinkExtractor::new(), report)?;
    engine.run().await;

    Ok(EXIT_OK)
}

// Logs go to stderr so they never mix with the crawl output on stdout
fn init_tracing(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("link_swarm=debug,warn")
    } else {
        EnvFilter::new("link_swarm=info,warn")
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
