// src/crawl/engine.rs
// =============================================================================
// The crawl engine: breadth-first crawling, one level ("wave") at a time.
//
// How it works:
// 1. The frontier starts with the seed URL at level 0
// 2. Take every unit out of the frontier: that's the current wave
// 3. Fetch all of them concurrently, at most `concurrency` at once
// 4. Wait until EVERY fetch in the wave is done (success or failure)
// 5. Links found at level L become units at level L + 1, unless that
//    would go past max_level, in which case they are dropped
// 6. Merge those children into the frontier and repeat until it's empty
//
// Because children are only ever created one level deeper and are dropped
// past max_level, a crawl always finishes after at most max_level + 1 waves,
// even if pages link to each other in circles. There is no visited set, so
// the same URL may be fetched more than once.
//
// A failed fetch is logged as a warning and simply contributes no children.
// Nothing that happens during a wave can stop the crawl.
// =============================================================================

use futures::stream::{self, StreamExt}; // StreamExt gives us .buffer_unordered()
use tracing::{debug, info, warn};

use super::frontier::Frontier;
use super::report::Report;
use super::unit::{CrawlConfig, CrawlUnit};
use crate::error::CrawlError;
use crate::fetch::{ContentFetcher, LinkExtractor};

/// Totals for a finished (or in-progress) crawl
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrawlSummary {
    /// Number of waves processed
    pub waves: usize,
    /// Pages fetched successfully
    pub pages: usize,
    /// Fetches that failed and were skipped
    pub failures: usize,
    /// Links extracted across all pages, including pruned ones
    pub links: usize,
}

pub struct CrawlEngine<F, X> {
    config: CrawlConfig,
    fetcher: F,
    extractor: X,
    report: Report,
    frontier: Frontier,
    summary: CrawlSummary,
}

impl<F, X> CrawlEngine<F, X>
where
    F: ContentFetcher,
    X: LinkExtractor,
{
    // Creates an engine whose frontier holds only the seed URL
    //
    // Fails if the seed is blank or the config asks for zero workers.
    // These are the only errors a crawl can have; everything after this
    // point is recovered per page.
    pub fn new(
        seed_url: &str,
        config: CrawlConfig,
        fetcher: F,
        extractor: X,
        report: Report,
    ) -> Result<Self, CrawlError> {
        let seed_url = seed_url.trim();
        if seed_url.is_empty() {
            return Err(CrawlError::MissingSeed);
        }
        if config.concurrency == 0 {
            return Err(CrawlError::ZeroConcurrency);
        }

        Ok(Self {
            config,
            fetcher,
            extractor,
            report,
            frontier: Frontier::with_seed(CrawlUnit::seed(seed_url)),
            summary: CrawlSummary::default(),
        })
    }

    // Runs waves until the frontier is empty
    pub async fn run(&mut self) -> CrawlSummary {
        info!(
            max_level = self.config.max_level,
            concurrency = self.config.concurrency,
            "starting crawl"
        );

        while !self.frontier.is_empty() {
            let wave = self.frontier.take_wave();
            let level = wave.first().map(CrawlUnit::level).unwrap_or_default();
            debug!(level, units = wave.len(), "dispatching wave");

            let children = self.process_wave(wave).await;
            debug_assert!(children.iter().all(|c| self.config.allows(c.level())));

            debug!(level, children = children.len(), "wave complete");
            self.frontier.merge(children);
            self.summary.waves += 1;

            // A wave only ever produces units for the next level
            debug_assert!(self.frontier.units().iter().all(|u| u.level() == level + 1));
        }

        info!(
            waves = self.summary.waves,
            pages = self.summary.pages,
            failures = self.summary.failures,
            links = self.summary.links,
            "crawl finished"
        );
        self.summary
    }

    // Fetches every unit in `units` concurrently and returns their children
    //
    // Output for each page is written as soon as that page finishes, so
    // pages within a wave appear in completion order. The children are
    // only returned once the whole wave has drained.
    pub async fn process_wave(&mut self, units: Vec<CrawlUnit>) -> Vec<CrawlUnit> {
        // Borrow fields separately: workers read fetcher/extractor while
        // this step writes to report/summary
        let fetcher = &self.fetcher;
        let extractor = &self.extractor;
        let config = &self.config;
        let report = &mut self.report;
        let summary = &mut self.summary;

        let mut visits = stream::iter(units)
            .map(|unit| visit(fetcher, extractor, unit))
            .buffer_unordered(config.concurrency);

        let mut children = Vec::new();

        while let Some(outcome) = visits.next().await {
            let Some((unit, links)) = outcome else {
                summary.failures += 1;
                continue;
            };

            summary.pages += 1;
            summary.links += links.len();

            if let Err(e) = report.page(&unit, &links) {
                warn!(url = unit.url(), error = %e, "failed to write crawl output");
            }

            // Stopping condition for crawling
            if config.allows(unit.level() + 1) {
                children.extend(links.into_iter().map(|link| unit.child(link)));
            }
        }

        children
    }
}

// Fetches one unit and extracts its links
//
// Returns None if the fetch failed. The failure is logged here so the
// caller only has to count it.
async fn visit<F, X>(fetcher: &F, extractor: &X, unit: CrawlUnit) -> Option<(CrawlUnit, Vec<String>)>
where
    F: ContentFetcher,
    X: LinkExtractor,
{
    match fetcher.fetch(unit.url()).await {
        Ok(content) => {
            let links = extractor.extract(&content);
            debug!(url = unit.url(), level = unit.level(), links = links.len(), "fetched page");
            Some((unit, links))
        }
        Err(error) => {
            warn!(url = unit.url(), level = unit.level(), %error, "failed to fetch page");
            None
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does buffer_unordered(N) do here?
//    - stream::iter(units).map(visit) is a stream of not-yet-started futures
//    - buffer_unordered(N) keeps at most N of them running at once and
//      yields each result as soon as it finishes (not in input order)
//    - When the stream returns None, every unit in the wave is done. That's
//      the barrier between waves: no extra synchronization is needed
//
// 2. Why split `self` into separate field borrows in process_wave?
//    - The running futures hold shared borrows of fetcher and extractor
//    - At the same time we need to write to report and summary
//    - Borrowing the fields one by one lets Rust see they don't overlap
//
// 3. Why doesn't the frontier need a Mutex?
//    - Workers never touch it. They return their links as values
//    - Only run() changes the frontier, and only between waves
//
// 4. What is `let ... else`?
//    - `let Some(x) = value else { ...; continue; };`
//    - Binds x if the pattern matches, otherwise runs the else block,
//      which must leave the current scope (return, continue, break)
// -----------------------------------------------------------------------------
