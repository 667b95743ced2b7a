// src/crawl/unit.rs
// =============================================================================
// The small value types the engine works with:
// - CrawlUnit: one pending fetch (a URL and how many hops from the seed)
// - CrawlConfig: settings for one crawl run
// =============================================================================

/// Default maximum link depth from the seed URL
pub const DEFAULT_MAX_LEVEL: usize = 2;

/// Default number of fetches in flight per wave
pub const DEFAULT_CONCURRENCY: usize = 5;

/// Spaces per level when --indent is on
pub const NESTING_FACTOR: usize = 5;

// Represents one page waiting to be fetched
//
// Units are never mutated. A page's links become brand new units via child().
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlUnit {
    url: String,
    level: usize, // How many link hops away from the seed URL (seed = 0)
}

impl CrawlUnit {
    pub fn new(url: impl Into<String>, level: usize) -> Self {
        Self {
            url: url.into(),
            level,
        }
    }

    // The unit every crawl starts from
    pub fn seed(url: impl Into<String>) -> Self {
        Self::new(url, 0)
    }

    // A unit for a link found on this unit's page, one level deeper
    pub fn child(&self, link: impl Into<String>) -> Self {
        Self::new(link, self.level + 1)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn level(&self) -> usize {
        self.level
    }
}

/// How crawl output is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable lines, optionally indented by level
    #[default]
    Text,
    /// One JSON object per page
    Json,
}

/// Settings for one crawl run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlConfig {
    /// Links deeper than this are not followed
    pub max_level: usize,
    /// Maximum fetches in flight at once
    pub concurrency: usize,
    /// Indent output lines by level
    pub indent: bool,
    pub output: OutputFormat,
}

impl CrawlConfig {
    // Whether a unit at `level` may enter the frontier
    pub fn allows(&self, level: usize) -> bool {
        level <= self.max_level
    }

    // Number of spaces to print before a line for a unit at `level`
    pub fn padding(&self, level: usize) -> usize {
        if self.indent {
            level * NESTING_FACTOR
        } else {
            0
        }
    }
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            max_level: DEFAULT_MAX_LEVEL,
            concurrency: DEFAULT_CONCURRENCY,
            indent: false,
            output: OutputFormat::Text,
        }
    }
}
