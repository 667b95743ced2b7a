// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Features:
// - Breadth-first crawling starting from a URL, one level per wave
// - Configurable depth limit (max_level)
// - Bounded number of concurrent fetches per wave
// - Results printed as text (optionally indented) or JSON
//
// Submodules:
// - unit: CrawlUnit and CrawlConfig value types
// - frontier: the level-ordered queue of units still to fetch
// - engine: runs the waves
// - report: prints each fetched page
// =============================================================================

mod engine;
mod frontier;
mod report;
mod unit;

// Re-export what main.rs needs
pub use engine::CrawlEngine;
pub use report::Report;
pub use unit::{CrawlConfig, OutputFormat, DEFAULT_CONCURRENCY, DEFAULT_MAX_LEVEL};
