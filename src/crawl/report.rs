// src/crawl/report.rs
// =============================================================================
// Prints crawl results as pages finish.
//
// Text output (one block per page):
//
//      https://example.com/docs
//      [1] - https://example.com/a
//      [1] - https://example.com/b
//
// With --indent every line is pushed right by level * 5 spaces so the
// output reads like a tree. With --json each page is a single JSON line.
//
// The Report owns its writer, so tests can hand it a buffer instead of
// stdout.
// =============================================================================

use serde::Serialize;
use std::io::{self, Write};

use super::unit::{CrawlConfig, CrawlUnit, OutputFormat};

// One processed page, as printed in --json mode
#[derive(Debug, Serialize)]
struct PageRecord<'a> {
    url: &'a str,
    level: usize,
    links: &'a [String],
}

pub struct Report {
    out: Box<dyn Write + Send>,
    config: CrawlConfig,
}

impl Report {
    pub fn new(out: impl Write + Send + 'static, config: &CrawlConfig) -> Self {
        Self {
            out: Box::new(out),
            config: config.clone(),
        }
    }

    // Writes everything for one fetched page
    pub fn page(&mut self, unit: &CrawlUnit, links: &[String]) -> io::Result<()> {
        match self.config.output {
            OutputFormat::Text => self.page_text(unit, links),
            OutputFormat::Json => self.page_json(unit, links),
        }?;
        self.out.flush()
    }

    fn page_text(&mut self, unit: &CrawlUnit, links: &[String]) -> io::Result<()> {
        let pad = " ".repeat(self.config.padding(unit.level()));

        writeln!(self.out, "{} {}", pad, unit.url())?;
        for link in links {
            writeln!(self.out, "{} [{}] - {}", pad, unit.level(), link)?;
        }
        Ok(())
    }

    fn page_json(&mut self, unit: &CrawlUnit, links: &[String]) -> io::Result<()> {
        let record = PageRecord {
            url: unit.url(),
            level: unit.level(),
            links,
        };
        serde_json::to_writer(&mut self.out, &record)?;
        writeln!(self.out)
    }
}
