// src/crawl/frontier.rs
// =============================================================================
// The frontier holds every unit that still has to be fetched.
//
// Ordering rules:
// - Units are sorted by level, lowest first
// - Units on the same level keep the order they were added in
//
// The engine takes a whole wave out at once with take_wave(), and merges the
// children back in with merge() once every worker is done. Since children are
// always exactly one level deeper than their wave, the frontier only ever
// holds a single level between waves.
// =============================================================================

use super::unit::CrawlUnit;

#[derive(Debug, Default)]
pub struct Frontier {
    units: Vec<CrawlUnit>,
}

impl Frontier {
    // A frontier holding just the seed unit
    pub fn with_seed(seed: CrawlUnit) -> Self {
        Self { units: vec![seed] }
    }

    // Adds units and restores level order
    //
    // sort_by_key is a stable sort, so equal levels keep insertion order.
    pub fn merge(&mut self, units: impl IntoIterator<Item = CrawlUnit>) {
        self.units.extend(units);
        self.units.sort_by_key(CrawlUnit::level);
    }

    // Removes and returns everything currently queued
    pub fn take_wave(&mut self) -> Vec<CrawlUnit> {
        std::mem::take(&mut self.units)
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn units(&self) -> &[CrawlUnit] {
        &self.units
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is a stable sort important?
//    - sort_by_key never reorders elements whose keys are equal
//    - So two units on level 1 stay in the order they were merged
//
// 2. What does std::mem::take do?
//    - Replaces a value with its Default (an empty Vec here) and returns
//      the old one, without cloning anything
// -----------------------------------------------------------------------------
