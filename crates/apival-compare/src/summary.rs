//! Aggregate view over a list of comparison records

use crate::record::ComparisonRecord;
use serde::Serialize;

/// Counts of matching and mismatching records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ComparisonSummary {
    pub total: usize,
    pub matched: usize,
    pub mismatched: usize,
}

impl ComparisonSummary {
    pub fn from_records(records: &[ComparisonRecord]) -> Self {
        let matched = records.iter().filter(|r| r.matched).count();
        Self {
            total: records.len(),
            matched,
            mismatched: records.len() - matched,
        }
    }

    /// True when nothing mismatched (an empty report counts as matching)
    pub fn all_matched(&self) -> bool {
        self.mismatched == 0
    }
}

/// Records that did not match, in report order
pub fn mismatches(records: &[ComparisonRecord]) -> impl Iterator<Item = &ComparisonRecord> {
    records.iter().filter(|r| !r.matched)
}
