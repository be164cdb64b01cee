//! Coverage aggregation
//!
//! Sums the parsed records into overall totals and a per-category
//! breakdown. The breakdown lives in a `BTreeMap` so iterating it yields
//! the category table already sorted by name.

use std::collections::BTreeMap;

use crate::category;
use crate::model::{CoverageRecord, LineTotals};

/// Aggregated view over all parsed records
#[derive(Debug, Default)]
pub struct Summary {
    pub overall: LineTotals,
    pub by_category: BTreeMap<&'static str, LineTotals>,
}

/// Sum records overall and per category. Duplicate file paths are summed
/// as-is; deduplication is the caller's problem if it ever matters.
pub fn summarize(records: &[CoverageRecord]) -> Summary {
    let mut summary = Summary::default();

    for record in records {
        summary.overall.add(record);
        summary
            .by_category
            .entry(category::classify(&record.file))
            .or_default()
            .add(record);
    }

    summary
}
