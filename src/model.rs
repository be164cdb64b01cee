//! Coverage data model
//!
//! One transient record per successfully parsed gcov invocation, plus the
//! running line totals used for overall and per-category aggregation.
//! Nothing here is persisted; the report is rebuilt from scratch on every run.

/// Coverage figures for a single source file, parsed from one gcov run
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageRecord {
    /// Source file path as reported by gcov
    pub file: String,
    /// Percentage of lines executed, 0.0 to 100.0
    pub percentage: f64,
    /// Derived: floor(total * percentage / 100)
    pub covered: u32,
    /// Total executable lines gcov saw in the file
    pub total: u32,
}

impl CoverageRecord {
    pub fn new(file: String, percentage: f64, total: u32) -> Self {
        // Truncation matches gcov's reported figures closely enough; the
        // small rounding discrepancy against gcov's internals is accepted.
        let covered = (total as f64 * percentage / 100.0) as u32;
        Self {
            file,
            percentage,
            covered,
            total,
        }
    }

    /// Base file name for display in the per-file tables
    pub fn basename(&self) -> &str {
        self.file.rsplit('/').next().unwrap_or(&self.file)
    }
}

/// Running covered/total sums
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineTotals {
    pub covered: u64,
    pub total: u64,
}

impl LineTotals {
    pub fn add(&mut self, record: &CoverageRecord) {
        self.covered += u64::from(record.covered);
        self.total += u64::from(record.total);
    }

    /// Percentage of covered lines; an empty total is 0%, not a fault
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.covered as f64 / self.total as f64) * 100.0
    }
}
