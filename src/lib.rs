//! Covreport - gcov coverage summarizer
//!
//! A library for turning raw gcov data into a textual coverage report:
//! - Recursive `.gcda` artifact discovery under a build directory
//! - Per-artifact `gcov` invocation with fail-silent output parsing
//! - Overall and per-category line aggregation
//! - Fixed-width report rendering (overall, categories, best and worst files)

pub mod aggregate;
pub mod category;
pub mod discovery;
pub mod gcov;
pub mod model;
pub mod report;

pub use aggregate::{summarize, Summary};
pub use discovery::find_artifacts;
pub use gcov::GcovExtractor;
pub use model::{CoverageRecord, LineTotals};
