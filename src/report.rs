//! Report rendering
//!
//! Builds the complete textual report as one string; the binary just
//! prints it. Pure formatting: the only decisions made here are sorting,
//! truncation and the two early-exit branches for empty input.

use crate::aggregate::{self, Summary};
use crate::model::CoverageRecord;

const WIDTH: usize = 70;
const TITLE: &str = "Test Coverage Report";

/// Files strictly below this percentage land in the improvement list
const LOW_COVERAGE_THRESHOLD: f64 = 50.0;
const TOP_FILES_SHOWN: usize = 10;
const LOW_FILES_SHOWN: usize = 15;

/// Render the full report for `artifacts_found` discovered `.gcda` files
/// and the records successfully parsed from them
pub fn render(artifacts_found: usize, records: &[CoverageRecord]) -> String {
    let mut out = String::new();

    out.push_str(&"=".repeat(WIDTH));
    out.push('\n');
    out.push_str(TITLE);
    out.push('\n');
    out.push_str(&"=".repeat(WIDTH));
    out.push_str("\n\n");

    if artifacts_found == 0 {
        out.push_str("No coverage data found. Run 'make coverage' first.\n");
        return out;
    }

    out.push_str(&format!(
        "Found {} files with coverage data\n\n",
        artifacts_found
    ));

    if records.is_empty() {
        out.push_str("Could not parse coverage data\n");
        return out;
    }

    let summary = aggregate::summarize(records);

    out.push_str(&format!(
        "Overall Coverage: {:.2}%\n",
        summary.overall.percentage()
    ));
    out.push_str(&format!(
        "  Covered Lines: {} / {}\n\n",
        group_thousands(summary.overall.covered),
        group_thousands(summary.overall.total)
    ));

    render_category_table(&mut out, &summary);
    render_top_files(&mut out, records);
    render_low_coverage(&mut out, records);

    out.push_str(&"=".repeat(WIDTH));
    out.push('\n');
    out.push_str("For HTML reports, install lcov\n");
    out.push_str("Then run: make coverage\n");
    out.push_str(&"=".repeat(WIDTH));
    out.push('\n');

    out
}

fn render_category_table(out: &mut String, summary: &Summary) {
    out.push_str("Coverage by Category:\n");
    out.push_str(&"-".repeat(WIDTH));
    out.push('\n');
    out.push_str(&format!(
        "{:<30} {:<15} {:<20}\n",
        "Category", "Coverage", "Lines"
    ));
    out.push_str(&"-".repeat(WIDTH));
    out.push('\n');

    // BTreeMap iteration is already in category-name order
    for (name, totals) in &summary.by_category {
        out.push_str(&format!(
            "{:<30} {:>6.2}%{:<8} {:>6}/{:<6}\n",
            name,
            totals.percentage(),
            "",
            totals.covered,
            totals.total
        ));
    }
    out.push('\n');
}

fn render_top_files(out: &mut String, records: &[CoverageRecord]) {
    out.push_str(&format!("Top {} Best Covered Files:\n", TOP_FILES_SHOWN));
    out.push_str(&"-".repeat(WIDTH));
    out.push('\n');

    let mut best: Vec<&CoverageRecord> = records.iter().collect();
    // Stable sort keeps discovery order for equal percentages
    best.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));

    for record in best.iter().take(TOP_FILES_SHOWN) {
        out.push_str(&file_row(record));
    }
    out.push('\n');
}

fn render_low_coverage(out: &mut String, records: &[CoverageRecord]) {
    let mut low: Vec<&CoverageRecord> = records
        .iter()
        .filter(|r| r.percentage < LOW_COVERAGE_THRESHOLD)
        .collect();

    if low.is_empty() {
        out.push_str(&format!(
            "All files have >{:.0}% coverage!\n\n",
            LOW_COVERAGE_THRESHOLD
        ));
        return;
    }

    low.sort_by(|a, b| a.percentage.total_cmp(&b.percentage));

    out.push_str(&format!(
        "Files Needing Improvement (<{:.0}% coverage): {} files\n",
        LOW_COVERAGE_THRESHOLD,
        low.len()
    ));
    out.push_str(&"-".repeat(WIDTH));
    out.push('\n');

    for record in low.iter().take(LOW_FILES_SHOWN) {
        out.push_str(&file_row(record));
    }
    out.push('\n');
}

fn file_row(record: &CoverageRecord) -> String {
    format!(
        "  {:<40} {:>6.2}%  ({}/{})\n",
        record.basename(),
        record.percentage,
        record.covered,
        record.total
    )
}

/// Group digits in threes: 1234567 -> "1,234,567"
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
