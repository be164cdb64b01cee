//! gcov output extraction
//!
//! Runs `gcov -r` against one `.gcda` artifact and pulls the source file
//! name and line-coverage figure out of its combined stdout/stderr text.
//!
//! Extraction is deliberately fail-silent: a missing pattern or a failed
//! spawn yields `None` so one bad artifact never takes down the whole
//! report. The caller filters out the misses before aggregating.

use regex::Regex;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::model::CoverageRecord;

/// Compiled patterns for the two lines gcov is contracted to print
pub struct GcovExtractor {
    command: String,
    file_re: Regex,
    lines_re: Regex,
}

impl GcovExtractor {
    /// `command` is the gcov executable to invoke, usually just "gcov"
    pub fn new(command: &str) -> Self {
        Self {
            command: command.to_string(),
            // gcov prints e.g.:
            //   File 'src/core/engine.c'
            //   Lines executed:75.00% of 40
            file_re: Regex::new(r"File '([^']+)'").unwrap(),
            lines_re: Regex::new(r"Lines executed:([0-9]+(?:\.[0-9]+)?)% of ([0-9]+)").unwrap(),
        }
    }

    /// Run gcov for one artifact and extract a record, or `None` on any failure
    pub fn extract(&self, artifact: &Path) -> Option<CoverageRecord> {
        let output = Command::new(&self.command)
            // -r restricts the report to files still present in the tree
            .arg("-r")
            .arg(artifact)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .ok()?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        self.parse_output(&text)
    }

    /// Pull a record out of captured gcov text; `None` if either line is absent
    pub fn parse_output(&self, output: &str) -> Option<CoverageRecord> {
        let file = self.file_re.captures(output)?.get(1)?.as_str().to_string();

        let caps = self.lines_re.captures(output)?;
        let percentage: f64 = caps.get(1)?.as_str().parse().ok()?;
        let total: u32 = caps.get(2)?.as_str().parse().ok()?;

        Some(CoverageRecord::new(file, percentage, total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> GcovExtractor {
        GcovExtractor::new("gcov")
    }

    #[test]
    fn parses_well_formed_output() {
        let output = "\
File 'src/core/engine.c'
Lines executed:75.00% of 40
Creating 'engine.c.gcov'
";
        let record = extractor().parse_output(output).unwrap();
        assert_eq!(record.file, "src/core/engine.c");
        assert_eq!(record.percentage, 75.0);
        assert_eq!(record.covered, 30);
        assert_eq!(record.total, 40);
    }

    #[test]
    fn parses_integer_percentage() {
        let output = "File 'src/utils/log.c'\nLines executed:100% of 12\n";
        let record = extractor().parse_output(output).unwrap();
        assert_eq!(record.covered, 12);
        assert_eq!(record.total, 12);
    }

    #[test]
    fn missing_file_line_yields_none() {
        let output = "Lines executed:75.00% of 40\n";
        assert!(extractor().parse_output(output).is_none());
    }

    #[test]
    fn missing_coverage_line_yields_none() {
        let output = "File 'src/core/engine.c'\nNo executable lines\n";
        assert!(extractor().parse_output(output).is_none());
    }

    #[test]
    fn garbage_output_yields_none() {
        assert!(extractor().parse_output("").is_none());
        assert!(extractor().parse_output("gcov: error: unknown file").is_none());
    }

    #[test]
    fn failed_spawn_yields_none() {
        let extractor = GcovExtractor::new("definitely-not-a-real-gcov-binary");
        assert!(extractor.extract(Path::new("build/main.gcda")).is_none());
    }

    #[test]
    fn matches_lines_across_other_noise() {
        // gcov interleaves per-function stats; the file/lines pair still matches
        let output = "\
Function 'engine_init'
Lines executed:100.00% of 8
File 'src/core/engine.c'
Lines executed:62.50% of 16
";
        let record = extractor().parse_output(output).unwrap();
        assert_eq!(record.file, "src/core/engine.c");
        // First match wins for the lines pattern
        assert_eq!(record.percentage, 100.0);
    }
}
