//! Coverage artifact discovery
//!
//! Recursively scans the build output directory for gcov data files
//! (`.gcda`). Finding nothing is a reportable outcome, not an error.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Suffix written by gcc's coverage instrumentation at test runtime
const ARTIFACT_SUFFIX: &str = "gcda";

/// Find all `.gcda` files under the build directory
pub fn find_artifacts(build_dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = format!("{}/**/*.{}", build_dir.display(), ARTIFACT_SUFFIX);
    let paths = glob::glob(&pattern)
        .with_context(|| format!("Invalid artifact search pattern: {}", pattern))?
        // Unreadable entries are skipped rather than failing the scan
        .filter_map(|entry| entry.ok())
        .collect();
    Ok(paths)
}
