use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

use covreport::{discovery, gcov::GcovExtractor, report, CoverageRecord};

const DEFAULT_BUILD_DIR: &str = "build";
const DEFAULT_GCOV: &str = "gcov";

#[derive(Parser)]
#[command(name = "covreport")]
#[command(about = "Aggregate gcov coverage data into a textual summary report")]
#[command(version)]
struct Cli {
    /// Directory to scan for .gcda coverage artifacts
    #[arg(long, default_value = DEFAULT_BUILD_DIR)]
    build_dir: PathBuf,

    /// gcov executable to invoke
    #[arg(long, default_value = DEFAULT_GCOV)]
    gcov: String,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let artifacts = discovery::find_artifacts(&cli.build_dir)?;

    // One blocking gcov invocation per artifact; failed or unparsable
    // invocations drop that artifact from the report, nothing more.
    let extractor = GcovExtractor::new(&cli.gcov);
    let records: Vec<CoverageRecord> = artifacts
        .iter()
        .filter_map(|artifact| extractor.extract(artifact))
        .collect();

    // "Nothing to report" paths still exit 0; the report text carries the message
    print!("{}", report::render(artifacts.len(), &records));

    Ok(())
}
