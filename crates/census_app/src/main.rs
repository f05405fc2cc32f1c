//! Batch entry point: collect every profile listed in the identifier file
//! and write the result table.

use std::path::PathBuf;

use census_engine::{
    collect_profiles, CollectorConfig, FetchSettings, ReqwestFetcher, DEFAULT_BASE_URL,
};
use census_logging::{census_info, LogDestination};

/// Identifier list consumed by the run, one account per line.
const IDENTIFIERS_FILE: &str = "gitusers.txt";
/// Output table, fully overwritten on each run.
const OUTPUT_FILE: &str = "profiles.csv";

fn main() -> anyhow::Result<()> {
    census_logging::initialize(LogDestination::Both);

    let config = CollectorConfig {
        identifiers_path: PathBuf::from(IDENTIFIERS_FILE),
        output_path: PathBuf::from(OUTPUT_FILE),
    };
    let fetcher = ReqwestFetcher::new(DEFAULT_BASE_URL, FetchSettings::default())?;

    let runtime = tokio::runtime::Runtime::new()?;
    let summary = runtime.block_on(collect_profiles(&config, &fetcher))?;

    census_info!(
        "collection finished: {} rows in {:?}",
        summary.row_count,
        summary.output_path
    );
    Ok(())
}
