//! Probe entry point: fetch one profile and print its three fields.

use census_engine::{FetchSettings, ProfileFetcher, ReqwestFetcher, DEFAULT_BASE_URL};
use census_logging::LogDestination;

/// Account probed by this entry point.
const PROBE_IDENTIFIER: &str = "epsilon456";

fn main() -> anyhow::Result<()> {
    census_logging::initialize(LogDestination::Terminal);

    let fetcher = ReqwestFetcher::new(DEFAULT_BASE_URL, FetchSettings::default())?;
    let runtime = tokio::runtime::Runtime::new()?;
    let profile = runtime.block_on(fetcher.fetch_profile(PROBE_IDENTIFIER))?;

    println!(
        "{} {} {}",
        profile.username, profile.date_made, profile.num_repos
    );
    Ok(())
}
