use std::path::PathBuf;

use census_logging::{census_debug, census_info};
use thiserror::Error;

use crate::export::render_csv;
use crate::fetch::ProfileFetcher;
use crate::persist::{AtomicFileWriter, PersistError};
use crate::source::{read_identifiers, SourceError};
use crate::types::{FetchError, ProfileRecord, RunSummary};

/// Where the pipeline reads its identifier list and writes the table.
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    pub identifiers_path: PathBuf,
    pub output_path: PathBuf,
}

#[derive(Debug, Error)]
pub enum CollectError {
    #[error("failed to read identifier list: {0}")]
    Source(#[from] SourceError),
    #[error("fetch failed for {identifier:?}: {source}")]
    Fetch {
        identifier: String,
        #[source]
        source: FetchError,
    },
    #[error("failed to write output table: {0}")]
    Persist(#[from] PersistError),
}

/// Run the whole batch: fetch every identifier in input order, then write
/// the table once. The first failure aborts the run and nothing is written.
pub async fn collect_profiles(
    config: &CollectorConfig,
    fetcher: &dyn ProfileFetcher,
) -> Result<RunSummary, CollectError> {
    let identifiers = read_identifiers(&config.identifiers_path)?;
    census_info!("collecting {} profiles", identifiers.len());

    let mut records: Vec<ProfileRecord> = Vec::with_capacity(identifiers.len());
    for identifier in &identifiers {
        census_debug!("fetching profile for {identifier:?}");
        let record = fetcher
            .fetch_profile(identifier)
            .await
            .map_err(|source| CollectError::Fetch {
                identifier: identifier.clone(),
                source,
            })?;
        records.push(record);
    }

    let table = render_csv(&records);
    let writer = AtomicFileWriter::new(config.output_path.clone());
    let output_path = writer.write(&table)?;
    census_info!("wrote {} rows to {:?}", records.len(), output_path);

    Ok(RunSummary {
        row_count: records.len(),
        output_path,
    })
}
