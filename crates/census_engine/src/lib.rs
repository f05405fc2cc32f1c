//! Census engine: the fetch-extract-export pipeline.
mod export;
mod fetch;
mod persist;
mod pipeline;
mod source;
mod types;

pub use export::{render_csv, CSV_HEADER};
pub use fetch::{FetchSettings, ProfileFetcher, ReqwestFetcher, DEFAULT_BASE_URL};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use pipeline::{collect_profiles, CollectError, CollectorConfig};
pub use source::{read_identifiers, SourceError};
pub use types::{FailureKind, FetchError, ProfileRecord, RunSummary};
