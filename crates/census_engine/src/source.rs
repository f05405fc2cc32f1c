use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("identifier list {path:?} is missing or unreadable: {source}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read the identifier list: one identifier per line, order preserved.
///
/// Entries pass through verbatim; interior blank lines are kept and will be
/// fetched as literal identifiers. An empty file yields no identifiers, and
/// a trailing newline does not produce a phantom empty entry.
pub fn read_identifiers(path: &Path) -> Result<Vec<String>, SourceError> {
    let text = fs::read_to_string(path).map_err(|source| SourceError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(text.lines().map(ToOwned::to_owned).collect())
}
