/// Error types for HIP index generation.
///
/// Only storage and serialization faults surface here. Missing directories,
/// absent header blocks and non-matching filenames degrade to empty results
/// instead. Binary crates wrap `IndexError` via `#[from]`.
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("io error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl IndexError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
