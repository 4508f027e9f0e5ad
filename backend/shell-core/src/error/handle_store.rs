use common::ErrorLocation;

use std::path::PathBuf;

use thiserror::Error as ThisError;

/// Failures while reading the server handle file.
///
/// Every variant means "no server to terminate" to the shutdown path.
#[derive(Debug, ThisError)]
pub enum HandleStoreError {
    #[error("Handle Store Unavailable Error: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },

    #[error("Handle Store Read Error: {path}: {source} {location}")]
    Read {
        path: PathBuf,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },

    #[error("Handle Parse Error: {message} {location}")]
    Parse {
        message: String,
        location: ErrorLocation,
    },
}
