use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading input lines
#[derive(Debug, Error)]
pub enum SourceError {
    /// A file could not be opened or read
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Standard input could not be read
    #[error("Failed to read standard input: {0}")]
    Stdin(#[source] std::io::Error),
}
