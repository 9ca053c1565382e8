//! Error types for collection and deletion.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a collection call.
#[derive(Error, Debug)]
pub enum CleanupError {
    /// The walk could not proceed; results gathered so far are discarded.
    #[error("failed to traverse {}: {source}", path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

/// A single file or directory that could not be removed.
#[derive(Error, Debug)]
#[error("can't delete {}: {source}", path.display())]
pub struct DeletionError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}
