//! Error types for flattening

use std::path::PathBuf;

/// Result type for flattening operations
pub type IncludeResult<T> = Result<T, IncludeError>;

/// Fatal errors that abort a flattening run.
///
/// Unresolvable include targets and repeated includes are not errors; they are
/// handled inline by the traversal.
#[derive(Debug, thiserror::Error)]
pub enum IncludeError {
    #[error("cannot open '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write output: {source}")]
    Write {
        #[from]
        source: std::io::Error,
    },
}
