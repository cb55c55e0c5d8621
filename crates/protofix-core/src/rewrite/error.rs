//! Errors raised while rewriting

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during a rewrite
#[derive(Debug, Error)]
pub enum RewriteError {
    #[error("Invalid prefix {prefix:?}: {reason}")]
    InvalidPrefix { prefix: String, reason: &'static str },

    #[error("Failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to walk definition tree: {0}")]
    Walk(#[from] ignore::Error),

    #[error("Output {} would overwrite its own input", .path.display())]
    OutputIsInput { path: PathBuf },
}
