use std::path::PathBuf;

use thiserror::Error;

/// Failures reported by the OS carry its own description as the message.
#[derive(Debug, Error)]
pub enum AliasError {
    #[error("{reason}")]
    Read { path: PathBuf, reason: String },

    #[error("{reason}")]
    Resolve { reason: String },

    #[error("bookmark target has no file system path")]
    NoPath,

    #[error("alias resolution is not available on this platform")]
    Unsupported,
}
