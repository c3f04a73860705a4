use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong between asking for an icon and printing it.
///
/// The command line collapses all of these into a single fixed message; the
/// variants exist for logging and for library callers.
#[derive(Debug, Error)]
pub enum IconError {
    #[error("invalid icon size: {0}")]
    InvalidSize(String),

    #[error("no icon could be rendered for '{}': {reason}", .path.display())]
    Render { path: PathBuf, reason: String },

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("invalid base64 data: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("system icons are not available on this platform")]
    Unsupported,
}
