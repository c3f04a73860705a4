use std::path::{Path, PathBuf};

use crate::error::AliasError;

#[path = "platform/macos.rs"]
#[cfg(target_os = "macos")]
mod macos;

#[path = "platform/unsupported.rs"]
#[cfg(not(target_os = "macos"))]
mod unsupported;

#[cfg(target_os = "macos")]
pub use macos::SystemBookmarks;

#[cfg(not(target_os = "macos"))]
pub use unsupported::SystemBookmarks;

/// Outcome of resolving a bookmark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Absolute path of the bookmark's target.
    pub path: PathBuf,
    /// The target was found somewhere other than where the bookmark
    /// recorded it.
    pub stale: bool,
}

/// Reads and resolves alias/bookmark files.
///
/// Resolution must never show UI and must never mount a volume to reach the
/// target.
pub trait BookmarkResolver {
    /// Raw bookmark bytes stored in the alias file at `alias`.
    fn read_bookmark(&self, alias: &Path) -> Result<Vec<u8>, AliasError>;

    fn resolve(&self, bookmark: &[u8]) -> Result<Resolution, AliasError>;
}

impl<R: BookmarkResolver + ?Sized> BookmarkResolver for &R {
    fn read_bookmark(&self, alias: &Path) -> Result<Vec<u8>, AliasError> {
        (**self).read_bookmark(alias)
    }

    fn resolve(&self, bookmark: &[u8]) -> Result<Resolution, AliasError> {
        (**self).resolve(bookmark)
    }
}
