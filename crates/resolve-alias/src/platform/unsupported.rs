use std::path::Path;

use crate::error::AliasError;
use crate::resolver::{BookmarkResolver, Resolution};

/// Stand-in for systems without Finder aliases.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBookmarks;

impl BookmarkResolver for SystemBookmarks {
    fn read_bookmark(&self, alias: &Path) -> Result<Vec<u8>, AliasError> {
        tracing::debug!(alias = %alias.display(), "no bookmark service on this platform");
        Err(AliasError::Unsupported)
    }

    fn resolve(&self, _bookmark: &[u8]) -> Result<Resolution, AliasError> {
        Err(AliasError::Unsupported)
    }
}
