//! Foundation-backed bookmark resolution.

use std::path::{Path, PathBuf};

use objc2::runtime::Bool;
use objc2_foundation::{NSData, NSError, NSString, NSURL, NSURLBookmarkResolutionOptions};

use crate::error::AliasError;
use crate::resolver::{BookmarkResolver, Resolution};

/// No prompts, no mounting of network or removable volumes.
const RESOLUTION_OPTIONS: NSURLBookmarkResolutionOptions =
    NSURLBookmarkResolutionOptions::WithoutUI.union(NSURLBookmarkResolutionOptions::WithoutMounting);

/// Aliases as Foundation's `NSURL` bookmark API sees them.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBookmarks;

impl BookmarkResolver for SystemBookmarks {
    fn read_bookmark(&self, alias: &Path) -> Result<Vec<u8>, AliasError> {
        let url = NSURL::fileURLWithPath(&NSString::from_str(&alias.to_string_lossy()));

        NSURL::bookmarkDataWithContentsOfURL_error(&url)
            .map(|data| data.to_vec())
            .map_err(|err| AliasError::Read {
                path: alias.to_path_buf(),
                reason: describe(&err),
            })
    }

    fn resolve(&self, bookmark: &[u8]) -> Result<Resolution, AliasError> {
        let data = NSData::with_bytes(bookmark);
        let mut stale = Bool::NO;

        // SAFETY: `stale` lives for the whole call.
        let url = unsafe {
            NSURL::URLByResolvingBookmarkData_options_relativeToURL_bookmarkDataIsStale_error(
                &data,
                RESOLUTION_OPTIONS,
                None,
                &mut stale,
            )
        }
        .map_err(|err| AliasError::Resolve {
            reason: describe(&err),
        })?;

        let path = url.path().ok_or(AliasError::NoPath)?;

        Ok(Resolution {
            path: PathBuf::from(path.to_string()),
            stale: stale.as_bool(),
        })
    }
}

fn describe(err: &NSError) -> String {
    err.localizedDescription().to_string()
}
