use std::path::Path;

use image::DynamicImage;

use crate::error::IconError;
use crate::size::IconSize;

#[path = "platform/macos.rs"]
#[cfg(target_os = "macos")]
mod macos;

#[path = "platform/unsupported.rs"]
#[cfg(not(target_os = "macos"))]
mod unsupported;

#[cfg(target_os = "macos")]
pub use macos::SystemIcons;

#[cfg(not(target_os = "macos"))]
pub use unsupported::SystemIcons;

/// Something that can draw the icon the desktop shows for a path.
pub trait IconSource {
    /// Render the representative icon of `path` at roughly `size`.
    ///
    /// Implementations may return a raster of any dimensions (HiDPI screens
    /// render at a multiple of the requested size); the caller fits it to
    /// the final canvas. A path that does not exist is not an error by
    /// itself: the desktop shows a generic icon for it.
    fn render_icon(&self, path: &Path, size: IconSize) -> Result<DynamicImage, IconError>;
}

impl<S: IconSource + ?Sized> IconSource for &S {
    fn render_icon(&self, path: &Path, size: IconSize) -> Result<DynamicImage, IconError> {
        (**self).render_icon(path, size)
    }
}
