use std::path::Path;

use image::DynamicImage;

use crate::error::IconError;
use crate::size::IconSize;
use crate::source::IconSource;

/// Placeholder for desktops without a system icon service.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemIcons;

impl IconSource for SystemIcons {
    fn render_icon(&self, path: &Path, _size: IconSize) -> Result<DynamicImage, IconError> {
        tracing::debug!(path = %path.display(), "no system icon service on this platform");
        Err(IconError::Unsupported)
    }
}
