//! AppKit-backed icon rendering.

use std::path::Path;

use image::{DynamicImage, ImageFormat};
use objc2::AnyThread;
use objc2::rc::Retained;
use objc2::runtime::AnyObject;
use objc2_app_kit::{
    NSBitmapImageFileType, NSBitmapImageRep, NSBitmapImageRepPropertyKey, NSCompositingOperation,
    NSImage, NSWorkspace,
};
use objc2_foundation::{NSData, NSDictionary, NSPoint, NSRect, NSSize, NSString};
use tracing::debug;

use crate::error::IconError;
use crate::size::IconSize;
use crate::source::IconSource;

/// Icons as `NSWorkspace` reports them.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemIcons;

impl IconSource for SystemIcons {
    fn render_icon(&self, path: &Path, size: IconSize) -> Result<DynamicImage, IconError> {
        let full_path = NSString::from_str(&path.to_string_lossy());
        let icon = NSWorkspace::sharedWorkspace().iconForFile(&full_path);

        let side = f64::from(size.pixels());
        let bounds = NSSize::new(side, side);
        let canvas = NSImage::initWithSize(NSImage::alloc(), bounds);

        {
            let _focus = FocusGuard::lock(&canvas);
            icon.drawInRect_fromRect_operation_fraction(
                NSRect::new(NSPoint::ZERO, bounds),
                NSRect::ZERO,
                NSCompositingOperation::Copy,
                1.0,
            );
        }

        let png = png_representation(&canvas).ok_or_else(|| IconError::Render {
            path: path.to_path_buf(),
            reason: "canvas has no bitmap representation".to_string(),
        })?;
        debug!(bytes = png.len(), "AppKit produced PNG data");

        Ok(image::load_from_memory_with_format(
            &png.to_vec(),
            ImageFormat::Png,
        )?)
    }
}

/// Holds focus on an image so drawing lands in it; unlocks on drop.
struct FocusGuard<'a> {
    image: &'a NSImage,
}

impl<'a> FocusGuard<'a> {
    #[allow(deprecated)]
    fn lock(image: &'a NSImage) -> Self {
        image.lockFocus();
        FocusGuard { image }
    }
}

impl Drop for FocusGuard<'_> {
    #[allow(deprecated)]
    fn drop(&mut self) {
        self.image.unlockFocus();
    }
}

fn png_representation(canvas: &NSImage) -> Option<Retained<NSData>> {
    let tiff = canvas.TIFFRepresentation()?;
    let bitmap = NSBitmapImageRep::imageRepWithData(&tiff)?;
    let properties: Retained<NSDictionary<NSBitmapImageRepPropertyKey, AnyObject>> =
        NSDictionary::new();

    // SAFETY: an empty dictionary satisfies any property value type.
    unsafe { bitmap.representationUsingType_properties(NSBitmapImageFileType::PNG, &properties) }
}
