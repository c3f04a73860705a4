//! Canvas, PNG and base64 handling for rendered icons.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use image::codecs::png::PngEncoder;
use image::imageops::{self, FilterType};
use image::{DynamicImage, ExtendedColorType, ImageEncoder, ImageFormat, RgbaImage};

use crate::error::IconError;
use crate::size::IconSize;

/// Copy `icon` into a fresh transparent `size x size` canvas.
///
/// The icon is stretched to fill the canvas exactly and copied over it
/// without blending, so source alpha is kept as-is. A source that already
/// has the right dimensions is copied pixel for pixel.
pub fn fit_to_canvas(icon: &DynamicImage, size: IconSize) -> RgbaImage {
    let side = size.pixels();
    let mut canvas = RgbaImage::new(side, side);

    let scaled = if icon.width() == side && icon.height() == side {
        icon.to_rgba8()
    } else {
        icon.resize_exact(side, side, FilterType::Lanczos3).to_rgba8()
    };
    imageops::replace(&mut canvas, &scaled, 0, 0);

    canvas
}

pub fn encode_png(canvas: &RgbaImage) -> Result<Vec<u8>, IconError> {
    let mut png = Vec::new();
    PngEncoder::new(&mut png).write_image(
        canvas.as_raw(),
        canvas.width(),
        canvas.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(png)
}

/// Standard alphabet, padded.
pub fn encode_base64(png: &[u8]) -> String {
    BASE64.encode(png)
}

/// Turn `iconfetcher` output back into an image.
///
/// Surrounding whitespace (such as the trailing newline) is ignored.
pub fn decode_icon_base64(text: &str) -> Result<DynamicImage, IconError> {
    let png = BASE64.decode(text.trim())?;
    Ok(image::load_from_memory_with_format(&png, ImageFormat::Png)?)
}
