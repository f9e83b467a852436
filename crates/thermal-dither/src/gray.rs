//! Grayscale view derivation.

use image::{GrayImage, Luma, RgbaImage};
use tracing::debug;

/// Single-channel luminance buffer the dither engine reads from.
pub type GrayscaleView = GrayImage;

/// Unweighted average of the red, green and blue channels, rounded to nearest.
#[inline]
pub fn luminance(rgb: [u8; 3]) -> u8 {
    let sum = u16::from(rgb[0]) + u16::from(rgb[1]) + u16::from(rgb[2]);
    ((sum + 1) / 3) as u8
}

/// Derive a grayscale view from an RGBA raster. Alpha is ignored.
pub fn to_grayscale(img: &RgbaImage) -> GrayscaleView {
    let (width, height) = img.dimensions();
    debug!(width, height, "Deriving grayscale view");

    GrayImage::from_fn(width, height, |x, y| {
        let [r, g, b, _] = img.get_pixel(x, y).0;
        Luma([luminance([r, g, b])])
    })
}
