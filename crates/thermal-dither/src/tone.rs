//! Brightness, contrast and inversion for RGBA rasters.
//!
//! Contrast is applied before brightness. Alpha is never touched.

use image::RgbaImage;
use tracing::debug;

use crate::config::{MAX_CONTRAST, NEUTRAL_BRIGHTNESS, NEUTRAL_CONTRAST, ToneConfig};

/// Map a contrast percentage (0..=200, 100 neutral) to the classic
/// `259 * (c + 255) / (255 * (259 - c))` factor, where `c` spans -255..=255.
pub fn contrast_factor(contrast: u16) -> f64 {
    let contrast = contrast.min(MAX_CONTRAST);
    let c = (f64::from(contrast) - f64::from(NEUTRAL_CONTRAST)) * 255.0 / 100.0;
    (259.0 * (c + 255.0)) / (255.0 * (259.0 - c))
}

/// Build the per-channel lookup table for a tone config.
fn tone_lut(tone: &ToneConfig) -> [u8; 256] {
    let factor = contrast_factor(tone.contrast);
    let shift = f64::from(tone.brightness) - f64::from(NEUTRAL_BRIGHTNESS);

    let mut lut = [0u8; 256];
    for (value, slot) in lut.iter_mut().enumerate() {
        let adjusted = factor * (value as f64 - 128.0) + 128.0 + shift;
        *slot = adjusted.round().clamp(0.0, 255.0) as u8;
    }
    lut
}

/// Apply brightness and contrast, returning a new raster.
///
/// The neutral config (brightness 128, contrast 100) returns an exact copy.
pub fn adjust_tone(img: &RgbaImage, tone: &ToneConfig) -> RgbaImage {
    let tone = tone.clamped();
    let (width, height) = img.dimensions();

    if tone.is_neutral() {
        debug!(width, height, "Neutral tone, skipping adjustment");
        return img.clone();
    }

    debug!(
        width,
        height,
        brightness = tone.brightness,
        contrast = tone.contrast,
        "Applying tone adjustment"
    );

    let lut = tone_lut(&tone);
    let mut output = img.clone();
    for pixel in output.pixels_mut() {
        for channel in &mut pixel.0[..3] {
            *channel = lut[usize::from(*channel)];
        }
    }
    output
}

/// Invert the color channels in place (`c -> 255 - c`).
pub fn invert(img: &mut RgbaImage) {
    let (width, height) = img.dimensions();
    debug!(width, height, "Inverting image");
    for pixel in img.pixels_mut() {
        for channel in &mut pixel.0[..3] {
            *channel = 255 - *channel;
        }
    }
}
