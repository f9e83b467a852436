//! Processing pipeline: scale -> tone -> invert -> dither -> preview.
//!
//! Always starts from the caller's original image. Feeding a previous result
//! back in would compound quantization error across edits.

use image::RgbaImage;
use tracing::debug;

use crate::codec::grid_to_preview_bitmap;
use crate::config::{DitherConfig, ScaleConfig, ToneConfig};
use crate::dither::dither;
use crate::error::{ProcessError, Result};
use crate::gray::to_grayscale;
use crate::grid::MonochromeGrid;
use crate::scale::scale_to_width;
use crate::tone::{adjust_tone, invert};

/// Output of a pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedImage {
    /// Black/white RGBA rendering for on-screen preview.
    pub preview: RgbaImage,

    /// Ink grid for the printer.
    pub grid: MonochromeGrid,
}

/// Run the full pipeline with aspect ratio preserved and a 1:1 preview.
pub fn process(
    image: &RgbaImage,
    tone: &ToneConfig,
    dither_config: &DitherConfig,
    target_width: u32,
) -> Result<ProcessedImage> {
    process_with(image, tone, dither_config, &ScaleConfig::new(target_width))
}

/// Run the full pipeline with explicit output geometry.
///
/// Any stage failure aborts the run; no partial result is returned.
pub fn process_with(
    image: &RgbaImage,
    tone: &ToneConfig,
    dither_config: &DitherConfig,
    scale: &ScaleConfig,
) -> Result<ProcessedImage> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(ProcessError::InvalidImageDimensions { width, height });
    }
    debug!(
        width,
        height,
        target_width = scale.target_width,
        method = %dither_config.method,
        "Processing image"
    );

    let scaled = scale_to_width(image, scale.target_width, scale.maintain_aspect_ratio)?;

    let mut adjusted = adjust_tone(&scaled, tone);
    if tone.invert {
        invert(&mut adjusted);
    }

    let gray = to_grayscale(&adjusted);
    let grid = dither(&gray, dither_config);
    let preview = grid_to_preview_bitmap(&grid, scale.preview_scale)?;

    debug!(
        width = grid.width(),
        height = grid.height(),
        ink = grid.ink_count(),
        "Processing complete"
    );
    Ok(ProcessedImage { preview, grid })
}
