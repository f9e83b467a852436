//! Grid to preview bitmap conversion.
//!
//! One-way only: grids come from the dither engine, never from a bitmap.

use image::{Rgba, RgbaImage};
use tracing::debug;

use crate::config::MAX_PREVIEW_SCALE;
use crate::error::{ProcessError, Result};
use crate::grid::MonochromeGrid;

const INK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const PAPER: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Expand each grid cell to a `scale x scale` block of black or white pixels.
pub fn grid_to_preview_bitmap(grid: &MonochromeGrid, scale: u32) -> Result<RgbaImage> {
    if !(1..=MAX_PREVIEW_SCALE).contains(&scale) {
        return Err(ProcessError::ParameterOutOfRange {
            name: "preview_scale",
            value: i64::from(scale),
            min: 1,
            max: i64::from(MAX_PREVIEW_SCALE),
        });
    }

    let (width, height) = grid.dimensions();
    let (Some(out_w), Some(out_h)) = (width.checked_mul(scale), height.checked_mul(scale)) else {
        return Err(ProcessError::InvalidImageDimensions { width, height });
    };
    debug!(width, height, scale, "Rendering preview bitmap");

    Ok(RgbaImage::from_fn(out_w, out_h, |x, y| {
        if grid.get(x / scale, y / scale) {
            INK
        } else {
            PAPER
        }
    }))
}
