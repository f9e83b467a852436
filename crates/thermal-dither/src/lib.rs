//! Image processing for fixed-width thermal receipt printers.
//!
//! Turns an RGBA raster into a 1-bit ink grid: scale to the print-head
//! width, apply brightness/contrast (and optional inversion), derive a
//! grayscale view, then dither with one of five algorithms. The entry point
//! is [`process`]; the individual stages are public for callers that need
//! them separately.

pub mod codec;
pub mod config;
pub mod dither;
pub mod error;
pub mod gray;
pub mod grid;
pub mod pipeline;
pub mod scale;
pub mod tone;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use codec::grid_to_preview_bitmap;
pub use config::{DitherConfig, DitherMethod, ScaleConfig, ToneConfig};
pub use error::{ProcessError, Result};
pub use gray::{GrayscaleView, to_grayscale};
pub use grid::MonochromeGrid;
pub use pipeline::{ProcessedImage, process, process_with};

/// Standard thermal printer paper width in pixels (48 mm print head).
pub const PAPER_WIDTH: u32 = 384;
