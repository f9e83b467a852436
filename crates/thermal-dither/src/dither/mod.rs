//! Dithering algorithms for converting grayscale views to monochrome grids.
//!
//! Every algorithm is a pure function of its inputs: it reads a
//! [`GrayscaleView`], allocates its own working state and returns a
//! [`MonochromeGrid`] of identical dimensions. Nothing is shared between
//! calls, so independent images can be dithered concurrently.

pub mod diffusion;
pub mod halftone;
pub mod ordered;
pub mod threshold;

pub use diffusion::{atkinson_dither, floyd_steinberg_dither};
pub use halftone::{halftone_dither, halftone_screen};
pub use ordered::{bayer_matrix, ordered_dither};
pub use threshold::threshold_dither;

use tracing::debug;

use crate::config::{DitherConfig, DitherMethod};
use crate::gray::GrayscaleView;
use crate::grid::MonochromeGrid;

/// Dither a grayscale view with the configured method.
pub fn dither(gray: &GrayscaleView, config: &DitherConfig) -> MonochromeGrid {
    let config = config.clamped();
    let (width, height) = gray.dimensions();
    debug!(
        width,
        height,
        method = %config.method,
        threshold = config.threshold,
        "Dispatching dither"
    );

    match config.method {
        DitherMethod::Threshold => threshold_dither(gray, config.threshold),
        DitherMethod::FloydSteinberg => floyd_steinberg_dither(gray, config.threshold),
        DitherMethod::Atkinson => atkinson_dither(gray, config.threshold),
        DitherMethod::OrderedBayer => {
            ordered_dither(gray, config.threshold, config.bayer_matrix_size)
        }
        DitherMethod::Halftone => halftone_dither(gray, config.threshold, config.halftone_cell_size),
    }
}

/// Shift `threshold` by a screen bias and keep the result inside the range
/// where flat black still inks and flat white never does.
///
/// A zero threshold keeps a zero floor so that it still means "no ink".
pub(crate) fn biased_threshold(threshold: u8, bias: f32) -> f32 {
    let floor = if threshold == 0 { 0.0 } else { 1.0 };
    (f32::from(threshold) + bias).clamp(floor, 255.0)
}
