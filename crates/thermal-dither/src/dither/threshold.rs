//! Simple threshold conversion without dithering.

use tracing::debug;

use crate::gray::GrayscaleView;
use crate::grid::MonochromeGrid;

/// Pixels darker than `threshold` become ink.
pub fn threshold_dither(img: &GrayscaleView, threshold: u8) -> MonochromeGrid {
    let (width, height) = img.dimensions();
    debug!(width, height, threshold, "Applying threshold conversion");

    let mut output = MonochromeGrid::new(width, height);
    for (x, y, pixel) in img.enumerate_pixels() {
        output.set(x, y, pixel.0[0] < threshold);
    }
    output
}
