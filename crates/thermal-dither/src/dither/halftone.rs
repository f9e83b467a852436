//! Clustered-dot halftone screening.
//!
//! The image is split into `n x n` cells. Inside each cell, pixels are ranked
//! by their distance from the cell center, and the rank becomes a screen
//! value: the center pixel gets the highest value, the corners the lowest.
//! A pixel is inked when the cell's average gray is below the threshold
//! shifted by its screen value, so the dot grows outward from the center as
//! the cell gets darker. Ranking (instead of using the raw distance) spreads
//! the screen evenly over 0..=255, so each cell reproduces `n^2 + 1` tone
//! levels and a 50% gray inks half the cell.

use tracing::debug;

use super::biased_threshold;
use crate::config::{MAX_PATTERN_SIZE, MIN_PATTERN_SIZE};
use crate::gray::GrayscaleView;
use crate::grid::MonochromeGrid;

/// Screen values for an `n x n` cell, row-major, center high.
///
/// Ties in distance are broken by row, then column, so the result is stable.
pub fn halftone_screen(cell_size: u8) -> Vec<u8> {
    let n = usize::from(cell_size.clamp(MIN_PATTERN_SIZE, MAX_PATTERN_SIZE));
    let center = (n as f32 - 1.0) / 2.0;

    let mut order: Vec<(f32, usize)> = (0..n * n)
        .map(|i| {
            let dx = (i % n) as f32 - center;
            let dy = (i / n) as f32 - center;
            (dx * dx + dy * dy, i)
        })
        .collect();
    order.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

    let cells = (n * n) as u32;
    let mut screen = vec![0u8; n * n];
    for (rank, &(_, i)) in order.iter().enumerate() {
        let level = (2 * rank as u32 + 1) * 128 / cells;
        screen[i] = (255 - level) as u8;
    }
    screen
}

/// Apply halftone dithering with square cells of edge `cell_size`.
///
/// Edge cells that are cut off by the image border average only their
/// in-bounds pixels.
pub fn halftone_dither(img: &GrayscaleView, threshold: u8, cell_size: u8) -> MonochromeGrid {
    let (width, height) = img.dimensions();
    let n = usize::from(cell_size.clamp(MIN_PATTERN_SIZE, MAX_PATTERN_SIZE));
    let screen = halftone_screen(cell_size);
    debug!(
        width,
        height,
        threshold,
        cell_size = n,
        "Applying halftone dithering"
    );

    let cells_x = (width as usize).div_ceil(n);
    let cells_y = (height as usize).div_ceil(n);
    let mut sums = vec![0u32; cells_x * cells_y];
    let mut counts = vec![0u32; cells_x * cells_y];
    for (x, y, pixel) in img.enumerate_pixels() {
        let cell = (y as usize / n) * cells_x + x as usize / n;
        sums[cell] += u32::from(pixel.0[0]);
        counts[cell] += 1;
    }
    let means: Vec<f32> = sums
        .iter()
        .zip(&counts)
        .map(|(&sum, &count)| sum as f32 / count.max(1) as f32)
        .collect();

    let adjusted: Vec<f32> = screen
        .iter()
        .map(|&s| biased_threshold(threshold, f32::from(s) - 128.0))
        .collect();

    let mut output = MonochromeGrid::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let (xu, yu) = (x as usize, y as usize);
            let mean = means[(yu / n) * cells_x + xu / n];
            let t = adjusted[(yu % n) * n + xu % n];
            output.set(x, y, mean < t);
        }
    }
    output
}
