//! Ordered (Bayer matrix) dithering.
//!
//! Each pixel is compared against the global threshold shifted by the matrix
//! entry at `(x mod n, y mod n)`. No error is carried between pixels.

use tracing::debug;

use super::biased_threshold;
use crate::config::{MAX_PATTERN_SIZE, MIN_PATTERN_SIZE};
use crate::gray::GrayscaleView;
use crate::grid::MonochromeGrid;

/// Canonical 4x4 Bayer ordering, values 0..16.
#[rustfmt::skip]
const BAYER_4: [[u8; 4]; 4] = [
    [ 0,  8,  2, 10],
    [12,  4, 14,  6],
    [ 3, 11,  1,  9],
    [15,  7, 13,  5],
];

/// Bayer index matrix of edge `n` (a power of two), values `0..n*n`.
///
/// `M(2k)[y][x] = 4 * M(k)[y mod k][x mod k] + Q`, with quadrant offsets
/// `Q` = 0 (top-left), 2 (top-right), 3 (bottom-left), 1 (bottom-right).
fn bayer_indices(n: usize) -> Vec<Vec<u16>> {
    if n == 4 {
        return BAYER_4
            .iter()
            .map(|row| row.iter().map(|&v| u16::from(v)).collect())
            .collect();
    }
    if n <= 1 {
        return vec![vec![0]];
    }

    let half = n / 2;
    let base = bayer_indices(half);
    (0..n)
        .map(|y| {
            (0..n)
                .map(|x| {
                    let quadrant = match (x >= half, y >= half) {
                        (false, false) => 0,
                        (true, false) => 2,
                        (false, true) => 3,
                        (true, true) => 1,
                    };
                    4 * base[y % half][x % half] + quadrant
                })
                .collect()
        })
        .collect()
}

/// Normalize a requested matrix size: clamp into 2..=16, round down to a
/// power of two.
fn matrix_edge(size: u8) -> usize {
    let size = size.clamp(MIN_PATTERN_SIZE, MAX_PATTERN_SIZE);
    1usize << size.ilog2()
}

/// Bayer threshold matrix scaled to 0..=255.
///
/// Entry `m` maps to `(2m + 1) * 128 / n^2`, which centers the matrix on 128.
pub fn bayer_matrix(size: u8) -> Vec<Vec<u8>> {
    let n = matrix_edge(size);
    let cells = (n * n) as u32;
    bayer_indices(n)
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|m| ((2 * u32::from(m) + 1) * 128 / cells) as u8)
                .collect()
        })
        .collect()
}

/// Apply ordered dithering with an `n x n` Bayer matrix.
///
/// `ink = gray < threshold + (matrix[y % n][x % n] - 128) / 2`
pub fn ordered_dither(img: &GrayscaleView, threshold: u8, matrix_size: u8) -> MonochromeGrid {
    let (width, height) = img.dimensions();
    let matrix = bayer_matrix(matrix_size);
    let n = matrix.len();
    if n != usize::from(matrix_size) {
        debug!(
            requested = matrix_size,
            effective = n,
            "Bayer matrix size adjusted to a power of two in 2..=16"
        );
    }
    debug!(
        width,
        height,
        threshold,
        matrix_size = n,
        "Applying ordered dithering"
    );

    // One adjusted threshold per matrix cell.
    let adjusted: Vec<Vec<f32>> = matrix
        .iter()
        .map(|row| {
            row.iter()
                .map(|&m| biased_threshold(threshold, (f32::from(m) - 128.0) / 2.0))
                .collect()
        })
        .collect();

    let mut output = MonochromeGrid::new(width, height);
    for (x, y, pixel) in img.enumerate_pixels() {
        let t = adjusted[y as usize % n][x as usize % n];
        output.set(x, y, f32::from(pixel.0[0]) < t);
    }
    output
}
