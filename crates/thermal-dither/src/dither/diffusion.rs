//! Error-diffusion dithering (Floyd-Steinberg and Atkinson).
//!
//! Both kernels scan left-to-right, top-to-bottom over a private `f32` copy of
//! the grayscale values. Error shares that would land outside the image are
//! dropped, never wrapped or clamped back in.

use tracing::debug;

use crate::gray::GrayscaleView;
use crate::grid::MonochromeGrid;

/// A diffusion target: column offset, row offset, share of the error.
type Tap = (i32, u32, f32);

/// Floyd-Steinberg error distribution:
/// - Right:        7/16
/// - Bottom-left:  3/16
/// - Bottom:       5/16
/// - Bottom-right: 1/16
const FLOYD_STEINBERG: &[Tap] = &[
    (1, 0, 7.0 / 16.0),
    (-1, 1, 3.0 / 16.0),
    (0, 1, 5.0 / 16.0),
    (1, 1, 1.0 / 16.0),
];

/// Atkinson error distribution: 1/8 of the error to each of six neighbors,
/// so only 3/4 of it is carried forward.
const ATKINSON: &[Tap] = &[
    (1, 0, 1.0 / 8.0),
    (2, 0, 1.0 / 8.0),
    (-1, 1, 1.0 / 8.0),
    (0, 1, 1.0 / 8.0),
    (1, 1, 1.0 / 8.0),
    (0, 2, 1.0 / 8.0),
];

/// Apply Floyd-Steinberg dithering.
pub fn floyd_steinberg_dither(img: &GrayscaleView, threshold: u8) -> MonochromeGrid {
    let (width, height) = img.dimensions();
    debug!(width, height, threshold, "Applying Floyd-Steinberg dithering");
    diffuse(img, threshold, FLOYD_STEINBERG)
}

/// Apply Atkinson dithering.
pub fn atkinson_dither(img: &GrayscaleView, threshold: u8) -> MonochromeGrid {
    let (width, height) = img.dimensions();
    debug!(width, height, threshold, "Applying Atkinson dithering");
    diffuse(img, threshold, ATKINSON)
}

fn diffuse(img: &GrayscaleView, threshold: u8, taps: &[Tap]) -> MonochromeGrid {
    let (width, height) = img.dimensions();
    let threshold = f32::from(threshold);

    let mut buffer: Vec<f32> = img.as_raw().iter().map(|&v| f32::from(v)).collect();
    let mut output = MonochromeGrid::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let old_pixel = buffer[index(width, x, y)];
            let new_pixel = if old_pixel < threshold { 0.0 } else { 255.0 };
            output.set(x, y, new_pixel == 0.0);

            let error = old_pixel - new_pixel;
            if error == 0.0 {
                continue;
            }
            distribute_error(&mut buffer, taps, x, y, width, height, error);
        }
    }

    output
}

/// Distribute quantization error to in-bounds neighbors, in kernel order.
fn distribute_error(
    buffer: &mut [f32],
    taps: &[Tap],
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    error: f32,
) {
    for &(dx, dy, share) in taps {
        let Some(nx) = x.checked_add_signed(dx) else {
            continue;
        };
        let ny = y + dy;
        if nx >= width || ny >= height {
            continue;
        }
        buffer[index(width, nx, ny)] += error * share;
    }
}

#[inline]
fn index(width: u32, x: u32, y: u32) -> usize {
    y as usize * width as usize + x as usize
}
