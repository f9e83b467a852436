//! Scaling to the fixed print-head width.
//!
//! Uses a triangle (bilinear) filter, which antialiases on downscale without
//! the ringing Lanczos introduces around hard edges.

use image::RgbaImage;
use image::imageops::{self, FilterType};
use tracing::debug;

use crate::PAPER_WIDTH;
use crate::error::{ProcessError, Result};

/// Compute the output dimensions for a source image.
///
/// `target_width` is clamped to [`PAPER_WIDTH`]; a zero width is an error.
/// With `maintain_aspect_ratio` the height is
/// `round(target_width / (source_width / source_height))`, never less than 1.
/// Otherwise the source height is kept.
pub fn target_dimensions(
    source_width: u32,
    source_height: u32,
    target_width: u32,
    maintain_aspect_ratio: bool,
) -> Result<(u32, u32)> {
    if source_width == 0 || source_height == 0 {
        return Err(ProcessError::InvalidImageDimensions {
            width: source_width,
            height: source_height,
        });
    }
    if target_width == 0 {
        return Err(ProcessError::InvalidImageDimensions {
            width: target_width,
            height: source_height,
        });
    }
    let target_width = target_width.min(PAPER_WIDTH);

    let height = if maintain_aspect_ratio {
        let aspect = f64::from(source_width) / f64::from(source_height);
        ((f64::from(target_width) / aspect).round() as u32).max(1)
    } else {
        source_height
    };

    Ok((target_width, height))
}

/// Resize an image to `target_width`, returning a new raster.
///
/// Returns a copy of the original if it already has the target dimensions.
pub fn scale_to_width(
    img: &RgbaImage,
    target_width: u32,
    maintain_aspect_ratio: bool,
) -> Result<RgbaImage> {
    let (orig_w, orig_h) = img.dimensions();
    let (width, height) = target_dimensions(orig_w, orig_h, target_width, maintain_aspect_ratio)?;

    if (orig_w, orig_h) == (width, height) {
        debug!(width, height, "Image already at target size, skipping resize");
        return Ok(img.clone());
    }

    debug!(
        orig_w,
        orig_h,
        new_width = width,
        new_height = height,
        "Resizing image to target width"
    );

    Ok(imageops::resize(img, width, height, FilterType::Triangle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn create_test_image(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba([128, 64, 32, 255]))
    }

    #[test]
    fn test_scale_downscale_keeps_aspect() {
        let img = create_test_image(768, 400);
        let result = scale_to_width(&img, 384, true).unwrap();
        assert_eq!(result.dimensions(), (384, 200));
    }

    #[test]
    fn test_scale_upscale() {
        let img = create_test_image(200, 100);
        let result = scale_to_width(&img, 300, true).unwrap();
        assert_eq!(result.dimensions(), (300, 150));
    }

    #[test]
    fn test_target_width_is_clamped_to_paper_width() {
        assert_eq!(target_dimensions(10, 10, 4096, true).unwrap(), (384, 384));
        assert_eq!(target_dimensions(1, 1, u32::MAX, true).unwrap(), (384, 384));
        assert_eq!(target_dimensions(768, 400, 385, false).unwrap(), (384, 400));

        let img = create_test_image(10, 10);
        let result = scale_to_width(&img, u32::MAX, true).unwrap();
        assert_eq!(result.dimensions(), (384, 384));
    }

    #[test]
    fn test_scale_paper_width() {
        let img = create_test_image(1920, 1080);
        let result = scale_to_width(&img, crate::PAPER_WIDTH, true).unwrap();
        // 1080 * (384/1920) = 216
        assert_eq!(result.dimensions(), (384, 216));
    }

    #[test]
    fn test_scale_without_aspect_keeps_source_height() {
        let img = create_test_image(768, 400);
        let result = scale_to_width(&img, 384, false).unwrap();
        assert_eq!(result.dimensions(), (384, 400));
    }

    #[test]
    fn test_scale_same_size_is_copy() {
        let mut img = create_test_image(384, 50);
        img.put_pixel(3, 3, Rgba([1, 2, 3, 4]));
        let result = scale_to_width(&img, 384, true).unwrap();
        assert_eq!(result, img);
    }

    #[test]
    fn test_scale_flat_color_stays_flat() {
        let img = create_test_image(640, 480);
        let result = scale_to_width(&img, 384, true).unwrap();
        for pixel in result.pixels() {
            assert_eq!(pixel.0, [128, 64, 32, 255]);
        }
    }

    #[test]
    fn test_scale_preserves_non_zero_height() {
        // Very wide, very short image
        let img = create_test_image(1000, 1);
        let result = scale_to_width(&img, 10, true).unwrap();
        assert_eq!(result.width(), 10);
        assert_eq!(result.height(), 1);
    }

    #[test]
    fn test_target_dimensions_rounding() {
        // 384 / (1000 / 333) = 127.872 -> 128
        assert_eq!(target_dimensions(1000, 333, 384, true).unwrap(), (384, 128));
        // 384 / (3 / 1) = 128
        assert_eq!(target_dimensions(3, 1, 384, true).unwrap(), (384, 128));
    }

    #[test]
    fn test_zero_dimensions_are_rejected() {
        assert_eq!(
            target_dimensions(0, 10, 384, true),
            Err(ProcessError::InvalidImageDimensions {
                width: 0,
                height: 10
            })
        );
        assert!(target_dimensions(10, 0, 384, false).is_err());
        assert!(target_dimensions(10, 10, 0, true).is_err());

        let img = RgbaImage::new(0, 0);
        assert!(scale_to_width(&img, 384, true).is_err());
    }
}
