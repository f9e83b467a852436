use image::{Rgba, RgbaImage};

fn gray_image(width: u32, height: u32, value: u8) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba([value, value, value, 255]))
}

/// Diagonal color sweep with some texture, so every method has work to do.
fn test_photo(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        let base = (x + y) * 255 / (width + height).max(1);
        let ripple = ((x * 13 + y * 7) % 32) as i32 - 16;
        let v = (base as i32 + ripple).clamp(0, 255) as u8;
        Rgba([v, v.saturating_add(20), v / 2, 255])
    })
}
