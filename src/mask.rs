//! Rounded-rectangle alpha masks.

use image::{GrayImage, Luma};

/// Builds a `width` by `height` blend mask that is fully opaque (255) inside
/// a rounded rectangle spanning the whole mask and fully transparent (0)
/// outside it.
///
/// Each pixel's value is the coverage of the rounded rectangle at the pixel
/// centre, derived from the signed distance to the shape's boundary. The
/// straight edges land exactly on the mask border and are fully opaque; the
/// corner arcs fade to zero over a one-pixel band, so compositing through
/// the mask produces antialiased corners. The radius is clamped to half the
/// shorter side.
pub fn rounded_rect_mask(width: u32, height: u32, radius: u32) -> GrayImage {
    let radius = f64::from(radius).min(f64::from(width.min(height)) / 2.0);
    let half_width = f64::from(width) / 2.0;
    let half_height = f64::from(height) / 2.0;

    GrayImage::from_fn(width, height, |x, y| {
        // Signed distance from the pixel centre to the rounded rectangle,
        // negative inside the shape.
        let dx = (f64::from(x) + 0.5 - half_width).abs() - (half_width - radius);
        let dy = (f64::from(y) + 0.5 - half_height).abs() - (half_height - radius);
        let outside = dx.max(0.0).hypot(dy.max(0.0));
        let inside = dx.max(dy).min(0.0);
        let distance = outside + inside - radius;

        let coverage = (0.5 - distance).clamp(0.0, 1.0);
        Luma([(coverage * 255.0).round() as u8])
    })
}
