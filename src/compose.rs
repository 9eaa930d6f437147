//! Masked compositing of one image onto another.

use std::cmp::min;

use image::{GrayImage, Pixel};

use crate::definitions::Image;

/// Blends the pixels of `top` into a copy of `bottom`, using `mask` as a
/// per-pixel blend weight, starting from the given `(x, y)` coordinates in
/// the `bottom` image and from `(0, 0)` in the `top` image.
///
/// A mask value of 255 replaces the bottom pixel with the top pixel exactly,
/// 0 leaves the bottom pixel byte-identical, and intermediate values
/// interpolate linearly. Any part of `top` extending past the bottom image
/// bounds is clipped.
///
/// # Panics
///
/// - If `top` and `mask` dimensions differ
/// - If `x >= bottom.width()`
/// - If `y >= bottom.height()`
///
/// # Examples
/// ```
/// use image::{GrayImage, Luma};
/// use mockshot::compose::paste_with_mask;
///
/// let bottom = GrayImage::from_pixel(4, 4, Luma([9u8]));
/// let top = GrayImage::from_pixel(2, 2, Luma([7u8]));
/// let mask = GrayImage::from_pixel(2, 2, Luma([255u8]));
///
/// let pasted = paste_with_mask(&bottom, &top, &mask, 1, 1);
///
/// assert_eq!(pasted.get_pixel(0, 0), &Luma([9u8]));
/// assert_eq!(pasted.get_pixel(1, 1), &Luma([7u8]));
/// assert_eq!(pasted.get_pixel(2, 2), &Luma([7u8]));
/// assert_eq!(pasted.get_pixel(3, 3), &Luma([9u8]));
/// ```
pub fn paste_with_mask<P>(
    bottom: &Image<P>,
    top: &Image<P>,
    mask: &GrayImage,
    x: u32,
    y: u32,
) -> Image<P>
where
    P: Pixel<Subpixel = u8>,
{
    let mut bottom = bottom.clone();
    paste_with_mask_mut(&mut bottom, top, mask, x, y);
    bottom
}

/// Mutable version of [`paste_with_mask`], blending into `bottom` in place.
pub fn paste_with_mask_mut<P>(bottom: &mut Image<P>, top: &Image<P>, mask: &GrayImage, x: u32, y: u32)
where
    P: Pixel<Subpixel = u8>,
{
    assert_eq!(top.dimensions(), mask.dimensions());
    assert!(x < bottom.width());
    assert!(y < bottom.height());

    let x_end = min(bottom.width(), x.saturating_add(top.width()));
    let y_end = min(bottom.height(), y.saturating_add(top.height()));

    for y_bot in y..y_end {
        for x_bot in x..x_end {
            let weight = mask.get_pixel(x_bot - x, y_bot - y)[0];
            if weight == 0 {
                continue;
            }

            let top_pixel = *top.get_pixel(x_bot - x, y_bot - y);
            let bottom_pixel = bottom.get_pixel_mut(x_bot, y_bot);

            *bottom_pixel = top_pixel.map2(bottom_pixel, |t, b| blend_channel(t, b, weight));
        }
    }
}

/// Interpolates a single channel. A weight of 255 returns `top` exactly and
/// 0 returns `bottom` exactly; intermediate weights round half-up.
fn blend_channel(top: u8, bottom: u8, weight: u8) -> u8 {
    let weight = u32::from(weight);
    ((u32::from(top) * weight + u32::from(bottom) * (255 - weight) + 127) / 255) as u8
}
