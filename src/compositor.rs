//! The end-to-end pipeline: decode, place, resize, mask, paste, encode.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbaImage};
use log::{debug, info};

use crate::compose::paste_with_mask_mut;
use crate::error::ComposeError;
use crate::layout::Layout;
use crate::mask::rounded_rect_mask;

/// Composites `overlay` into the screen area of `base`.
///
/// The screen rectangle and corner radius are computed from `layout`, the
/// overlay is resized to the rectangle with a Lanczos3 filter (screenshots
/// carry fine text, so the sharp filter matters) and blended in through a
/// rounded-rectangle mask. The result has the same dimensions as `base`;
/// pixels outside the screen rectangle are byte-identical to it. The whole
/// pipeline is deterministic.
pub fn compose(
    base: &RgbaImage,
    overlay: &RgbaImage,
    layout: &Layout,
) -> Result<RgbaImage, ComposeError> {
    let (base_width, base_height) = base.dimensions();
    let rect = layout.screen_rect(base_width, base_height)?;
    let radius = layout.corner_radius(rect.width);
    debug!(
        "placing {}x{} screen at ({}, {}) with corner radius {radius}",
        rect.width, rect.height, rect.x, rect.y
    );

    let resized = imageops::resize(overlay, rect.width, rect.height, FilterType::Lanczos3);
    let mask = rounded_rect_mask(rect.width, rect.height, radius);

    let mut out = base.clone();
    paste_with_mask_mut(&mut out, &resized, &mask, rect.x, rect.y);
    Ok(out)
}

/// Loads the base and overlay images, composites them and writes the result
/// to `output_path` as PNG.
///
/// Both inputs are converted to RGBA before compositing, so JPEG overlays
/// without an alpha channel are accepted. The output file is only written
/// after every earlier step has succeeded, so a failed run leaves no
/// partial output behind.
pub fn compose_files(
    base_path: &Path,
    overlay_path: &Path,
    output_path: &Path,
    layout: &Layout,
) -> Result<(), ComposeError> {
    let base = load_rgba(base_path)?;
    let overlay = load_rgba(overlay_path)?;

    let out = compose(&base, &overlay, layout)?;
    out.save_with_format(output_path, ImageFormat::Png)
        .map_err(|source| ComposeError::Write {
            path: output_path.to_path_buf(),
            source,
        })?;

    info!("wrote composite to {}", output_path.display());
    Ok(())
}

fn load_rgba(path: &Path) -> Result<RgbaImage, ComposeError> {
    if !path.exists() {
        return Err(ComposeError::InputNotFound(path.to_path_buf()));
    }
    let image = image::open(path).map_err(|source| ComposeError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(image.to_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn bench_base(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x % 7) as u8 * 30, (y % 6) as u8 * 40, 90, 255])
        })
    }

    fn bench_overlay(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            Rgba([200, (x % 5) as u8 * 50, (y % 4) as u8 * 60, 255])
        })
    }

    #[test]
    fn test_compose_preserves_base_dimensions() {
        let base = bench_base(100, 200);
        let overlay = bench_overlay(50, 50);

        let out = compose(&base, &overlay, &Layout::default()).unwrap();

        assert_eq!(out.dimensions(), base.dimensions());
    }

    #[test]
    fn test_compose_leaves_pixels_outside_screen_untouched() {
        let base = bench_base(100, 200);
        let overlay = bench_overlay(50, 50);
        let layout = Layout::default();

        let rect = layout.screen_rect(100, 200).unwrap();
        let out = compose(&base, &overlay, &layout).unwrap();

        for (x, y, pixel) in out.enumerate_pixels() {
            let in_rect = (rect.x..rect.x + rect.width).contains(&x)
                && (rect.y..rect.y + rect.height).contains(&y);
            if !in_rect {
                assert_eq!(pixel, base.get_pixel(x, y), "pixel at ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_compose_screen_centre_matches_resized_overlay() {
        let base = bench_base(100, 200);
        let overlay = bench_overlay(50, 50);
        let layout = Layout::default();

        let rect = layout.screen_rect(100, 200).unwrap();
        let out = compose(&base, &overlay, &layout).unwrap();
        let resized = imageops::resize(&overlay, rect.width, rect.height, FilterType::Lanczos3);

        let (cx, cy) = (rect.width / 2, rect.height / 2);
        assert_eq!(
            out.get_pixel(rect.x + cx, rect.y + cy),
            resized.get_pixel(cx, cy)
        );
    }

    #[test]
    fn test_compose_sharp_corners_retain_base_pixels() {
        let base = bench_base(100, 200);
        let overlay = bench_overlay(50, 50);
        let layout = Layout::default();

        let rect = layout.screen_rect(100, 200).unwrap();
        let out = compose(&base, &overlay, &layout).unwrap();

        let corners = [
            (rect.x, rect.y),
            (rect.x + rect.width - 1, rect.y),
            (rect.x, rect.y + rect.height - 1),
            (rect.x + rect.width - 1, rect.y + rect.height - 1),
        ];
        for (x, y) in corners {
            assert_eq!(out.get_pixel(x, y), base.get_pixel(x, y), "corner ({x}, {y})");
        }
    }

    #[test]
    fn test_compose_is_deterministic() {
        let base = bench_base(100, 200);
        let overlay = bench_overlay(37, 83);
        let layout = Layout::default();

        let first = compose(&base, &overlay, &layout).unwrap();
        let second = compose(&base, &overlay, &layout).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_compose_rejects_oversized_layout() {
        let base = bench_base(100, 200);
        let overlay = bench_overlay(50, 50);
        let layout = Layout {
            h_frac: 3.0,
            ..Layout::default()
        };

        let result = compose(&base, &overlay, &layout);
        assert!(matches!(result, Err(ComposeError::InvalidLayout(_))));
    }
}
