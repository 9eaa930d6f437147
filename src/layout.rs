//! Placement geometry for the screen area of a device mockup.

use image::math::Rect;

use crate::error::ComposeError;

/// Where the screen sits within a mockup photo, expressed as fractions of
/// the photo's dimensions.
///
/// The defaults are hand-tuned for a handheld iPhone mockup: the screen's
/// top-left corner at 34.8% / 15.1% of the photo, spanning 30.4% of its
/// width and 66.4% of its height, with corner arcs of 14% of the screen
/// width.
///
/// # Examples
/// ```
/// use mockshot::layout::Layout;
///
/// let rect = Layout::default().screen_rect(1000, 2000).unwrap();
///
/// assert_eq!((rect.x, rect.y), (348, 302));
/// assert_eq!((rect.width, rect.height), (304, 1328));
/// assert_eq!(Layout::default().corner_radius(rect.width), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Left edge of the screen as a fraction of the base width.
    pub x_frac: f64,
    /// Top edge of the screen as a fraction of the base height.
    pub y_frac: f64,
    /// Screen width as a fraction of the base width.
    pub w_frac: f64,
    /// Screen height as a fraction of the base height.
    pub h_frac: f64,
    /// Corner radius as a fraction of the screen width.
    pub radius_frac: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            x_frac: 0.348,
            y_frac: 0.151,
            w_frac: 0.304,
            h_frac: 0.664,
            radius_frac: 0.14,
        }
    }
}

impl Layout {
    /// Computes the screen rectangle for a base image of the given size.
    ///
    /// Each coordinate is the corresponding fraction applied in `f64` and
    /// truncated to an integer.
    ///
    /// Returns [`ComposeError::InvalidLayout`] if any fraction is negative
    /// or non-finite, if the rectangle is empty, or if it does not lie fully
    /// inside the base image.
    pub fn screen_rect(&self, base_width: u32, base_height: u32) -> Result<Rect, ComposeError> {
        let fracs = [
            self.x_frac,
            self.y_frac,
            self.w_frac,
            self.h_frac,
            self.radius_frac,
        ];
        if fracs.iter().any(|f| !f.is_finite() || *f < 0.0) {
            return Err(ComposeError::InvalidLayout(
                "fractions must be finite and non-negative".into(),
            ));
        }

        let x = (f64::from(base_width) * self.x_frac) as u32;
        let y = (f64::from(base_height) * self.y_frac) as u32;
        let width = (f64::from(base_width) * self.w_frac) as u32;
        let height = (f64::from(base_height) * self.h_frac) as u32;

        if width == 0 || height == 0 {
            return Err(ComposeError::InvalidLayout(format!(
                "screen rectangle is empty ({width}x{height}) for a {base_width}x{base_height} base"
            )));
        }
        if u64::from(x) + u64::from(width) > u64::from(base_width)
            || u64::from(y) + u64::from(height) > u64::from(base_height)
        {
            return Err(ComposeError::InvalidLayout(format!(
                "screen rectangle {width}x{height} at ({x}, {y}) exceeds the {base_width}x{base_height} base"
            )));
        }

        Ok(Rect {
            x,
            y,
            width,
            height,
        })
    }

    /// Corner radius for a screen rectangle of the given width, truncated to
    /// an integer.
    pub fn corner_radius(&self, rect_width: u32) -> u32 {
        (f64::from(rect_width) * self.radius_frac) as u32
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn proptest_screen_rect_within_bounds(
            base_width in 4..5000u32,
            base_height in 2..5000u32,
        ) {
            let rect = Layout::default()
                .screen_rect(base_width, base_height)
                .unwrap();

            prop_assert!(rect.width > 0);
            prop_assert!(rect.height > 0);
            prop_assert!(rect.x + rect.width <= base_width);
            prop_assert!(rect.y + rect.height <= base_height);
        }
    }
}
