//! Composites an app screenshot onto the screen area of a device mockup
//! photo, based on the [image] crate.
//!
//! The screen area is described by a [`layout::Layout`]: a set of fractions
//! of the base image's dimensions giving the placement rectangle and the
//! corner radius of the screen's rounded corners. The screenshot is resized
//! into that rectangle and blended onto the base through an antialiased
//! rounded-rectangle mask, leaving every pixel outside the screen area
//! untouched.
//!
//! [image]: https://github.com/image-rs/image
#![deny(missing_docs)]

pub mod compose;
pub mod compositor;
pub mod definitions;
pub mod error;
pub mod layout;
pub mod mask;
