//! Error types returned by the compositing pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// The ways a compositing run can fail.
///
/// Each input problem is reported distinctly so that callers can tell a
/// missing file from a corrupt one from a write failure. No output file is
/// created on any error path.
#[derive(Debug, Error)]
pub enum ComposeError {
    /// An input path does not exist.
    #[error("input image not found: {}", .0.display())]
    InputNotFound(PathBuf),
    /// An input file exists but could not be decoded as an image.
    #[error("failed to decode image {}: {source}", path.display())]
    Decode {
        /// The file that failed to decode.
        path: PathBuf,
        /// The underlying decoder error.
        source: image::ImageError,
    },
    /// The composited image could not be encoded or written.
    #[error("failed to write image {}: {source}", path.display())]
    Write {
        /// The output path that could not be written.
        path: PathBuf,
        /// The underlying encoder or I/O error.
        source: image::ImageError,
    },
    /// The configured layout fractions produce a screen rectangle that is
    /// empty or does not fit inside the base image.
    #[error("invalid layout: {0}")]
    InvalidLayout(String),
}
