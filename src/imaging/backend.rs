//! Image processing backend trait and shared error type.
//!
//! The [`IconBackend`] trait defines the two operations that touch pixels or
//! the filesystem: load a source image as RGBA, and write one resized PNG
//! icon. The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend); tests use a recording
//! mock so emitter logic runs without encoding anything.

use image::RgbaImage;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("decode failed: {0}")]
    Decode(String),
    #[error("PNG encode failed: {0}")]
    Encode(String),
}

/// Trait for image processing backends.
///
/// Both operations are fallible per call; the emitter treats a `write_icon`
/// failure as scoped to that one destination.
pub trait IconBackend {
    /// Decode the image at `path` into an RGBA8 buffer.
    fn load_rgba(&self, path: &Path) -> Result<RgbaImage, BackendError>;

    /// Resize `image` to `size × size` and write it as a PNG at `dest`,
    /// overwriting any existing file.
    fn write_icon(&self, image: &RgbaImage, size: u32, dest: &Path) -> Result<(), BackendError>;
}
