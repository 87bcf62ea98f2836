//! Image processing — pure Rust, zero external dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode (PNG, JPEG, TIFF, WebP)** | `image::ImageReader`, converted to RGBA8 |
//! | **Center crop** | crop box math + `image::imageops::crop_imm` |
//! | **Resize** | `image::imageops::resize` with `Lanczos3` filter |
//! | **Encode → PNG** | `image::codecs::png::PngEncoder` |
//!
//! The module is split into:
//! - **Calculations**: pure crop-box math (unit testable, no pixels)
//! - **Operations**: crop applied to pixel buffers
//! - **Backend**: [`IconBackend`] trait + [`RustBackend`]

pub mod backend;
mod calculations;
pub mod operations;
pub mod rust_backend;

pub use backend::{BackendError, IconBackend};
pub use calculations::{CropBox, center_square};
pub use operations::square_crop;
pub use rust_backend::RustBackend;
