//! Pure Rust image backend — everything statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (PNG, JPEG, TIFF, WebP) | `image` crate (pure Rust decoders) |
//! | Resize | `image::imageops::resize` with `Lanczos3` |
//! | Encode → PNG | `image::codecs::png::PngEncoder` |

use super::backend::{BackendError, IconBackend};
use image::codecs::png::PngEncoder;
use image::imageops::FilterType;
use image::{ExtendedColorType, ImageEncoder, ImageReader, RgbaImage, imageops};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Lanczos3 is the sharpest filter the `image` crate offers; icons shrink by
/// large factors, where cheaper filters alias visibly.
const RESIZE_FILTER: FilterType = FilterType::Lanczos3;

/// Pure Rust backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl IconBackend for RustBackend {
    fn load_rgba(&self, path: &Path) -> Result<RgbaImage, BackendError> {
        let img = ImageReader::open(path)
            .map_err(BackendError::Io)?
            .decode()
            .map_err(|e| {
                BackendError::Decode(format!("failed to decode {}: {}", path.display(), e))
            })?;
        Ok(img.to_rgba8())
    }

    fn write_icon(&self, image: &RgbaImage, size: u32, dest: &Path) -> Result<(), BackendError> {
        // Exact target dimensions: imageops::resize stretches rather than
        // fitting, which is what keeps uncropped sources square.
        let resized = imageops::resize(image, size, size, RESIZE_FILTER);

        let file = File::create(dest).map_err(BackendError::Io)?;
        let writer = BufWriter::new(file);
        PngEncoder::new(writer)
            .write_image(resized.as_raw(), size, size, ExtendedColorType::Rgba8)
            .map_err(|e| BackendError::Encode(format!("{}: {}", dest.display(), e)))
    }
}
