//! Crop operations on pixel buffers.
//!
//! Combines the pure [`calculations`](super::calculations) math with
//! `image::imageops`. Nothing here does I/O.

use super::calculations::center_square;
use image::{RgbaImage, imageops};

/// Crop an image to its largest centered square.
///
/// Already-square images are returned unchanged (no copy). The crop box is
/// `center_square(width, height)`, so the leftover along the longer axis is
/// split evenly with any odd pixel falling on the right/bottom.
pub fn square_crop(image: RgbaImage) -> RgbaImage {
    let (width, height) = image.dimensions();
    if width == height {
        return image;
    }
    let crop = center_square(width, height);
    imageops::crop_imm(&image, crop.left, crop.top, crop.side, crop.side).to_image()
}
