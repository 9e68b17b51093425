//! Image loading and saving via the `image` crate.
//!
//! Available when the `image-io` feature is enabled.

use crate::util::{ArmorError, ArmorResult};
use image::{GrayImage, RgbImage};
use std::path::Path;

/// Loads an image from disk and converts it to 8-bit RGB.
pub fn load_rgb_image<P: AsRef<Path>>(path: P) -> ArmorResult<RgbImage> {
    let img = image::open(path).map_err(|err| ArmorError::ImageIo {
        reason: err.to_string(),
    })?;
    Ok(img.to_rgb8())
}

/// Saves an RGB image; the format follows the file extension.
pub fn save_rgb_image<P: AsRef<Path>>(img: &RgbImage, path: P) -> ArmorResult<()> {
    img.save(path).map_err(|err| ArmorError::ImageIo {
        reason: err.to_string(),
    })
}

/// Saves a binary or grayscale mask.
pub fn save_gray_image<P: AsRef<Path>>(img: &GrayImage, path: P) -> ArmorResult<()> {
    img.save(path).map_err(|err| ArmorError::ImageIo {
        reason: err.to_string(),
    })
}
