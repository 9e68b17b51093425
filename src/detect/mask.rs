//! Binary masks for light-bar segmentation.
//!
//! Masks are `GrayImage`s holding 0 or 255. HSV values use the 8-bit
//! convention common in robotics pipelines: hue in [0, 180), saturation and
//! value in [0, 255].

use image::{GrayImage, Luma, RgbImage};
use imageproc::distance_transform::Norm;

/// Converts an RGB pixel to 8-bit HSV (hue halved to fit in a byte).
pub fn rgb_to_hsv(rgb: [u8; 3]) -> [u8; 3] {
    let [r, g, b] = rgb.map(f32::from);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let s = if max > 0.0 { 255.0 * delta / max } else { 0.0 };
    let mut h = if delta <= 0.0 {
        0.0
    } else if max == r {
        60.0 * (g - b) / delta
    } else if max == g {
        120.0 + 60.0 * (b - r) / delta
    } else {
        240.0 + 60.0 * (r - g) / delta
    };
    if h < 0.0 {
        h += 360.0;
    }

    let hue = ((h / 2.0).round() as u32 % 180) as u8;
    [hue, s.round() as u8, max as u8]
}

/// BT.601 luma of an RGB pixel, rounded to the nearest level.
pub fn luma_bt601(rgb: [u8; 3]) -> u8 {
    let [r, g, b] = rgb.map(u32::from);
    ((299 * r + 587 * g + 114 * b + 500) / 1000) as u8
}

/// Pixels whose BT.601 grayscale level is strictly above `threshold`
/// become 255.
pub fn threshold_mask(image: &RgbImage, threshold: u8) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        if luma_bt601(image.get_pixel(x, y).0) > threshold {
            Luma([255])
        } else {
            Luma([0])
        }
    })
}

/// Pixels whose HSV triple lies inside `lower..=upper` on every channel
/// become 255.
pub fn hsv_range_mask(image: &RgbImage, lower: [u8; 3], upper: [u8; 3]) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        let hsv = rgb_to_hsv(image.get_pixel(x, y).0);
        let inside = (0..3).all(|c| hsv[c] >= lower[c] && hsv[c] <= upper[c]);
        if inside {
            Luma([255])
        } else {
            Luma([0])
        }
    })
}

/// Morphological opening with a square `kernel` x `kernel` element.
///
/// `kernel` must be odd; a kernel of 1 returns the mask unchanged.
pub fn open_square(mask: &GrayImage, kernel: u32) -> GrayImage {
    let radius = kernel.saturating_sub(1) / 2;
    if radius == 0 {
        return mask.clone();
    }
    let radius = u8::try_from(radius).unwrap_or(u8::MAX);
    imageproc::morphology::open(mask, Norm::LInf, radius)
}
