//! Armor light-bar candidate detection (requires the `image-io` feature).
//!
//! The detector segments bright (or color-ranged) regions, cleans them with a
//! morphological opening, and fits a minimum-area rotated rectangle to every
//! external contour. A coarse area/aspect filter drops blobs that cannot be
//! light bars; the finer pairing decisions are left to
//! [`crate::pairing::find_parallel_pairs`].

mod mask;

pub use mask::{hsv_range_mask, luma_bt601, open_square, rgb_to_hsv, threshold_mask};

use crate::geometry::{Point2, RotatedRect};
use crate::trace::{trace_debug, trace_event, trace_span};
use crate::util::{ArmorError, ArmorResult};
use image::{GrayImage, RgbImage};
use imageproc::contours::{find_contours, BorderType};
use imageproc::geometry::{contour_area, min_area_rect};

/// How the binary light-bar mask is produced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DetectMode {
    /// Grayscale level strictly above `threshold`.
    Gray { threshold: u8 },
    /// HSV triple inside `lower..=upper` (hue in [0, 180)).
    Hsv { lower: [u8; 3], upper: [u8; 3] },
}

impl DetectMode {
    /// Default HSV range selecting saturated blue lights.
    pub const BLUE_HSV: DetectMode = DetectMode::Hsv {
        lower: [100, 150, 150],
        upper: [140, 255, 255],
    };
}

impl Default for DetectMode {
    fn default() -> Self {
        DetectMode::Gray { threshold: 222 }
    }
}

/// Configuration for [`detect_armor`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DetectConfig {
    pub mode: DetectMode,
    /// Side of the square opening element; odd, 1 disables the opening.
    pub open_kernel: u32,
    /// Contours with area at or below this are dropped (square pixels).
    pub min_area: f32,
    /// Exclusive lower bound on `width / height` of the fitted rectangle.
    pub min_aspect: f32,
    /// Exclusive upper bound on `width / height` of the fitted rectangle.
    pub max_aspect: f32,
}

impl Default for DetectConfig {
    fn default() -> Self {
        Self {
            mode: DetectMode::default(),
            open_kernel: 9,
            min_area: 50.0,
            min_aspect: 0.5,
            max_aspect: 10.0,
        }
    }
}

impl DetectConfig {
    /// Checks kernel shape and filter ranges.
    pub fn validate(&self) -> ArmorResult<()> {
        if self.open_kernel == 0 || self.open_kernel % 2 == 0 {
            return Err(ArmorError::InvalidConfig {
                reason: "open_kernel must be odd and >= 1",
            });
        }
        if self.open_kernel > 511 {
            return Err(ArmorError::InvalidConfig {
                reason: "open_kernel must be <= 511",
            });
        }
        if !self.min_area.is_finite() || !self.min_aspect.is_finite() || !self.max_aspect.is_finite()
        {
            return Err(ArmorError::InvalidConfig {
                reason: "detect thresholds must be finite",
            });
        }
        if self.max_aspect <= self.min_aspect {
            return Err(ArmorError::InvalidConfig {
                reason: "max_aspect must be greater than min_aspect",
            });
        }
        if let DetectMode::Hsv { lower, upper } = self.mode {
            if (0..3).any(|c| lower[c] > upper[c]) {
                return Err(ArmorError::InvalidConfig {
                    reason: "hsv lower bound exceeds upper bound",
                });
            }
        }
        Ok(())
    }
}

/// Segments `image` and applies the opening; the result feeds
/// [`candidates_from_mask`].
pub fn build_mask(image: &RgbImage, cfg: &DetectConfig) -> ArmorResult<GrayImage> {
    if image.width() == 0 || image.height() == 0 {
        return Err(ArmorError::InvalidDimensions {
            width: image.width(),
            height: image.height(),
        });
    }
    let raw = match cfg.mode {
        DetectMode::Gray { threshold } => threshold_mask(image, threshold),
        DetectMode::Hsv { lower, upper } => hsv_range_mask(image, lower, upper),
    };
    Ok(open_square(&raw, cfg.open_kernel))
}

/// Fits rotated rectangles to the external contours of a binary mask.
///
/// `min_area_rect` returns integer corners, so each fitted rectangle can be
/// up to about a pixel larger per side than a float fit, and thin tilted bars
/// may be off by a few degrees.
pub fn candidates_from_mask(mask: &GrayImage, cfg: &DetectConfig) -> Vec<RotatedRect> {
    let contours = find_contours::<i32>(mask);
    let mut out = Vec::new();

    for contour in contours
        .iter()
        .filter(|c| matches!(c.border_type, BorderType::Outer) && c.parent.is_none())
    {
        let area = contour_area(&contour.points).abs() as f32;
        if area <= cfg.min_area {
            continue;
        }

        let corners = min_area_rect(&contour.points).map(|p| Point2::new(p.x as f32, p.y as f32));
        let rect = RotatedRect::from_corners(corners);
        if rect.size.height <= 0.0 {
            continue;
        }
        let aspect = rect.size.width / rect.size.height;
        if aspect > cfg.min_aspect && aspect < cfg.max_aspect {
            out.push(rect);
        } else {
            trace_debug!("candidate_rejected", area = area, aspect = aspect);
        }
    }

    out
}

/// Detects light-bar candidates in an RGB image.
pub fn detect_armor(image: &RgbImage, cfg: &DetectConfig) -> ArmorResult<Vec<RotatedRect>> {
    let _span = trace_span!("detect_armor", width = image.width(), height = image.height()).entered();
    let mask = build_mask(image, cfg)?;
    let candidates = candidates_from_mask(&mask, cfg);
    trace_event!("armor_candidates", count = candidates.len());
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(DetectConfig::default().validate().is_ok());
        let hsv = DetectConfig {
            mode: DetectMode::BLUE_HSV,
            ..DetectConfig::default()
        };
        assert!(hsv.validate().is_ok());
    }

    #[test]
    fn even_kernel_is_rejected() {
        let cfg = DetectConfig {
            open_kernel: 8,
            ..DetectConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ArmorError::InvalidConfig {
                reason: "open_kernel must be odd and >= 1",
            })
        );
    }

    #[test]
    fn inverted_hsv_range_is_rejected() {
        let cfg = DetectConfig {
            mode: DetectMode::Hsv {
                lower: [140, 0, 0],
                upper: [100, 255, 255],
            },
            ..DetectConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn empty_image_is_rejected() {
        let img = RgbImage::new(0, 4);
        assert_eq!(
            build_mask(&img, &DetectConfig::default()).err(),
            Some(ArmorError::InvalidDimensions {
                width: 0,
                height: 4,
            })
        );
    }

    #[test]
    fn black_image_has_no_candidates() {
        let img = RgbImage::new(32, 32);
        let rects = detect_armor(&img, &DetectConfig::default()).unwrap();
        assert!(rects.is_empty());
    }
}
