//! Parallel-pair matching over rotated rectangle candidates.
//!
//! Two light bars form an armor plate when their long sides point the same
//! way, they sit a few bar-lengths apart, and the line joining their centers
//! crosses the bars instead of running along them. Matching compares every
//! unordered pair of eligible candidates, so it is quadratic in the number of
//! candidates.

#[cfg(feature = "rayon")]
mod rayon;
mod scan;

use crate::geometry::{RotatedRect, DEFAULT_MIN_ASPECT};
use crate::trace::{trace_event, trace_span};
use crate::util::math::{normalize_angle, orientation_diff};
use crate::util::{ArmorError, ArmorResult};

/// Thresholds for the parallel-pair predicate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PairConfig {
    /// Long-side angles must differ by strictly less than this (degrees).
    pub angle_threshold_deg: f32,
    /// Lower bound on center distance, in multiples of the mean long side.
    pub min_scale: f32,
    /// Upper bound on center distance, in multiples of the mean long side.
    pub max_scale: f32,
    /// The center line must deviate from both long sides by strictly more
    /// than this (degrees).
    pub min_center_angle_deg: f32,
    /// Long/short ratio a candidate needs to take part at all.
    pub min_aspect: f32,
    /// Evaluate rows in parallel (requires the `rayon` feature).
    pub parallel: bool,
}

impl Default for PairConfig {
    fn default() -> Self {
        Self {
            angle_threshold_deg: 10.0,
            min_scale: 1.0,
            max_scale: 3.0,
            min_center_angle_deg: 10.0,
            min_aspect: DEFAULT_MIN_ASPECT,
            parallel: false,
        }
    }
}

impl PairConfig {
    /// Checks that thresholds are finite and consistently ordered.
    ///
    /// Matching itself accepts any config; this is for callers that load
    /// thresholds from user input.
    pub fn validate(&self) -> ArmorResult<()> {
        let values = [
            self.angle_threshold_deg,
            self.min_scale,
            self.max_scale,
            self.min_center_angle_deg,
            self.min_aspect,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(ArmorError::InvalidConfig {
                reason: "pair thresholds must be finite",
            });
        }
        if self.min_scale < 0.0 {
            return Err(ArmorError::InvalidConfig {
                reason: "min_scale must be >= 0",
            });
        }
        if self.max_scale < self.min_scale {
            return Err(ArmorError::InvalidConfig {
                reason: "max_scale must be >= min_scale",
            });
        }
        if self.min_aspect < 1.0 {
            return Err(ArmorError::InvalidConfig {
                reason: "min_aspect must be >= 1",
            });
        }
        Ok(())
    }
}

/// Indices of two matched candidates, `first < second`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ParallelPair {
    pub first: usize,
    pub second: usize,
}

impl From<ParallelPair> for (usize, usize) {
    fn from(pair: ParallelPair) -> Self {
        (pair.first, pair.second)
    }
}

/// Quantities computed while evaluating one candidate pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PairMetrics {
    /// Folded difference of the two long-side angles, in [0, 90].
    pub angle_diff_deg: f32,
    /// Center-to-center distance.
    pub distance: f32,
    /// Mean of the two long sides.
    pub avg_long_side: f32,
    /// Orientation of the line joining the centers, in [0, 180).
    pub center_line_deg: f32,
    /// Folded deviation of the center line from the first long side.
    pub center_diff_first_deg: f32,
    /// Folded deviation of the center line from the second long side.
    pub center_diff_second_deg: f32,
}

impl PairMetrics {
    /// Applies the acceptance predicate.
    pub fn accepted(&self, cfg: &PairConfig) -> bool {
        self.angle_diff_deg < cfg.angle_threshold_deg
            && self.distance >= cfg.min_scale * self.avg_long_side
            && self.distance <= cfg.max_scale * self.avg_long_side
            && self.center_diff_first_deg > cfg.min_center_angle_deg
            && self.center_diff_second_deg > cfg.min_center_angle_deg
    }
}

/// Long-side data for an eligible candidate.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Eligible {
    center_x: f32,
    center_y: f32,
    long_side: f32,
    long_angle: f32,
}

impl Eligible {
    pub(crate) fn from_rect(rect: &RotatedRect, min_aspect: f32) -> Option<Self> {
        if !crate::geometry::is_long_rect(rect, min_aspect) {
            return None;
        }
        let long = rect.long_side_descriptor();
        Some(Self {
            center_x: rect.center.x,
            center_y: rect.center.y,
            long_side: long.length,
            long_angle: long.angle_deg,
        })
    }
}

pub(crate) fn metrics(a: &Eligible, b: &Eligible) -> PairMetrics {
    let mut dx = b.center_x - a.center_x;
    let mut dy = b.center_y - a.center_y;
    let distance = dx.hypot(dy);

    // orientation of an undirected line; pick one direction so swapping the
    // pair yields bit-identical angles
    if dx < 0.0 || (dx == 0.0 && dy < 0.0) {
        dx = -dx;
        dy = -dy;
    }
    let center_line_deg = normalize_angle(dy.atan2(dx).to_degrees());

    PairMetrics {
        angle_diff_deg: orientation_diff(a.long_angle, b.long_angle),
        distance,
        avg_long_side: (a.long_side + b.long_side) / 2.0,
        center_line_deg,
        center_diff_first_deg: orientation_diff(center_line_deg, a.long_angle),
        center_diff_second_deg: orientation_diff(center_line_deg, b.long_angle),
    }
}

/// Evaluates a single pair. Returns `None` when either rectangle is not
/// long enough to be matched.
pub fn evaluate_pair(a: &RotatedRect, b: &RotatedRect, cfg: &PairConfig) -> Option<PairMetrics> {
    let a = Eligible::from_rect(a, cfg.min_aspect)?;
    let b = Eligible::from_rect(b, cfg.min_aspect)?;
    Some(metrics(&a, &b))
}

/// Finds all parallel pairs among `rects`.
///
/// Pairs are ordered by first index, then second index. Rectangles that are
/// not long (see [`crate::geometry::is_long_rect`]) never appear in the
/// output. The function is total: degenerate input simply produces no pairs.
pub fn find_parallel_pairs(rects: &[RotatedRect], cfg: &PairConfig) -> Vec<ParallelPair> {
    let _span = trace_span!("find_parallel_pairs", candidates = rects.len()).entered();

    let profile = scan::eligibility_profile(rects, cfg.min_aspect);
    let pairs = if cfg.parallel {
        parallel_pairs(&profile, cfg)
    } else {
        scan::pairs_sequential(&profile, cfg)
    };

    trace_event!(
        "parallel_pairs",
        eligible = profile.iter().filter(|e| e.is_some()).count(),
        pairs = pairs.len()
    );
    pairs
}

#[cfg(feature = "rayon")]
fn parallel_pairs(profile: &[Option<Eligible>], cfg: &PairConfig) -> Vec<ParallelPair> {
    self::rayon::pairs_par(profile, cfg)
}

#[cfg(not(feature = "rayon"))]
fn parallel_pairs(profile: &[Option<Eligible>], cfg: &PairConfig) -> Vec<ParallelPair> {
    scan::pairs_sequential(profile, cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_documented_thresholds() {
        let cfg = PairConfig::default();
        assert_eq!(cfg.angle_threshold_deg, 10.0);
        assert_eq!(cfg.min_scale, 1.0);
        assert_eq!(cfg.max_scale, 3.0);
        assert_eq!(cfg.min_center_angle_deg, 10.0);
        assert_eq!(cfg.min_aspect, 1.5);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_inverted_scale() {
        let cfg = PairConfig {
            min_scale: 3.0,
            max_scale: 1.0,
            ..PairConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ArmorError::InvalidConfig {
                reason: "max_scale must be >= min_scale",
            })
        );
    }

    #[test]
    fn validate_rejects_non_finite() {
        let cfg = PairConfig {
            angle_threshold_deg: f32::NAN,
            ..PairConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn metrics_are_symmetric() {
        let a = RotatedRect::new(10.0, 20.0, 8.0, 30.0, 80.0);
        let b = RotatedRect::new(-35.0, 60.0, 32.0, 9.0, -12.0);
        let cfg = PairConfig::default();
        let ab = evaluate_pair(&a, &b, &cfg).unwrap();
        let ba = evaluate_pair(&b, &a, &cfg).unwrap();
        assert_eq!(ab.angle_diff_deg, ba.angle_diff_deg);
        assert_eq!(ab.distance, ba.distance);
        assert_eq!(ab.center_line_deg, ba.center_line_deg);
        assert_eq!(ab.center_diff_first_deg, ba.center_diff_second_deg);
        assert_eq!(ab.center_diff_second_deg, ba.center_diff_first_deg);
    }

    #[test]
    fn evaluate_pair_skips_short_rects() {
        let long = RotatedRect::new(0.0, 0.0, 10.0, 40.0, 0.0);
        let square = RotatedRect::new(30.0, 0.0, 10.0, 10.0, 0.0);
        assert!(evaluate_pair(&long, &square, &PairConfig::default()).is_none());
    }
}
