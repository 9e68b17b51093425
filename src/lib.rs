//! armorpair finds armor-plate light-bar pairs among rotated rectangles.
//!
//! The core is a pure, quadratic pair matcher over rotated rectangle
//! candidates plus the angle helpers it is built on. With the `image-io`
//! feature the crate also detects candidates in RGB images and draws the
//! results; `rayon` parallelizes the pair scan and `tracing` emits spans.

#[cfg(feature = "image-io")]
pub mod detect;
#[cfg(feature = "image-io")]
pub mod draw;
pub mod geometry;
#[cfg(feature = "image-io")]
pub mod io;
pub mod pairing;
mod trace;
pub mod util;

pub use geometry::{is_long_rect, LongSide, Point2, RotatedRect, Size2, DEFAULT_MIN_ASPECT};
pub use pairing::{evaluate_pair, find_parallel_pairs, PairConfig, PairMetrics, ParallelPair};
pub use util::math::{fold_orientation_diff, normalize_angle, orientation_diff};
pub use util::{ArmorError, ArmorResult};

#[cfg(feature = "image-io")]
pub use detect::{detect_armor, DetectConfig, DetectMode};
