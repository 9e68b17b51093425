//! Sequential pair scan.

use crate::geometry::RotatedRect;
use crate::pairing::{metrics, Eligible, PairConfig, ParallelPair};

/// Per-candidate long-side data, `None` for ineligible candidates.
pub(crate) fn eligibility_profile(rects: &[RotatedRect], min_aspect: f32) -> Vec<Option<Eligible>> {
    rects
        .iter()
        .map(|rect| Eligible::from_rect(rect, min_aspect))
        .collect()
}

/// Accepted pairs whose first member is `i`, in ascending second index.
pub(crate) fn row_pairs(
    profile: &[Option<Eligible>],
    i: usize,
    cfg: &PairConfig,
) -> Vec<ParallelPair> {
    let Some(first) = profile.get(i).copied().flatten() else {
        return Vec::new();
    };

    let mut out = Vec::new();
    for (offset, second) in profile[i + 1..].iter().enumerate() {
        let Some(second) = second else {
            continue;
        };
        if metrics(&first, second).accepted(cfg) {
            out.push(ParallelPair {
                first: i,
                second: i + 1 + offset,
            });
        }
    }
    out
}

pub(crate) fn pairs_sequential(profile: &[Option<Eligible>], cfg: &PairConfig) -> Vec<ParallelPair> {
    let mut pairs = Vec::new();
    for i in 0..profile.len() {
        pairs.extend(row_pairs(profile, i, cfg));
    }
    pairs
}
