//! Row-parallel pair scan (feature-gated).
//!
//! Each outer index is evaluated on its own task; rows are concatenated in
//! index order so the output equals the sequential scan.

use crate::pairing::scan::row_pairs;
use crate::pairing::{Eligible, PairConfig, ParallelPair};
use rayon::prelude::*;

pub(crate) fn pairs_par(profile: &[Option<Eligible>], cfg: &PairConfig) -> Vec<ParallelPair> {
    let rows: Vec<Vec<ParallelPair>> = (0..profile.len())
        .into_par_iter()
        .map(|i| row_pairs(profile, i, cfg))
        .collect();
    rows.into_iter().flatten().collect()
}
