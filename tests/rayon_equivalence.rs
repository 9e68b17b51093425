#![cfg(feature = "rayon")]

use armorpair::{find_parallel_pairs, PairConfig, RotatedRect};

fn make_grid(cols: usize, rows: usize) -> Vec<RotatedRect> {
    let mut rects = Vec::with_capacity(cols * rows);
    for r in 0..rows {
        for c in 0..cols {
            let tilt = ((r * 7 + c * 3) % 11) as f32 - 5.0;
            let long = 30.0 + ((r + c) % 4) as f32 * 4.0;
            rects.push(RotatedRect::new(
                c as f32 * 55.0,
                r as f32 * 90.0,
                long / 3.0,
                long,
                tilt,
            ));
        }
    }
    rects
}

#[test]
fn parallel_matches_sequential() {
    let rects = make_grid(12, 8);
    let sequential = find_parallel_pairs(&rects, &PairConfig::default());
    let parallel = find_parallel_pairs(
        &rects,
        &PairConfig {
            parallel: true,
            ..PairConfig::default()
        },
    );
    assert!(!sequential.is_empty());
    assert_eq!(sequential, parallel);
}

#[test]
fn parallel_handles_empty_input() {
    let cfg = PairConfig {
        parallel: true,
        ..PairConfig::default()
    };
    assert!(find_parallel_pairs(&[], &cfg).is_empty());
}
