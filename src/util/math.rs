//! Angle helpers shared by the geometry and pairing code.
//!
//! All angles are in degrees. Orientations of undirected lines live in
//! [0, 180): a line at 5 degrees and one at 185 degrees are the same line.

/// Maps any finite angle in degrees into [0, 180).
///
/// Uses a full Euclidean reduction, so inputs far outside one period are
/// handled as well. Non-finite input is returned unchanged.
pub fn normalize_angle(angle_deg: f32) -> f32 {
    if !angle_deg.is_finite() {
        return angle_deg;
    }
    let reduced = angle_deg.rem_euclid(180.0);
    // rem_euclid rounds tiny negative inputs up to exactly 180.0
    if reduced >= 180.0 {
        0.0
    } else {
        reduced
    }
}

/// Smallest angle between two undirected orientations, given their absolute
/// difference in [0, 180]. The result lies in [0, 90].
pub fn fold_orientation_diff(diff_deg: f32) -> f32 {
    if diff_deg > 90.0 {
        180.0 - diff_deg
    } else {
        diff_deg
    }
}

/// Angle between two orientations in [0, 180), folded into [0, 90].
pub fn orientation_diff(a_deg: f32, b_deg: f32) -> f32 {
    fold_orientation_diff((a_deg - b_deg).abs())
}

/// Computes sine and cosine for an angle in degrees.
pub(crate) fn sin_cos_deg(angle_deg: f32) -> (f32, f32) {
    angle_deg.to_radians().sin_cos()
}

#[cfg(test)]
mod tests {
    use super::{fold_orientation_diff, normalize_angle, orientation_diff, sin_cos_deg};

    #[test]
    fn normalize_angle_single_step_inputs() {
        assert_eq!(normalize_angle(-30.0), 150.0);
        assert_eq!(normalize_angle(180.0), 0.0);
        assert_eq!(normalize_angle(200.0), 20.0);
        assert_eq!(normalize_angle(0.0), 0.0);
        assert_eq!(normalize_angle(179.5), 179.5);
    }

    #[test]
    fn normalize_angle_far_out_of_range() {
        assert!((normalize_angle(725.0) - 5.0).abs() < 1e-4);
        assert!((normalize_angle(-545.0) - 175.0).abs() < 1e-4);
    }

    #[test]
    fn normalize_angle_tiny_negative_stays_in_range() {
        let value = normalize_angle(-1e-9);
        assert!((0.0..180.0).contains(&value));
    }

    #[test]
    fn fold_handles_wrap() {
        assert_eq!(fold_orientation_diff(170.0), 10.0);
        assert_eq!(fold_orientation_diff(90.0), 90.0);
        assert_eq!(orientation_diff(5.0, 175.0), 10.0);
        assert_eq!(orientation_diff(175.0, 5.0), 10.0);
    }

    #[test]
    fn sin_cos_deg_matches_quadrants() {
        let (sin, cos) = sin_cos_deg(90.0);
        assert!(sin > 0.999);
        assert!(cos.abs() < 1e-6);
    }
}
