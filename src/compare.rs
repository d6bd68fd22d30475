//! Comparison helpers used exclusively by tests.

use crate::consts::MAX_ABSOLUTE_DIFFERENCE;
use crate::utils::f64_compare;
use glam::{BVec2, DVec2};

/// Compare `f64`s in a tolerant manner.
pub fn compare_f64s(f1: f64, f2: f64) -> bool {
	f64_compare(f1, f2, MAX_ABSOLUTE_DIFFERENCE)
}

/// Compare the two values in a `DVec2` independently with a provided max absolute value difference.
pub fn dvec2_compare(a: DVec2, b: DVec2, max_abs_diff: f64) -> BVec2 {
	BVec2::new((a.x - b.x).abs() < max_abs_diff, (a.y - b.y).abs() < max_abs_diff)
}

/// Compare points by allowing some maximum absolute difference to account for floating point errors.
pub fn compare_points(p1: DVec2, p2: DVec2) -> bool {
	dvec2_compare(p1, p2, MAX_ABSOLUTE_DIFFERENCE).all()
}
