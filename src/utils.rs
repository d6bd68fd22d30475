use crate::consts::{MAX_ABSOLUTE_DIFFERENCE, STRICT_MAX_ABSOLUTE_DIFFERENCE, T_VALUE_SNAP_EPSILON};

use glam::DVec2;

/// Helper to perform the computation of a and c, where b is the provided point on the curve.
/// Given the correct power of `t` and `(1-t)`, the computation is the same for quadratic and cubic cases.
/// Relevant derivation and the definitions of a, b, and c can be found in [the projection identity section](https://pomax.github.io/bezierinfo/#abc) of Pomax's bezier curve primer.
fn compute_abc_through_points(start_point: DVec2, point_on_curve: DVec2, end_point: DVec2, t_to_nth_power: f64, nth_power_of_one_minus_t: f64) -> [DVec2; 3] {
	let point_c_ratio = nth_power_of_one_minus_t / (t_to_nth_power + nth_power_of_one_minus_t);
	let c = point_c_ratio * start_point + (1. - point_c_ratio) * end_point;
	let ab_bc_ratio = (t_to_nth_power + nth_power_of_one_minus_t - 1.).abs() / (t_to_nth_power + nth_power_of_one_minus_t);
	let a = point_on_curve + (point_on_curve - c) / ab_bc_ratio;
	[a, point_on_curve, c]
}

/// Compute `a`, `b`, and `c` for a quadratic curve that fits the start, end and point on curve at `t`.
/// The definition for the `a`, `b`, `c` points are defined in [the projection identity section](https://pomax.github.io/bezierinfo/#abc) of Pomax's bezier curve primer.
pub fn compute_abc_for_quadratic_through_points(start_point: DVec2, point_on_curve: DVec2, end_point: DVec2, t: f64) -> [DVec2; 3] {
	let t_squared = t * t;
	let one_minus_t = 1. - t;
	let squared_one_minus_t = one_minus_t * one_minus_t;
	compute_abc_through_points(start_point, point_on_curve, end_point, t_squared, squared_one_minus_t)
}

/// Compute `a`, `b`, and `c` for a cubic curve that fits the start, end and point on curve at `t`.
/// The definition for the `a`, `b`, `c` points are defined in [the projection identity section](https://pomax.github.io/bezierinfo/#abc) of Pomax's bezier curve primer.
pub fn compute_abc_for_cubic_through_points(start_point: DVec2, point_on_curve: DVec2, end_point: DVec2, t: f64) -> [DVec2; 3] {
	let t_cubed = t * t * t;
	let one_minus_t = 1. - t;
	let cubed_one_minus_t = one_minus_t * one_minus_t * one_minus_t;

	compute_abc_through_points(start_point, point_on_curve, end_point, t_cubed, cubed_one_minus_t)
}

/// Find the roots of the linear equation `ax + b`.
pub fn solve_linear(a: f64, b: f64) -> [Option<f64>; 3] {
	// There exist roots when `a` is not 0
	if a.abs() > MAX_ABSOLUTE_DIFFERENCE {
		[Some(-b / a), None, None]
	} else {
		[None; 3]
	}
}

/// Find the roots of the quadratic equation `ax^2 + bx + c`.
/// Precompute the `discriminant` (`b^2 - 4ac`) and `two_times_a` arguments prior to calling this function for efficiency purposes.
pub fn solve_quadratic(discriminant: f64, two_times_a: f64, b: f64, c: f64) -> [Option<f64>; 3] {
	let mut roots = [None; 3];
	if two_times_a.abs() <= STRICT_MAX_ABSOLUTE_DIFFERENCE {
		roots = solve_linear(b, c);
	} else if discriminant.abs() <= STRICT_MAX_ABSOLUTE_DIFFERENCE {
		roots[0] = Some(-b / (two_times_a));
	} else if discriminant > 0. {
		let root_discriminant = discriminant.sqrt();
		roots[0] = Some((-b + root_discriminant) / (two_times_a));
		roots[1] = Some((-b - root_discriminant) / (two_times_a));
	}
	roots
}

/// Find the real roots of the cubic equation `ax^3 + bx^2 + cx + d` using Cardano's method.
/// Falls back to the quadratic and linear solvers when the leading coefficients vanish.
pub fn solve_cubic(a: f64, b: f64, c: f64, d: f64) -> [Option<f64>; 3] {
	if a.abs() <= STRICT_MAX_ABSOLUTE_DIFFERENCE {
		if b.abs() <= STRICT_MAX_ABSOLUTE_DIFFERENCE {
			// If both a and b are approximately 0, treat as a linear problem
			return solve_linear(c, d);
		}
		// If a is approximately 0, treat as a quadratic problem
		let discriminant = c * c - 4. * b * d;
		return solve_quadratic(discriminant, 2. * b, c, d);
	}

	// Normalize to a monic cubic `x^3 + bx^2 + cx + d`, then depress it to `y^3 + py + q` with `x = y - b/3`
	let b = b / a;
	let c = c / a;
	let d = d / a;

	let p = (3. * c - b * b) / 3.;
	let q = (2. * b * b * b - 9. * b * c + 27. * d) / 27.;
	let half_q = q / 2.;
	let third_p = p / 3.;
	let discriminant = half_q * half_q + third_p * third_p * third_p;
	if discriminant < 0. {
		// Three distinct real roots, found trigonometrically
		let r = (-third_p * third_p * third_p).sqrt();
		let phi = (-q / (2. * r)).clamp(-1., 1.).acos();
		let double_cube_root_r = 2. * r.cbrt();
		[
			Some(double_cube_root_r * (phi / 3.).cos() - b / 3.),
			Some(double_cube_root_r * ((phi + std::f64::consts::TAU) / 3.).cos() - b / 3.),
			Some(double_cube_root_r * ((phi + 2. * std::f64::consts::TAU) / 3.).cos() - b / 3.),
		]
	} else if discriminant == 0. {
		// A double root and a simple root
		let u1 = if half_q < 0. { (-half_q).cbrt() } else { -(half_q.cbrt()) };
		[Some(2. * u1 - b / 3.), Some(-u1 - b / 3.), None]
	} else {
		// A single real root
		let square_root_discriminant = discriminant.sqrt();
		let u1 = (-half_q + square_root_discriminant).cbrt();
		let v1 = (half_q + square_root_discriminant).cbrt();
		[Some(u1 - v1 - b / 3.), None, None]
	}
}

/// Snap a parametric value to `0.` or `1.` when it lies within [T_VALUE_SNAP_EPSILON] of either endpoint.
/// Returns `None` when the value falls outside the unit interval by more than the snapping tolerance.
pub fn snap_to_unit_interval(t: f64) -> Option<f64> {
	if f64_compare(t, 0., T_VALUE_SNAP_EPSILON) {
		return Some(0.);
	}
	if f64_compare(t, 1., T_VALUE_SNAP_EPSILON) {
		return Some(1.);
	}
	(0. ..=1.).contains(&t).then_some(t)
}

/// Translate and rotate the points into the frame where the line from `line_start` to `line_end` lies along the positive x-axis with `line_start` at the origin.
pub fn align_points(points: &[DVec2], line_start: DVec2, line_end: DVec2) -> Vec<DVec2> {
	let angle = -(line_end.y - line_start.y).atan2(line_end.x - line_start.x);
	let (sin, cos) = angle.sin_cos();
	points
		.iter()
		.map(|&point| {
			let translated = point - line_start;
			DVec2::new(translated.x * cos - translated.y * sin, translated.x * sin + translated.y * cos)
		})
		.collect()
}

/// Returns the intersection of the two infinite lines passing through `a1`/`a2` and `b1`/`b2` respectively, or `None` when the lines are parallel or degenerate.
pub fn line_intersection(a1: DVec2, a2: DVec2, b1: DVec2, b2: DVec2) -> Option<DVec2> {
	let a_cross = a1.x * a2.y - a1.y * a2.x;
	let b_cross = b1.x * b2.y - b1.y * b2.x;
	let denominator = (a1.x - a2.x) * (b1.y - b2.y) - (a1.y - a2.y) * (b1.x - b2.x);
	if denominator == 0. {
		return None;
	}
	let numerator_x = a_cross * (b1.x - b2.x) - (a1.x - a2.x) * b_cross;
	let numerator_y = a_cross * (b1.y - b2.y) - (a1.y - a2.y) * b_cross;
	Some(DVec2::new(numerator_x / denominator, numerator_y / denominator))
}

/// Returns the parametric positions along each line segment at which the two segments cross, found with Cramer's rule.
/// Parallel segments yield `None`, as do collinear overlapping ones since they cross at no single transversal point.
pub fn line_segment_intersection(start1: DVec2, end1: DVec2, start2: DVec2, end2: DVec2) -> Option<(f64, f64)> {
	let direction1 = end1 - start1;
	let direction2 = end2 - start2;
	let determinant = direction1.x * direction2.y - direction1.y * direction2.x;
	// A non-finite reciprocal covers both the parallel case and degenerate/NaN inputs
	let reciprocal_determinant = 1. / determinant;
	if !reciprocal_determinant.is_finite() {
		return None;
	}
	let delta = start2 - start1;
	let t1 = snap_to_unit_interval((delta.x * direction2.y - delta.y * direction2.x) * reciprocal_determinant)?;
	let t2 = snap_to_unit_interval((delta.x * direction1.y - delta.y * direction1.x) * reciprocal_determinant)?;
	Some((t1, t2))
}

/// Compare two `f64` numbers with a provided max absolute value difference.
pub fn f64_compare(a: f64, b: f64, max_abs_diff: f64) -> bool {
	(a - b).abs() < max_abs_diff
}
