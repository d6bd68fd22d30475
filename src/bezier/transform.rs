use super::*;
use crate::subcurve::Subcurve;
use crate::subpath::Subpath;
use crate::utils::f64_compare;

/// A bisection that finds the largest value in `[min, max]` still accepted by `predicate`, assuming the
/// predicate is true at `min` and flips at most once. The returned value is a lower bound on the flip point.
fn bisect(min: f64, max: f64, tolerance: f64, predicate: impl Fn(f64) -> bool) -> f64 {
	let mut lower_bound = min;
	let mut upper_bound = max;
	while upper_bound - lower_bound > tolerance {
		let value = 0.5 * (lower_bound + upper_bound);
		if predicate(value) {
			lower_bound = value;
		} else {
			upper_bound = value;
		}
	}
	lower_bound
}

/// Functionality that transform Beziers, such as split, reduce, offset, etc.
impl Bezier {
	/// Returns the pair of Bezier curves that result from splitting the original curve at the point `t` along the curve.
	pub fn split(&self, t: f64) -> [Bezier; 2] {
		let split_point = self.evaluate(t);

		match self.handles {
			BezierHandles::Linear => [Bezier::from_linear_dvec2(self.start, split_point), Bezier::from_linear_dvec2(split_point, self.end)],
			BezierHandles::Quadratic { handle } => {
				let t_minus_one = t - 1.;
				[
					Bezier::from_quadratic_dvec2(self.start, t * handle - t_minus_one * self.start, split_point),
					Bezier::from_quadratic_dvec2(split_point, t * self.end - t_minus_one * handle, self.end),
				]
			}
			BezierHandles::Cubic { handle_start, handle_end } => {
				let t_minus_one = t - 1.;
				[
					Bezier::from_cubic_dvec2(
						self.start,
						t * handle_start - t_minus_one * self.start,
						(t * t) * handle_end - 2. * t * t_minus_one * handle_start + (t_minus_one * t_minus_one) * self.start,
						split_point,
					),
					Bezier::from_cubic_dvec2(
						split_point,
						(t * t) * self.end - 2. * t * t_minus_one * handle_end + (t_minus_one * t_minus_one) * handle_start,
						t * self.end - t_minus_one * handle_end,
						self.end,
					),
				]
			}
		}
	}

	/// Returns a reversed version of the Bezier curve.
	pub fn reverse(&self) -> Bezier {
		Bezier {
			start: self.end,
			end: self.start,
			handles: self.handles.reversed(),
		}
	}

	/// Returns the Bezier curve representing the sub-curve starting at the point `t1` and ending at the point `t2` along the curve.
	/// When `t2 < t1`, returns the reversed sub-curve starting at `t2` and ending at `t1`.
	pub fn trim(&self, t1: f64, t2: f64) -> Bezier {
		// If t1 is equal to t2, return a bezier comprised entirely of the same point
		if f64_compare(t1, t2, MAX_ABSOLUTE_DIFFERENCE) {
			let point = self.evaluate(t1);
			return match self.handles {
				BezierHandles::Linear => Bezier::from_linear_dvec2(point, point),
				BezierHandles::Quadratic { .. } => Bezier::from_quadratic_dvec2(point, point, point),
				BezierHandles::Cubic { .. } => Bezier::from_cubic_dvec2(point, point, point, point),
			};
		}
		// Depending on the order of `t1` and `t2`, determine which half of the split we need to keep
		let t1_split_side = usize::from(t1 <= t2);
		let t2_split_side = usize::from(t1 > t2);
		let bezier_starting_at_t1 = self.split(t1)[t1_split_side];
		// Adjust the ratio `t2` to its corresponding value on the new curve that was split on `t1`
		let adjusted_t2 = if t1 < t2 || t1 == 0. {
			// Case where we took the split from t1 to the end
			(t2 - t1) / (1. - t1)
		} else {
			// Case where we took the split from the beginning to `t1`
			t2 / t1
		};
		let result = bezier_starting_at_t1.split(adjusted_t2)[t2_split_side];
		if t2 < t1 {
			return result.reverse();
		}
		result
	}

	/// Returns a Bezier curve that results from applying the transformation function to each point in the Bezier.
	pub fn apply_transformation(&self, transformation_function: impl Fn(DVec2) -> DVec2) -> Bezier {
		let start = transformation_function(self.start);
		let end = transformation_function(self.end);
		let handles = self.handles.apply_transformation(transformation_function);
		Bezier { start, end, handles }
	}

	/// Returns a Bezier curve that results from translating the curve by the given `DVec2`.
	pub fn translate(&self, translation: DVec2) -> Bezier {
		self.apply_transformation(|point| point + translation)
	}

	/// Returns true if the control polygon deviates from the chord between the endpoints by no more
	/// than `MAX_LINEAR_DEVIATION`, in which case the curve can be offset by a plain translation.
	pub(crate) fn is_linear(&self) -> bool {
		let points: Vec<DVec2> = self.get_points().collect();
		utils::align_points(&points, self.start, self.end).iter().all(|point| point.y.abs() <= MAX_LINEAR_DEVIATION)
	}

	/// Determine whether the curve is "simple", meaning it can be offset without introducing cusps or
	/// self-crossings, using the following conditions:
	/// 1. All the handles are located on a single side of the chord between the endpoints.
	/// 2. The angle between the unit normals at the endpoints is less than 60 degrees, so the on-curve point
	///    for `t = 0.5` occurs roughly in the center of the polygon defined by the curve's endpoint normals.
	pub fn is_simple(&self) -> bool {
		if self.handles == BezierHandles::Linear {
			return true;
		}
		// Verify all the handles are located on a single side of the curve
		if let BezierHandles::Cubic { handle_start, handle_end } = self.handles {
			let angle_1 = (self.end - self.start).angle_to(handle_start - self.start);
			let angle_2 = (self.end - self.start).angle_to(handle_end - self.start);
			if (angle_1 > 0. && angle_2 < 0.) || (angle_1 < 0. && angle_2 > 0.) {
				return false;
			}
		}
		// Verify the angle formed by the endpoint normals is sufficiently small
		let normal_0 = self.normal(0.);
		let normal_1 = self.normal(1.);
		let endpoint_normal_angle = normal_0.dot(normal_1).clamp(-1., 1.).acos();
		endpoint_normal_angle < MAX_SIMPLE_ENDPOINT_NORMAL_ANGLE
	}

	/// Split the curve into simple subcurves that together cover `[0, 1]` exactly.
	/// The curve is first split at its interior extrema, then each monotone piece is walked from its start,
	/// growing each subcurve by bisection until it would stop being simple.
	/// The function takes the following parameter:
	/// - `step_size` - Dictates the granularity at which the function searches for simple subcurves, and the
	///   tolerance of the bisection. The default value is `0.01`.
	pub fn reduce(&self, step_size: Option<f64>) -> Vec<Subcurve> {
		// A linear segment is already simple, so return itself
		if let BezierHandles::Linear = self.handles {
			return vec![Subcurve::new(*self)];
		}

		let step = step_size.unwrap_or(DEFAULT_REDUCE_STEP_SIZE);

		// First pass: split on the extrema, ignoring any within a step of the endpoints since they would
		// produce degenerate, near-zero-length pieces
		let mut extrema: Vec<f64> = self.extrema_t_list().into_iter().filter(|&t| t >= step && t <= 1. - step).collect();
		extrema.insert(0, 0.);
		extrema.push(1.);

		let whole = Subcurve::new(*self);
		let pass1: Vec<Subcurve> = extrema.windows(2).map(|t_pair| whole.trim(t_pair[0], t_pair[1])).collect();

		// Second pass: further reduce the monotone pieces to simple segments
		let mut result = Vec::new();
		for piece in pass1 {
			let mut t1 = 0.;
			while t1 < 1. {
				// If the remaining span is within a step or already simple, use it whole
				let remainder = piece.trim(t1, 1.);
				if 1. - t1 <= step || remainder.curve.is_simple() {
					result.push(remainder);
					break;
				}
				// Otherwise find the largest simple subcurve starting at t1
				let t2 = bisect(t1 + step, 1., step, |t2| piece.trim(t1, t2).curve.is_simple());
				result.push(piece.trim(t1, t2));
				t1 = t2;
			}
		}
		result
	}

	/// Scale will translate a bezier curve a fixed distance away from its original position, and stretch/compress the transformed curve to match the translation ratio.
	/// The endpoints move along their local normals, and the interior control points are relocated to the intersection of the offset tangent line
	/// and the line from the original control point through the intersection of the endpoint normals.
	/// Note that not all bezier curves can be scaled this way, which is why `offset` reduces the curve into simple segments first.
	/// `scale` takes the parameter `distance`, which is the distance away from the curve that the new one will be scaled to. Positive values will scale the curve in the
	/// same direction as the endpoint normals, while negative values will scale in the opposite direction.
	pub fn scale(&self, distance: f64) -> Bezier {
		let normal_start = self.normal(0.);
		let normal_end = self.normal(1.);

		// If the normal unit vectors are equal, then the normal lines are parallel and the whole curve translates
		if normal_start.abs_diff_eq(normal_end, MAX_ABSOLUTE_DIFFERENCE) {
			return self.translate(distance * normal_start);
		}

		let new_start = self.start + distance * normal_start;
		let new_end = self.end + distance * normal_end;
		if let BezierHandles::Linear = self.handles {
			return Bezier::from_linear_dvec2(new_start, new_end);
		}

		// The projection origin: where the endpoint normal lines cross
		let origin = utils::line_intersection(self.start, self.start + normal_start, self.end, self.end + normal_end);

		// Move a control point to the intersection of the offset tangent line and the origin-through-control line
		let relocate = |handle: DVec2, t: f64, moved_endpoint: DVec2| {
			let tangent_line_end = moved_endpoint + self.non_normalized_tangent(t);
			let origin = origin.unwrap_or(handle - self.normal(t));
			utils::line_intersection(moved_endpoint, tangent_line_end, origin, handle).unwrap_or(handle + distance * self.normal(t))
		};

		match self.handles {
			BezierHandles::Linear => unreachable!(),
			BezierHandles::Quadratic { handle } => Bezier::from_quadratic_dvec2(new_start, relocate(handle, 0., new_start), new_end),
			BezierHandles::Cubic { handle_start, handle_end } => Bezier::from_cubic_dvec2(new_start, relocate(handle_start, 0., new_start), relocate(handle_end, 1., new_end), new_end),
		}
	}

	/// Version of the `scale` function where the distance away from the curve varies along it, given by
	/// `distance_fn` evaluated at the curve parameter. Used to build graduated outlines.
	fn scale_with_distance_function(&self, distance_fn: impl Fn(f64) -> f64) -> Bezier {
		let normal_start = self.normal(0.);
		let normal_end = self.normal(1.);

		let new_start = self.start + distance_fn(0.) * normal_start;
		let new_end = self.end + distance_fn(1.) * normal_end;
		if let BezierHandles::Linear = self.handles {
			return Bezier::from_linear_dvec2(new_start, new_end);
		}

		let origin = utils::line_intersection(self.start, self.start + normal_start, self.end, self.end + normal_end);

		// The winding of the control polygon decides which side of the curve a positive distance lands on
		let first_handle = self.handles.start().unwrap();
		let is_clockwise = (self.end - self.start).angle_to(first_handle - self.start) > 0.;

		let order = self.order() as f64;
		let relocate = |handle: DVec2, t: f64, handle_index: usize| {
			let direction = match origin {
				Some(origin) => (handle - origin).normalize(),
				None => -self.normal(t),
			};
			let mut scale_distance = distance_fn((handle_index + 1) as f64 / order);
			if !is_clockwise {
				scale_distance = -scale_distance;
			}
			handle + scale_distance * direction
		};

		match self.handles {
			BezierHandles::Linear => unreachable!(),
			BezierHandles::Quadratic { handle } => Bezier::from_quadratic_dvec2(new_start, relocate(handle, 0., 0), new_end),
			BezierHandles::Cubic { handle_start, handle_end } => Bezier::from_cubic_dvec2(new_start, relocate(handle_start, 0., 0), relocate(handle_end, 1., 1), new_end),
		}
	}

	/// Offset will get all the reduceable subcurves, and for each subcurve, it will scale the subcurve a set distance away from the original curve.
	/// Note that not all bezier curves are possible to offset, so this function first reduces the curve to scalable segments and then offsets those segments.
	/// Offset takes the following parameter:
	/// - `distance` - The offset's distance from the curve. Positive values will offset the curve in the same direction as the endpoint normals,
	///   while negative values will offset in the opposite direction.
	pub fn offset(&self, distance: f64) -> Vec<Bezier> {
		// A curve whose control polygon stays on the chord offsets by a plain translation
		if self.is_linear() {
			return vec![self.translate(distance * self.normal(0.))];
		}
		self.reduce(None).into_iter().map(|subcurve| subcurve.curve.scale(distance)).collect()
	}

	/// Outline returns a closed [Subpath] around the curve: the curve offset to one side, the reversed curve offset
	/// to the other side, and two straight end caps joining them. The caps intersect the original curve's endpoints
	/// at their midpoints when the two distances are equal.
	///
	/// Outline takes the following parameters:
	/// - `distance_along_normal` - Distance of the outline on the side the endpoint normals point towards.
	/// - `distance_opposite_normal` - Distance of the outline on the opposite side.
	pub fn outline(&self, distance_along_normal: f64, distance_opposite_normal: f64) -> Subpath {
		self.internal_outline(distance_along_normal, distance_opposite_normal, 0., 0., false)
	}

	/// Version of the `outline` function where the distances at the start and end of the curve differ, transitioning
	/// gradually with arc length. The four parameters are the distances at the curve's start and end, on the side of
	/// the endpoint normals and opposite it respectively.
	pub fn graduated_outline(&self, start_distance_along_normal: f64, start_distance_opposite_normal: f64, end_distance_along_normal: f64, end_distance_opposite_normal: f64) -> Subpath {
		self.internal_outline(start_distance_along_normal, start_distance_opposite_normal, end_distance_along_normal, end_distance_opposite_normal, true)
	}

	fn internal_outline(&self, d1: f64, d2: f64, d3: f64, d4: f64, graduated: bool) -> Subpath {
		let reduced = self.reduce(None);
		let total_length = self.length();

		// A distance function linear in arc length over the whole curve, restricted to one piece:
		// `arc_length_so_far` and `piece_length` place the piece within the whole
		let linear_distance_function = |start_distance: f64, end_distance: f64, arc_length_so_far: f64, piece_length: f64| {
			let difference = end_distance - start_distance;
			let low = start_distance + (arc_length_so_far / total_length) * difference;
			let high = start_distance + ((arc_length_so_far + piece_length) / total_length) * difference;
			move |v: f64| low + v * (high - low)
		};

		let mut forward_curves = Vec::with_capacity(reduced.len());
		let mut backward_curves = Vec::with_capacity(reduced.len());
		let mut arc_length_so_far = 0.;
		for subcurve in &reduced {
			let curve = subcurve.curve;
			let piece_length = curve.length();
			if graduated {
				forward_curves.push(curve.scale_with_distance_function(linear_distance_function(d1, d3, arc_length_so_far, piece_length)));
				backward_curves.push(curve.scale_with_distance_function(linear_distance_function(-d2, -d4, arc_length_so_far, piece_length)));
			} else {
				forward_curves.push(curve.scale(d1));
				backward_curves.push(curve.scale(-d2));
			}
			arc_length_so_far += piece_length;
		}

		// The return path runs against the curve's direction
		let backward_curves: Vec<Bezier> = backward_curves.iter().rev().map(Bezier::reverse).collect();

		// Straight end caps joining the two offsets
		let forward_start = forward_curves.first().unwrap().start;
		let forward_end = forward_curves.last().unwrap().end;
		let backward_start = backward_curves.first().unwrap().start;
		let backward_end = backward_curves.last().unwrap().end;
		let start_cap = Bezier::from_linear_dvec2(backward_end, forward_start);
		let end_cap = Bezier::from_linear_dvec2(forward_end, backward_start);

		let curves: Vec<Bezier> = [vec![start_cap], forward_curves, vec![end_cap], backward_curves].concat();
		Subpath::from_beziers(&curves, true)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::compare::{compare_f64s, compare_points};

	#[test]
	fn test_split() {
		let line = Bezier::from_linear_coordinates(25., 25., 75., 75.);
		let [part1, part2] = line.split(0.5);

		assert_eq!(part1.start, line.start);
		assert_eq!(part1.end, line.evaluate(0.5));
		assert!(compare_points(part1.evaluate(0.5), line.evaluate(0.25)));

		assert_eq!(part2.start, line.evaluate(0.5));
		assert_eq!(part2.end, line.end);
		assert!(compare_points(part2.evaluate(0.5), line.evaluate(0.75)));

		let quad_bezier = Bezier::from_quadratic_coordinates(10., 10., 50., 50., 90., 10.);
		let [part3, part4] = quad_bezier.split(0.5);

		assert_eq!(part3.start, quad_bezier.start);
		assert_eq!(part3.end, quad_bezier.evaluate(0.5));
		assert!(compare_points(part3.evaluate(0.5), quad_bezier.evaluate(0.25)));

		assert_eq!(part4.start, quad_bezier.evaluate(0.5));
		assert_eq!(part4.end, quad_bezier.end);
		assert!(compare_points(part4.evaluate(0.5), quad_bezier.evaluate(0.75)));

		let cubic_bezier = Bezier::from_cubic_coordinates(10., 10., 50., 50., 90., 10., 40., 50.);
		let [part5, part6] = cubic_bezier.split(0.5);

		assert_eq!(part5.start, cubic_bezier.start);
		assert_eq!(part5.end, cubic_bezier.evaluate(0.5));
		assert!(compare_points(part5.evaluate(0.5), cubic_bezier.evaluate(0.25)));

		assert_eq!(part6.start, cubic_bezier.evaluate(0.5));
		assert_eq!(part6.end, cubic_bezier.end);
		assert!(compare_points(part6.evaluate(0.5), cubic_bezier.evaluate(0.75)));
	}

	#[test]
	fn test_split_at_anchors() {
		let start = DVec2::new(30., 50.);
		let end = DVec2::new(160., 170.);

		let bezier_quadratic = Bezier::from_quadratic_dvec2(start, DVec2::new(140., 30.), end);

		// Splitting a quadratic bezier at the startpoint produces a point-curve and the whole curve
		let [point_bezier1, remainder1] = bezier_quadratic.split(0.);
		assert_eq!(point_bezier1, Bezier::from_quadratic_dvec2(start, start, start));
		assert!(remainder1.abs_diff_eq(&bezier_quadratic, MAX_ABSOLUTE_DIFFERENCE));

		let [remainder2, point_bezier2] = bezier_quadratic.split(1.);
		assert_eq!(point_bezier2, Bezier::from_quadratic_dvec2(end, end, end));
		assert!(remainder2.abs_diff_eq(&bezier_quadratic, MAX_ABSOLUTE_DIFFERENCE));

		let bezier_cubic = Bezier::from_cubic_dvec2(start, DVec2::new(60., 140.), DVec2::new(150., 30.), end);

		let [point_bezier3, remainder3] = bezier_cubic.split(0.);
		assert_eq!(point_bezier3, Bezier::from_cubic_dvec2(start, start, start, start));
		assert!(remainder3.abs_diff_eq(&bezier_cubic, MAX_ABSOLUTE_DIFFERENCE));

		let [remainder4, point_bezier4] = bezier_cubic.split(1.);
		assert_eq!(point_bezier4, Bezier::from_cubic_dvec2(end, end, end, end));
		assert!(remainder4.abs_diff_eq(&bezier_cubic, MAX_ABSOLUTE_DIFFERENCE));
	}

	#[test]
	fn test_trim() {
		let line = Bezier::from_linear_coordinates(80., 80., 40., 40.);
		let trimmed1 = line.trim(0.25, 0.75);

		assert!(compare_points(trimmed1.start, line.evaluate(0.25)));
		assert!(compare_points(trimmed1.end, line.evaluate(0.75)));
		assert!(compare_points(trimmed1.evaluate(0.5), line.evaluate(0.5)));

		let quadratic_bezier = Bezier::from_quadratic_coordinates(80., 80., 40., 40., 70., 70.);
		let trimmed2 = quadratic_bezier.trim(0.25, 0.75);

		assert!(compare_points(trimmed2.start, quadratic_bezier.evaluate(0.25)));
		assert!(compare_points(trimmed2.end, quadratic_bezier.evaluate(0.75)));
		assert!(compare_points(trimmed2.evaluate(0.5), quadratic_bezier.evaluate(0.5)));

		let cubic_bezier = Bezier::from_cubic_coordinates(80., 80., 40., 40., 70., 70., 150., 150.);
		let trimmed3 = cubic_bezier.trim(0.25, 0.75);

		assert!(compare_points(trimmed3.start, cubic_bezier.evaluate(0.25)));
		assert!(compare_points(trimmed3.end, cubic_bezier.evaluate(0.75)));
		assert!(compare_points(trimmed3.evaluate(0.5), cubic_bezier.evaluate(0.5)));
	}

	#[test]
	fn test_trim_t2_less_than_t1() {
		// Trimming with t2 < t1 yields the reverse of trimming with the arguments swapped
		let bezier_quadratic = Bezier::from_quadratic_coordinates(30., 50., 140., 30., 160., 170.);
		let trim1 = bezier_quadratic.trim(0.25, 0.75);
		let trim2 = bezier_quadratic.trim(0.75, 0.25).reverse();
		assert!(trim1.abs_diff_eq(&trim2, MAX_ABSOLUTE_DIFFERENCE));

		let bezier_cubic = Bezier::from_cubic_coordinates(30., 30., 60., 140., 150., 30., 160., 160.);
		let trim3 = bezier_cubic.trim(0.25, 0.75);
		let trim4 = bezier_cubic.trim(0.75, 0.25).reverse();
		assert!(trim3.abs_diff_eq(&trim4, MAX_ABSOLUTE_DIFFERENCE));
	}

	#[test]
	fn test_reverse() {
		let cubic = Bezier::from_cubic_coordinates(30., 30., 60., 140., 150., 30., 160., 160.);
		let reversed = cubic.reverse();
		assert_eq!(reversed.start, cubic.end);
		assert_eq!(reversed.end, cubic.start);
		assert!(compare_points(reversed.evaluate(0.25), cubic.evaluate(0.75)));
		assert_eq!(reversed.reverse(), cubic);
	}

	#[test]
	fn test_translate() {
		let bezier_linear = Bezier::from_linear_coordinates(30., 60., 140., 120.);
		let translated_bezier_linear = bezier_linear.translate(DVec2::new(10., 10.));
		let expected_bezier_linear = Bezier::from_linear_coordinates(40., 70., 150., 130.);
		assert!(translated_bezier_linear.abs_diff_eq(&expected_bezier_linear, MAX_ABSOLUTE_DIFFERENCE));

		let bezier_quadratic = Bezier::from_quadratic_coordinates(30., 50., 140., 30., 160., 170.);
		let translated_bezier_quadratic = bezier_quadratic.translate(DVec2::new(-10., 10.));
		let expected_bezier_quadratic = Bezier::from_quadratic_coordinates(20., 60., 130., 40., 150., 180.);
		assert!(translated_bezier_quadratic.abs_diff_eq(&expected_bezier_quadratic, MAX_ABSOLUTE_DIFFERENCE));

		let bezier = Bezier::from_cubic_coordinates(30., 30., 60., 140., 150., 30., 160., 160.);
		let translated_bezier = bezier.translate(DVec2::new(10., -10.));
		let expected_bezier = Bezier::from_cubic_coordinates(40., 20., 70., 130., 160., 20., 170., 150.);
		assert!(translated_bezier.abs_diff_eq(&expected_bezier, MAX_ABSOLUTE_DIFFERENCE));
	}

	#[test]
	fn test_is_simple() {
		let line = Bezier::from_linear_coordinates(0., 0., 100., 100.);
		assert!(line.is_simple());

		// Endpoint tangents differ by roughly 22 degrees
		let gentle_quadratic = Bezier::from_quadratic_coordinates(0., 0., 50., 10., 100., 0.);
		assert!(gentle_quadratic.is_simple());

		// Endpoint normals differ by well over 60 degrees
		let arch = Bezier::from_quadratic_coordinates(0., 0., 50., 100., 100., 0.);
		assert!(!arch.is_simple());

		// Handles on opposite sides of the chord
		let s_curve = Bezier::from_cubic_coordinates(0., 0., 30., 30., 70., -30., 100., 0.);
		assert!(!s_curve.is_simple());
	}

	#[test]
	fn test_reduce() {
		let line = Bezier::from_linear_coordinates(0., 0., 100., 100.);
		let reduced_line = line.reduce(None);
		assert_eq!(reduced_line.len(), 1);
		assert_eq!((reduced_line[0].t1, reduced_line[0].t2), (0., 1.));

		let arch = Bezier::from_quadratic_coordinates(0., 0., 50., 100., 100., 0.);
		let reduced = arch.reduce(None);
		assert!(reduced.len() >= 2);

		// The pieces partition [0, 1] exactly and every piece is simple
		assert_eq!(reduced.first().unwrap().t1, 0.);
		assert_eq!(reduced.last().unwrap().t2, 1.);
		for pair in reduced.windows(2) {
			assert_eq!(pair[0].t2, pair[1].t1);
			assert!(compare_points(pair[0].curve.end, pair[1].curve.start));
		}
		for subcurve in &reduced {
			assert!(subcurve.curve.is_simple());
			// A piece evaluated locally matches the whole curve evaluated at the mapped parameter
			assert!(compare_points(subcurve.curve.evaluate(0.5), arch.evaluate(subcurve.to_parent_t(0.5))));
		}
	}

	#[test]
	fn test_scale() {
		// A line scales to a parallel line a fixed distance along its normal
		let line = Bezier::from_linear_coordinates(0., 0., 10., 0.);
		let scaled_line = line.scale(5.);
		assert!(scaled_line.abs_diff_eq(&Bezier::from_linear_coordinates(0., 5., 10., 5.), MAX_ABSOLUTE_DIFFERENCE));

		let gentle_quadratic = Bezier::from_quadratic_coordinates(0., 0., 50., 10., 100., 0.);
		let scaled = gentle_quadratic.scale(10.);

		// Endpoints move exactly the requested distance along the endpoint normals
		assert!(compare_f64s(scaled.start.distance(gentle_quadratic.start), 10.));
		assert!(compare_f64s(scaled.end.distance(gentle_quadratic.end), 10.));
		assert!(compare_points(scaled.start, gentle_quadratic.start + 10. * gentle_quadratic.normal(0.)));
		assert!(compare_points(scaled.end, gentle_quadratic.end + 10. * gentle_quadratic.normal(1.)));

		// The interior of a simple curve stays near the requested distance
		assert!((scaled.evaluate(0.5).distance(gentle_quadratic.evaluate(0.5)) - 10.).abs() < 1.);
	}

	#[test]
	fn test_offset() {
		// A linear curve offsets to a single translated curve
		let line = Bezier::from_linear_coordinates(0., 0., 30., 40.);
		let offset_line = line.offset(10.);
		assert_eq!(offset_line.len(), 1);
		assert!(offset_line[0].abs_diff_eq(&line.translate(10. * line.normal(0.)), MAX_ABSOLUTE_DIFFERENCE));

		let arch = Bezier::from_quadratic_coordinates(0., 0., 50., 100., 100., 0.);
		let offset_curves = arch.offset(10.);
		assert!(offset_curves.len() >= 2);

		// The offset starts and ends the requested distance from the original endpoints
		assert!(compare_points(offset_curves.first().unwrap().start, arch.start + 10. * arch.normal(0.)));
		assert!(compare_points(offset_curves.last().unwrap().end, arch.end + 10. * arch.normal(1.)));

		// Consecutive offset pieces connect without gaps
		for pair in offset_curves.windows(2) {
			assert!(pair[0].end.distance(pair[1].start) < 0.1);
		}
	}

	#[test]
	fn test_outline() {
		let line = Bezier::from_linear_coordinates(30., 50., 140., 30.);
		let outline = line.outline(10., 10.);

		assert!(outline.is_closed());
		let curves: Vec<Bezier> = outline.curves().collect();
		assert_eq!(curves.len(), 4);

		// The first length-wise piece of the outline is 10 units from the line
		assert!(compare_f64s(curves[1].evaluate(0.25).distance(line.evaluate(0.25)), 10.));

		// The far cap touches the line's end point at its halfway point
		assert!(compare_points(curves[2].evaluate(0.5), line.end));

		// The return piece runs against the line's direction on the other side
		assert!(compare_f64s(curves[3].evaluate(0.25).distance(line.evaluate(0.75)), 10.));

		// The near cap touches the line's start point at its halfway point
		assert!(compare_points(curves[0].evaluate(0.5), line.start));
	}

	#[test]
	fn test_graduated_outline() {
		let gentle_quadratic = Bezier::from_quadratic_coordinates(0., 0., 50., 10., 100., 0.);
		let outline = gentle_quadratic.graduated_outline(5., 5., 10., 10.);

		assert!(outline.is_closed());
		let curves: Vec<Bezier> = outline.curves().collect();
		assert!(curves.len() >= 4);

		// The forward offset starts 5 units from the curve's start; the first curve after the start cap begins it
		assert!(compare_f64s(curves[1].start.distance(gentle_quadratic.start), 5.));

		// The end cap spans from the forward offset to the return offset, 10 units out on each side
		let end_cap = curves.iter().find(|curve| compare_points(curve.evaluate(0.5), gentle_quadratic.end)).unwrap();
		assert!(compare_f64s(end_cap.start.distance(gentle_quadratic.end), 10.));
		assert!(compare_f64s(end_cap.end.distance(gentle_quadratic.end), 10.));
	}
}
