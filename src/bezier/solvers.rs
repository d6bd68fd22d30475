use super::*;
use crate::bounding_box::{Bounded, BoundingBox};
use crate::subcurve::Subcurve;

/// Functionality that solve for various curve information such as derivative, tangent, intersect, etc.
impl Bezier {
	/// Returns a [Bezier] representing the derivative of the original curve.
	/// - This function returns `None` for a linear segment.
	pub fn derivative(&self) -> Option<Bezier> {
		match self.handles {
			BezierHandles::Linear => None,
			BezierHandles::Quadratic { handle } => {
				let p1_minus_p0 = handle - self.start;
				let p2_minus_p1 = self.end - handle;
				Some(Bezier::from_linear_dvec2(2. * p1_minus_p0, 2. * p2_minus_p1))
			}
			BezierHandles::Cubic { handle_start, handle_end } => {
				let p1_minus_p0 = handle_start - self.start;
				let p2_minus_p1 = handle_end - handle_start;
				let p3_minus_p2 = self.end - handle_end;
				Some(Bezier::from_quadratic_dvec2(3. * p1_minus_p0, 3. * p2_minus_p1, 3. * p3_minus_p2))
			}
		}
	}

	/// Returns the non-normalized vector representing the tangent at the point `t` along the curve.
	pub(crate) fn non_normalized_tangent(&self, t: f64) -> DVec2 {
		match self.handles {
			BezierHandles::Linear => self.end - self.start,
			_ => self.derivative().unwrap().evaluate(t),
		}
	}

	/// Returns a normalized unit vector representing the tangent at the point `t` along the curve.
	pub fn tangent(&self, t: f64) -> DVec2 {
		let tangent = self.non_normalized_tangent(t);
		if tangent.length() > 0. {
			tangent.normalize()
		} else {
			tangent
		}
	}

	/// Returns a normalized unit vector representing the direction of the normal at the point `t` along the curve.
	/// The normal is the left-hand perpendicular of the tangent.
	pub fn normal(&self, t: f64) -> DVec2 {
		self.tangent(t).perp()
	}

	/// Returns two lists of `t`-values representing the local extrema of the `x` and `y` parametric curves respectively.
	/// The extrema are the roots of each axis of the first derivative, and for cubic curves additionally the roots of
	/// the second derivative, whose sign changes also bound the monotone runs of the hodograph.
	/// The returned `t`-values are filtered to `[0, 1]`, sorted, and deduplicated per axis.
	pub fn local_extrema(&self) -> [Vec<f64>; 2] {
		let per_axis_roots: [Vec<Option<f64>>; 2] = match self.handles {
			BezierHandles::Linear => [Vec::new(), Vec::new()],
			BezierHandles::Quadratic { handle } => {
				let d0 = handle - self.start;
				let d1 = self.end - handle;
				[utils::solve_linear(d1.x - d0.x, d0.x).to_vec(), utils::solve_linear(d1.y - d0.y, d0.y).to_vec()]
			}
			BezierHandles::Cubic { handle_start, handle_end } => {
				let d0 = handle_start - self.start;
				let d1 = handle_end - handle_start;
				let d2 = self.end - handle_end;
				let a = d0 - 2. * d1 + d2;
				let b = 2. * (d1 - d0);
				let c = d0;
				let discriminant = b * b - 4. * a * c;
				let two_times_a = 2. * a;

				let mut x_roots = utils::solve_quadratic(discriminant.x, two_times_a.x, b.x, c.x).to_vec();
				let mut y_roots = utils::solve_quadratic(discriminant.y, two_times_a.y, b.y, c.y).to_vec();

				// Second derivative roots, one per axis since the second derivative of a cubic is linear
				let dd0 = d1 - d0;
				let dd1 = d2 - d1;
				x_roots.extend(utils::solve_linear(dd1.x - dd0.x, dd0.x));
				y_roots.extend(utils::solve_linear(dd1.y - dd0.y, dd0.y));
				[x_roots, y_roots]
			}
		};
		per_axis_roots.map(|roots| {
			let mut t_values: Vec<f64> = roots.into_iter().flatten().filter(|t| (0. ..=1.).contains(t)).collect();
			t_values.sort_by(|a, b| a.partial_cmp(b).unwrap());
			t_values.dedup();
			t_values
		})
	}

	/// The local extrema of both axes flattened into a single sorted, deduplicated list.
	pub fn extrema_t_list(&self) -> Vec<f64> {
		let mut t_values: Vec<f64> = self.local_extrema().into_iter().flatten().collect();
		t_values.sort_by(|a, b| a.partial_cmp(b).unwrap());
		t_values.dedup();
		t_values
	}

	/// Return the bounding box of the curve: the box over the endpoints, extended by the curve's value at each internal extremum.
	pub fn bounding_box(&self) -> BoundingBox {
		let mut bounding_box = BoundingBox::from_corners(self.start, self.end);
		for t_values in self.local_extrema() {
			for t in t_values {
				let point = self.evaluate(t);
				bounding_box = bounding_box.union(BoundingBox::from_corners(point, point));
			}
		}
		bounding_box
	}

	/// Returns a list of `Intersection`s between the curve and the provided linear segment, where `t1` is the parametric
	/// position on the curve and `t2` the position along the line. Results are sorted by `(t1, t2)`.
	/// Overlapping collinear segments report zero intersections, the same as parallel disjoint ones, since they
	/// cross at no single transversal point.
	pub fn line_intersections(&self, line: &Bezier) -> Vec<Intersection> {
		debug_assert!(matches!(line.handles, BezierHandles::Linear));
		if let BezierHandles::Linear = self.handles {
			return utils::line_segment_intersection(self.start, self.end, line.start, line.end)
				.map(|(t1, t2)| Intersection::new(t1, t2))
				.into_iter()
				.collect();
		}

		// Rotate and translate the control points into the frame where the line lies on the x-axis,
		// then the curve's crossings of the line are the roots of the aligned y-polynomial
		let points: Vec<DVec2> = self.get_points().collect();
		let aligned = utils::align_points(&points, line.start, line.end);
		let roots = match *aligned.as_slice() {
			[p0, p1, p2] => {
				// Convert the Bernstein coefficients to the power basis
				let a = p0.y - 2. * p1.y + p2.y;
				let b = 2. * (p1.y - p0.y);
				let c = p0.y;
				utils::solve_quadratic(b * b - 4. * a * c, 2. * a, b, c)
			}
			[p0, p1, p2, p3] => {
				let a = -p0.y + 3. * p1.y - 3. * p2.y + p3.y;
				let b = 3. * p0.y - 6. * p1.y + 3. * p2.y;
				let c = 3. * (p1.y - p0.y);
				let d = p0.y;
				utils::solve_cubic(a, b, c, d)
			}
			_ => unreachable!(),
		};

		let line_direction = line.end - line.start;
		let line_length = line_direction.length();
		let line_direction_unit = line_direction / line_length;
		let mut intersections: Vec<Intersection> = roots
			.into_iter()
			.flatten()
			.filter_map(utils::snap_to_unit_interval)
			.filter_map(|t1| {
				// Project the point of intersection onto the line to find its parameter
				let t2 = (self.evaluate(t1) - line.start).dot(line_direction_unit) / line_length;
				(0. ..=1.).contains(&t2).then_some(Intersection::new(t1, t2))
			})
			.collect();
		intersections.sort_by(|a, b| a.partial_cmp(b).unwrap());
		intersections
	}

	/// Implementation of the algorithm to find curve intersections by iterating on bounding boxes.
	/// When both subcurves' boxes are smaller than `threshold` (measured as width plus height), the subcurves are
	/// approximated by their chords and the chord crossing is mapped back into the ancestors' parameter spaces.
	fn intersections_between_subcurves(subcurve1: Subcurve, subcurve2: Subcurve, threshold: f64, results: &mut Vec<Intersection>) {
		let bounding_box1 = subcurve1.curve.bounding_box();
		let bounding_box2 = subcurve2.curve.bounding_box();
		if !bounding_box1.overlaps(bounding_box2) {
			return;
		}

		let size1 = bounding_box1.size();
		let size2 = bounding_box2.size();
		if size1.x + size1.y < threshold && size2.x + size2.y < threshold {
			if let Some((t1, t2)) = utils::line_segment_intersection(subcurve1.curve.start, subcurve1.curve.end, subcurve2.curve.start, subcurve2.curve.end) {
				results.push(Intersection::new(subcurve1.to_parent_t(t1), subcurve2.to_parent_t(t2)));
			}
			return;
		}

		let [left1, right1] = subcurve1.split(0.5);
		let [left2, right2] = subcurve2.split(0.5);
		Self::intersections_between_subcurves(left1, left2, threshold, results);
		Self::intersections_between_subcurves(left1, right2, threshold, results);
		Self::intersections_between_subcurves(right1, left2, threshold, results);
		Self::intersections_between_subcurves(right1, right2, threshold, results);
	}

	/// Sort intersections lexicographically by `(t1, t2)` and drop adjacent duplicates.
	fn sorted_and_deduplicated(mut intersections: Vec<Intersection>) -> Vec<Intersection> {
		intersections.sort_by(|a, b| a.partial_cmp(b).unwrap());
		intersections.dedup();
		intersections
	}

	/// Returns a list of `Intersection`s between the current bezier curve and the provided one, where `t1` refers to
	/// the current curve and `t2` to `other`. Results are sorted by `(t1, t2)` with adjacent duplicates removed.
	/// Every pairing of curve orders is supported:
	/// - two linear segments intersect directly by Cramer's rule,
	/// - a curve and a linear segment intersect by root finding on the aligned curve,
	/// - everything else recursively subdivides both operands on their bounding boxes.
	///
	/// - `threshold` - For subdividing intersections, the bounding box size under which a subcurve is
	///   approximated by its chord. The default value is `0.5`.
	pub fn intersections(&self, other: &Bezier, threshold: Option<f64>) -> Vec<Intersection> {
		let threshold = threshold.unwrap_or(DEFAULT_INTERSECTION_THRESHOLD);
		match (self.handles, other.handles) {
			(_, BezierHandles::Linear) => self.line_intersections(other),
			(BezierHandles::Linear, _) => Self::sorted_and_deduplicated(other.line_intersections(self).into_iter().map(Intersection::flipped).collect()),
			_ => {
				let mut results = Vec::new();
				Self::intersections_between_subcurves(Subcurve::new(*self), Subcurve::new(*other), threshold, &mut results);
				Self::sorted_and_deduplicated(results)
			}
		}
	}

	/// Returns a list of `Intersection`s where the curve crosses itself. Linear and quadratic segments cannot
	/// self-intersect, and neither can any curve that is already simple, so those all return an empty list.
	/// For each crossing, `t1` holds the smaller of the two parameter values.
	///
	/// - `threshold` - The bounding box size under which a subcurve is approximated by its chord. The default value is `0.5`.
	pub fn self_intersections(&self, threshold: Option<f64>) -> Vec<Intersection> {
		if !self.handles.is_cubic() {
			return Vec::new();
		}
		let threshold = threshold.unwrap_or(DEFAULT_INTERSECTION_THRESHOLD);

		// Simple pieces cannot intersect their direct neighbours, so each piece is only tested
		// against the pieces at least two indices away
		let reduced = self.reduce(None);
		let mut results = Vec::new();
		for (index, subcurve1) in reduced.iter().enumerate().skip(2) {
			for subcurve2 in &reduced[..index - 1] {
				Self::intersections_between_subcurves(*subcurve2, *subcurve1, threshold, &mut results);
			}
		}
		Self::sorted_and_deduplicated(results)
	}
}

impl Bounded for Bezier {
	fn bounding_box(&self) -> BoundingBox {
		self.bounding_box()
	}
}
