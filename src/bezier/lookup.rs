use super::*;

/// Functionality relating to looking up properties of the `Bezier` or points along the `Bezier`.
impl Bezier {
	/// Calculate the point on the curve based on the `t`-value provided.
	/// Values of `t` at or below `0.` return the start point exactly and values at or above `1.` return the end point exactly,
	/// so the evaluated endpoints carry no floating point error.
	pub fn evaluate(&self, t: f64) -> DVec2 {
		if t <= 0. {
			return self.start;
		}
		if t >= 1. {
			return self.end;
		}
		let one_minus_t = 1. - t;
		match self.handles {
			BezierHandles::Linear => self.start.lerp(self.end, t),
			BezierHandles::Quadratic { handle } => {
				let point_start_contribution = one_minus_t * one_minus_t * self.start;
				let point_handle_contribution = 2. * one_minus_t * t * handle;
				let point_end_contribution = t * t * self.end;
				point_start_contribution + point_handle_contribution + point_end_contribution
			}
			BezierHandles::Cubic { handle_start, handle_end } => {
				let one_minus_t_squared = one_minus_t * one_minus_t;
				let t_squared = t * t;
				let point_start_contribution = one_minus_t_squared * one_minus_t * self.start;
				let point_handle_start_contribution = 3. * one_minus_t_squared * t * handle_start;
				let point_handle_end_contribution = 3. * one_minus_t * t_squared * handle_end;
				let point_end_contribution = t_squared * t * self.end;
				point_start_contribution + point_handle_start_contribution + point_handle_end_contribution + point_end_contribution
			}
		}
	}

	/// Returns a list of lists of points representing the De Casteljau points for all iterations at the point `t` along the curve using De Casteljau's algorithm.
	/// The `i`th element of the list represents the set of points in the `i`th iteration.
	/// More information on the algorithm can be found in the [De Casteljau section](https://pomax.github.io/bezierinfo/#decasteljau) in Pomax's primer.
	pub fn de_casteljau_points(&self, t: f64) -> Vec<Vec<DVec2>> {
		let bezier_points = match self.handles {
			BezierHandles::Linear => vec![self.start, self.end],
			BezierHandles::Quadratic { handle } => vec![self.start, handle, self.end],
			BezierHandles::Cubic { handle_start, handle_end } => vec![self.start, handle_start, handle_end, self.end],
		};
		let mut de_casteljau_points = vec![bezier_points];
		let mut current_points = de_casteljau_points.last().unwrap();

		// Iterate until one point is left, that point will be equal to `evaluate(t)`
		while current_points.len() > 1 {
			// Map from every adjacent pair of points to their respective midpoints, which decrements by 1 the number of points for the next iteration
			let next_points: Vec<DVec2> = current_points.as_slice().windows(2).map(|pair| DVec2::lerp(pair[0], pair[1], t)).collect();
			de_casteljau_points.push(next_points);

			current_points = de_casteljau_points.last().unwrap();
		}

		de_casteljau_points
	}

	/// Return a selection of equidistant `t`-values and the points they evaluate to, with `steps` subdivisions of the unit interval.
	pub fn compute_lookup_table(&self, steps: Option<usize>) -> impl Iterator<Item = DVec2> + '_ {
		let steps = steps.unwrap_or(DEFAULT_LUT_STEP_SIZE);
		(0..=steps).map(move |step| self.evaluate(step as f64 / steps as f64))
	}

	/// Return an approximation of the length of the bezier curve.
	/// Linear segments are measured exactly from their endpoints; higher orders integrate the derivative's magnitude
	/// with 24-point Legendre-Gauss quadrature, following the [arc length section](https://pomax.github.io/bezierinfo/#arclength) of Pomax's bezier curve primer.
	pub fn length(&self) -> f64 {
		if let BezierHandles::Linear = self.handles {
			return (self.end - self.start).length();
		}
		// The quadrature nodes live on [-1, 1], so remap them onto [0, 1] and halve the summed weights
		let sum: f64 = GAUSS_LEGENDRE_ABSCISSAE
			.iter()
			.zip(GAUSS_LEGENDRE_WEIGHTS.iter())
			.map(|(&abscissa, &weight)| {
				let t = 0.5 * abscissa + 0.5;
				weight * self.non_normalized_tangent(t).length()
			})
			.sum();
		0.5 * sum
	}
}
