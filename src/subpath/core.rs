use super::*;

/// Walk the segments from `from`, threading the current point through each one.
fn curves_of(from: DVec2, segments: &[PathSegment]) -> Vec<Bezier> {
	let mut current_point = from;
	segments
		.iter()
		.map(|segment| {
			let curve = segment.to_bezier(current_point);
			current_point = curve.end;
			curve
		})
		.collect()
}

impl Subpath {
	/// Create a new `Subpath` from a starting point and a sequence of segments.
	pub fn new(from: DVec2, segments: Vec<PathSegment>, closed: bool) -> Self {
		let bvh = BoundingVolumeNode::new(&curves_of(from, &segments));
		Self { from, segments, closed, bvh }
	}

	/// Create a `Subpath` consisting of a single curve.
	pub fn from_bezier(bezier: &Bezier, closed: bool) -> Self {
		Self::new(bezier.start, vec![PathSegment::from_bezier(bezier)], closed)
	}

	/// Create a `Subpath` from an ordered list of curves. Each curve is assumed to start where the
	/// previous one ends; only the first curve's start point is retained.
	pub fn from_beziers(beziers: &[Bezier], closed: bool) -> Self {
		let Some(first) = beziers.first() else {
			return Self::new(DVec2::ZERO, Vec::new(), closed);
		};
		Self::new(first.start, beziers.iter().map(PathSegment::from_bezier).collect(), closed)
	}

	/// An iterator over the subpath's curves, anchoring each segment at the point where the previous one ends.
	pub fn curves(&self) -> impl Iterator<Item = Bezier> + '_ {
		let mut current_point = self.from;
		self.segments.iter().map(move |segment| {
			let curve = segment.to_bezier(current_point);
			current_point = curve.end;
			curve
		})
	}

	/// If the subpath is closed and its last segment is a straight line back to the starting point,
	/// that segment restates what the closed flag already implies, so it is dropped.
	#[must_use]
	pub fn cleanup(self) -> Subpath {
		if !self.closed {
			return self;
		}
		match self.segments.last() {
			Some(PathSegment::Line { to }) if *to == self.from => {
				let mut segments = self.segments;
				segments.pop();
				Subpath::new(self.from, segments, self.closed)
			}
			_ => self,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::compare::compare_points;

	#[test]
	fn test_curves_thread_the_current_point() {
		let line = Bezier::from_linear_coordinates(0., 0., 10., 0.);
		let quadratic = Bezier::from_quadratic_coordinates(10., 0., 15., 10., 20., 0.);
		let subpath = Subpath::from_beziers(&[line, quadratic], false);

		assert_eq!(subpath.len(), 2);
		assert_eq!(subpath.from(), DVec2::ZERO);

		let curves: Vec<Bezier> = subpath.curves().collect();
		assert_eq!(curves, vec![line, quadratic]);
		assert!(compare_points(curves[0].end, curves[1].start));
	}

	#[test]
	fn test_empty_subpath() {
		let subpath = Subpath::from_beziers(&[], false);
		assert!(subpath.is_empty());
		assert_eq!(subpath.curves().count(), 0);
	}

	#[test]
	fn test_equality_ignores_the_hierarchy() {
		let beziers = [
			Bezier::from_linear_coordinates(0., 0., 10., 0.),
			Bezier::from_cubic_coordinates(10., 0., 15., 5., 20., 5., 25., 0.),
		];
		let subpath1 = Subpath::from_beziers(&beziers, true);
		let subpath2 = Subpath::new(subpath1.from(), subpath1.segments().to_vec(), true);
		assert_eq!(subpath1, subpath2);

		let open = Subpath::from_beziers(&beziers, false);
		assert_ne!(subpath1, open);
	}

	#[test]
	fn test_cleanup_drops_redundant_closing_line() {
		let triangle = [
			Bezier::from_linear_coordinates(0., 0., 10., 0.),
			Bezier::from_linear_coordinates(10., 0., 5., 10.),
			Bezier::from_linear_coordinates(5., 10., 0., 0.),
		];
		let closed = Subpath::from_beziers(&triangle, true).cleanup();
		assert_eq!(closed.len(), 2);

		// An open subpath keeps its trailing line
		let open = Subpath::from_beziers(&triangle, false).cleanup();
		assert_eq!(open.len(), 3);

		// A closed subpath whose last segment is not a line back to the start is untouched
		let arc_back = [
			Bezier::from_linear_coordinates(0., 0., 10., 0.),
			Bezier::from_quadratic_coordinates(10., 0., 5., 10., 0., 0.),
		];
		let closed_arc = Subpath::from_beziers(&arc_back, true).cleanup();
		assert_eq!(closed_arc.len(), 2);
	}
}
