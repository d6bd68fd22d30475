use super::*;
use crate::bounding_box::BoundingBox;

impl Subpath {
	/// The sum of the arc lengths of the subpath's curves.
	pub fn length(&self) -> f64 {
		self.curves().map(|curve| curve.length()).sum()
	}

	/// The bounding box of the whole subpath, read off the root of the bounding volume hierarchy.
	/// Empty subpaths report the empty box.
	pub fn bounding_box(&self) -> BoundingBox {
		self.bvh.bounding_box()
	}

	/// Offset every curve of the subpath by `distance` along its normals and reassemble the pieces
	/// into a new subpath. Curves that are not simple contribute several offset pieces each.
	pub fn offset(&self, distance: f64) -> Subpath {
		let offset_curves: Vec<Bezier> = self.curves().flat_map(|curve| curve.offset(distance)).collect();
		Subpath::from_beziers(&offset_curves, self.closed)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::compare::{compare_f64s, compare_points};

	#[test]
	fn test_length_sums_the_curves() {
		let subpath = Subpath::from_beziers(
			&[Bezier::from_linear_coordinates(0., 0., 3., 4.), Bezier::from_linear_coordinates(3., 4., 3., 10.)],
			false,
		);
		assert!(compare_f64s(subpath.length(), 11.));

		assert_eq!(Subpath::from_beziers(&[], false).length(), 0.);
	}

	#[test]
	fn test_bounding_box() {
		let subpath = Subpath::from_beziers(
			&[
				Bezier::from_linear_coordinates(10., 20., 40., 30.),
				Bezier::from_quadratic_coordinates(40., 30., 70., 90., 100., 30.),
			],
			false,
		);
		let bounding_box = subpath.bounding_box();
		assert!(compare_points(bounding_box.min, DVec2::new(10., 20.)));
		// The quadratic peaks at y = 60, halfway between its endpoints and its handle
		assert!(compare_points(bounding_box.max, DVec2::new(100., 60.)));

		let empty = Subpath::from_beziers(&[], false);
		assert_eq!(empty.bounding_box(), BoundingBox::EMPTY);
	}

	#[test]
	fn test_offset() {
		let line = Bezier::from_linear_coordinates(0., 0., 10., 0.);
		let subpath = Subpath::from_bezier(&line, false);
		let offset = subpath.offset(5.);

		assert_eq!(offset.len(), 1);
		let offset_curve = offset.curves().next().unwrap();
		assert!(compare_points(offset_curve.start, DVec2::new(0., 5.)));
		assert!(compare_points(offset_curve.end, DVec2::new(10., 5.)));

		// A curve that is not simple expands into several offset pieces
		let arch = Bezier::from_quadratic_coordinates(0., 0., 50., 100., 100., 0.);
		let arch_offset = Subpath::from_bezier(&arch, false).offset(10.);
		assert!(arch_offset.len() >= 2);
	}
}
