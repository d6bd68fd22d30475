use crate::Bezier;

/// A curve trimmed out of a larger one, remembering the parameter interval `[t1, t2]` it occupied on its ancestor.
/// Used by the intersection search and by `reduce` to relate results on a piece back to the whole curve.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Subcurve {
	pub t1: f64,
	pub t2: f64,
	pub curve: Bezier,
}

impl Subcurve {
	/// Wrap an untrimmed curve, spanning the full `[0, 1]` interval.
	pub fn new(curve: Bezier) -> Self {
		Self { t1: 0., t2: 1., curve }
	}

	/// Split at the local parameter `t`, producing two subcurves whose intervals partition this one.
	pub fn split(&self, t: f64) -> [Subcurve; 2] {
		let [left, right] = self.curve.split(t);
		let split_t = self.to_parent_t(t);
		[
			Subcurve {
				t1: self.t1,
				t2: split_t,
				curve: left,
			},
			Subcurve {
				t1: split_t,
				t2: self.t2,
				curve: right,
			},
		]
	}

	/// Trim to the local interval `[t1, t2]`, mapping the interval onto the ancestor.
	pub fn trim(&self, t1: f64, t2: f64) -> Subcurve {
		Subcurve {
			t1: self.to_parent_t(t1),
			t2: self.to_parent_t(t2),
			curve: self.curve.trim(t1, t2),
		}
	}

	/// Map a parameter local to this subcurve into the ancestor's parameter space.
	pub fn to_parent_t(&self, t: f64) -> f64 {
		t * self.t2 + (1. - t) * self.t1
	}
}
