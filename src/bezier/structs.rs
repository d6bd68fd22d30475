/// A single crossing between two curves, recorded as the parametric position on each.
/// `t1` belongs to the curve the intersection query was called on and `t2` to the other operand,
/// which for line queries is the position along the line.
///
/// Intersections order lexicographically by `(t1, t2)`, which is the order intersection queries return them in.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Intersection {
	pub t1: f64,
	pub t2: f64,
}

impl Intersection {
	pub fn new(t1: f64, t2: f64) -> Self {
		Self { t1, t2 }
	}

	/// The same crossing seen from the other curve's point of view.
	#[must_use]
	pub fn flipped(self) -> Self {
		Self { t1: self.t2, t2: self.t1 }
	}
}
