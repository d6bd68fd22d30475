use glam::DVec2;

/// An axis-aligned rectangle described by its minimum and maximum corners.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
	/// The corner with the smallest coordinates on both axes.
	pub min: DVec2,
	/// The corner with the largest coordinates on both axes.
	pub max: DVec2,
}

impl BoundingBox {
	/// The box containing no points. It is the identity for [BoundingBox::union] and overlaps nothing, itself included.
	pub const EMPTY: BoundingBox = BoundingBox {
		min: DVec2::INFINITY,
		max: DVec2::NEG_INFINITY,
	};

	pub fn new(min: DVec2, max: DVec2) -> Self {
		Self { min, max }
	}

	/// Construct the box spanning two corners given in any order.
	pub fn from_corners(p1: DVec2, p2: DVec2) -> Self {
		Self { min: p1.min(p2), max: p1.max(p2) }
	}

	/// The smallest box containing both `self` and `other`.
	#[must_use]
	pub fn union(&self, other: BoundingBox) -> Self {
		Self {
			min: self.min.min(other.min),
			max: self.max.max(other.max),
		}
	}

	/// The size of the box, which is zero on each axis where the box is empty.
	pub fn size(&self) -> DVec2 {
		(self.max - self.min).max(DVec2::ZERO)
	}

	pub fn area(&self) -> f64 {
		let size = self.size();
		size.x * size.y
	}

	/// Whether the two boxes share at least one point. Any NaN or negative gap on either axis means they do not.
	pub fn overlaps(&self, other: BoundingBox) -> bool {
		let intersection_min = self.min.max(other.min);
		let intersection_max = self.max.min(other.max);
		let difference = intersection_max - intersection_min;
		difference.x >= 0. && difference.y >= 0.
	}

	/// The distance from `point` to the closest point inside the box.
	pub fn lower_bound_distance(&self, point: DVec2) -> f64 {
		(point - point.clamp(self.min, self.max)).length()
	}

	/// The distance from `point` to the per-axis farthest corner of the box.
	pub fn upper_bound_distance(&self, point: DVec2) -> f64 {
		let from_min = (point - self.min).abs();
		let from_max = (point - self.max).abs();
		from_min.max(from_max).length()
	}
}

/// An object with a computable axis-aligned bounding box, suitable for storage in a [crate::BoundingVolumeNode].
pub trait Bounded {
	fn bounding_box(&self) -> BoundingBox;
}

impl Bounded for BoundingBox {
	fn bounding_box(&self) -> BoundingBox {
		*self
	}
}
