mod core;
mod solvers;

use crate::bezier::{Bezier, BezierHandles};
use crate::bvh::BoundingVolumeNode;
use glam::DVec2;
use std::fmt::{Debug, Formatter, Result};

/// One drawing command relative to an implied current point: a straight line, a quadratic curve
/// (one control point), or a cubic curve (two control points), each ending at `to`.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathSegment {
	Line { to: DVec2 },
	Quadratic { handle: DVec2, to: DVec2 },
	Cubic { handle_start: DVec2, handle_end: DVec2, to: DVec2 },
}

impl PathSegment {
	/// Capture the handles and endpoint of a [Bezier], discarding its start point.
	pub fn from_bezier(bezier: &Bezier) -> Self {
		match bezier.handles {
			BezierHandles::Linear => Self::Line { to: bezier.end },
			BezierHandles::Quadratic { handle } => Self::Quadratic { handle, to: bezier.end },
			BezierHandles::Cubic { handle_start, handle_end } => Self::Cubic { handle_start, handle_end, to: bezier.end },
		}
	}

	/// The point the segment ends at.
	pub fn end_point(&self) -> DVec2 {
		match *self {
			Self::Line { to } | Self::Quadratic { to, .. } | Self::Cubic { to, .. } => to,
		}
	}

	/// Reattach the segment to a concrete current point, producing a [Bezier].
	pub fn to_bezier(&self, from: DVec2) -> Bezier {
		match *self {
			Self::Line { to } => Bezier::from_linear_dvec2(from, to),
			Self::Quadratic { handle, to } => Bezier::from_quadratic_dvec2(from, handle, to),
			Self::Cubic { handle_start, handle_end, to } => Bezier::from_cubic_dvec2(from, handle_start, handle_end, to),
		}
	}
}

/// A subpath: a starting point, an ordered sequence of segments, and a flag for whether the path is closed.
/// A bounding volume hierarchy over the subpath's curves is built on construction; since a subpath is
/// immutable once constructed, the hierarchy never needs invalidating.
#[derive(Clone)]
pub struct Subpath {
	from: DVec2,
	segments: Vec<PathSegment>,
	closed: bool,
	bvh: BoundingVolumeNode<Bezier>,
}

// The hierarchy is derived from the other fields, so it takes no part in equality or formatting
impl PartialEq for Subpath {
	fn eq(&self, other: &Self) -> bool {
		self.from == other.from && self.closed == other.closed && self.segments == other.segments
	}
}

impl Debug for Subpath {
	fn fmt(&self, f: &mut Formatter<'_>) -> Result {
		f.debug_struct("Subpath").field("from", &self.from).field("segments", &self.segments).field("closed", &self.closed).finish()
	}
}

impl Subpath {
	/// The point the subpath starts from.
	pub fn from(&self) -> DVec2 {
		self.from
	}

	/// The subpath's segments, relative to the implied current point.
	pub fn segments(&self) -> &[PathSegment] {
		&self.segments
	}

	pub fn is_closed(&self) -> bool {
		self.closed
	}

	pub fn is_empty(&self) -> bool {
		self.segments.is_empty()
	}

	/// The number of segments in the subpath.
	pub fn len(&self) -> usize {
		self.segments.len()
	}

	/// The bounding volume hierarchy over the subpath's curves.
	pub fn bounding_volume_node(&self) -> &BoundingVolumeNode<Bezier> {
		&self.bvh
	}
}
