//! Bezier-geom: A computational geometry library for planar Bezier curves and subpaths.
#[cfg(test)]
pub(crate) mod compare;

mod bezier;
mod bounding_box;
mod bvh;
mod consts;
mod subcurve;
mod subpath;
mod utils;

pub use bezier::*;
pub use bounding_box::{Bounded, BoundingBox};
pub use bvh::BoundingVolumeNode;
pub use subcurve::Subcurve;
pub use subpath::*;
