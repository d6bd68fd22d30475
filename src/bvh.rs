use crate::bounding_box::{Bounded, BoundingBox};

/// A node of a bounding volume hierarchy built over a list of bounded objects.
///
/// The tree is built by recursively splitting the object list at its midpoint, then flattening
/// subtrees into wider nodes where the surface-area heuristic says the extra depth does not pay off.
/// Leaves remember the index their object held in the original list.
#[derive(Clone, Debug)]
pub struct BoundingVolumeNode<T> {
	bounding_box: BoundingBox,
	node_type: NodeType<T>,
}

#[derive(Clone, Debug)]
enum NodeType<T> {
	Leaf { object: T, element_index: usize },
	Internal { children: Vec<BoundingVolumeNode<T>> },
}

impl<T: Bounded + Clone> BoundingVolumeNode<T> {
	/// Build a hierarchy over `objects`, preserving their indices.
	/// An empty list produces a childless node with an empty bounding box.
	pub fn new(objects: &[T]) -> Self {
		Self::from_slice(objects, 0)
	}

	fn from_slice(slice: &[T], start_index: usize) -> Self {
		match slice.len() {
			0 => Self {
				bounding_box: BoundingBox::EMPTY,
				node_type: NodeType::Internal { children: Vec::new() },
			},
			1 => {
				let object = slice[0].clone();
				let bounding_box = object.bounding_box();
				Self {
					bounding_box,
					node_type: NodeType::Leaf { object, element_index: start_index },
				}
			}
			count => {
				let split_index = count / 2;
				let (left_slice, right_slice) = slice.split_at(split_index);
				let left = Self::from_slice(left_slice, start_index);
				let right = Self::from_slice(right_slice, start_index + split_index);
				let bounding_box = left.bounding_box.union(right.bounding_box);

				if count > 2 {
					// When at least one child is itself internal, the surface-area heuristic may say
					// the tree is better off adopting both children's descendants directly
					let cost_left = left.descendant_count() as f64 * (1. - left.bounding_box.area() / bounding_box.area());
					let cost_right = right.descendant_count() as f64 * (1. - right.bounding_box.area() / bounding_box.area());
					if 2. > cost_left + cost_right {
						let mut children = left.into_descendants();
						children.extend(right.into_descendants());
						return Self {
							bounding_box,
							node_type: NodeType::Internal { children },
						};
					}
				}

				Self {
					bounding_box,
					node_type: NodeType::Internal { children: vec![left, right] },
				}
			}
		}
	}
}

impl<T> BoundingVolumeNode<T> {
	/// The union box of every object stored beneath this node.
	pub fn bounding_box(&self) -> BoundingBox {
		self.bounding_box
	}

	/// The stored object and its original index, when this node is a leaf.
	pub fn leaf(&self) -> Option<(&T, usize)> {
		match &self.node_type {
			NodeType::Leaf { object, element_index } => Some((object, *element_index)),
			NodeType::Internal { .. } => None,
		}
	}

	fn descendant_count(&self) -> usize {
		match &self.node_type {
			NodeType::Leaf { .. } => 1,
			NodeType::Internal { children } => children.len(),
		}
	}

	fn into_descendants(self) -> Vec<Self> {
		match self.node_type {
			NodeType::Leaf { .. } => vec![self],
			NodeType::Internal { children } => children,
		}
	}

	/// Walk the tree depth-first, handing each node and its depth to `callback`.
	/// Returning `false` from the callback skips the node's subtree.
	pub fn visit(&self, callback: &mut impl FnMut(&BoundingVolumeNode<T>, usize) -> bool) {
		self.visit_at_depth(callback, 0)
	}

	fn visit_at_depth(&self, callback: &mut impl FnMut(&BoundingVolumeNode<T>, usize) -> bool, depth: usize) {
		if !callback(self, depth) {
			return;
		}
		if let NodeType::Internal { children } = &self.node_type {
			for child in children {
				child.visit_at_depth(callback, depth + 1);
			}
		}
	}

	/// Invoke `callback` for every pair of leaf objects, one from each tree, whose bounding boxes overlap.
	/// Subtrees whose boxes are disjoint are pruned without visiting their leaves.
	pub fn intersects(&self, other: &BoundingVolumeNode<T>, callback: &mut impl FnMut(&T, &T, usize, usize)) {
		if !self.bounding_box.overlaps(other.bounding_box) {
			return;
		}
		match (&self.node_type, &other.node_type) {
			(NodeType::Leaf { object: object1, element_index: index1 }, NodeType::Leaf { object: object2, element_index: index2 }) => {
				callback(object1, object2, *index1, *index2);
			}
			(NodeType::Leaf { .. }, NodeType::Internal { children }) => {
				for child in children {
					self.intersects(child, callback);
				}
			}
			(NodeType::Internal { children }, NodeType::Leaf { .. }) => {
				for child in children {
					child.intersects(other, callback);
				}
			}
			(NodeType::Internal { children: children1 }, NodeType::Internal { children: children2 }) => {
				for child1 in children1 {
					for child2 in children2 {
						child1.intersects(child2, callback);
					}
				}
			}
		}
	}
}
