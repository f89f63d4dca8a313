use std::fmt;

/// Position of an element in a tree, or the end position.
///
/// A position is a copyable handle on a node: it stays valid as long as the node it
/// refers to is in the tree, no matter how many other elements are inserted or removed.
/// The end position (also called the sentinel) follows the last element and precedes the
/// first one; it does not refer to any element.
///
/// Each node is given a unique stamp when it is allocated.
/// A position carries the stamp of its node so that using a position after its element
/// has been removed is detected (in debug builds) even if the node slot has been reused.
///
/// Positions of one tree must not be used with another tree.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
	/// Node identifier, `None` for the end position.
	node: Option<usize>,

	/// Stamp of the node.
	stamp: usize,
}

impl Position {
	#[inline]
	pub(crate) fn new(id: usize, stamp: usize) -> Position {
		Position {
			node: Some(id),
			stamp,
		}
	}

	/// The end position.
	#[inline]
	pub fn end() -> Position {
		Position {
			node: None,
			stamp: 0,
		}
	}

	#[inline]
	pub fn is_end(&self) -> bool {
		self.node.is_none()
	}

	/// Identifier of the node at this position, if any.
	#[inline]
	pub fn id(&self) -> Option<usize> {
		self.node
	}

	#[inline]
	pub fn stamp(&self) -> usize {
		self.stamp
	}
}

impl Default for Position {
	#[inline]
	fn default() -> Self {
		Position::end()
	}
}

impl fmt::Display for Position {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self.node {
			Some(id) => write!(f, "@{}#{}", id, self.stamp),
			None => write!(f, "@end"),
		}
	}
}

impl fmt::Debug for Position {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		fmt::Display::fmt(self, f)
	}
}
