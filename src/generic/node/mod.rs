use std::fmt;

mod item;
mod position;

pub use item::Item;
pub use position::Position;

/// Node color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
	Red,
	Black,
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Color::Red => write!(f, "red"),
			Color::Black => write!(f, "black"),
		}
	}
}

/// Side of a child relative to its parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
	Left,
	Right,
}

impl Side {
	#[inline]
	pub fn opposite(self) -> Side {
		match self {
			Side::Left => Side::Right,
			Side::Right => Side::Left,
		}
	}
}

/// Red-black tree node.
///
/// Links are node identifiers in the tree's node container.
/// A missing link (`None`) is the sentinel: it stands for every absent child,
/// for the parent of the root, and it is black.
#[derive(Clone, Debug)]
pub struct Node<K, V> {
	item: Item<K, V>,

	color: Color,

	/// Parent node, used for navigation only.
	parent: Option<usize>,

	left: Option<usize>,

	right: Option<usize>,

	/// Unique stamp given when the node is allocated.
	stamp: usize,
}

impl<K, V> Node<K, V> {
	/// Create a new red node without parent or children.
	#[inline]
	pub fn new(item: Item<K, V>, stamp: usize) -> Node<K, V> {
		Node {
			item,
			color: Color::Red,
			parent: None,
			left: None,
			right: None,
			stamp,
		}
	}

	#[inline]
	pub fn item(&self) -> &Item<K, V> {
		&self.item
	}

	#[inline]
	pub fn item_mut(&mut self) -> &mut Item<K, V> {
		&mut self.item
	}

	#[inline]
	pub fn into_item(self) -> Item<K, V> {
		self.item
	}

	#[inline]
	pub fn key(&self) -> &K {
		self.item.key()
	}

	#[inline]
	pub fn value(&self) -> &V {
		self.item.value()
	}

	#[inline]
	pub fn color(&self) -> Color {
		self.color
	}

	#[inline]
	pub fn set_color(&mut self, color: Color) {
		self.color = color
	}

	#[inline]
	pub fn is_red(&self) -> bool {
		self.color == Color::Red
	}

	#[inline]
	pub fn parent(&self) -> Option<usize> {
		self.parent
	}

	#[inline]
	pub fn set_parent(&mut self, parent: Option<usize>) {
		self.parent = parent
	}

	#[inline]
	pub fn left(&self) -> Option<usize> {
		self.left
	}

	#[inline]
	pub fn right(&self) -> Option<usize> {
		self.right
	}

	#[inline]
	pub fn child(&self, side: Side) -> Option<usize> {
		match side {
			Side::Left => self.left,
			Side::Right => self.right,
		}
	}

	#[inline]
	pub fn set_child(&mut self, side: Side, child: Option<usize>) {
		match side {
			Side::Left => self.left = child,
			Side::Right => self.right = child,
		}
	}

	/// Returns the side on which `child` hangs from this node.
	///
	/// `child` may be `None` (the sentinel) only if exactly one side is empty,
	/// otherwise the left side is returned.
	#[inline]
	pub fn side_of(&self, child: Option<usize>) -> Side {
		if self.left == child {
			Side::Left
		} else {
			Side::Right
		}
	}

	#[inline]
	pub fn stamp(&self) -> usize {
		self.stamp
	}

	/// Copy the node content (item, color, stamp) without its links.
	#[inline]
	pub fn detached_clone(&self) -> Node<K, V>
	where
		K: Clone,
		V: Clone,
	{
		Node {
			item: self.item.clone(),
			color: self.color,
			parent: None,
			left: None,
			right: None,
			stamp: self.stamp,
		}
	}

	/// Write the label of the node in the DOT language.
	///
	/// Requires the `dot` feature.
	#[cfg(feature = "dot")]
	#[inline]
	pub fn dot_write_label<W: std::io::Write>(&self, f: &mut W) -> std::io::Result<()>
	where
		K: std::fmt::Display,
		V: std::fmt::Display,
	{
		write!(f, "{}|{}", self.key(), self.value())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn new_node_is_red_and_detached() {
		let node = Node::new(Item::new(1, "a"), 7);
		assert!(node.is_red());
		assert_eq!((node.left(), node.right()), (None, None));
		assert_eq!(node.parent(), None);
		assert_eq!(node.stamp(), 7);
	}

	#[test]
	fn side_of_child() {
		let mut node = Node::new(Item::new(1, ()), 1);
		node.set_child(Side::Left, Some(3));
		node.set_child(Side::Right, Some(4));
		assert_eq!(node.side_of(Some(3)), Side::Left);
		assert_eq!(node.side_of(Some(4)), Side::Right);

		node.set_child(Side::Right, None);
		assert_eq!(node.side_of(None), Side::Right);
		assert_eq!(Side::Left.opposite(), Side::Right);
	}
}
