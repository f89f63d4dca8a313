use super::RbTree;
use crate::generic::node::{Item, Node, Position};
use cc_traits::{SimpleCollectionMut, SimpleCollectionRef, Slab, SlabMut};

/// Bidirectional cursor over the elements of a tree.
///
/// A cursor points either to an element or to the end position.
/// Moving past the last element (or before the first one) lands on the end position,
/// and moving the end position does nothing.
pub struct Cursor<'a, K, V, C, O> {
	tree: &'a RbTree<K, V, C, O>,
	pos: Position,
}

impl<'a, K, V, C: Slab<Node<K, V>>, O> Cursor<'a, K, V, C, O>
where
	C: SimpleCollectionRef,
{
	#[inline]
	pub fn new(tree: &'a RbTree<K, V, C, O>, pos: Position) -> Self {
		Cursor { tree, pos }
	}

	#[inline]
	pub fn position(&self) -> Position {
		self.pos
	}

	#[inline]
	pub fn is_end(&self) -> bool {
		self.pos.is_end()
	}

	#[inline]
	pub fn item(&self) -> Option<&'a Item<K, V>> {
		self.tree.item(self.pos)
	}

	#[inline]
	pub fn key(&self) -> Option<&'a K> {
		self.item().map(Item::key)
	}

	#[inline]
	pub fn value(&self) -> Option<&'a V> {
		self.item().map(Item::value)
	}

	/// Move to the next element.
	#[inline]
	pub fn move_next(&mut self) {
		self.pos = self.tree.next(self.pos)
	}

	/// Move to the previous element.
	#[inline]
	pub fn move_prev(&mut self) {
		self.pos = self.tree.prev(self.pos)
	}

	/// Item of the next element, without moving the cursor.
	#[inline]
	pub fn peek_next(&self) -> Option<&'a Item<K, V>> {
		self.tree.item(self.tree.next(self.pos))
	}

	/// Item of the previous element, without moving the cursor.
	#[inline]
	pub fn peek_prev(&self) -> Option<&'a Item<K, V>> {
		self.tree.item(self.tree.prev(self.pos))
	}
}

impl<'a, K, V, C, O> Clone for Cursor<'a, K, V, C, O> {
	#[inline]
	fn clone(&self) -> Self {
		Cursor {
			tree: self.tree,
			pos: self.pos,
		}
	}
}

impl<'a, K, V, C, O> Copy for Cursor<'a, K, V, C, O> {}

/// Bidirectional cursor able to modify the values of a tree and remove its elements.
pub struct CursorMut<'a, K, V, C, O> {
	tree: &'a mut RbTree<K, V, C, O>,
	pos: Position,
}

impl<'a, K, V, C: SlabMut<Node<K, V>>, O> CursorMut<'a, K, V, C, O>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	#[inline]
	pub fn new(tree: &'a mut RbTree<K, V, C, O>, pos: Position) -> Self {
		CursorMut { tree, pos }
	}

	#[inline]
	pub fn position(&self) -> Position {
		self.pos
	}

	#[inline]
	pub fn is_end(&self) -> bool {
		self.pos.is_end()
	}

	/// Get an immutable cursor at the same position.
	#[inline]
	pub fn as_cursor(&self) -> Cursor<'_, K, V, C, O> {
		Cursor::new(self.tree, self.pos)
	}

	#[inline]
	pub fn item(&self) -> Option<&Item<K, V>> {
		self.tree.item(self.pos)
	}

	#[inline]
	pub fn key(&self) -> Option<&K> {
		self.item().map(Item::key)
	}

	#[inline]
	pub fn value(&self) -> Option<&V> {
		self.item().map(Item::value)
	}

	#[inline]
	pub fn value_mut(&mut self) -> Option<&mut V> {
		self.tree.item_mut(self.pos).map(Item::value_mut)
	}

	#[inline]
	pub fn move_next(&mut self) {
		self.pos = self.tree.next(self.pos)
	}

	#[inline]
	pub fn move_prev(&mut self) {
		self.pos = self.tree.prev(self.pos)
	}

	/// Remove the current element and move to the next one.
	///
	/// Returns `None` if the cursor is at the end position.
	#[inline]
	pub fn remove_current(&mut self) -> Option<Item<K, V>> {
		if self.pos.is_end() {
			None
		} else {
			let next = self.tree.next(self.pos);
			let item = self.tree.remove(self.pos);
			self.pos = next;
			Some(item)
		}
	}

	/// Convert the cursor into a mutable reference to the current value,
	/// with the lifetime of the tree borrow.
	#[inline]
	pub fn into_value_mut(self) -> Option<&'a mut V> {
		let CursorMut { tree, pos } = self;
		tree.item_mut(pos).map(Item::value_mut)
	}
}

#[cfg(all(test, feature = "slab"))]
mod tests {
	use super::*;

	type Tree = RbTree<i32, char, slab::Slab<Node<i32, char>>>;

	fn tree() -> Tree {
		let mut tree = Tree::new();
		for (k, v) in [(2, 'b'), (1, 'a'), (4, 'd'), (3, 'c')] {
			tree.insert(Item::new(k, v));
		}
		tree
	}

	#[test]
	fn walk_both_ways() {
		let tree = tree();
		let mut cursor = Cursor::new(&tree, tree.begin());
		assert_eq!(cursor.key(), Some(&1));
		assert_eq!(cursor.peek_prev(), None);
		assert_eq!(cursor.peek_next().map(Item::value), Some(&'b'));

		for k in 2..=4 {
			cursor.move_next();
			assert_eq!(cursor.key(), Some(&k));
		}

		cursor.move_next();
		assert!(cursor.is_end());
		cursor.move_prev();
		assert!(cursor.is_end());

		let mut cursor = Cursor::new(&tree, tree.rbegin());
		cursor.move_prev();
		assert_eq!(cursor.value(), Some(&'c'));
	}

	#[test]
	fn remove_while_walking() {
		let mut tree = tree();
		let begin = tree.begin();
		let mut cursor = CursorMut::new(&mut tree, begin);
		while !cursor.is_end() {
			if cursor.key().unwrap() % 2 == 0 {
				cursor.remove_current();
			} else {
				*cursor.value_mut().unwrap() = 'x';
				cursor.move_next()
			}
		}

		assert_eq!(cursor.remove_current(), None);
		tree.validate();
		assert_eq!(tree.len(), 2);
		let first = tree.begin();
		assert_eq!(tree.item(first), Some(&Item::new(1, 'x')));
		assert_eq!(tree.item(tree.next(first)), Some(&Item::new(3, 'x')));
	}
}
