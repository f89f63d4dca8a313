use crate::{
	generic::node::{Color, Item, Node, Position, Side},
	order::{Natural, Order},
};
use cc_traits::{SimpleCollectionMut, SimpleCollectionRef, Slab, SlabMut};
use smallvec::SmallVec;
use std::{borrow::Borrow, cmp::Ordering, marker::PhantomData};

mod cursor;

pub use cursor::*;

/// Empty child slot where a new node can be linked.
///
/// `parent` is `None` for the root slot of an empty tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot {
	pub parent: Option<usize>,
	pub side: Side,
}

impl Slot {
	#[inline]
	fn root() -> Slot {
		Slot {
			parent: None,
			side: Side::Left,
		}
	}
}

/// Red-black tree.
///
/// Nodes are allocated in a slab-like container `C`, and refer to each other by
/// identifier, including the (non-owning) link from each node to its parent.
/// The absence of a node (`None`) plays the role of the sentinel: it is black,
/// it is the child of every leaf and the parent of the root.
///
/// The tree keeps track of its minimum (`first`) and maximum (`last`) nodes so
/// that the boundary positions are available in constant time.
///
/// Keys are sorted with the order `O`, fixed when the tree is created.
/// No two keys in the tree are equivalent under this order.
///
/// This type is the engine behind [`RbTreeMap`](crate::generic::RbTreeMap) and
/// [`RbTreeSet`](crate::generic::RbTreeSet). Its API works with [`Position`]s
/// rather than keys and is mostly useful to build new collections on top of it.
///
/// # Invariants
///
/// After every public mutation:
///   - the root is black;
///   - no red node has a red child;
///   - every path from a node to a descendant sentinel contains the same number of black nodes;
///   - the in-order traversal yields strictly increasing keys;
///   - `first` and `last` are the leftmost and rightmost nodes;
///   - `len` is the number of nodes.
///
/// See [`RbTree::validate`].
pub struct RbTree<K, V, C, O = Natural> {
	/// Allocated nodes.
	nodes: C,

	/// Root node id.
	root: Option<usize>,

	/// Leftmost node id.
	first: Option<usize>,

	/// Rightmost node id.
	last: Option<usize>,

	/// Number of nodes in the tree.
	len: usize,

	/// Stamp given to the next allocated node.
	next_stamp: usize,

	order: O,

	k: PhantomData<K>,
	v: PhantomData<V>,
}

impl<K, V, C> RbTree<K, V, C, Natural> {
	/// Create a new empty tree sorted by the natural order of the keys.
	#[inline]
	pub fn new() -> Self
	where
		C: Default,
	{
		Self::with_order(Natural)
	}
}

impl<K, V, C, O> RbTree<K, V, C, O> {
	/// Create a new empty tree sorted by the given order.
	#[inline]
	pub fn with_order(order: O) -> Self
	where
		C: Default,
	{
		RbTree {
			nodes: Default::default(),
			root: None,
			first: None,
			last: None,
			len: 0,
			next_stamp: 1,
			order,
			k: PhantomData,
			v: PhantomData,
		}
	}

	#[inline]
	pub fn order(&self) -> &O {
		&self.order
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.len
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.root.is_none()
	}

	#[inline]
	pub fn root_id(&self) -> Option<usize> {
		self.root
	}

	#[inline]
	pub fn first_id(&self) -> Option<usize> {
		self.first
	}

	#[inline]
	pub fn last_id(&self) -> Option<usize> {
		self.last
	}

	/// Exchange the content of two trees, including their orders.
	///
	/// No node is touched.
	#[inline]
	pub fn swap(&mut self, other: &mut Self) {
		log::trace!("swapping trees of {} and {} nodes", self.len, other.len);
		std::mem::swap(self, other)
	}
}

impl<K, V, C: Slab<Node<K, V>>, O> RbTree<K, V, C, O>
where
	C: SimpleCollectionRef,
{
	/// Get the node associated to the given `id`.
	///
	/// Panics if `id` is not a node of the tree.
	#[inline]
	pub fn node(&self, id: usize) -> &Node<K, V> {
		C::into_ref(self.nodes.get(id).unwrap())
	}

	#[inline]
	fn is_red(&self, id: Option<usize>) -> bool {
		match id {
			Some(id) => self.node(id).is_red(),
			None => false,
		}
	}

	#[inline]
	fn is_black(&self, id: Option<usize>) -> bool {
		!self.is_red(id)
	}

	#[inline]
	fn child(&self, id: usize, side: Side) -> Option<usize> {
		self.node(id).child(side)
	}

	/// Returns the position of the given node, or the end position.
	#[inline]
	pub fn position_of(&self, id: Option<usize>) -> Position {
		match id {
			Some(id) => Position::new(id, self.node(id).stamp()),
			None => Position::end(),
		}
	}

	/// Resolve a position into a node identifier.
	///
	/// Stale positions (whose element has been removed) fail a debug assertion.
	#[inline]
	pub fn resolve(&self, pos: Position) -> Option<usize> {
		pos.id().map(|id| {
			debug_assert!(
				self.nodes.get(id).is_some() && self.node(id).stamp() == pos.stamp(),
				"stale position {}",
				pos
			);
			id
		})
	}

	/// Item at the given position, or `None` for the end position.
	#[inline]
	pub fn item(&self, pos: Position) -> Option<&Item<K, V>> {
		self.resolve(pos).map(|id| self.node(id).item())
	}

	/// Position of the first (minimum) element, or the end position if the tree is empty.
	#[inline]
	pub fn begin(&self) -> Position {
		self.position_of(self.first)
	}

	/// The end position.
	#[inline]
	pub fn end(&self) -> Position {
		Position::end()
	}

	/// Position of the last (maximum) element, where reverse traversal starts.
	#[inline]
	pub fn rbegin(&self) -> Position {
		self.position_of(self.last)
	}

	/// Position where reverse traversal ends.
	///
	/// There is only one sentinel, so this is the same as [`RbTree::end`].
	#[inline]
	pub fn rend(&self) -> Position {
		Position::end()
	}

	/// Leftmost node of the subtree rooted in `id`.
	#[inline]
	pub fn minimum(&self, mut id: usize) -> usize {
		while let Some(left) = self.node(id).left() {
			id = left
		}
		id
	}

	/// Rightmost node of the subtree rooted in `id`.
	#[inline]
	pub fn maximum(&self, mut id: usize) -> usize {
		while let Some(right) = self.node(id).right() {
			id = right
		}
		id
	}

	/// In-order successor of the given node.
	///
	/// Descends to the minimum of the right subtree if any, otherwise climbs up while
	/// the node is a right child and steps to the parent.
	/// Returns `None` after the maximum.
	#[inline]
	pub fn successor(&self, id: usize) -> Option<usize> {
		self.neighbor(id, Side::Right)
	}

	/// In-order predecessor of the given node.
	///
	/// Returns `None` before the minimum.
	#[inline]
	pub fn predecessor(&self, id: usize) -> Option<usize> {
		self.neighbor(id, Side::Left)
	}

	fn neighbor(&self, mut id: usize, side: Side) -> Option<usize> {
		match self.child(id, side) {
			Some(child) => {
				let mut id = child;
				while let Some(next) = self.child(id, side.opposite()) {
					id = next
				}
				Some(id)
			}
			None => loop {
				match self.node(id).parent() {
					Some(parent) => {
						if self.child(parent, side) == Some(id) {
							id = parent
						} else {
							break Some(parent);
						}
					}
					None => break None,
				}
			},
		}
	}

	/// Position following `pos` in order.
	///
	/// The position following the maximum is the end position.
	/// Advancing the end position leaves it unchanged.
	#[inline]
	pub fn next(&self, pos: Position) -> Position {
		match self.resolve(pos) {
			Some(id) => self.position_of(self.successor(id)),
			None => pos,
		}
	}

	/// Position preceding `pos` in order.
	///
	/// The position preceding the minimum is the end position.
	/// Retreating the end position leaves it unchanged.
	#[inline]
	pub fn prev(&self, pos: Position) -> Position {
		match self.resolve(pos) {
			Some(id) => self.position_of(self.predecessor(id)),
			None => pos,
		}
	}

	/// Node preceding the given node or, for the sentinel, the last node.
	#[inline]
	pub(crate) fn predecessor_or_last(&self, id: Option<usize>) -> Option<usize> {
		match id {
			Some(id) => self.predecessor(id),
			None => self.last,
		}
	}

	/// Find the node holding the given key.
	#[inline]
	pub fn search_id<Q: ?Sized>(&self, key: &Q) -> Option<usize>
	where
		K: Borrow<Q>,
		O: Order<Q>,
	{
		let mut x = self.root;
		while let Some(id) = x {
			let node = self.node(id);
			match self.order.compare(key, node.key().borrow()) {
				Ordering::Less => x = node.left(),
				Ordering::Greater => x = node.right(),
				Ordering::Equal => return Some(id),
			}
		}

		None
	}

	/// Position of the element with the given key, or the end position.
	#[inline]
	pub fn search<Q: ?Sized>(&self, key: &Q) -> Position
	where
		K: Borrow<Q>,
		O: Order<Q>,
	{
		self.position_of(self.search_id(key))
	}

	/// Find the node holding the given key, or the empty slot where it would be linked.
	pub fn find_slot<Q: ?Sized>(&self, key: &Q) -> Result<usize, Slot>
	where
		K: Borrow<Q>,
		O: Order<Q>,
	{
		let mut slot = Slot::root();
		let mut x = self.root;
		while let Some(id) = x {
			let node = self.node(id);
			let side = match self.order.compare(key, node.key().borrow()) {
				Ordering::Less => Side::Left,
				Ordering::Greater => Side::Right,
				Ordering::Equal => return Ok(id),
			};

			slot = Slot {
				parent: Some(id),
				side,
			};
			x = node.child(side);
		}

		Err(slot)
	}

	/// First node whose key is not ordered before `key`.
	#[inline]
	pub fn lower_bound_id<Q: ?Sized>(&self, key: &Q) -> Option<usize>
	where
		K: Borrow<Q>,
		O: Order<Q>,
	{
		let mut x = self.root;
		let mut y = None;
		while let Some(id) = x {
			let node = self.node(id);
			if self.order.less(node.key().borrow(), key) {
				x = node.right()
			} else {
				y = Some(id);
				x = node.left()
			}
		}

		y
	}

	/// First node whose key is ordered after `key`.
	#[inline]
	pub fn upper_bound_id<Q: ?Sized>(&self, key: &Q) -> Option<usize>
	where
		K: Borrow<Q>,
		O: Order<Q>,
	{
		let mut x = self.root;
		let mut y = None;
		while let Some(id) = x {
			let node = self.node(id);
			if self.order.less(key, node.key().borrow()) {
				y = Some(id);
				x = node.left()
			} else {
				x = node.right()
			}
		}

		y
	}

	/// Position of the first element whose key is not ordered before `key`,
	/// or the end position.
	#[inline]
	pub fn lower_bound<Q: ?Sized>(&self, key: &Q) -> Position
	where
		K: Borrow<Q>,
		O: Order<Q>,
	{
		self.position_of(self.lower_bound_id(key))
	}

	/// Position of the first element whose key is ordered after `key`,
	/// or the end position.
	#[inline]
	pub fn upper_bound<Q: ?Sized>(&self, key: &Q) -> Position
	where
		K: Borrow<Q>,
		O: Order<Q>,
	{
		self.position_of(self.upper_bound_id(key))
	}

	/// Returns `(lower_bound(key), upper_bound(key))`.
	///
	/// Since keys are unique, the range contains at most one element.
	#[inline]
	pub fn equal_range<Q: ?Sized>(&self, key: &Q) -> (Position, Position)
	where
		K: Borrow<Q>,
		O: Order<Q>,
	{
		(self.lower_bound(key), self.upper_bound(key))
	}

	/// Returns the maximum depth of the tree, `0` if it is empty.
	pub fn height(&self) -> usize {
		fn height_of<K, V, C: Slab<Node<K, V>>, O>(
			tree: &RbTree<K, V, C, O>,
			id: Option<usize>,
		) -> usize
		where
			C: SimpleCollectionRef,
		{
			match id {
				Some(id) => {
					let node = tree.node(id);
					1 + std::cmp::max(height_of(tree, node.left()), height_of(tree, node.right()))
				}
				None => 0,
			}
		}

		height_of(self, self.root)
	}

	/// Validate the tree.
	///
	/// Panics if one of the red-black tree invariants does not hold.
	/// Returns the black-height of the tree (not counting the sentinel).
	pub fn validate(&self) -> usize
	where
		O: Order<K>,
	{
		if let Some(root) = self.root {
			let node = self.node(root);
			assert!(node.parent().is_none(), "root has a parent");
			assert!(!node.is_red(), "root is red");
		}

		let mut count = 0;
		let black_height = self.validate_node(self.root, None, None, None, &mut count);

		assert_eq!(count, self.len, "node count mismatch");
		assert_eq!(
			self.first,
			self.root.map(|root| self.minimum(root)),
			"invalid first node"
		);
		assert_eq!(
			self.last,
			self.root.map(|root| self.maximum(root)),
			"invalid last node"
		);

		black_height
	}

	/// Validate the subtree rooted in `id` and returns its black-height.
	fn validate_node(
		&self,
		id: Option<usize>,
		parent: Option<usize>,
		min: Option<&K>,
		max: Option<&K>,
		count: &mut usize,
	) -> usize
	where
		O: Order<K>,
	{
		match id {
			Some(id) => {
				*count += 1;
				let node = self.node(id);
				assert_eq!(node.parent(), parent, "invalid parent link on node {}", id);

				if let Some(min) = min {
					assert!(self.order.less(min, node.key()), "keys are not sorted");
				}

				if let Some(max) = max {
					assert!(self.order.less(node.key(), max), "keys are not sorted");
				}

				if node.is_red() {
					assert!(
						self.is_black(node.left()) && self.is_black(node.right()),
						"red node {} has a red child",
						id
					);
				}

				let left = self.validate_node(node.left(), Some(id), min, Some(node.key()), count);
				let right = self.validate_node(node.right(), Some(id), Some(node.key()), max, count);
				assert_eq!(left, right, "black-height mismatch under node {}", id);

				if node.is_red() {
					left
				} else {
					left + 1
				}
			}
			None => 0,
		}
	}

	/// Write the tree in the DOT graph description language.
	///
	/// Requires the `dot` feature.
	#[cfg(feature = "dot")]
	#[inline]
	pub fn dot_write<W: std::io::Write>(&self, f: &mut W) -> std::io::Result<()>
	where
		K: std::fmt::Display,
		V: std::fmt::Display,
	{
		write!(f, "digraph tree {{\n\tnode [shape=record];\n")?;
		if let Some(id) = self.root {
			self.dot_write_node(f, id)?
		}
		write!(f, "}}")
	}

	/// Write the given node in the DOT graph description language.
	///
	/// Requires the `dot` feature.
	#[cfg(feature = "dot")]
	#[inline]
	fn dot_write_node<W: std::io::Write>(&self, f: &mut W, id: usize) -> std::io::Result<()>
	where
		K: std::fmt::Display,
		V: std::fmt::Display,
	{
		let name = format!("n{}", id);
		let node = self.node(id);

		write!(f, "\t{} [color={}, label=\"", name, node.color())?;
		node.dot_write_label(f)?;
		writeln!(f, "|({})\"];", id)?;

		for child_id in node.left().into_iter().chain(node.right()) {
			self.dot_write_node(f, child_id)?;
			writeln!(f, "\t{} -> n{}", name, child_id)?;
		}

		Ok(())
	}
}

impl<K, V, C: SlabMut<Node<K, V>>, O> RbTree<K, V, C, O>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	/// Get the node associated to the given `id` mutably.
	///
	/// Panics if `id` is not a node of the tree.
	#[inline]
	pub fn node_mut(&mut self, id: usize) -> &mut Node<K, V> {
		C::into_mut(self.nodes.get_mut(id).unwrap())
	}

	/// Item at the given position, or `None` for the end position.
	#[inline]
	pub fn item_mut(&mut self, pos: Position) -> Option<&mut Item<K, V>> {
		match self.resolve(pos) {
			Some(id) => Some(self.node_mut(id).item_mut()),
			None => None,
		}
	}

	/// Remove every element of the tree.
	#[inline]
	pub fn clear(&mut self)
	where
		C: cc_traits::Clear,
	{
		log::debug!("clearing tree of {} nodes", self.len);
		self.root = None;
		self.first = None;
		self.last = None;
		self.len = 0;
		self.nodes.clear()
	}

	/// Allocate a new red node for the given item.
	#[inline]
	fn allocate_node(&mut self, item: Item<K, V>) -> usize {
		let stamp = self.next_stamp;
		self.next_stamp += 1;
		self.nodes.insert(Node::new(item, stamp))
	}

	/// Release the given node identifier and return the node it used to identify.
	#[inline]
	fn release_node(&mut self, id: usize) -> Node<K, V> {
		self.nodes.remove(id).unwrap()
	}

	#[inline]
	fn set_color(&mut self, id: Option<usize>, color: Color) {
		if let Some(id) = id {
			self.node_mut(id).set_color(color)
		}
	}

	#[inline]
	fn set_parent(&mut self, id: Option<usize>, parent: Option<usize>) {
		if let Some(id) = id {
			self.node_mut(id).set_parent(parent)
		}
	}

	/// Refresh the cached minimum and maximum nodes.
	#[inline]
	fn refresh_bounds(&mut self) {
		self.first = self.root.map(|root| self.minimum(root));
		self.last = self.root.map(|root| self.maximum(root));
	}

	/// Replace the child `old` of `parent` (or the root if `parent` is `None`) with `new`.
	///
	/// The parent link of `new` is not updated.
	#[inline]
	fn replace_child(&mut self, parent: Option<usize>, old: usize, new: Option<usize>) {
		match parent {
			Some(parent) => {
				let side = self.node(parent).side_of(Some(old));
				self.node_mut(parent).set_child(side, new)
			}
			None => self.root = new,
		}
	}

	/// Put the subtree rooted in `v` at the place of the subtree rooted in `u`.
	#[inline]
	fn transplant(&mut self, u: usize, v: Option<usize>) {
		let parent = self.node(u).parent();
		self.replace_child(parent, u, v);
		self.set_parent(v, parent)
	}

	/// Rotate the node `x` down toward `side`.
	///
	/// The child of `x` on the opposite side takes its place and `x` becomes its child
	/// on `side`. Rotating toward [`Side::Left`] is a left rotation.
	///
	/// Panics if `x` has no child on the opposite side.
	fn rotate(&mut self, x: usize, side: Side) {
		let y = self.child(x, side.opposite()).unwrap();
		let inner = self.child(y, side);

		self.node_mut(x).set_child(side.opposite(), inner);
		self.set_parent(inner, Some(x));

		let parent = self.node(x).parent();
		self.node_mut(y).set_parent(parent);
		self.replace_child(parent, x, Some(y));

		self.node_mut(y).set_child(side, Some(x));
		self.node_mut(x).set_parent(Some(y));
	}

	/// Insert an item in the tree.
	///
	/// If an element with an equivalent key is already in the tree, the tree is left
	/// untouched, the given item is dropped and `(position, false)` is returned where
	/// `position` is the position of the existing element.
	/// Otherwise returns the position of the new element and `true`.
	#[inline]
	pub fn insert(&mut self, item: Item<K, V>) -> (Position, bool)
	where
		O: Order<K>,
	{
		match self.try_insert(item) {
			Ok(pos) => (pos, true),
			Err((pos, _)) => (pos, false),
		}
	}

	/// Insert an item in the tree, giving it back if an equivalent key is already there.
	#[inline]
	pub fn try_insert(&mut self, item: Item<K, V>) -> Result<Position, (Position, Item<K, V>)>
	where
		O: Order<K>,
	{
		match self.find_slot(item.key()) {
			Ok(id) => Err((self.position_of(Some(id)), item)),
			Err(slot) => {
				let id = self.insert_at(slot, item);
				Ok(self.position_of(Some(id)))
			}
		}
	}

	/// Insert an item using `hint` as a suggestion for where it should go.
	///
	/// If the key fits right before or right after the hinted element (strictly between
	/// the hint and its neighbor on that side), the new node is linked next to the
	/// hint without searching from the root.
	/// Otherwise this falls back to [`RbTree::insert`].
	/// A hint at the end position suggests appending after the maximum.
	///
	/// Returns the position of the new element, or of the existing element with an
	/// equivalent key (in which case the item is dropped).
	#[inline]
	pub fn insert_hint(&mut self, hint: Position, item: Item<K, V>) -> Position
	where
		O: Order<K>,
	{
		match self.try_insert_hint(hint, item) {
			Ok(pos) => pos,
			Err((pos, _)) => pos,
		}
	}

	/// Insert an item using `hint` as a suggestion for where it should go,
	/// giving it back if an equivalent key is already there.
	pub fn try_insert_hint(
		&mut self,
		hint: Position,
		item: Item<K, V>,
	) -> Result<Position, (Position, Item<K, V>)>
	where
		O: Order<K>,
	{
		match self.hinted_slot(hint, item.key()) {
			Some(Ok(id)) => Err((self.position_of(Some(id)), item)),
			Some(Err(slot)) => {
				let id = self.insert_at(slot, item);
				Ok(self.position_of(Some(id)))
			}
			None => self.try_insert(item),
		}
	}

	/// Find the slot for `key` next to the hinted node, if the key belongs there.
	fn hinted_slot(&self, hint: Position, key: &K) -> Option<Result<usize, Slot>>
	where
		O: Order<K>,
	{
		match self.resolve(hint) {
			Some(h) => match self.order.compare(key, self.node(h).key()) {
				Ordering::Less => {
					let before = self.predecessor(h);
					match before {
						Some(p) if !self.order.less(self.node(p).key(), key) => None,
						_ => Some(Err(self.slot_between(before, h, Side::Left))),
					}
				}
				Ordering::Greater => {
					let after = self.successor(h);
					match after {
						Some(s) if !self.order.less(key, self.node(s).key()) => None,
						_ => Some(Err(self.slot_between(after, h, Side::Right))),
					}
				}
				Ordering::Equal => Some(Ok(h)),
			},
			None => match self.last {
				Some(last) if self.order.less(self.node(last).key(), key) => Some(Err(Slot {
					parent: Some(last),
					side: Side::Right,
				})),
				Some(_) => None,
				None => Some(Err(Slot::root())),
			},
		}
	}

	/// Empty slot between the node `h` and its in-order `neighbor` on `side`.
	///
	/// Either `h` has no child on `side`, or the neighbor (which is then the
	/// extremum of that subtree) has no child on the opposite side.
	#[inline]
	fn slot_between(&self, neighbor: Option<usize>, h: usize, side: Side) -> Slot {
		match self.child(h, side) {
			None => Slot {
				parent: Some(h),
				side,
			},
			Some(_) => Slot {
				parent: neighbor,
				side: side.opposite(),
			},
		}
	}

	/// Link a new node with the given item in an empty slot and rebalance the tree.
	///
	/// The slot must be where the item's key belongs,
	/// for instance as returned by [`RbTree::find_slot`].
	/// Returns the identifier of the new node.
	pub fn insert_at(&mut self, slot: Slot, item: Item<K, V>) -> usize {
		let id = self.allocate_node(item);
		self.node_mut(id).set_parent(slot.parent);
		match slot.parent {
			Some(parent) => {
				debug_assert!(self.child(parent, slot.side).is_none());
				self.node_mut(parent).set_child(slot.side, Some(id))
			}
			None => {
				debug_assert!(self.root.is_none());
				self.root = Some(id)
			}
		}

		self.len += 1;
		self.insert_fixup(id);
		self.refresh_bounds();
		id
	}

	/// Restore the red-black invariants after linking the red node `z`.
	fn insert_fixup(&mut self, mut z: usize) {
		while let Some(p) = self.node(z).parent().filter(|&p| self.node(p).is_red()) {
			// a red node is never the root.
			let g = self.node(p).parent().unwrap();
			let side = self.node(g).side_of(Some(p));
			let uncle = self.child(g, side.opposite());

			if self.is_red(uncle) {
				self.set_color(Some(p), Color::Black);
				self.set_color(uncle, Color::Black);
				self.set_color(Some(g), Color::Red);
				z = g
			} else {
				if self.child(p, side.opposite()) == Some(z) {
					// inner grandchild, make it an outer one.
					z = p;
					self.rotate(z, side)
				}

				let p = self.node(z).parent().unwrap();
				let g = self.node(p).parent().unwrap();
				self.set_color(Some(p), Color::Black);
				self.set_color(Some(g), Color::Red);
				self.rotate(g, side.opposite())
			}
		}

		self.set_color(self.root, Color::Black)
	}

	/// Remove the element at the given position and return its item.
	///
	/// Positions of every other element stay valid.
	///
	/// Panics if `pos` is the end position.
	#[inline]
	pub fn remove(&mut self, pos: Position) -> Item<K, V> {
		let id = self.resolve(pos).expect("cannot remove the end position");
		self.remove_node(id)
	}

	/// Remove the node `z` from the tree, release it and return its item.
	pub fn remove_node(&mut self, z: usize) -> Item<K, V> {
		let node = self.node(z);
		let (z_left, z_right, z_color) = (node.left(), node.right(), node.color());

		let mut removed_color = z_color;
		let x;
		let x_parent;

		match (z_left, z_right) {
			(None, _) => {
				x = z_right;
				x_parent = self.node(z).parent();
				self.transplant(z, z_right)
			}
			(_, None) => {
				x = z_left;
				x_parent = self.node(z).parent();
				self.transplant(z, z_left)
			}
			(Some(z_left), Some(z_right)) => {
				let y = self.minimum(z_right);
				removed_color = self.node(y).color();
				x = self.node(y).right();

				if self.node(y).parent() == Some(z) {
					x_parent = Some(y)
				} else {
					x_parent = self.node(y).parent();
					self.transplant(y, x);
					self.node_mut(y).set_child(Side::Right, Some(z_right));
					self.node_mut(z_right).set_parent(Some(y))
				}

				self.transplant(z, Some(y));
				self.node_mut(y).set_child(Side::Left, Some(z_left));
				self.node_mut(z_left).set_parent(Some(y));
				self.node_mut(y).set_color(z_color)
			}
		}

		self.len -= 1;

		if removed_color == Color::Black {
			self.remove_fixup(x, x_parent)
		}

		self.refresh_bounds();
		self.release_node(z).into_item()
	}

	/// Redistribute the black deficiency carried by `x` after a removal.
	///
	/// `x` may be the sentinel, hence its parent is given explicitly.
	fn remove_fixup(&mut self, mut x: Option<usize>, mut parent: Option<usize>) {
		while x != self.root && self.is_black(x) {
			// `x` is not the root so it has a parent.
			let p = parent.unwrap();
			let side = self.node(p).side_of(x);
			let far = side.opposite();

			// the deficient side has a black-height of at least one: the sibling exists.
			let mut w = self.child(p, far).unwrap();

			if self.node(w).is_red() {
				self.set_color(Some(w), Color::Black);
				self.set_color(Some(p), Color::Red);
				self.rotate(p, side);
				w = self.child(p, far).unwrap()
			}

			let near_child = self.child(w, side);
			let far_child = self.child(w, far);

			if self.is_black(near_child) && self.is_black(far_child) {
				self.set_color(Some(w), Color::Red);
				x = Some(p);
				parent = self.node(p).parent()
			} else {
				if self.is_black(far_child) {
					self.set_color(near_child, Color::Black);
					self.set_color(Some(w), Color::Red);
					self.rotate(w, far);
					w = self.child(p, far).unwrap()
				}

				let p_color = self.node(p).color();
				self.set_color(Some(w), p_color);
				self.set_color(Some(p), Color::Black);
				let far_child = self.child(w, far);
				self.set_color(far_child, Color::Black);
				self.rotate(p, side);
				x = self.root;
				parent = None
			}
		}

		self.set_color(x, Color::Black)
	}
}

impl<K, V, C: Default, O: Default> Default for RbTree<K, V, C, O> {
	#[inline]
	fn default() -> Self {
		RbTree::with_order(O::default())
	}
}

impl<K: Clone, V: Clone, C: SlabMut<Node<K, V>> + Default, O: Clone> Clone for RbTree<K, V, C, O>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	/// Deep copy of the tree.
	///
	/// Nodes are duplicated in pre-order into a fresh container, keeping their colors.
	fn clone(&self) -> Self {
		log::trace!("copying tree of {} nodes", self.len);
		let mut tree = RbTree {
			nodes: C::default(),
			root: None,
			first: None,
			last: None,
			len: 0,
			next_stamp: self.next_stamp,
			order: self.order.clone(),
			k: PhantomData,
			v: PhantomData,
		};

		// (source node, new parent node, side of the new node in its parent)
		let mut stack: SmallVec<[(usize, Slot); 64]> = SmallVec::new();
		if let Some(root) = self.root {
			stack.push((root, Slot::root()))
		}

		while let Some((src, slot)) = stack.pop() {
			let node = self.node(src);
			let id = tree.nodes.insert(node.detached_clone());
			tree.node_mut(id).set_parent(slot.parent);
			match slot.parent {
				Some(parent) => tree.node_mut(parent).set_child(slot.side, Some(id)),
				None => tree.root = Some(id),
			}

			for side in [Side::Right, Side::Left] {
				if let Some(child) = node.child(side) {
					stack.push((
						child,
						Slot {
							parent: Some(id),
							side,
						},
					))
				}
			}
		}

		tree.len = self.len;
		tree.refresh_bounds();
		tree
	}
}

#[cfg(all(test, feature = "slab"))]
mod tests {
	use super::*;
	use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};

	type Tree<K> = RbTree<K, (), slab::Slab<Node<K, ()>>>;

	fn keys<K: Clone, O>(tree: &RbTree<K, (), slab::Slab<Node<K, ()>>, O>) -> Vec<K> {
		let mut keys = Vec::new();
		let mut pos = tree.begin();
		while !pos.is_end() {
			keys.push(tree.item(pos).unwrap().key().clone());
			pos = tree.next(pos);
		}
		keys
	}

	fn tree_of(keys: &[i32]) -> Tree<i32> {
		let mut tree = Tree::new();
		for &k in keys {
			tree.insert(Item::new(k, ()));
			tree.validate();
		}
		tree
	}

	#[test]
	fn scenario() {
		let mut tree = tree_of(&[10, 20, 5, 15, 25]);
		assert_eq!(keys(&tree), [5, 10, 15, 20, 25]);
		assert!(!tree.node(tree.root_id().unwrap()).is_red());

		let pos = tree.search(&20);
		assert_eq!(tree.remove(pos).into_key(), 20);
		tree.validate();
		assert_eq!(keys(&tree), [5, 10, 15, 25]);
	}

	#[test]
	fn ascending_insertions_are_balanced() {
		let tree = tree_of(&[1, 2, 3, 4, 5, 6, 7]);
		assert!(tree.height() <= 6);
		assert_eq!(tree.validate(), 2);
	}

	#[test]
	fn rotations_preserve_order() {
		let mut tree = tree_of(&[4, 2, 6, 1, 3, 5, 7]);
		let root = tree.root_id().unwrap();

		tree.rotate(root, Side::Left);
		assert_eq!(keys(&tree), [1, 2, 3, 4, 5, 6, 7]);
		assert_eq!(*tree.node(tree.root_id().unwrap()).key(), 6);
		assert_eq!(tree.node(root).parent(), tree.root_id());

		let new_root = tree.root_id().unwrap();
		tree.rotate(new_root, Side::Right);
		assert_eq!(tree.root_id(), Some(root));
		assert_eq!(keys(&tree), [1, 2, 3, 4, 5, 6, 7]);
		tree.validate();
	}

	#[test]
	fn duplicate_insertion() {
		let mut tree = tree_of(&[3, 1, 2]);
		let existing = tree.search(&2);
		let (pos, inserted) = tree.insert(Item::new(2, ()));
		assert!(!inserted);
		assert_eq!(pos, existing);
		assert_eq!(tree.len(), 3);
		assert_eq!(keys(&tree), [1, 2, 3]);
	}

	#[test]
	fn bounds() {
		let tree = tree_of(&[10, 20, 30]);
		let key_at = |pos: Position| tree.item(pos).map(|item| *item.key());

		assert_eq!(key_at(tree.lower_bound(&20)), Some(20));
		assert_eq!(key_at(tree.upper_bound(&20)), Some(30));
		assert_eq!(key_at(tree.lower_bound(&15)), Some(20));
		assert_eq!(key_at(tree.upper_bound(&5)), Some(10));
		assert!(tree.lower_bound(&31).is_end());
		assert!(tree.upper_bound(&30).is_end());
		assert!(tree.search(&25).is_end());

		let (lower, upper) = tree.equal_range(&10);
		assert_eq!(tree.next(lower), upper);
		let (lower, upper) = tree.equal_range(&11);
		assert_eq!(lower, upper);
	}

	#[test]
	fn traversal_saturates() {
		let tree = tree_of(&[1, 2, 3]);
		let mut pos = tree.begin();
		for _ in 0..tree.len() {
			pos = tree.next(pos)
		}
		assert_eq!(pos, tree.end());
		assert_eq!(tree.next(pos), tree.end());
		assert_eq!(tree.prev(pos), tree.end());

		let mut pos = tree.rbegin();
		for _ in 0..tree.len() {
			pos = tree.prev(pos)
		}
		assert_eq!(pos, tree.rend());
	}

	#[test]
	fn hinted_insertion() {
		let mut tree = tree_of(&[10, 20, 30, 40]);

		let hint = tree.search(&20);
		let pos = tree.insert_hint(hint, Item::new(25, ()));
		assert_eq!(*tree.item(pos).unwrap().key(), 25);
		tree.validate();

		let pos = tree.insert_hint(tree.end(), Item::new(50, ()));
		assert_eq!(tree.rbegin(), pos);
		tree.validate();

		// wrong hints fall back to a regular insertion.
		let hint = tree.search(&10);
		tree.insert_hint(hint, Item::new(35, ()));
		tree.insert_hint(tree.end(), Item::new(5, ()));
		tree.validate();

		let hint = tree.search(&30);
		let pos = tree.insert_hint(hint, Item::new(30, ()));
		assert_eq!(pos, hint);

		assert_eq!(keys(&tree), [5, 10, 20, 25, 30, 35, 40, 50]);
	}

	#[test]
	fn random_insertions_and_removals() {
		let mut rng = SmallRng::seed_from_u64(0x5eed);
		let mut items: Vec<u32> = (0..500).collect();
		items.shuffle(&mut rng);

		let mut tree: Tree<u32> = Tree::new();
		for &k in &items {
			assert!(tree.insert(Item::new(k, ())).1);
			tree.validate();
		}

		items.shuffle(&mut rng);
		for (i, k) in items.iter().enumerate() {
			let pos = tree.search(k);
			assert_eq!(tree.remove(pos).into_key(), *k);
			tree.validate();
			assert_eq!(tree.len(), items.len() - i - 1);
		}

		assert!(tree.is_empty());
		assert!(tree.begin().is_end());
	}

	#[test]
	fn positions_survive_other_removals() {
		let mut tree = tree_of(&(0..64).collect::<Vec<_>>());
		let kept: Vec<_> = (0..64).step_by(3).map(|k| (k, tree.search(&k))).collect();

		for k in 0..64 {
			if k % 3 != 0 {
				let pos = tree.search(&k);
				tree.remove(pos);
			}
		}

		tree.validate();
		for (k, pos) in kept {
			assert_eq!(*tree.item(pos).unwrap().key(), k)
		}
	}

	#[test]
	fn deep_copy() {
		let tree = tree_of(&[8, 3, 10, 1, 6, 14, 4, 7, 13]);
		let mut copy = tree.clone();
		copy.validate();
		assert_eq!(keys(&copy), keys(&tree));
		assert_eq!(copy.height(), tree.height());

		let pos = copy.search(&6);
		copy.remove(pos);
		copy.insert(Item::new(2, ()));
		assert_eq!(keys(&tree), [1, 3, 4, 6, 7, 8, 10, 13, 14]);
		assert_eq!(keys(&copy), [1, 2, 3, 4, 7, 8, 10, 13, 14]);
	}

	#[test]
	fn clear_and_swap() {
		let mut a = tree_of(&[1, 2, 3]);
		let mut b = tree_of(&[4]);
		a.swap(&mut b);
		assert_eq!(keys(&a), [4]);
		assert_eq!(keys(&b), [1, 2, 3]);

		b.clear();
		assert!(b.is_empty());
		assert_eq!(b.len(), 0);
		b.validate();
		b.insert(Item::new(9, ()));
		assert_eq!(keys(&b), [9]);
	}

	#[test]
	fn custom_order() {
		let mut tree = RbTree::<i32, (), slab::Slab<Node<i32, ()>>, _>::with_order(crate::Reverse);
		for k in [3, 1, 4, 1, 5, 9, 2, 6] {
			tree.insert(Item::new(k, ()));
		}
		tree.validate();
		assert_eq!(keys(&tree), [9, 6, 5, 4, 3, 2, 1]);
	}

	#[test]
	#[should_panic(expected = "red node")]
	fn validate_detects_red_violation() {
		let mut tree = tree_of(&[2, 1, 3, 0]);
		let one = tree.search_id(&1).unwrap();
		assert!(tree.node(tree.node(one).left().unwrap()).is_red());
		tree.node_mut(one).set_color(Color::Red);
		tree.validate();
	}

	#[test]
	#[should_panic(expected = "root is red")]
	fn validate_detects_red_root() {
		let mut tree = tree_of(&[2, 1, 3]);
		let root = tree.root_id().unwrap();
		tree.node_mut(root).set_color(Color::Red);
		tree.validate();
	}
}
