use crate::{
	error::OutOfRange,
	generic::{
		node::{Item, Node, Position},
		tree::{Cursor, CursorMut, RbTree},
	},
	order::{Natural, Order},
};
use cc_traits::{SimpleCollectionMut, SimpleCollectionRef, Slab, SlabMut};
use std::{
	borrow::Borrow,
	cmp::Ordering,
	fmt,
	hash::{Hash, Hasher},
	iter::{DoubleEndedIterator, ExactSizeIterator, FromIterator, FusedIterator},
	ops::{Bound, Index, RangeBounds},
};

mod entry;

pub use entry::*;

/// A map based on a red-black tree.
///
/// Entries are kept sorted by key, following the order `O` given when the map is created
/// ([`Natural`] by default).
/// Nodes are allocated in a slab-like container `C`,
/// which avoids one allocation per entry and keeps the nodes close to each other in memory.
///
/// # Basic usage
///
/// Basic usage is similar to the map data structures offered by the standard library.
/// ```
/// use rbtree_slab::RbTreeMap;
///
/// let mut movie_reviews = RbTreeMap::new();
///
/// // review some movies.
/// movie_reviews.insert("Office Space",       "Deals with real issues in the workplace.");
/// movie_reviews.insert("Pulp Fiction",       "Masterpiece.");
/// movie_reviews.insert("The Godfather",      "Very enjoyable.");
/// movie_reviews.insert("The Blues Brothers", "Eye lyked it a lot.");
///
/// // check for a specific one.
/// if !movie_reviews.contains_key("Les Misérables") {
///     println!("We've got {} reviews, but Les Misérables ain't one.",
///              movie_reviews.len());
/// }
///
/// // oops, this review has a lot of spelling mistakes, let's delete it.
/// movie_reviews.remove("The Blues Brothers");
///
/// // Look up the value for a key (will panic if the key is not found).
/// println!("Movie review: {}", movie_reviews["Office Space"]);
///
/// // iterate over everything.
/// for (movie, review) in &movie_reviews {
///     println!("{}: \"{}\"", movie, review);
/// }
/// ```
///
/// # Positions
///
/// Lookup functions such as [`find`](RbTreeMap::find) or
/// [`lower_bound`](RbTreeMap::lower_bound) return a [`Position`]: a copyable handle on an
/// entry (or the end position) that can be used later to access, step from or remove
/// this entry.
/// A position stays valid until its own entry is removed, whatever happens to the other
/// entries of the map.
///
/// ```
/// use rbtree_slab::RbTreeMap;
///
/// let mut map: RbTreeMap<i32, char> = [(1, 'a'), (3, 'c'), (5, 'e')].into_iter().collect();
/// let pos = map.lower_bound(&2);
/// assert_eq!(map.key_value_at(pos), Some((&3, &'c')));
///
/// map.insert(4, 'd');
/// map.remove(&1);
/// assert_eq!(map.key_value_at(map.next(pos)), Some((&4, &'d')));
/// ```
///
/// # Custom order
///
/// ```
/// use rbtree_slab::{RbTreeMap, Reverse};
///
/// let mut map = RbTreeMap::with_order(Reverse);
/// map.insert(1, "one");
/// map.insert(2, "two");
/// assert_eq!(map.first_key_value(), Some((&2, &"two")));
/// ```
///
/// # Correctness
///
/// It is a logic error for a key to be modified in such a way that the key's ordering relative
/// to any other key, as determined by the map order, changes while it is in the map.
/// This is normally only possible through [`Cell`](`std::cell::Cell`),
/// [`RefCell`](`std::cell::RefCell`), global state, I/O, or unsafe code.
pub struct RbTreeMap<K, V, C, O = Natural> {
	tree: RbTree<K, V, C, O>,
}

impl<K, V, C> RbTreeMap<K, V, C, Natural> {
	/// Create a new empty map sorted by the natural order of its keys.
	#[inline]
	pub fn new() -> Self
	where
		C: Default,
	{
		RbTreeMap {
			tree: RbTree::new(),
		}
	}
}

impl<K, V, C, O> RbTreeMap<K, V, C, O> {
	/// Create a new empty map sorted by the given order.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbTreeMap;
	///
	/// // sort by last digit.
	/// let mut map = RbTreeMap::with_order(|a: &u32, b: &u32| (a % 10).cmp(&(b % 10)));
	/// map.insert(13, "c");
	/// map.insert(21, "a");
	/// map.insert(32, "b");
	/// assert!(map.keys().copied().eq([21, 32, 13]));
	/// ```
	#[inline]
	pub fn with_order(order: O) -> Self
	where
		C: Default,
	{
		RbTreeMap {
			tree: RbTree::with_order(order),
		}
	}

	/// Returns the order used to sort the keys.
	#[inline]
	pub fn order(&self) -> &O {
		self.tree.order()
	}

	/// Returns `true` if the map contains no elements.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbTreeMap;
	///
	/// let mut a = RbTreeMap::new();
	/// assert!(a.is_empty());
	/// a.insert(1, "a");
	/// assert!(!a.is_empty());
	/// ```
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.tree.is_empty()
	}

	/// Returns the number of elements in the map.
	#[inline]
	pub fn len(&self) -> usize {
		self.tree.len()
	}

	/// Exchange the content of two maps in constant time.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbTreeMap;
	///
	/// let mut a = RbTreeMap::new();
	/// a.insert(1, "a");
	/// let mut b = RbTreeMap::new();
	/// a.swap(&mut b);
	/// assert!(a.is_empty());
	/// assert_eq!(b[&1], "a");
	/// ```
	#[inline]
	pub fn swap(&mut self, other: &mut Self) {
		self.tree.swap(&mut other.tree)
	}

	/// The underlying red-black tree.
	#[inline]
	pub fn as_tree(&self) -> &RbTree<K, V, C, O> {
		&self.tree
	}
}

impl<K, V, C: Slab<Node<K, V>>, O> RbTreeMap<K, V, C, O>
where
	C: SimpleCollectionRef,
{
	/// Returns a reference to the value corresponding to the key.
	///
	/// The supplied key may be any borrowed form of the map's key type, but the ordering
	/// on the borrowed form *must* match the ordering on the key type.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbTreeMap;
	///
	/// let mut map: RbTreeMap<i32, &str> = RbTreeMap::new();
	/// map.insert(1, "a");
	/// assert_eq!(map.get(&1), Some(&"a"));
	/// assert_eq!(map.get(&2), None);
	/// ```
	#[inline]
	pub fn get<Q: ?Sized>(&self, key: &Q) -> Option<&V>
	where
		K: Borrow<Q>,
		O: Order<Q>,
	{
		self.tree
			.search_id(key)
			.map(|id| self.tree.node(id).value())
	}

	/// Returns the key-value pair corresponding to the supplied key.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbTreeMap;
	///
	/// let mut map = RbTreeMap::new();
	/// map.insert(1, "a");
	/// assert_eq!(map.get_key_value(&1), Some((&1, &"a")));
	/// assert_eq!(map.get_key_value(&2), None);
	/// ```
	#[inline]
	pub fn get_key_value<Q: ?Sized>(&self, key: &Q) -> Option<(&K, &V)>
	where
		K: Borrow<Q>,
		O: Order<Q>,
	{
		self.tree
			.search_id(key)
			.map(|id| self.tree.node(id).item().as_pair())
	}

	/// Returns a reference to the value corresponding to the key,
	/// or an [`OutOfRange`] error if the key is not in the map.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::{OutOfRange, RbTreeMap};
	///
	/// let mut map = RbTreeMap::new();
	/// map.insert("a", 1);
	/// assert_eq!(map.at("a"), Ok(&1));
	/// assert_eq!(map.at("b"), Err(OutOfRange));
	/// ```
	#[inline]
	pub fn at<Q: ?Sized>(&self, key: &Q) -> Result<&V, OutOfRange>
	where
		K: Borrow<Q>,
		O: Order<Q>,
	{
		self.get(key).ok_or(OutOfRange)
	}

	/// Returns `true` if the map contains a value for the specified key.
	///
	/// # Example
	/// ```
	/// use rbtree_slab::RbTreeMap;
	///
	/// let mut map: RbTreeMap<i32, &str> = RbTreeMap::new();
	/// map.insert(1, "a");
	/// assert_eq!(map.contains_key(&1), true);
	/// assert_eq!(map.contains_key(&2), false);
	/// ```
	#[inline]
	pub fn contains_key<Q: ?Sized>(&self, key: &Q) -> bool
	where
		K: Borrow<Q>,
		O: Order<Q>,
	{
		self.tree.search_id(key).is_some()
	}

	/// Returns the number of entries with the given key, `0` or `1`.
	#[inline]
	pub fn count<Q: ?Sized>(&self, key: &Q) -> usize
	where
		K: Borrow<Q>,
		O: Order<Q>,
	{
		self.contains_key(key) as usize
	}

	/// Returns the position of the entry with the given key,
	/// or the end position if there is none.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbTreeMap;
	///
	/// let mut map = RbTreeMap::new();
	/// map.insert(1, "a");
	/// assert_eq!(map.key_value_at(map.find(&1)), Some((&1, &"a")));
	/// assert_eq!(map.find(&2), map.end());
	/// ```
	#[inline]
	pub fn find<Q: ?Sized>(&self, key: &Q) -> Position
	where
		K: Borrow<Q>,
		O: Order<Q>,
	{
		self.tree.search(key)
	}

	/// Returns the position of the first entry whose key is not ordered before `key`,
	/// or the end position.
	#[inline]
	pub fn lower_bound<Q: ?Sized>(&self, key: &Q) -> Position
	where
		K: Borrow<Q>,
		O: Order<Q>,
	{
		self.tree.lower_bound(key)
	}

	/// Returns the position of the first entry whose key is ordered after `key`,
	/// or the end position.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbTreeMap;
	///
	/// let map: RbTreeMap<i32, ()> = [(10, ()), (20, ()), (30, ())].into_iter().collect();
	/// assert_eq!(map.key_value_at(map.lower_bound(&20)), Some((&20, &())));
	/// assert_eq!(map.key_value_at(map.upper_bound(&20)), Some((&30, &())));
	/// assert_eq!(map.upper_bound(&30), map.end());
	/// ```
	#[inline]
	pub fn upper_bound<Q: ?Sized>(&self, key: &Q) -> Position
	where
		K: Borrow<Q>,
		O: Order<Q>,
	{
		self.tree.upper_bound(key)
	}

	/// Returns the pair `(lower_bound(key), upper_bound(key))`.
	///
	/// Keys being unique, the positions are either equal (no entry with this key)
	/// or the second directly follows the first.
	#[inline]
	pub fn equal_range<Q: ?Sized>(&self, key: &Q) -> (Position, Position)
	where
		K: Borrow<Q>,
		O: Order<Q>,
	{
		self.tree.equal_range(key)
	}

	/// Position of the first entry (with the minimum key), or the end position.
	#[inline]
	pub fn begin(&self) -> Position {
		self.tree.begin()
	}

	/// The end position.
	#[inline]
	pub fn end(&self) -> Position {
		self.tree.end()
	}

	/// Position of the last entry (with the maximum key), or the end position.
	#[inline]
	pub fn rbegin(&self) -> Position {
		self.tree.rbegin()
	}

	/// Position reached after stepping backward from the first entry.
	///
	/// Equal to [`end`](RbTreeMap::end).
	#[inline]
	pub fn rend(&self) -> Position {
		self.tree.rend()
	}

	/// Position following `pos`.
	///
	/// The end position follows the last entry, and is followed by itself.
	#[inline]
	pub fn next(&self, pos: Position) -> Position {
		self.tree.next(pos)
	}

	/// Position preceding `pos`.
	///
	/// The end position precedes the first entry, and is preceded by itself.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbTreeMap;
	///
	/// let map: RbTreeMap<i32, ()> = (1..=3).map(|k| (k, ())).collect();
	/// let mut pos = map.rbegin();
	/// let mut keys = Vec::new();
	/// while pos != map.rend() {
	///     keys.push(*map.key_value_at(pos).unwrap().0);
	///     pos = map.prev(pos);
	/// }
	/// assert_eq!(keys, [3, 2, 1]);
	/// ```
	#[inline]
	pub fn prev(&self, pos: Position) -> Position {
		self.tree.prev(pos)
	}

	/// Returns the entry at the given position, or `None` for the end position.
	#[inline]
	pub fn key_value_at(&self, pos: Position) -> Option<(&K, &V)> {
		self.tree.item(pos).map(Item::as_pair)
	}

	/// Returns a cursor on the entry at the given position.
	#[inline]
	pub fn cursor(&self, pos: Position) -> Cursor<'_, K, V, C, O> {
		Cursor::new(&self.tree, pos)
	}

	/// Returns the first key-value pair in the map.
	/// The key in this pair is the minimum key in the map.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbTreeMap;
	///
	/// let mut map = RbTreeMap::new();
	/// assert_eq!(map.first_key_value(), None);
	/// map.insert(1, "b");
	/// map.insert(2, "a");
	/// assert_eq!(map.first_key_value(), Some((&1, &"b")));
	/// ```
	#[inline]
	pub fn first_key_value(&self) -> Option<(&K, &V)> {
		self.key_value_at(self.begin())
	}

	/// Returns the last key-value pair in the map.
	/// The key in this pair is the maximum key in the map.
	#[inline]
	pub fn last_key_value(&self) -> Option<(&K, &V)> {
		self.key_value_at(self.rbegin())
	}

	/// Gets an iterator over the entries of the map, sorted by key.
	///
	/// The reverse iteration order is obtained with [`Iterator::rev`].
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbTreeMap;
	///
	/// let mut map = RbTreeMap::new();
	/// map.insert(3, "c");
	/// map.insert(2, "b");
	/// map.insert(1, "a");
	///
	/// for (key, value) in map.iter() {
	///     println!("{}: {}", key, value);
	/// }
	///
	/// let (first_key, first_value) = map.iter().next().unwrap();
	/// assert_eq!((*first_key, *first_value), (1, "a"));
	/// assert!(map.iter().rev().map(|(k, _)| *k).eq([3, 2, 1]));
	/// ```
	#[inline]
	pub fn iter(&self) -> Iter<'_, K, V, C, O> {
		Iter::new(self)
	}

	/// Gets an iterator over the keys of the map, in sorted order.
	#[inline]
	pub fn keys(&self) -> Keys<'_, K, V, C, O> {
		Keys { inner: self.iter() }
	}

	/// Gets an iterator over the values of the map, in order by key.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbTreeMap;
	///
	/// let mut a = RbTreeMap::new();
	/// a.insert(1, "hello");
	/// a.insert(2, "goodbye");
	///
	/// let values: Vec<&str> = a.values().cloned().collect();
	/// assert_eq!(values, ["hello", "goodbye"]);
	/// ```
	#[inline]
	pub fn values(&self) -> Values<'_, K, V, C, O> {
		Values { inner: self.iter() }
	}

	/// Constructs a double-ended iterator over a sub-range of elements in the map.
	///
	/// # Panics
	///
	/// Panics if range `start > end`.
	/// Panics if range `start == end` and both bounds are `Excluded`.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbTreeMap;
	/// use std::ops::Bound::Included;
	///
	/// let mut map = RbTreeMap::new();
	/// map.insert(3, "a");
	/// map.insert(5, "b");
	/// map.insert(8, "c");
	/// for (&key, &value) in map.range((Included(&4), Included(&8))) {
	///     println!("{}: {}", key, value);
	/// }
	/// assert_eq!(Some((&5, &"b")), map.range(4..).next());
	/// ```
	#[inline]
	pub fn range<T: ?Sized, R>(&self, range: R) -> Range<'_, K, V, C, O>
	where
		K: Borrow<T>,
		O: Order<T>,
		R: RangeBounds<T>,
	{
		Range::new(self, range)
	}

	/// Validate the underlying tree.
	///
	/// Panics if the red-black tree invariants are not respected.
	#[inline]
	pub fn validate(&self)
	where
		O: Order<K>,
	{
		self.tree.validate();
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
		self.tree.dot_write(f)
	}
}

impl<K, V, C: SlabMut<Node<K, V>>, O> RbTreeMap<K, V, C, O>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	/// Clears the map, removing all elements.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbTreeMap;
	///
	/// let mut a = RbTreeMap::new();
	/// a.insert(1, "a");
	/// a.clear();
	/// assert!(a.is_empty());
	/// ```
	#[inline]
	pub fn clear(&mut self)
	where
		C: cc_traits::Clear,
	{
		self.tree.clear()
	}

	/// Returns a mutable reference to the value corresponding to the key.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbTreeMap;
	///
	/// let mut map = RbTreeMap::new();
	/// map.insert(1, "a");
	/// if let Some(x) = map.get_mut(&1) {
	///     *x = "b";
	/// }
	/// assert_eq!(map[&1], "b");
	/// ```
	#[inline]
	pub fn get_mut<Q: ?Sized>(&mut self, key: &Q) -> Option<&mut V>
	where
		K: Borrow<Q>,
		O: Order<Q>,
	{
		match self.tree.search_id(key) {
			Some(id) => Some(self.tree.node_mut(id).item_mut().value_mut()),
			None => None,
		}
	}

	/// Returns a mutable reference to the value corresponding to the key,
	/// or an [`OutOfRange`] error if the key is not in the map.
	#[inline]
	pub fn at_mut<Q: ?Sized>(&mut self, key: &Q) -> Result<&mut V, OutOfRange>
	where
		K: Borrow<Q>,
		O: Order<Q>,
	{
		self.get_mut(key).ok_or(OutOfRange)
	}

	/// Returns a mutable reference to the value at the given position,
	/// or `None` for the end position.
	#[inline]
	pub fn value_at_mut(&mut self, pos: Position) -> Option<&mut V> {
		self.tree.item_mut(pos).map(Item::value_mut)
	}

	/// Returns a mutable reference to the value corresponding to the key,
	/// inserting the default value first if the key is not in the map.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbTreeMap;
	///
	/// let mut counts: RbTreeMap<char, usize> = RbTreeMap::new();
	/// for c in "abracadabra".chars() {
	///     *counts.get_or_insert_default(c) += 1;
	/// }
	/// assert_eq!(counts[&'a'], 5);
	/// assert_eq!(counts.len(), 5);
	/// ```
	#[inline]
	pub fn get_or_insert_default(&mut self, key: K) -> &mut V
	where
		O: Order<K>,
		V: Default,
	{
		self.entry(key).or_default()
	}

	/// Gets the given key's corresponding entry in the map for in-place manipulation.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbTreeMap;
	///
	/// let mut letters = RbTreeMap::new();
	///
	/// for ch in "a short treatise on fungi".chars() {
	///     let counter = letters.entry(ch).or_insert(0);
	///     *counter += 1;
	/// }
	///
	/// assert_eq!(letters[&'s'], 2);
	/// assert_eq!(letters[&'t'], 3);
	/// assert_eq!(letters[&'u'], 1);
	/// assert_eq!(letters.get(&'y'), None);
	/// ```
	#[inline]
	pub fn entry(&mut self, key: K) -> Entry<'_, K, V, C, O>
	where
		O: Order<K>,
	{
		match self.tree.find_slot(&key) {
			Ok(id) => Entry::Occupied(OccupiedEntry { map: self, id }),
			Err(slot) => Entry::Vacant(VacantEntry {
				map: self,
				key,
				slot,
			}),
		}
	}

	/// Insert a key-value pair in the map.
	///
	/// If the map already has an entry with an equivalent key, the map is not modified,
	/// the given pair is dropped and `(pos, false)` is returned, where `pos` is the
	/// position of the existing entry.
	/// Otherwise the new entry is inserted and its position is returned with `true`.
	///
	/// Use [`replace`](RbTreeMap::replace) to overwrite existing values.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbTreeMap;
	///
	/// let mut map = RbTreeMap::new();
	/// let (pos, inserted) = map.insert(37, "a");
	/// assert!(inserted);
	///
	/// assert_eq!(map.insert(37, "b"), (pos, false));
	/// assert_eq!(map[&37], "a");
	/// ```
	#[inline]
	pub fn insert(&mut self, key: K, value: V) -> (Position, bool)
	where
		O: Order<K>,
	{
		self.tree.insert(Item::new(key, value))
	}

	/// Insert a key-value pair using `hint` as a suggestion of where the new entry goes.
	///
	/// The insertion takes amortized constant time when the new key goes right before
	/// or right after the hinted entry, and falls back to a regular insertion otherwise.
	/// Returns the position of the new entry, or of the existing entry with an
	/// equivalent key (in which case the pair is dropped).
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbTreeMap;
	///
	/// let mut map = RbTreeMap::new();
	/// let mut pos = map.end();
	/// for i in 0..100 {
	///     pos = map.insert_hint(pos, i, i * 2);
	///     pos = map.next(pos);
	/// }
	/// assert!(map.iter().map(|(k, _)| *k).eq(0..100));
	/// ```
	#[inline]
	pub fn insert_hint(&mut self, hint: Position, key: K, value: V) -> Position
	where
		O: Order<K>,
	{
		self.tree.insert_hint(hint, Item::new(key, value))
	}

	/// Insert a key-value pair, replacing the value of the existing entry with an
	/// equivalent key if any.
	///
	/// Returns the previous value, if any.
	/// The key already in the map is kept.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbTreeMap;
	///
	/// let mut map = RbTreeMap::new();
	/// assert_eq!(map.replace(37, "a"), None);
	/// assert_eq!(map.replace(37, "b"), Some("a"));
	/// assert_eq!(map[&37], "b");
	/// ```
	#[inline]
	pub fn replace(&mut self, key: K, value: V) -> Option<V>
	where
		O: Order<K>,
	{
		match self.tree.try_insert(Item::new(key, value)) {
			Ok(_) => None,
			Err((pos, item)) => self
				.tree
				.item_mut(pos)
				.map(|existing| existing.set_value(item.into_value())),
		}
	}

	/// Inserts the pair, or puts `key` in place of the equivalent key already
	/// stored and returns that one. The value of an existing entry is kept.
	pub(crate) fn replace_key(&mut self, key: K, value: V) -> Option<K>
	where
		O: Order<K>,
	{
		match self.tree.try_insert(Item::new(key, value)) {
			Ok(_) => None,
			Err((pos, item)) => self
				.tree
				.item_mut(pos)
				.map(|existing| existing.set_key(item.into_key())),
		}
	}

	/// Removes a key from the map, returning the value at the key if the key
	/// was previously in the map.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbTreeMap;
	///
	/// let mut map = RbTreeMap::new();
	/// map.insert(1, "a");
	/// assert_eq!(map.remove(&1), Some("a"));
	/// assert_eq!(map.remove(&1), None);
	/// ```
	#[inline]
	pub fn remove<Q: ?Sized>(&mut self, key: &Q) -> Option<V>
	where
		K: Borrow<Q>,
		O: Order<Q>,
	{
		self.remove_entry(key).map(|(_, value)| value)
	}

	/// Removes a key from the map, returning the stored key and value if the key
	/// was previously in the map.
	#[inline]
	pub fn remove_entry<Q: ?Sized>(&mut self, key: &Q) -> Option<(K, V)>
	where
		K: Borrow<Q>,
		O: Order<Q>,
	{
		self.tree
			.search_id(key)
			.map(|id| self.tree.remove_node(id).into_pair())
	}

	/// Removes the entry at the given position and returns it.
	///
	/// The positions of the other entries stay valid.
	///
	/// # Panics
	///
	/// Panics if `pos` is the end position.
	#[inline]
	pub fn remove_at(&mut self, pos: Position) -> (K, V) {
		self.tree.remove(pos).into_pair()
	}

	/// Removes every entry from position `first` (included) to position `last` (excluded).
	///
	/// `last` must be reachable from `first` by stepping forward.
	/// Returns the number of removed entries.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbTreeMap;
	///
	/// let mut map: RbTreeMap<i32, ()> = (0..10).map(|k| (k, ())).collect();
	/// let removed = map.remove_range(map.find(&2), map.find(&8));
	/// assert_eq!(removed, 6);
	/// assert!(map.keys().copied().eq([0, 1, 8, 9]));
	///
	/// map.remove_range(map.begin(), map.end());
	/// assert!(map.is_empty());
	/// ```
	pub fn remove_range(&mut self, first: Position, last: Position) -> usize {
		let mut pos = first;
		let mut count = 0;
		while pos != last {
			let next = self.tree.next(pos);
			self.tree.remove(pos);
			pos = next;
			count += 1;
		}

		log::debug!("removed {} entries", count);
		count
	}

	/// Removes and returns the first element in the map.
	/// The key of this element is the minimum key that was in the map.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbTreeMap;
	///
	/// let mut map = RbTreeMap::new();
	/// map.insert(1, "a");
	/// map.insert(2, "b");
	/// while let Some((key, _val)) = map.pop_first() {
	///     assert!(map.iter().all(|(k, _v)| *k > key));
	/// }
	/// assert!(map.is_empty());
	/// ```
	#[inline]
	pub fn pop_first(&mut self) -> Option<(K, V)> {
		self.tree
			.first_id()
			.map(|id| self.tree.remove_node(id).into_pair())
	}

	/// Removes and returns the last element in the map.
	/// The key of this element is the maximum key that was in the map.
	#[inline]
	pub fn pop_last(&mut self) -> Option<(K, V)> {
		self.tree
			.last_id()
			.map(|id| self.tree.remove_node(id).into_pair())
	}

	/// Retains only the elements specified by the predicate.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbTreeMap;
	///
	/// let mut map: RbTreeMap<i32, i32> = (0..8).map(|x| (x, x*10)).collect();
	/// // Keep only the elements with even-numbered keys.
	/// map.retain(|&k, _| k % 2 == 0);
	/// assert!(map.into_iter().eq(vec![(0, 0), (2, 20), (4, 40), (6, 60)]));
	/// ```
	pub fn retain<F>(&mut self, mut f: F)
	where
		F: FnMut(&K, &mut V) -> bool,
	{
		let mut current = self.tree.first_id();
		while let Some(id) = current {
			current = self.tree.successor(id);
			let (key, value) = self.tree.node_mut(id).item_mut().as_pair_mut();
			if !f(key, value) {
				self.tree.remove_node(id);
			}
		}
	}

	/// Moves all elements from `other` into `self`, leaving `other` empty.
	///
	/// Values of `other` replace the values of `self` for equivalent keys.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbTreeMap;
	///
	/// let mut a = RbTreeMap::new();
	/// a.insert(1, "a");
	/// a.insert(3, "c");
	///
	/// let mut b = RbTreeMap::new();
	/// b.insert(3, "d");
	/// b.insert(4, "e");
	///
	/// a.append(&mut b);
	///
	/// assert_eq!(a.len(), 3);
	/// assert_eq!(b.len(), 0);
	/// assert_eq!(a[&3], "d");
	/// ```
	#[inline]
	pub fn append(&mut self, other: &mut Self)
	where
		O: Order<K>,
	{
		if self.is_empty() {
			self.swap(other);
			return;
		}

		let mut hint = self.end();
		while let Some((key, value)) = other.pop_last() {
			match self.tree.try_insert_hint(hint, Item::new(key, value)) {
				Ok(pos) => hint = pos,
				Err((pos, item)) => {
					self.tree.item_mut(pos).unwrap().set_value(item.into_value());
					hint = pos
				}
			}
		}
	}

	/// Gets a mutable iterator over the entries of the map, sorted by key.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbTreeMap;
	///
	/// let mut map = RbTreeMap::new();
	/// map.insert("a", 1);
	/// map.insert("b", 2);
	/// map.insert("c", 3);
	///
	/// // add 10 to the value if the key isn't "a"
	/// for (key, value) in map.iter_mut() {
	///     if key != &"a" {
	///         *value += 10;
	///     }
	/// }
	/// assert!(map.values().copied().eq([1, 12, 13]));
	/// ```
	#[inline]
	pub fn iter_mut(&mut self) -> IterMut<'_, K, V, C, O> {
		IterMut::new(self)
	}

	/// Gets a mutable iterator over the values of the map, in order by key.
	#[inline]
	pub fn values_mut(&mut self) -> ValuesMut<'_, K, V, C, O> {
		ValuesMut {
			inner: self.iter_mut(),
		}
	}

	/// Returns a mutable cursor on the entry at the given position.
	#[inline]
	pub fn cursor_mut(&mut self, pos: Position) -> CursorMut<'_, K, V, C, O> {
		CursorMut::new(&mut self.tree, pos)
	}

	/// Creates a consuming iterator visiting all the keys, in sorted order.
	#[inline]
	pub fn into_keys(self) -> IntoKeys<K, V, C, O> {
		IntoKeys {
			inner: self.into_iter(),
		}
	}

	/// Creates a consuming iterator visiting all the values, in order by key.
	#[inline]
	pub fn into_values(self) -> IntoValues<K, V, C, O> {
		IntoValues {
			inner: self.into_iter(),
		}
	}
}

impl<K: Clone, V: Clone, C: SlabMut<Node<K, V>> + Default, O: Clone> Clone for RbTreeMap<K, V, C, O>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	#[inline]
	fn clone(&self) -> Self {
		RbTreeMap {
			tree: self.tree.clone(),
		}
	}
}

impl<K: fmt::Debug, V: fmt::Debug, C: Slab<Node<K, V>>, O> fmt::Debug for RbTreeMap<K, V, C, O>
where
	C: SimpleCollectionRef,
{
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_map().entries(self.iter()).finish()
	}
}

impl<K, Q: ?Sized, V, C: Slab<Node<K, V>>, O: Order<Q>> Index<&Q> for RbTreeMap<K, V, C, O>
where
	K: Borrow<Q>,
	C: SimpleCollectionRef,
{
	type Output = V;

	/// Returns a reference to the value corresponding to the supplied key.
	///
	/// # Panics
	///
	/// Panics if the key is not present in the `RbTreeMap`.
	#[inline]
	fn index(&self, key: &Q) -> &V {
		self.get(key).expect("no entry found for key")
	}
}

impl<
		K,
		L: PartialEq<K>,
		V,
		W: PartialEq<V>,
		C: Slab<Node<K, V>>,
		D: Slab<Node<L, W>>,
		O,
		P,
	> PartialEq<RbTreeMap<L, W, D, P>> for RbTreeMap<K, V, C, O>
where
	C: SimpleCollectionRef,
	D: SimpleCollectionRef,
{
	fn eq(&self, other: &RbTreeMap<L, W, D, P>) -> bool {
		self.len() == other.len()
			&& self
				.iter()
				.zip(other.iter())
				.all(|((k, v), (l, w))| l == k && w == v)
	}
}

impl<K: Eq, V: Eq, C: Slab<Node<K, V>>, O> Eq for RbTreeMap<K, V, C, O> where C: SimpleCollectionRef {}

impl<
		K,
		L: PartialOrd<K>,
		V,
		W: PartialOrd<V>,
		C: Slab<Node<K, V>>,
		D: Slab<Node<L, W>>,
		O,
		P,
	> PartialOrd<RbTreeMap<L, W, D, P>> for RbTreeMap<K, V, C, O>
where
	C: SimpleCollectionRef,
	D: SimpleCollectionRef,
{
	fn partial_cmp(&self, other: &RbTreeMap<L, W, D, P>) -> Option<Ordering> {
		let mut it1 = self.iter();
		let mut it2 = other.iter();

		loop {
			match (it1.next(), it2.next()) {
				(None, None) => return Some(Ordering::Equal),
				(_, None) => return Some(Ordering::Greater),
				(None, _) => return Some(Ordering::Less),
				(Some((k, v)), Some((l, w))) => match l.partial_cmp(k) {
					Some(Ordering::Equal) => match w.partial_cmp(v) {
						Some(Ordering::Equal) => (),
						ord => return ord.map(Ordering::reverse),
					},
					ord => return ord.map(Ordering::reverse),
				},
			}
		}
	}
}

impl<K: Ord, V: Ord, C: Slab<Node<K, V>>, O> Ord for RbTreeMap<K, V, C, O>
where
	C: SimpleCollectionRef,
{
	fn cmp(&self, other: &RbTreeMap<K, V, C, O>) -> Ordering {
		self.iter().cmp(other.iter())
	}
}

impl<K: Hash, V: Hash, C: Slab<Node<K, V>>, O> Hash for RbTreeMap<K, V, C, O>
where
	C: SimpleCollectionRef,
{
	#[inline]
	fn hash<H: Hasher>(&self, h: &mut H) {
		for (k, v) in self {
			k.hash(h);
			v.hash(h);
		}
	}
}

impl<K, V, C: Default, O: Default> Default for RbTreeMap<K, V, C, O> {
	#[inline]
	fn default() -> Self {
		RbTreeMap::with_order(O::default())
	}
}

impl<K, V, C: SlabMut<Node<K, V>> + Default, O: Order<K> + Default> FromIterator<(K, V)>
	for RbTreeMap<K, V, C, O>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	/// Collect key-value pairs into a map.
	///
	/// When a key appears more than once, the last value is kept.
	#[inline]
	fn from_iter<T>(iter: T) -> Self
	where
		T: IntoIterator<Item = (K, V)>,
	{
		let mut map = RbTreeMap::default();
		map.extend(iter);
		map
	}
}

impl<K, V, C: SlabMut<Node<K, V>>, O: Order<K>> Extend<(K, V)> for RbTreeMap<K, V, C, O>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	#[inline]
	fn extend<T>(&mut self, iter: T)
	where
		T: IntoIterator<Item = (K, V)>,
	{
		for (key, value) in iter {
			self.replace(key, value);
		}
	}
}

impl<'a, K: Copy, V: Copy, C: SlabMut<Node<K, V>>, O: Order<K>> Extend<(&'a K, &'a V)>
	for RbTreeMap<K, V, C, O>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	#[inline]
	fn extend<T>(&mut self, iter: T)
	where
		T: IntoIterator<Item = (&'a K, &'a V)>,
	{
		self.extend(iter.into_iter().map(|(&key, &value)| (key, value)));
	}
}

pub struct Iter<'a, K, V, C, O> {
	/// The tree reference.
	tree: &'a RbTree<K, V, C, O>,

	/// Next node.
	front: Option<usize>,

	/// Node following the last node to visit.
	back: Option<usize>,

	/// Number of remaining items.
	len: usize,
}

impl<'a, K, V, C: Slab<Node<K, V>>, O> Iter<'a, K, V, C, O>
where
	C: SimpleCollectionRef,
{
	#[inline]
	fn new(map: &'a RbTreeMap<K, V, C, O>) -> Self {
		Iter {
			tree: &map.tree,
			front: map.tree.first_id(),
			back: None,
			len: map.len(),
		}
	}

	#[inline]
	fn next_item(&mut self) -> Option<&'a Item<K, V>> {
		if self.len > 0 {
			self.len -= 1;
			let id = self.front.unwrap();
			self.front = self.tree.successor(id);
			Some(self.tree.node(id).item())
		} else {
			None
		}
	}

	#[inline]
	fn next_back_item(&mut self) -> Option<&'a Item<K, V>> {
		if self.len > 0 {
			self.len -= 1;
			let id = self.tree.predecessor_or_last(self.back).unwrap();
			self.back = Some(id);
			Some(self.tree.node(id).item())
		} else {
			None
		}
	}
}

impl<'a, K, V, C: Slab<Node<K, V>>, O> Iterator for Iter<'a, K, V, C, O>
where
	C: SimpleCollectionRef,
{
	type Item = (&'a K, &'a V);

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.len, Some(self.len))
	}

	#[inline]
	fn next(&mut self) -> Option<(&'a K, &'a V)> {
		self.next_item().map(Item::as_pair)
	}
}

impl<'a, K, V, C: Slab<Node<K, V>>, O> FusedIterator for Iter<'a, K, V, C, O> where
	C: SimpleCollectionRef
{
}
impl<'a, K, V, C: Slab<Node<K, V>>, O> ExactSizeIterator for Iter<'a, K, V, C, O> where
	C: SimpleCollectionRef
{
}

impl<'a, K, V, C: Slab<Node<K, V>>, O> DoubleEndedIterator for Iter<'a, K, V, C, O>
where
	C: SimpleCollectionRef,
{
	#[inline]
	fn next_back(&mut self) -> Option<(&'a K, &'a V)> {
		self.next_back_item().map(Item::as_pair)
	}
}

impl<'a, K, V, C: Slab<Node<K, V>>, O> IntoIterator for &'a RbTreeMap<K, V, C, O>
where
	C: SimpleCollectionRef,
{
	type IntoIter = Iter<'a, K, V, C, O>;
	type Item = (&'a K, &'a V);

	#[inline]
	fn into_iter(self) -> Iter<'a, K, V, C, O> {
		self.iter()
	}
}

pub struct IterMut<'a, K, V, C, O> {
	/// The tree reference.
	tree: &'a mut RbTree<K, V, C, O>,

	/// Next node.
	front: Option<usize>,

	/// Node following the last node to visit.
	back: Option<usize>,

	/// Number of remaining items.
	len: usize,
}

impl<'a, K, V, C: SlabMut<Node<K, V>>, O> IterMut<'a, K, V, C, O>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	#[inline]
	fn new(map: &'a mut RbTreeMap<K, V, C, O>) -> Self {
		let front = map.tree.first_id();
		let len = map.len();
		IterMut {
			tree: &mut map.tree,
			front,
			back: None,
			len,
		}
	}

	#[inline]
	fn next_item(&mut self) -> Option<&'a mut Item<K, V>> {
		if self.len > 0 {
			self.len -= 1;
			let id = self.front.unwrap();
			self.front = self.tree.successor(id);
			let item = self.tree.node_mut(id).item_mut();
			Some(unsafe { std::mem::transmute(item) }) // each item is emitted at most once.
		} else {
			None
		}
	}

	#[inline]
	fn next_back_item(&mut self) -> Option<&'a mut Item<K, V>> {
		if self.len > 0 {
			self.len -= 1;
			let id = self.tree.predecessor_or_last(self.back).unwrap();
			self.back = Some(id);
			let item = self.tree.node_mut(id).item_mut();
			Some(unsafe { std::mem::transmute(item) }) // each item is emitted at most once.
		} else {
			None
		}
	}
}

impl<'a, K, V, C: SlabMut<Node<K, V>>, O> Iterator for IterMut<'a, K, V, C, O>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	type Item = (&'a K, &'a mut V);

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.len, Some(self.len))
	}

	#[inline]
	fn next(&mut self) -> Option<(&'a K, &'a mut V)> {
		self.next_item().map(Item::as_pair_mut)
	}
}

impl<'a, K, V, C: SlabMut<Node<K, V>>, O> FusedIterator for IterMut<'a, K, V, C, O>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
}
impl<'a, K, V, C: SlabMut<Node<K, V>>, O> ExactSizeIterator for IterMut<'a, K, V, C, O>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
}

impl<'a, K, V, C: SlabMut<Node<K, V>>, O> DoubleEndedIterator for IterMut<'a, K, V, C, O>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	#[inline]
	fn next_back(&mut self) -> Option<(&'a K, &'a mut V)> {
		self.next_back_item().map(Item::as_pair_mut)
	}
}

impl<'a, K, V, C: SlabMut<Node<K, V>>, O> IntoIterator for &'a mut RbTreeMap<K, V, C, O>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	type IntoIter = IterMut<'a, K, V, C, O>;
	type Item = (&'a K, &'a mut V);

	#[inline]
	fn into_iter(self) -> IterMut<'a, K, V, C, O> {
		self.iter_mut()
	}
}

/// An owning iterator over the entries of a `RbTreeMap`.
///
/// This `struct` is created by the [`into_iter`] method on [`RbTreeMap`]
/// (provided by the `IntoIterator` trait). See its documentation for more.
///
/// Entries are removed from the tree as they are emitted,
/// the remaining ones are dropped with the iterator.
///
/// [`into_iter`]: IntoIterator::into_iter
pub struct IntoIter<K, V, C, O> {
	tree: RbTree<K, V, C, O>,
}

impl<K, V, C, O> IntoIter<K, V, C, O> {
	#[inline]
	pub fn new(map: RbTreeMap<K, V, C, O>) -> Self {
		IntoIter { tree: map.tree }
	}
}

impl<K, V, C: SlabMut<Node<K, V>>, O> FusedIterator for IntoIter<K, V, C, O>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
}
impl<K, V, C: SlabMut<Node<K, V>>, O> ExactSizeIterator for IntoIter<K, V, C, O>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
}

impl<K, V, C: SlabMut<Node<K, V>>, O> Iterator for IntoIter<K, V, C, O>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	type Item = (K, V);

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.tree.len(), Some(self.tree.len()))
	}

	#[inline]
	fn next(&mut self) -> Option<(K, V)> {
		self.tree
			.first_id()
			.map(|id| self.tree.remove_node(id).into_pair())
	}
}

impl<K, V, C: SlabMut<Node<K, V>>, O> DoubleEndedIterator for IntoIter<K, V, C, O>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	#[inline]
	fn next_back(&mut self) -> Option<(K, V)> {
		self.tree
			.last_id()
			.map(|id| self.tree.remove_node(id).into_pair())
	}
}

impl<K, V, C: SlabMut<Node<K, V>>, O> IntoIterator for RbTreeMap<K, V, C, O>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	type IntoIter = IntoIter<K, V, C, O>;
	type Item = (K, V);

	#[inline]
	fn into_iter(self) -> IntoIter<K, V, C, O> {
		IntoIter::new(self)
	}
}

pub struct Keys<'a, K, V, C, O> {
	inner: Iter<'a, K, V, C, O>,
}

impl<'a, K, V, C: Slab<Node<K, V>>, O> FusedIterator for Keys<'a, K, V, C, O> where
	C: SimpleCollectionRef
{
}
impl<'a, K, V, C: Slab<Node<K, V>>, O> ExactSizeIterator for Keys<'a, K, V, C, O> where
	C: SimpleCollectionRef
{
}

impl<'a, K, V, C: Slab<Node<K, V>>, O> Iterator for Keys<'a, K, V, C, O>
where
	C: SimpleCollectionRef,
{
	type Item = &'a K;

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}

	#[inline]
	fn next(&mut self) -> Option<&'a K> {
		self.inner.next().map(|(k, _)| k)
	}
}

impl<'a, K, V, C: Slab<Node<K, V>>, O> DoubleEndedIterator for Keys<'a, K, V, C, O>
where
	C: SimpleCollectionRef,
{
	#[inline]
	fn next_back(&mut self) -> Option<&'a K> {
		self.inner.next_back().map(|(k, _)| k)
	}
}

pub struct Values<'a, K, V, C, O> {
	inner: Iter<'a, K, V, C, O>,
}

impl<'a, K, V, C: Slab<Node<K, V>>, O> FusedIterator for Values<'a, K, V, C, O> where
	C: SimpleCollectionRef
{
}
impl<'a, K, V, C: Slab<Node<K, V>>, O> ExactSizeIterator for Values<'a, K, V, C, O> where
	C: SimpleCollectionRef
{
}

impl<'a, K, V, C: Slab<Node<K, V>>, O> Iterator for Values<'a, K, V, C, O>
where
	C: SimpleCollectionRef,
{
	type Item = &'a V;

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}

	#[inline]
	fn next(&mut self) -> Option<&'a V> {
		self.inner.next().map(|(_, v)| v)
	}
}

impl<'a, K, V, C: Slab<Node<K, V>>, O> DoubleEndedIterator for Values<'a, K, V, C, O>
where
	C: SimpleCollectionRef,
{
	#[inline]
	fn next_back(&mut self) -> Option<&'a V> {
		self.inner.next_back().map(|(_, v)| v)
	}
}

pub struct ValuesMut<'a, K, V, C, O> {
	inner: IterMut<'a, K, V, C, O>,
}

impl<'a, K, V, C: SlabMut<Node<K, V>>, O> FusedIterator for ValuesMut<'a, K, V, C, O>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
}
impl<'a, K, V, C: SlabMut<Node<K, V>>, O> ExactSizeIterator for ValuesMut<'a, K, V, C, O>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
}

impl<'a, K, V, C: SlabMut<Node<K, V>>, O> Iterator for ValuesMut<'a, K, V, C, O>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	type Item = &'a mut V;

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}

	#[inline]
	fn next(&mut self) -> Option<&'a mut V> {
		self.inner.next().map(|(_, v)| v)
	}
}

impl<'a, K, V, C: SlabMut<Node<K, V>>, O> DoubleEndedIterator for ValuesMut<'a, K, V, C, O>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	#[inline]
	fn next_back(&mut self) -> Option<&'a mut V> {
		self.inner.next_back().map(|(_, v)| v)
	}
}

pub struct IntoKeys<K, V, C, O> {
	inner: IntoIter<K, V, C, O>,
}

impl<K, V, C: SlabMut<Node<K, V>>, O> FusedIterator for IntoKeys<K, V, C, O>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
}
impl<K, V, C: SlabMut<Node<K, V>>, O> ExactSizeIterator for IntoKeys<K, V, C, O>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
}

impl<K, V, C: SlabMut<Node<K, V>>, O> Iterator for IntoKeys<K, V, C, O>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	type Item = K;

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}

	#[inline]
	fn next(&mut self) -> Option<K> {
		self.inner.next().map(|(k, _)| k)
	}
}

impl<K, V, C: SlabMut<Node<K, V>>, O> DoubleEndedIterator for IntoKeys<K, V, C, O>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	#[inline]
	fn next_back(&mut self) -> Option<K> {
		self.inner.next_back().map(|(k, _)| k)
	}
}

pub struct IntoValues<K, V, C, O> {
	inner: IntoIter<K, V, C, O>,
}

impl<K, V, C: SlabMut<Node<K, V>>, O> FusedIterator for IntoValues<K, V, C, O>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
}
impl<K, V, C: SlabMut<Node<K, V>>, O> ExactSizeIterator for IntoValues<K, V, C, O>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
}

impl<K, V, C: SlabMut<Node<K, V>>, O> Iterator for IntoValues<K, V, C, O>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	type Item = V;

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}

	#[inline]
	fn next(&mut self) -> Option<V> {
		self.inner.next().map(|(_, v)| v)
	}
}

impl<K, V, C: SlabMut<Node<K, V>>, O> DoubleEndedIterator for IntoValues<K, V, C, O>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	#[inline]
	fn next_back(&mut self) -> Option<V> {
		self.inner.next_back().map(|(_, v)| v)
	}
}

pub(crate) fn is_valid_range<T, R, O>(order: &O, range: &R) -> bool
where
	T: ?Sized,
	R: RangeBounds<T>,
	O: Order<T>,
{
	match (range.start_bound(), range.end_bound()) {
		(Bound::Included(start), Bound::Included(end)) => !order.less(end, start),
		(Bound::Included(start), Bound::Excluded(end)) => !order.less(end, start),
		(Bound::Included(_), Bound::Unbounded) => true,
		(Bound::Excluded(start), Bound::Included(end)) => !order.less(end, start),
		(Bound::Excluded(start), Bound::Excluded(end)) => order.less(start, end),
		(Bound::Excluded(_), Bound::Unbounded) => true,
		(Bound::Unbounded, _) => true,
	}
}

pub struct Range<'a, K, V, C, O> {
	/// The tree reference.
	tree: &'a RbTree<K, V, C, O>,

	/// Next node.
	front: Option<usize>,

	/// Node following the last node to visit.
	back: Option<usize>,
}

impl<'a, K, V, C: Slab<Node<K, V>>, O> Range<'a, K, V, C, O>
where
	C: SimpleCollectionRef,
{
	fn new<T, R>(map: &'a RbTreeMap<K, V, C, O>, range: R) -> Self
	where
		T: ?Sized,
		R: RangeBounds<T>,
		K: Borrow<T>,
		O: Order<T>,
	{
		let tree = &map.tree;
		if !is_valid_range(tree.order(), &range) {
			panic!("Invalid range")
		}

		let front = match range.start_bound() {
			Bound::Included(start) => tree.lower_bound_id(start),
			Bound::Excluded(start) => tree.upper_bound_id(start),
			Bound::Unbounded => tree.first_id(),
		};

		let back = match range.end_bound() {
			Bound::Included(end) => tree.upper_bound_id(end),
			Bound::Excluded(end) => tree.lower_bound_id(end),
			Bound::Unbounded => None,
		};

		Range { tree, front, back }
	}
}

impl<'a, K, V, C: Slab<Node<K, V>>, O> Iterator for Range<'a, K, V, C, O>
where
	C: SimpleCollectionRef,
{
	type Item = (&'a K, &'a V);

	#[inline]
	fn next(&mut self) -> Option<(&'a K, &'a V)> {
		if self.front != self.back {
			let id = self.front.unwrap();
			self.front = self.tree.successor(id);
			Some(self.tree.node(id).item().as_pair())
		} else {
			None
		}
	}
}

impl<'a, K, V, C: Slab<Node<K, V>>, O> FusedIterator for Range<'a, K, V, C, O> where
	C: SimpleCollectionRef
{
}

impl<'a, K, V, C: Slab<Node<K, V>>, O> DoubleEndedIterator for Range<'a, K, V, C, O>
where
	C: SimpleCollectionRef,
{
	#[inline]
	fn next_back(&mut self) -> Option<(&'a K, &'a V)> {
		if self.front != self.back {
			let id = self.tree.predecessor_or_last(self.back).unwrap();
			self.back = Some(id);
			Some(self.tree.node(id).item().as_pair())
		} else {
			None
		}
	}
}

#[cfg(feature = "serde")]
mod serialization {
	use super::RbTreeMap;
	use crate::{generic::Node, order::Order};
	use cc_traits::{SimpleCollectionMut, SimpleCollectionRef, Slab, SlabMut};
	use serde::{
		de::{SeqAccess, Visitor},
		Deserialize, Deserializer, Serialize, Serializer,
	};
	use std::{fmt, marker::PhantomData};

	/// Maps are serialized as sequences of key-value pairs, sorted by key.
	impl<K: Serialize, V: Serialize, C: Slab<Node<K, V>>, O> Serialize for RbTreeMap<K, V, C, O>
	where
		C: SimpleCollectionRef,
	{
		fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
			serializer.collect_seq(self.iter())
		}
	}

	struct MapVisitor<K, V, C, O>(PhantomData<RbTreeMap<K, V, C, O>>);

	impl<'de, K, V, C: SlabMut<Node<K, V>> + Default, O: Order<K> + Default> Visitor<'de>
		for MapVisitor<K, V, C, O>
	where
		K: Deserialize<'de>,
		V: Deserialize<'de>,
		C: SimpleCollectionRef,
		C: SimpleCollectionMut,
	{
		type Value = RbTreeMap<K, V, C, O>;

		fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
			write!(f, "a sequence of key-value pairs")
		}

		fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
			let mut map = RbTreeMap::default();
			while let Some((key, value)) = seq.next_element()? {
				map.replace(key, value);
			}

			Ok(map)
		}
	}

	impl<'de, K, V, C: SlabMut<Node<K, V>> + Default, O: Order<K> + Default> Deserialize<'de>
		for RbTreeMap<K, V, C, O>
	where
		K: Deserialize<'de>,
		V: Deserialize<'de>,
		C: SimpleCollectionRef,
		C: SimpleCollectionMut,
	{
		fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
			deserializer.deserialize_seq(MapVisitor(PhantomData))
		}
	}
}
