use crate::generic::{
	map::RbTreeMap,
	node::{Item, Node, Position},
	tree::Slot,
};
use cc_traits::{SimpleCollectionMut, SimpleCollectionRef, Slab, SlabMut};
use std::fmt;

/// A view into a single entry in a map, which may either be vacant or occupied.
///
/// This `enum` is constructed from the [`entry`](`RbTreeMap#method.entry`) method on [`RbTreeMap`].
pub enum Entry<'a, K, V, C, O> {
	Vacant(VacantEntry<'a, K, V, C, O>),
	Occupied(OccupiedEntry<'a, K, V, C, O>),
}

use Entry::*;

impl<'a, K, V, C: Slab<Node<K, V>>, O> Entry<'a, K, V, C, O>
where
	C: SimpleCollectionRef,
{
	/// Returns a reference to this entry's key.
	///
	/// # Examples
	///
	/// ```
	/// use rbtree_slab::RbTreeMap;
	///
	/// let mut map: RbTreeMap<&str, usize> = RbTreeMap::new();
	/// assert_eq!(map.entry("poneyland").key(), &"poneyland");
	/// ```
	#[inline]
	pub fn key(&self) -> &K {
		match *self {
			Occupied(ref entry) => entry.key(),
			Vacant(ref entry) => entry.key(),
		}
	}
}

impl<'a, K, V, C: SlabMut<Node<K, V>>, O> Entry<'a, K, V, C, O>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	/// Ensures a value is in the entry by inserting the default if empty, and returns
	/// a mutable reference to the value in the entry.
	///
	/// # Examples
	///
	/// ```
	/// use rbtree_slab::RbTreeMap;
	///
	/// let mut map: RbTreeMap<&str, usize> = RbTreeMap::new();
	/// map.entry("poneyland").or_insert(12);
	///
	/// assert_eq!(map["poneyland"], 12);
	/// ```
	#[inline]
	pub fn or_insert(self, default: V) -> &'a mut V {
		match self {
			Occupied(entry) => entry.into_mut(),
			Vacant(entry) => entry.insert(default),
		}
	}

	/// Ensures a value is in the entry by inserting the result of the default function if empty,
	/// and returns a mutable reference to the value in the entry.
	#[inline]
	pub fn or_insert_with<F: FnOnce() -> V>(self, default: F) -> &'a mut V {
		match self {
			Occupied(entry) => entry.into_mut(),
			Vacant(entry) => entry.insert(default()),
		}
	}

	/// Ensures a value is in the entry by inserting, if empty, the result of the default function,
	/// which takes the key as argument.
	///
	/// # Examples
	///
	/// ```
	/// use rbtree_slab::RbTreeMap;
	///
	/// let mut map: RbTreeMap<&str, usize> = RbTreeMap::new();
	///
	/// map.entry("poneyland").or_insert_with_key(|key| key.chars().count());
	///
	/// assert_eq!(map["poneyland"], 9);
	/// ```
	#[inline]
	pub fn or_insert_with_key<F: FnOnce(&K) -> V>(self, default: F) -> &'a mut V {
		match self {
			Occupied(entry) => entry.into_mut(),
			Vacant(entry) => {
				let value = default(entry.key());
				entry.insert(value)
			}
		}
	}

	/// Provides in-place mutable access to an occupied entry before any
	/// potential inserts into the map.
	///
	/// # Examples
	///
	/// ```
	/// use rbtree_slab::RbTreeMap;
	///
	/// let mut map: RbTreeMap<&str, usize> = RbTreeMap::new();
	///
	/// map.entry("poneyland")
	///    .and_modify(|e| { *e += 1 })
	///    .or_insert(42);
	/// assert_eq!(map["poneyland"], 42);
	///
	/// map.entry("poneyland")
	///    .and_modify(|e| { *e += 1 })
	///    .or_insert(42);
	/// assert_eq!(map["poneyland"], 43);
	/// ```
	#[inline]
	pub fn and_modify<F>(self, f: F) -> Self
	where
		F: FnOnce(&mut V),
	{
		match self {
			Occupied(mut entry) => {
				f(entry.get_mut());
				Occupied(entry)
			}
			Vacant(entry) => Vacant(entry),
		}
	}

	/// Ensures a value is in the entry by inserting the default value if empty,
	/// and returns a mutable reference to the value in the entry.
	#[inline]
	pub fn or_default(self) -> &'a mut V
	where
		V: Default,
	{
		match self {
			Occupied(entry) => entry.into_mut(),
			Vacant(entry) => entry.insert(Default::default()),
		}
	}
}

impl<'a, K: fmt::Debug, V: fmt::Debug, C: Slab<Node<K, V>>, O> fmt::Debug
	for Entry<'a, K, V, C, O>
where
	C: SimpleCollectionRef,
{
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Occupied(entry) => entry.fmt(f),
			Vacant(entry) => entry.fmt(f),
		}
	}
}

/// A view into a vacant entry in a [`RbTreeMap`].
/// It is part of the [`Entry`] enum.
///
/// The entry remembers the empty slot where its key belongs,
/// so inserting a value does not search the tree again.
pub struct VacantEntry<'a, K, V, C, O> {
	pub(crate) map: &'a mut RbTreeMap<K, V, C, O>,
	pub(crate) key: K,
	pub(crate) slot: Slot,
}

impl<'a, K, V, C, O> VacantEntry<'a, K, V, C, O> {
	/// Gets a reference to the key that would be used when inserting a value
	/// through the VacantEntry.
	#[inline]
	pub fn key(&self) -> &K {
		&self.key
	}

	/// Take ownership of the key.
	#[inline]
	pub fn into_key(self) -> K {
		self.key
	}
}

impl<'a, K, V, C: SlabMut<Node<K, V>>, O> VacantEntry<'a, K, V, C, O>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	/// Sets the value of the entry with the `VacantEntry`'s key,
	/// and returns a mutable reference to it.
	///
	/// # Examples
	///
	/// ```
	/// use rbtree_slab::RbTreeMap;
	/// use rbtree_slab::generic::map::Entry;
	///
	/// let mut map: RbTreeMap<&str, u32> = RbTreeMap::new();
	///
	/// if let Entry::Vacant(o) = map.entry("poneyland") {
	///     o.insert(37);
	/// }
	/// assert_eq!(map["poneyland"], 37);
	/// ```
	#[inline]
	pub fn insert(self, value: V) -> &'a mut V {
		let map = self.map;
		let id = map.tree.insert_at(self.slot, Item::new(self.key, value));
		map.tree.node_mut(id).item_mut().value_mut()
	}
}

impl<'a, K: fmt::Debug, V, C, O> fmt::Debug for VacantEntry<'a, K, V, C, O> {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_tuple("VacantEntry").field(self.key()).finish()
	}
}

/// A view into an occupied entry in a [`RbTreeMap`].
/// It is part of the [`Entry`] enum.
pub struct OccupiedEntry<'a, K, V, C, O> {
	pub(crate) map: &'a mut RbTreeMap<K, V, C, O>,
	pub(crate) id: usize,
}

impl<'a, K, V, C: Slab<Node<K, V>>, O> OccupiedEntry<'a, K, V, C, O>
where
	C: SimpleCollectionRef,
{
	/// Position of the entry in the map.
	#[inline]
	pub fn position(&self) -> Position {
		self.map.tree.position_of(Some(self.id))
	}

	/// Gets a reference to the value in the entry.
	#[inline]
	pub fn get(&self) -> &V {
		self.map.tree.node(self.id).value()
	}

	/// Gets a reference to the key in the entry.
	#[inline]
	pub fn key(&self) -> &K {
		self.map.tree.node(self.id).key()
	}
}

impl<'a, K, V, C: SlabMut<Node<K, V>>, O> OccupiedEntry<'a, K, V, C, O>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	/// Gets a mutable reference to the value in the entry.
	///
	/// If you need a reference to the `OccupiedEntry` that may outlive the
	/// destruction of the `Entry` value, see [`into_mut`](OccupiedEntry::into_mut).
	#[inline]
	pub fn get_mut(&mut self) -> &mut V {
		self.map.tree.node_mut(self.id).item_mut().value_mut()
	}

	/// Sets the value of the entry with the `OccupiedEntry`'s key,
	/// and returns the entry's old value.
	///
	/// # Examples
	///
	/// ```
	/// use rbtree_slab::RbTreeMap;
	/// use rbtree_slab::generic::map::Entry;
	///
	/// let mut map: RbTreeMap<&str, usize> = RbTreeMap::new();
	/// map.entry("poneyland").or_insert(12);
	///
	/// if let Entry::Occupied(mut o) = map.entry("poneyland") {
	///     assert_eq!(o.insert(15), 12);
	/// }
	/// assert_eq!(map["poneyland"], 15);
	/// ```
	#[inline]
	pub fn insert(&mut self, value: V) -> V {
		self.map.tree.node_mut(self.id).item_mut().set_value(value)
	}

	/// Converts the entry into a mutable reference to its value.
	#[inline]
	pub fn into_mut(self) -> &'a mut V {
		self.map.tree.node_mut(self.id).item_mut().value_mut()
	}

	/// Takes the value of the entry out of the map, and returns it.
	#[inline]
	pub fn remove(self) -> V {
		self.map.tree.remove_node(self.id).into_value()
	}

	/// Take ownership of the key and value from the map.
	///
	/// # Examples
	///
	/// ```
	/// use rbtree_slab::RbTreeMap;
	/// use rbtree_slab::generic::map::Entry;
	///
	/// let mut map: RbTreeMap<&str, usize> = RbTreeMap::new();
	/// map.entry("poneyland").or_insert(12);
	///
	/// if let Entry::Occupied(o) = map.entry("poneyland") {
	///     // We delete the entry from the map.
	///     o.remove_entry();
	/// }
	///
	/// // If now try to get the value, it will panic:
	/// // println!("{}", map["poneyland"]);
	/// ```
	#[inline]
	pub fn remove_entry(self) -> (K, V) {
		self.map.tree.remove_node(self.id).into_pair()
	}
}

impl<'a, K: fmt::Debug, V: fmt::Debug, C: Slab<Node<K, V>>, O> fmt::Debug
	for OccupiedEntry<'a, K, V, C, O>
where
	C: SimpleCollectionRef,
{
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_struct("OccupiedEntry")
			.field("key", self.key())
			.field("value", self.get())
			.finish()
	}
}
