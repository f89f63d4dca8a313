use crate::{
	generic::{map, node::Node, Position, RbTreeMap},
	order::{Natural, Order},
};
use cc_traits::{SimpleCollectionMut, SimpleCollectionRef, Slab, SlabMut};
use std::{
	borrow::Borrow,
	cmp::Ordering,
	fmt,
	hash::{Hash, Hasher},
	iter::{DoubleEndedIterator, ExactSizeIterator, FromIterator, FusedIterator, Peekable},
	ops::RangeBounds,
};

/// A set based on a red-black tree.
///
/// See [`RbTreeMap`]'s documentation for a detailed discussion of this collection's
/// storage and of [`Position`]s.
///
/// It is a logic error for an item to be modified in such a way that the item's ordering relative
/// to any other item, as determined by the set order, changes while it is in the set. This is
/// normally only possible through [`Cell`], [`RefCell`], global state, I/O, or unsafe code.
///
/// [`Cell`]: core::cell::Cell
/// [`RefCell`]: core::cell::RefCell
pub struct RbTreeSet<T, C, O = Natural> {
	map: RbTreeMap<T, (), C, O>,
}

impl<T, C> RbTreeSet<T, C, Natural> {
	/// Makes a new, empty `RbTreeSet`.
	///
	/// # Example
	///
	/// ```
	/// # #![allow(unused_mut)]
	/// use rbtree_slab::RbTreeSet;
	///
	/// let mut set: RbTreeSet<i32> = RbTreeSet::new();
	/// ```
	#[inline]
	pub fn new() -> Self
	where
		C: Default,
	{
		RbTreeSet {
			map: RbTreeMap::new(),
		}
	}
}

impl<T, C, O> RbTreeSet<T, C, O> {
	/// Makes a new, empty `RbTreeSet` sorted with the given order.
	#[inline]
	pub fn with_order(order: O) -> Self
	where
		C: Default,
	{
		RbTreeSet {
			map: RbTreeMap::with_order(order),
		}
	}

	/// Returns the order used to sort the elements.
	#[inline]
	pub fn order(&self) -> &O {
		self.map.order()
	}

	/// Returns the number of elements in the set.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbTreeSet;
	///
	/// let mut v = RbTreeSet::new();
	/// assert_eq!(v.len(), 0);
	/// v.insert(1);
	/// assert_eq!(v.len(), 1);
	/// ```
	#[inline]
	pub fn len(&self) -> usize {
		self.map.len()
	}

	/// Returns `true` if the set contains no elements.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.map.is_empty()
	}

	/// Exchange the content of two sets in constant time.
	#[inline]
	pub fn swap(&mut self, other: &mut Self) {
		self.map.swap(&mut other.map)
	}

	/// The underlying map.
	#[inline]
	pub fn as_map(&self) -> &RbTreeMap<T, (), C, O> {
		&self.map
	}
}

impl<T, C: Default, O: Default> Default for RbTreeSet<T, C, O> {
	#[inline]
	fn default() -> Self {
		RbTreeSet {
			map: RbTreeMap::default(),
		}
	}
}

impl<T, C: Slab<Node<T, ()>>, O> RbTreeSet<T, C, O>
where
	C: SimpleCollectionRef,
{
	/// Gets an iterator that visits the values in the `RbTreeSet` in ascending order.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbTreeSet;
	///
	/// let set: RbTreeSet<usize> = [3, 1, 2].iter().cloned().collect();
	/// let mut set_iter = set.iter();
	/// assert_eq!(set_iter.next(), Some(&1));
	/// assert_eq!(set_iter.next(), Some(&2));
	/// assert_eq!(set_iter.next(), Some(&3));
	/// assert_eq!(set_iter.next(), None);
	/// ```
	#[inline]
	pub fn iter(&self) -> Iter<'_, T, C, O> {
		Iter {
			inner: self.map.keys(),
		}
	}

	/// Returns `true` if the set contains a value.
	///
	/// The value may be any borrowed form of the set's value type,
	/// but the ordering on the borrowed form *must* match the
	/// ordering on the value type.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbTreeSet;
	///
	/// let set: RbTreeSet<_> = [1, 2, 3].iter().cloned().collect();
	/// assert_eq!(set.contains(&1), true);
	/// assert_eq!(set.contains(&4), false);
	/// ```
	#[inline]
	pub fn contains<Q: ?Sized>(&self, value: &Q) -> bool
	where
		T: Borrow<Q>,
		O: Order<Q>,
	{
		self.map.contains_key(value)
	}

	/// Returns the number of elements equivalent to `value`, `0` or `1`.
	#[inline]
	pub fn count<Q: ?Sized>(&self, value: &Q) -> usize
	where
		T: Borrow<Q>,
		O: Order<Q>,
	{
		self.map.count(value)
	}

	/// Returns a reference to the value in the set, if any, that is equal to the given value.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbTreeSet;
	///
	/// let set: RbTreeSet<_> = [1, 2, 3].iter().cloned().collect();
	/// assert_eq!(set.get(&2), Some(&2));
	/// assert_eq!(set.get(&4), None);
	/// ```
	#[inline]
	pub fn get<Q: ?Sized>(&self, value: &Q) -> Option<&T>
	where
		T: Borrow<Q>,
		O: Order<Q>,
	{
		self.map.get_key_value(value).map(|(k, _)| k)
	}

	/// Returns the position of the given value, or the end position.
	#[inline]
	pub fn find<Q: ?Sized>(&self, value: &Q) -> Position
	where
		T: Borrow<Q>,
		O: Order<Q>,
	{
		self.map.find(value)
	}

	/// Returns the position of the first value not ordered before `value`,
	/// or the end position.
	#[inline]
	pub fn lower_bound<Q: ?Sized>(&self, value: &Q) -> Position
	where
		T: Borrow<Q>,
		O: Order<Q>,
	{
		self.map.lower_bound(value)
	}

	/// Returns the position of the first value ordered after `value`,
	/// or the end position.
	#[inline]
	pub fn upper_bound<Q: ?Sized>(&self, value: &Q) -> Position
	where
		T: Borrow<Q>,
		O: Order<Q>,
	{
		self.map.upper_bound(value)
	}

	/// Returns the pair `(lower_bound(value), upper_bound(value))`.
	#[inline]
	pub fn equal_range<Q: ?Sized>(&self, value: &Q) -> (Position, Position)
	where
		T: Borrow<Q>,
		O: Order<Q>,
	{
		self.map.equal_range(value)
	}

	#[inline]
	pub fn begin(&self) -> Position {
		self.map.begin()
	}

	#[inline]
	pub fn end(&self) -> Position {
		self.map.end()
	}

	#[inline]
	pub fn rbegin(&self) -> Position {
		self.map.rbegin()
	}

	#[inline]
	pub fn rend(&self) -> Position {
		self.map.rend()
	}

	/// Position following `pos`.
	#[inline]
	pub fn next(&self, pos: Position) -> Position {
		self.map.next(pos)
	}

	/// Position preceding `pos`.
	#[inline]
	pub fn prev(&self, pos: Position) -> Position {
		self.map.prev(pos)
	}

	/// Returns the value at the given position, or `None` for the end position.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbTreeSet;
	///
	/// let set: RbTreeSet<_> = [10, 20, 30].iter().cloned().collect();
	/// assert_eq!(set.value_at(set.lower_bound(&15)), Some(&20));
	/// assert_eq!(set.value_at(set.end()), None);
	/// ```
	#[inline]
	pub fn value_at(&self, pos: Position) -> Option<&T> {
		self.map.key_value_at(pos).map(|(k, _)| k)
	}

	/// Constructs a double-ended iterator over a sub-range of elements in the set.
	///
	/// # Panics
	///
	/// Panics if range `start > end`.
	/// Panics if range `start == end` and both bounds are `Excluded`.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbTreeSet;
	/// use std::ops::Bound::Included;
	///
	/// let mut set = RbTreeSet::new();
	/// set.insert(3);
	/// set.insert(5);
	/// set.insert(8);
	/// for &elem in set.range((Included(&4), Included(&8))) {
	///     println!("{}", elem);
	/// }
	/// assert_eq!(Some(&5), set.range(4..).next());
	/// ```
	#[inline]
	pub fn range<K: ?Sized, R>(&self, range: R) -> Range<'_, T, C, O>
	where
		T: Borrow<K>,
		O: Order<K>,
		R: RangeBounds<K>,
	{
		Range {
			inner: self.map.range(range),
		}
	}

	/// Returns a reference to the first value in the set, if any.
	/// This value is always the minimum of all values in the set.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbTreeSet;
	///
	/// let mut map = RbTreeSet::new();
	/// assert_eq!(map.first(), None);
	/// map.insert(1);
	/// assert_eq!(map.first(), Some(&1));
	/// map.insert(2);
	/// assert_eq!(map.first(), Some(&1));
	/// ```
	#[inline]
	pub fn first(&self) -> Option<&T> {
		self.map.first_key_value().map(|(k, _)| k)
	}

	/// Returns a reference to the last value in the set, if any.
	/// This value is always the maximum of all values in the set.
	#[inline]
	pub fn last(&self) -> Option<&T> {
		self.map.last_key_value().map(|(k, _)| k)
	}

	/// Visits the values representing the union,
	/// i.e., all the values in `self` or `other`, without duplicates,
	/// in ascending order.
	///
	/// Both sets must be sorted with the same order.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbTreeSet;
	///
	/// let mut a = RbTreeSet::new();
	/// a.insert(1);
	///
	/// let mut b = RbTreeSet::new();
	/// b.insert(2);
	///
	/// let union: Vec<_> = a.union(&b).cloned().collect();
	/// assert_eq!(union, [1, 2]);
	/// ```
	#[inline]
	pub fn union<'a, D: Slab<Node<T, ()>>>(
		&'a self,
		other: &'a RbTreeSet<T, D, O>,
	) -> Union<'a, T, C, D, O>
	where
		D: SimpleCollectionRef,
		O: Order<T>,
	{
		Union {
			order: self.order(),
			it1: self.iter().peekable(),
			it2: other.iter().peekable(),
		}
	}

	/// Visits the values representing the intersection,
	/// i.e., the values that are both in `self` and `other`,
	/// in ascending order.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbTreeSet;
	///
	/// let a: RbTreeSet<_> = [1, 2, 3].iter().cloned().collect();
	/// let b: RbTreeSet<_> = [2, 3, 4].iter().cloned().collect();
	///
	/// let intersection: Vec<_> = a.intersection(&b).cloned().collect();
	/// assert_eq!(intersection, [2, 3]);
	/// ```
	#[inline]
	pub fn intersection<'a, D: Slab<Node<T, ()>>>(
		&'a self,
		other: &'a RbTreeSet<T, D, O>,
	) -> Intersection<'a, T, C, D, O>
	where
		D: SimpleCollectionRef,
		O: Order<T>,
	{
		Intersection {
			order: self.order(),
			it1: self.iter(),
			it2: other.iter().peekable(),
		}
	}

	/// Visits the values representing the difference,
	/// i.e., the values that are in `self` but not in `other`,
	/// in ascending order.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbTreeSet;
	///
	/// let a: RbTreeSet<_> = [1, 2, 3].iter().cloned().collect();
	/// let b: RbTreeSet<_> = [2, 3, 4].iter().cloned().collect();
	///
	/// let diff: Vec<_> = a.difference(&b).cloned().collect();
	/// assert_eq!(diff, [1]);
	/// ```
	#[inline]
	pub fn difference<'a, D: Slab<Node<T, ()>>>(
		&'a self,
		other: &'a RbTreeSet<T, D, O>,
	) -> Difference<'a, T, C, D, O>
	where
		D: SimpleCollectionRef,
		O: Order<T>,
	{
		Difference {
			order: self.order(),
			it1: self.iter(),
			it2: other.iter().peekable(),
		}
	}

	/// Visits the values representing the symmetric difference,
	/// i.e., the values that are in `self` or in `other` but not in both,
	/// in ascending order.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbTreeSet;
	///
	/// let a: RbTreeSet<_> = [1, 2, 3].iter().cloned().collect();
	/// let b: RbTreeSet<_> = [2, 3, 4].iter().cloned().collect();
	///
	/// let sym_diff: Vec<_> = a.symmetric_difference(&b).cloned().collect();
	/// assert_eq!(sym_diff, [1, 4]);
	/// ```
	#[inline]
	pub fn symmetric_difference<'a, D: Slab<Node<T, ()>>>(
		&'a self,
		other: &'a RbTreeSet<T, D, O>,
	) -> SymmetricDifference<'a, T, C, D, O>
	where
		D: SimpleCollectionRef,
		O: Order<T>,
	{
		SymmetricDifference {
			order: self.order(),
			it1: self.iter().peekable(),
			it2: other.iter().peekable(),
		}
	}

	/// Returns `true` if `self` has no elements in common with `other`.
	/// This is equivalent to checking for an empty intersection.
	#[inline]
	pub fn is_disjoint<D: Slab<Node<T, ()>>>(&self, other: &RbTreeSet<T, D, O>) -> bool
	where
		D: SimpleCollectionRef,
		O: Order<T>,
	{
		self.intersection(other).next().is_none()
	}

	/// Returns `true` if the set is a subset of another,
	/// i.e., `other` contains at least all the values in `self`.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbTreeSet;
	///
	/// let sup: RbTreeSet<_> = [1, 2, 3].iter().cloned().collect();
	/// let mut set = RbTreeSet::new();
	///
	/// assert_eq!(set.is_subset(&sup), true);
	/// set.insert(2);
	/// assert_eq!(set.is_subset(&sup), true);
	/// set.insert(4);
	/// assert_eq!(set.is_subset(&sup), false);
	/// ```
	#[inline]
	pub fn is_subset<D: Slab<Node<T, ()>>>(&self, other: &RbTreeSet<T, D, O>) -> bool
	where
		D: SimpleCollectionRef,
		O: Order<T>,
	{
		self.len() <= other.len() && self.difference(other).next().is_none()
	}

	/// Returns `true` if the set is a superset of another,
	/// i.e., `self` contains at least all the values in `other`.
	#[inline]
	pub fn is_superset<D: Slab<Node<T, ()>>>(&self, other: &RbTreeSet<T, D, O>) -> bool
	where
		D: SimpleCollectionRef,
		O: Order<T>,
	{
		other.is_subset(self)
	}

	/// Validate the underlying tree.
	///
	/// Panics if the red-black tree invariants are not respected.
	#[inline]
	pub fn validate(&self)
	where
		O: Order<T>,
	{
		self.map.validate()
	}
}

impl<T, C: SlabMut<Node<T, ()>>, O> RbTreeSet<T, C, O>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	/// Clears the set, removing all values.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbTreeSet;
	///
	/// let mut v = RbTreeSet::new();
	/// v.insert(1);
	/// v.clear();
	/// assert!(v.is_empty());
	/// ```
	#[inline]
	pub fn clear(&mut self)
	where
		C: cc_traits::Clear,
	{
		self.map.clear()
	}

	/// Adds a value to the set.
	///
	/// Returns the position of the value in the set and whether it was inserted.
	/// If the set already had an equivalent value, the set is unchanged and the given value
	/// is dropped.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbTreeSet;
	///
	/// let mut set = RbTreeSet::new();
	///
	/// assert_eq!(set.insert(2).1, true);
	/// assert_eq!(set.insert(2).1, false);
	/// assert_eq!(set.len(), 1);
	/// ```
	#[inline]
	pub fn insert(&mut self, element: T) -> (Position, bool)
	where
		O: Order<T>,
	{
		self.map.insert(element, ())
	}

	/// Adds a value to the set using `hint` as a suggestion of where it goes.
	///
	/// Returns the position of the value in the set.
	#[inline]
	pub fn insert_hint(&mut self, hint: Position, element: T) -> Position
	where
		O: Order<T>,
	{
		self.map.insert_hint(hint, element, ())
	}

	/// Adds a value to the set, replacing the existing value, if any, that is equal to the given
	/// one. Returns the replaced value.
	///
	/// A replaced value is swapped in place: positions to it stay valid.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbTreeSet;
	///
	/// let mut set = RbTreeSet::new();
	/// set.insert(Vec::<i32>::new());
	///
	/// assert_eq!(set.get(&[][..]).unwrap().capacity(), 0);
	/// set.replace(Vec::with_capacity(10));
	/// assert_eq!(set.get(&[][..]).unwrap().capacity(), 10);
	/// ```
	#[inline]
	pub fn replace(&mut self, value: T) -> Option<T>
	where
		O: Order<T>,
	{
		self.map.replace_key(value, ())
	}

	/// Removes a value from the set. Returns whether the value was
	/// present in the set.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbTreeSet;
	///
	/// let mut set = RbTreeSet::new();
	///
	/// set.insert(2);
	/// assert_eq!(set.remove(&2), true);
	/// assert_eq!(set.remove(&2), false);
	/// ```
	#[inline]
	pub fn remove<Q: ?Sized>(&mut self, value: &Q) -> bool
	where
		T: Borrow<Q>,
		O: Order<Q>,
	{
		self.take(value).is_some()
	}

	/// Removes and returns the value in the set, if any, that is equal to the given one.
	#[inline]
	pub fn take<Q: ?Sized>(&mut self, value: &Q) -> Option<T>
	where
		T: Borrow<Q>,
		O: Order<Q>,
	{
		self.map.remove_entry(value).map(|(t, _)| t)
	}

	/// Removes the value at the given position and returns it.
	///
	/// # Panics
	///
	/// Panics if `pos` is the end position.
	#[inline]
	pub fn remove_at(&mut self, pos: Position) -> T {
		self.map.remove_at(pos).0
	}

	/// Removes every value from position `first` (included) to position `last` (excluded).
	///
	/// Returns the number of removed values.
	#[inline]
	pub fn remove_range(&mut self, first: Position, last: Position) -> usize {
		self.map.remove_range(first, last)
	}

	/// Removes the first value from the set and returns it, if any.
	/// The first value is always the minimum value in the set.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbTreeSet;
	///
	/// let mut set = RbTreeSet::new();
	///
	/// set.insert(1);
	/// while let Some(n) = set.pop_first() {
	///     assert_eq!(n, 1);
	/// }
	/// assert!(set.is_empty());
	/// ```
	#[inline]
	pub fn pop_first(&mut self) -> Option<T> {
		self.map.pop_first().map(|kv| kv.0)
	}

	/// Removes the last value from the set and returns it, if any.
	/// The last value is always the maximum value in the set.
	#[inline]
	pub fn pop_last(&mut self) -> Option<T> {
		self.map.pop_last().map(|kv| kv.0)
	}

	/// Retains only the elements specified by the predicate.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbTreeSet;
	///
	/// let xs = [1, 2, 3, 4, 5, 6];
	/// let mut set: RbTreeSet<i32> = xs.iter().cloned().collect();
	/// // Keep only the even numbers.
	/// set.retain(|&k| k % 2 == 0);
	/// assert!(set.iter().eq([2, 4, 6].iter()));
	/// ```
	#[inline]
	pub fn retain<F>(&mut self, mut f: F)
	where
		F: FnMut(&T) -> bool,
	{
		self.map.retain(|k, _| f(k))
	}

	/// Moves all elements from `other` into `Self`, leaving `other` empty.
	#[inline]
	pub fn append(&mut self, other: &mut Self)
	where
		O: Order<T>,
	{
		self.map.append(&mut other.map)
	}
}

impl<T: Clone, C: SlabMut<Node<T, ()>> + Default, O: Clone> Clone for RbTreeSet<T, C, O>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	#[inline]
	fn clone(&self) -> Self {
		RbTreeSet {
			map: self.map.clone(),
		}
	}
}

impl<T: fmt::Debug, C: Slab<Node<T, ()>>, O> fmt::Debug for RbTreeSet<T, C, O>
where
	C: SimpleCollectionRef,
{
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_set().entries(self.iter()).finish()
	}
}

impl<T, C: SlabMut<Node<T, ()>> + Default, O: Order<T> + Default> FromIterator<T>
	for RbTreeSet<T, C, O>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	#[inline]
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		let mut set = RbTreeSet::default();
		set.extend(iter);
		set
	}
}

impl<T, C: SlabMut<Node<T, ()>>, O> IntoIterator for RbTreeSet<T, C, O>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	type Item = T;
	type IntoIter = IntoIter<T, C, O>;

	#[inline]
	fn into_iter(self) -> IntoIter<T, C, O> {
		IntoIter {
			inner: self.map.into_keys(),
		}
	}
}

impl<'a, T, C: Slab<Node<T, ()>>, O> IntoIterator for &'a RbTreeSet<T, C, O>
where
	C: SimpleCollectionRef,
{
	type Item = &'a T;
	type IntoIter = Iter<'a, T, C, O>;

	#[inline]
	fn into_iter(self) -> Iter<'a, T, C, O> {
		self.iter()
	}
}

impl<T, C: SlabMut<Node<T, ()>>, O: Order<T>> Extend<T> for RbTreeSet<T, C, O>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	#[inline]
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		for t in iter {
			self.insert(t);
		}
	}
}

impl<'a, T: 'a + Copy, C: SlabMut<Node<T, ()>>, O: Order<T>> Extend<&'a T> for RbTreeSet<T, C, O>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	#[inline]
	fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
		self.extend(iter.into_iter().copied())
	}
}

impl<T, L: PartialEq<T>, C: Slab<Node<T, ()>>, D: Slab<Node<L, ()>>, O, P>
	PartialEq<RbTreeSet<L, D, P>> for RbTreeSet<T, C, O>
where
	C: SimpleCollectionRef,
	D: SimpleCollectionRef,
{
	#[inline]
	fn eq(&self, other: &RbTreeSet<L, D, P>) -> bool {
		self.map.eq(&other.map)
	}
}

impl<T: Eq, C: Slab<Node<T, ()>>, O> Eq for RbTreeSet<T, C, O> where C: SimpleCollectionRef {}

impl<T, L: PartialOrd<T>, C: Slab<Node<T, ()>>, D: Slab<Node<L, ()>>, O, P>
	PartialOrd<RbTreeSet<L, D, P>> for RbTreeSet<T, C, O>
where
	C: SimpleCollectionRef,
	D: SimpleCollectionRef,
{
	#[inline]
	fn partial_cmp(&self, other: &RbTreeSet<L, D, P>) -> Option<Ordering> {
		self.map.partial_cmp(&other.map)
	}
}

impl<T: Ord, C: Slab<Node<T, ()>>, O> Ord for RbTreeSet<T, C, O>
where
	C: SimpleCollectionRef,
{
	#[inline]
	fn cmp(&self, other: &Self) -> Ordering {
		self.map.cmp(&other.map)
	}
}

impl<T: Hash, C: Slab<Node<T, ()>>, O> Hash for RbTreeSet<T, C, O>
where
	C: SimpleCollectionRef,
{
	#[inline]
	fn hash<H: Hasher>(&self, h: &mut H) {
		self.map.hash(h)
	}
}

pub struct Iter<'a, T, C, O> {
	inner: map::Keys<'a, T, (), C, O>,
}

impl<'a, T, C: Slab<Node<T, ()>>, O> Iterator for Iter<'a, T, C, O>
where
	C: SimpleCollectionRef,
{
	type Item = &'a T;

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}

	#[inline]
	fn next(&mut self) -> Option<&'a T> {
		self.inner.next()
	}
}

impl<'a, T, C: Slab<Node<T, ()>>, O> DoubleEndedIterator for Iter<'a, T, C, O>
where
	C: SimpleCollectionRef,
{
	#[inline]
	fn next_back(&mut self) -> Option<&'a T> {
		self.inner.next_back()
	}
}

impl<'a, T, C: Slab<Node<T, ()>>, O> FusedIterator for Iter<'a, T, C, O> where
	C: SimpleCollectionRef
{
}
impl<'a, T, C: Slab<Node<T, ()>>, O> ExactSizeIterator for Iter<'a, T, C, O> where
	C: SimpleCollectionRef
{
}

pub struct IntoIter<T, C, O> {
	inner: map::IntoKeys<T, (), C, O>,
}

impl<T, C: SlabMut<Node<T, ()>>, O> Iterator for IntoIter<T, C, O>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	type Item = T;

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}

	#[inline]
	fn next(&mut self) -> Option<T> {
		self.inner.next()
	}
}

impl<T, C: SlabMut<Node<T, ()>>, O> DoubleEndedIterator for IntoIter<T, C, O>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
	#[inline]
	fn next_back(&mut self) -> Option<T> {
		self.inner.next_back()
	}
}

impl<T, C: SlabMut<Node<T, ()>>, O> FusedIterator for IntoIter<T, C, O>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
}
impl<T, C: SlabMut<Node<T, ()>>, O> ExactSizeIterator for IntoIter<T, C, O>
where
	C: SimpleCollectionRef,
	C: SimpleCollectionMut,
{
}

pub struct Union<'a, T, C: Slab<Node<T, ()>>, D: Slab<Node<T, ()>>, O>
where
	C: SimpleCollectionRef,
	D: SimpleCollectionRef,
{
	order: &'a O,
	it1: Peekable<Iter<'a, T, C, O>>,
	it2: Peekable<Iter<'a, T, D, O>>,
}

impl<'a, T, C: Slab<Node<T, ()>>, D: Slab<Node<T, ()>>, O: Order<T>> Iterator
	for Union<'a, T, C, D, O>
where
	C: SimpleCollectionRef,
	D: SimpleCollectionRef,
{
	type Item = &'a T;

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		let len1 = self.it1.len();
		let len2 = self.it2.len();

		(std::cmp::max(len1, len2), len1.checked_add(len2))
	}

	#[inline]
	fn next(&mut self) -> Option<&'a T> {
		match (self.it1.peek(), self.it2.peek()) {
			(Some(v1), Some(v2)) => match self.order.compare(v1, v2) {
				Ordering::Equal => {
					self.it2.next();
					self.it1.next()
				}
				Ordering::Less => self.it1.next(),
				Ordering::Greater => self.it2.next(),
			},
			(Some(_), None) => self.it1.next(),
			(None, Some(_)) => self.it2.next(),
			(None, None) => None,
		}
	}
}

impl<'a, T, C: Slab<Node<T, ()>>, D: Slab<Node<T, ()>>, O: Order<T>> FusedIterator
	for Union<'a, T, C, D, O>
where
	C: SimpleCollectionRef,
	D: SimpleCollectionRef,
{
}

pub struct Intersection<'a, T, C, D: Slab<Node<T, ()>>, O>
where
	D: SimpleCollectionRef,
{
	order: &'a O,
	it1: Iter<'a, T, C, O>,
	it2: Peekable<Iter<'a, T, D, O>>,
}

impl<'a, T, C: Slab<Node<T, ()>>, D: Slab<Node<T, ()>>, O: Order<T>> Iterator
	for Intersection<'a, T, C, D, O>
where
	C: SimpleCollectionRef,
	D: SimpleCollectionRef,
{
	type Item = &'a T;

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		let len1 = self.it1.len();
		let len2 = self.it2.len();

		(0, Some(std::cmp::min(len1, len2)))
	}

	#[inline]
	fn next(&mut self) -> Option<&'a T> {
		loop {
			match self.it1.next() {
				Some(value) => {
					let keep = loop {
						match self.it2.peek() {
							Some(other) => match self.order.compare(value, other) {
								Ordering::Equal => break true,
								Ordering::Greater => {
									self.it2.next();
								}
								Ordering::Less => break false,
							},
							None => break false,
						}
					};

					if keep {
						break Some(value);
					}
				}
				None => break None,
			}
		}
	}
}

impl<'a, T, C: Slab<Node<T, ()>>, D: Slab<Node<T, ()>>, O: Order<T>> FusedIterator
	for Intersection<'a, T, C, D, O>
where
	C: SimpleCollectionRef,
	D: SimpleCollectionRef,
{
}

pub struct Difference<'a, T, C, D: Slab<Node<T, ()>>, O>
where
	D: SimpleCollectionRef,
{
	order: &'a O,
	it1: Iter<'a, T, C, O>,
	it2: Peekable<Iter<'a, T, D, O>>,
}

impl<'a, T, C: Slab<Node<T, ()>>, D: Slab<Node<T, ()>>, O: Order<T>> Iterator
	for Difference<'a, T, C, D, O>
where
	C: SimpleCollectionRef,
	D: SimpleCollectionRef,
{
	type Item = &'a T;

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		let len1 = self.it1.len();
		let len2 = self.it2.len();

		(len1.saturating_sub(len2), Some(len1))
	}

	#[inline]
	fn next(&mut self) -> Option<&'a T> {
		loop {
			match self.it1.next() {
				Some(value) => {
					let keep = loop {
						match self.it2.peek() {
							Some(other) => match self.order.compare(value, other) {
								Ordering::Equal => break false,
								Ordering::Greater => {
									self.it2.next();
								}
								Ordering::Less => break true,
							},
							None => break true,
						}
					};

					if keep {
						break Some(value);
					}
				}
				None => break None,
			}
		}
	}
}

impl<'a, T, C: Slab<Node<T, ()>>, D: Slab<Node<T, ()>>, O: Order<T>> FusedIterator
	for Difference<'a, T, C, D, O>
where
	C: SimpleCollectionRef,
	D: SimpleCollectionRef,
{
}

pub struct SymmetricDifference<'a, T, C: Slab<Node<T, ()>>, D: Slab<Node<T, ()>>, O>
where
	C: SimpleCollectionRef,
	D: SimpleCollectionRef,
{
	order: &'a O,
	it1: Peekable<Iter<'a, T, C, O>>,
	it2: Peekable<Iter<'a, T, D, O>>,
}

impl<'a, T, C: Slab<Node<T, ()>>, D: Slab<Node<T, ()>>, O: Order<T>> Iterator
	for SymmetricDifference<'a, T, C, D, O>
where
	C: SimpleCollectionRef,
	D: SimpleCollectionRef,
{
	type Item = &'a T;

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		let len1 = self.it1.len();
		let len2 = self.it2.len();

		(0, len1.checked_add(len2))
	}

	#[inline]
	fn next(&mut self) -> Option<&'a T> {
		loop {
			match (self.it1.peek(), self.it2.peek()) {
				(Some(v1), Some(v2)) => match self.order.compare(v1, v2) {
					Ordering::Equal => {
						self.it1.next();
						self.it2.next();
					}
					Ordering::Less => break self.it1.next(),
					Ordering::Greater => break self.it2.next(),
				},
				(Some(_), None) => break self.it1.next(),
				(None, Some(_)) => break self.it2.next(),
				(None, None) => break None,
			}
		}
	}
}

impl<'a, T, C: Slab<Node<T, ()>>, D: Slab<Node<T, ()>>, O: Order<T>> FusedIterator
	for SymmetricDifference<'a, T, C, D, O>
where
	C: SimpleCollectionRef,
	D: SimpleCollectionRef,
{
}

pub struct Range<'a, T, C, O> {
	inner: map::Range<'a, T, (), C, O>,
}

impl<'a, T, C: Slab<Node<T, ()>>, O> Iterator for Range<'a, T, C, O>
where
	C: SimpleCollectionRef,
{
	type Item = &'a T;

	#[inline]
	fn next(&mut self) -> Option<&'a T> {
		self.inner.next().map(|(k, _)| k)
	}
}

impl<'a, T, C: Slab<Node<T, ()>>, O> DoubleEndedIterator for Range<'a, T, C, O>
where
	C: SimpleCollectionRef,
{
	#[inline]
	fn next_back(&mut self) -> Option<&'a T> {
		self.inner.next_back().map(|(k, _)| k)
	}
}

impl<'a, T, C: Slab<Node<T, ()>>, O> FusedIterator for Range<'a, T, C, O> where
	C: SimpleCollectionRef
{
}

#[cfg(feature = "serde")]
mod serialization {
	use super::RbTreeSet;
	use crate::{generic::Node, order::Order};
	use cc_traits::{SimpleCollectionMut, SimpleCollectionRef, Slab, SlabMut};
	use serde::{
		de::{SeqAccess, Visitor},
		Deserialize, Deserializer, Serialize, Serializer,
	};
	use std::{fmt, marker::PhantomData};

	/// Sets are serialized as sorted sequences.
	impl<T: Serialize, C: Slab<Node<T, ()>>, O> Serialize for RbTreeSet<T, C, O>
	where
		C: SimpleCollectionRef,
	{
		fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
			serializer.collect_seq(self.iter())
		}
	}

	struct SetVisitor<T, C, O>(PhantomData<RbTreeSet<T, C, O>>);

	impl<'de, T, C: SlabMut<Node<T, ()>> + Default, O: Order<T> + Default> Visitor<'de>
		for SetVisitor<T, C, O>
	where
		T: Deserialize<'de>,
		C: SimpleCollectionRef,
		C: SimpleCollectionMut,
	{
		type Value = RbTreeSet<T, C, O>;

		fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
			write!(f, "a sequence")
		}

		fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
			let mut set = RbTreeSet::default();
			while let Some(value) = seq.next_element()? {
				set.insert(value);
			}

			Ok(set)
		}
	}

	impl<'de, T, C: SlabMut<Node<T, ()>> + Default, O: Order<T> + Default> Deserialize<'de>
		for RbTreeSet<T, C, O>
	where
		T: Deserialize<'de>,
		C: SimpleCollectionRef,
		C: SimpleCollectionMut,
	{
		fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
			deserializer.deserialize_seq(SetVisitor(PhantomData))
		}
	}
}
