//! Orderings used to sort the keys of a tree.
//!
//! An order is given to a tree when it is created and never changes afterward.
//! It must be a strict weak order: two keys are considered equivalent when neither is
//! ordered before the other, and a tree never stores two equivalent keys.
use std::cmp::Ordering;

/// Strict weak order over keys of type `K`.
///
/// This trait is implemented by [`Natural`], [`Reverse`] and by any closure
/// `Fn(&K, &K) -> Ordering`.
///
/// ```
/// use rbtree_slab::RbTreeSet;
///
/// let mut set = RbTreeSet::with_order(|a: &i32, b: &i32| b.abs().cmp(&a.abs()));
/// set.insert(1);
/// set.insert(-3);
/// set.insert(2);
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), [-3, 2, 1]);
/// ```
pub trait Order<K: ?Sized> {
	fn compare(&self, a: &K, b: &K) -> Ordering;

	#[inline]
	fn less(&self, a: &K, b: &K) -> bool {
		self.compare(a, b) == Ordering::Less
	}
}

/// The order given by the [`Ord`] implementation of the keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<K: Ord + ?Sized> Order<K> for Natural {
	#[inline]
	fn compare(&self, a: &K, b: &K) -> Ordering {
		a.cmp(b)
	}
}

/// The reverse of the [`Ord`] implementation of the keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Reverse;

impl<K: Ord + ?Sized> Order<K> for Reverse {
	#[inline]
	fn compare(&self, a: &K, b: &K) -> Ordering {
		b.cmp(a)
	}
}

impl<K: ?Sized, F> Order<K> for F
where
	F: Fn(&K, &K) -> Ordering,
{
	#[inline]
	fn compare(&self, a: &K, b: &K) -> Ordering {
		self(a, b)
	}
}
