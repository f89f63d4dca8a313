//! Last-in first-out adapter over sequence containers.
use cc_traits::{
	Back, BackMut, Collection, Len, PopBack, PushBack, SimpleCollectionMut, SimpleCollectionRef,
};
use std::{
	cmp::Ordering,
	fmt,
	hash::{Hash, Hasher},
	marker::PhantomData,
};

/// A stack built on top of any container that can be grown and shrunk at its back.
///
/// The top of the stack is the back of the container.
/// By default the container is a [`Vec`], but a [`VecDeque`](std::collections::VecDeque)
/// (or any type implementing the relevant [`cc_traits`]) can be used as well.
///
/// ```
/// use rbtree_slab::Stack;
///
/// let mut stack: Stack<i32> = Stack::new();
/// stack.push(1);
/// stack.push(2);
/// assert_eq!(stack.top(), Some(&2));
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.len(), 1);
/// ```
pub struct Stack<T, C = Vec<T>> {
	container: C,
	t: PhantomData<T>,
}

impl<T, C> Stack<T, C> {
	/// Creates an empty stack.
	#[inline]
	pub fn new() -> Self
	where
		C: Default,
	{
		Self::from_container(C::default())
	}

	/// Creates a stack whose content is the given container.
	///
	/// The last element of the container is the top of the stack.
	///
	/// ```
	/// use rbtree_slab::Stack;
	///
	/// let stack: Stack<i32> = Stack::from_container(vec![1, 2, 3]);
	/// assert_eq!(stack.top(), Some(&3));
	/// ```
	#[inline]
	pub fn from_container(container: C) -> Self {
		Stack {
			container,
			t: PhantomData,
		}
	}

	/// Returns the underlying container.
	#[inline]
	pub fn into_inner(self) -> C {
		self.container
	}

	#[inline]
	pub fn len(&self) -> usize
	where
		C: Len,
	{
		self.container.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool
	where
		C: Len,
	{
		self.container.is_empty()
	}

	/// Returns a reference to the top element, if any.
	#[inline]
	pub fn top(&self) -> Option<&T>
	where
		C: Collection<Item = T> + Back + SimpleCollectionRef,
	{
		self.container.back().map(C::into_ref)
	}

	/// Returns a mutable reference to the top element, if any.
	#[inline]
	pub fn top_mut(&mut self) -> Option<&mut T>
	where
		C: Collection<Item = T> + BackMut + SimpleCollectionMut,
	{
		self.container.back_mut().map(C::into_mut)
	}

	/// Pushes an element on top of the stack.
	#[inline]
	pub fn push(&mut self, value: T)
	where
		C: Collection<Item = T> + PushBack,
	{
		self.container.push_back(value);
	}

	/// Removes the top element and returns it, if any.
	#[inline]
	pub fn pop(&mut self) -> Option<T>
	where
		C: Collection<Item = T> + PopBack,
	{
		self.container.pop_back()
	}
}

impl<T, C: Default> Default for Stack<T, C> {
	#[inline]
	fn default() -> Self {
		Self::new()
	}
}

impl<T, C: Clone> Clone for Stack<T, C> {
	#[inline]
	fn clone(&self) -> Self {
		Self::from_container(self.container.clone())
	}
}

impl<T, C: fmt::Debug> fmt::Debug for Stack<T, C> {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_tuple("Stack").field(&self.container).finish()
	}
}

impl<T, C: PartialEq<D>, U, D> PartialEq<Stack<U, D>> for Stack<T, C> {
	#[inline]
	fn eq(&self, other: &Stack<U, D>) -> bool {
		self.container == other.container
	}
}

impl<T, C: Eq> Eq for Stack<T, C> {}

impl<T, C: PartialOrd<D>, U, D> PartialOrd<Stack<U, D>> for Stack<T, C> {
	#[inline]
	fn partial_cmp(&self, other: &Stack<U, D>) -> Option<Ordering> {
		self.container.partial_cmp(&other.container)
	}
}

impl<T, C: Ord> Ord for Stack<T, C> {
	#[inline]
	fn cmp(&self, other: &Self) -> Ordering {
		self.container.cmp(&other.container)
	}
}

impl<T, C: Hash> Hash for Stack<T, C> {
	#[inline]
	fn hash<H: Hasher>(&self, h: &mut H) {
		self.container.hash(h)
	}
}

impl<T, C: Default + Collection<Item = T> + PushBack> FromIterator<T> for Stack<T, C> {
	/// Pushes every element of the iterator in order, the last one ending on top.
	#[inline]
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		let mut stack = Stack::new();
		stack.extend(iter);
		stack
	}
}

impl<T, C: Collection<Item = T> + PushBack> Extend<T> for Stack<T, C> {
	#[inline]
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		for t in iter {
			self.push(t)
		}
	}
}
