use pretty_assertions::assert_eq;
use rbtree_slab::RbTreeMap;
use std::{cell::Cell, rc::Rc};

#[test]
pub fn iter() {
	let mut map = RbTreeMap::new();
	for i in (0..10).rev() {
		map.insert(i, i);
	}

	let mut i = 0;
	for (key, value) in &map {
		assert_eq!(*key, i);
		assert_eq!(*value, i);
		i += 1;
	}

	assert_eq!(i, 10)
}

#[test]
pub fn iter_both_ends() {
	let map: RbTreeMap<i32, i32> = (0..10).map(|i| (i, -i)).collect();

	let mut it = map.iter();
	assert_eq!(it.len(), 10);
	assert_eq!(it.next(), Some((&0, &0)));
	assert_eq!(it.next_back(), Some((&9, &-9)));
	assert_eq!(it.len(), 8);

	let middle: Vec<_> = it.by_ref().map(|(k, _)| *k).collect();
	assert_eq!(middle, [1, 2, 3, 4, 5, 6, 7, 8]);
	assert_eq!(it.next(), None);
	assert_eq!(it.next_back(), None);

	let reversed: Vec<_> = map.keys().rev().copied().collect();
	assert_eq!(reversed, (0..10).rev().collect::<Vec<_>>());
}

#[test]
pub fn iter_mut() {
	let mut map: RbTreeMap<i32, i32> = (0..10).map(|i| (i, i)).collect();

	for (key, value) in &mut map {
		*value += key * 10;
	}

	for value in map.values_mut().rev() {
		*value += 1;
	}

	assert_eq!(
		map.values().copied().collect::<Vec<_>>(),
		(0..10).map(|i| i * 11 + 1).collect::<Vec<_>>()
	);
}

#[test]
pub fn into_iter() {
	struct Element {
		/// Drop counter.
		counter: Rc<Cell<usize>>,
		value: i32,
	}

	impl Element {
		pub fn new(counter: &Rc<Cell<usize>>, value: i32) -> Self {
			Element {
				counter: counter.clone(),
				value,
			}
		}

		pub fn inner(&self) -> i32 {
			self.value
		}
	}

	impl Drop for Element {
		fn drop(&mut self) {
			let c = self.counter.get();
			self.counter.set(c + 1);
		}
	}

	let counter = Rc::new(Cell::new(0));
	let mut map = RbTreeMap::new();
	for i in 0..100 {
		map.insert(i, Element::new(&counter, i));
	}

	for (key, value) in map {
		assert_eq!(key, value.inner());
	}

	assert_eq!(counter.get(), 100);

	// Partially consumed iterators drop the remaining elements.
	let counter = Rc::new(Cell::new(0));
	let mut map = RbTreeMap::new();
	for i in 0..100 {
		map.insert(i, Element::new(&counter, i));
	}

	let mut it = map.into_iter();
	assert_eq!(it.next().map(|(k, _)| k), Some(0));
	assert_eq!(it.next_back().map(|(k, _)| k), Some(99));
	assert_eq!(it.len(), 98);
	std::mem::drop(it);

	assert_eq!(counter.get(), 100);
}

#[test]
pub fn into_keys_and_values() {
	let map: RbTreeMap<i32, char> = [(2, 'b'), (3, 'c'), (1, 'a')].into_iter().collect();
	assert_eq!(map.clone().into_keys().collect::<Vec<_>>(), [1, 2, 3]);
	assert_eq!(map.into_values().rev().collect::<String>(), "cba");
}

#[test]
pub fn cursor() {
	let mut map: RbTreeMap<i32, i32> = (0..10).map(|i| (i, i)).collect();

	let mut cursor = map.cursor(map.find(&4));
	cursor.move_prev();
	assert_eq!(cursor.key(), Some(&3));
	cursor.move_next();
	cursor.move_next();
	assert_eq!(cursor.value(), Some(&5));

	let begin = map.begin();
	let mut cursor = map.cursor_mut(begin);
	while !cursor.is_end() {
		if cursor.key().copied().unwrap_or(0) % 3 == 0 {
			cursor.remove_current();
		} else {
			*cursor.value_mut().unwrap() *= 100;
			cursor.move_next();
		}
	}

	map.validate();
	assert_eq!(
		map.iter().map(|(k, v)| (*k, *v)).collect::<Vec<_>>(),
		[(1, 100), (2, 200), (4, 400), (5, 500), (7, 700), (8, 800)]
	);
}
