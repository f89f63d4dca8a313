use pretty_assertions::assert_eq;
use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};
use rbtree_slab::{Position, RbTreeMap};
use std::{
	cell::Cell,
	panic::{self, AssertUnwindSafe},
	rc::Rc,
};

const SEED: &[u8; 32] = b"testseedtestseedtestseedtestseed";

fn items(len: usize) -> Vec<(usize, usize)> {
	let mut rng = SmallRng::from_seed(*SEED);
	let mut keys: Vec<usize> = (0..len).collect();
	keys.shuffle(&mut rng);
	keys.into_iter().map(|k| (k, 10000 - k)).collect()
}

fn keys<V>(map: &RbTreeMap<usize, V>) -> Vec<usize> {
	map.keys().copied().collect()
}

#[test]
pub fn insert() {
	let mut map: RbTreeMap<usize, usize> = RbTreeMap::new();

	for (i, (key, value)) in items(100).into_iter().enumerate() {
		let (pos, inserted) = map.insert(key, value);
		assert!(inserted);
		assert_eq!(map.key_value_at(pos), Some((&key, &value)));
		assert_eq!(map.len(), i + 1);
		map.validate();
	}

	assert_eq!(keys(&map), (0..100).collect::<Vec<_>>());
}

#[test]
pub fn remove() {
	let mut map: RbTreeMap<usize, usize> = RbTreeMap::new();

	let mut items = items(100);
	for (key, value) in &items {
		map.insert(*key, *value);
	}

	let mut rng = SmallRng::from_seed(*SEED);
	items.shuffle(&mut rng);

	for (i, (key, value)) in items.iter().enumerate() {
		assert_eq!(map.remove(key), Some(*value));
		assert_eq!(map.remove(key), None);
		assert_eq!(map.len(), 99 - i);
		map.validate();
	}

	assert!(map.is_empty());
	assert_eq!(map.begin(), map.end());
}

#[test]
pub fn insert_and_remove_random() {
	let mut rng = SmallRng::from_seed(*SEED);
	let mut map: RbTreeMap<usize, usize> = RbTreeMap::new();
	let mut expected = std::collections::BTreeMap::new();

	for round in 0..10 {
		let mut keys: Vec<usize> = (0..200).collect();
		keys.shuffle(&mut rng);

		for &key in &keys[..100] {
			let inserted = map.insert(key, round).1;
			assert_eq!(inserted, !expected.contains_key(&key));
			expected.entry(key).or_insert(round);
			map.validate();
		}

		keys.shuffle(&mut rng);
		for &key in &keys[..80] {
			assert_eq!(map.remove(&key), expected.remove(&key));
			map.validate();
		}

		assert_eq!(map.len(), expected.len());
		assert!(map.iter().eq(expected.iter()));
	}
}

#[test]
pub fn scenario() {
	let mut map: RbTreeMap<i32, ()> = RbTreeMap::new();
	for key in [10, 20, 5, 15, 25] {
		map.insert(key, ());
	}

	assert_eq!(map.keys().copied().collect::<Vec<_>>(), [5, 10, 15, 20, 25]);
	let root = map.as_tree().root_id().unwrap();
	assert!(!map.as_tree().node(root).is_red());
	map.validate();

	assert_eq!(map.remove(&20), Some(()));
	assert_eq!(map.keys().copied().collect::<Vec<_>>(), [5, 10, 15, 25]);
	map.validate();
}

#[test]
pub fn ascending_insertions_stay_balanced() {
	let mut map: RbTreeMap<i32, ()> = RbTreeMap::new();
	for key in 1..=7 {
		map.insert(key, ());
		map.validate();
	}

	assert!(map.as_tree().height() <= 6);

	let mut map: RbTreeMap<usize, ()> = RbTreeMap::new();
	for key in 0..1023 {
		map.insert(key, ());
	}

	// 2 * log2(n + 1)
	assert!(map.as_tree().height() <= 20);
}

#[test]
pub fn duplicates() {
	let mut map: RbTreeMap<usize, &str> = RbTreeMap::new();
	for (key, _) in items(20) {
		map.insert(key, "first");
	}

	let before: Vec<_> = map.iter().map(|(k, v)| (*k, *v)).collect();
	for (key, _) in items(20) {
		let (pos, inserted) = map.insert(key, "second");
		assert!(!inserted);
		assert_eq!(map.key_value_at(pos), Some((&key, &"first")));
	}

	let after: Vec<_> = map.iter().map(|(k, v)| (*k, *v)).collect();
	assert_eq!(before, after);
	assert_eq!(map.len(), 20);
}

#[test]
pub fn find_and_remove_at() {
	let mut map: RbTreeMap<usize, usize> = items(50).into_iter().collect();

	for (key, value) in items(50) {
		let len = map.len();
		let pos = map.find(&key);
		assert_eq!(map.remove_at(pos), (key, value));
		assert_eq!(map.find(&key), map.end());
		assert_eq!(map.len(), len - 1);
		map.validate();
	}
}

#[test]
pub fn traversal() {
	let map: RbTreeMap<usize, usize> = items(100).into_iter().collect();

	let mut pos = map.begin();
	for _ in 0..map.len() {
		assert!(!pos.is_end());
		pos = map.next(pos);
	}
	assert_eq!(pos, map.end());
	assert_eq!(map.next(pos), map.end());

	let mut pos = map.rbegin();
	for _ in 0..map.len() {
		assert!(!pos.is_end());
		pos = map.prev(pos);
	}
	assert_eq!(pos, map.rend());
}

#[test]
pub fn positions() {
	let map: RbTreeMap<usize, usize> = items(100).into_iter().collect();

	for (key, _) in items(100) {
		let pos = map.find(&key);

		let before = map.prev(pos);
		if !before.is_end() {
			assert!(before != pos);
			assert_eq!(map.key_value_at(before).map(|(k, _)| *k), Some(key - 1));
			assert_eq!(map.next(before), pos)
		}

		let after = map.next(pos);
		if !after.is_end() {
			assert!(after != pos);
			assert_eq!(map.prev(after), pos)
		}
	}
}

#[test]
pub fn positions_are_stable() {
	let mut map: RbTreeMap<usize, usize> = RbTreeMap::new();
	let positions: Vec<(usize, Position)> = items(100)
		.into_iter()
		.map(|(key, value)| (key, map.insert(key, value).0))
		.collect();

	for (key, _) in &positions {
		if key % 3 == 0 {
			map.remove(key);
		}
	}

	for (key, pos) in positions {
		if key % 3 != 0 {
			assert_eq!(map.key_value_at(pos).map(|(k, _)| *k), Some(key));
		}
	}
}

#[test]
pub fn hinted_insertion() {
	let mut map: RbTreeMap<usize, ()> = RbTreeMap::new();

	// Ascending keys, hinted with the end position.
	for key in 0..100 {
		let end = map.end();
		map.insert_hint(end, key * 2, ());
		map.validate();
	}

	// Odd keys, hinted with their predecessor.
	for key in (0..100).rev() {
		let hint = map.find(&(key * 2));
		let pos = map.insert_hint(hint, key * 2 + 1, ());
		assert_eq!(map.prev(pos), hint);
		map.validate();
	}

	// Wrong hints still insert at the right place.
	let mut other: RbTreeMap<usize, ()> = RbTreeMap::new();
	for (key, _) in items(100) {
		let hint = other.begin();
		other.insert_hint(hint, key, ());
		other.validate();
	}

	assert_eq!(keys(&map), (0..200).collect::<Vec<_>>());
	assert_eq!(keys(&other), (0..100).collect::<Vec<_>>());

	// Existing keys are not duplicated.
	let hint = map.begin();
	let pos = map.insert_hint(hint, 42, ());
	assert_eq!(pos, map.find(&42));
	assert_eq!(map.len(), 200);
}

#[test]
pub fn remove_range() {
	let mut map: RbTreeMap<usize, usize> = items(100).into_iter().collect();

	let first = map.find(&10);
	let last = map.find(&90);
	assert_eq!(map.remove_range(first, last), 80);
	map.validate();
	assert_eq!(
		keys(&map),
		(0..10).chain(90..100).collect::<Vec<_>>()
	);

	let (begin, end) = (map.begin(), map.end());
	assert_eq!(map.remove_range(begin, end), 20);
	assert!(map.is_empty());
}

#[test]
pub fn copy_is_independent() {
	let mut original: RbTreeMap<usize, usize> = items(100).into_iter().collect();
	let mut copy = original.clone();
	copy.validate();
	assert_eq!(copy, original);

	copy.insert(1000, 0);
	copy.remove(&5);
	assert_eq!(original.len(), 100);
	assert_eq!(keys(&original), (0..100).collect::<Vec<_>>());

	original.remove(&6);
	assert!(copy.contains_key(&6));
	assert_eq!(copy.len(), 100);
}

/// A key whose `Clone` panics once its shared budget is spent.
struct Fragile {
	key: usize,
	budget: Rc<Cell<usize>>,
}

impl Clone for Fragile {
	fn clone(&self) -> Self {
		let left = self.budget.get();
		if left == 0 {
			panic!("clone budget exhausted")
		}
		self.budget.set(left - 1);
		Fragile {
			key: self.key,
			budget: self.budget.clone(),
		}
	}
}

impl PartialEq for Fragile {
	fn eq(&self, other: &Self) -> bool {
		self.key == other.key
	}
}

impl Eq for Fragile {}

impl PartialOrd for Fragile {
	fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Fragile {
	fn cmp(&self, other: &Self) -> std::cmp::Ordering {
		self.key.cmp(&other.key)
	}
}

#[test]
pub fn failed_copy_leaves_source_intact() {
	let budget = Rc::new(Cell::new(usize::MAX));
	let mut map: RbTreeMap<Fragile, usize> = RbTreeMap::new();
	for (k, v) in items(50) {
		map.insert(
			Fragile {
				key: k,
				budget: budget.clone(),
			},
			v,
		);
	}

	budget.set(20);
	let result = panic::catch_unwind(AssertUnwindSafe(|| map.clone()));
	assert!(result.is_err());

	map.validate();
	assert_eq!(map.len(), 50);
	assert_eq!(
		map.keys().map(|k| k.key).collect::<Vec<_>>(),
		(0..50).collect::<Vec<_>>()
	);
	assert_eq!(map.iter().map(|(k, v)| k.key + v).collect::<Vec<_>>(), [10000; 50]);

	budget.set(usize::MAX);
	let copy = map.clone();
	copy.validate();
	assert_eq!(copy.len(), 50);
}

#[test]
pub fn clear_and_swap() {
	let mut a: RbTreeMap<usize, usize> = items(30).into_iter().collect();
	let mut b: RbTreeMap<usize, usize> = RbTreeMap::new();
	b.insert(7, 7);

	a.swap(&mut b);
	assert_eq!(a.len(), 1);
	assert_eq!(b.len(), 30);
	a.validate();
	b.validate();

	b.clear();
	assert!(b.is_empty());
	assert_eq!(b.begin(), b.end());
	b.insert(3, 3);
	b.validate();
	assert_eq!(keys(&b), [3]);
}

#[test]
pub fn update() {
	let mut map: RbTreeMap<usize, usize> = RbTreeMap::new();

	for (key, value) in items(100) {
		if key % 2 == 0 {
			map.insert(key, value);
		}
	}

	for (key, value) in items(100) {
		match map.get_mut(&key) {
			Some(current) => *current = 0,
			None => {
				assert_eq!(map.replace(key, value), None);
			}
		}
		map.validate();
	}

	for (key, value) in map.iter() {
		if key % 2 == 0 {
			assert_eq!(*value, 0)
		} else {
			assert_eq!(*value, 10000 - key)
		}
	}
}
