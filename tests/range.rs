use pretty_assertions::assert_eq;
use rbtree_slab::{RbTreeMap, Reverse};
use std::ops::{
	Bound::{self, Excluded, Included, Unbounded},
	RangeBounds,
};

fn range_keys(map: &RbTreeMap<i32, i32>, range: impl RangeBounds<i32>) -> Vec<i32> {
	map.range(range)
		.map(|(&k, &v)| {
			assert_eq!(k, v);
			k
		})
		.collect()
}

#[test]
fn range_small() {
	let size = 4;

	let all: Vec<i32> = (1..=size).collect();
	let (first, last) = (vec![all[0]], vec![all[size as usize - 1]]);
	let map: RbTreeMap<i32, i32> = all.iter().copied().map(|i| (i, i)).collect();

	assert_eq!(range_keys(&map, (Excluded(0), Excluded(size + 1))), all);
	assert_eq!(range_keys(&map, (Excluded(0), Included(size))), all);
	assert_eq!(range_keys(&map, (Included(0), Unbounded)), all);
	assert_eq!(range_keys(&map, (Included(1), Included(size))), all);
	assert_eq!(range_keys(&map, (Unbounded, Excluded(size + 1))), all);
	assert_eq!(range_keys(&map, ..), all);

	assert_eq!(range_keys(&map, (Excluded(0), Excluded(1))), vec![]);
	assert_eq!(range_keys(&map, (Included(0), Included(0))), vec![]);
	assert_eq!(range_keys(&map, (Unbounded, Excluded(1))), vec![]);
	assert_eq!(range_keys(&map, (Excluded(0), Included(1))), first);
	assert_eq!(range_keys(&map, (Included(1), Included(1))), first);
	assert_eq!(range_keys(&map, (Unbounded, Excluded(2))), first);
	assert_eq!(range_keys(&map, (Excluded(size - 1), Unbounded)), last);
	assert_eq!(range_keys(&map, (Included(size), Included(size))), last);
	assert_eq!(range_keys(&map, (Excluded(size), Unbounded)), vec![]);
	assert_eq!(range_keys(&map, (Included(size + 1), Unbounded)), vec![]);

	assert_eq!(range_keys(&map, 2..4), [2, 3]);
	assert_eq!(range_keys(&map, -1..=2), [1, 2]);
}

#[test]
fn range_both_ends() {
	let map: RbTreeMap<i32, i32> = (0..20).map(|i| (i, i)).collect();

	let mut range = map.range(5..15);
	assert_eq!(range.next(), Some((&5, &5)));
	assert_eq!(range.next_back(), Some((&14, &14)));
	assert_eq!(range.next_back(), Some((&13, &13)));

	let rest: Vec<i32> = range.by_ref().map(|(k, _)| *k).collect();
	assert_eq!(rest, (6..13).collect::<Vec<_>>());
	assert_eq!(range.next(), None);
	assert_eq!(range.next_back(), None);
}

#[test]
fn range_inclusive_max_value() {
	let max = usize::MAX;
	let mut map = RbTreeMap::new();
	map.insert(max, 0);
	assert_eq!(map.range(max..=max).collect::<Vec<_>>(), [(&max, &0)]);
}

#[test]
fn range_equal_empty_cases() {
	let map: RbTreeMap<i32, i32> = (0..5).map(|i| (i, i)).collect();
	assert_eq!(map.range((Included(2), Excluded(2))).next(), None);
	assert_eq!(map.range((Excluded(2), Included(2))).next(), None);
}

#[test]
fn range_1000() {
	let size = 1000;
	let map: RbTreeMap<u32, u32> = (0..size).map(|i| (i, i)).collect();

	fn test(map: &RbTreeMap<u32, u32>, size: u32, min: Bound<&u32>, max: Bound<&u32>) {
		let mut kvs = map.range((min, max)).map(|(&k, &v)| (k, v));
		let mut pairs = (0..size).map(|i| (i, i));

		for (kv, pair) in kvs.by_ref().zip(pairs.by_ref()) {
			assert_eq!(kv, pair);
		}
		assert_eq!(kvs.next(), None);
		assert_eq!(pairs.next(), None);
	}
	test(&map, size, Included(&0), Excluded(&size));
	test(&map, size, Unbounded, Excluded(&size));
	test(&map, size, Included(&0), Included(&(size - 1)));
	test(&map, size, Unbounded, Included(&(size - 1)));
	test(&map, size, Included(&0), Unbounded);
	test(&map, size, Unbounded, Unbounded);
}

#[test]
fn range_borrowed_key() {
	let mut map = RbTreeMap::new();
	map.insert("aardvark".to_string(), 1);
	map.insert("baboon".to_string(), 2);
	map.insert("coyote".to_string(), 3);
	map.insert("dingo".to_string(), 4);

	let mut iter = map.range::<str, _>((Included("b"), Excluded("d")));
	assert_eq!(iter.next(), Some((&"baboon".to_string(), &2)));
	assert_eq!(iter.next(), Some((&"coyote".to_string(), &3)));
	assert_eq!(iter.next(), None);
}

#[test]
fn range_all_pairs() {
	let size = 100;
	let map: RbTreeMap<i32, i32> = (0..size).map(|i| (i, i)).collect();

	for i in 0..size {
		for j in i..size {
			let mut kvs = map
				.range((Included(&i), Included(&j)))
				.map(|(&k, &v)| (k, v));
			let mut pairs = (i..=j).map(|i| (i, i));

			for (kv, pair) in kvs.by_ref().zip(pairs.by_ref()) {
				assert_eq!(kv, pair);
			}
			assert_eq!(kvs.next(), None);
			assert_eq!(pairs.next(), None);
		}
	}
}

#[test]
fn range_with_custom_order() {
	let mut map = RbTreeMap::with_order(Reverse);
	for i in 0..10 {
		map.insert(i, i);
	}

	// Bounds follow the map order: 7 comes before 3.
	let keys: Vec<i32> = map.range((Included(7), Excluded(3))).map(|(k, _)| *k).collect();
	assert_eq!(keys, [7, 6, 5, 4]);
}

#[should_panic]
#[test]
fn range_panic_backwards() {
	let mut map = RbTreeMap::new();
	map.insert(3, "a");
	map.insert(5, "b");
	map.insert(8, "c");

	let _invalid_range = map.range((Included(&8), Included(&3)));
}

#[should_panic]
#[test]
fn range_panic_equal_excluded() {
	let mut map = RbTreeMap::new();
	map.insert(3, "a");
	map.insert(5, "b");
	map.insert(8, "c");

	let _invalid_range = map.range((Excluded(&5), Excluded(&5)));
}

#[should_panic]
#[test]
fn range_panic_backwards_excluded() {
	let map: RbTreeMap<i32, i32> = (0..5).map(|i| (i, i)).collect();
	let _ = map.range((Excluded(3), Included(2)));
}
