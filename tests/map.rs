use pretty_assertions::assert_eq;
use rbtree_slab::{generic::map::Entry, OutOfRange, RbTreeMap};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash<T: Hash>(t: &T) -> u64 {
	let mut h = DefaultHasher::new();
	t.hash(&mut h);
	h.finish()
}

#[test]
fn checked_lookup() {
	let mut map: RbTreeMap<&str, i32> = RbTreeMap::new();
	map.insert("a", 1);

	assert_eq!(map.at("a"), Ok(&1));
	assert_eq!(map.at("b"), Err(OutOfRange));
	assert_eq!(OutOfRange.to_string(), "no entry found for key");

	*map.at_mut("a").unwrap() += 1;
	assert_eq!(map["a"], 2);
	assert!(map.at_mut("b").is_err());
}

#[test]
#[should_panic(expected = "no entry found for key")]
fn index_missing_key() {
	let map: RbTreeMap<i32, i32> = RbTreeMap::new();
	let _ = map[&0];
}

#[test]
fn subscript_with_default() {
	let mut map: RbTreeMap<char, usize> = RbTreeMap::new();
	for c in "abracadabra".chars() {
		*map.get_or_insert_default(c) += 1;
	}

	map.validate();
	assert_eq!(
		map.iter().map(|(k, v)| (*k, *v)).collect::<Vec<_>>(),
		[('a', 5), ('b', 2), ('c', 1), ('d', 1), ('r', 2)]
	);
}

#[test]
fn entries() {
	let mut map: RbTreeMap<i32, Vec<i32>> = RbTreeMap::new();
	for i in 0..50 {
		map.entry(i % 7).or_default().push(i);
		map.validate();
	}

	assert_eq!(map.len(), 7);
	assert_eq!(map[&3], [3, 10, 17, 24, 31, 38, 45]);

	match map.entry(3) {
		Entry::Occupied(entry) => {
			assert_eq!(entry.key(), &3);
			let (key, values) = entry.remove_entry();
			assert_eq!(key, 3);
			assert_eq!(values.len(), 7);
		}
		Entry::Vacant(_) => panic!("entry should be occupied"),
	}

	map.validate();
	assert!(matches!(map.entry(3), Entry::Vacant(_)));
	map.entry(3).or_insert_with(Vec::new).push(-1);
	assert_eq!(map[&3], [-1]);
	map.validate();
}

#[test]
fn replace_keeps_position() {
	let mut map: RbTreeMap<i32, &str> = RbTreeMap::new();
	let (pos, _) = map.insert(1, "a");
	assert_eq!(map.replace(1, "b"), Some("a"));
	assert_eq!(map.replace(2, "c"), None);
	assert_eq!(map.key_value_at(pos), Some((&1, &"b")));
}

#[test]
fn collect_keeps_last_value() {
	let map: RbTreeMap<i32, char> = [(1, 'a'), (2, 'b'), (1, 'c')].into_iter().collect();
	assert_eq!(map.len(), 2);
	assert_eq!(map[&1], 'c');
}

#[test]
fn bounds() {
	let map: RbTreeMap<i32, ()> = [10, 20, 30].into_iter().map(|k| (k, ())).collect();
	let key_at = |pos| map.key_value_at(pos).map(|(k, _)| *k);

	assert_eq!(key_at(map.lower_bound(&20)), Some(20));
	assert_eq!(key_at(map.upper_bound(&20)), Some(30));
	assert_eq!(key_at(map.lower_bound(&11)), Some(20));
	assert_eq!(key_at(map.upper_bound(&0)), Some(10));
	assert_eq!(map.upper_bound(&30), map.end());

	let (lo, hi) = map.equal_range(&20);
	assert_eq!(map.next(lo), hi);
	let (lo, hi) = map.equal_range(&25);
	assert_eq!(lo, hi);

	assert_eq!(map.count(&10), 1);
	assert_eq!(map.count(&11), 0);
}

#[test]
fn pop_and_retain() {
	let mut map: RbTreeMap<i32, i32> = (0..20).map(|i| (i, i * i)).collect();

	assert_eq!(map.pop_first(), Some((0, 0)));
	assert_eq!(map.pop_last(), Some((19, 361)));
	map.retain(|k, v| {
		*v += 1;
		k % 2 == 0
	});

	map.validate();
	assert_eq!(map.keys().copied().collect::<Vec<_>>(), [2, 4, 6, 8, 10, 12, 14, 16, 18]);
	assert_eq!(map.first_key_value(), Some((&2, &5)));
	assert_eq!(map.last_key_value(), Some((&18, &325)));
}

#[test]
fn append() {
	let mut a: RbTreeMap<i32, &str> = (0..10).map(|i| (i * 2, "a")).collect();
	let mut b: RbTreeMap<i32, &str> = (0..10).map(|i| (i * 3, "b")).collect();

	a.append(&mut b);
	a.validate();
	assert!(b.is_empty());
	assert_eq!(a.len(), 16);
	assert_eq!(a[&6], "b");
	assert_eq!(a[&4], "a");
	assert_eq!(a[&27], "b");
}

#[test]
fn comparisons() {
	let a: RbTreeMap<i32, i32> = (0..5).map(|i| (i, i)).collect();
	let b: RbTreeMap<i32, i32> = (0..5).rev().map(|i| (i, i)).collect();
	let c: RbTreeMap<i32, i32> = (0..6).map(|i| (i, i)).collect();

	assert_eq!(a, b);
	assert_eq!(hash(&a), hash(&b));
	assert!(a < c);
	assert_eq!(a.cmp(&c), std::cmp::Ordering::Less);
	assert_eq!(format!("{:?}", a), "{0: 0, 1: 1, 2: 2, 3: 3, 4: 4}");
}

#[test]
fn custom_order() {
	let mut map = RbTreeMap::with_order(|a: &String, b: &String| {
		a.len().cmp(&b.len()).then_with(|| a.cmp(b))
	});

	for word in ["pear", "fig", "banana", "kiwi", "apple"] {
		map.insert(word.to_string(), word.len());
	}

	map.validate();
	assert_eq!(
		map.keys().map(String::as_str).collect::<Vec<_>>(),
		["fig", "kiwi", "pear", "apple", "banana"]
	);
	assert_eq!(map.get(&"kiwi".to_string()), Some(&4));
}
