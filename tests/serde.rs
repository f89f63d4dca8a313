#![cfg(feature = "serde")]
use pretty_assertions::assert_eq;
use rbtree_slab::{RbTreeMap, RbTreeSet};

#[test]
fn map_round_trip() {
	let map: RbTreeMap<String, u32> = [("b", 2), ("a", 1), ("c", 3)]
		.into_iter()
		.map(|(k, v)| (k.to_string(), v))
		.collect();

	let json = serde_json::to_string(&map).unwrap();
	assert_eq!(json, r#"[["a",1],["b",2],["c",3]]"#);

	let back: RbTreeMap<String, u32> = serde_json::from_str(&json).unwrap();
	back.validate();
	assert_eq!(back, map);
}

#[test]
fn set_round_trip() {
	let set: RbTreeSet<i32> = [5, -1, 3].into_iter().collect();

	let json = serde_json::to_string(&set).unwrap();
	assert_eq!(json, "[-1,3,5]");

	let back: RbTreeSet<i32> = serde_json::from_str("[5,3,-1,3]").unwrap();
	back.validate();
	assert_eq!(back, set);
}
