use std::{cmp::Ordering, fmt};

/// Key-value pair stored in a tree node.
///
/// The key of an item is never modified once the item is in a tree,
/// only its value can be accessed mutably.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item<K, V> {
	key: K,
	value: V,
}

impl<K, V> Item<K, V> {
	#[inline]
	pub fn new(key: K, value: V) -> Item<K, V> {
		Item { key, value }
	}

	#[inline]
	pub fn key(&self) -> &K {
		&self.key
	}

	#[inline]
	pub fn value(&self) -> &V {
		&self.value
	}

	#[inline]
	pub fn value_mut(&mut self) -> &mut V {
		&mut self.value
	}

	/// Replace the value of the item and return the previous one.
	#[inline]
	pub fn set_value(&mut self, value: V) -> V {
		std::mem::replace(&mut self.value, value)
	}

	/// Replace the key of the item and return the previous one.
	///
	/// The new key must be equivalent to the old one under the order of the
	/// tree holding the item.
	#[inline]
	pub fn set_key(&mut self, key: K) -> K {
		std::mem::replace(&mut self.key, key)
	}

	#[inline]
	pub fn as_pair(&self) -> (&K, &V) {
		(&self.key, &self.value)
	}

	#[inline]
	pub fn as_pair_mut(&mut self) -> (&K, &mut V) {
		(&self.key, &mut self.value)
	}

	#[inline]
	pub fn into_key(self) -> K {
		self.key
	}

	#[inline]
	pub fn into_value(self) -> V {
		self.value
	}

	#[inline]
	pub fn into_pair(self) -> (K, V) {
		(self.key, self.value)
	}
}

impl<K, V> From<(K, V)> for Item<K, V> {
	#[inline]
	fn from((key, value): (K, V)) -> Self {
		Item::new(key, value)
	}
}

/// Items compare lexicographically, first by key then by value.
impl<K: PartialOrd, V: PartialOrd> PartialOrd for Item<K, V> {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		match self.key.partial_cmp(&other.key) {
			Some(Ordering::Equal) => self.value.partial_cmp(&other.value),
			ord => ord,
		}
	}
}

impl<K: Ord, V: Ord> Ord for Item<K, V> {
	fn cmp(&self, other: &Self) -> Ordering {
		self.key
			.cmp(&other.key)
			.then_with(|| self.value.cmp(&other.value))
	}
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Item<K, V> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{:?}: {:?}", self.key, self.value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lexicographic_order() {
		assert!(Item::new(1, 'b') < Item::new(2, 'a'));
		assert!(Item::new(1, 'a') < Item::new(1, 'b'));
		assert_eq!(Item::new(1, 'a'), Item::from((1, 'a')));
	}

	#[test]
	fn replace_value() {
		let mut item = Item::new("key", 1);
		assert_eq!(item.set_value(2), 1);
		*item.value_mut() += 1;
		assert_eq!(item.set_key("other"), "key");
		assert_eq!(item.into_pair(), ("other", 3));
	}
}
