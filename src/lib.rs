//! This crate provides ordered maps and sets built on top of a red-black tree whose nodes
//! are allocated in a slab-like container.
//!
//! Every node of the tree is stored in a single container (by default a [`slab::Slab`])
//! and nodes refer to each other by index.
//! This keeps the nodes close in memory, requires no `unsafe` pointer juggling to
//! maintain the parent links, and gives each element a stable [`Position`] that can be
//! used to navigate the tree or remove the element later on.
//!
//! ```
//! use rbtree_slab::RbTreeMap;
//!
//! let mut map = RbTreeMap::new();
//! for (i, word) in ["lorem", "ipsum", "dolor", "sit", "amet"].iter().enumerate() {
//!     map.insert(*word, i);
//! }
//!
//! assert!(map.keys().copied().eq(["amet", "dolor", "ipsum", "lorem", "sit"]));
//!
//! // step through the map from any position.
//! let pos = map.find("ipsum");
//! assert_eq!(map.key_value_at(map.next(pos)), Some((&"lorem", &0)));
//! ```
//!
//! Types of the [`generic`] module are independent of the node container, which can be any
//! type implementing the [`cc_traits::Slab`] family of traits.
//! The aliases defined at the root of this crate use [`slab::Slab`] and require the
//! `std-slab` feature (enabled by default).
//!
//! The crate also provides a [`Stack`] adapter over any sequence container.
//!
//! ## Features
//!
//!   - `std-slab` (default): [`slab::Slab`] backed aliases.
//!   - `serde`: serialization of maps and sets as sequences.
//!   - `dot`: Graphviz output of the tree structure with node colors.
#[cfg(feature = "slab")]
use slab::Slab;

mod error;
pub mod generic;
pub mod order;
pub mod stack;

pub use error::OutOfRange;
pub use generic::{Item, Position};
pub use order::{Natural, Order, Reverse};
pub use stack::Stack;

/// Red-black tree map based on `Slab`.
#[cfg(feature = "slab")]
pub type RbTreeMap<K, V, O = Natural> = generic::RbTreeMap<K, V, Slab<generic::Node<K, V>>, O>;

/// Red-black tree set based on `Slab`.
#[cfg(feature = "slab")]
pub type RbTreeSet<T, O = Natural> = generic::RbTreeSet<T, Slab<generic::Node<T, ()>>, O>;

/// Red-black tree based on `Slab`.
#[cfg(feature = "slab")]
pub type RbTree<K, V, O = Natural> = generic::RbTree<K, V, Slab<generic::Node<K, V>>, O>;
