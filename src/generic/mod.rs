//! Generic red-black tree types.
//!
//! Types defined in this modules are independant of the actual storage type.
pub mod node;
pub use node::{Item, Node, Position};

pub mod tree;
pub use tree::RbTree;

pub mod map;
pub use map::RbTreeMap;

pub mod set;
pub use set::RbTreeSet;
