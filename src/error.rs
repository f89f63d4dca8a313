use std::fmt;

/// Error returned by the checked lookups of [`RbTreeMap`](crate::generic::RbTreeMap)
/// when the requested key is not in the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OutOfRange;

impl fmt::Display for OutOfRange {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "no entry found for key")
	}
}

impl std::error::Error for OutOfRange {}
