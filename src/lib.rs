//! Ordered sets of unique keys backed by a red-black tree, plus a random
//! workload harness for exercising them (feature `rand`).

mod compare;
pub mod tree;

#[cfg(feature = "rand")]
pub mod rand;

pub use compare::{Comparator, Natural};
pub use tree::{CursorMut, IntoIter, InvariantViolation, Iter, RbSet};
