//! An ordered set backed by a red-black tree.
//!
//! Nodes live in an arena owned by the set and refer to each other by
//! index. Slot 0 of every arena is a black, keyless sentinel standing in for
//! every missing child and for the parent of the root.

mod balance;
mod check;
mod iter;
mod node;

use std::fmt::Debug;

use log::debug;

use crate::compare::{Comparator, Natural};
use node::{Handle, Node, Search};

pub use check::InvariantViolation;
pub use iter::{CursorMut, IntoIter, Iter};

/// A set of unique keys kept in ascending order of a [`Comparator`].
///
/// ```rust
/// use rbset::RbSet;
///
/// let mut set = RbSet::new();
/// assert!(set.insert(3));
/// assert!(set.insert(1));
/// assert!(!set.insert(3));
///
/// assert!(set.contains(&1));
/// assert_eq!(set.len(), 2);
/// assert!(set.remove(&1));
/// assert!(!set.remove(&1));
/// ```
#[derive(Clone)]
pub struct RbSet<K, C = Natural> {
    nodes: Vec<Node<K>>,
    free: Vec<Handle>,
    root: Handle,
    len: usize,
    cmp: C,
}

impl<K: Ord> RbSet<K> {
    /// Creates an empty set ordered by the natural order of `K`.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<K: Ord> Default for RbSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> RbSet<K, C> {
    /// Creates an empty set ordered by `cmp`.
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            nodes: vec![Node::sentinel()],
            free: Vec::new(),
            root: Handle::NIL,
            len: 0,
            cmp,
        }
    }

    /// Returns the number of keys in the set.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every key, keeping the comparator.
    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        self.nodes[0] = Node::sentinel();
        self.free.clear();
        self.root = Handle::NIL;
        self.len = 0;
    }

    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// The smallest key.
    pub fn first(&self) -> Option<&K> {
        self.key(self.minimum(self.root))
    }

    /// The largest key.
    pub fn last(&self) -> Option<&K> {
        self.key(self.maximum(self.root))
    }

    /// Number of nodes on the longest path from the root to a leaf.
    pub fn height(&self) -> usize {
        self.height_from(self.root)
    }

    /// Number of edges on the longest path from the root to a leaf.
    pub fn depth(&self) -> usize {
        self.height().saturating_sub(1)
    }

    fn height_from(&self, h: Handle) -> usize {
        if h == Handle::NIL {
            return 0;
        }
        let [left, right] = self.node(h).child;
        1 + self.height_from(left).max(self.height_from(right))
    }

    /// Ascending iterator over the keys.
    pub fn iter(&self) -> Iter<'_, K, C> {
        Iter::new(self)
    }

    /// A cursor that walks the keys in ascending order and can remove the
    /// key it last yielded without losing its place.
    ///
    /// ```rust
    /// use rbset::RbSet;
    ///
    /// let mut set: RbSet<i32> = (1..=10).collect();
    /// let mut cursor = set.cursor_mut();
    /// while let Some(&key) = cursor.next() {
    ///     if key % 2 == 0 {
    ///         cursor.remove_current();
    ///     }
    /// }
    /// assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![1, 3, 5, 7, 9]);
    /// ```
    pub fn cursor_mut(&mut self) -> CursorMut<'_, K, C> {
        CursorMut::new(self)
    }

    /// Keeps only the keys for which `f` returns `true`.
    pub fn retain<F: FnMut(&K) -> bool>(&mut self, mut f: F) {
        let mut cursor = self.cursor_mut();
        while let Some(key) = cursor.next() {
            if !f(key) {
                cursor.remove_current();
            }
        }
    }
}

impl<K, C: Comparator<K>> RbSet<K, C> {
    /// Adds `key` to the set.
    ///
    /// Returns `false` and leaves the set untouched if a key comparing equal
    /// is already present.
    pub fn insert(&mut self, key: K) -> bool {
        let (parent, dir) = match self.search(&key) {
            Search::Found(_) => {
                debug!("insert rejected, key already present (len {})", self.len);
                return false;
            }
            Search::Vacant { parent, dir } => (parent, dir),
        };

        let z = self.alloc(key, parent);
        if parent == Handle::NIL {
            self.root = z;
        } else {
            self.node_mut(parent)[dir] = z;
        }
        self.len += 1;
        self.insert_fixup(z);
        true
    }

    /// Removes `key` from the set. Returns `false` if it was not present.
    pub fn remove(&mut self, key: &K) -> bool {
        self.take(key).is_some()
    }

    /// Removes `key` from the set and hands back the stored key.
    pub fn take(&mut self, key: &K) -> Option<K> {
        let z = self.locate(key);
        if z == Handle::NIL {
            debug!("remove missed, key not present (len {})", self.len);
            return None;
        }
        self.delete_node(z).0
    }

    pub fn contains(&self, key: &K) -> bool {
        self.locate(key) != Handle::NIL
    }

    /// Returns the stored key comparing equal to `key`.
    pub fn get(&self, key: &K) -> Option<&K> {
        self.key(self.locate(key))
    }
}

impl<K: Debug, C> Debug for RbSet<K, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K: PartialEq, C> PartialEq for RbSet<K, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, C> Eq for RbSet<K, C> {}

impl<K: Ord> FromIterator<K> for RbSet<K> {
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        let mut set = RbSet::new();
        set.extend(iter);
        set
    }
}

impl<K, C: Comparator<K>> Extend<K> for RbSet<K, C> {
    fn extend<T: IntoIterator<Item = K>>(&mut self, iter: T) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K: Copy + 'a, C: Comparator<K>> Extend<&'a K> for RbSet<K, C> {
    fn extend<T: IntoIterator<Item = &'a K>>(&mut self, iter: T) {
        for &key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K, C> IntoIterator for &'a RbSet<K, C> {
    type Item = &'a K;

    type IntoIter = Iter<'a, K, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, C> IntoIterator for RbSet<K, C> {
    type Item = K;

    type IntoIter = IntoIter<K, C>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}
