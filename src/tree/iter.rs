use std::iter::FusedIterator;

use log::debug;

use super::node::Handle;
use super::RbSet;

/// A borrowing iterator over the keys of an [`RbSet`], in ascending order.
pub struct Iter<'a, K, C> {
    set: &'a RbSet<K, C>,
    next: Handle,
    len: usize,
}

impl<'a, K, C> Iter<'a, K, C> {
    pub(crate) fn new(set: &'a RbSet<K, C>) -> Self {
        Self {
            set,
            next: set.minimum(set.root),
            len: set.len,
        }
    }
}

impl<'a, K, C> Iterator for Iter<'a, K, C> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let set = self.set;
        let key = set.key(self.next)?;
        self.next = set.successor(self.next);
        self.len -= 1;
        Some(key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, C> ExactSizeIterator for Iter<'_, K, C> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<K, C> FusedIterator for Iter<'_, K, C> {}

impl<K, C> Clone for Iter<'_, K, C> {
    fn clone(&self) -> Self {
        Self {
            set: self.set,
            next: self.next,
            len: self.len,
        }
    }
}

/// An owning iterator over the keys of an [`RbSet`], in ascending order.
pub struct IntoIter<K, C> {
    set: RbSet<K, C>,
    next: Handle,
}

impl<K, C> IntoIter<K, C> {
    pub(crate) fn new(set: RbSet<K, C>) -> Self {
        let next = set.minimum(set.root);
        Self { set, next }
    }
}

impl<K, C> Iterator for IntoIter<K, C> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        // Only keys are moved out; the links stay intact for the walk.
        let key = self.set.node_mut(self.next).key.take()?;
        self.next = self.set.successor(self.next);
        self.set.len -= 1;
        Some(key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.set.len, Some(self.set.len))
    }
}

impl<K, C> ExactSizeIterator for IntoIter<K, C> {}

impl<K, C> FusedIterator for IntoIter<K, C> {}

/// A cursor over an [`RbSet`] that may remove the key it is on.
///
/// The cursor starts before the smallest key. [`CursorMut::next`] moves it
/// onto the following key; [`CursorMut::remove_current`] deletes that key
/// and leaves the cursor so that the next call to `next` yields the key that
/// followed the removed one.
pub struct CursorMut<'a, K, C> {
    set: &'a mut RbSet<K, C>,
    current: Handle,
    next: Handle,
}

impl<'a, K, C> CursorMut<'a, K, C> {
    pub(crate) fn new(set: &'a mut RbSet<K, C>) -> Self {
        let next = set.minimum(set.root);
        Self {
            set,
            current: Handle::NIL,
            next,
        }
    }

    /// Advances to the next key and returns it, or `None` past the end.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&K> {
        self.current = self.next;
        if self.current != Handle::NIL {
            self.next = self.set.successor(self.current);
        }
        self.set.key(self.current)
    }

    /// The key returned by the last call to [`CursorMut::next`], unless it
    /// has been removed since.
    pub fn current(&self) -> Option<&K> {
        self.set.key(self.current)
    }

    /// The key the next call to [`CursorMut::next`] will return.
    pub fn peek_next(&self) -> Option<&K> {
        self.set.key(self.next)
    }

    /// Removes the current key from the set and returns it.
    ///
    /// Returns `None` if the cursor is not on a key, including right after a
    /// removal.
    pub fn remove_current(&mut self) -> Option<K> {
        if self.current == Handle::NIL {
            return None;
        }
        let (key, next) = self.set.delete_node(self.current);
        debug!("cursor removed a key, {} left", self.set.len);
        self.current = Handle::NIL;
        self.next = next;
        key
    }
}
