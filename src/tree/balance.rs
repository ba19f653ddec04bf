//! Rotations and the two fixup passes that restore the red-black properties
//! after a structural change.

use log::trace;

use super::node::{Color, Direction, Handle};
use super::RbSet;

impl<K, C> RbSet<K, C> {
    /// Rotate the subtree rooted at `x` in direction `dir`.
    ///
    /// A left rotation pivots `x` with its right child, a right rotation with
    /// its left child. The in-order sequence is unchanged. The child on the
    /// side opposite to `dir` must not be the sentinel.
    pub(crate) fn rotate(&mut self, x: Handle, dir: Direction) {
        let y = self.child(x, dir.opposite());
        debug_assert!(y != Handle::NIL, "rotation pivot must be a real node");
        let middle = self.child(y, dir);

        self.node_mut(x)[dir.opposite()] = middle;
        if middle != Handle::NIL {
            self.node_mut(middle).parent = x;
        }

        let parent = self.parent(x);
        self.node_mut(y).parent = parent;
        if parent == Handle::NIL {
            self.root = y;
        } else {
            let side = self.side(x);
            self.node_mut(parent)[side] = y;
        }

        self.node_mut(y)[dir] = x;
        self.node_mut(x).parent = y;
    }

    /// Hang `v` where `u` was. `v` may be the sentinel, in which case its
    /// parent field is set so the delete fixup can climb from it.
    pub(crate) fn transplant(&mut self, u: Handle, v: Handle) {
        let parent = self.parent(u);
        if parent == Handle::NIL {
            self.root = v;
        } else {
            let side = self.side(u);
            self.node_mut(parent)[side] = v;
        }
        self.node_mut(v).parent = parent;
    }

    /// Restore the properties after `z` was attached as a red leaf.
    ///
    /// On entry to every iteration the only possible violation is a red `z`
    /// under a red parent.
    pub(crate) fn insert_fixup(&mut self, mut z: Handle) {
        while self.is_red(self.parent(z)) {
            let parent = self.parent(z);
            // A red parent is never the root, so the grandparent is real.
            let grandparent = self.parent(parent);
            let dir = self.side(parent);
            let uncle = self.child(grandparent, dir.opposite());

            if self.is_red(uncle) {
                trace!("insert fixup: red uncle, recolor and climb");
                self.paint(parent, Color::Black);
                self.paint(uncle, Color::Black);
                self.paint(grandparent, Color::Red);
                z = grandparent;
                continue;
            }

            if z == self.child(parent, dir.opposite()) {
                trace!("insert fixup: inner child, rotate parent");
                z = parent;
                self.rotate(z, dir);
            }

            trace!("insert fixup: outer child, rotate grandparent");
            let parent = self.parent(z);
            let grandparent = self.parent(parent);
            self.paint(parent, Color::Black);
            self.paint(grandparent, Color::Red);
            self.rotate(grandparent, dir.opposite());
        }
        let root = self.root;
        self.paint(root, Color::Black);
    }

    /// Unlink `z` from the tree and return its key together with the node
    /// that now holds the next key in ascending order (or the sentinel).
    ///
    /// When `z` has two children its successor is spliced out instead and
    /// the successor's key is moved into `z`, so `z` itself is the returned
    /// position in that case.
    pub(crate) fn delete_node(&mut self, z: Handle) -> (Option<K>, Handle) {
        let next = self.successor(z);
        let has_both = self.child(z, Direction::Left) != Handle::NIL
            && self.child(z, Direction::Right) != Handle::NIL;
        let y = if has_both { next } else { z };

        let x = match self.child(y, Direction::Left) {
            Handle::NIL => self.child(y, Direction::Right),
            left => left,
        };
        let spliced_color = self.color(y);
        self.transplant(y, x);

        let (removed, next) = if y == z {
            (self.node_mut(z).key.take(), next)
        } else {
            let moved = self.node_mut(y).key.take();
            (std::mem::replace(&mut self.node_mut(z).key, moved), z)
        };

        if spliced_color == Color::Black {
            self.delete_fixup(x);
        }
        self.node_mut(Handle::NIL).parent = Handle::NIL;
        self.release(y);
        self.len -= 1;

        (removed, next)
    }

    /// `x` carries one extra black that has to be pushed up the tree or
    /// absorbed by a rotation.
    fn delete_fixup(&mut self, mut x: Handle) {
        while x != self.root && self.is_black(x) {
            let parent = self.parent(x);
            let dir = self.side(x);
            let mut sibling = self.child(parent, dir.opposite());

            if self.is_red(sibling) {
                trace!("delete fixup: red sibling, rotate parent");
                self.paint(sibling, Color::Black);
                self.paint(parent, Color::Red);
                self.rotate(parent, dir);
                sibling = self.child(parent, dir.opposite());
            }

            let near = self.child(sibling, dir);
            let far = self.child(sibling, dir.opposite());
            if self.is_black(near) && self.is_black(far) {
                trace!("delete fixup: black nephews, push deficit up");
                self.paint(sibling, Color::Red);
                x = parent;
                continue;
            }

            if self.is_black(far) {
                trace!("delete fixup: red near nephew, rotate sibling");
                self.paint(near, Color::Black);
                self.paint(sibling, Color::Red);
                self.rotate(sibling, dir.opposite());
                sibling = self.child(parent, dir.opposite());
            }

            trace!("delete fixup: red far nephew, rotate parent and stop");
            let parent_color = self.color(parent);
            self.paint(sibling, parent_color);
            self.paint(parent, Color::Black);
            let far = self.child(sibling, dir.opposite());
            self.paint(far, Color::Black);
            self.rotate(parent, dir);
            x = self.root;
        }
        self.paint(x, Color::Black);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_order(set: &RbSet<i32>) -> Vec<i32> {
        set.iter().copied().collect()
    }

    #[test]
    fn rotation_keeps_order_and_moves_root() {
        let mut set: RbSet<i32> = [2, 1, 3].into_iter().collect();
        let old_root = set.root;
        set.rotate(old_root, Direction::Left);
        assert_eq!(set.key(set.root), Some(&3));
        assert_eq!(set.parent(old_root), set.root);
        assert_eq!(in_order(&set), vec![1, 2, 3]);

        set.rotate(set.root, Direction::Right);
        assert_eq!(set.root, old_root);
        assert_eq!(set.parent(set.root), Handle::NIL);
        assert_eq!(in_order(&set), vec![1, 2, 3]);
    }

    #[test]
    fn ascending_inserts_stay_balanced() {
        let set: RbSet<i32> = (0..1024).collect();
        assert!(set.check_invariants().is_ok());
        // 2 * log2(n + 1) bound
        assert!(set.height() <= 2 * 11);
    }

    #[test]
    fn two_child_delete_keeps_node_and_takes_successor_key() {
        let mut set: RbSet<i32> = [13, 8, 17, 1, 11, 15, 25].into_iter().collect();
        let z = set.locate(&8);
        let (removed, next) = set.delete_node(z);
        assert_eq!(removed, Some(8));
        assert_eq!(next, z);
        assert_eq!(set.key(z), Some(&11));
        assert!(set.check_invariants().is_ok());
    }

    #[test]
    fn sentinel_parent_is_reset_after_delete() {
        let mut set: RbSet<i32> = (0..32).collect();
        for k in (0..32).step_by(3) {
            assert!(set.remove(&k));
            assert_eq!(set.parent(Handle::NIL), Handle::NIL);
            assert!(set.is_black(Handle::NIL));
        }
    }
}
