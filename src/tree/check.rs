use std::cmp::Ordering;

use thiserror::Error;

use super::node::{Direction, Handle};
use super::RbSet;
use crate::compare::Comparator;

/// A broken red-black or search-tree property, as reported by
/// [`RbSet::check_invariants`].
///
/// Nodes are identified by their arena slot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("the sentinel is red")]
    RedSentinel,
    #[error("the root (slot {0}) is red")]
    RedRoot(usize),
    #[error("red node in slot {parent} has a red child in slot {child}")]
    RedRed { parent: usize, child: usize },
    #[error("black-height differs below slot {node}: {left} on the left, {right} on the right")]
    BlackHeight {
        node: usize,
        left: usize,
        right: usize,
    },
    #[error("key in slot {node} is out of order")]
    Order { node: usize },
    #[error("slot {child} does not point back to its parent in slot {parent}")]
    ParentLink { parent: usize, child: usize },
    #[error("set reports {cached} keys but {reachable} are reachable from the root")]
    Length { cached: usize, reachable: usize },
}

impl<K, C: Comparator<K>> RbSet<K, C> {
    /// Walks the whole tree and verifies every red-black property, the
    /// strict ordering of keys, the parent links and the cached length.
    ///
    /// Returns the black-height of the root.
    pub fn check_invariants(&self) -> Result<usize, InvariantViolation> {
        if self.is_red(Handle::NIL) {
            return Err(InvariantViolation::RedSentinel);
        }
        if self.is_red(self.root) {
            return Err(InvariantViolation::RedRoot(self.root.index()));
        }
        if self.parent(self.root) != Handle::NIL {
            return Err(InvariantViolation::ParentLink {
                parent: self.parent(self.root).index(),
                child: self.root.index(),
            });
        }

        let (black_height, reachable) = self.check_subtree(self.root)?;

        // Consecutive keys of the in-order walk must be strictly increasing.
        let mut prev: Option<&K> = None;
        let mut h = self.minimum(self.root);
        while let Some(key) = self.key(h) {
            if let Some(before) = prev {
                if self.cmp.compare(before, key) != Ordering::Less {
                    return Err(InvariantViolation::Order { node: h.index() });
                }
            }
            prev = Some(key);
            h = self.successor(h);
        }

        if reachable != self.len {
            return Err(InvariantViolation::Length {
                cached: self.len,
                reachable,
            });
        }
        Ok(black_height)
    }

    /// Returns the black-height and the node count of the subtree at `h`.
    fn check_subtree(&self, h: Handle) -> Result<(usize, usize), InvariantViolation> {
        if h == Handle::NIL {
            return Ok((0, 0));
        }
        let mut heights = [0; 2];
        let mut count = 1;
        for (i, dir) in [Direction::Left, Direction::Right].into_iter().enumerate() {
            let child = self.child(h, dir);
            if child == Handle::NIL {
                continue;
            }
            if self.parent(child) != h {
                return Err(InvariantViolation::ParentLink {
                    parent: h.index(),
                    child: child.index(),
                });
            }
            if self.is_red(h) && self.is_red(child) {
                return Err(InvariantViolation::RedRed {
                    parent: h.index(),
                    child: child.index(),
                });
            }
            let (black_height, nodes) = self.check_subtree(child)?;
            heights[i] = black_height + usize::from(self.is_black(child));
            count += nodes;
        }
        if heights[0] != heights[1] {
            return Err(InvariantViolation::BlackHeight {
                node: h.index(),
                left: heights[0],
                right: heights[1],
            });
        }
        Ok((heights[0], count))
    }
}
