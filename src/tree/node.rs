use std::ops::{Index, IndexMut};

use super::RbSet;
use crate::compare::Comparator;

/// Index of a node inside the arena of one [`RbSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Handle(usize);

impl Handle {
    /// The sentinel. Every tree keeps it in slot 0.
    pub(crate) const NIL: Handle = Handle(0);

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Color {
    Red,
    Black,
}

/// A direction for a child to be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Left,
    Right,
}

impl Direction {
    #[inline]
    pub(crate) fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Node<K> {
    /// `None` for the sentinel and for slots sitting on the free list.
    pub(crate) key: Option<K>,
    pub(crate) color: Color,
    pub(crate) parent: Handle,
    pub(crate) child: [Handle; 2],
}

impl<K> Node<K> {
    pub(crate) fn sentinel() -> Self {
        Self {
            key: None,
            color: Color::Black,
            parent: Handle::NIL,
            child: [Handle::NIL; 2],
        }
    }
}

impl<K> Index<Direction> for Node<K> {
    type Output = Handle;

    fn index(&self, index: Direction) -> &Self::Output {
        match index {
            Direction::Left => &self.child[0],
            Direction::Right => &self.child[1],
        }
    }
}

impl<K> IndexMut<Direction> for Node<K> {
    fn index_mut(&mut self, index: Direction) -> &mut Self::Output {
        match index {
            Direction::Left => &mut self.child[0],
            Direction::Right => &mut self.child[1],
        }
    }
}

/// Where a key lives, or where it would be attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Search {
    Found(Handle),
    Vacant { parent: Handle, dir: Direction },
}

impl<K, C> RbSet<K, C> {
    #[inline]
    pub(crate) fn node(&self, h: Handle) -> &Node<K> {
        &self.nodes[h.index()]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, h: Handle) -> &mut Node<K> {
        &mut self.nodes[h.index()]
    }

    #[inline]
    pub(crate) fn key(&self, h: Handle) -> Option<&K> {
        self.node(h).key.as_ref()
    }

    #[inline]
    pub(crate) fn color(&self, h: Handle) -> Color {
        self.node(h).color
    }

    #[inline]
    pub(crate) fn is_red(&self, h: Handle) -> bool {
        self.color(h) == Color::Red
    }

    #[inline]
    pub(crate) fn is_black(&self, h: Handle) -> bool {
        self.color(h) == Color::Black
    }

    /// Recolors a node. The sentinel is left alone so it stays black.
    #[inline]
    pub(crate) fn paint(&mut self, h: Handle, color: Color) {
        if h != Handle::NIL {
            self.node_mut(h).color = color;
        }
    }

    #[inline]
    pub(crate) fn parent(&self, h: Handle) -> Handle {
        self.node(h).parent
    }

    #[inline]
    pub(crate) fn child(&self, h: Handle, dir: Direction) -> Handle {
        self.node(h)[dir]
    }

    /// Which side of its parent `h` hangs on.
    #[inline]
    pub(crate) fn side(&self, h: Handle) -> Direction {
        if self.child(self.parent(h), Direction::Left) == h {
            Direction::Left
        } else {
            Direction::Right
        }
    }

    /// Puts a fresh red node with sentinel children into the arena.
    pub(crate) fn alloc(&mut self, key: K, parent: Handle) -> Handle {
        let node = Node {
            key: Some(key),
            color: Color::Red,
            parent,
            child: [Handle::NIL; 2],
        };
        match self.free.pop() {
            Some(h) => {
                *self.node_mut(h) = node;
                h
            }
            None => {
                self.nodes.push(node);
                Handle(self.nodes.len() - 1)
            }
        }
    }

    /// Returns a detached node's slot to the free list.
    pub(crate) fn release(&mut self, h: Handle) {
        debug_assert!(h != Handle::NIL, "the sentinel is never released");
        *self.node_mut(h) = Node::sentinel();
        self.free.push(h);
    }

    pub(crate) fn minimum(&self, mut h: Handle) -> Handle {
        if h == Handle::NIL {
            return h;
        }
        while self.child(h, Direction::Left) != Handle::NIL {
            h = self.child(h, Direction::Left);
        }
        h
    }

    pub(crate) fn maximum(&self, mut h: Handle) -> Handle {
        if h == Handle::NIL {
            return h;
        }
        while self.child(h, Direction::Right) != Handle::NIL {
            h = self.child(h, Direction::Right);
        }
        h
    }

    /// In-order successor found from the links alone, or the sentinel after
    /// the largest key.
    pub(crate) fn successor(&self, mut h: Handle) -> Handle {
        let right = self.child(h, Direction::Right);
        if right != Handle::NIL {
            return self.minimum(right);
        }
        let mut p = self.parent(h);
        while p != Handle::NIL && self.child(p, Direction::Right) == h {
            h = p;
            p = self.parent(p);
        }
        p
    }
}

impl<K, C: Comparator<K>> RbSet<K, C> {
    pub(crate) fn search(&self, key: &K) -> Search {
        let mut parent = Handle::NIL;
        let mut dir = Direction::Left;
        let mut cur = self.root;
        // The sentinel carries no key, so the walk stops exactly there.
        while let Some(node_key) = self.key(cur) {
            dir = match self.cmp.compare(key, node_key) {
                std::cmp::Ordering::Less => Direction::Left,
                std::cmp::Ordering::Greater => Direction::Right,
                std::cmp::Ordering::Equal => return Search::Found(cur),
            };
            parent = cur;
            cur = self.child(cur, dir);
        }
        Search::Vacant { parent, dir }
    }

    /// The node holding `key`, or the sentinel.
    pub(crate) fn locate(&self, key: &K) -> Handle {
        match self.search(key) {
            Search::Found(h) => h,
            Search::Vacant { .. } => Handle::NIL,
        }
    }
}
