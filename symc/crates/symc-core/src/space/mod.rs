//! Space - a small sorted map keyed by [`Symbol`].
//!
//! A `Space<V>` is a singly linked list of key/value nodes kept in strictly
//! ascending key order. Every operation walks the list from the smallest key,
//! so everything is O(n); it is meant for small symbol tables where a hash map
//! would be overkill.
//!
//! # Memory Layout
//!
//! ```text
//! nodes (IndexVec<NodeId, Option<Node<V>>>):
//! ┌──────────────┬──────────────┬──────────────┬──────────────┐
//! │ 0: k=7 →2    │ 1: (vacant)  │ 2: k=9 →None │ 3: k=3 →0    │
//! └──────────────┴──────────────┴──────────────┴──────────────┘
//! head = 3, free = [1]
//! list order: 3 → 7 → 9
//! ```
//!
//! Links are arena indices. Deleting a node vacates its slot and pushes the
//! index on a free list for the next insertion.
//!
//! # Examples
//!
//! ```
//! use symc_core::space::Space;
//! use symc_core::symbol::Symbol;
//!
//! let x: Symbol = "x".parse().unwrap();
//! let y: Symbol = "y".parse().unwrap();
//!
//! let mut space = Space::new();
//! space.set(y, 2);
//! space.set(x, 1);
//! assert_eq!(space.get(x), Some(&1));
//!
//! assert_eq!(space.set(x, 10), Some(1));
//! assert_eq!(space.del(y), Some(2));
//! assert_eq!(space.get(y), None);
//! assert_eq!(space.len(), 1);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use log::trace;

use crate::index_vec::IndexVec;
use crate::symbol::Symbol;

crate::define_idx!(NodeId);

struct Node<V> {
    key: Symbol,
    value: V,
    next: Option<NodeId>,
}

/// Sorted associative container from [`Symbol`] to `V`
///
/// Not internally synchronised. Share it across threads behind a lock.
pub struct Space<V> {
    nodes: IndexVec<NodeId, Option<Node<V>>>,
    free: Vec<NodeId>,
    head: Option<NodeId>,
    len: usize,
}

impl<V> Space<V> {
    /// Create an empty space
    pub fn new() -> Self {
        Self {
            nodes: IndexVec::new(),
            free: Vec::new(),
            head: None,
            len: 0,
        }
    }

    /// Create an empty space with arena room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: IndexVec::with_capacity(capacity),
            ..Self::new()
        }
    }

    /// Number of entries
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    #[inline]
    fn node(&self, id: NodeId) -> Option<&Node<V>> {
        self.nodes.get(id).and_then(Option::as_ref)
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<V>> {
        self.nodes.get_mut(id).and_then(Option::as_mut)
    }

    /// Walk from the head while keys stay below `key`
    ///
    /// Returns the last node below `key` and the first node at or above it.
    fn seek(&self, key: Symbol) -> (Option<NodeId>, Option<NodeId>) {
        let mut prev = None;
        let mut cursor = self.head;
        while let Some(id) = cursor {
            match self.node(id) {
                Some(node) if node.key < key => {
                    prev = cursor;
                    cursor = node.next;
                }
                _ => break,
            }
        }
        (prev, cursor)
    }

    /// Find the node holding `key`
    fn find(&self, key: Symbol) -> Option<NodeId> {
        let (_, cursor) = self.seek(key);
        cursor.filter(|&id| self.node(id).is_some_and(|node| node.key == key))
    }

    /// Look up the value stored under `key`
    ///
    /// Stops as soon as a larger key is seen.
    pub fn get(&self, key: Symbol) -> Option<&V> {
        let mut cursor = self.head;
        while let Some(node) = cursor.and_then(|id| self.node(id)) {
            match node.key.cmp(&key) {
                Ordering::Less => cursor = node.next,
                Ordering::Equal => return Some(&node.value),
                Ordering::Greater => return None,
            }
        }
        None
    }

    pub fn get_mut(&mut self, key: Symbol) -> Option<&mut V> {
        let id = self.find(key)?;
        self.node_mut(id).map(|node| &mut node.value)
    }

    pub fn contains_key(&self, key: Symbol) -> bool {
        self.get(key).is_some()
    }

    /// Store `value` under `key`
    ///
    /// Overwrites in place when `key` is present and returns the old value.
    /// Otherwise splices a new node between its neighbours, at the front when
    /// `key` is the new minimum or at the end when it is the new maximum.
    pub fn set(&mut self, key: Symbol, value: V) -> Option<V> {
        let (prev, cursor) = self.seek(key);

        if let Some(node) = cursor.and_then(|id| self.node_mut(id)) {
            if node.key == key {
                return Some(mem::replace(&mut node.value, value));
            }
        }

        let id = self.alloc(Node {
            key,
            value,
            next: cursor,
        });
        match prev.and_then(|p| self.node_mut(p)) {
            Some(prev_node) => prev_node.next = Some(id),
            None => self.head = Some(id),
        }
        self.len += 1;

        trace!("space: inserted {key:?} at slot {}", id.0);
        None
    }

    /// Remove `key`, returning its value; no-op when absent
    pub fn del(&mut self, key: Symbol) -> Option<V> {
        let (prev, cursor) = self.seek(key);
        let id = cursor?;
        if self.node(id)?.key != key {
            return None;
        }

        let node = self.nodes.get_mut(id)?.take()?;
        match prev.and_then(|p| self.node_mut(p)) {
            Some(prev_node) => prev_node.next = node.next,
            None => self.head = node.next,
        }
        self.free.push(id);
        self.len -= 1;

        trace!("space: removed {key:?} from slot {}", id.0);
        Some(node.value)
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head = None;
        self.len = 0;
    }

    /// Iterate over entries in ascending key order
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            space: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    /// Iterate over keys in ascending order
    pub fn keys(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.iter().map(|(key, _)| key)
    }

    fn alloc(&mut self, node: Node<V>) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.nodes[id] = Some(node);
                id
            }
            None => self.nodes.push(Some(node)),
        }
    }
}

/// In-order iterator over a [`Space`]
pub struct Iter<'a, V> {
    space: &'a Space<V>,
    cursor: Option<NodeId>,
    remaining: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (Symbol, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.space.node(self.cursor?)?;
        self.cursor = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some((node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<'a, V> IntoIterator for &'a Space<V> {
    type Item = (Symbol, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Iter<'a, V> {
        self.iter()
    }
}

impl<V> Default for Space<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Extend<(Symbol, V)> for Space<V> {
    fn extend<T: IntoIterator<Item = (Symbol, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<V> FromIterator<(Symbol, V)> for Space<V> {
    fn from_iter<T: IntoIterator<Item = (Symbol, V)>>(iter: T) -> Self {
        let mut space = Self::new();
        space.extend(iter);
        space
    }
}

impl<V: fmt::Debug> fmt::Debug for Space<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

static_assertions::assert_impl_all!(Space<u32>: Send, Sync);
static_assertions::assert_not_impl_any!(Space<std::rc::Rc<u32>>: Send, Sync);
