//! IndexVec - A vector indexed by a typed handle.
//!
//! [`IndexVec`] is the node arena behind [`Space`](crate::space::Space).
//! Nodes refer to each other through typed indices instead of pointers, so
//! relinking a list never touches raw memory and dropping the vector drops
//! every node.
//!
//! # Example
//!
//! ```
//! use symc_core::define_idx;
//! use symc_core::index_vec::IndexVec;
//!
//! define_idx!(pub SlotId);
//!
//! let mut slots: IndexVec<SlotId, &str> = IndexVec::new();
//! let id = slots.push("hello");
//! assert_eq!(slots[id], "hello");
//! ```

use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

/// Trait for types that can be used as indices
///
/// # Requirements
///
/// `from_usize(i).index() == i` for every index the vector hands out.
pub trait Idx: Copy + Eq {
    /// Convert from usize to index type
    ///
    /// # Panics
    ///
    /// Implementations may panic if the value does not fit the index type.
    fn from_usize(idx: usize) -> Self;

    /// Convert index to usize for slot access
    fn index(self) -> usize;
}

/// A vector indexed by a specific type
///
/// Wraps a `Vec<T>`; the index type `I` exists only at compile time.
pub struct IndexVec<I, T> {
    raw: Vec<T>,
    _marker: PhantomData<fn(&I)>,
}

impl<I, T> IndexVec<I, T> {
    /// Create an empty IndexVec
    #[inline]
    pub fn new() -> Self {
        Self {
            raw: Vec::new(),
            _marker: PhantomData,
        }
    }

    /// Create an IndexVec with room for `capacity` slots
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            raw: Vec::with_capacity(capacity),
            _marker: PhantomData,
        }
    }

    /// Drop every slot
    #[inline]
    pub fn clear(&mut self) {
        self.raw.clear()
    }
}

impl<I: Idx, T> IndexVec<I, T> {
    /// Append a slot and return its index
    ///
    /// # Panics
    ///
    /// Panics if the new index does not fit `I`.
    #[inline]
    pub fn push(&mut self, value: T) -> I {
        let index = I::from_usize(self.raw.len());
        self.raw.push(value);
        index
    }

    /// Get a slot, `None` when out of bounds
    #[inline]
    pub fn get(&self, index: I) -> Option<&T> {
        self.raw.get(index.index())
    }

    #[inline]
    pub fn get_mut(&mut self, index: I) -> Option<&mut T> {
        self.raw.get_mut(index.index())
    }
}

impl<I: Idx, T> Index<I> for IndexVec<I, T> {
    type Output = T;

    #[inline]
    fn index(&self, index: I) -> &T {
        &self.raw[index.index()]
    }
}

impl<I: Idx, T> IndexMut<I> for IndexVec<I, T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut T {
        &mut self.raw[index.index()]
    }
}

impl<I, T> Default for IndexVec<I, T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Define a `u32` newtype that implements [`Idx`]
///
/// Accepts an optional visibility.
///
/// ```
/// use symc_core::define_idx;
///
/// define_idx!(pub(crate) NodeId);
/// define_idx!(EdgeId);
/// ```
#[macro_export]
macro_rules! define_idx {
    ($vis:vis $name:ident) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis struct $name(pub u32);

        impl $crate::index_vec::Idx for $name {
            fn from_usize(idx: usize) -> Self {
                assert!(idx <= u32::MAX as usize, "Index {} exceeds u32::MAX", idx);
                $name(idx as u32)
            }

            fn index(self) -> usize {
                self.0 as usize
            }
        }
    };
}

#[cfg(test)]
mod tests;
