//! Binary min-heap over vertex handles.
//!
//! The heap stores handles (arena slots) only. Keys are read through a [`Keyed`]
//! source at comparison time, so a key that changed behind the heap's back is
//! seen on the next comparison; [`MinHeap::heapify`] restores order afterwards.
//!
//!   parent(i) = (i - 1) / 2,  left(i) = 2i + 1,  right(i) = 2i + 2
//!   invariant: key(heap[parent(i)]) <= key(heap[i]) for all i > 0

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Source of heap keys, looked up by handle
pub trait Keyed {
    type Key: Ord + Copy;

    fn key_of(&self, handle: usize) -> Self::Key;
}

impl<K: Ord + Copy> Keyed for [K] {
    type Key = K;

    fn key_of(&self, handle: usize) -> K {
        self[handle]
    }
}

impl<K: Ord + Copy> Keyed for Vec<K> {
    type Key = K;

    fn key_of(&self, handle: usize) -> K {
        self[handle]
    }
}

/// How [`MinHeap::heapify`] rebuilds order over the whole array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeapifyStrategy {
    /// Top-down pass sifting every position up, O(n log n)
    #[default]
    SiftUpPass,
    /// Classic bottom-up sift-down construction, O(n)
    BottomUp,
}

/// Array-backed binary min-heap of handles
#[derive(Debug, Clone, Default)]
pub struct MinHeap {
    heap: Vec<usize>,
    strategy: HeapifyStrategy,
}

impl MinHeap {
    /// Creates a new empty heap using the default heapify strategy
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty heap with the given heapify strategy
    pub fn with_strategy(strategy: HeapifyStrategy) -> Self {
        MinHeap {
            heap: Vec::new(),
            strategy,
        }
    }

    /// Builds a heap from arbitrary handles, then heapifies them
    pub fn from_handles<K>(handles: Vec<usize>, keys: &K, strategy: HeapifyStrategy) -> Self
    where
        K: Keyed + ?Sized,
    {
        let mut heap = MinHeap {
            heap: handles,
            strategy,
        };
        heap.heapify(keys);
        heap
    }

    pub fn strategy(&self) -> HeapifyStrategy {
        self.strategy
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Handles in heap array order
    pub fn as_slice(&self) -> &[usize] {
        &self.heap
    }

    /// Returns the root handle without removing it
    pub fn peek(&self) -> Result<usize> {
        self.heap.first().copied().ok_or(Error::EmptyHeap)
    }

    /// Appends a handle and sifts it up
    pub fn insert<K>(&mut self, handle: usize, keys: &K)
    where
        K: Keyed + ?Sized,
    {
        self.heap.push(handle);
        self.sift_up(self.heap.len() - 1, keys);
    }

    /// Removes and returns the handle with the smallest key
    pub fn extract_min<K>(&mut self, keys: &K) -> Result<usize>
    where
        K: Keyed + ?Sized,
    {
        if self.heap.is_empty() {
            return Err(Error::EmptyHeap);
        }
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let min = self.heap.pop().ok_or(Error::EmptyHeap)?;
        self.sift_down(0, keys);
        Ok(min)
    }

    /// Re-establishes heap order after keys were mutated externally
    pub fn heapify<K>(&mut self, keys: &K)
    where
        K: Keyed + ?Sized,
    {
        match self.strategy {
            HeapifyStrategy::SiftUpPass => {
                for i in 0..self.heap.len() {
                    self.sift_up(i, keys);
                }
            }
            HeapifyStrategy::BottomUp => {
                for i in (0..self.heap.len() / 2).rev() {
                    self.sift_down(i, keys);
                }
            }
        }
    }

    /// Checks the heap invariant against the current keys
    pub fn is_heap<K>(&self, keys: &K) -> bool
    where
        K: Keyed + ?Sized,
    {
        (1..self.heap.len()).all(|i| {
            keys.key_of(self.heap[(i - 1) / 2]) <= keys.key_of(self.heap[i])
        })
    }

    fn less<K>(&self, a: usize, b: usize, keys: &K) -> bool
    where
        K: Keyed + ?Sized,
    {
        keys.key_of(self.heap[a]) < keys.key_of(self.heap[b])
    }

    fn sift_up<K>(&mut self, mut i: usize, keys: &K)
    where
        K: Keyed + ?Sized,
    {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.less(i, parent, keys) {
                break;
            }
            self.heap.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down<K>(&mut self, mut i: usize, keys: &K)
    where
        K: Keyed + ?Sized,
    {
        let n = self.heap.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            if left >= n {
                break;
            }
            let smaller = if right < n && self.less(right, left, keys) {
                right
            } else {
                left
            };
            if !self.less(smaller, i, keys) {
                break;
            }
            self.heap.swap(i, smaller);
            i = smaller;
        }
    }
}
