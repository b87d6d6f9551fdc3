use tracing::debug;

use crate::error::{check_key, Result};

/// Keys are stored as `i64`, but only non-negative values are accepted.
pub type Key = i64;

/// Marker for a slot that holds no key.
pub(crate) const EMPTY: Key = -1;

/// Usable slots of a heap created with [`MinHeap::new`].
pub const DEFAULT_CAPACITY: usize = 15;

/// A binary min-heap of non-negative integer keys, duplicates allowed.
///
/// The tree lives in a single store with the root in the *last* slot and
/// the tree growing towards the front. A slot at index `i` has rank
/// `r = store.len() - i` (the root has rank 1); its children sit at ranks
/// `2r` and `2r + 1` and its parent at rank `r / 2`. Slot 0 is reserved and
/// never holds a key, so the capacity is `store.len() - 1`.
///
/// Occupied slots always form the run `frontier..store.len()`, everything
/// before `frontier` is `EMPTY`.
#[derive(Debug)]
pub struct MinHeap {
    store: Vec<Key>,
    frontier: usize,
}

impl Default for MinHeap {
    fn default() -> Self {
        Self::new()
    }
}

impl MinHeap {
    /// O(1)
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty heap with room for `capacity` keys (at least one)
    /// before the store has to grow.
    ///
    /// Panics like `Vec::with_capacity` if the store would exceed
    /// `isize::MAX` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        let len = capacity.max(1).saturating_add(1);
        Self {
            store: vec![EMPTY; len],
            frontier: len,
        }
    }

    /// Builds a heap from `keys` in one pass instead of inserting them one
    /// at a time.
    ///
    /// The keys are copied into the tail of the store as they are, then a
    /// single forward scan starting at the frontier walks towards the root:
    /// whenever the current slot has a smaller child it is swapped with the
    /// smaller one (left wins ties) and the sift carries on from that child
    /// until it settles, then the scan moves on to the slot after the one
    /// it started from.
    ///
    /// O(n)
    ///
    /// Fails without building anything if any key is negative.
    pub fn bottom_up(keys: &[Key]) -> Result<Self> {
        for &key in keys {
            check_key(key)?;
        }

        let mut heap = Self::new();
        match *keys {
            [] => return Ok(heap),
            [key] => {
                heap.insert(key)?;
                return Ok(heap);
            }
            _ => {}
        }

        if keys.len() + 1 > heap.store.len() {
            heap.store = vec![EMPTY; keys.len() + 1];
        }
        heap.frontier = heap.store.len() - keys.len();
        heap.store[heap.frontier..].copy_from_slice(keys);

        let mut swaps = 0usize;
        for index in heap.frontier..heap.store.len() {
            swaps += heap.sift_down(index);
        }

        debug!(keys = keys.len(), swaps, "built heap bottom-up");
        Ok(heap)
    }

    /// Number of keys currently stored.
    #[inline]
    pub fn num_keys(&self) -> usize {
        self.store.len() - self.frontier
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frontier == self.store.len()
    }

    /// Number of keys the heap can hold before its store grows.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.store.len() - 1
    }

    /// O(1)
    #[inline]
    pub fn min(&self) -> Option<Key> {
        if self.is_empty() {
            None
        } else {
            Some(self.store[self.root()])
        }
    }

    /// The occupied part of the store in layout order, root last.
    #[inline]
    pub fn keys(&self) -> &[Key] {
        &self.store[self.frontier..]
    }

    /// O(log n), amortized. Doubles the store when it is full.
    pub fn insert(&mut self, key: Key) -> Result<()> {
        let key = check_key(key)?;

        if self.frontier == 1 {
            self.grow();
        }

        self.frontier -= 1;
        self.store[self.frontier] = key;
        self.sift_up(self.frontier);

        Ok(())
    }

    /// O(log n). Returns `None` and leaves the heap untouched when it is
    /// empty. The store never shrinks.
    pub fn remove_min(&mut self) -> Option<Key> {
        if self.is_empty() {
            return None;
        }

        let root = self.root();
        let min = self.store[root];
        self.store[root] = self.store[self.frontier];
        self.store[self.frontier] = EMPTY;
        self.frontier += 1;
        self.sift_down(root);

        Some(min)
    }

    /// Checks every structural invariant: reserved and free slots hold
    /// `EMPTY`, occupied slots hold non-negative keys, and no key is smaller
    /// than its parent.
    pub fn is_valid(&self) -> bool {
        let len = self.store.len();
        if self.frontier == 0 || self.frontier > len {
            return false;
        }
        if self.store[..self.frontier].iter().any(|&key| key != EMPTY) {
            return false;
        }

        (self.frontier..len).all(|i| {
            self.store[i] >= 0
                && self
                    .parent(i)
                    .map_or(true, |parent| self.store[parent] <= self.store[i])
        })
    }

    #[inline]
    pub(crate) fn store(&self) -> &[Key] {
        &self.store
    }

    #[inline]
    pub(crate) fn root(&self) -> usize {
        self.store.len() - 1
    }

    #[inline]
    fn rank(&self, index: usize) -> usize {
        self.store.len() - index
    }

    /// `index` if it names an occupied slot.
    #[inline]
    fn occupied(&self, index: usize) -> Option<usize> {
        if index > 0 && index >= self.frontier && index < self.store.len() {
            Some(index)
        } else {
            None
        }
    }

    pub(crate) fn left_child(&self, index: usize) -> Option<usize> {
        let rank = self.rank(index);
        self.store
            .len()
            .checked_sub(2 * rank)
            .and_then(|child| self.occupied(child))
    }

    pub(crate) fn right_child(&self, index: usize) -> Option<usize> {
        let rank = self.rank(index);
        self.store
            .len()
            .checked_sub(2 * rank + 1)
            .and_then(|child| self.occupied(child))
    }

    fn parent(&self, index: usize) -> Option<usize> {
        match self.rank(index) / 2 {
            0 => None,
            rank => Some(self.store.len() - rank),
        }
    }

    /// The child holding the smaller key; the right one only when strictly
    /// smaller.
    fn smaller_child(&self, index: usize) -> Option<usize> {
        let left = self.left_child(index)?;
        match self.right_child(index) {
            Some(right) if self.store[right] < self.store[left] => Some(right),
            _ => Some(left),
        }
    }

    /// O(n). The occupied run moves to the back half of a store twice as
    /// long, so every slot keeps its rank.
    fn grow(&mut self) {
        let len = self.store.len();
        let mut store = vec![EMPTY; 2 * len];
        store[len..].copy_from_slice(&self.store);

        self.store = store;
        self.frontier += len;

        debug!(
            old_capacity = len - 1,
            new_capacity = 2 * len - 1,
            "grew heap store"
        );
    }

    /// O(log n)
    fn sift_up(&mut self, mut node: usize) {
        while let Some(parent) = self.parent(node) {
            if self.store[node] < self.store[parent] {
                self.store.swap(node, parent);
                node = parent;
            } else {
                break;
            }
        }
    }

    /// O(log n). Returns the number of swaps.
    fn sift_down(&mut self, mut node: usize) -> usize {
        let mut swaps = 0;
        while let Some(child) = self.smaller_child(node) {
            if self.store[child] < self.store[node] {
                self.store.swap(node, child);
                node = child;
                swaps += 1;
            } else {
                break;
            }
        }
        swaps
    }
}
