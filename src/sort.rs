use crate::error::Result;
use crate::heap::{Key, MinHeap};

/// Sorts `keys` ascending by building a heap bottom-up and draining it.
///
/// O(n log n)
pub fn heap_sort(keys: &[Key]) -> Result<Vec<Key>> {
    let mut heap = MinHeap::bottom_up(keys)?;
    let mut sorted = Vec::with_capacity(keys.len());
    sorted.extend(std::iter::from_fn(|| heap.remove_min()));
    Ok(sorted)
}
