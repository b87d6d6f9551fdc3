mod error;
mod heap;
mod render;
mod sort;

pub use error::{HeapError, Result};
pub use heap::{Key, MinHeap, DEFAULT_CAPACITY};
pub use render::{FlatView, TreeView};
pub use sort::heap_sort;

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;
    use std::cmp::Reverse;
    use std::collections::BinaryHeap;

    /// Drives `MinHeap` and the standard `BinaryHeap` through the same random
    /// inserts and removals.
    #[test]
    fn validate_min_heap() {
        let mut rng = SmallRng::seed_from_u64(0x5eed);

        const K: usize = 64;
        const N: usize = K * 64;

        let mut heap = MinHeap::new();
        let mut std_heap = BinaryHeap::new();

        for k in 0..K {
            // grow-heavy rounds first, drain-heavy rounds last
            let insert_ratio = 0.9 - 0.8 * k as f64 / K as f64;

            for _ in 0..N / K {
                if rng.gen_bool(insert_ratio) {
                    let key = rng.gen_range(0..1000);
                    heap.insert(key).unwrap();
                    std_heap.push(Reverse(key));
                } else {
                    let expected = std_heap.pop().map(|Reverse(key)| key);
                    assert_eq!(heap.remove_min(), expected);
                }

                assert_eq!(heap.num_keys(), std_heap.len());
                assert_eq!(heap.min(), std_heap.peek().map(|&Reverse(key)| key));
            }
            assert!(heap.is_valid());
        }

        while let Some(Reverse(key)) = std_heap.pop() {
            assert_eq!(heap.remove_min(), Some(key));
        }
        assert_eq!(heap.remove_min(), None);
        assert!(heap.is_empty());
    }

    #[test]
    fn bulk_built_heap_keeps_working() {
        let mut rng = SmallRng::seed_from_u64(7);

        let mut keys: Vec<Key> = (0..200).map(|_| rng.gen_range(0..50)).collect();
        let mut heap = MinHeap::bottom_up(&keys).unwrap();

        for _ in 0..300 {
            let key = rng.gen_range(0..50);
            heap.insert(key).unwrap();
            keys.push(key);
        }
        assert!(heap.is_valid());

        keys.sort_unstable();
        let drained: Vec<_> = std::iter::from_fn(|| heap.remove_min()).collect();
        assert_eq!(drained, keys);
    }
}
