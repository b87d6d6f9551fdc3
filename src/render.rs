use std::fmt;

use crate::heap::MinHeap;

/// The whole backing store, free slots included, as `[-1, -1, 3, 2, 1]`.
pub struct FlatView<'a>(pub &'a MinHeap);

impl<'a> fmt::Display for FlatView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, key) in self.0.store().iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", key)?;
        }
        write!(f, "]")
    }
}

/// The heap as a nested tree: `(left)key(right)`, with missing subtrees
/// left out and leaves printed as the bare key. An empty heap prints
/// nothing.
pub struct TreeView<'a>(pub &'a MinHeap);

impl<'a> TreeView<'a> {
    fn fmt_subtree(&self, f: &mut fmt::Formatter<'_>, index: usize) -> fmt::Result {
        let heap = self.0;
        let key = heap.store()[index];

        let left = match heap.left_child(index) {
            Some(left) => left,
            None => return write!(f, "{}", key),
        };

        write!(f, "(")?;
        self.fmt_subtree(f, left)?;
        write!(f, "){}", key)?;

        if let Some(right) = heap.right_child(index) {
            write!(f, "(")?;
            self.fmt_subtree(f, right)?;
            write!(f, ")")?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for TreeView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            Ok(())
        } else {
            self.fmt_subtree(f, self.0.root())
        }
    }
}

impl fmt::Display for MinHeap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&FlatView(self), f)
    }
}

impl MinHeap {
    #[inline]
    pub fn flat_view(&self) -> String {
        FlatView(self).to_string()
    }

    #[inline]
    pub fn tree_view(&self) -> String {
        TreeView(self).to_string()
    }
}
