use thiserror::Error;

use crate::Key;

/// Result type for heap operations
pub type Result<T> = std::result::Result<T, HeapError>;

/// Errors that can occur while feeding keys into a heap
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// `-1` marks free slots, so no negative value can be stored.
    #[error("negative key {key}: keys must be non-negative")]
    NegativeKey { key: Key },
}

#[inline]
pub(crate) fn check_key(key: Key) -> Result<Key> {
    if key < 0 {
        Err(HeapError::NegativeKey { key })
    } else {
        Ok(key)
    }
}
