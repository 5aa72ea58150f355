use thiserror::Error;

/// An index was outside the valid range `0..len` at the moment the lock
/// was held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("index {index} out of range for valid indices 0..{len}")]
pub struct OutOfRange {
    /// The rejected index.
    pub index: usize,
    /// Length of the sequence when the index was checked.
    pub len: usize,
}

impl OutOfRange {
    /// Returns `Ok(())` if `index < len`.
    ///
    /// # Errors
    /// Returns [`OutOfRange`] if `index >= len`.
    #[inline]
    pub(crate) fn check(index: usize, len: usize) -> Result<(), Self> {
        if index < len {
            Ok(())
        } else {
            tracing::debug!(index, len, "rejected out of range index");
            Err(Self { index, len })
        }
    }
    /// Returns `Ok(())` if `index <= len`, the positions an element can be
    /// inserted at.
    ///
    /// # Errors
    /// Returns [`OutOfRange`] if `index > len`.
    #[inline]
    pub(crate) fn check_insert(index: usize, len: usize) -> Result<(), Self> {
        if index <= len {
            Ok(())
        } else {
            tracing::debug!(index, len, "rejected out of range insert");
            Err(Self { index, len })
        }
    }
}
