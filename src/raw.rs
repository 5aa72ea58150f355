//! The bare reader-writer lock guarding a [`SyncSeq`](crate::SyncSeq).
//!
//! [`RawRwLock`] protects no data by itself: holding a [`ReadLock`] or a
//! [`WriteLock`] is the permission to touch whatever the owner associates
//! with it. Release happens when the token is dropped.

#[cfg(loom)]
use loom::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
#[cfg(not(loom))]
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::{
    fmt,
    sync::{PoisonError, TryLockError},
};

/// Many readers or one writer, never both.
///
/// Fairness is whatever the platform lock provides.
pub struct RawRwLock {
    inner: RwLock<()>,
}

/// Shared ownership of a [`RawRwLock`]. Released on drop.
#[must_use = "the lock is released as soon as the token is dropped"]
pub struct ReadLock<'a> {
    _guard: RwLockReadGuard<'a, ()>,
}

/// Exclusive ownership of a [`RawRwLock`]. Released on drop.
#[must_use = "the lock is released as soon as the token is dropped"]
pub struct WriteLock<'a> {
    _guard: RwLockWriteGuard<'a, ()>,
}

impl RawRwLock {
    /// Creates an unlocked lock.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(()),
        }
    }

    /// Blocks until no writer holds the lock, then joins the readers.
    #[inline]
    pub fn acquire_read(&self) -> ReadLock<'_> {
        let guard = self.inner.read().unwrap_or_else(|e| {
            tracing::warn!("recovering poisoned lock for reading");
            e.into_inner()
        });
        ReadLock { _guard: guard }
    }

    /// Blocks until nobody holds the lock, then takes it exclusively.
    #[inline]
    pub fn acquire_write(&self) -> WriteLock<'_> {
        let guard = self.inner.write().unwrap_or_else(|e| {
            tracing::warn!("recovering poisoned lock for writing");
            e.into_inner()
        });
        WriteLock { _guard: guard }
    }

    /// Takes the lock for reading if no writer holds it.
    #[inline]
    pub fn try_acquire_read(&self) -> Option<ReadLock<'_>> {
        match self.inner.try_read() {
            Ok(guard) => Some(ReadLock { _guard: guard }),
            Err(TryLockError::Poisoned(e)) => {
                tracing::warn!("recovering poisoned lock for reading");
                Some(ReadLock {
                    _guard: PoisonError::into_inner(e),
                })
            }
            Err(TryLockError::WouldBlock) => None,
        }
    }

    /// Takes the lock for writing if nobody holds it.
    #[inline]
    pub fn try_acquire_write(&self) -> Option<WriteLock<'_>> {
        match self.inner.try_write() {
            Ok(guard) => Some(WriteLock { _guard: guard }),
            Err(TryLockError::Poisoned(e)) => {
                tracing::warn!("recovering poisoned lock for writing");
                Some(WriteLock {
                    _guard: PoisonError::into_inner(e),
                })
            }
            Err(TryLockError::WouldBlock) => None,
        }
    }
}

impl Default for RawRwLock {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RawRwLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawRwLock").finish_non_exhaustive()
    }
}

impl ReadLock<'_> {
    /// Releases the read lock. Same as dropping the token.
    #[inline]
    pub fn release(self) {}
}

impl WriteLock<'_> {
    /// Releases the write lock. Same as dropping the token.
    #[inline]
    pub fn release(self) {}
}
