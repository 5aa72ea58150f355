use {
    crate::{
        SyncSeq,
        cell::{ConstPtr, MutPtr},
        error::OutOfRange,
        raw::{ReadLock, WriteLock},
    },
    std::{fmt, ops},
};

/// Shared access to the whole sequence for as long as the guard lives.
///
/// Every element observed through one guard belongs to the same
/// point-in-time state.
pub struct ReadGuard<'a, T> {
    // dropped before the lock is released
    elems: ConstPtr<Vec<T>>,
    _lock: ReadLock<'a>,
}

/// Exclusive access to the whole sequence for as long as the guard lives.
///
/// Use it to combine a length check with the access that depends on it.
pub struct WriteGuard<'a, T> {
    // dropped before the lock is released
    elems: MutPtr<Vec<T>>,
    _lock: WriteLock<'a>,
}

impl<'a, T> ReadGuard<'a, T> {
    #[inline]
    pub(crate) fn new(seq: &'a SyncSeq<T>) -> Self {
        let lock = seq.lock.acquire_read();
        Self {
            elems: seq.elems.get(),
            _lock: lock,
        }
    }
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the read lock is held for the lifetime of `self`, so no
        // writer can hold a `&mut` to the elements.
        unsafe { self.elems.deref() }
    }
    /// Releases the read lock. Same as dropping the guard.
    #[inline]
    pub fn release(self) {}
}

impl<'a, T> WriteGuard<'a, T> {
    #[inline]
    pub(crate) fn new(seq: &'a SyncSeq<T>) -> Self {
        let lock = seq.lock.acquire_write();
        Self {
            elems: seq.elems.get_mut(),
            _lock: lock,
        }
    }
    #[inline]
    fn vec(&self) -> &Vec<T> {
        // SAFETY: the write lock is held for the lifetime of `self`, so
        // nobody else has access to the elements, and a `&mut` can only be
        // made through `&mut self`.
        unsafe { self.elems.deref() }
    }
    #[inline]
    fn vec_mut(&mut self) -> &mut Vec<T> {
        // SAFETY: the write lock is held for the lifetime of `self`, and
        // `&mut self` makes this the only live reference.
        unsafe { self.elems.deref_mut() }
    }
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.vec()
    }
    #[inline]
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.vec_mut()
    }
    /// Appends `value` as the last element.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.vec_mut().push(value);
    }
    /// Removes the last element, if any.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.vec_mut().pop()
    }
    /// Removes the element at `index`, shifting the following ones down.
    ///
    /// # Errors
    /// Returns [`OutOfRange`] if `index >= len`.
    pub fn remove(&mut self, index: usize) -> Result<T, OutOfRange> {
        OutOfRange::check(index, self.len())?;
        Ok(self.vec_mut().remove(index))
    }
    /// Inserts `value` at `index`, shifting the following ones up.
    ///
    /// `index == len` appends.
    ///
    /// # Errors
    /// Returns [`OutOfRange`] if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), OutOfRange> {
        OutOfRange::check_insert(index, self.len())?;
        self.vec_mut().insert(index, value);
        Ok(())
    }
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        self.vec_mut().truncate(len);
    }
    #[inline]
    pub fn clear(&mut self) {
        self.vec_mut().clear();
    }
    /// Releases the write lock. Same as dropping the guard.
    #[inline]
    pub fn release(self) {}
}

impl<T> ops::Deref for ReadGuard<'_, T> {
    type Target = [T];
    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T> ops::Deref for WriteGuard<'_, T> {
    type Target = [T];
    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T> ops::DerefMut for WriteGuard<'_, T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}
impl<T> Extend<T> for WriteGuard<'_, T> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.vec_mut().extend(iter);
    }
}

impl<T: fmt::Debug> fmt::Debug for ReadGuard<'_, T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_slice(), f)
    }
}
impl<T: fmt::Debug> fmt::Debug for WriteGuard<'_, T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_slice(), f)
    }
}
