#![doc = include_str!("../docs/lib-docs.md")]
//! # Examples
//! ```
#![doc = include_str!("../demos/basic_usage.rs")]
//! ```

mod cell;
pub mod error;
pub mod guard;
mod iter;
mod macros;
pub mod raw;
#[cfg(all(test, loom))]
mod loom_tests;

pub use crate::iter::Iter;
use {
    crate::{
        cell::UnsafeCell,
        error::OutOfRange,
        guard::{ReadGuard, WriteGuard},
        raw::RawRwLock,
    },
    std::{fmt, mem, ptr},
};

#[doc = include_str!("../docs/sync_seq.md")]
pub struct SyncSeq<T> {
    elems: UnsafeCell<Vec<T>>,
    lock: RawRwLock,
}

/// # Safety:
/// `elems` is only reached through a [`ReadGuard`] (shared, read lock held)
/// or a [`WriteGuard`] (exclusive, write lock held), the same contract as
/// [`std::sync::RwLock`]: readers on several threads need `T: Sync`, and a
/// writer may move `T` values across threads, so `T: Send` as well.
unsafe impl<T: Send + Sync> Sync for SyncSeq<T> {}

impl<T> SyncSeq<T> {
    /// Takes ownership of `elems`.
    #[inline]
    #[must_use]
    pub fn new(elems: Vec<T>) -> Self {
        tracing::trace!(len = elems.len(), "creating SyncSeq");
        Self {
            elems: UnsafeCell::new(elems),
            lock: RawRwLock::new(),
        }
    }
    /// Locks the sequence for reading and returns a guard over all elements.
    ///
    /// Blocks while a writer holds the lock.
    #[inline]
    pub fn read(&self) -> ReadGuard<'_, T> {
        ReadGuard::new(self)
    }
    /// Locks the sequence for writing.
    ///
    /// Blocks while any reader or writer holds the lock.
    #[inline]
    pub fn write(&self) -> WriteGuard<'_, T> {
        WriteGuard::new(self)
    }

    /// First valid index, always `0`.
    #[inline]
    #[must_use]
    pub fn lower_bound(&self) -> usize {
        let _elems = self.read();
        0
    }
    /// One past the last valid index.
    #[inline]
    #[must_use]
    pub fn upper_bound(&self) -> usize {
        self.read().len()
    }
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.upper_bound()
    }
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
    /// Index following `index`. Touches no data and takes no lock.
    ///
    /// # Panics
    /// If `index == usize::MAX`, which no sequence can reach as a valid index.
    #[inline]
    #[must_use]
    pub const fn next_index(&self, index: usize) -> usize {
        match index.checked_add(1) {
            Some(next) => next,
            None => panic!("index overflow"),
        }
    }

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// # Errors
    /// Returns [`OutOfRange`] if `index` is not below the length at the time
    /// the write lock is held. The sequence is left unchanged.
    pub fn set(&self, index: usize, value: T) -> Result<T, OutOfRange> {
        let mut elems = self.write();
        OutOfRange::check(index, elems.len())?;
        Ok(mem::replace(&mut elems[index], value))
    }
    /// Appends `value` as the last element.
    #[inline]
    pub fn append(&self, value: T) {
        self.write().push(value);
    }
    /// Removes and returns the element at `index`, shifting every later
    /// element down by one.
    ///
    /// # Errors
    /// Returns [`OutOfRange`] if `index` is not below the length at the time
    /// the write lock is held. The sequence is left unchanged.
    #[inline]
    pub fn remove_at(&self, index: usize) -> Result<T, OutOfRange> {
        self.write().remove(index)
    }

    /// Borrows the elements mutably. No locking is needed since `&mut self`
    /// proves exclusive access.
    #[inline]
    pub fn get_mut(&mut self) -> &mut Vec<T> {
        self.elems.as_mut()
    }
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> Vec<T> {
        self.elems.into_inner()
    }
    /// Iterates index by index, taking the read lock once per element.
    ///
    /// Writers may run between two steps, so the yielded elements need not
    /// belong to a single state of the sequence. Use [`SyncSeq::read`] for an
    /// atomic traversal.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T>
    where
        T: Clone,
    {
        Iter::new(self)
    }
}

impl<T: Clone> SyncSeq<T> {
    /// Copies `elems` into a new sequence.
    #[inline]
    #[must_use]
    pub fn from_slice(elems: &[T]) -> Self {
        Self::new(elems.to_vec())
    }
    /// Creates a sequence of `count` copies of `value`.
    #[inline]
    #[must_use]
    pub fn filled(count: usize, value: T) -> Self {
        Self::new(vec![value; count])
    }
    /// Returns a clone of the element at `index`.
    ///
    /// # Errors
    /// Returns [`OutOfRange`] if `index` is not below the length at the time
    /// the read lock is held.
    pub fn get(&self, index: usize) -> Result<T, OutOfRange> {
        let elems = self.read();
        OutOfRange::check(index, elems.len())?;
        Ok(elems[index].clone())
    }
    /// Clones every element under a single read lock.
    #[inline]
    #[must_use]
    pub fn snapshot(&self) -> Vec<T> {
        self.read().to_vec()
    }
}

impl<T: fmt::Debug> SyncSeq<T> {
    /// Renders the elements as they are at the moment the read lock is held,
    /// e.g. `[1, 2, 3]`.
    #[must_use]
    pub fn snapshot_description(&self) -> String {
        format!("{:?}", self.read())
    }
}

impl<T> Default for SyncSeq<T> {
    #[inline]
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: Clone> Clone for SyncSeq<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self::new(self.snapshot())
    }
}

// ------------------------------- fmt impl -------------------------------

impl<T: fmt::Debug> fmt::Debug for SyncSeq<T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.read(), f)
    }
}

// -------------------------- From and iter impls --------------------------

impl<T> From<Vec<T>> for SyncSeq<T> {
    #[inline]
    fn from(value: Vec<T>) -> Self {
        Self::new(value)
    }
}
impl<T> From<SyncSeq<T>> for Vec<T> {
    #[inline]
    fn from(value: SyncSeq<T>) -> Self {
        value.into_inner()
    }
}
impl<T> FromIterator<T> for SyncSeq<T> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
/// Appends the whole batch under one write lock.
///
/// The iterator runs while the lock is held, so it must not access the same
/// sequence.
impl<T> Extend<T> for &SyncSeq<T> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.write().extend(iter);
    }
}
impl<'a, T: Clone> IntoIterator for &'a SyncSeq<T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ----------------------------- PartialEq impl -----------------------------

impl<T: PartialEq> PartialEq for SyncSeq<T> {
    /// Takes both read locks in address order, so two threads comparing the
    /// same pair in opposite directions cannot deadlock.
    fn eq(&self, rhs: &Self) -> bool {
        if ptr::eq(self, rhs) {
            let elems = self.read();
            return PartialEq::eq(&*elems, &*elems);
        }
        let (lhs, rhs) = if ptr::from_ref(self) < ptr::from_ref(rhs) {
            let lhs = self.read();
            (lhs, rhs.read())
        } else {
            let rhs = rhs.read();
            (self.read(), rhs)
        };
        PartialEq::eq(&*lhs, &*rhs)
    }
}
impl<T, U> PartialEq<[U]> for SyncSeq<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, rhs: &[U]) -> bool {
        PartialEq::eq(&*self.read(), rhs)
    }
}
impl<T, U> PartialEq<&[U]> for SyncSeq<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, rhs: &&[U]) -> bool {
        PartialEq::eq(&*self.read(), *rhs)
    }
}
impl<T, U, const N: usize> PartialEq<[U; N]> for SyncSeq<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, rhs: &[U; N]) -> bool {
        PartialEq::eq(&*self.read(), rhs)
    }
}
impl<T, U> PartialEq<Vec<U>> for SyncSeq<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, rhs: &Vec<U>) -> bool {
        PartialEq::eq(&*self.read(), &**rhs)
    }
}
impl<T: Eq> Eq for SyncSeq<T> {}
