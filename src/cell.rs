//! Storage for the guarded elements.
//!
//! Under `cfg(loom)` the cell is loom's, so every access made through a
//! guard is checked by the model for conflicting concurrent access. The
//! pointers handed out by [`UnsafeCell::get`] and [`UnsafeCell::get_mut`]
//! mark the span of an access and must be dropped before the lock is
//! released.

#[cfg(not(loom))]
mod imp {
    pub(crate) struct UnsafeCell<T>(std::cell::UnsafeCell<T>);

    pub(crate) struct ConstPtr<T>(*const T);

    pub(crate) struct MutPtr<T>(*mut T);

    impl<T> UnsafeCell<T> {
        #[inline]
        pub(crate) const fn new(value: T) -> Self {
            Self(std::cell::UnsafeCell::new(value))
        }
        #[inline]
        pub(crate) fn get(&self) -> ConstPtr<T> {
            ConstPtr(self.0.get())
        }
        #[inline]
        pub(crate) fn get_mut(&self) -> MutPtr<T> {
            MutPtr(self.0.get())
        }
        #[inline]
        pub(crate) fn as_mut(&mut self) -> &mut T {
            self.0.get_mut()
        }
        #[inline]
        pub(crate) fn into_inner(self) -> T {
            self.0.into_inner()
        }
    }

    impl<T> ConstPtr<T> {
        /// # Safety
        /// No `&mut T` to the same cell may be live.
        #[inline]
        pub(crate) unsafe fn deref(&self) -> &T {
            // SAFETY: upheld by the caller.
            unsafe { &*self.0 }
        }
    }

    impl<T> MutPtr<T> {
        /// # Safety
        /// No `&mut T` to the same cell may be live.
        #[inline]
        pub(crate) unsafe fn deref(&self) -> &T {
            // SAFETY: upheld by the caller.
            unsafe { &*self.0 }
        }
        /// # Safety
        /// No other reference to the same cell may be live.
        #[inline]
        pub(crate) unsafe fn deref_mut(&mut self) -> &mut T {
            // SAFETY: upheld by the caller.
            unsafe { &mut *self.0 }
        }
    }
}

#[cfg(loom)]
mod imp {
    pub(crate) struct UnsafeCell<T>(loom::cell::UnsafeCell<T>);

    pub(crate) struct ConstPtr<T>(loom::cell::ConstPtr<T>);

    pub(crate) struct MutPtr<T>(loom::cell::MutPtr<T>);

    impl<T> UnsafeCell<T> {
        #[inline]
        pub(crate) fn new(value: T) -> Self {
            Self(loom::cell::UnsafeCell::new(value))
        }
        #[inline]
        pub(crate) fn get(&self) -> ConstPtr<T> {
            ConstPtr(self.0.get())
        }
        #[inline]
        pub(crate) fn get_mut(&self) -> MutPtr<T> {
            MutPtr(self.0.get_mut())
        }
        #[inline]
        pub(crate) fn as_mut(&mut self) -> &mut T {
            // SAFETY: `&mut self` rules out any other access to the cell.
            self.0.with_mut(|ptr| unsafe { &mut *ptr })
        }
        #[inline]
        pub(crate) fn into_inner(self) -> T {
            self.0.into_inner()
        }
    }

    impl<T> ConstPtr<T> {
        /// # Safety
        /// No `&mut T` to the same cell may be live.
        #[inline]
        pub(crate) unsafe fn deref(&self) -> &T {
            // SAFETY: upheld by the caller.
            unsafe { self.0.deref() }
        }
    }

    impl<T> MutPtr<T> {
        /// # Safety
        /// No `&mut T` to the same cell may be live.
        #[inline]
        pub(crate) unsafe fn deref(&self) -> &T {
            // SAFETY: upheld by the caller.
            self.0.with(|ptr| unsafe { &*ptr })
        }
        /// # Safety
        /// No other reference to the same cell may be live.
        #[inline]
        pub(crate) unsafe fn deref_mut(&mut self) -> &mut T {
            // SAFETY: upheld by the caller.
            unsafe { self.0.deref() }
        }
    }
}

pub(crate) use imp::{ConstPtr, MutPtr, UnsafeCell};
