use {crate::SyncSeq, std::fmt};

/// Index-by-index iterator over a [`SyncSeq`], yielding clones.
///
/// Each step takes the read lock on its own and stops at the first index
/// that is out of range at that moment.
pub struct Iter<'a, T> {
    seq: &'a SyncSeq<T>,
    index: usize,
}

impl<'a, T> Iter<'a, T> {
    #[inline]
    pub(crate) fn new(seq: &'a SyncSeq<T>) -> Self {
        let index = seq.lower_bound();
        Self { seq, index }
    }
}

impl<T: Clone> Iterator for Iter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let elems = self.seq.read();
        let item = elems.get(self.index)?.clone();
        drop(elems);
        self.index = self.seq.next_index(self.index);
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        // the sequence can grow or shrink between steps
        (0, None)
    }
}

impl<T> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").field("index", &self.index).finish_non_exhaustive()
    }
}
