//! Iterators over a [`StaticQueue`], oldest element first.

use std::iter::{Chain, FusedIterator, Take};
use std::slice;

use super::StaticQueue;

// ============================================
// SHARED ITERATOR
// ============================================

/// Borrowing iterator returned by [`StaticQueue::iter`].
///
/// Walks logical positions `0..len` through the bounds-checked
/// [`StaticQueue::at`], so it never sees stale slots. Holding it borrows
/// the queue, which rules out mutation mid-traversal.
pub struct Iter<'a, T> {
    queue: &'a StaticQueue<T>,
    /// Next logical position from the front
    front: usize,
    /// One past the next logical position from the back
    back: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(queue: &'a StaticQueue<T>) -> Self {
        Self {
            queue,
            front: 0,
            back: queue.len(),
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            queue: self.queue,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.front >= self.back {
            return None;
        }
        let item = self.queue.at(self.front as isize).ok();
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back.saturating_sub(self.front);
        (remaining, Some(remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.queue.at(self.back as isize).ok()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

// ============================================
// MUTABLE ITERATOR
// ============================================

/// Mutable iterator returned by [`StaticQueue::iter_mut`].
///
/// The live range is at most two contiguous runs of storage: from the head
/// to the end of the buffer, then from slot 0 up to the wrap point.
pub struct IterMut<'a, T> {
    inner: Chain<Take<slice::IterMut<'a, T>>, Take<slice::IterMut<'a, T>>>,
    remaining: usize,
}

impl<'a, T> IterMut<'a, T> {
    pub(super) fn new(
        tail: &'a mut [T],
        tail_len: usize,
        wrapped: &'a mut [T],
        wrapped_len: usize,
    ) -> Self {
        let first = tail.iter_mut().take(tail_len);
        let second = wrapped.iter_mut().take(wrapped_len);
        Self {
            inner: first.chain(second),
            remaining: tail_len + wrapped_len,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        let item = self.inner.next()?;
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        let item = self.inner.next_back()?;
        self.remaining -= 1;
        Some(item)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}
