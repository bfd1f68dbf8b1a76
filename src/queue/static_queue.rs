//! # Static Queue Implementation
//!
//! A fixed-size circular buffer that overwrites old elements when full.
//!
//! ## Plain English
//!
//! Picture a circular track with numbered parking spots.
//! When all spots are full and a new car arrives,
//! the oldest car is towed away to make room.
//!
//! Cars are counted from the oldest one (`0`) or backwards from the newest
//! one (`-1`), no matter which physical spot they are parked in.

use std::fmt;

use super::iter::{Iter, IterMut};
use crate::error::{QueueError, QueueResult};

/// A fixed-capacity ring buffer with signed indexing.
///
/// ## Properties
/// - Fixed capacity (doesn't grow on push)
/// - O(1) push operation
/// - Automatically overwrites the oldest element when full
/// - Maintains insertion order
/// - Capacity can be changed later, keeping the newest elements
///
/// Live element `i` (0 = oldest) lives in `data[(head + i) % capacity]`.
/// `data` is filled lazily, so it may be shorter than `capacity` until the
/// queue wraps for the first time. Slots past the live range can hold stale
/// values after [`clear`](Self::clear); they are never handed out.
#[derive(Clone)]
pub struct StaticQueue<T> {
    /// Backing storage, at most `capacity` long
    data: Vec<T>,

    /// Physical slot of the oldest element
    head: usize,

    /// Number of live elements
    len: usize,

    /// Maximum number of live elements
    capacity: usize,
}

impl<T> StaticQueue<T> {
    /// Creates an empty queue with capacity 0.
    ///
    /// A zero-capacity queue is both empty and full; pushes are dropped.
    pub const fn new() -> Self {
        Self {
            data: Vec::new(),
            head: 0,
            len: 0,
            capacity: 0,
        }
    }

    /// Creates an empty queue that holds up to `capacity` elements.
    ///
    /// ## Example
    /// ```
    /// # use static_queue::StaticQueue;
    /// let queue: StaticQueue<i32> = StaticQueue::with_capacity(100);
    /// assert_eq!(queue.capacity(), 100);
    /// assert!(queue.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            head: 0,
            len: 0,
            capacity,
        }
    }

    // ----------------------------------------
    // STATE
    // ----------------------------------------

    /// Returns true if the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the next push will evict the oldest element.
    pub fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    /// Returns the number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the maximum number of live elements.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // ----------------------------------------
    // INSERTION
    // ----------------------------------------

    /// Appends `value` as the newest element.
    ///
    /// If the queue is full, the oldest element is overwritten and the rest
    /// shift down one logical position. On a zero-capacity queue the value
    /// is dropped immediately.
    pub fn push_back(&mut self, value: T) {
        if self.capacity == 0 {
            return;
        }

        if self.is_full() {
            // Full implies every slot is populated
            self.data[self.head] = value;
            self.head = (self.head + 1) % self.capacity;
        } else {
            let slot = self.slot(self.len);
            if slot == self.data.len() {
                self.data.push(value);
            } else {
                self.data[slot] = value;
            }
            self.len += 1;
        }
    }

    // ----------------------------------------
    // POSITIONAL ACCESS
    // ----------------------------------------

    /// Returns the oldest element.
    pub fn front(&self) -> QueueResult<&T> {
        if self.is_empty() {
            return Err(QueueError::EmptyQueue);
        }
        Ok(&self.data[self.head])
    }

    /// Returns the oldest element mutably.
    pub fn front_mut(&mut self) -> QueueResult<&mut T> {
        if self.is_empty() {
            return Err(QueueError::EmptyQueue);
        }
        Ok(&mut self.data[self.head])
    }

    /// Returns the newest element.
    pub fn back(&self) -> QueueResult<&T> {
        if self.is_empty() {
            return Err(QueueError::EmptyQueue);
        }
        Ok(&self.data[self.slot(self.len - 1)])
    }

    /// Returns the newest element mutably.
    pub fn back_mut(&mut self) -> QueueResult<&mut T> {
        if self.is_empty() {
            return Err(QueueError::EmptyQueue);
        }
        let slot = self.slot(self.len - 1);
        Ok(&mut self.data[slot])
    }

    /// Returns the element at logical position `index`.
    ///
    /// Negative indices count back from the newest element, so `-1` is the
    /// same element as [`back`](Self::back). Normalization uses the current
    /// length, not the capacity.
    ///
    /// ## Example
    /// ```
    /// # use static_queue::StaticQueue;
    /// let mut queue = StaticQueue::with_capacity(3);
    /// for i in 1..=5 {
    ///     queue.push_back(i);
    /// }
    /// assert_eq!(queue.at(0), Ok(&3));
    /// assert_eq!(queue.at(-1), Ok(&5));
    /// assert!(queue.at(3).is_err());
    /// ```
    pub fn at(&self, index: isize) -> QueueResult<&T> {
        let logical = self.normalize(index)?;
        Ok(&self.data[self.slot(logical)])
    }

    /// Mutable variant of [`at`](Self::at).
    pub fn at_mut(&mut self, index: isize) -> QueueResult<&mut T> {
        let logical = self.normalize(index)?;
        let slot = self.slot(logical);
        Ok(&mut self.data[slot])
    }

    /// Returns the element at the clamped logical position.
    ///
    /// Indices are normalized like [`at`](Self::at); anything still below
    /// zero yields the oldest element, anything past the end yields the
    /// newest.
    pub fn get_clamped(&self, index: isize) -> QueueResult<&T> {
        if self.is_empty() {
            return Err(QueueError::EmptyQueue);
        }

        let len = self.len as isize;
        let index = if index < 0 { index + len } else { index };
        let logical = index.clamp(0, len - 1) as usize;
        Ok(&self.data[self.slot(logical)])
    }

    // ----------------------------------------
    // ITERATION
    // ----------------------------------------

    /// Returns an iterator over the live elements, oldest to newest.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Returns a mutable iterator over the live elements, oldest to newest.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let len = self.len;
        let split = self.head.min(self.data.len());
        let (wrapped, tail) = self.data.split_at_mut(split);

        // Live run starting at head, then the part that wrapped to slot 0
        let first = len.min(tail.len());
        IterMut::new(tail, first, wrapped, len - first)
    }

    // ----------------------------------------
    // CLEARING & RESIZING
    // ----------------------------------------

    /// Forgets every element but keeps storage and capacity.
    ///
    /// Old values stay in their slots until overwritten by later pushes.
    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }

    /// Forgets every element, frees storage and drops capacity to 0.
    pub fn clear_and_release(&mut self) {
        self.clear();
        self.data = Vec::new();
        self.capacity = 0;
    }

    /// Changes the capacity, keeping the newest `min(len, capacity)`
    /// elements in their original order.
    ///
    /// ## Example
    /// ```
    /// # use static_queue::StaticQueue;
    /// let mut queue = StaticQueue::with_capacity(5);
    /// queue.extend(['a', 'b', 'c', 'd', 'e']);
    /// queue.set_capacity(3);
    /// assert_eq!(queue.to_vec(), vec!['c', 'd', 'e']);
    /// ```
    pub fn set_capacity(&mut self, capacity: usize) {
        let keep = self.len.min(capacity);
        let mut data = std::mem::take(&mut self.data);

        // A non-zero head only happens once storage is fully populated
        if self.head != 0 {
            data.rotate_left(self.head);
        }
        data.truncate(self.len);
        data.drain(..self.len - keep);

        data.reserve_exact(capacity - keep);
        data.shrink_to(capacity);

        log::debug!(
            "Queue capacity {} -> {}, kept {} of {} elements",
            self.capacity,
            capacity,
            keep,
            self.len
        );

        self.data = data;
        self.head = 0;
        self.len = keep;
        self.capacity = capacity;
    }

    // ----------------------------------------
    // INDEX ARITHMETIC
    // ----------------------------------------

    /// Maps a logical position to a physical slot. Requires `capacity > 0`.
    fn slot(&self, logical: usize) -> usize {
        (self.head + logical) % self.capacity
    }

    /// Shifts negative indices by `len` and bounds-checks the result.
    fn normalize(&self, index: isize) -> QueueResult<usize> {
        let len = self.len as isize;
        let normalized = if index < 0 { index + len } else { index };

        if normalized < 0 || normalized >= len {
            return Err(QueueError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(normalized as usize)
    }
}

impl<T: Clone> StaticQueue<T> {
    /// Returns a clone of the element at `index`, or `default` when the
    /// normalized index is out of range. Never fails.
    pub fn get(&self, index: isize, default: T) -> T {
        match self.at(index) {
            Ok(value) => value.clone(),
            Err(_) => default,
        }
    }

    /// Returns cloned copies of all elements (oldest first).
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for StaticQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for StaticQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticQueue")
            .field("capacity", &self.capacity)
            .field("items", &DebugItems(self))
            .finish()
    }
}

/// Prints only the live elements.
struct DebugItems<'a, T>(&'a StaticQueue<T>);

impl<T: fmt::Debug> fmt::Debug for DebugItems<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<T> Extend<T> for StaticQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a StaticQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut StaticQueue<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

// ============================================
// TESTS
// ============================================

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(capacity: usize, values: impl IntoIterator<Item = i32>) -> StaticQueue<i32> {
        let mut queue = StaticQueue::with_capacity(capacity);
        queue.extend(values);
        queue
    }

    #[test]
    fn test_new_queue() {
        let queue: StaticQueue<i32> = StaticQueue::with_capacity(3);
        assert!(queue.is_empty());
        assert!(!queue.is_full());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.capacity(), 3);
    }

    #[test]
    fn test_size_tracking() {
        let mut queue = StaticQueue::with_capacity(3);

        queue.push_back(1);
        assert_eq!(queue.len(), 1);
        assert!(!queue.is_empty());
        assert!(!queue.is_full());

        queue.push_back(2);
        assert_eq!(queue.len(), 2);
        assert!(!queue.is_full());

        queue.push_back(3);
        assert_eq!(queue.len(), 3);
        assert!(queue.is_full());

        queue.push_back(4);
        assert_eq!(queue.len(), 3);
        assert!(queue.is_full());

        queue.clear();
        assert!(queue.is_empty());
        assert!(!queue.is_full());
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn test_empty_access() {
        let queue: StaticQueue<i32> = StaticQueue::with_capacity(3);

        assert_eq!(queue.front(), Err(QueueError::EmptyQueue));
        assert_eq!(queue.back(), Err(QueueError::EmptyQueue));
        assert_eq!(queue.get_clamped(1), Err(QueueError::EmptyQueue));
        assert_eq!(
            queue.at(0),
            Err(QueueError::IndexOutOfRange { index: 0, len: 0 })
        );
        assert_eq!(queue.get(0, -1), -1);
    }

    #[test]
    fn test_overflow_scenario() {
        let queue = filled(3, 1..=5);

        assert_eq!(queue.front(), Ok(&3));
        assert_eq!(queue.back(), Ok(&5));
        assert_eq!(queue.at(0), Ok(&3));
        assert_eq!(queue.at(-1), Ok(&5));
        assert_eq!(queue.get(5, -1), -1);
        assert_eq!(queue.get_clamped(10), Ok(&5));
    }

    #[test]
    fn test_positional_access() {
        // 0 and 1 get evicted
        let queue = filled(3, 0..=4);

        assert_eq!(queue.at(0), Ok(&2));
        assert_eq!(queue.at(1), Ok(&3));
        assert_eq!(queue.at(2), Ok(&4));
        assert_eq!(queue.at(-1), Ok(&4));
        assert_eq!(queue.at(-2), Ok(&3));
        assert_eq!(queue.at(-3), Ok(&2));
        assert_eq!(
            queue.at(3),
            Err(QueueError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            queue.at(-4),
            Err(QueueError::IndexOutOfRange { index: -4, len: 3 })
        );
    }

    #[test]
    fn test_get_with_default() {
        let queue = filled(3, 0..=4);

        assert_eq!(queue.get(0, -1), 2);
        assert_eq!(queue.get(1, -1), 3);
        assert_eq!(queue.get(2, -1), 4);
        assert_eq!(queue.get(3, -1), -1);
        assert_eq!(queue.get(4, -1), -1);
        assert_eq!(queue.get(-1, -1), 4);
        assert_eq!(queue.get(-2, -1), 3);
        assert_eq!(queue.get(-3, -1), 2);
        assert_eq!(queue.get(-4, -1), -1);
        assert_eq!(queue.get(-5, -1), -1);
    }

    #[test]
    fn test_get_clamped() {
        let queue = filled(3, 0..=4);

        assert_eq!(queue.get_clamped(0), Ok(&2));
        assert_eq!(queue.get_clamped(1), Ok(&3));
        assert_eq!(queue.get_clamped(2), Ok(&4));
        assert_eq!(queue.get_clamped(3), Ok(&4));
        assert_eq!(queue.get_clamped(4), Ok(&4));
        assert_eq!(queue.get_clamped(-1), Ok(&4));
        assert_eq!(queue.get_clamped(-2), Ok(&3));
        assert_eq!(queue.get_clamped(-3), Ok(&2));
        assert_eq!(queue.get_clamped(-4), Ok(&2));
        assert_eq!(queue.get_clamped(-100), Ok(&2));
        assert_eq!(queue.get_clamped(100), Ok(&4));
    }

    #[test]
    fn test_partial_fill_uses_len_not_capacity() {
        let queue = filled(10, [7, 8]);

        assert_eq!(queue.at(-1), Ok(&8));
        assert_eq!(queue.at(-2), Ok(&7));
        assert!(queue.at(2).is_err());
        assert!(queue.at(-3).is_err());
        assert_eq!(queue.get_clamped(9), Ok(&8));
    }

    #[test]
    fn test_mutable_access() {
        let mut queue = filled(3, 1..=4);

        *queue.front_mut().unwrap() = 20;
        *queue.back_mut().unwrap() = 40;
        *queue.at_mut(1).unwrap() += 100;

        assert_eq!(queue.to_vec(), vec![20, 103, 40]);

        let mut empty: StaticQueue<i32> = StaticQueue::with_capacity(2);
        assert_eq!(empty.front_mut(), Err(QueueError::EmptyQueue));
        assert_eq!(empty.back_mut(), Err(QueueError::EmptyQueue));
        assert!(empty.at_mut(0).is_err());
    }

    #[test]
    fn test_zero_capacity() {
        let mut queue: StaticQueue<i32> = StaticQueue::new();
        assert!(queue.is_empty());
        assert!(queue.is_full());

        queue.push_back(1);
        queue.push_back(2);
        assert_eq!(queue.len(), 0);
        assert!(queue.is_empty());
        assert!(queue.is_full());
        assert_eq!(queue.iter().count(), 0);

        let mut sized: StaticQueue<i32> = StaticQueue::with_capacity(0);
        sized.push_back(1);
        assert_eq!(sized.len(), 0);
        assert_eq!(sized.front(), Err(QueueError::EmptyQueue));
    }

    #[test]
    fn test_clear_behaves_like_fresh_queue() {
        let mut reused = filled(3, 1..=7);
        reused.clear();
        assert!(reused.is_empty());
        assert_eq!(reused.capacity(), 3);

        let mut fresh = StaticQueue::with_capacity(3);
        for i in 10..15 {
            reused.push_back(i);
            fresh.push_back(i);
            assert_eq!(reused.to_vec(), fresh.to_vec());
            assert_eq!(reused.len(), fresh.len());
        }
    }

    #[test]
    fn test_clear_and_release() {
        let mut queue = filled(4, 1..=6);
        queue.clear_and_release();

        assert_eq!(queue.capacity(), 0);
        assert!(queue.is_empty());
        assert!(queue.is_full());

        queue.push_back(9);
        assert_eq!(queue.len(), 0);

        queue.set_capacity(2);
        queue.extend([1, 2, 3]);
        assert_eq!(queue.to_vec(), vec![2, 3]);
    }

    #[test]
    fn test_set_capacity_on_fresh_queue() {
        let mut queue: StaticQueue<i32> = StaticQueue::new();
        queue.set_capacity(3);

        assert_eq!(queue.capacity(), 3);
        assert!(queue.is_empty());

        queue.extend(1..=4);
        assert_eq!(queue.to_vec(), vec![2, 3, 4]);
    }

    #[test]
    fn test_shrink_keeps_newest() {
        let mut queue = StaticQueue::with_capacity(5);
        queue.extend(['a', 'b', 'c', 'd', 'e']);

        queue.set_capacity(3);
        assert_eq!(queue.capacity(), 3);
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.to_vec(), vec!['c', 'd', 'e']);

        queue.push_back('f');
        assert_eq!(queue.to_vec(), vec!['d', 'e', 'f']);
    }

    #[test]
    fn test_shrink_wrapped_queue() {
        // Physical layout is [6, 7, 3, 4, 5] with head at slot 2
        let mut queue = filled(5, 1..=7);

        queue.set_capacity(2);
        assert_eq!(queue.to_vec(), vec![6, 7]);
        assert_eq!(queue.front(), Ok(&6));
    }

    #[test]
    fn test_grow_wrapped_queue() {
        let mut queue = filled(3, 1..=5);

        queue.set_capacity(5);
        assert_eq!(queue.capacity(), 5);
        assert_eq!(queue.len(), 3);
        assert!(!queue.is_full());
        assert_eq!(queue.to_vec(), vec![3, 4, 5]);

        queue.extend([6, 7, 8]);
        assert_eq!(queue.to_vec(), vec![4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_resize_to_zero() {
        let mut queue = filled(3, 1..=3);

        queue.set_capacity(0);
        assert!(queue.is_empty());
        assert!(queue.is_full());

        queue.push_back(4);
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn test_shrink_partially_filled_keeps_all() {
        let mut queue = filled(8, [1, 2]);

        queue.set_capacity(4);
        assert_eq!(queue.to_vec(), vec![1, 2]);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_iterator() {
        let queue = filled(3, 1..=5);

        let collected: Vec<_> = queue.iter().copied().collect();
        assert_eq!(collected, vec![3, 4, 5]);

        // Restartable
        assert_eq!(queue.iter().count(), 3);
        assert_eq!(queue.iter().len(), 3);

        let reversed: Vec<_> = queue.iter().rev().copied().collect();
        assert_eq!(reversed, vec![5, 4, 3]);

        let mut total = 0;
        for value in &queue {
            total += value;
        }
        assert_eq!(total, 12);
    }

    #[test]
    fn test_iter_mut_wrapped() {
        let mut queue = filled(4, 1..=6);

        for value in queue.iter_mut() {
            *value *= 10;
        }
        assert_eq!(queue.to_vec(), vec![30, 40, 50, 60]);

        for value in &mut queue {
            *value += 1;
        }
        assert_eq!(queue.to_vec(), vec![31, 41, 51, 61]);
    }

    #[test]
    fn test_iter_mut_skips_stale_slots() {
        let mut queue = filled(4, 1..=4);
        queue.clear();
        queue.push_back(9);

        let seen: Vec<_> = queue.iter_mut().map(|v| *v).collect();
        assert_eq!(seen, vec![9]);
        assert_eq!(queue.iter().count(), 1);
    }

    #[test]
    fn test_debug_shows_live_items_only() {
        let mut queue = filled(3, 1..=3);
        queue.clear();
        queue.push_back(8);

        let rendered = format!("{:?}", queue);
        assert!(rendered.contains("[8]"));
        assert!(rendered.contains("capacity: 3"));
    }
}
