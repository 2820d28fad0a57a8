// This file is part of fixed-capacity-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::list::FixedCapacityList;

// Alloc imports
use alloc::boxed::Box;

impl<T> FixedCapacityList<T> {
    /// Constructs an empty list with [`DEFAULT_CAPACITY`](Self::DEFAULT_CAPACITY) slots.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Constructs an empty list able to hold exactly `capacity` elements.
    ///
    /// The whole buffer is allocated here; no later operation allocates.
    /// A capacity of `0` is allowed and yields a list that is always full.
    ///
    /// # Panics
    ///
    /// Panics if the buffer size in bytes exceeds `isize::MAX`.
    ///
    /// ```
    /// use fixed_capacity_list::FixedCapacityList;
    ///
    /// let list: FixedCapacityList<u64> = FixedCapacityList::with_capacity(64);
    /// assert_eq!(list.capacity(), 64);
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Box::new_uninit_slice(capacity),
            len: 0,
        }
    }
}

impl<T> Default for FixedCapacityList<T> {
    fn default() -> Self {
        Self::new()
    }
}
