// This file is part of fixed-capacity-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, list::FixedCapacityList};

impl<T> FixedCapacityList<T> {
    /// Inserts `value` at `index`, shifting `[index..len)` one slot to the right.
    ///
    /// - Returns [`Error::CapacityExceeded`] if the list is full.
    /// - Returns [`Error::InvalidIndex`] if `index > len`.
    ///
    /// Capacity is checked first. On error the list is unchanged and `value`
    /// is dropped.
    ///
    /// ```
    /// use fixed_capacity_list::{Error, FixedCapacityList};
    ///
    /// let mut list = FixedCapacityList::with_capacity(3);
    /// list.insert(0, 'b').unwrap();
    /// list.insert(0, 'a').unwrap();
    /// list.insert(2, 'c').unwrap();
    /// assert_eq!(list.as_slice(), &['a', 'b', 'c']);
    /// assert_eq!(list.insert(0, 'z'), Err(Error::CapacityExceeded));
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), Error> {
        if self.is_full() {
            return Err(Error::CapacityExceeded);
        }
        if index > self.len {
            return Err(Error::InvalidIndex);
        }
        let len = self.len;
        let ptr = self.buf.as_mut_ptr();

        // Shift right: [index..len) -> [index+1..len+1)
        unsafe {
            // SAFETY: `index <= len < capacity`, so both ranges lie inside the
            // buffer. `ptr::copy` handles the overlap. Slot `index` is left holding
            // a bitwise duplicate that is overwritten below without being dropped.
            core::ptr::copy(ptr.add(index), ptr.add(index + 1), len - index);
        }
        self.buf[index].write(value);

        self.len = len + 1;
        Ok(())
    }

    /// Appends `value`; same as `insert(len, value)`.
    #[inline]
    pub fn push_back(&mut self, value: T) -> Result<(), Error> {
        self.insert(self.len, value)
    }

    /// Prepends `value`; same as `insert(0, value)`.
    #[inline]
    pub fn push_front(&mut self, value: T) -> Result<(), Error> {
        self.insert(0, value)
    }

    /// Inserts `value` into an ascending list, keeping it ascending.
    ///
    /// The element lands before the first element that is `>= value`, so
    /// earlier equal elements stay in front of it. Existing elements are not
    /// re-sorted: if the list is not ascending, the scan still stops at the
    /// first element `>= value`. Fails like [`insert`](Self::insert).
    ///
    /// ```
    /// use fixed_capacity_list::FixedCapacityList;
    ///
    /// let mut list = FixedCapacityList::with_capacity(5);
    /// for x in [5, 2, 8, 2] {
    ///     list.insert_sorted(x).unwrap();
    /// }
    /// assert_eq!(list.as_slice(), &[2, 2, 5, 8]);
    /// ```
    pub fn insert_sorted(&mut self, value: T) -> Result<(), Error>
    where
        T: Ord,
    {
        // The scan never looks past the live prefix.
        let index = self.as_slice().iter().take_while(|x| **x < value).count();
        self.insert(index, value)
    }
}
