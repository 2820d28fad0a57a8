// This file is part of fixed-capacity-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, list::FixedCapacityList};

impl<T> FixedCapacityList<T> {
    /// Removes and returns the element at `index`, shifting `[index+1..len)`
    /// one slot to the left.
    ///
    /// - Returns [`Error::EmptyContainer`] if the list is empty.
    /// - Returns [`Error::InvalidIndex`] if `index >= len`.
    ///
    /// ```
    /// use fixed_capacity_list::FixedCapacityList;
    ///
    /// let mut list = FixedCapacityList::new();
    /// list.push_back(10).unwrap();
    /// list.push_back(20).unwrap();
    /// list.push_back(30).unwrap();
    /// assert_eq!(list.pop(1), Ok(20));
    /// assert_eq!(list.as_slice(), &[10, 30]);
    /// ```
    pub fn pop(&mut self, index: usize) -> Result<T, Error> {
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }
        if index >= self.len {
            return Err(Error::InvalidIndex);
        }
        let len = self.len;

        let out = unsafe {
            // SAFETY: `index < len`, so `buf[index]` is within the initialized
            // prefix. The slot is treated as moved-from after this read.
            self.buf[index].assume_init_read()
        };

        // Shift left: [index+1..len) -> [index..len-1)
        let ptr = self.buf.as_mut_ptr();
        unsafe {
            // SAFETY: both ranges lie inside `buf[..len]`; `ptr::copy` handles the
            // overlap. Slot `len - 1` becomes unused once `len` is decremented.
            core::ptr::copy(ptr.add(index + 1), ptr.add(index), len - index - 1);
        }

        self.len = len - 1;
        Ok(out)
    }

    /// Removes and returns the last element.
    ///
    /// Returns [`Error::EmptyContainer`] if the list is empty.
    #[inline]
    pub fn pop_back(&mut self) -> Result<T, Error> {
        // An empty list is rejected by `pop` before the index is looked at.
        self.pop(self.len.saturating_sub(1))
    }

    /// Removes and returns the first element.
    ///
    /// Returns [`Error::EmptyContainer`] if the list is empty.
    #[inline]
    pub fn pop_front(&mut self) -> Result<T, Error> {
        self.pop(0)
    }

    /// Removes the first element equal to `value` and drops it.
    ///
    /// - Returns [`Error::EmptyContainer`] if the list is empty.
    /// - Returns [`Error::ValueNotFound`] if no element matches.
    ///
    /// ```
    /// use fixed_capacity_list::{Error, FixedCapacityList};
    ///
    /// let mut list = FixedCapacityList::new();
    /// list.push_back(1).unwrap();
    /// list.push_back(2).unwrap();
    /// list.push_back(1).unwrap();
    /// list.remove(&1).unwrap();
    /// assert_eq!(list.as_slice(), &[2, 1]);
    /// assert_eq!(list.remove(&5), Err(Error::ValueNotFound));
    /// ```
    pub fn remove(&mut self, value: &T) -> Result<(), Error>
    where
        T: PartialEq,
    {
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }
        let index = self.find(value);
        if index == self.len {
            return Err(Error::ValueNotFound);
        }
        self.pop(index).map(drop)
    }
}
