// This file is part of fixed-capacity-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::list::FixedCapacityList;

impl<T> FixedCapacityList<T> {
    /// Drops every live element and sets `len = 0`.
    ///
    /// The buffer and the capacity are kept; the list can be refilled without
    /// allocating.
    ///
    /// ```
    /// use fixed_capacity_list::FixedCapacityList;
    ///
    /// let mut list = FixedCapacityList::with_capacity(2);
    /// list.push_back(1).unwrap();
    /// list.push_back(2).unwrap();
    /// list.clear();
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), 2);
    /// ```
    pub fn clear(&mut self) {
        let len = self.len;
        // Length goes to zero before any destructor runs, so a panicking
        // destructor cannot lead to a double drop.
        self.len = 0;
        let live = core::ptr::slice_from_raw_parts_mut(self.buf.as_mut_ptr().cast::<T>(), len);
        // SAFETY: `buf[..len]` was initialized, and with `self.len == 0` no other
        // path will read or drop these slots again.
        unsafe { core::ptr::drop_in_place(live) };
    }
}

impl<T> Drop for FixedCapacityList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}
