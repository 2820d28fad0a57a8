// This file is part of fixed-capacity-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::list::FixedCapacityList;

impl<T> FixedCapacityList<T> {
    /// Returns the live prefix as a shared slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: By invariant, all elements in `buf[..self.len]` are initialized,
        // and `self.len <= capacity`, so this creates a valid shared slice of `T`.
        unsafe { core::slice::from_raw_parts(self.buf.as_ptr().cast::<T>(), self.len) }
    }

    /// Returns the live prefix as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: By invariant, all elements in `buf[..self.len]` are initialized,
        // and `self.len <= capacity`. We have exclusive access via `&mut self`, so it
        // is sound to create a mutable slice over `buf[..self.len]`.
        unsafe { core::slice::from_raw_parts_mut(self.buf.as_mut_ptr().cast::<T>(), self.len) }
    }
}
