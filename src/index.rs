// This file is part of fixed-capacity-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`FixedCapacityList`](crate::FixedCapacityList).
//!
//! `Index` and `IndexMut` mirror slice behavior:
//! - panics past `len` (slots in `[len..capacity)` are never reachable);
//! - supports the common range forms;
//! - views are restricted to the live prefix `[0..len)`.
//!
//! For non-panicking access use [`at`](crate::FixedCapacityList::at).

// Crate imports
use crate::list::FixedCapacityList;

// Core imports
use core::ops::{Index, IndexMut, Range, RangeFrom, RangeFull, RangeTo};

impl<T> Index<usize> for FixedCapacityList<T> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.as_slice()[i]
    }
}
impl<T> IndexMut<usize> for FixedCapacityList<T> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.as_mut_slice()[i]
    }
}

// Ranges
impl<T> Index<Range<usize>> for FixedCapacityList<T> {
    type Output = [T];
    fn index(&self, r: Range<usize>) -> &Self::Output {
        &self.as_slice()[r]
    }
}
impl<T> Index<RangeFrom<usize>> for FixedCapacityList<T> {
    type Output = [T];
    fn index(&self, r: RangeFrom<usize>) -> &Self::Output {
        &self.as_slice()[r]
    }
}
impl<T> Index<RangeTo<usize>> for FixedCapacityList<T> {
    type Output = [T];
    fn index(&self, r: RangeTo<usize>) -> &Self::Output {
        &self.as_slice()[r]
    }
}
impl<T> Index<RangeFull> for FixedCapacityList<T> {
    type Output = [T];
    fn index(&self, _: RangeFull) -> &Self::Output {
        self.as_slice()
    }
}
impl<T> IndexMut<Range<usize>> for FixedCapacityList<T> {
    fn index_mut(&mut self, r: Range<usize>) -> &mut Self::Output {
        &mut self.as_mut_slice()[r]
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::FixedCapacityList;

    fn filled(cap: usize, values: &[i32]) -> FixedCapacityList<i32> {
        let mut v = FixedCapacityList::with_capacity(cap);
        for &x in values {
            v.push_back(x).unwrap();
        }
        v
    }

    #[test]
    fn test_index_reads_and_writes() {
        let mut v = filled(5, &[1, 2, 3]);
        assert_eq!(v[0], 1);
        assert_eq!(v[2], 3);
        v[1] = 20;
        assert_eq!(v.as_slice(), &[1, 20, 3]);
    }

    #[test]
    fn test_ranges() {
        let mut v = filled(6, &[0, 1, 2, 3, 4]);
        assert_eq!(&v[1..3], &[1, 2]);
        assert_eq!(&v[3..], &[3, 4]);
        assert_eq!(&v[..2], &[0, 1]);
        assert_eq!(&v[..], &[0, 1, 2, 3, 4]);
        v[1..3].copy_from_slice(&[10, 20]);
        assert_eq!(v.as_slice(), &[0, 10, 20, 3, 4]);
    }

    #[test]
    #[should_panic]
    fn test_index_past_len_panics_even_within_capacity() {
        let v = filled(4, &[1]);
        let _ = v[1];
    }

    #[test]
    #[should_panic]
    fn test_oob_panics_on_empty() {
        let v: FixedCapacityList<i32> = FixedCapacityList::new();
        let _ = v[0];
    }
}
