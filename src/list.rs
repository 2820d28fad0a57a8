// This file is part of fixed-capacity-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `FixedCapacityList` type and its inherent API.
//!
//! `FixedCapacityList<T>` owns one heap buffer of `capacity` slots, allocated
//! at construction, and tracks a logical length. Mutations shift elements
//! inside that buffer; nothing ever reallocates.

mod clear;
mod insert;
mod new;
mod pop;
mod slice;

// Crate imports
use crate::error::Error;

// Alloc imports
use alloc::boxed::Box;

// Core imports
use core::{
    fmt,
    hash::{Hash, Hasher},
    mem::MaybeUninit,
};

/// A heap-allocated list with a capacity fixed at construction.
///
/// `FixedCapacityList<T>` stores up to `capacity` elements contiguously and
/// tracks a logical length `len ∈ 0..=capacity`:
///
/// - capacity is chosen at runtime ([`with_capacity`](Self::with_capacity)),
///   or is [`DEFAULT_CAPACITY`](Self::DEFAULT_CAPACITY) for [`new`](Self::new);
/// - the buffer is allocated once and released when the list is dropped;
/// - inserting into a full list fails with [`Error::CapacityExceeded`]
///   instead of reallocating.
///
/// # Layout and invariants
///
/// - `buf` is a `Box<[MaybeUninit<T>]>` of exactly `capacity` slots;
/// - `len <= buf.len()` at all times;
/// - `buf[..len]` is initialized, contiguous and in logical order; slots in
///   `[len..capacity)` are never read.
///
/// # Complexity
///
/// - [`insert`](Self::insert), [`pop`](Self::pop) and their front variants
///   shift the tail of the list and are `O(len)`; the back variants are `O(1)`.
/// - [`find`](Self::find), [`contains`](Self::contains) and
///   [`remove`](Self::remove) are left-to-right linear scans.
/// - [`insert_sorted`](Self::insert_sorted) is a linear scan followed by an insert.
///
/// # Examples
///
/// ```rust
/// use fixed_capacity_list::FixedCapacityList;
///
/// let mut list = FixedCapacityList::with_capacity(5);
/// for x in [5, 2, 8, 2] {
///     list.insert_sorted(x).unwrap();
/// }
/// assert_eq!(list.as_slice(), &[2, 2, 5, 8]);
/// assert_eq!(list.spare_capacity(), 1);
/// ```
pub struct FixedCapacityList<T> {
    pub(crate) buf: Box<[MaybeUninit<T>]>,
    pub(crate) len: usize,
}

impl<T> FixedCapacityList<T> {
    /// Capacity used by [`new`](Self::new) and [`Default`].
    pub const DEFAULT_CAPACITY: usize = 10;

    /// Returns the fixed capacity chosen at construction.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the current number of live elements (`0..=capacity`).
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `len == capacity`.
    ///
    /// A list created with capacity `0` is both empty and full.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.buf.len()
    }

    /// Returns `capacity - len`, the number of further elements that fit.
    #[inline]
    pub fn spare_capacity(&self) -> usize {
        self.buf.len() - self.len
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    /// Bounds-checked access to the element at `index`.
    ///
    /// The index is checked against `len`, not `capacity`: unused slots are
    /// never handed out.
    ///
    /// ```
    /// use fixed_capacity_list::{Error, FixedCapacityList};
    ///
    /// let mut list = FixedCapacityList::with_capacity(4);
    /// list.push_back('a').unwrap();
    /// assert_eq!(list.at(0), Ok(&'a'));
    /// assert_eq!(list.at(1), Err(Error::InvalidIndex));
    /// ```
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        self.get(index).ok_or(Error::InvalidIndex)
    }

    /// Mutable flavor of [`at`](Self::at).
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        self.get_mut(index).ok_or(Error::InvalidIndex)
    }

    /// Returns a reference to the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be smaller than [`len`](Self::len). Calling this with an
    /// index in `[len..capacity)` reads an uninitialized slot; anything past
    /// `capacity` is out of the allocation. Both are undefined behavior.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        // SAFETY: the caller guarantees `index < len`, and `buf[..len]` is initialized.
        unsafe { self.buf.get_unchecked(index).assume_init_ref() }
    }

    /// Mutable flavor of [`get_unchecked`](Self::get_unchecked).
    ///
    /// # Safety
    ///
    /// Same contract as [`get_unchecked`](Self::get_unchecked): `index < len`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len);
        // SAFETY: the caller guarantees `index < len`, and `buf[..len]` is initialized.
        unsafe { self.buf.get_unchecked_mut(index).assume_init_mut() }
    }

    /// Returns the index of the first element equal to `value`, scanning
    /// left to right.
    ///
    /// Not finding the value is a normal outcome: the sentinel `len()` is
    /// returned in that case.
    ///
    /// ```
    /// use fixed_capacity_list::FixedCapacityList;
    ///
    /// let mut list = FixedCapacityList::new();
    /// list.push_back(7).unwrap();
    /// list.push_back(9).unwrap();
    /// assert_eq!(list.find(&9), 1);
    /// assert_eq!(list.find(&4), list.len());
    /// ```
    pub fn find(&self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.as_slice()
            .iter()
            .position(|x| x == value)
            .unwrap_or(self.len)
    }

    /// Returns `true` if some live element equals `value`.
    #[inline]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.find(value) < self.len
    }
}

impl<T: fmt::Debug> fmt::Debug for FixedCapacityList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedCapacityList")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

// Equality and hashing only look at the live elements, not at the capacity.
impl<T: PartialEq> PartialEq for FixedCapacityList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq> Eq for FixedCapacityList<T> {}
impl<T: Hash> Hash for FixedCapacityList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T: Clone> Clone for FixedCapacityList<T> {
    /// Deep copy with the same capacity.
    fn clone(&self) -> Self {
        let mut out = Self::with_capacity(self.capacity());
        for x in self.as_slice() {
            out.buf[out.len].write(x.clone());
            out.len += 1;
        }
        out
    }
}

impl<T> AsRef<[T]> for FixedCapacityList<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> AsMut<[T]> for FixedCapacityList<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}


#[cfg(test)]
mod proptests {
    // Imports
    use super::FixedCapacityList;
    use crate::Error;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    const TEST_CAPACITY: usize = 32;

    proptest! {
        /// push_back counts elements and reports full exactly at capacity.
        #[test]
        fn push_back_tracks_len_until_full(values in prop::collection::vec(any::<i32>(), 0..=TEST_CAPACITY)) {
            let mut list = FixedCapacityList::with_capacity(TEST_CAPACITY);
            for (i, &v) in values.iter().enumerate() {
                prop_assert!(!list.is_full());
                list.push_back(v).unwrap();
                prop_assert_eq!(list.len(), i + 1);
            }
            prop_assert_eq!(list.is_full(), values.len() == TEST_CAPACITY);
            if list.is_full() {
                prop_assert_eq!(list.push_back(0), Err(Error::CapacityExceeded));
            }
        }

        /// push_back followed by pop_back restores the previous state.
        #[test]
        fn push_back_pop_back_round_trip(
            values in prop::collection::vec(any::<i32>(), 0..TEST_CAPACITY),
            extra in any::<i32>(),
        ) {
            let mut list = FixedCapacityList::with_capacity(TEST_CAPACITY);
            for &v in &values {
                list.push_back(v).unwrap();
            }
            let before = list.clone();
            list.push_back(extra).unwrap();
            prop_assert_eq!(list.pop_back(), Ok(extra));
            prop_assert_eq!(list, before);
        }

        /// push_front followed by pop_front restores the previous state.
        #[test]
        fn push_front_pop_front_round_trip(
            values in prop::collection::vec(any::<i32>(), 0..TEST_CAPACITY),
            extra in any::<i32>(),
        ) {
            let mut list = FixedCapacityList::with_capacity(TEST_CAPACITY);
            for &v in &values {
                list.push_back(v).unwrap();
            }
            let before = list.clone();
            list.push_front(extra).unwrap();
            prop_assert_eq!(list.pop_front(), Ok(extra));
            prop_assert_eq!(list, before);
        }

        /// insert_sorted keeps the list non-decreasing and matches a stable sort.
        #[test]
        fn insert_sorted_keeps_order(values in prop::collection::vec(-50i32..50, 0..=TEST_CAPACITY)) {
            let mut list = FixedCapacityList::with_capacity(TEST_CAPACITY);
            for &v in &values {
                list.insert_sorted(v).unwrap();
            }
            prop_assert!(list.as_slice().windows(2).all(|w| w[0] <= w[1]));

            let mut expected = values.clone();
            expected.sort();
            prop_assert_eq!(list.as_slice(), &expected[..]);
        }

        /// find on a freshly inserted unique element returns its index.
        #[test]
        fn find_returns_insert_position(
            values in prop::collection::vec(0i32..1000, 0..TEST_CAPACITY),
            pos in any::<prop::sample::Index>(),
        ) {
            let mut list = FixedCapacityList::with_capacity(TEST_CAPACITY);
            for &v in &values {
                list.push_back(v).unwrap();
            }
            let index = pos.index(values.len() + 1);
            list.insert(index, -1).unwrap();
            prop_assert_eq!(list.find(&-1), index);
        }

        /// remove on a unique value shrinks the list by one and drops it.
        #[test]
        fn remove_unique_value(
            values in prop::collection::vec(0i32..1000, 0..TEST_CAPACITY),
            pos in any::<prop::sample::Index>(),
        ) {
            let mut list = FixedCapacityList::with_capacity(TEST_CAPACITY);
            for &v in &values {
                list.push_back(v).unwrap();
            }
            list.insert(pos.index(values.len() + 1), -1).unwrap();
            let len = list.len();
            prop_assert_eq!(list.remove(&-1), Ok(()));
            prop_assert_eq!(list.len(), len - 1);
            prop_assert!(!list.contains(&-1));
            prop_assert_eq!(list.as_slice(), &values[..]);
        }

        /// Positional insert/pop agree with the same operations on a Vec.
        #[test]
        fn matches_vec_model(ops in prop::collection::vec((any::<bool>(), any::<prop::sample::Index>(), any::<u8>()), 0..64)) {
            let mut list = FixedCapacityList::with_capacity(8);
            let mut model: Vec<u8> = Vec::new();
            for (is_insert, pos, value) in ops {
                if is_insert {
                    let index = pos.index(model.len() + 1);
                    let res = list.insert(index, value);
                    if model.len() == 8 {
                        prop_assert_eq!(res, Err(Error::CapacityExceeded));
                    } else {
                        prop_assert_eq!(res, Ok(()));
                        model.insert(index, value);
                    }
                } else if model.is_empty() {
                    prop_assert_eq!(list.pop(0), Err(Error::EmptyContainer));
                } else {
                    let index = pos.index(model.len());
                    prop_assert_eq!(list.pop(index), Ok(model.remove(index)));
                }
                prop_assert_eq!(list.as_slice(), &model[..]);
            }
        }
    }
}
