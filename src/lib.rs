// This file is part of fixed-capacity-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `fixed-capacity-list`
//!
//! A `no_std` list container whose capacity is chosen at runtime, once, and
//! never changes afterwards.
//!
//! The core type, [`FixedCapacityList<T>`], owns a single heap buffer of
//! `capacity` slots and tracks a logical length `len ∈ 0..=capacity`. Only the
//! prefix `[0..len)` holds live elements. It supports:
//!
//! - positional insertion and removal with contiguous shifting (`O(len)`);
//! - front/back shortcuts (`push_back`, `push_front`, `pop_back`, `pop_front`);
//! - ordered insertion into an ascending list ([`FixedCapacityList::insert_sorted`]);
//! - left-to-right linear search ([`FixedCapacityList::find`],
//!   [`FixedCapacityList::contains`], [`FixedCapacityList::remove`]);
//! - checked access ([`FixedCapacityList::at`]) and slice-style indexing.
//!
//! ## When to use this crate
//!
//! - You know an upper bound on the number of elements, but only at runtime.
//! - You want insertion to fail instead of silently reallocating.
//! - You want `Vec`-like ordered removal without the growth policy.
//!
//! If you need growth, use `Vec`. If the capacity is a compile-time constant
//! and elements are `Copy`, a stack-allocated array vector is usually a
//! better fit.
//!
//! ## Capacity and errors
//!
//! - The buffer is allocated once, in [`FixedCapacityList::with_capacity`]
//!   (or [`FixedCapacityList::new`], which uses
//!   [`FixedCapacityList::DEFAULT_CAPACITY`]).
//! - Fallible operations return [`Error`] and leave the list unchanged:
//!   - [`Error::CapacityExceeded`]: insertion into a full list;
//!   - [`Error::InvalidIndex`]: position outside `0..=len` (insert) or
//!     `0..len` (pop, checked access);
//!   - [`Error::EmptyContainer`]: removal from an empty list;
//!   - [`Error::ValueNotFound`]: [`FixedCapacityList::remove`] found no match.
//! - [`FixedCapacityList::find`] reports "not found" with the sentinel `len()`,
//!   not an error.
//! - Indexing (`list[i]`) **panics** past `len`, exactly like slices.
//!
//! ## Example
//!
//! ```rust
//! use fixed_capacity_list::{Error, FixedCapacityList};
//!
//! let mut list = FixedCapacityList::with_capacity(3);
//! list.push_back(10).unwrap();
//! list.push_back(30).unwrap();
//! list.insert(1, 20).unwrap();
//! assert!(list.is_full());
//! assert_eq!(list.push_front(0), Err(Error::CapacityExceeded));
//!
//! assert_eq!(list.pop(1), Ok(20));
//! assert_eq!(list.as_slice(), &[10, 30]);
//! assert_eq!(list.find(&30), 1);
//! assert_eq!(list.find(&99), list.len());
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod error;
mod index;
mod list;

// Public exports (crate API surface)
pub use error::Error;
pub use list::FixedCapacityList;
