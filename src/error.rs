// This file is part of fixed-capacity-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `FixedCapacityList`.
//!
//! These errors represent capacity, bounds and lookup conditions.
//! They are `Copy` and implement `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by operations on [`FixedCapacityList`](crate::FixedCapacityList).
///
/// A call that returns an error leaves the list unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// An insertion was attempted on a full list (`len == capacity`).
    CapacityExceeded,
    /// An index was outside the valid range for the operation.
    ///
    /// Insertion accepts `0..=len`; removal and checked access accept `0..len`.
    InvalidIndex,
    /// A removal was attempted on an empty list.
    EmptyContainer,
    /// [`remove`](crate::FixedCapacityList::remove) found no matching element.
    ValueNotFound,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded => f.write_str("capacity exceeded"),
            Self::InvalidIndex => f.write_str("invalid index"),
            Self::EmptyContainer => f.write_str("empty container"),
            Self::ValueNotFound => f.write_str("value not found"),
        }
    }
}

impl CoreError for Error {}
