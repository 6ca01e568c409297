// Copyright 2025 the Duochart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

/// Errors raised while configuring a data source or assembling a dataset.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DataError {
    /// The generator's item-count bounds are inverted.
    #[error("item count range is empty: min {min} > max {max}")]
    EmptyItemRange {
        /// Configured minimum.
        min: usize,
        /// Configured maximum.
        max: usize,
    },
    /// More items were requested than there are names available.
    #[error("cannot name {requested} items from an alphabet of {available}")]
    AlphabetExhausted {
        /// Requested maximum item count.
        requested: usize,
        /// Number of available names.
        available: usize,
    },
    /// The maximum generated magnitude is below 1.
    #[error("maximum value must be at least 1, got {0}")]
    MaxValueTooSmall(u32),
    /// Two items share a name.
    #[error("duplicate item name {0:?}")]
    DuplicateName(String),
    /// An item value is NaN or infinite.
    #[error("item {name:?} has a non-finite value")]
    NonFiniteValue {
        /// Offending item name.
        name: String,
    },
}
