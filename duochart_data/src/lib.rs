// Copyright 2025 the Duochart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dataset model and data sources.
//!
//! A [`Dataset`] is an ordered, immutable list of named signed values together with
//! the sum of their magnitudes. Datasets come from a [`DataSource`]; the bundled
//! [`RandomSource`] produces between 10 and 20 items named `A`, `B`, ... by position.

#![no_std]

extern crate alloc;

mod dataset;
mod error;
mod source;

pub use dataset::{Dataset, Item, Share};
pub use error::DataError;
pub use source::{ALPHABET, DataSource, GeneratorConfig, RandomSource, StaticSource};
