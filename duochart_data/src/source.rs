// Copyright 2025 the Duochart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data sources.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;

use crate::{DataError, Dataset, Item};

/// Names assigned to generated items, by position.
pub const ALPHABET: [&str; 26] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R",
    "S", "T", "U", "V", "W", "X", "Y", "Z",
];

/// Something that produces the items a chart displays.
///
/// A chart asks its source exactly once, at construction.
pub trait DataSource {
    /// Produces the ordered items.
    fn get_data(&mut self) -> Vec<Item>;

    /// Produces the items and assembles them into a [`Dataset`].
    fn load(&mut self) -> Result<Dataset, DataError> {
        let dataset = Dataset::new(self.get_data())?;
        tracing::debug!(
            items = dataset.len(),
            total = dataset.total(),
            "dataset loaded"
        );
        Ok(dataset)
    }
}

/// A source that always returns the same items.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StaticSource(pub Vec<Item>);

impl DataSource for StaticSource {
    fn get_data(&mut self) -> Vec<Item> {
        self.0.clone()
    }
}

/// Bounds for [`RandomSource`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Smallest item count (inclusive).
    pub min_items: usize,
    /// Largest item count (inclusive). Must not exceed the alphabet length.
    pub max_items: usize,
    /// Largest magnitude (inclusive); magnitudes start at 1.
    pub max_value: u32,
    /// Whether each value's sign is flipped with probability one half.
    pub signed: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_items: 10,
            max_items: 20,
            max_value: 100,
            signed: false,
        }
    }
}

impl GeneratorConfig {
    /// Sets the inclusive item-count range.
    pub fn with_item_range(mut self, min_items: usize, max_items: usize) -> Self {
        self.min_items = min_items;
        self.max_items = max_items;
        self
    }

    /// Sets the largest magnitude.
    pub fn with_max_value(mut self, max_value: u32) -> Self {
        self.max_value = max_value;
        self
    }

    /// Enables or disables negative values.
    pub fn with_signed(mut self, signed: bool) -> Self {
        self.signed = signed;
        self
    }

    /// Checks the bounds.
    pub fn validate(&self) -> Result<(), DataError> {
        if self.min_items > self.max_items {
            return Err(DataError::EmptyItemRange {
                min: self.min_items,
                max: self.max_items,
            });
        }
        if self.max_items > ALPHABET.len() {
            return Err(DataError::AlphabetExhausted {
                requested: self.max_items,
                available: ALPHABET.len(),
            });
        }
        if self.max_value < 1 {
            return Err(DataError::MaxValueTooSmall(self.max_value));
        }
        Ok(())
    }
}

/// Uniform random items: count in `[min_items, max_items]`, magnitude in `[1, max_value]`,
/// names taken from [`ALPHABET`] by position.
#[derive(Clone, Debug)]
pub struct RandomSource<R> {
    rng: R,
    config: GeneratorConfig,
}

impl<R: Rng> RandomSource<R> {
    /// Creates a source after validating `config`.
    pub fn new(rng: R, config: GeneratorConfig) -> Result<Self, DataError> {
        config.validate()?;
        Ok(Self { rng, config })
    }

    /// The active bounds.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }
}

impl<R: Rng> DataSource for RandomSource<R> {
    fn get_data(&mut self) -> Vec<Item> {
        let count = self
            .rng
            .random_range(self.config.min_items..=self.config.max_items);
        ALPHABET
            .iter()
            .take(count)
            .map(|name| {
                let magnitude = f64::from(self.rng.random_range(1..=self.config.max_value));
                let negative = self.config.signed && self.rng.random_bool(0.5);
                Item::new(*name, if negative { -magnitude } else { magnitude })
            })
            .collect()
    }
}
