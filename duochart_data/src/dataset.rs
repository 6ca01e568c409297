// Copyright 2025 the Duochart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Items, datasets, and share computation.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashSet;

use crate::DataError;

/// One named, signed value.
///
/// The magnitude is derived once at construction, so `absolute_value() == value().abs()`
/// always holds.
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    name: String,
    value: f64,
    absolute_value: f64,
}

impl Item {
    /// Creates an item.
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            absolute_value: value.abs(),
        }
    }

    /// The category name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The signed value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// `|value|`.
    pub fn absolute_value(&self) -> f64 {
        self.absolute_value
    }
}

/// A portion of the dataset total.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Share {
    /// Percentage in `0..=100`.
    Percent(f64),
    /// The total is zero, so no share is defined.
    Undefined,
}

impl Share {
    /// Returns the percentage, if defined.
    pub fn percent(self) -> Option<f64> {
        match self {
            Self::Percent(p) => Some(p),
            Self::Undefined => None,
        }
    }
}

impl fmt::Display for Share {
    /// Two decimals followed by `%`, or `n/a`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percent(p) => write!(f, "{p:.2}%"),
            Self::Undefined => f.write_str("n/a"),
        }
    }
}

/// An ordered sequence of items plus the sum of their magnitudes.
///
/// Order is significant: it drives bar order along the x axis and slice order around
/// the pie.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    items: Vec<Item>,
    total: f64,
}

impl Dataset {
    /// Assembles a dataset, checking that names are unique and values finite.
    pub fn new(items: Vec<Item>) -> Result<Self, DataError> {
        {
            let mut seen: HashSet<&str> = HashSet::with_capacity(items.len());
            for item in &items {
                if !item.value.is_finite() {
                    return Err(DataError::NonFiniteValue {
                        name: item.name.clone(),
                    });
                }
                if !seen.insert(item.name.as_str()) {
                    return Err(DataError::DuplicateName(item.name.clone()));
                }
            }
        }
        let total = items.iter().map(Item::absolute_value).sum();
        Ok(Self { items, total })
    }

    /// Convenience for `(name, value)` pairs.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, f64)>) -> Result<Self, DataError> {
        Self::new(pairs.into_iter().map(|(n, v)| Item::new(n, v)).collect())
    }

    /// The items, in order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the item at `index`.
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of absolute values; `0` for an empty dataset.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// The largest signed value, clamped to be at least `0`.
    ///
    /// An empty or all-non-positive dataset yields `0`.
    pub fn max_value(&self) -> f64 {
        self.items.iter().map(Item::value).fold(0.0, f64::max)
    }

    /// Item names, in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(Item::name)
    }

    /// The share of the total carried by the item at `index`.
    ///
    /// Returns [`Share::Undefined`] when the total is zero or the index is out of range.
    pub fn share(&self, index: usize) -> Share {
        match self.items.get(index) {
            Some(item) if self.total > 0.0 => {
                Share::Percent((item.absolute_value / self.total).abs() * 100.0)
            }
            _ => Share::Undefined,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;
    use alloc::vec;

    use super::*;

    #[test]
    fn item_magnitude_matches_value() {
        for v in [-7.5, -0.0, 0.0, 3.0, 100.0] {
            let item = Item::new("A", v);
            assert_eq!(item.absolute_value(), v.abs());
        }
    }

    #[test]
    fn total_sums_magnitudes() {
        let ds = Dataset::from_pairs([("A", 10.0), ("B", -5.0), ("C", 2.5)]).unwrap();
        assert_eq!(ds.total(), 17.5);
        let resummed: f64 = ds.items().iter().map(Item::absolute_value).sum();
        assert_eq!(resummed, ds.total());
    }

    #[test]
    fn max_value_is_clamped_at_zero() {
        assert_eq!(Dataset::default().max_value(), 0.0);
        let negative = Dataset::from_pairs([("A", -3.0), ("B", -9.0)]).unwrap();
        assert_eq!(negative.max_value(), 0.0);
        let mixed = Dataset::from_pairs([("A", -3.0), ("B", 9.0)]).unwrap();
        assert_eq!(mixed.max_value(), 9.0);
    }

    #[test]
    fn share_is_percent_of_total() {
        let ds = Dataset::from_pairs([("A", 1.0), ("B", -3.0)]).unwrap();
        assert_eq!(ds.share(1), Share::Percent(75.0));
        assert_eq!(ds.share(1).to_string(), "75.00%");
        assert_eq!(ds.share(0).to_string(), "25.00%");
    }

    #[test]
    fn share_without_total_is_undefined() {
        let empty = Dataset::default();
        assert_eq!(empty.total(), 0.0);
        assert_eq!(empty.share(0), Share::Undefined);

        let zeros = Dataset::from_pairs([("A", 0.0)]).unwrap();
        assert_eq!(zeros.share(0), Share::Undefined);
        assert_eq!(zeros.share(0).to_string(), "n/a");
        assert_eq!(zeros.share(0).percent(), None);
    }

    #[test]
    fn rejects_duplicate_names_and_non_finite_values() {
        assert_eq!(
            Dataset::from_pairs([("A", 1.0), ("A", 2.0)]),
            Err(DataError::DuplicateName("A".into()))
        );
        assert!(matches!(
            Dataset::new(vec![Item::new("B", f64::NAN)]),
            Err(DataError::NonFiniteValue { .. })
        ));
    }

    #[test]
    fn unique_items_are_kept_in_order() {
        let items = vec![Item::new("A", 2.0), Item::new("B", -1.0), Item::new("C", 0.0)];
        let ds = Dataset::new(items.clone()).unwrap();
        assert_eq!(ds.items(), items.as_slice());
        assert_eq!(ds.total(), 3.0);
    }
}
