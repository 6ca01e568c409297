// Copyright 2025 the Duochart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mark id namespaces.

use duochart_core::MarkId;

/// The group a chart mark belongs to.
///
/// Within a layer, marks are keyed by row (item position), so a mark's identity is its
/// sequence position and nothing else.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Layer {
    /// One rectangle per item.
    Bars = 1,
    /// One value label per bar.
    BarLabels = 2,
    /// Bottom axis domain line (row 0) and ticks (row `i + 1`).
    XAxisRules = 3,
    /// Bottom axis tick labels.
    XAxisLabels = 4,
    /// Left axis domain line (row 0) and ticks (row `i + 1`).
    YAxisRules = 5,
    /// Left axis tick labels.
    YAxisLabels = 6,
    /// One arc per item.
    Slices = 7,
    /// Slice labels, only for slices wide enough to carry one.
    SliceLabels = 8,
}

impl Layer {
    /// The raw layer number used by [`MarkId::for_row`].
    pub const fn raw(self) -> u32 {
        self as u32
    }

    /// The id of the mark at `row` in this layer.
    pub const fn id(self, row: usize) -> MarkId {
        MarkId::for_row(self.raw(), row)
    }

    /// Returns `true` if `id` lives in this layer.
    pub const fn contains(self, id: MarkId) -> bool {
        id.layer() == self.raw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_layer_and_row() {
        let id = Layer::BarLabels.id(7);
        assert!(Layer::BarLabels.contains(id));
        assert!(!Layer::Bars.contains(id));
        assert_eq!(id.row(), 7);
        assert_ne!(Layer::Bars.id(0), Layer::Slices.id(0));
    }
}
