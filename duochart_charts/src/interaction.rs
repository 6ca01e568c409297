// Copyright 2025 the Duochart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip state and pointer hit testing.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use core::fmt;

use duochart_data::{Dataset, Share};
use kurbo::Point;

use crate::bar_mark::BarShape;
use crate::config::TooltipConfig;
use crate::format::format_number;

/// Whether the tooltip box takes part in layout at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TooltipDisplay {
    /// Not rendered.
    #[default]
    None,
    /// Rendered as a block.
    Block,
}

/// What the tooltip says about one item.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipContent {
    /// Item name.
    pub name: String,
    /// Signed item value.
    pub value: f64,
    /// Portion of the dataset total.
    pub share: Share,
}

impl TooltipContent {
    /// Content for the item at `index`, or `None` if there is no such item.
    pub fn for_item(dataset: &Dataset, index: usize) -> Option<Self> {
        dataset.get(index).map(|item| Self {
            name: item.name().into(),
            value: item.value(),
            share: dataset.share(index),
        })
    }

    /// `name: ..`, `value: ..`, `share: ..`.
    pub fn lines(&self) -> [String; 3] {
        [
            format!("name: {}", self.name),
            format!("value: {}", format_number(self.value)),
            format!("share: {}", self.share),
        ]
    }
}

impl fmt::Display for TooltipContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [name, value, share] = self.lines();
        write!(f, "{name}\n{value}\n{share}")
    }
}

/// The floating tooltip of a bar chart.
///
/// Positions are in surface coordinates, like the cursor that placed it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tooltip {
    /// Layout participation.
    pub display: TooltipDisplay,
    /// `1` when shown, `0` when hidden.
    pub opacity: f64,
    /// Distance of the box's top edge from the surface top.
    pub top: f64,
    /// Distance of the box's left edge from the surface left.
    pub left: f64,
    /// What it says; `None` while hidden.
    pub content: Option<TooltipContent>,
}

impl Tooltip {
    /// A hidden tooltip.
    pub fn hidden() -> Self {
        Self::default()
    }

    /// A tooltip shown next to `cursor`.
    pub fn shown_at(cursor: Point, config: &TooltipConfig, content: TooltipContent) -> Self {
        Self {
            display: TooltipDisplay::Block,
            opacity: 1.0,
            top: cursor.y + config.offset_y,
            left: cursor.x + config.offset_x,
            content: Some(content),
        }
    }

    /// Returns `true` while the tooltip is shown.
    pub fn is_visible(&self) -> bool {
        self.display == TooltipDisplay::Block
    }
}

/// The bar under plot-local point `p`, if any.
///
/// Bars are tested at their resting geometry, so a bar still growing in is already
/// hoverable over its final extent.
pub fn hit_test(shapes: &[BarShape], p: Point) -> Option<usize> {
    shapes
        .iter()
        .find(|s| s.rect.contains(p))
        .map(|s| s.index)
}
