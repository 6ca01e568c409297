// Copyright 2025 the Duochart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interactive bar and pie charts on top of `duochart_core`.
//!
//! This crate turns a [`duochart_data::Dataset`] into stable-identity marks:
//! - **Scales** map names, values, and magnitudes into plot coordinates and angles.
//! - **Mark specs** build rectangles, sectors, rules, and text from scaled values.
//! - **Stage** binds the marks to a scene and schedules their transitions.
//! - **Charts** ([`BarChart`], [`PieChart`]) own one dataset each and rebuild all
//!   their marks on every draw. The bar chart also answers hover events.
//! - **[`LayoutController`]** measures the viewport on mount and resize and drives
//!   the redraw.
//!
//! Rendering is out of scope: hosts sample a [`duochart_core::Frame`] at their own
//! clock and paint it. Text marks store unshaped strings.

#![no_std]

extern crate alloc;

mod axis;
mod bar_chart;
mod bar_mark;
mod config;
mod controller;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod interaction;
mod layer;
mod layout;
mod pie_chart;
mod reconcile;
mod rule_mark;
mod scale;
#[cfg(test)]
mod scenario_tests;
mod sector_mark;
mod text_mark;
mod z_order;

pub use axis::{AxisOrient, AxisSpec, AxisStyle};
pub use bar_chart::BarChart;
pub use bar_mark::{BarMarkSpec, BarScales, BarShape};
pub use config::{
    AnimationConfig, BarChartConfig, CATEGORY10, ChartError, ConfigError, HighlightConfig,
    LabelRevealConfig, PieChartConfig, Stagger, Timing, TooltipConfig,
};
pub use controller::{Chart, ControllerState, LayoutController, ViewportProvider};
pub use format::{format_floor, format_grouped, format_number};
pub use interaction::{Tooltip, TooltipContent, TooltipDisplay, hit_test};
pub use layer::Layer;
pub use layout::{DrawingArea, Margins, Size};
pub use pie_chart::{PieChart, PieSlice};
pub use reconcile::{RebuildStats, Stage, Staged};
pub use rule_mark::RuleMarkSpec;
pub use scale::{ArcAngles, ScaleBand, ScaleCategory, ScaleLinear, pie_angles};
pub use sector_mark::SectorMarkSpec;
pub use text_mark::TextMarkSpec;
pub use z_order::*;
