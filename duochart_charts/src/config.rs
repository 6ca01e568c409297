// Copyright 2025 the Duochart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart configuration.
//!
//! Every timing, offset, and color the charts use lives here with its default value, so
//! the animation and layout contract can be inspected and overridden in one place.

use core::time::Duration;

use duochart_core::Easing;
use duochart_data::DataError;
use peniko::Color;
use peniko::color::palette::css;

use crate::axis::AxisStyle;
use crate::layout::Margins;

/// Errors reported when validating a chart configuration.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Band padding must lie in `0..1`.
    #[error("band padding {0} is outside 0..1")]
    InvalidPadding(f64),
    /// Margins must be finite and non-negative.
    #[error("margins must be finite and non-negative")]
    InvalidMargins,
    /// A length (offset, inset, font size) was negative or not finite.
    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidLength {
        /// Field name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },
    /// The label radius must be a fraction of the outer radius in `(0, 1]`.
    #[error("label radius ratio {0} is outside (0, 1]")]
    InvalidLabelRadius(f64),
    /// The name threshold must not exceed the value threshold.
    #[error("name label threshold {name} exceeds value label threshold {value}")]
    ThresholdOrder {
        /// Minimum span for the name line.
        name: f64,
        /// Minimum span for the value line.
        value: f64,
    },
    /// The slice palette needs at least one color.
    #[error("slice palette is empty")]
    EmptyPalette,
}

/// Errors reported when building a chart.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ChartError {
    /// The configuration is out of range.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The data source produced an unusable dataset.
    #[error(transparent)]
    Data(#[from] DataError),
}

fn check_length(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidLength { name, value })
    }
}

/// Timing of one transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    /// Wait before the transition starts.
    pub delay: Duration,
    /// Running time.
    pub duration: Duration,
    /// Progress curve.
    pub easing: Easing,
}

/// A staggered entrance: item `i` starts `base_delay + i * delay_stride` after the draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stagger {
    /// Running time of each item's transition.
    pub duration: Duration,
    /// Delay applied to every item.
    pub base_delay: Duration,
    /// Extra delay per item position.
    pub delay_stride: Duration,
    /// Progress curve.
    pub easing: Easing,
}

impl Stagger {
    /// The start delay of item `index`.
    pub fn delay_for(&self, index: usize) -> Duration {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.base_delay
            .saturating_add(self.delay_stride.saturating_mul(index))
    }

    /// The full timing of item `index`.
    pub fn timing(&self, index: usize) -> Timing {
        Timing {
            delay: self.delay_for(index),
            duration: self.duration,
            easing: self.easing,
        }
    }
}

/// Entrance animation of bars: grow from the baseline with a bounce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationConfig {
    /// Bar growth.
    pub bars: Stagger,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            bars: Stagger {
                duration: Duration::from_millis(1000),
                base_delay: Duration::ZERO,
                delay_stride: Duration::from_millis(80),
                easing: Easing::Bounce,
            },
        }
    }
}

/// Delayed reveal of bar value labels, after the bars have mostly landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LabelRevealConfig {
    /// Label reveal.
    pub labels: Stagger,
}

impl Default for LabelRevealConfig {
    fn default() -> Self {
        Self {
            labels: Stagger {
                duration: Duration::from_millis(1500),
                base_delay: Duration::from_millis(1000),
                delay_stride: Duration::from_millis(100),
                easing: Easing::CubicInOut,
            },
        }
    }
}

/// Hover highlight of a bar and its label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HighlightConfig {
    /// Outset applied to the left, right, and top edges of the bar.
    pub inset: f64,
    /// Upward nudge of the bar's label.
    pub label_lift: f64,
    /// Highlight color for both bar and label.
    pub color: Color,
    /// Running time of both the highlight and its reversal.
    pub duration: Duration,
    /// Progress curve.
    pub easing: Easing,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            inset: 3.0,
            label_lift: 3.0,
            color: css::GRAY,
            duration: Duration::from_millis(150),
            easing: Easing::Bounce,
        }
    }
}

impl HighlightConfig {
    /// Timing of the highlight transitions (no delay).
    pub fn timing(&self) -> Timing {
        Timing {
            delay: Duration::ZERO,
            duration: self.duration,
            easing: self.easing,
        }
    }
}

/// Tooltip placement relative to the cursor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipConfig {
    /// Added to the cursor x.
    pub offset_x: f64,
    /// Added to the cursor y.
    pub offset_y: f64,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 15.0,
        }
    }
}

/// Everything a [`crate::BarChart`] needs besides its data.
#[derive(Clone, Debug, PartialEq)]
pub struct BarChartConfig {
    /// Room around the plot for axes.
    pub margins: Margins,
    /// Band padding as a fraction of the step.
    pub band_padding: f64,
    /// Snap band geometry to whole units.
    pub round_bands: bool,
    /// Fill of bars with non-negative values.
    pub positive_fill: Color,
    /// Fill of bars with negative values.
    pub negative_fill: Color,
    /// Value label fill.
    pub label_fill: Color,
    /// Value label font size.
    pub label_font_size: f64,
    /// Gap between a positive bar's top and its label baseline.
    pub label_offset_above: f64,
    /// Gap between a negative bar's bottom and its label baseline.
    pub label_offset_below: f64,
    /// Whether to emit the bottom and left axes.
    pub axes: bool,
    /// Tick count hint for the left axis.
    pub y_ticks: usize,
    /// Styling shared by both axes.
    pub axis_style: AxisStyle,
    /// Bar entrance.
    pub animation: AnimationConfig,
    /// Label entrance.
    pub label_reveal: LabelRevealConfig,
    /// Hover highlight.
    pub highlight: HighlightConfig,
    /// Tooltip placement.
    pub tooltip: TooltipConfig,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            margins: Margins::new(20.0, 20.0, 30.0, 40.0),
            band_padding: 0.1,
            round_bands: true,
            positive_fill: css::BLACK,
            negative_fill: css::FIREBRICK,
            label_fill: css::BLACK,
            label_font_size: 15.0,
            label_offset_above: 5.0,
            label_offset_below: 15.0,
            axes: true,
            y_ticks: 10,
            axis_style: AxisStyle::default(),
            animation: AnimationConfig::default(),
            label_reveal: LabelRevealConfig::default(),
            highlight: HighlightConfig::default(),
            tooltip: TooltipConfig::default(),
        }
    }
}

impl BarChartConfig {
    /// Sets the plot margins.
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Sets the band padding.
    pub fn with_band_padding(mut self, padding: f64) -> Self {
        self.band_padding = padding;
        self
    }

    /// Enables or disables the axes.
    pub fn with_axes(mut self, axes: bool) -> Self {
        self.axes = axes;
        self
    }

    /// Replaces the axis styling.
    pub fn with_axis_style(mut self, style: AxisStyle) -> Self {
        self.axis_style = style;
        self
    }

    /// Replaces the hover highlight.
    pub fn with_highlight(mut self, highlight: HighlightConfig) -> Self {
        self.highlight = highlight;
        self
    }

    /// Checks ranges of every numeric field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.margins.is_valid() {
            return Err(ConfigError::InvalidMargins);
        }
        if !(0.0..1.0).contains(&self.band_padding) {
            return Err(ConfigError::InvalidPadding(self.band_padding));
        }
        check_length("label_font_size", self.label_font_size)?;
        check_length("label_offset_above", self.label_offset_above)?;
        check_length("label_offset_below", self.label_offset_below)?;
        check_length("axis_style.label_font_size", self.axis_style.label_font_size)?;
        check_length("axis_style.tick_size", self.axis_style.tick_size)?;
        check_length("highlight.inset", self.highlight.inset)?;
        check_length("highlight.label_lift", self.highlight.label_lift)?;
        if !(self.tooltip.offset_x.is_finite() && self.tooltip.offset_y.is_finite()) {
            return Err(ConfigError::InvalidLength {
                name: "tooltip offset",
                value: if self.tooltip.offset_x.is_finite() {
                    self.tooltip.offset_y
                } else {
                    self.tooltip.offset_x
                },
            });
        }
        Ok(())
    }
}

/// The ten-color categorical palette used for pie slices.
pub const CATEGORY10: [Color; 10] = [
    Color::from_rgb8(0x1f, 0x77, 0xb4),
    Color::from_rgb8(0xff, 0x7f, 0x0e),
    Color::from_rgb8(0x2c, 0xa0, 0x2c),
    Color::from_rgb8(0xd6, 0x27, 0x28),
    Color::from_rgb8(0x94, 0x67, 0xbd),
    Color::from_rgb8(0x8c, 0x56, 0x4b),
    Color::from_rgb8(0xe3, 0x77, 0xc2),
    Color::from_rgb8(0x7f, 0x7f, 0x7f),
    Color::from_rgb8(0xbc, 0xbd, 0x22),
    Color::from_rgb8(0x17, 0xbe, 0xcf),
];

/// Everything a [`crate::PieChart`] needs besides its data.
#[derive(Clone, Debug, PartialEq)]
pub struct PieChartConfig {
    /// Label anchor radius as a fraction of the outer radius.
    pub label_radius_ratio: f64,
    /// A slice must span strictly more than this many radians to show its name.
    pub name_min_span: f64,
    /// A slice must span strictly more than this many radians to show its value.
    pub value_min_span: f64,
    /// Slice fills, cycled by slice position.
    pub palette: &'static [Color],
    /// Label font size.
    pub label_font_size: f64,
    /// Label fill.
    pub label_fill: Color,
    /// Line offset of the value line, in ems.
    pub value_line_dy_em: f64,
    /// Fill opacity of the value line.
    pub value_opacity: f32,
}

impl Default for PieChartConfig {
    fn default() -> Self {
        Self {
            label_radius_ratio: 0.8,
            name_min_span: 0.05,
            value_min_span: 0.25,
            palette: &CATEGORY10,
            label_font_size: 12.0,
            label_fill: css::BLACK,
            value_line_dy_em: 1.3,
            value_opacity: 0.7,
        }
    }
}

impl PieChartConfig {
    /// Sets both label thresholds, in radians.
    pub fn with_thresholds(mut self, name_min_span: f64, value_min_span: f64) -> Self {
        self.name_min_span = name_min_span;
        self.value_min_span = value_min_span;
        self
    }

    /// Sets the slice palette.
    pub fn with_palette(mut self, palette: &'static [Color]) -> Self {
        self.palette = palette;
        self
    }

    /// Checks ranges of every numeric field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.label_radius_ratio > 0.0 && self.label_radius_ratio <= 1.0) {
            return Err(ConfigError::InvalidLabelRadius(self.label_radius_ratio));
        }
        check_length("name_min_span", self.name_min_span)?;
        check_length("value_min_span", self.value_min_span)?;
        if self.name_min_span > self.value_min_span {
            return Err(ConfigError::ThresholdOrder {
                name: self.name_min_span,
                value: self.value_min_span,
            });
        }
        check_length("label_font_size", self.label_font_size)?;
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(())
    }

    /// Fill of the slice at `index`.
    pub fn slice_fill(&self, index: usize) -> Color {
        match self.palette.len() {
            0 => Color::BLACK,
            n => self.palette[index % n],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_delays_grow_by_stride() {
        let bars = AnimationConfig::default().bars;
        assert_eq!(bars.delay_for(0), Duration::ZERO);
        assert_eq!(bars.delay_for(3), Duration::from_millis(240));
        let labels = LabelRevealConfig::default().labels;
        assert_eq!(labels.delay_for(2), Duration::from_millis(1200));
        assert_eq!(labels.timing(0).duration, Duration::from_millis(1500));
    }

    #[test]
    fn defaults_validate() {
        assert_eq!(BarChartConfig::default().validate(), Ok(()));
        assert_eq!(PieChartConfig::default().validate(), Ok(()));
    }

    #[test]
    fn bar_config_rejects_bad_values() {
        assert_eq!(
            BarChartConfig::default().with_band_padding(1.0).validate(),
            Err(ConfigError::InvalidPadding(1.0))
        );
        assert_eq!(
            BarChartConfig::default()
                .with_margins(Margins::new(-1.0, 0.0, 0.0, 0.0))
                .validate(),
            Err(ConfigError::InvalidMargins)
        );
        let highlight = HighlightConfig {
            inset: -3.0,
            ..HighlightConfig::default()
        };
        assert!(matches!(
            BarChartConfig::default().with_highlight(highlight).validate(),
            Err(ConfigError::InvalidLength {
                name: "highlight.inset",
                ..
            })
        ));
    }

    #[test]
    fn pie_config_rejects_bad_values() {
        assert_eq!(
            PieChartConfig::default().with_thresholds(0.3, 0.2).validate(),
            Err(ConfigError::ThresholdOrder {
                name: 0.3,
                value: 0.2
            })
        );
        assert_eq!(
            PieChartConfig::default().with_palette(&[]).validate(),
            Err(ConfigError::EmptyPalette)
        );
    }

    #[test]
    fn palette_cycles() {
        let config = PieChartConfig::default();
        assert_eq!(config.slice_fill(0), CATEGORY10[0]);
        assert_eq!(config.slice_fill(12), CATEGORY10[2]);
    }
}
