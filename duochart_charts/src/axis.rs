// Copyright 2025 the Duochart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis generation for the bar chart.
//!
//! Axes are plain marks: a domain rule, one tick rule per tick, and one text label per
//! tick. They are rebuilt with everything else on every draw.

extern crate alloc;

use alloc::vec::Vec;

use duochart_core::{Mark, TextAnchor, TextBaseline};
use kurbo::Point;
use peniko::Color;

use crate::format::format_number;
use crate::layer::Layer;
use crate::rule_mark::RuleMarkSpec;
use crate::scale::{ScaleCategory, ScaleLinear};
use crate::text_mark::TextMarkSpec;
use crate::z_order;

/// Visual styling for axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisStyle {
    /// Domain and tick stroke color.
    pub rule: Color,
    /// Domain and tick stroke width.
    pub rule_width: f64,
    /// Tick label color.
    pub label_fill: Color,
    /// Tick label font size.
    pub label_font_size: f64,
    /// Tick length, pointing away from the plot.
    pub tick_size: f64,
    /// Gap between tick end and label.
    pub tick_padding: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            rule: Color::BLACK,
            rule_width: 1.0,
            label_fill: Color::BLACK,
            label_font_size: 10.0,
            tick_size: 6.0,
            tick_padding: 3.0,
        }
    }
}

/// Axis orientation relative to the plot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisOrient {
    /// Horizontal axis; ticks and labels hang below the domain line.
    Bottom,
    /// Vertical axis at the plot's left edge; ticks and labels point left.
    Left,
}

/// A bar-chart axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisSpec {
    /// Orientation.
    pub orient: AxisOrient,
    /// Styling.
    pub style: AxisStyle,
}

impl AxisSpec {
    /// A bottom axis.
    pub fn bottom() -> Self {
        Self {
            orient: AxisOrient::Bottom,
            style: AxisStyle::default(),
        }
    }

    /// A left axis.
    pub fn left() -> Self {
        Self {
            orient: AxisOrient::Left,
            style: AxisStyle::default(),
        }
    }

    /// Replaces the styling.
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    fn layers(&self) -> (Layer, Layer) {
        match self.orient {
            AxisOrient::Bottom => (Layer::XAxisRules, Layer::XAxisLabels),
            AxisOrient::Left => (Layer::YAxisRules, Layer::YAxisLabels),
        }
    }

    /// Marks for a categorical axis: one tick per band, centered, labelled with the name.
    ///
    /// `offset` is the position of the domain line across the axis (the baseline y for a
    /// bottom axis) and `extent` its length.
    pub fn band_marks(&self, scale: &ScaleCategory, offset: f64, extent: f64) -> Vec<Mark> {
        let half = 0.5 * scale.band_width();
        let ticks = scale
            .names()
            .iter()
            .enumerate()
            .map(|(i, name)| (scale.band().x(i) + half, name.as_str()));
        self.marks(ticks, offset, (0.0, extent))
    }

    /// Marks for a continuous axis with round ticks over the scale's domain.
    pub fn linear_marks(&self, scale: &ScaleLinear, tick_count: usize, offset: f64) -> Vec<Mark> {
        let ticks: Vec<(f64, alloc::string::String)> = scale
            .ticks(tick_count)
            .into_iter()
            .map(|v| (scale.map(v), format_number(v)))
            .collect();
        self.marks(
            ticks.iter().map(|(pos, label)| (*pos, label.as_str())),
            offset,
            scale.range(),
        )
    }

    fn marks<'t>(
        &self,
        ticks: impl Iterator<Item = (f64, &'t str)>,
        offset: f64,
        (r0, r1): (f64, f64),
    ) -> Vec<Mark> {
        let (rules, labels) = self.layers();
        let s = &self.style;
        let reach = s.tick_size + s.tick_padding;

        let domain = match self.orient {
            AxisOrient::Bottom => RuleMarkSpec::horizontal(rules.id(0), offset, r0, r1),
            AxisOrient::Left => RuleMarkSpec::vertical(rules.id(0), offset, r0, r1),
        };
        let mut out = alloc::vec![domain.with_stroke(s.rule, s.rule_width).mark()];

        for (i, (pos, text)) in ticks.enumerate() {
            let (tick, label_pos, anchor, baseline) = match self.orient {
                AxisOrient::Bottom => (
                    RuleMarkSpec::vertical(rules.id(i + 1), pos, offset, offset + s.tick_size),
                    Point::new(pos, offset + reach),
                    TextAnchor::Middle,
                    TextBaseline::Hanging,
                ),
                AxisOrient::Left => (
                    RuleMarkSpec::horizontal(rules.id(i + 1), pos, offset - s.tick_size, offset),
                    Point::new(offset - reach, pos),
                    TextAnchor::End,
                    TextBaseline::Middle,
                ),
            };
            out.push(tick.with_stroke(s.rule, s.rule_width).mark());
            out.push(
                TextMarkSpec::new(labels.id(i), label_pos)
                    .with_text(text)
                    .with_font_size(s.label_font_size)
                    .with_fill(s.label_fill)
                    .with_anchor(anchor)
                    .with_baseline(baseline)
                    .with_z_index(z_order::AXIS_LABELS)
                    .mark(),
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use duochart_core::MarkKind;
    use kurbo::Shape;

    use super::*;
    use crate::scale::ScaleBand;

    #[test]
    fn bottom_axis_centers_ticks_on_bands() {
        let band = ScaleBand::new((0.0, 40.0), 0).with_padding(0.1).with_round(true);
        let scale = ScaleCategory::new(["A", "B"], band);
        let marks = AxisSpec::bottom().band_marks(&scale, 50.0, 40.0);
        // Domain, then (tick, label) per band.
        assert_eq!(marks.len(), 5);
        assert_eq!(marks[0].id, Layer::XAxisRules.id(0));

        let tick_b = marks[3].payload.as_path().expect("tick path");
        let b = tick_b.path.bounding_box();
        assert_eq!((b.x0, b.y0, b.y1), (29.5, 50.0, 56.0));

        let label_b = marks[4].payload.as_text().expect("label");
        assert_eq!(label_b.text(), "B");
        assert_eq!(label_b.pos, Point::new(29.5, 59.0));
        assert_eq!(marks[4].z_index, z_order::AXIS_LABELS);
    }

    #[test]
    fn left_axis_labels_round_ticks() {
        let scale = ScaleLinear::new((0.0, 10.0), (50.0, 0.0));
        let marks = AxisSpec::left().linear_marks(&scale, 5, 0.0);
        let labels: std::vec::Vec<_> = marks
            .iter()
            .filter(|m| m.kind() == MarkKind::Text)
            .filter_map(|m| m.payload.as_text().map(|t| (t.text(), t.pos)))
            .collect();
        assert_eq!(labels.len(), 6);
        assert_eq!(labels[0], ("0".into(), Point::new(-9.0, 50.0)));
        assert_eq!(labels[5], ("10".into(), Point::new(-9.0, 0.0)));
        assert!(marks.iter().all(|m| Layer::YAxisRules.contains(m.id)
            || Layer::YAxisLabels.contains(m.id)));
    }
}
