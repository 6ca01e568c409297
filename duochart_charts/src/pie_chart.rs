// Copyright 2025 the Duochart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static pie chart.

extern crate alloc;

use alloc::vec::Vec;
use core::time::Duration;

use duochart_core::{FontWeight, Frame, Mark, TextAnchor, TextBaseline, TextSpan};
use duochart_data::{DataSource, Dataset};
use kurbo::Point;

use crate::config::{ChartError, ConfigError, PieChartConfig};
use crate::controller::Chart;
use crate::format::format_grouped;
use crate::layer::Layer;
use crate::layout::{DrawingArea, Margins, Size};
use crate::reconcile::{RebuildStats, Stage, Staged};
use crate::scale::{ArcAngles, pie_angles};
use crate::sector_mark::SectorMarkSpec;
use crate::text_mark::TextMarkSpec;

/// Geometry of one slice and what its label shows.
#[derive(Clone, Debug, PartialEq)]
pub struct PieSlice {
    /// Item position.
    pub index: usize,
    /// Angular extent, clockwise from twelve o'clock.
    pub angles: ArcAngles,
    /// Label position, relative to the pie center.
    pub label_anchor: Point,
    /// Whether the label carries the item name.
    pub shows_name: bool,
    /// Whether the label carries the item value.
    pub shows_value: bool,
}

impl PieSlice {
    /// Returns `true` if the slice gets a label mark at all.
    pub fn has_label(&self) -> bool {
        self.shows_name || self.shows_value
    }
}

#[derive(Clone, Debug)]
struct PieLayout {
    area: DrawingArea,
    radius: f64,
    slices: Vec<PieSlice>,
}

/// A pie chart over one dataset.
///
/// Slices follow input order and are sized by absolute value. Every draw places all
/// slices and labels directly, without animation. Marks are relative to the pie
/// center, which sits at [`PieChart::origin`] on a `2r × 2r` surface.
#[derive(Clone, Debug)]
pub struct PieChart {
    dataset: Dataset,
    config: PieChartConfig,
    stage: Stage,
    layout: Option<PieLayout>,
}

impl PieChart {
    /// Creates a chart after validating `config`. Nothing is drawn yet.
    pub fn new(dataset: Dataset, config: PieChartConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            dataset,
            config,
            stage: Stage::new(),
            layout: None,
        })
    }

    /// Loads the dataset from `source`, once, and creates the chart.
    pub fn from_source(
        source: &mut impl DataSource,
        config: PieChartConfig,
    ) -> Result<Self, ChartError> {
        let dataset = source.load()?;
        Ok(Self::new(dataset, config)?)
    }

    /// The bound dataset.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The active configuration.
    pub fn config(&self) -> &PieChartConfig {
        &self.config
    }

    /// The drawing area of the last draw.
    pub fn area(&self) -> Option<&DrawingArea> {
        self.layout.as_ref().map(|l| &l.area)
    }

    /// Outer radius of the last draw, `0` before the first.
    pub fn radius(&self) -> f64 {
        self.layout.as_ref().map_or(0.0, |l| l.radius)
    }

    /// Where the pie center sits on the surface: `(r, r)`.
    pub fn origin(&self) -> Point {
        let r = self.radius();
        Point::new(r, r)
    }

    /// The surface the pie occupies: `2r × 2r`.
    pub fn surface_size(&self) -> Size {
        let d = 2.0 * self.radius();
        Size::new(d, d)
    }

    /// Slices of the last draw.
    pub fn slices(&self) -> &[PieSlice] {
        self.layout.as_ref().map_or(&[][..], |l| l.slices.as_slice())
    }

    /// The marks on stage.
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    fn layout_slices(&self, radius: f64) -> Vec<PieSlice> {
        let magnitudes: Vec<f64> = self
            .dataset
            .items()
            .iter()
            .map(|item| item.absolute_value())
            .collect();
        let label_radius = radius * self.config.label_radius_ratio;
        pie_angles(&magnitudes)
            .into_iter()
            .enumerate()
            .map(|(index, angles)| {
                let span = angles.span();
                let anchor = SectorMarkSpec::new(Layer::Slices.id(index), Point::ZERO, radius, angles)
                    .centroid_at(label_radius);
                PieSlice {
                    index,
                    angles,
                    label_anchor: anchor,
                    shows_name: span > self.config.name_min_span,
                    shows_value: span > self.config.value_min_span,
                }
            })
            .collect()
    }

    fn slice_mark(&self, slice: &PieSlice, radius: f64) -> Mark {
        SectorMarkSpec::new(Layer::Slices.id(slice.index), Point::ZERO, radius, slice.angles)
            .with_fill(self.config.slice_fill(slice.index))
            .mark()
    }

    fn label_mark(&self, slice: &PieSlice) -> Option<Mark> {
        if !slice.has_label() {
            return None;
        }
        let item = self.dataset.get(slice.index)?;
        let mut spec = TextMarkSpec::new(Layer::SliceLabels.id(slice.index), slice.label_anchor)
            .with_font_size(self.config.label_font_size)
            .with_fill(self.config.label_fill)
            .with_anchor(TextAnchor::Middle)
            .with_baseline(TextBaseline::Middle);
        if slice.shows_name {
            spec = spec.with_span(TextSpan::new(item.name()).with_weight(FontWeight::Bold));
        }
        if slice.shows_value {
            spec = spec.with_span(
                TextSpan::new(format_grouped(item.value()))
                    .with_dy_em(self.config.value_line_dy_em)
                    .with_opacity(self.config.value_opacity),
            );
        }
        Some(spec.mark())
    }

    /// Sizes the pie to `area` and rebuilds every slice and label.
    pub fn draw(&mut self, area: DrawingArea, now: Duration) -> RebuildStats {
        let radius = area.radius();
        let slices = self.layout_slices(radius);

        let mut staged = Vec::with_capacity(slices.len() * 2);
        for slice in &slices {
            staged.push(Staged::at_rest(self.slice_mark(slice, radius)));
            if let Some(label) = self.label_mark(slice) {
                staged.push(Staged::at_rest(label));
            }
        }

        let (_, stats) = self.stage.rebuild(now, staged);
        tracing::debug!(
            radius,
            slices = slices.len(),
            labels = slices.iter().filter(|s| s.has_label()).count(),
            "pie chart drawn"
        );
        self.layout = Some(PieLayout {
            area,
            radius,
            slices,
        });
        stats
    }

    /// Everything as it appears at `now`.
    pub fn frame(&self, now: Duration) -> Frame {
        self.stage.frame(now)
    }
}

impl Chart for PieChart {
    fn margins(&self) -> Margins {
        Margins::ZERO
    }

    fn draw(&mut self, area: DrawingArea, now: Duration) -> RebuildStats {
        Self::draw(self, area, now)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use core::f64::consts::{FRAC_1_SQRT_2, TAU};

    use super::*;
    use crate::config::CATEGORY10;

    fn drawn(pairs: &[(&str, f64)], size: Size) -> PieChart {
        let ds = Dataset::from_pairs(pairs.iter().copied()).unwrap();
        let mut chart = PieChart::new(ds, PieChartConfig::default()).unwrap();
        chart.draw(DrawingArea::from_viewport(size, Margins::ZERO), Duration::ZERO);
        chart
    }

    #[test]
    fn sized_from_the_shorter_side() {
        let chart = drawn(&[("A", 1.0)], Size::new(300.0, 200.0));
        assert_eq!(chart.radius(), 100.0);
        assert_eq!(chart.origin(), Point::new(100.0, 100.0));
        assert_eq!(chart.surface_size(), Size::new(200.0, 200.0));
    }

    #[test]
    fn slices_follow_input_order_and_magnitude() {
        let chart = drawn(&[("A", 1.0), ("B", -1.0), ("C", 2.0)], Size::new(100.0, 100.0));
        let s = chart.slices();
        assert_eq!(s.len(), 3);
        assert!((s[0].angles.span() - TAU / 4.0).abs() < 1e-12);
        assert!((s[1].angles.span() - TAU / 4.0).abs() < 1e-12);
        assert_eq!(s[2].angles.end, TAU);
        // First slice's mid-angle is 45° clockwise from the top.
        let a = s[0].label_anchor;
        assert!((a.x - 40.0 * FRAC_1_SQRT_2).abs() < 1e-9);
        assert!((a.y + 40.0 * FRAC_1_SQRT_2).abs() < 1e-9);
    }

    #[test]
    fn labels_stack_name_then_value() {
        let chart = drawn(&[("A", 1500.0), ("B", 500.0)], Size::new(100.0, 100.0));
        let frame = chart.frame(Duration::ZERO);
        let label = frame
            .get(Layer::SliceLabels.id(0))
            .and_then(|m| m.payload.as_text())
            .expect("label for A");
        assert_eq!(label.spans.len(), 2);
        assert_eq!(label.spans[0].text, "A");
        assert_eq!(label.spans[0].weight, FontWeight::Bold);
        assert_eq!(label.spans[1].text, "1,500");
        assert_eq!(label.spans[1].dy_em, 1.3);
        assert_eq!(label.spans[1].opacity, 0.7);
        assert_eq!((label.anchor, label.baseline), (TextAnchor::Middle, TextBaseline::Middle));
        assert_eq!(label.font_size, 12.0);
    }

    #[test]
    fn slices_cycle_the_palette() {
        let pairs: std::vec::Vec<(std::string::String, f64)> =
            (0..12).map(|i| (std::format!("N{i}"), 1.0)).collect();
        let ds = Dataset::from_pairs(pairs.iter().map(|(n, v)| (n.as_str(), *v))).unwrap();
        let mut chart = PieChart::new(ds, PieChartConfig::default()).unwrap();
        chart.draw(DrawingArea::from_viewport(Size::new(10.0, 10.0), Margins::ZERO), Duration::ZERO);
        let frame = chart.frame(Duration::ZERO);
        let fill = |i| {
            frame
                .get(Layer::Slices.id(i))
                .and_then(|m| m.payload.as_path().map(|p| p.fill))
                .expect("slice")
        };
        assert_eq!(fill(0), CATEGORY10[0]);
        assert_eq!(fill(10), CATEGORY10[0]);
        assert_eq!(fill(11), CATEGORY10[1]);
    }

    #[test]
    fn draw_places_without_animation() {
        let chart = drawn(&[("A", 3.0), ("B", 1.0)], Size::new(100.0, 100.0));
        assert!(chart.stage().timeline().is_empty());
        assert_eq!(
            chart.frame(Duration::ZERO).marks,
            chart.frame(Duration::from_secs(5)).marks
        );
        assert_eq!(chart.frame(Duration::ZERO).len(), 4);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let ds = Dataset::from_pairs([("A", 1.0)]).unwrap();
        let config = PieChartConfig::default().with_thresholds(0.3, 0.1);
        assert!(PieChart::new(ds, config).is_err());
    }
}
