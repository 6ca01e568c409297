// Copyright 2025 the Duochart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar mark generation.

extern crate alloc;

use alloc::vec::Vec;

use duochart_core::{Mark, TextAnchor};
use duochart_data::Dataset;
use kurbo::{Point, Rect};
use peniko::Color;

use crate::config::BarChartConfig;
use crate::format::format_floor;
use crate::layer::Layer;
use crate::layout::DrawingArea;
use crate::scale::{ScaleBand, ScaleCategory, ScaleLinear};
use crate::text_mark::TextMarkSpec;
use crate::z_order;

/// The two scales of a bar chart, derived from a dataset and a drawing area.
#[derive(Clone, Debug, PartialEq)]
pub struct BarScales {
    /// Item name to band.
    pub x: ScaleCategory,
    /// Value to plot-local y. Domain `[0, max(0, max value)]`, range `[inner_height, 0]`.
    pub y: ScaleLinear,
}

impl BarScales {
    /// Computes both scales.
    pub fn new(dataset: &Dataset, area: &DrawingArea, config: &BarChartConfig) -> Self {
        let band = ScaleBand::new((0.0, area.inner_width()), dataset.len())
            .with_padding(config.band_padding)
            .with_round(config.round_bands);
        Self {
            x: ScaleCategory::new(dataset.names(), band),
            y: ScaleLinear::new((0.0, dataset.max_value()), (area.inner_height(), 0.0)),
        }
    }

    /// Plot-local y of the zero baseline.
    pub fn baseline(&self) -> f64 {
        self.y.map(0.0)
    }
}

/// Geometry of one bar and its value label.
#[derive(Clone, Debug, PartialEq)]
pub struct BarShape {
    /// Item position.
    pub index: usize,
    /// Item value.
    pub value: f64,
    /// Final bar rectangle, anchored at the baseline.
    pub rect: Rect,
    /// Plot-local y of the zero baseline.
    pub baseline: f64,
    /// Value label anchor: band center, above positive bars and below negative ones.
    pub label_anchor: Point,
}

impl BarShape {
    /// Returns `true` for bars that grow downward from the baseline.
    pub fn is_negative(&self) -> bool {
        self.value < 0.0
    }

    /// The bar collapsed onto the baseline, where the entrance starts.
    pub fn flattened(&self) -> Rect {
        Rect::new(self.rect.x0, self.baseline, self.rect.x1, self.baseline)
    }
}

/// Builds bar and label marks from the scales and styling of a bar chart.
#[derive(Clone, Debug)]
pub struct BarMarkSpec<'a> {
    /// Scales of the current layout.
    pub scales: &'a BarScales,
    /// Styling and offsets.
    pub config: &'a BarChartConfig,
}

impl<'a> BarMarkSpec<'a> {
    /// Creates a spec over existing scales.
    pub fn new(scales: &'a BarScales, config: &'a BarChartConfig) -> Self {
        Self { scales, config }
    }

    /// Geometry for every item, in order.
    pub fn shapes(&self, dataset: &Dataset) -> Vec<BarShape> {
        let x = &self.scales.x;
        let y = &self.scales.y;
        let bw = x.band_width();
        let baseline = self.scales.baseline();
        dataset
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let v = item.value();
                let x0 = x.map(item.name()).unwrap_or_else(|| x.band().x(index));
                let top = y.map(v.max(0.0));
                let height = (y.map(v) - baseline).abs();
                let offset = if v < 0.0 {
                    self.config.label_offset_below
                } else {
                    -self.config.label_offset_above
                };
                BarShape {
                    index,
                    value: v,
                    rect: Rect::new(x0, top, x0 + bw, top + height),
                    baseline,
                    label_anchor: Point::new(x0 + 0.5 * bw, y.map(v) + offset),
                }
            })
            .collect()
    }

    /// Fill for a bar at rest.
    pub fn fill(&self, shape: &BarShape) -> Color {
        if shape.is_negative() {
            self.config.negative_fill
        } else {
            self.config.positive_fill
        }
    }

    /// The bar at its final geometry.
    pub fn bar(&self, shape: &BarShape) -> Mark {
        self.rect(shape, shape.rect, self.fill(shape))
    }

    /// The bar where its entrance starts: zero height at the baseline.
    pub fn entering_bar(&self, shape: &BarShape) -> Mark {
        self.rect(shape, shape.flattened(), self.fill(shape))
    }

    /// The bar grown by the highlight inset on the left, right, and top edges.
    pub fn highlighted_bar(&self, shape: &BarShape) -> Mark {
        let h = &self.config.highlight;
        let r = shape.rect;
        let grown = Rect::new(r.x0 - h.inset, r.y0 - h.inset, r.x1 + h.inset, r.y1);
        self.rect(shape, grown, h.color)
    }

    /// Every bar state shares the row's id, so the stage sees one mark moving.
    fn rect(&self, shape: &BarShape, rect: Rect, fill: Color) -> Mark {
        Mark::builder(Layer::Bars.id(shape.index))
            .rect()
            .z_index(z_order::SERIES_FILL)
            .x_const(rect.x0)
            .y_const(rect.y0)
            .w_const(rect.width())
            .h_const(rect.height())
            .fill_const(fill)
            .build()
    }

    /// The value label at rest.
    pub fn label(&self, shape: &BarShape) -> Mark {
        self.label_spec(shape).mark()
    }

    /// The value label before its reveal: same placement, no text.
    pub fn hidden_label(&self, shape: &BarShape) -> Mark {
        self.label_spec(shape).blank().mark()
    }

    /// The value label lifted and recolored for hover.
    pub fn highlighted_label(&self, shape: &BarShape) -> Mark {
        let h = &self.config.highlight;
        let pos = shape.label_anchor - (0.0, h.label_lift);
        self.label_spec(shape)
            .with_pos(pos)
            .with_fill(h.color)
            .mark()
    }

    fn label_spec(&self, shape: &BarShape) -> TextMarkSpec {
        TextMarkSpec::new(Layer::BarLabels.id(shape.index), shape.label_anchor)
            .with_text(format_floor(shape.value))
            .with_font_size(self.config.label_font_size)
            .with_anchor(TextAnchor::Middle)
            .with_fill(self.config.label_fill)
    }
}
