// Copyright 2025 the Duochart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animated bar chart with hover highlight and tooltip.

extern crate alloc;

use alloc::vec::Vec;
use core::time::Duration;

use duochart_core::Frame;
use duochart_data::{DataSource, Dataset};
use kurbo::Point;

use crate::axis::AxisSpec;
use crate::bar_mark::{BarMarkSpec, BarScales, BarShape};
use crate::config::{BarChartConfig, ChartError, ConfigError};
use crate::controller::Chart;
use crate::interaction::{Tooltip, TooltipContent, hit_test};
use crate::layout::{DrawingArea, Margins};
use crate::reconcile::{RebuildStats, Stage, Staged};

/// Scales and shapes of the most recent draw.
#[derive(Clone, Debug)]
struct BarLayout {
    area: DrawingArea,
    scales: BarScales,
    shapes: Vec<BarShape>,
}

/// A bar chart over one dataset.
///
/// Every draw rebuilds all marks: bars grow from the baseline one after another, then
/// their value labels appear. Hovering a bar highlights it and shows a tooltip.
///
/// All geometry is plot-local; [`BarChart::origin`] is where the plot sits on the
/// surface. Pointer positions passed in are surface coordinates.
#[derive(Clone, Debug)]
pub struct BarChart {
    dataset: Dataset,
    config: BarChartConfig,
    stage: Stage,
    layout: Option<BarLayout>,
    hovered: Option<usize>,
    tooltip: Tooltip,
}

impl BarChart {
    /// Creates a chart after validating `config`. Nothing is drawn yet.
    pub fn new(dataset: Dataset, config: BarChartConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            dataset,
            config,
            stage: Stage::new(),
            layout: None,
            hovered: None,
            tooltip: Tooltip::hidden(),
        })
    }

    /// Loads the dataset from `source`, once, and creates the chart.
    pub fn from_source(
        source: &mut impl DataSource,
        config: BarChartConfig,
    ) -> Result<Self, ChartError> {
        let dataset = source.load()?;
        Ok(Self::new(dataset, config)?)
    }

    /// The bound dataset.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The active configuration.
    pub fn config(&self) -> &BarChartConfig {
        &self.config
    }

    /// The drawing area of the last draw.
    pub fn area(&self) -> Option<&DrawingArea> {
        self.layout.as_ref().map(|l| &l.area)
    }

    /// The scales of the last draw.
    pub fn scales(&self) -> Option<&BarScales> {
        self.layout.as_ref().map(|l| &l.scales)
    }

    /// Resting geometry of every bar, from the last draw.
    pub fn shapes(&self) -> &[BarShape] {
        self.layout.as_ref().map_or(&[][..], |l| l.shapes.as_slice())
    }

    /// Where plot-local `(0, 0)` sits on the surface.
    pub fn origin(&self) -> Point {
        let fallback = Point::new(self.config.margins.left, self.config.margins.top);
        self.area().map_or(fallback, DrawingArea::plot_origin)
    }

    /// The marks and their transitions.
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// Recomputes scales and shapes for `area` and rebuilds every mark.
    ///
    /// Running transitions are dropped and hover state is reset.
    pub fn draw(&mut self, area: DrawingArea, now: Duration) -> RebuildStats {
        let scales = BarScales::new(&self.dataset, &area, &self.config);
        let spec = BarMarkSpec::new(&scales, &self.config);
        let shapes = spec.shapes(&self.dataset);

        let mut staged = Vec::with_capacity(shapes.len() * 2 + 4);
        if self.config.axes {
            let style = self.config.axis_style;
            let x_axis = AxisSpec::bottom()
                .with_style(style)
                .band_marks(&scales.x, scales.baseline(), area.inner_width());
            let y_axis = AxisSpec::left()
                .with_style(style)
                .linear_marks(&scales.y, self.config.y_ticks, 0.0);
            staged.extend(x_axis.into_iter().chain(y_axis).map(Staged::at_rest));
        }
        let bars = &self.config.animation.bars;
        let labels = &self.config.label_reveal.labels;
        for shape in &shapes {
            staged.push(Staged::entering(
                spec.bar(shape),
                spec.entering_bar(shape),
                bars.timing(shape.index),
            ));
            staged.push(Staged::entering(
                spec.label(shape),
                spec.hidden_label(shape),
                labels.timing(shape.index),
            ));
        }

        let (_, stats) = self.stage.rebuild(now, staged);
        tracing::debug!(
            width = area.width,
            height = area.height,
            items = self.dataset.len(),
            "bar chart drawn"
        );
        self.layout = Some(BarLayout {
            area,
            scales,
            shapes,
        });
        self.hovered = None;
        self.tooltip = Tooltip::hidden();
        stats
    }

    /// Highlights bar `index` and lifts its label.
    pub fn mouse_enter(&mut self, index: usize, now: Duration) {
        let Some(layout) = &self.layout else { return };
        let Some(shape) = layout.shapes.get(index) else {
            return;
        };
        let spec = BarMarkSpec::new(&layout.scales, &self.config);
        let timing = self.config.highlight.timing();
        self.stage
            .retarget(now, spec.highlighted_bar(shape), timing);
        self.stage
            .retarget(now, spec.highlighted_label(shape), timing);
        self.hovered = Some(index);
        tracing::trace!(index, "bar highlighted");
    }

    /// Returns bar `index` and its label to rest and hides the tooltip.
    pub fn mouse_leave(&mut self, index: usize, now: Duration) {
        self.tooltip = Tooltip::hidden();
        if self.hovered == Some(index) {
            self.hovered = None;
        }
        let Some(layout) = &self.layout else { return };
        let Some(shape) = layout.shapes.get(index) else {
            return;
        };
        let spec = BarMarkSpec::new(&layout.scales, &self.config);
        let timing = self.config.highlight.timing();
        self.stage.retarget(now, spec.bar(shape), timing);
        self.stage.retarget(now, spec.label(shape), timing);
        tracing::trace!(index, "bar released");
    }

    /// Shows the tooltip for item `index` next to `cursor` (surface coordinates).
    ///
    /// With no such item the tooltip is hidden.
    pub fn mouse_move(&mut self, index: usize, cursor: Point) -> &Tooltip {
        self.tooltip = match TooltipContent::for_item(&self.dataset, index) {
            Some(content) => Tooltip::shown_at(cursor, &self.config.tooltip, content),
            None => Tooltip::hidden(),
        };
        &self.tooltip
    }

    /// Routes a pointer position (surface coordinates) to the enter, leave, and move
    /// handlers of whichever bar it is over.
    pub fn pointer_moved(&mut self, cursor: Point, now: Duration) -> &Tooltip {
        let local = cursor - self.origin().to_vec2();
        let hit = hit_test(self.shapes(), local);
        if hit != self.hovered {
            if let Some(old) = self.hovered {
                self.mouse_leave(old, now);
            }
            if let Some(new) = hit {
                self.mouse_enter(new, now);
            }
        }
        match hit {
            Some(index) => self.mouse_move(index, cursor),
            None => {
                self.tooltip = Tooltip::hidden();
                &self.tooltip
            }
        }
    }

    /// The pointer left the surface.
    pub fn pointer_left(&mut self, now: Duration) {
        match self.hovered {
            Some(index) => self.mouse_leave(index, now),
            None => self.tooltip = Tooltip::hidden(),
        }
    }

    /// The bar currently hovered.
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// The tooltip as last computed.
    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    /// Everything as it appears at `now`.
    pub fn frame(&self, now: Duration) -> Frame {
        self.stage.frame(now)
    }

    /// Returns `true` while any transition is still running at `now`.
    pub fn is_animating(&self, now: Duration) -> bool {
        !self.stage.is_idle(now)
    }
}

impl Chart for BarChart {
    fn margins(&self) -> Margins {
        self.config.margins
    }

    fn draw(&mut self, area: DrawingArea, now: Duration) -> RebuildStats {
        Self::draw(self, area, now)
    }
}
