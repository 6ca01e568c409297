// Copyright 2025 the Duochart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mount and resize handling.
//!
//! A [`LayoutController`] owns one chart and drives its redraw cycle: it measures the
//! viewport, derives a [`DrawingArea`], and asks the chart to rebuild. The dataset is
//! never touched here; charts load it once, at construction.

use core::time::Duration;

use crate::layout::{DrawingArea, Margins, Size};
use crate::reconcile::RebuildStats;

/// A chart the controller can lay out.
pub trait Chart {
    /// Space to reserve around the plot.
    fn margins(&self) -> Margins;

    /// Rebuilds every mark for `area`.
    fn draw(&mut self, area: DrawingArea, now: Duration) -> RebuildStats;
}

/// Reports the current size of the hosting surface.
pub trait ViewportProvider {
    /// The surface size right now.
    fn viewport_size(&self) -> Size;
}

impl ViewportProvider for Size {
    fn viewport_size(&self) -> Size {
        *self
    }
}

/// Where a controller is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ControllerState {
    /// Nothing measured or drawn yet.
    #[default]
    Initial,
    /// Marks reflect the last measured viewport.
    Drawn,
}

/// Owns a chart and redraws it on mount and on every resize.
#[derive(Clone, Debug)]
pub struct LayoutController<C> {
    chart: C,
    state: ControllerState,
    area: Option<DrawingArea>,
}

impl<C: Chart> LayoutController<C> {
    /// Wraps `chart`; nothing is drawn until [`LayoutController::mount`].
    pub fn new(chart: C) -> Self {
        Self {
            chart,
            state: ControllerState::Initial,
            area: None,
        }
    }

    /// Measures the viewport and draws for the first time.
    ///
    /// Returns `None` if already mounted.
    pub fn mount(&mut self, viewport: &impl ViewportProvider, now: Duration) -> Option<RebuildStats> {
        if self.state == ControllerState::Drawn {
            tracing::warn!("chart already mounted; ignoring mount");
            return None;
        }
        let stats = self.redraw(viewport.viewport_size(), now);
        self.state = ControllerState::Drawn;
        tracing::debug!(entered = stats.entered, "chart mounted");
        Some(stats)
    }

    /// Re-measures the viewport and redraws.
    ///
    /// Returns `None`, and draws nothing, before the chart is mounted.
    pub fn resize(&mut self, viewport: &impl ViewportProvider, now: Duration) -> Option<RebuildStats> {
        if self.state == ControllerState::Initial {
            tracing::warn!("resize before mount; ignoring");
            return None;
        }
        let stats = self.redraw(viewport.viewport_size(), now);
        tracing::debug!(
            exited = stats.exited,
            entered = stats.entered,
            "chart resized"
        );
        Some(stats)
    }

    fn redraw(&mut self, size: Size, now: Duration) -> RebuildStats {
        let area = DrawingArea::from_viewport(size, self.chart.margins());
        self.area = Some(area);
        self.chart.draw(area, now)
    }

    /// The lifecycle state.
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// The drawing area of the last mount or resize.
    pub fn area(&self) -> Option<&DrawingArea> {
        self.area.as_ref()
    }

    /// The chart.
    pub fn chart(&self) -> &C {
        &self.chart
    }

    /// The chart, for interaction handlers.
    pub fn chart_mut(&mut self) -> &mut C {
        &mut self.chart
    }

    /// Unwraps the chart.
    pub fn into_inner(self) -> C {
        self.chart
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec::Vec;

    use super::*;

    #[derive(Default)]
    struct Recorder {
        draws: Vec<(DrawingArea, Duration)>,
    }

    impl Chart for Recorder {
        fn margins(&self) -> Margins {
            Margins::new(1.0, 2.0, 3.0, 4.0)
        }

        fn draw(&mut self, area: DrawingArea, now: Duration) -> RebuildStats {
            self.draws.push((area, now));
            RebuildStats {
                exited: 0,
                entered: self.draws.len(),
                animated: 0,
            }
        }
    }

    struct Window(f64, f64);

    impl ViewportProvider for Window {
        fn viewport_size(&self) -> Size {
            Size::new(self.0, self.1)
        }
    }

    #[test]
    fn mount_then_resize_redraws_with_new_areas() {
        let mut c = LayoutController::new(Recorder::default());
        assert_eq!(c.state(), ControllerState::Initial);
        assert!(c.area().is_none());

        assert!(c.mount(&Window(100.0, 80.0), Duration::ZERO).is_some());
        assert_eq!(c.state(), ControllerState::Drawn);
        assert_eq!(c.area().map(|a| a.inner_width()), Some(94.0));

        c.resize(&Size::new(50.0, 40.0), Duration::from_millis(10));
        let draws = &c.chart().draws;
        assert_eq!(draws.len(), 2);
        assert_eq!(draws[1].0.width, 50.0);
        assert_eq!(draws[1].0.margins, Margins::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(draws[1].1, Duration::from_millis(10));
    }

    #[test]
    fn resize_before_mount_is_ignored() {
        let mut c = LayoutController::new(Recorder::default());
        assert_eq!(c.resize(&Size::new(10.0, 10.0), Duration::ZERO), None);
        assert!(c.chart().draws.is_empty());
        assert_eq!(c.state(), ControllerState::Initial);
    }

    #[test]
    fn second_mount_is_ignored() {
        let mut c = LayoutController::new(Recorder::default());
        c.mount(&Size::new(10.0, 10.0), Duration::ZERO);
        assert_eq!(c.mount(&Size::new(20.0, 20.0), Duration::ZERO), None);
        assert_eq!(c.into_inner().draws.len(), 1);
    }
}
