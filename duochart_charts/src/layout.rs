// Copyright 2025 the Duochart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing-area layout.
//!
//! A chart is drawn into a viewport reported by its host. Margins reserve room for
//! axes around the plot; marks are placed in plot-local coordinates whose origin is the
//! top-left corner of the plot (see [`DrawingArea::plot_origin`]).

use kurbo::{Point, Rect};

/// A width/height pair used by chart layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in chart coordinate units.
    pub width: f64,
    /// Height in chart coordinate units.
    pub height: f64,
}

impl Size {
    /// Creates a size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Space reserved on each side of the plot.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Margins {
    /// Above the plot.
    pub top: f64,
    /// Right of the plot.
    pub right: f64,
    /// Below the plot (bottom axis).
    pub bottom: f64,
    /// Left of the plot (left axis).
    pub left: f64,
}

impl Margins {
    /// Creates margins in CSS order: top, right, bottom, left.
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// No margins.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Returns `true` if every side is finite and non-negative.
    pub fn is_valid(&self) -> bool {
        [self.top, self.right, self.bottom, self.left]
            .iter()
            .all(|m| m.is_finite() && *m >= 0.0)
    }
}

/// The measured surface a chart draws into.
///
/// Derived from the viewport on every mount and resize; never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DrawingArea {
    /// Outer size, as reported by the host.
    pub width: f64,
    /// Outer height, as reported by the host.
    pub height: f64,
    /// Space reserved around the plot.
    pub margins: Margins,
}

impl DrawingArea {
    /// Derives a drawing area from a viewport size.
    ///
    /// Negative or non-finite viewport dimensions are treated as zero.
    pub fn from_viewport(viewport: Size, margins: Margins) -> Self {
        Self {
            width: sanitize(viewport.width),
            height: sanitize(viewport.height),
            margins,
        }
    }

    /// `width - left - right`, never negative.
    pub fn inner_width(&self) -> f64 {
        (self.width - self.margins.left - self.margins.right).max(0.0)
    }

    /// `height - top - bottom`, never negative.
    pub fn inner_height(&self) -> f64 {
        (self.height - self.margins.top - self.margins.bottom).max(0.0)
    }

    /// Where plot-local `(0, 0)` sits on the surface.
    pub fn plot_origin(&self) -> Point {
        Point::new(self.margins.left, self.margins.top)
    }

    /// The plot rectangle in surface coordinates.
    pub fn plot_rect(&self) -> Rect {
        let o = self.plot_origin();
        Rect::new(o.x, o.y, o.x + self.inner_width(), o.y + self.inner_height())
    }

    /// Radius of the largest circle that fits the outer size: `min(width, height) / 2`.
    pub fn radius(&self) -> f64 {
        0.5 * self.width.min(self.height)
    }
}

fn sanitize(v: f64) -> f64 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}
