// Copyright 2025 the Duochart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sector (arc) mark generation.
//!
//! Angles are in radians, measured clockwise from twelve o'clock, so a pie laid out
//! with [`crate::pie_angles`] starts at the top of the circle.

use core::f64::consts::FRAC_PI_2;

use duochart_core::{Mark, MarkId};
use kurbo::{Circle, Point, Shape};
use peniko::Color;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;
use crate::scale::ArcAngles;
use crate::z_order;

/// Curve flattening tolerance used when converting a sector to a `BezPath`.
const TOLERANCE: f64 = 0.1;

/// A pie slice: a solid sector from the center out to `outer_radius`.
#[derive(Clone, Debug)]
pub struct SectorMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Center in plot coordinates.
    pub center: Point,
    /// Outer radius.
    pub outer_radius: f64,
    /// Angular extent.
    pub angles: ArcAngles,
    /// Fill color.
    pub fill: Color,
}

impl SectorMarkSpec {
    /// Creates a pie slice spec.
    pub fn new(id: MarkId, center: Point, outer_radius: f64, angles: ArcAngles) -> Self {
        Self {
            id,
            center,
            outer_radius,
            angles,
            fill: Color::BLACK,
        }
    }

    /// Sets the fill color.
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    /// Point at `radius` from the center, half-way through the slice.
    ///
    /// With `radius = 0.8 * outer_radius` this is the centroid of a thin arc at 80% of
    /// the radius, the usual label anchor.
    pub fn centroid_at(&self, radius: f64) -> Point {
        let a = self.angles.mid();
        self.center + (radius * a.sin(), -radius * a.cos())
    }

    /// Generates the mark.
    pub fn mark(&self) -> Mark {
        let circle = Circle::new(self.center, self.outer_radius);
        // kurbo measures from the +x axis; ours start at twelve o'clock.
        let segment = circle.segment(0.0, self.angles.start - FRAC_PI_2, self.angles.span());
        let path = segment.path_elements(TOLERANCE).collect();

        Mark::builder(self.id)
            .path()
            .path_const(path)
            .z_index(z_order::SERIES_FILL)
            .fill_const(self.fill)
            .stroke_width_const(0.0)
            .build()
    }
}
