// Copyright 2025 the Duochart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scale utilities: a linear value scale, a band scale for categories, and pie angles.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::f64::consts::{SQRT_2, TAU};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// A linear mapping from a continuous domain to a continuous range.
///
/// A degenerate domain (`d0 == d1`) maps every input to the start of the range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Returns the configured domain.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Returns the configured range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Returns round tick values that lie inside the domain.
    ///
    /// `count` is a hint; the result has roughly that many ticks.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain.0, self.domain.1, count)
    }
}

fn nice_ticks(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 || !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    if min == max {
        return alloc::vec![min];
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    let step = nice_step((max - min) / count as f64);
    if step == 0.0 {
        return alloc::vec![min, max];
    }

    let lo = (min / step).ceil();
    let hi = (max / step).floor();
    let n_f = hi - lo;
    if !(n_f.is_finite() && n_f >= 0.0) {
        return Vec::new();
    }
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "guarded by finite/non-negative checks and capped at 10k"
    )]
    let n = n_f.min(10_000.0) as u64;

    // Sub-unit steps divide by the inverse so that e.g. 0.1 * 3 prints as 0.3.
    if step >= 1.0 {
        (0..=n).map(|i| (lo + i as f64) * step).collect()
    } else {
        let inv = (1.0 / step).round();
        (0..=n).map(|i| (lo + i as f64) / inv).collect()
    }
}

const SQRT_50: f64 = 7.071_067_811_865_475;
const SQRT_10: f64 = 3.162_277_660_168_379;

fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let base = 10_f64.powf(power);
    let error = step / base;
    let nice = if error >= SQRT_50 {
        10.0
    } else if error >= SQRT_10 {
        5.0
    } else if error >= SQRT_2 {
        2.0
    } else {
        1.0
    };
    nice * base
}

/// A discrete band scale: `count` equal bands laid out across a range.
///
/// Padding is expressed as a fraction of the step (band plus gap). With `round` enabled
/// the step, start offset, and band width are snapped to whole units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleBand {
    range: (f64, f64),
    count: usize,
    padding_inner: f64,
    padding_outer: f64,
    align: f64,
    round: bool,
}

impl ScaleBand {
    /// Creates a band scale covering `count` bands over `range`, with no padding.
    pub fn new(range: (f64, f64), count: usize) -> Self {
        Self {
            range,
            count,
            padding_inner: 0.0,
            padding_outer: 0.0,
            align: 0.5,
            round: false,
        }
    }

    /// Sets inner and outer padding to the same fraction of the step.
    pub fn with_padding(self, padding: f64) -> Self {
        self.with_padding_inner_outer(padding, padding)
    }

    /// Sets inner and outer padding separately. Inner padding is clamped to `0..=1`.
    pub fn with_padding_inner_outer(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.clamp(0.0, 1.0);
        self.padding_outer = outer.max(0.0);
        self
    }

    /// Enables or disables snapping to whole units.
    pub fn with_round(mut self, round: bool) -> Self {
        self.round = round;
        self
    }

    /// Returns the number of bands.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Distance between the starts of adjacent bands.
    pub fn step(&self) -> f64 {
        self.layout().1
    }

    /// Returns the computed band width.
    pub fn band_width(&self) -> f64 {
        self.layout().2
    }

    /// Returns the leading edge of the band at `index`.
    pub fn x(&self, index: usize) -> f64 {
        let (start, step, _) = self.layout();
        start + step * index as f64
    }

    /// `(start, step, band_width)`.
    fn layout(&self) -> (f64, f64, f64) {
        let (r0, r1) = self.range;
        let (mut start, stop) = if r1 < r0 { (r1, r0) } else { (r0, r1) };
        let n = self.count as f64;
        let mut step = (stop - start) / (n - self.padding_inner + 2.0 * self.padding_outer).max(1.0);
        if self.round {
            step = step.floor();
        }
        start += (stop - start - step * (n - self.padding_inner)) * self.align;
        let mut width = step * (1.0 - self.padding_inner);
        if self.round {
            start = start.round();
            width = width.round();
        }
        (start, step, width)
    }
}

/// A band scale keyed by category name.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleCategory {
    names: Vec<String>,
    band: ScaleBand,
}

impl ScaleCategory {
    /// Creates a category scale; band geometry is derived from `band` with its count
    /// replaced by the number of names.
    pub fn new<'a>(names: impl IntoIterator<Item = &'a str>, band: ScaleBand) -> Self {
        let names: Vec<String> = names.into_iter().map(String::from).collect();
        let band = ScaleBand {
            count: names.len(),
            ..band
        };
        Self { names, band }
    }

    /// The ordered domain.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The underlying band scale.
    pub fn band(&self) -> &ScaleBand {
        &self.band
    }

    /// Position of `name` in the domain.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Leading edge of the band for `name`, or `None` if it is not in the domain.
    pub fn map(&self, name: &str) -> Option<f64> {
        self.index_of(name).map(|i| self.band.x(i))
    }

    /// Width of every band.
    pub fn band_width(&self) -> f64 {
        self.band.band_width()
    }
}

/// The angular extent of one pie slice, in radians.
///
/// Angles are measured clockwise from twelve o'clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcAngles {
    /// Start angle.
    pub start: f64,
    /// End angle.
    pub end: f64,
}

impl ArcAngles {
    /// `end - start`.
    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// The angle half-way through the slice.
    pub fn mid(&self) -> f64 {
        0.5 * (self.start + self.end)
    }
}

/// Lays out slices in input order, each proportional to its magnitude.
///
/// Slices are contiguous and the last one ends at exactly `2π`. When the magnitudes sum
/// to zero every slice is empty and sits at angle zero.
pub fn pie_angles(magnitudes: &[f64]) -> Vec<ArcAngles> {
    let total: f64 = magnitudes.iter().map(|m| m.abs()).sum();
    let k = if total > 0.0 { TAU / total } else { 0.0 };
    let last = magnitudes.len().saturating_sub(1);
    let mut cumulative = 0.0;
    magnitudes
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let start = cumulative * k;
            cumulative += m.abs();
            let end = if i == last && total > 0.0 {
                TAU
            } else {
                cumulative * k
            };
            ArcAngles { start, end }
        })
        .collect()
}
