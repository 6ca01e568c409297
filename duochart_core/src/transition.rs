// Copyright 2025 the Duochart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time-based interpolation between two payloads of one mark.

use core::time::Duration;

use kurbo::{Point, Rect};
use peniko::Color;

use crate::easing::Easing;
use crate::mark::{MarkPayload, PathPayload, RectPayload, TextPayload};

/// An animated change of one mark from `from` to `to`.
///
/// Continuous attributes (rectangle edges, text position and size, fill colors) are
/// interpolated with eased progress. Discrete attributes (text content, anchors, path
/// geometry) switch to the target as soon as the transition starts, i.e. once
/// `start + delay` has passed. Before that the `from` payload is shown unchanged.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    /// Payload shown until the transition starts.
    pub from: MarkPayload,
    /// Payload reached when the transition ends.
    pub to: MarkPayload,
    /// Clock time at which the transition was scheduled.
    pub scheduled_at: Duration,
    /// Wait between scheduling and start.
    pub delay: Duration,
    /// Running time once started.
    pub duration: Duration,
    /// Progress curve.
    pub easing: Easing,
}

impl Transition {
    /// Creates a linear, immediate transition lasting 250ms.
    pub fn new(from: MarkPayload, to: MarkPayload, scheduled_at: Duration) -> Self {
        Self {
            from,
            to,
            scheduled_at,
            delay: Duration::ZERO,
            duration: Duration::from_millis(250),
            easing: Easing::Linear,
        }
    }

    /// Sets the start delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Sets the running time.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the easing curve.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Clock time at which interpolation begins.
    pub fn starts_at(&self) -> Duration {
        self.scheduled_at.saturating_add(self.delay)
    }

    /// Clock time at which the `to` payload is reached.
    pub fn ends_at(&self) -> Duration {
        self.starts_at().saturating_add(self.duration)
    }

    /// Returns `true` once the transition has reached its target.
    pub fn is_finished(&self, now: Duration) -> bool {
        now >= self.ends_at()
    }

    /// Linear progress in `0..=1`, or `None` while still delayed.
    pub fn progress(&self, now: Duration) -> Option<f64> {
        let start = self.starts_at();
        if now < start {
            return None;
        }
        if self.duration.is_zero() {
            return Some(1.0);
        }
        let elapsed = (now - start).as_secs_f64();
        Some((elapsed / self.duration.as_secs_f64()).min(1.0))
    }

    /// The payload to show at `now`.
    pub fn sample(&self, now: Duration) -> MarkPayload {
        match self.progress(now) {
            None => self.from.clone(),
            Some(p) if p >= 1.0 => self.to.clone(),
            Some(p) => interpolate(&self.from, &self.to, self.easing.apply(p)),
        }
    }
}

/// Interpolates between two payloads at eased progress `t`.
///
/// Payloads of different kinds cannot be blended; the target is returned as-is.
pub(crate) fn interpolate(from: &MarkPayload, to: &MarkPayload, t: f64) -> MarkPayload {
    match (from, to) {
        (MarkPayload::Rect(a), MarkPayload::Rect(b)) => MarkPayload::Rect(RectPayload {
            rect: lerp_rect(a.rect, b.rect, t),
            fill: lerp_color(a.fill, b.fill, t),
        }),
        (MarkPayload::Text(a), MarkPayload::Text(b)) => MarkPayload::Text(TextPayload {
            pos: a.pos.lerp(b.pos, t),
            spans: b.spans.clone(),
            font_size: lerp(a.font_size, b.font_size, t),
            anchor: b.anchor,
            baseline: b.baseline,
            fill: lerp_color(a.fill, b.fill, t),
        }),
        (MarkPayload::Path(a), MarkPayload::Path(b)) => MarkPayload::Path(PathPayload {
            path: b.path.clone(),
            fill: lerp_color(a.fill, b.fill, t),
            stroke: lerp_color(a.stroke, b.stroke, t),
            stroke_width: lerp(a.stroke_width, b.stroke_width, t),
        }),
        _ => to.clone(),
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

fn lerp_rect(a: Rect, b: Rect, t: f64) -> Rect {
    let p0 = Point::new(a.x0, a.y0).lerp(Point::new(b.x0, b.y0), t);
    let p1 = Point::new(a.x1, a.y1).lerp(Point::new(b.x1, b.y1), t);
    Rect::new(p0.x, p0.y, p1.x, p1.y)
}

fn lerp_color(a: Color, b: Color, t: f64) -> Color {
    if a == b {
        return a;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "eased progress is in 0..=1; f32 precision is plenty for color channels"
    )]
    let t = t as f32;
    let mut out = [0.0_f32; 4];
    for (i, c) in out.iter_mut().enumerate() {
        *c = a.components[i] + (b.components[i] - a.components[i]) * t;
    }
    Color::new(out)
}

#[cfg(test)]
mod tests {
    use peniko::color::palette::css;

    use super::*;
    use crate::mark::{Mark, MarkId};

    fn rect(y: f64, h: f64, fill: Color) -> MarkPayload {
        Mark::builder(MarkId::from_raw(1))
            .x_const(0.0)
            .y_const(y)
            .w_const(10.0)
            .h_const(h)
            .fill_const(fill)
            .build()
            .payload
    }

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn holds_from_payload_while_delayed() {
        let tr = Transition::new(rect(100.0, 0.0, css::BLACK), rect(40.0, 60.0, css::BLACK), ms(0))
            .with_delay(ms(160))
            .with_duration(ms(1000));
        assert_eq!(tr.progress(ms(159)), None);
        assert_eq!(tr.sample(ms(100)), rect(100.0, 0.0, css::BLACK));
        assert_eq!(tr.starts_at(), ms(160));
        assert_eq!(tr.ends_at(), ms(1160));
    }

    #[test]
    fn linear_midpoint_interpolates_edges() {
        let tr = Transition::new(rect(100.0, 0.0, css::BLACK), rect(40.0, 60.0, css::BLACK), ms(0))
            .with_duration(ms(1000));
        let mid = tr.sample(ms(500));
        let r = mid.as_rect().expect("rect").rect;
        assert!((r.y0 - 70.0).abs() < 1e-9);
        assert!((r.y1 - 100.0).abs() < 1e-9);
        assert!(!tr.is_finished(ms(999)));
        assert!(tr.is_finished(ms(1000)));
        assert_eq!(tr.sample(ms(5000)), rect(40.0, 60.0, css::BLACK));
    }

    #[test]
    fn colors_blend_channelwise() {
        let tr = Transition::new(rect(0.0, 1.0, css::BLACK), rect(0.0, 1.0, css::WHITE), ms(0))
            .with_duration(ms(100));
        let mid = tr.sample(ms(50));
        let fill = mid.as_rect().expect("rect").fill;
        assert!((fill.components[0] - 0.5).abs() < 1e-6);
        assert!((fill.components[3] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn text_content_switches_at_start() {
        let empty = Mark::builder(MarkId::from_raw(2)).text().build().payload;
        let full = Mark::builder(MarkId::from_raw(2))
            .text()
            .text_const("42")
            .build()
            .payload;
        let tr = Transition::new(empty.clone(), full.clone(), ms(0))
            .with_delay(ms(1000))
            .with_duration(ms(1500));
        assert_eq!(tr.sample(ms(999)), empty);
        let started = tr.sample(ms(1001));
        assert_eq!(started.as_text().map(|t| t.text()).as_deref(), Some("42"));
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let tr = Transition::new(rect(0.0, 1.0, css::BLACK), rect(5.0, 1.0, css::BLACK), ms(10))
            .with_duration(Duration::ZERO);
        assert_eq!(tr.sample(ms(10)), rect(5.0, 1.0, css::BLACK));
    }
}
