// Copyright 2025 the Duochart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curves.

/// A time-remapping curve applied to transition progress.
///
/// All curves map `0` to `0` and `1` to `1`; input is clamped to `0..=1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Easing {
    /// Identity.
    #[default]
    Linear,
    /// Bounce-out: reaches the target quickly, then settles with decaying bounces.
    Bounce,
    /// Cubic ease-in-out.
    CubicInOut,
}

const B1: f64 = 4.0 / 11.0;
const B2: f64 = 6.0 / 11.0;
const B3: f64 = 8.0 / 11.0;
const B4: f64 = 3.0 / 4.0;
const B5: f64 = 9.0 / 11.0;
const B6: f64 = 10.0 / 11.0;
const B7: f64 = 15.0 / 16.0;
const B8: f64 = 21.0 / 22.0;
const B9: f64 = 63.0 / 64.0;
const B0: f64 = 1.0 / B1 / B1;

impl Easing {
    /// Applies the curve to normalized progress `t`.
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::Bounce => bounce_out(t),
            Self::CubicInOut => {
                let t = t * 2.0;
                if t <= 1.0 {
                    0.5 * t * t * t
                } else {
                    let t = t - 2.0;
                    0.5 * (t * t * t + 2.0)
                }
            }
        }
    }
}

fn bounce_out(t: f64) -> f64 {
    if t < B1 {
        B0 * t * t
    } else if t < B3 {
        let t = t - B2;
        B0 * t * t + B4
    } else if t < B6 {
        let t = t - B5;
        B0 * t * t + B7
    } else {
        let t = t - B8;
        B0 * t * t + B9
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 3] = [Easing::Linear, Easing::Bounce, Easing::CubicInOut];

    #[test]
    fn curves_pin_endpoints() {
        for e in ALL {
            assert!(e.apply(0.0).abs() < 1e-12, "{e:?} at 0");
            assert!((e.apply(1.0) - 1.0).abs() < 1e-12, "{e:?} at 1");
        }
    }

    #[test]
    fn input_is_clamped() {
        for e in ALL {
            assert_eq!(e.apply(-3.0), e.apply(0.0), "{e:?} below 0");
            assert_eq!(e.apply(7.0), e.apply(1.0), "{e:?} above 1");
            assert_eq!(e.apply(f64::NAN), 0.0, "{e:?} NaN");
        }
    }

    #[test]
    fn bounce_touches_one_at_each_bounce_floor() {
        // The first arc lands exactly at the target.
        assert!((Easing::Bounce.apply(B1) - 1.0).abs() < 1e-12);
        // Mid-way through the second arc it has lifted off again.
        assert!(Easing::Bounce.apply(B2) < 1.0);
        assert!((Easing::Bounce.apply(B2) - B4).abs() < 1e-12);
    }
}
