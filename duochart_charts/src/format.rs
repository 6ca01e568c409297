// Copyright 2025 the Duochart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Number formatting for labels, ticks, and tooltips.

extern crate alloc;

use alloc::format;
use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Shortest round-tripping decimal form, with `-0` printed as `0`.
pub fn format_number(v: f64) -> String {
    format!("{}", v + 0.0)
}

/// The value rounded down to an integer: `9.7 -> "9"`, `-5.5 -> "-6"`.
pub fn format_floor(v: f64) -> String {
    format_number(v.floor())
}

/// Thousands-grouped form with at most three fraction digits: `12345.6789 -> "12,345.679"`.
pub fn format_grouped(v: f64) -> String {
    // Past 2^53 milli-units there is no exact integer representation left to group.
    const LIMIT: f64 = 9_007_199_254_740.0;
    if !v.is_finite() || v.abs() >= LIMIT {
        return format_number(v);
    }
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "non-negative and bounded by LIMIT above"
    )]
    let milli = (v.abs() * 1000.0).round() as u64;
    let (whole, frac) = (milli / 1000, milli % 1000);

    let mut out = String::new();
    if v < 0.0 && milli != 0 {
        out.push('-');
    }
    let digits = format!("{whole}");
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if frac != 0 {
        let frac = format!("{frac:03}");
        out.push('.');
        out.push_str(frac.trim_end_matches('0'));
    }
    out
}
