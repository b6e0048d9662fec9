/*
 * fmt.rs
 * Copyright (c) 2025 Vernier contributors
 */

//! Numeric pretty-printing for report output.
//!
//! These helpers produce the strings that callers place into template
//! contexts; templates themselves never see raw numbers.

/// Format a value to at most `digits` significant digits, trimming
/// trailing zeros.
fn significant(value: f64, digits: usize) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (digits as i32 - 1 - magnitude).max(0) as usize;
    let formatted = format!("{value:.decimals$}");
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}

/// Format a duration in seconds with an auto-scaled unit.
///
/// Units step by factors of 1000 (s, ms, µs, ns). Sub-second durations
/// switch units once they reach 2 units of the smaller magnitude, so a
/// display value stays in a readable range (e.g. `1500 µs` rather than
/// `1.5 ms`, but `2.5 ms` rather than `2500 µs`).
pub fn pretty_duration(secs: f64) -> String {
    let (scale, unit) = if secs >= 1.0 {
        (1.0, "s")
    } else if secs >= 2e-3 {
        (1e3, "ms")
    } else if secs >= 2e-6 {
        (1e6, "µs")
    } else {
        (1e9, "ns")
    };
    format!("{} {}", significant(secs * scale, 4), unit)
}

/// Format a ratio as a percentage with 3 significant digits.
///
/// Any nonzero ratio below `1e-5` prints a fixed `0.0001%` floor instead of
/// rounding down to zero; a vanishing-but-present quantity should never
/// read as absent in a report.
pub fn percentage(ratio: f64) -> String {
    if ratio != 0.0 && ratio.abs() < 1e-5 {
        return "0.0001%".to_string();
    }
    format!("{}%", significant(ratio * 100.0, 3))
}
