// ABOUTME: Decimal rounding helpers for goal and report values
// ABOUTME: Rounds the exact binary value to N decimals with ties to even
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriTrack Contributors

//! Goals are compared with `<=`/`>=`, so the rounding rule decides outcomes at the
//! boundary. Values are rounded as decimal text from their exact binary expansion,
//! ties going to the even digit: `1648.75 -> 1648.8`, `0.25 -> 0.2`, and `2.675`
//! (stored as 2.67499...) `-> 2.67`. Scaling by a power of ten before rounding
//! would disagree on the last two cases.

/// Round to `decimals` places
#[must_use]
pub fn round_to(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.decimals$}").parse().unwrap_or(value)
}

/// Round to one decimal place
#[must_use]
pub fn round1(value: f64) -> f64 {
    round_to(value, 1)
}

/// Round to two decimal places
#[must_use]
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}
