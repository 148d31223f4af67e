// ABOUTME: Nutritional goal and adherence scoring engine
// ABOUTME: BMR/TDEE, calorie goal and macro split, adherence points, streaks and reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriTrack Contributors

#![deny(unsafe_code)]

//! # NutriTrack Intelligence
//!
//! Deterministic arithmetic that turns a [`Profile`](nutritrack_core::models::Profile)
//! and a day's logged activity into energy and macro targets, scores a day's intake
//! against those targets, and scans backward through history for a calorie streak.
//!
//! Every function here is synchronous and free of hidden state. Goals are recomputed
//! on every call because exercise calories differ per day.
//!
//! ```text
//! Profile + DailyAggregate -> energy -> goals -> adherence -> {points, tags, calorie_success}
//!                                  streak drives goals once per day, yesterday first
//! ```

/// Decimal rounding of the exact binary value, ties to even
pub mod rounding;

/// BMR (Mifflin-St Jeor) and TDEE estimation
pub mod energy;

/// Calorie goal and fixed macro split
pub mod goals;

/// Per-day adherence points and tags
pub mod adherence;

/// Backward streak scan over lazily supplied history
pub mod streak;

/// Intake and remaining totals for one day
pub mod daily_summary;

/// Seven-day nutrition, weight, activity and vitals report
pub mod weekly_report;

/// Per-day totals with goals for charting
pub mod history;

pub use adherence::{score_day, AdherenceResult, AdherenceTag};
pub use energy::{compute_bmr, compute_tdee};
pub use goals::{compute_daily_goals, Goals};
pub use streak::{evaluate_gamification, scan_streak, HistoricalAggregateProvider, StreakResult};
