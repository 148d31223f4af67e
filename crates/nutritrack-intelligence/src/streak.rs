// ABOUTME: Streak evaluator scanning history backward from yesterday
// ABOUTME: Lazy per-day history iterator with early exit on a no-data or over-goal day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriTrack Contributors

//! # Calorie Streak
//!
//! A streak is the number of consecutive days before today whose logged calories
//! stayed at or under that day's calorie goal. Today is scored and reported but
//! never counted, since the day is not over.
//!
//! History is read through [`HistoricalDays`], an iterator that asks the provider
//! for one day only when the scan advances to it. The scan stops at the first day
//! with no logged calories or over its goal, so older days are never read once the
//! streak has ended. It never looks further back than
//! [`STREAK_MAX_LOOKBACK_DAYS`].

use crate::adherence::{score_day, AdherenceTag};
use crate::goals::compute_daily_goals;
use nutritrack_core::constants::gamification::{
    NO_DATA_CALORIES, STREAK_FIRST_OFFSET, STREAK_MAX_LOOKBACK_DAYS,
};
use nutritrack_core::errors::{AppError, AppResult};
use nutritrack_core::models::{DailyAggregate, DayEnergy, Profile};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use tracing::debug;

/// Source of per-day calorie and exercise totals, addressed by days before today
///
/// `offset` 1 is yesterday. Implementations typically run one storage query per call.
pub trait HistoricalAggregateProvider {
    /// Totals for the day `offset` days before today
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage read fails
    fn day_energy(&self, offset: u32) -> AppResult<DayEnergy>;
}

impl<F> HistoricalAggregateProvider for F
where
    F: Fn(u32) -> AppResult<DayEnergy>,
{
    fn day_energy(&self, offset: u32) -> AppResult<DayEnergy> {
        self(offset)
    }
}

/// Lazily fetched history, newest first, bounded by the lookback window
pub struct HistoricalDays<'a, P: ?Sized> {
    provider: &'a P,
    offsets: RangeInclusive<u32>,
}

impl<'a, P: HistoricalAggregateProvider + ?Sized> HistoricalDays<'a, P> {
    /// Iterate from yesterday back to the lookback limit
    pub fn new(provider: &'a P) -> Self {
        Self {
            provider,
            offsets: STREAK_FIRST_OFFSET..=STREAK_MAX_LOOKBACK_DAYS,
        }
    }
}

impl<P: HistoricalAggregateProvider + ?Sized> Iterator for HistoricalDays<'_, P> {
    type Item = (u32, AppResult<DayEnergy>);

    fn next(&mut self) -> Option<Self::Item> {
        let offset = self.offsets.next()?;
        Some((offset, self.provider.day_energy(offset)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.offsets.size_hint()
    }
}

/// Why the backward scan ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakStop {
    /// A day had no logged calories
    NoData {
        /// Days before today
        offset: u32,
    },
    /// A day's calories exceeded its goal
    GoalExceeded {
        /// Days before today
        offset: u32,
    },
    /// Every day in the lookback window qualified
    LookbackExhausted,
}

/// Outcome of the backward scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakScan {
    /// Consecutive qualifying days strictly before today
    pub streak_days: u32,
    /// Where the scan ended
    pub stop: StreakStop,
}

/// Streak plus today's score, for immediate display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakResult {
    /// Consecutive qualifying days strictly before today
    pub streak_days: u32,
    /// Today's adherence points
    pub today_points: u32,
    /// Today is an elite day so far
    pub is_elite: bool,
    /// Today's calories are at or under goal so far
    pub calorie_success: bool,
    /// Today's passed checks in evaluation order
    pub tags: Vec<AdherenceTag>,
}

/// Count consecutive qualifying days, yesterday first
///
/// Days are processed in strict reverse-chronological order and goals are
/// recomputed for each day from that day's exercise calories.
///
/// # Errors
///
/// Propagates the first provider error; no older day is read after it.
#[allow(clippy::float_cmp)]
pub fn scan_streak<P>(profile: &Profile, history: &P) -> AppResult<StreakScan>
where
    P: HistoricalAggregateProvider + ?Sized,
{
    let mut streak_days = 0;

    for (offset, day) in HistoricalDays::new(history) {
        let day = day?;

        // Exactly zero means nothing was logged; a skipped day still breaks the streak
        if day.calories == NO_DATA_CALORIES {
            debug!(offset, streak_days, reason = "no_data", "streak scan stopped");
            return Ok(StreakScan {
                streak_days,
                stop: StreakStop::NoData { offset },
            });
        }

        let goals = compute_daily_goals(profile, day.activity_calories);
        if day.calories > goals.calorie_goal {
            debug!(
                offset,
                streak_days,
                calories = day.calories,
                calorie_goal = goals.calorie_goal,
                reason = "goal_exceeded",
                "streak scan stopped"
            );
            return Ok(StreakScan {
                streak_days,
                stop: StreakStop::GoalExceeded { offset },
            });
        }

        streak_days += 1;
    }

    debug!(streak_days, reason = "lookback_exhausted", "streak scan stopped");
    Ok(StreakScan {
        streak_days,
        stop: StreakStop::LookbackExhausted,
    })
}

/// Score today and count the streak of qualifying days before it
///
/// # Errors
///
/// Returns `PROFILE_REQUIRED` when `profile` is `None` without reading history,
/// and propagates provider errors from the backward scan.
pub fn evaluate_gamification<P>(
    profile: Option<&Profile>,
    today: &DailyAggregate,
    history: &P,
) -> AppResult<StreakResult>
where
    P: HistoricalAggregateProvider + ?Sized,
{
    let profile = profile.ok_or_else(AppError::profile_required)?;

    let today_goals = compute_daily_goals(profile, today.activity_calories);
    let today_result = score_day(today, &today_goals);

    let scan = scan_streak(profile, history)?;

    Ok(StreakResult {
        streak_days: scan.streak_days,
        today_points: today_result.points,
        is_elite: today_result.is_elite,
        calorie_success: today_result.calorie_success,
        tags: today_result.tags,
    })
}
