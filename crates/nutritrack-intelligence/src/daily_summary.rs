// ABOUTME: Daily summary of intake versus goals
// ABOUTME: Rounded intake totals and remaining calories and macros for one day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriTrack Contributors

use crate::goals::Goals;
use crate::rounding::round1;
use nutritrack_core::models::{DailyAggregate, MacroTotals};
use serde::{Deserialize, Serialize};

/// Intake and what is left of the day's goals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    /// Consumed totals, rounded to one decimal
    pub intake: MacroTotals,
    /// Goal minus consumed, rounded to one decimal; negative once a goal is exceeded
    pub remaining: MacroTotals,
}

/// Summarize a day's intake against its goals
#[must_use]
pub fn summarize_day(goals: &Goals, day: &DailyAggregate) -> DailySummary {
    let intake = day.intake();
    let remaining = MacroTotals {
        calories: goals.calorie_goal - intake.calories,
        protein_g: goals.protein_goal_g - intake.protein_g,
        carbs_g: goals.carbs_goal_g - intake.carbs_g,
        fat_g: goals.fat_goal_g - intake.fat_g,
    };

    DailySummary {
        intake: intake.map(round1),
        remaining: remaining.map(round1),
    }
}
