// ABOUTME: Per-day totals with that day's goals, for charting a date range
// ABOUTME: Goals are recomputed per day from the day's own exercise calories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriTrack Contributors

use crate::goals::compute_daily_goals;
use crate::rounding::round1;
use chrono::NaiveDate;
use nutritrack_core::models::{DailyAggregate, Profile};
use serde::{Deserialize, Serialize};

/// One day of the history chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyTotalsPoint {
    /// Calendar day
    pub date: NaiveDate,
    /// Consumed energy (kcal)
    pub calories: f64,
    /// Consumed protein (grams)
    pub protein_g: f64,
    /// Consumed carbohydrates (grams)
    pub carbs_g: f64,
    /// Consumed fat (grams)
    pub fat_g: f64,
    /// Exercise burn (kcal)
    pub activity_calories: f64,
    /// Calorie goal, absent without a profile
    pub calorie_goal: Option<f64>,
    /// Protein goal, absent without a profile
    pub protein_goal_g: Option<f64>,
    /// Carbohydrate goal, absent without a profile
    pub carbs_goal_g: Option<f64>,
    /// Fat goal, absent without a profile
    pub fat_goal_g: Option<f64>,
}

impl DailyTotalsPoint {
    /// Build one point; intake values are rounded to one decimal
    #[must_use]
    pub fn new(date: NaiveDate, day: &DailyAggregate, profile: Option<&Profile>) -> Self {
        let goals = profile.map(|p| compute_daily_goals(p, day.activity_calories));
        Self {
            date,
            calories: round1(day.calories),
            protein_g: round1(day.protein_g),
            carbs_g: round1(day.carbs_g),
            fat_g: round1(day.fat_g),
            activity_calories: round1(day.activity_calories),
            calorie_goal: goals.map(|g| g.calorie_goal),
            protein_goal_g: goals.map(|g| g.protein_goal_g),
            carbs_goal_g: goals.map(|g| g.carbs_goal_g),
            fat_goal_g: goals.map(|g| g.fat_goal_g),
        }
    }
}

/// Build chart points for a sequence of days, keeping the input order
pub fn build_daily_totals<I>(profile: Option<&Profile>, days: I) -> Vec<DailyTotalsPoint>
where
    I: IntoIterator<Item = (NaiveDate, DailyAggregate)>,
{
    days.into_iter()
        .map(|(date, day)| DailyTotalsPoint::new(date, &day, profile))
        .collect()
}
