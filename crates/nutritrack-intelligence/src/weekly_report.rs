// ABOUTME: Weekly report over nutrition, weight, exercise and vital sign records
// ABOUTME: Averages per logged day, goal adherence counts, weight change and vitals averages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriTrack Contributors

//! # Weekly Report
//!
//! Built from the raw rows of a seven-day window. Nutrition averages divide by
//! the number of days that have at least one food entry (never less than one),
//! so unlogged days do not drag the averages down. The window's goals use the
//! window's total exercise burn spread evenly over seven days.

use crate::goals::{compute_daily_goals, Goals};
use crate::rounding::{round1, round2};
use chrono::NaiveDate;
use nutritrack_core::constants::reports::WEEKLY_WINDOW_DAYS;
use nutritrack_core::models::{
    ActivityEntry, FoodEntry, HealthMeasurement, MacroTotals, Profile, WeightEntry,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Rows of one seven-day window
#[derive(Debug, Clone, Copy)]
pub struct WeeklyReportInput<'a> {
    /// First day of the window
    pub start_date: NaiveDate,
    /// Last day of the window, inclusive
    pub end_date: NaiveDate,
    /// Profile used for goals, if one exists
    pub profile: Option<&'a Profile>,
    /// Food entries in the window
    pub food: &'a [FoodEntry],
    /// Exercise sessions in the window
    pub activities: &'a [ActivityEntry],
    /// Weight measurements in the window
    pub weights: &'a [WeightEntry],
    /// Vital sign measurements in the window
    pub health: &'a [HealthMeasurement],
}

/// Nutrition part of the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyNutrition {
    /// Mean calories per logged day
    pub avg_calories: f64,
    /// Mean protein per logged day
    pub avg_protein_g: f64,
    /// Mean carbohydrates per logged day
    pub avg_carbs_g: f64,
    /// Mean fat per logged day
    pub avg_fat_g: f64,
    /// Logged days above the calorie goal
    pub days_over_goal: u32,
    /// Logged days at or under the calorie goal
    pub days_under_goal: u32,
    /// Unrounded totals for each logged day
    pub daily_breakdown: BTreeMap<NaiveDate, MacroTotals>,
}

/// Weight part of the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyWeight {
    /// Earliest measurement in the window
    pub start_weight: Option<f64>,
    /// Latest measurement in the window
    pub end_weight: Option<f64>,
    /// `end - start`, rounded to two decimals
    pub change_kg: Option<f64>,
    /// Measurements, oldest first
    pub all_entries: Vec<WeightEntry>,
}

/// Exercise part of the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyActivity {
    /// Number of sessions
    pub total_sessions: usize,
    /// Summed session length (minutes)
    pub total_duration_min: u32,
    /// Summed burn (kcal), rounded to one decimal
    pub total_calories_burned: f64,
    /// Sessions in the window
    pub activities: Vec<ActivityEntry>,
    /// Distinct activity types, sorted
    pub types: Vec<String>,
}

/// Vital signs part of the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyHealth {
    /// Mean systolic blood pressure
    pub avg_systolic: Option<f64>,
    /// Mean diastolic blood pressure
    pub avg_diastolic: Option<f64>,
    /// Mean blood glucose
    pub avg_blood_sugar: Option<f64>,
    /// Mean blood oxygen saturation
    pub avg_blood_oxygen: Option<f64>,
    /// Measurements in the window
    pub all_entries: Vec<HealthMeasurement>,
}

/// Seven-day report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyReport {
    /// `"<start> to <end>"`
    pub period: String,
    /// Days with food logged, at least 1
    pub days_with_data: u32,
    /// Nutrition averages and adherence
    pub nutrition: WeeklyNutrition,
    /// Weight trend
    pub weight: WeeklyWeight,
    /// Exercise totals
    pub activity: WeeklyActivity,
    /// Vital sign averages
    pub health: WeeklyHealth,
    /// Goals for an average day of the window, absent without a profile
    pub goals: Option<Goals>,
}

/// Build the report for one window
#[must_use]
pub fn build_weekly_report(input: &WeeklyReportInput<'_>) -> WeeklyReport {
    let mut daily_breakdown: BTreeMap<NaiveDate, Vec<&FoodEntry>> = BTreeMap::new();
    for entry in input.food {
        daily_breakdown
            .entry(entry.logged_at.date())
            .or_default()
            .push(entry);
    }
    let daily_breakdown: BTreeMap<NaiveDate, MacroTotals> = daily_breakdown
        .into_iter()
        .map(|(date, entries)| (date, MacroTotals::from_food(entries)))
        .collect();

    let days_with_data = u32::try_from(daily_breakdown.len()).unwrap_or(u32::MAX).max(1);
    let sums = daily_breakdown
        .values()
        .fold(MacroTotals::default(), |acc, day| MacroTotals {
            calories: acc.calories + day.calories,
            protein_g: acc.protein_g + day.protein_g,
            carbs_g: acc.carbs_g + day.carbs_g,
            fat_g: acc.fat_g + day.fat_g,
        });
    let averages = sums.map(|total| round1(total / f64::from(days_with_data)));

    let total_burned: f64 = input.activities.iter().map(|a| a.calories_burned).sum();
    let goals = input.profile.map(|profile| {
        compute_daily_goals(profile, total_burned / f64::from(WEEKLY_WINDOW_DAYS))
    });

    let (days_over_goal, days_under_goal) = goals.map_or((0, 0), |goals| {
        daily_breakdown
            .values()
            .fold((0, 0), |(over, under), day| {
                if day.calories > goals.calorie_goal {
                    (over + 1, under)
                } else {
                    (over, under + 1)
                }
            })
    });

    WeeklyReport {
        period: format!("{} to {}", input.start_date, input.end_date),
        days_with_data,
        nutrition: WeeklyNutrition {
            avg_calories: averages.calories,
            avg_protein_g: averages.protein_g,
            avg_carbs_g: averages.carbs_g,
            avg_fat_g: averages.fat_g,
            days_over_goal,
            days_under_goal,
            daily_breakdown,
        },
        weight: weight_trend(input.weights),
        activity: activity_totals(input.activities, total_burned),
        health: health_averages(input.health),
        goals,
    }
}

#[allow(clippy::float_cmp)]
fn weight_trend(weights: &[WeightEntry]) -> WeeklyWeight {
    let mut all_entries = weights.to_vec();
    all_entries.sort_by_key(|w| w.measured_at);

    let start_weight = all_entries.first().map(|w| w.weight_kg);
    let end_weight = all_entries.last().map(|w| w.weight_kg);
    let change_kg = match (start_weight, end_weight) {
        (Some(start), Some(end)) if start != 0.0 && end != 0.0 => Some(round2(end - start)),
        _ => None,
    };

    WeeklyWeight {
        start_weight,
        end_weight,
        change_kg,
        all_entries,
    }
}

fn activity_totals(activities: &[ActivityEntry], total_burned: f64) -> WeeklyActivity {
    let types: BTreeSet<&str> = activities.iter().map(|a| a.activity_type.as_str()).collect();
    WeeklyActivity {
        total_sessions: activities.len(),
        total_duration_min: activities.iter().map(|a| a.duration_minutes).sum(),
        total_calories_burned: round1(total_burned),
        activities: activities.to_vec(),
        types: types.into_iter().map(str::to_owned).collect(),
    }
}

fn health_averages(health: &[HealthMeasurement]) -> WeeklyHealth {
    WeeklyHealth {
        avg_systolic: mean_of_present(health.iter().map(|h| h.systolic_bp.map(f64::from))),
        avg_diastolic: mean_of_present(health.iter().map(|h| h.diastolic_bp.map(f64::from))),
        avg_blood_sugar: mean_of_present(health.iter().map(|h| h.blood_sugar)),
        avg_blood_oxygen: mean_of_present(health.iter().map(|h| h.blood_oxygen)),
        all_entries: health.to_vec(),
    }
}

/// Mean of the present, non-zero samples, rounded to one decimal
#[allow(clippy::float_cmp)]
fn mean_of_present(samples: impl Iterator<Item = Option<f64>>) -> Option<f64> {
    let (sum, count) = samples
        .flatten()
        .filter(|value| *value != 0.0)
        .fold((0.0, 0_u32), |(sum, count), value| (sum + value, count + 1));
    (count > 0).then(|| round1(sum / f64::from(count)))
}
