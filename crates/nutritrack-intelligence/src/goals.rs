// ABOUTME: Goal calculator combining energy expenditure, deficit and exercise burn
// ABOUTME: Produces the calorie goal and a fixed 30/40/30 protein/carbs/fat split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriTrack Contributors

use crate::energy::{compute_bmr, compute_tdee};
use crate::rounding::round1;
use nutritrack_core::constants::macros::{
    CARBS_KCAL_PER_G, CARBS_SHARE, FAT_KCAL_PER_G, FAT_SHARE, PROTEIN_KCAL_PER_G, PROTEIN_SHARE,
};
use nutritrack_core::models::Profile;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Daily energy and macro targets for one profile and one day's exercise
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Goals {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: f64,
    /// Total Daily Energy Expenditure before exercise (kcal/day)
    pub tdee: f64,
    /// Exercise burn logged for the day (kcal)
    pub activity_calories: f64,
    /// `tdee + activity_calories`
    pub effective_tdee: f64,
    /// Deficit subtracted from the effective TDEE (kcal)
    pub calorie_deficit: u32,
    /// `effective_tdee - calorie_deficit`, may be negative
    pub calorie_goal: f64,
    /// Protein target (grams)
    pub protein_goal_g: f64,
    /// Carbohydrate target (grams)
    pub carbs_goal_g: f64,
    /// Fat target (grams)
    pub fat_goal_g: f64,
}

/// Compute the day's goals from a profile and that day's exercise calories
///
/// The goal is not clamped: a deficit larger than the effective TDEE yields a
/// negative calorie goal and non-positive macro goals. Each macro is rounded on
/// its own, so the three do not add back exactly to the calorie goal.
#[must_use]
pub fn compute_daily_goals(profile: &Profile, activity_calories: f64) -> Goals {
    let bmr = compute_bmr(
        profile.current_weight_kg,
        profile.height_cm,
        profile.age,
        profile.sex,
    );
    let tdee = compute_tdee(bmr, profile.activity_level);
    let deficit = profile.calorie_deficit;

    let effective_tdee = tdee + activity_calories;
    let calorie_goal = effective_tdee - f64::from(deficit);

    let goals = Goals {
        bmr,
        tdee,
        activity_calories,
        effective_tdee,
        calorie_deficit: deficit,
        calorie_goal: round1(calorie_goal),
        protein_goal_g: round1(calorie_goal * PROTEIN_SHARE / PROTEIN_KCAL_PER_G),
        carbs_goal_g: round1(calorie_goal * CARBS_SHARE / CARBS_KCAL_PER_G),
        fat_goal_g: round1(calorie_goal * FAT_SHARE / FAT_KCAL_PER_G),
    };

    debug!(
        bmr,
        tdee,
        activity_calories,
        calorie_goal = goals.calorie_goal,
        "computed daily goals"
    );
    goals
}
