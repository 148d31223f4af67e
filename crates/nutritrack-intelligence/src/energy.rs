// ABOUTME: Energy model computing basal metabolic rate and total daily energy expenditure
// ABOUTME: Mifflin-St Jeor BMR and fixed activity multipliers, both rounded to 0.1 kcal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriTrack Contributors

//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology.

use crate::rounding::round1;
use nutritrack_core::constants::energy::{MSJ_AGE_COEF, MSJ_HEIGHT_COEF, MSJ_WEIGHT_COEF};
use nutritrack_core::models::{ActivityLevel, Sex};

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_offset`
/// - Male: +5
/// - Female: -161
///
/// Inputs are not range-checked. The result is rounded to one decimal.
#[must_use]
// Separate multiply and add: a fused multiply-add rounds differently in the last bit
#[allow(clippy::suboptimal_flops)]
pub fn compute_bmr(weight_kg: f64, height_cm: f64, age: u32, sex: Sex) -> f64 {
    let bmr =
        MSJ_WEIGHT_COEF * weight_kg + MSJ_HEIGHT_COEF * height_cm - MSJ_AGE_COEF * f64::from(age);
    round1(bmr + sex.bmr_offset())
}

/// Calculate Total Daily Energy Expenditure
///
/// Formula: TDEE = BMR x activity multiplier
/// - Sedentary: 1.2
/// - Light: 1.375
/// - Moderate: 1.55 (also used for unrecognized levels)
/// - Active: 1.725
/// - Very active: 1.9
#[must_use]
pub fn compute_tdee(bmr: f64, activity_level: ActivityLevel) -> f64 {
    round1(bmr * activity_level.multiplier())
}
