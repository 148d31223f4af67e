// ABOUTME: Energy model constants for BMR and TDEE estimation
// ABOUTME: Mifflin-St Jeor coefficients and fixed activity level multipliers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriTrack Contributors

//! Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting
//! energy expenditure. *American Journal of Clinical Nutrition*, 51(2), 241-247.

/// Mifflin-St Jeor weight coefficient (per kg)
pub const MSJ_WEIGHT_COEF: f64 = 10.0;
/// Mifflin-St Jeor height coefficient (per cm)
pub const MSJ_HEIGHT_COEF: f64 = 6.25;
/// Mifflin-St Jeor age coefficient (per year, subtracted)
pub const MSJ_AGE_COEF: f64 = 5.0;
/// Mifflin-St Jeor male constant
pub const MSJ_MALE_CONSTANT: f64 = 5.0;
/// Mifflin-St Jeor female constant
pub const MSJ_FEMALE_CONSTANT: f64 = -161.0;

/// Sedentary (little/no exercise)
pub const SEDENTARY_MULTIPLIER: f64 = 1.2;
/// Lightly active (1-3 days/week)
pub const LIGHT_MULTIPLIER: f64 = 1.375;
/// Moderately active (3-5 days/week)
pub const MODERATE_MULTIPLIER: f64 = 1.55;
/// Active (6-7 days/week)
pub const ACTIVE_MULTIPLIER: f64 = 1.725;
/// Very active (hard training 2x/day)
pub const VERY_ACTIVE_MULTIPLIER: f64 = 1.9;
