// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Immutable engine constants for energy, macro split, gamification and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriTrack Contributors

//! Constants module
//!
//! Every number the engine uses lives here as a compile-time constant. Nothing in
//! this module is read from the environment.

/// Energy model coefficients and activity multipliers
pub mod energy;

/// Gamification points and streak scan limits
pub mod gamification;

/// Fixed macronutrient split policy
pub mod macros {
    /// Share of the calorie goal allocated to protein
    pub const PROTEIN_SHARE: f64 = 0.30;
    /// Share of the calorie goal allocated to carbohydrates
    pub const CARBS_SHARE: f64 = 0.40;
    /// Share of the calorie goal allocated to fat
    pub const FAT_SHARE: f64 = 0.30;
    /// Energy density of protein (kcal/g)
    pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
    /// Energy density of carbohydrates (kcal/g)
    pub const CARBS_KCAL_PER_G: f64 = 4.0;
    /// Energy density of fat (kcal/g)
    pub const FAT_KCAL_PER_G: f64 = 9.0;
}

/// Calorie goal defaults
pub mod goals {
    /// Deficit applied when a profile does not specify one
    pub const DEFAULT_CALORIE_DEFICIT: u32 = 500;
}

/// Input ranges enforced by the collaborator layer before a profile is stored
pub mod limits {
    /// Minimum accepted age (years)
    pub const MIN_AGE: u32 = 10;
    /// Maximum accepted age (years)
    pub const MAX_AGE: u32 = 120;
    /// Minimum accepted height (cm)
    pub const MIN_HEIGHT_CM: f64 = 50.0;
    /// Maximum accepted height (cm)
    pub const MAX_HEIGHT_CM: f64 = 300.0;
    /// Minimum accepted body weight (kg)
    pub const MIN_WEIGHT_KG: f64 = 20.0;
    /// Maximum accepted body weight (kg)
    pub const MAX_WEIGHT_KG: f64 = 500.0;
    /// Maximum accepted daily calorie deficit (kcal)
    pub const MAX_CALORIE_DEFICIT: u32 = 2000;
}

/// Report windows
pub mod reports {
    /// Length of the weekly report window, including its end date
    pub const WEEKLY_WINDOW_DAYS: u32 = 7;
    /// Default length of the daily totals history
    pub const DEFAULT_HISTORY_DAYS: u32 = 30;
    /// Longest daily totals history a caller may request
    pub const MAX_HISTORY_DAYS: u32 = 365;
}
