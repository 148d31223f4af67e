// ABOUTME: Gamification constants for adherence points, tags and streak scanning
// ABOUTME: Point values per check, tag labels, and the backward scan bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriTrack Contributors

/// Points for meeting the protein goal
pub const PROTEIN_POINTS: u32 = 50;
/// Points for staying within the carbohydrate goal
pub const CARBS_POINTS: u32 = 25;
/// Points for staying within the fat goal
pub const FAT_POINTS: u32 = 25;
/// Bonus when protein, carbs and fat checks all pass
pub const PERFECT_DAY_BONUS: u32 = 50;
/// Highest score a single day can reach
pub const MAX_DAILY_POINTS: u32 = PROTEIN_POINTS + CARBS_POINTS + FAT_POINTS + PERFECT_DAY_BONUS;

/// Tag emitted when the protein goal is met
pub const TAG_PROTEIN_MET: &str = "protein_met";
/// Tag emitted when carbohydrates stay within goal
pub const TAG_CARBS_GOOD: &str = "carbs_good";
/// Tag emitted when fat stays within goal
pub const TAG_FAT_GOOD: &str = "fat_good";
/// Tag emitted for the perfect-day bonus
pub const TAG_PERFECT_BONUS: &str = "perfect_bonus";

/// First day offset examined by the streak scan (1 = yesterday)
pub const STREAK_FIRST_OFFSET: u32 = 1;
/// Oldest day offset the streak scan will ever examine
pub const STREAK_MAX_LOOKBACK_DAYS: u32 = 30;

/// Logged calorie total that marks a day as having no data.
///
/// A day whose true intake was zero is indistinguishable from an unlogged day
/// and also ends the streak.
pub const NO_DATA_CALORIES: f64 = 0.0;
