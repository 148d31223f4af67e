// ABOUTME: Core data models for the NutriTrack engine and its storage collaborator
// ABOUTME: Re-exports Profile, DailyAggregate and the logged record types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriTrack Contributors

//! # Data Models
//!
//! - `Profile`: the attributes the energy model reads (age, sex, height, weight,
//!   activity level, calorie deficit)
//! - `DailyAggregate`: one calendar day's summed intake and exercise burn
//! - `FoodEntry`, `ActivityEntry`, `WeightEntry`, `HealthMeasurement`: the rows a
//!   storage collaborator sums into aggregates and reports

mod activity;
mod health;
mod nutrition;
mod profile;

pub use activity::ActivityEntry;
pub use health::{HealthMeasurement, WeightEntry};
pub use nutrition::{DailyAggregate, DayEnergy, FoodEntry, MacroTotals, MealType};
pub use profile::{
    ActivityLevel, Profile, ProfileInput, Sex, FALLBACK_ACTIVITY_LEVEL, FALLBACK_SEX,
};
