// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides logging setup, reference profiles and food/activity row builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriTrack Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `nutritrack`

use chrono::{NaiveDate, NaiveDateTime};
use nutritrack::models::{ActivityEntry, ActivityLevel, FoodEntry, MealType, Profile, Sex};
use nutritrack::storage::{InMemoryStore, StoreSnapshot};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// 30-year-old male, 175 cm, 70 kg, moderately active, 500 kcal deficit
///
/// BMR 1648.8, TDEE 2555.6, calorie goal 2055.6 with no exercise.
pub fn reference_male() -> Profile {
    Profile::new(30, Sex::Male, 175.0, 70.0).with_activity_level(ActivityLevel::Moderate)
}

/// 30-year-old female, 160 cm, 60 kg, sedentary, 500 kcal deficit
///
/// BMR 1289.0, TDEE 1546.8, calorie goal 1046.8 with no exercise.
pub fn reference_female() -> Profile {
    Profile::new(30, Sex::Female, 160.0, 60.0).with_activity_level(ActivityLevel::Sedentary)
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn at(day: NaiveDate, hour: u32) -> NaiveDateTime {
    day.and_hms_opt(hour, 0, 0).unwrap()
}

pub fn food(id: u64, day: NaiveDate, calories: f64, protein: f64, carbs: f64, fat: f64) -> FoodEntry {
    FoodEntry {
        id,
        name: format!("item {id}"),
        calories,
        protein_g: protein,
        carbs_g: carbs,
        fat_g: fat,
        meal_type: MealType::Lunch,
        quantity: None,
        notes: None,
        logged_at: at(day, 12),
    }
}

pub fn activity(id: u64, day: NaiveDate, kind: &str, minutes: u32, calories: f64) -> ActivityEntry {
    ActivityEntry {
        id,
        activity_type: kind.to_owned(),
        duration_minutes: minutes,
        calories_burned: calories,
        intensity: "moderate".to_owned(),
        notes: None,
        performed_at: at(day, 7),
    }
}

/// Store holding only a profile
pub fn store_with_profile(profile: Profile) -> InMemoryStore {
    InMemoryStore::from_snapshot(StoreSnapshot {
        profile: Some(profile),
        ..StoreSnapshot::default()
    })
}
