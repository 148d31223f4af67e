// ABOUTME: Tests for BMR/TDEE estimation and the calorie goal with its macro split
// ABOUTME: Covers Mifflin-St Jeor values, activity multipliers, lenient parsing and unclamped goals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriTrack Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(clippy::float_cmp)]
#![allow(missing_docs)]

use nutritrack::intelligence::rounding::{round1, round2};
use nutritrack::intelligence::{compute_bmr, compute_daily_goals, compute_tdee};
use nutritrack::models::{ActivityLevel, Profile, Sex};

mod common;

// ============================================================================
// BMR - Mifflin-St Jeor
// ============================================================================

#[test]
fn test_bmr_male_reference() {
    // 10*70 + 6.25*175 - 5*30 + 5 = 1648.75
    assert_eq!(compute_bmr(70.0, 175.0, 30, Sex::Male), 1648.8);
}

#[test]
fn test_bmr_female_same_body_as_male_reference() {
    // 10*70 + 6.25*175 - 5*30 - 161 = 1482.75
    assert_eq!(compute_bmr(70.0, 175.0, 30, Sex::Female), 1482.8);
}

#[test]
fn test_bmr_female_reference() {
    // 10*60 + 6.25*160 - 5*30 - 161 = 1289
    assert_eq!(compute_bmr(60.0, 160.0, 30, Sex::Female), 1289.0);
}

#[test]
fn test_bmr_sex_offset_difference() {
    let male = compute_bmr(80.0, 180.0, 40, Sex::Male);
    let female = compute_bmr(80.0, 180.0, 40, Sex::Female);
    assert_eq!(male, 1730.0);
    assert_eq!(male - female, 166.0);
}

#[test]
fn test_unknown_sex_string_is_female() {
    assert_eq!(Sex::from_str_lossy("other"), Sex::Female);
    assert_eq!(Sex::from_str_lossy(""), Sex::Female);
    assert_eq!(Sex::from_str_lossy("MALE"), Sex::Female);
    assert_eq!(Sex::from_str_lossy("male"), Sex::Male);
}

// ============================================================================
// TDEE - activity multipliers
// ============================================================================

#[test]
fn test_tdee_sedentary() {
    assert_eq!(compute_tdee(1650.0, ActivityLevel::Sedentary), 1980.0);
}

#[test]
fn test_tdee_all_levels_increase() {
    let values: Vec<f64> = ActivityLevel::ALL
        .iter()
        .map(|level| compute_tdee(1500.0, *level))
        .collect();
    assert_eq!(values, vec![1800.0, 2062.5, 2325.0, 2587.5, 2850.0]);
}

#[test]
fn test_unknown_activity_level_uses_moderate() {
    let level = ActivityLevel::from_str_lossy("extreme");
    assert_eq!(level, ActivityLevel::Moderate);
    assert_eq!(compute_tdee(1000.0, level), 1550.0);
    assert_eq!(ActivityLevel::from_str_lossy("very_active"), ActivityLevel::VeryActive);
}

#[test]
fn test_profile_json_tolerates_unknown_enum_values() {
    let profile: Profile = serde_json::from_str(
        r#"{"age": 30, "sex": "unspecified", "height_cm": 160.0,
            "current_weight_kg": 60.0, "activity_level": "couch"}"#,
    )
    .unwrap();
    assert_eq!(profile.sex, Sex::Female);
    assert_eq!(profile.activity_level, ActivityLevel::Moderate);
    assert_eq!(profile.calorie_deficit, 500);
}

// ============================================================================
// Goals
// ============================================================================

#[test]
fn test_goals_reference_male_without_exercise() {
    common::init_test_logging();
    let goals = compute_daily_goals(&common::reference_male(), 0.0);

    assert_eq!(goals.bmr, 1648.8);
    assert_eq!(goals.tdee, 2555.6);
    assert_eq!(goals.effective_tdee, 2555.6);
    assert_eq!(goals.calorie_goal, 2055.6);
    assert_eq!(goals.protein_goal_g, 154.2);
    assert_eq!(goals.carbs_goal_g, 205.6);
    assert_eq!(goals.fat_goal_g, 68.5);
}

#[test]
fn test_goals_macro_split_of_2000() {
    let profile = common::reference_male().with_calorie_deficit(600);
    let goals = compute_daily_goals(&profile, 44.4);

    assert_eq!(goals.effective_tdee, 2600.0);
    assert_eq!(goals.calorie_goal, 2000.0);
    assert_eq!(goals.protein_goal_g, 150.0);
    assert_eq!(goals.carbs_goal_g, 200.0);
    assert_eq!(goals.fat_goal_g, 66.7);
}

#[test]
fn test_goals_exercise_raises_goal() {
    let goals = compute_daily_goals(&common::reference_male(), 300.0);
    assert_eq!(goals.activity_calories, 300.0);
    assert_eq!(goals.effective_tdee, 2855.6);
    assert_eq!(goals.calorie_goal, 2355.6);
    assert_eq!(goals.protein_goal_g, 176.7);
    assert_eq!(goals.carbs_goal_g, 235.6);
    assert_eq!(goals.fat_goal_g, 78.5);
}

#[test]
fn test_goals_zero_deficit_equals_tdee() {
    let profile = common::reference_female().with_calorie_deficit(0);
    let goals = compute_daily_goals(&profile, 0.0);
    assert_eq!(goals.calorie_goal, goals.tdee);
    assert_eq!(goals.calorie_goal, 1546.8);
    assert_eq!(goals.protein_goal_g, 116.0);
}

#[test]
fn test_goals_are_idempotent() {
    let profile = common::reference_female();
    let first = compute_daily_goals(&profile, 123.4);
    let second = compute_daily_goals(&profile, 123.4);
    assert_eq!(first, second);
}

#[test]
fn test_goals_negative_when_deficit_exceeds_tdee() {
    let profile = Profile::new(90, Sex::Female, 120.0, 40.0)
        .with_activity_level(ActivityLevel::Sedentary)
        .with_calorie_deficit(2000);
    let goals = compute_daily_goals(&profile, 0.0);

    assert_eq!(goals.tdee, 646.8);
    assert_eq!(goals.calorie_goal, -1353.2);
    assert_eq!(goals.protein_goal_g, -101.5);
    assert_eq!(goals.carbs_goal_g, -135.3);
    assert_eq!(goals.fat_goal_g, -45.1);
}

// ============================================================================
// Rounding
// ============================================================================

#[test]
fn test_rounding_follows_stored_binary_value() {
    // 2.675 is stored just below the midpoint
    assert_eq!(round2(2.675), 2.67);
    assert_eq!(round1(1648.75), 1648.8);
    assert_eq!(round1(-1353.24), -1353.2);
    assert!(round1(f64::NAN).is_nan());
}
