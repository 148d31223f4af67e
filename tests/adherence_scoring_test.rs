// ABOUTME: Tests for daily adherence points, tags and the elite-day flag
// ABOUTME: Covers threshold boundaries, tag order, calorie success and degenerate goals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriTrack Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutritrack::constants::gamification::MAX_DAILY_POINTS;
use nutritrack::intelligence::{compute_daily_goals, score_day, AdherenceTag, Goals};
use nutritrack::models::{ActivityLevel, DailyAggregate, Profile, Sex};
use serde_json::json;

mod common;

/// Calorie goal 2000, protein 150 g, carbs 200 g, fat 66.7 g
fn goals_2000() -> Goals {
    let goals = compute_daily_goals(&common::reference_male().with_calorie_deficit(600), 44.4);
    assert!((goals.calorie_goal - 2000.0).abs() < f64::EPSILON);
    goals
}

fn day(calories: f64, protein: f64, carbs: f64, fat: f64) -> DailyAggregate {
    DailyAggregate {
        calories,
        protein_g: protein,
        carbs_g: carbs,
        fat_g: fat,
        activity_calories: 44.4,
    }
}

#[test]
fn test_perfect_elite_day() {
    common::init_test_logging();
    let result = score_day(&day(1900.0, 160.0, 180.0, 60.0), &goals_2000());

    assert_eq!(result.points, 150);
    assert!(result.calorie_success);
    assert!(result.is_elite);
    assert_eq!(
        result.tags,
        vec![
            AdherenceTag::ProteinMet,
            AdherenceTag::CarbsGood,
            AdherenceTag::FatGood,
            AdherenceTag::PerfectBonus,
        ]
    );
}

#[test]
fn test_calorie_overshoot_keeps_bonus_but_not_elite() {
    let result = score_day(&day(2100.0, 160.0, 180.0, 60.0), &goals_2000());

    assert_eq!(result.points, 150);
    assert!(!result.calorie_success);
    assert!(!result.is_elite);
    assert!(result.tags.contains(&AdherenceTag::PerfectBonus));
}

#[test]
fn test_missed_protein_loses_bonus() {
    let result = score_day(&day(1800.0, 149.9, 150.0, 50.0), &goals_2000());

    assert_eq!(result.points, 50);
    assert!(result.calorie_success);
    assert!(!result.is_elite);
    assert_eq!(
        result.tags,
        vec![AdherenceTag::CarbsGood, AdherenceTag::FatGood]
    );
}

#[test]
fn test_exact_goals_pass_every_check() {
    let result = score_day(&day(2000.0, 150.0, 200.0, 66.7), &goals_2000());

    assert_eq!(result.points, 150);
    assert!(result.calorie_success);
    assert!(result.is_elite);
}

#[test]
fn test_carbs_and_fat_over_limit() {
    let result = score_day(&day(1950.0, 155.0, 200.1, 66.8), &goals_2000());

    assert_eq!(result.points, 50);
    assert_eq!(result.tags, vec![AdherenceTag::ProteinMet]);
    assert!(result.calorie_success);
    assert!(!result.is_elite);
}

#[test]
fn test_empty_day_scores_carbs_and_fat() {
    let result = score_day(&DailyAggregate::default(), &goals_2000());

    assert_eq!(result.points, 50);
    assert!(result.calorie_success);
    assert!(!result.is_elite);
    assert_eq!(
        result.tags,
        vec![AdherenceTag::CarbsGood, AdherenceTag::FatGood]
    );
}

#[test]
fn test_negative_goals_only_protein_passes_on_empty_day() {
    let profile = Profile::new(90, Sex::Female, 120.0, 40.0)
        .with_activity_level(ActivityLevel::Sedentary)
        .with_calorie_deficit(2000);
    let goals = compute_daily_goals(&profile, 0.0);
    let result = score_day(&DailyAggregate::default(), &goals);

    assert_eq!(result.points, 50);
    assert_eq!(result.tags, vec![AdherenceTag::ProteinMet]);
    assert!(!result.calorie_success);
    assert!(!result.is_elite);
}

#[test]
fn test_tags_serialize_as_snake_case() {
    let result = score_day(&day(1900.0, 160.0, 180.0, 60.0), &goals_2000());
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(
        value["tags"],
        json!(["protein_met", "carbs_good", "fat_good", "perfect_bonus"])
    );
    assert_eq!(AdherenceTag::PerfectBonus.to_string(), "perfect_bonus");
    assert_eq!(AdherenceTag::PerfectBonus.points(), 50);
}

#[test]
fn test_points_never_exceed_daily_maximum() {
    let goals = goals_2000();
    let mut best = 0;
    for calories in [0.0, 1999.9, 2000.0, 2500.0] {
        for protein in [0.0, 149.9, 150.0, 400.0] {
            for carbs in [0.0, 200.0, 200.1] {
                for fat in [0.0, 66.7, 66.8] {
                    let result = score_day(&day(calories, protein, carbs, fat), &goals);
                    assert!(result.points <= MAX_DAILY_POINTS);
                    assert_eq!(
                        result.points,
                        result.tags.iter().map(|tag| tag.points()).sum::<u32>()
                    );
                    best = best.max(result.points);
                }
            }
        }
    }
    assert_eq!(best, MAX_DAILY_POINTS);
}
