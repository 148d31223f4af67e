// ABOUTME: Integration tests for the dashboard service over the in-memory store
// ABOUTME: Covers goals, summaries, weekly reports, history and gamification with and without a profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriTrack Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(clippy::float_cmp)]
#![allow(missing_docs)]

use chrono::{Days, NaiveDate};
use nutritrack::errors::ErrorCode;
use nutritrack::models::WeightEntry;
use nutritrack::services::DashboardService;
use nutritrack::storage::InMemoryStore;

mod common;

use common::{activity, at, date, food};

fn today() -> NaiveDate {
    date(2025, 3, 14)
}

fn days_ago(n: u64) -> NaiveDate {
    today().checked_sub_days(Days::new(n)).unwrap()
}

fn service_with_profile() -> DashboardService<InMemoryStore> {
    common::init_test_logging();
    DashboardService::new(common::store_with_profile(common::reference_male()))
}

#[test]
fn test_goals_include_that_days_exercise() {
    let mut store = common::store_with_profile(common::reference_male());
    store.add_activity(activity(1, today(), "running", 30, 300.0));
    let service = DashboardService::new(store);

    let goals = service.daily_goals(today()).unwrap();
    assert_eq!(goals.calorie_goal, 2355.6);

    let rest_day = service.daily_goals(days_ago(1)).unwrap();
    assert_eq!(rest_day.calorie_goal, 2055.6);
}

#[test]
fn test_profile_required_operations() {
    let service = DashboardService::new(InMemoryStore::new());

    let errors = [
        service.daily_goals(today()).unwrap_err(),
        service.daily_summary(today()).unwrap_err(),
        service.gamification_status(today()).unwrap_err(),
    ];
    for err in errors {
        assert_eq!(err.code, ErrorCode::ProfileRequired);
        assert_eq!(err.message, "No profile set");
    }
}

#[test]
fn test_weekly_and_history_tolerate_missing_profile() {
    let mut store = InMemoryStore::new();
    store.add_food(food(1, today(), 1200.0, 80.0, 120.0, 40.0));
    let service = DashboardService::new(store);

    let report = service.weekly_report(today()).unwrap();
    assert!(report.goals.is_none());
    assert_eq!(report.nutrition.avg_calories, 1200.0);

    let points = service.daily_totals(today(), 7).unwrap();
    assert_eq!(points.len(), 7);
    assert!(points.iter().all(|p| p.calorie_goal.is_none()));
}

#[test]
fn test_daily_summary() {
    let mut store = common::store_with_profile(common::reference_male());
    store.add_food(food(1, today(), 600.0, 40.0, 60.0, 20.0));
    store.add_food(food(2, today(), 900.0, 60.0, 90.0, 30.0));
    store.add_food(food(3, days_ago(1), 5000.0, 0.0, 0.0, 0.0));
    store.add_weight(WeightEntry {
        id: 1,
        weight_kg: 69.5,
        notes: None,
        measured_at: at(days_ago(3), 7),
    });
    let service = DashboardService::new(store);

    let summary = service.daily_summary(today()).unwrap();

    assert_eq!(summary.date, today());
    assert_eq!(summary.food_entries.len(), 2);
    assert!(summary.activities.is_empty());
    assert_eq!(summary.summary.intake.calories, 1500.0);
    assert_eq!(summary.summary.remaining.calories, 555.6);
    assert_eq!(summary.summary.remaining.protein_g, 54.2);
    assert_eq!(summary.latest_weight.unwrap().weight_kg, 69.5);

    let json = serde_json::to_value(service.daily_summary(today()).unwrap()).unwrap();
    assert_eq!(json["intake"]["calories"], 1500.0);
    assert_eq!(json["goals"]["calorie_goal"], 2055.6);
}

#[test]
fn test_weekly_report_window_is_seven_days_inclusive() {
    let mut store = common::store_with_profile(common::reference_male());
    store.add_food(food(1, days_ago(7), 9000.0, 0.0, 0.0, 0.0));
    store.add_food(food(2, days_ago(6), 1800.0, 100.0, 200.0, 60.0));
    store.add_food(food(3, today(), 2200.0, 120.0, 220.0, 70.0));
    store.add_activity(activity(1, days_ago(2), "cycling", 60, 700.0));
    let service = DashboardService::new(store);

    let report = service.weekly_report(today()).unwrap();

    assert_eq!(report.period, "2025-03-08 to 2025-03-14");
    assert_eq!(report.days_with_data, 2);
    assert_eq!(report.nutrition.avg_calories, 2000.0);
    assert_eq!(report.goals.unwrap().calorie_goal, 2155.6);
    assert_eq!(report.nutrition.days_over_goal, 1);
    assert_eq!(report.nutrition.days_under_goal, 1);
}

#[test]
fn test_daily_totals_oldest_first() {
    let mut store = common::store_with_profile(common::reference_male());
    store.add_food(food(1, days_ago(2), 1000.0, 0.0, 0.0, 0.0));
    store.add_activity(activity(1, days_ago(2), "hiking", 90, 300.0));
    let service = DashboardService::new(store);

    let points = service.daily_totals(today(), 3).unwrap();

    let dates: Vec<NaiveDate> = points.iter().map(|p| p.date).collect();
    assert_eq!(dates, vec![days_ago(2), days_ago(1), today()]);
    assert_eq!(points[0].calories, 1000.0);
    assert_eq!(points[0].calorie_goal, Some(2355.6));
    assert_eq!(points[2].calorie_goal, Some(2055.6));
}

#[test]
fn test_daily_totals_rejects_bad_window() {
    let service = service_with_profile();

    assert_eq!(
        service.daily_totals(today(), 0).unwrap_err().code,
        ErrorCode::ValueOutOfRange
    );
    assert_eq!(
        service.daily_totals(today(), 366).unwrap_err().code,
        ErrorCode::ValueOutOfRange
    );
    assert_eq!(service.daily_totals(today(), 365).unwrap().len(), 365);
}

#[test]
fn test_gamification_status_counts_days_before_today() {
    let mut store = common::store_with_profile(common::reference_male());
    for offset in 1..=3 {
        store.add_food(food(offset, days_ago(offset), 1900.0, 0.0, 0.0, 0.0));
    }
    // Gap on day 4 ends the streak even though day 5 qualifies
    store.add_food(food(10, days_ago(5), 1900.0, 0.0, 0.0, 0.0));
    store.add_food(food(20, today(), 1950.0, 160.0, 180.0, 60.0));
    let service = DashboardService::new(store);

    let status = service.gamification_status(today()).unwrap();

    assert_eq!(status.streak_days, 3);
    assert_eq!(status.today_points, 150);
    assert!(status.is_elite);
}

#[test]
fn test_gamification_status_with_empty_history() {
    let service = service_with_profile();

    let status = service.gamification_status(today()).unwrap();

    assert_eq!(status.streak_days, 0);
    assert_eq!(status.today_points, 50);
    assert!(status.calorie_success);
    assert!(!status.is_elite);
}
