// ABOUTME: Dashboard service computing goals, summaries, reports and streaks from a store
// ABOUTME: Fetches the profile and per-day aggregates, then hands plain values to the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriTrack Contributors

use crate::storage::{NutritionStore, StoreHistory};
use chrono::{Days, NaiveDate};
use nutritrack_core::constants::reports::{MAX_HISTORY_DAYS, WEEKLY_WINDOW_DAYS};
use nutritrack_core::errors::{AppError, AppResult};
use nutritrack_core::models::{ActivityEntry, DailyAggregate, FoodEntry, Profile, WeightEntry};
use nutritrack_intelligence::daily_summary::{summarize_day, DailySummary};
use nutritrack_intelligence::history::{build_daily_totals, DailyTotalsPoint};
use nutritrack_intelligence::weekly_report::{build_weekly_report, WeeklyReport, WeeklyReportInput};
use nutritrack_intelligence::{compute_daily_goals, evaluate_gamification, Goals, StreakResult};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Everything shown for one day on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummaryReport {
    /// Calendar day
    pub date: NaiveDate,
    /// Profile the goals were computed from
    pub profile: Profile,
    /// The day's goals
    pub goals: Goals,
    /// Intake and remaining totals
    #[serde(flatten)]
    pub summary: DailySummary,
    /// The day's food entries
    pub food_entries: Vec<FoodEntry>,
    /// The day's exercise sessions
    pub activities: Vec<ActivityEntry>,
    /// Most recent weight measurement overall
    pub latest_weight: Option<WeightEntry>,
}

/// Drives the engine from a [`NutritionStore`]
#[derive(Debug, Clone)]
pub struct DashboardService<S> {
    store: S,
}

impl<S: NutritionStore> DashboardService<S> {
    /// Service over `store`
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    fn require_profile(&self) -> AppResult<Profile> {
        self.store
            .latest_profile()?
            .ok_or_else(AppError::profile_required)
    }

    /// Goals for `date`, including that day's exercise calories
    ///
    /// # Errors
    ///
    /// Returns `PROFILE_REQUIRED` without a profile, or a storage error
    pub fn daily_goals(&self, date: NaiveDate) -> AppResult<Goals> {
        let profile = self.require_profile()?;
        let day = self.store.daily_aggregate(date)?;
        Ok(compute_daily_goals(&profile, day.activity_calories))
    }

    /// Goals, intake and remaining totals for `date`
    ///
    /// # Errors
    ///
    /// Returns `PROFILE_REQUIRED` without a profile, or a storage error
    pub fn daily_summary(&self, date: NaiveDate) -> AppResult<DailySummaryReport> {
        let profile = self.require_profile()?;
        let food_entries = self.store.food_entries(date, date)?;
        let activities = self.store.activities(date, date)?;
        let latest_weight = self.store.latest_weight()?;

        let day = DailyAggregate::from_entries(&food_entries, &activities);
        let goals = compute_daily_goals(&profile, day.activity_calories);
        let summary = summarize_day(&goals, &day);

        info!(%date, calories = day.calories, calorie_goal = goals.calorie_goal, "daily summary");
        Ok(DailySummaryReport {
            date,
            profile,
            goals,
            summary,
            food_entries,
            activities,
            latest_weight,
        })
    }

    /// Seven-day report ending on `end_date`
    ///
    /// Works without a profile; goal fields are then absent.
    ///
    /// # Errors
    ///
    /// Returns a storage error if any read fails
    pub fn weekly_report(&self, end_date: NaiveDate) -> AppResult<WeeklyReport> {
        let start_date = days_before(end_date, WEEKLY_WINDOW_DAYS - 1)?;
        let profile = self.store.latest_profile()?;
        let food = self.store.food_entries(start_date, end_date)?;
        let activities = self.store.activities(start_date, end_date)?;
        let weights = self.store.weights(start_date, end_date)?;
        let health = self.store.health_measurements(start_date, end_date)?;

        let report = build_weekly_report(&WeeklyReportInput {
            start_date,
            end_date,
            profile: profile.as_ref(),
            food: &food,
            activities: &activities,
            weights: &weights,
            health: &health,
        });
        info!(period = %report.period, days_with_data = report.days_with_data, "weekly report");
        Ok(report)
    }

    /// Per-day totals for the `days` days ending on `today`, oldest first
    ///
    /// Works without a profile; goal fields are then absent.
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` unless `1 <= days <= 365`, or a storage error
    pub fn daily_totals(&self, today: NaiveDate, days: u32) -> AppResult<Vec<DailyTotalsPoint>> {
        if !(1..=MAX_HISTORY_DAYS).contains(&days) {
            return Err(AppError::value_out_of_range(format!(
                "days must be between 1 and {MAX_HISTORY_DAYS}"
            )));
        }
        let profile = self.store.latest_profile()?;
        let start = days_before(today, days - 1)?;

        let aggregates = (0..days)
            .map(|i| {
                let date = start
                    .checked_add_days(Days::new(u64::from(i)))
                    .ok_or_else(|| AppError::invalid_input("date out of range"))?;
                Ok((date, self.store.daily_aggregate(date)?))
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(build_daily_totals(profile.as_ref(), aggregates))
    }

    /// Today's points and tags plus the calorie streak before today
    ///
    /// # Errors
    ///
    /// Returns `PROFILE_REQUIRED` without a profile, or a storage error
    pub fn gamification_status(&self, today: NaiveDate) -> AppResult<StreakResult> {
        let profile = self.store.latest_profile()?;
        let today_aggregate = self.store.daily_aggregate(today)?;
        let history = StoreHistory::new(&self.store, today);

        let result = evaluate_gamification(profile.as_ref(), &today_aggregate, &history)?;
        info!(
            %today,
            streak_days = result.streak_days,
            today_points = result.today_points,
            is_elite = result.is_elite,
            "gamification status"
        );
        Ok(result)
    }
}

fn days_before(date: NaiveDate, days: u32) -> AppResult<NaiveDate> {
    date.checked_sub_days(Days::new(u64::from(days)))
        .ok_or_else(|| AppError::invalid_input(format!("{days} days before {date} is out of range")))
}
