// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriTrack Contributors
// ABOUTME: Dashboard commands printing service results as JSON
// ABOUTME: Goals, daily summary, weekly report, history and gamification

use super::print_json;
use anyhow::Result;
use chrono::NaiveDate;
use nutritrack::services::DashboardService;
use nutritrack::storage::NutritionStore;

pub fn goals<S: NutritionStore>(service: &DashboardService<S>, today: NaiveDate) -> Result<()> {
    print_json(&service.daily_goals(today)?)
}

pub fn summary<S: NutritionStore>(service: &DashboardService<S>, date: NaiveDate) -> Result<()> {
    print_json(&service.daily_summary(date)?)
}

pub fn weekly<S: NutritionStore>(service: &DashboardService<S>, end_date: NaiveDate) -> Result<()> {
    print_json(&service.weekly_report(end_date)?)
}

pub fn history<S: NutritionStore>(
    service: &DashboardService<S>,
    today: NaiveDate,
    days: u32,
) -> Result<()> {
    print_json(&service.daily_totals(today, days)?)
}

pub fn gamification<S: NutritionStore>(
    service: &DashboardService<S>,
    today: NaiveDate,
) -> Result<()> {
    print_json(&service.gamification_status(today)?)
}
