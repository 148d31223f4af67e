// ABOUTME: Service layer that drives the nutrition engine from a storage collaborator
// ABOUTME: Re-exports the dashboard service and its response types

/// Goals, summaries, reports and gamification backed by a `NutritionStore`
pub mod dashboard;

pub use dashboard::{DailySummaryReport, DashboardService};
