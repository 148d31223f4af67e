// ABOUTME: Logged exercise session model
// ABOUTME: ActivityEntry rows whose burn feeds the effective TDEE for a day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriTrack Contributors

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

fn default_intensity() -> String {
    "moderate".to_owned()
}

/// One logged exercise session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// Storage identifier
    pub id: u64,
    /// Free-form type ("running", "cycling", ...)
    pub activity_type: String,
    /// Session length in minutes
    #[serde(default)]
    pub duration_minutes: u32,
    /// Energy burned (kcal)
    #[serde(default)]
    pub calories_burned: f64,
    /// Free-form intensity label
    #[serde(default = "default_intensity")]
    pub intensity: String,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Local time the session took place
    pub performed_at: NaiveDateTime,
}
