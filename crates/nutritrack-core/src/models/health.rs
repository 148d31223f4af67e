// ABOUTME: Body weight and vital sign measurement models
// ABOUTME: WeightEntry and HealthMeasurement rows consumed by the weekly report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriTrack Contributors

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One body weight measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    /// Storage identifier
    pub id: u64,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Local time of the measurement
    pub measured_at: NaiveDateTime,
}

/// One vital sign measurement; any subset of values may be present
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthMeasurement {
    /// Storage identifier
    pub id: u64,
    /// Systolic blood pressure (mmHg)
    #[serde(default)]
    pub systolic_bp: Option<u32>,
    /// Diastolic blood pressure (mmHg)
    #[serde(default)]
    pub diastolic_bp: Option<u32>,
    /// Blood glucose (mg/dL)
    #[serde(default)]
    pub blood_sugar: Option<f64>,
    /// Blood oxygen saturation (%)
    #[serde(default)]
    pub blood_oxygen: Option<f64>,
    /// Heart rate (bpm)
    #[serde(default)]
    pub heart_rate: Option<u32>,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Local time of the measurement
    pub measured_at: NaiveDateTime,
}
