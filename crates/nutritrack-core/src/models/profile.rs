// ABOUTME: User profile model with lenient sex and activity level parsing
// ABOUTME: Named fallback policies (moderate, female) and collaborator-side validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriTrack Contributors

use crate::constants::{energy, goals::DEFAULT_CALORIE_DEFICIT, limits};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Biological sex used for the BMR offset
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum Sex {
    /// Male (+5 kcal offset)
    Male,
    /// Female (-161 kcal offset)
    Female,
}

/// Any value other than `"male"` is treated as female
pub const FALLBACK_SEX: Sex = Sex::Female;

impl Sex {
    /// Parse a stored sex value, applying [`FALLBACK_SEX`] to anything but `"male"`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "male" => Self::Male,
            "female" => Self::Female,
            other => {
                warn!(value = other, "unrecognized sex value, using female BMR offset");
                FALLBACK_SEX
            }
        }
    }

    /// Stored representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    /// Mifflin-St Jeor constant for this sex
    #[must_use]
    pub const fn bmr_offset(self) -> f64 {
        match self {
            Self::Male => energy::MSJ_MALE_CONSTANT,
            Self::Female => energy::MSJ_FEMALE_CONSTANT,
        }
    }
}

impl From<String> for Sex {
    fn from(value: String) -> Self {
        Self::from_str_lossy(&value)
    }
}

/// Habitual activity level for the TDEE multiplier
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    #[default]
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise or physical job
    VeryActive,
}

/// Unknown or missing activity levels use the moderate multiplier
pub const FALLBACK_ACTIVITY_LEVEL: ActivityLevel = ActivityLevel::Moderate;

impl ActivityLevel {
    /// Every level, ordered by multiplier
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::Active,
        Self::VeryActive,
    ];

    /// Parse a stored activity level, applying [`FALLBACK_ACTIVITY_LEVEL`] to unknown keys
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        Self::from_key(s).unwrap_or_else(|| {
            warn!(value = s, "unrecognized activity level, using moderate multiplier");
            FALLBACK_ACTIVITY_LEVEL
        })
    }

    /// Exact stored key, `None` for anything else
    #[must_use]
    pub fn from_key(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == s)
    }

    /// Stored representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::VeryActive => "very_active",
        }
    }

    /// TDEE multiplier for this level
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Sedentary => energy::SEDENTARY_MULTIPLIER,
            Self::Light => energy::LIGHT_MULTIPLIER,
            Self::Moderate => energy::MODERATE_MULTIPLIER,
            Self::Active => energy::ACTIVE_MULTIPLIER,
            Self::VeryActive => energy::VERY_ACTIVE_MULTIPLIER,
        }
    }
}

impl From<String> for ActivityLevel {
    fn from(value: String) -> Self {
        Self::from_str_lossy(&value)
    }
}

const fn default_calorie_deficit() -> u32 {
    DEFAULT_CALORIE_DEFICIT
}

/// User profile read by the energy model
///
/// Ranges are not enforced here; see [`ProfileInput::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Age in years
    pub age: u32,
    /// Biological sex
    pub sex: Sex,
    /// Height in centimeters
    pub height_cm: f64,
    /// Current body weight in kilograms
    pub current_weight_kg: f64,
    /// Habitual activity level
    #[serde(default)]
    pub activity_level: ActivityLevel,
    /// Daily calorie deficit in kcal
    #[serde(default = "default_calorie_deficit")]
    pub calorie_deficit: u32,
    /// Target body weight, informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_goal_kg: Option<f64>,
}

impl Profile {
    /// Create a profile with the default activity level and calorie deficit
    #[must_use]
    pub const fn new(age: u32, sex: Sex, height_cm: f64, current_weight_kg: f64) -> Self {
        Self {
            age,
            sex,
            height_cm,
            current_weight_kg,
            activity_level: FALLBACK_ACTIVITY_LEVEL,
            calorie_deficit: DEFAULT_CALORIE_DEFICIT,
            weight_goal_kg: None,
        }
    }

    /// Set the activity level
    #[must_use]
    pub const fn with_activity_level(mut self, activity_level: ActivityLevel) -> Self {
        self.activity_level = activity_level;
        self
    }

    /// Set the daily calorie deficit
    #[must_use]
    pub const fn with_calorie_deficit(mut self, calorie_deficit: u32) -> Self {
        self.calorie_deficit = calorie_deficit;
        self
    }
}

/// Unvalidated profile as submitted by a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileInput {
    /// Age in years
    pub age: i64,
    /// Must be exactly `male` or `female`
    pub sex: String,
    /// Height in centimeters
    pub height_cm: f64,
    /// Current body weight in kilograms
    pub current_weight_kg: f64,
    /// Activity level key, defaults to moderate
    #[serde(default)]
    pub activity_level: Option<String>,
    /// Target body weight in kilograms
    #[serde(default)]
    pub weight_goal_kg: Option<f64>,
    /// Daily calorie deficit, defaults to 500
    #[serde(default)]
    pub calorie_deficit: Option<i64>,
}

impl ProfileInput {
    /// Check every field against the accepted ranges and build a [`Profile`]
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` for numeric fields outside their range and
    /// `INVALID_INPUT` for a sex value other than `male` or `female` or an unknown
    /// activity level.
    pub fn validate(&self) -> AppResult<Profile> {
        let age = u32::try_from(self.age)
            .ok()
            .filter(|age| (limits::MIN_AGE..=limits::MAX_AGE).contains(age))
            .ok_or_else(|| {
                AppError::value_out_of_range(format!(
                    "age must be between {} and {} years",
                    limits::MIN_AGE,
                    limits::MAX_AGE
                ))
                .with_resource_id("age")
            })?;

        let sex = match self.sex.as_str() {
            "male" => Sex::Male,
            "female" => Sex::Female,
            other => {
                return Err(AppError::invalid_input(format!(
                    "sex must be 'male' or 'female', got '{other}'"
                ))
                .with_resource_id("sex"))
            }
        };

        check_range(
            "height_cm",
            self.height_cm,
            limits::MIN_HEIGHT_CM,
            limits::MAX_HEIGHT_CM,
        )?;
        check_range(
            "current_weight_kg",
            self.current_weight_kg,
            limits::MIN_WEIGHT_KG,
            limits::MAX_WEIGHT_KG,
        )?;
        if let Some(goal) = self.weight_goal_kg {
            check_range(
                "weight_goal_kg",
                goal,
                limits::MIN_WEIGHT_KG,
                limits::MAX_WEIGHT_KG,
            )?;
        }

        let calorie_deficit = match self.calorie_deficit {
            None => DEFAULT_CALORIE_DEFICIT,
            Some(deficit) => u32::try_from(deficit)
                .ok()
                .filter(|d| *d <= limits::MAX_CALORIE_DEFICIT)
                .ok_or_else(|| {
                    AppError::value_out_of_range(format!(
                        "calorie_deficit must be between 0 and {} kcal",
                        limits::MAX_CALORIE_DEFICIT
                    ))
                    .with_resource_id("calorie_deficit")
                })?,
        };

        let activity_level = match self.activity_level.as_deref() {
            None => FALLBACK_ACTIVITY_LEVEL,
            Some(key) => ActivityLevel::from_key(key).ok_or_else(|| {
                AppError::invalid_input(format!(
                    "activity_level must be one of sedentary, light, moderate, active, very_active, got '{key}'"
                ))
                .with_resource_id("activity_level")
            })?,
        };

        Ok(Profile {
            age,
            sex,
            height_cm: self.height_cm,
            current_weight_kg: self.current_weight_kg,
            activity_level,
            calorie_deficit,
            weight_goal_kg: self.weight_goal_kg,
        })
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> AppResult<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(
            AppError::value_out_of_range(format!("{field} must be between {min} and {max}"))
                .with_resource_id(field),
        )
    }
}
