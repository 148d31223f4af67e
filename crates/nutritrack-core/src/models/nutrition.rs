// ABOUTME: Nutrition tracking models for food intake aggregation
// ABOUTME: FoodEntry, MealType, MacroTotals, DailyAggregate and DayEnergy definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriTrack Contributors

use super::ActivityEntry;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Type of meal
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals, also used for unknown values
    #[default]
    Snack,
}

impl MealType {
    /// Parse a stored meal type; anything but the four known keys is a snack
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "breakfast" => Self::Breakfast,
            "lunch" => Self::Lunch,
            "dinner" => Self::Dinner,
            "snack" => Self::Snack,
            other => {
                warn!(value = other, "unrecognized meal type, using snack");
                Self::Snack
            }
        }
    }
}

impl From<String> for MealType {
    fn from(value: String) -> Self {
        Self::from_str_lossy(&value)
    }
}

/// One logged food item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEntry {
    /// Storage identifier
    pub id: u64,
    /// Food name
    pub name: String,
    /// Energy (kcal)
    #[serde(default)]
    pub calories: f64,
    /// Protein (grams)
    #[serde(default)]
    pub protein_g: f64,
    /// Carbohydrates (grams)
    #[serde(default)]
    pub carbs_g: f64,
    /// Fat (grams)
    #[serde(default)]
    pub fat_g: f64,
    /// Meal the item belongs to
    #[serde(default)]
    pub meal_type: MealType,
    /// Free-form quantity ("2 slices", "150 g")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Local time the item was eaten
    pub logged_at: NaiveDateTime,
}

/// Calories and macronutrients, either consumed or remaining
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTotals {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (grams)
    pub protein_g: f64,
    /// Carbohydrates (grams)
    pub carbs_g: f64,
    /// Fat (grams)
    pub fat_g: f64,
}

impl MacroTotals {
    /// Sum the macros of a set of food entries
    pub fn from_food<'a>(entries: impl IntoIterator<Item = &'a FoodEntry>) -> Self {
        entries.into_iter().fold(Self::default(), |acc, entry| Self {
            calories: acc.calories + entry.calories,
            protein_g: acc.protein_g + entry.protein_g,
            carbs_g: acc.carbs_g + entry.carbs_g,
            fat_g: acc.fat_g + entry.fat_g,
        })
    }

    /// Apply `f` to every field
    #[must_use]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            calories: f(self.calories),
            protein_g: f(self.protein_g),
            carbs_g: f(self.carbs_g),
            fat_g: f(self.fat_g),
        }
    }
}

/// One calendar day of summed intake and exercise burn
///
/// Every field is 0 when no rows exist for the day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyAggregate {
    /// Summed food energy (kcal)
    pub calories: f64,
    /// Summed protein (grams)
    pub protein_g: f64,
    /// Summed carbohydrates (grams)
    pub carbs_g: f64,
    /// Summed fat (grams)
    pub fat_g: f64,
    /// Summed exercise burn (kcal)
    pub activity_calories: f64,
}

impl DailyAggregate {
    /// Aggregate one day's food and activity rows
    #[must_use]
    pub fn from_entries(food: &[FoodEntry], activities: &[ActivityEntry]) -> Self {
        let intake = MacroTotals::from_food(food);
        Self {
            calories: intake.calories,
            protein_g: intake.protein_g,
            carbs_g: intake.carbs_g,
            fat_g: intake.fat_g,
            activity_calories: activities.iter().map(|a| a.calories_burned).sum(),
        }
    }

    /// Intake part of the aggregate
    #[must_use]
    pub const fn intake(&self) -> MacroTotals {
        MacroTotals {
            calories: self.calories,
            protein_g: self.protein_g,
            carbs_g: self.carbs_g,
            fat_g: self.fat_g,
        }
    }

    /// Energy part of the aggregate, as read by the streak scan
    #[must_use]
    pub const fn energy(&self) -> DayEnergy {
        DayEnergy {
            calories: self.calories,
            activity_calories: self.activity_calories,
        }
    }
}

/// Calorie intake and exercise burn for one historical day
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DayEnergy {
    /// Summed food energy (kcal)
    pub calories: f64,
    /// Summed exercise burn (kcal)
    pub activity_calories: f64,
}
