// ABOUTME: Adherence scorer converting a day's intake against its goals into points
// ABOUTME: Protein, carbs and fat checks, perfect-day bonus, and the elite day rule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriTrack Contributors

use crate::goals::Goals;
use nutritrack_core::constants::gamification::{
    CARBS_POINTS, FAT_POINTS, PERFECT_DAY_BONUS, PROTEIN_POINTS, TAG_CARBS_GOOD, TAG_FAT_GOOD,
    TAG_PERFECT_BONUS, TAG_PROTEIN_MET,
};
use nutritrack_core::models::DailyAggregate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label for a passed adherence check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdherenceTag {
    /// Protein intake reached the goal
    ProteinMet,
    /// Carbohydrate intake stayed within the goal
    CarbsGood,
    /// Fat intake stayed within the goal
    FatGood,
    /// All three macro checks passed
    PerfectBonus,
}

impl AdherenceTag {
    /// Stable string label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ProteinMet => TAG_PROTEIN_MET,
            Self::CarbsGood => TAG_CARBS_GOOD,
            Self::FatGood => TAG_FAT_GOOD,
            Self::PerfectBonus => TAG_PERFECT_BONUS,
        }
    }

    /// Points awarded with this tag
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Self::ProteinMet => PROTEIN_POINTS,
            Self::CarbsGood => CARBS_POINTS,
            Self::FatGood => FAT_POINTS,
            Self::PerfectBonus => PERFECT_DAY_BONUS,
        }
    }
}

impl fmt::Display for AdherenceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score for one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdherenceResult {
    /// Sum of the points of every tag
    pub points: u32,
    /// Calories stayed at or under the goal; never earns points itself
    pub calorie_success: bool,
    /// Perfect day and calorie success together
    pub is_elite: bool,
    /// Passed checks in evaluation order: protein, carbs, fat, bonus
    pub tags: Vec<AdherenceTag>,
}

/// Score a day's intake against its goals
#[must_use]
pub fn score_day(day: &DailyAggregate, goals: &Goals) -> AdherenceResult {
    let calorie_success = day.calories <= goals.calorie_goal;

    let protein_met = day.protein_g >= goals.protein_goal_g;
    let carbs_good = day.carbs_g <= goals.carbs_goal_g;
    let fat_good = day.fat_g <= goals.fat_goal_g;
    let perfect = protein_met && carbs_good && fat_good;

    let tags: Vec<AdherenceTag> = [
        (protein_met, AdherenceTag::ProteinMet),
        (carbs_good, AdherenceTag::CarbsGood),
        (fat_good, AdherenceTag::FatGood),
        (perfect, AdherenceTag::PerfectBonus),
    ]
    .into_iter()
    .filter_map(|(passed, tag)| passed.then_some(tag))
    .collect();

    AdherenceResult {
        points: tags.iter().map(|tag| tag.points()).sum(),
        calorie_success,
        is_elite: perfect && calorie_success,
        tags,
    }
}
