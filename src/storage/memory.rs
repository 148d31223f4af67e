// ABOUTME: In-memory NutritionStore backed by a serializable snapshot
// ABOUTME: Loads and saves the snapshot as JSON; used by the CLI and tests

use super::NutritionStore;
use chrono::{NaiveDate, NaiveDateTime};
use nutritrack_core::errors::{AppError, AppResult};
use nutritrack_core::models::{
    ActivityEntry, FoodEntry, HealthMeasurement, Profile, ProfileInput, WeightEntry,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Serialized form of every record the store holds
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreSnapshot {
    /// Current profile
    #[serde(default)]
    pub profile: Option<Profile>,
    /// Logged food
    #[serde(default)]
    pub food_entries: Vec<FoodEntry>,
    /// Logged exercise
    #[serde(default)]
    pub activities: Vec<ActivityEntry>,
    /// Logged body weight
    #[serde(default)]
    pub weight_logs: Vec<WeightEntry>,
    /// Logged vital signs
    #[serde(default)]
    pub health_measurements: Vec<HealthMeasurement>,
}

/// Profile section of a snapshot file with its values exactly as written
#[derive(Debug, Deserialize)]
struct RawProfileSection {
    #[serde(default)]
    profile: Option<ProfileInput>,
}

/// `NutritionStore` held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    snapshot: StoreSnapshot,
}

impl InMemoryStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store over an existing snapshot; rows are ordered by timestamp
    #[must_use]
    pub fn from_snapshot(mut snapshot: StoreSnapshot) -> Self {
        snapshot.food_entries.sort_by_key(|f| f.logged_at);
        snapshot.activities.sort_by_key(|a| a.performed_at);
        snapshot.weight_logs.sort_by_key(|w| w.measured_at);
        snapshot.health_measurements.sort_by_key(|h| h.measured_at);
        Self { snapshot }
    }

    /// Load a JSON snapshot file
    ///
    /// # Errors
    ///
    /// Returns `STORAGE_ERROR` if the file cannot be read and
    /// `SERIALIZATION_ERROR` if it is not a valid snapshot
    pub fn load(path: &Path) -> AppResult<Self> {
        let snapshot: StoreSnapshot = read_json(path)?;
        info!(
            path = %path.display(),
            food_entries = snapshot.food_entries.len(),
            activities = snapshot.activities.len(),
            has_profile = snapshot.profile.is_some(),
            "loaded snapshot"
        );
        Ok(Self::from_snapshot(snapshot))
    }

    /// Read a snapshot file's profile without the lenient enum parsing applied on load
    ///
    /// A stored `"sex": "Male"` loads as a female profile; reading it here keeps the
    /// original string so [`ProfileInput::validate`] can reject it.
    ///
    /// # Errors
    ///
    /// Returns `STORAGE_ERROR` if the file cannot be read and
    /// `SERIALIZATION_ERROR` if the profile section is malformed
    pub fn load_profile_input(path: &Path) -> AppResult<Option<ProfileInput>> {
        let section: RawProfileSection = read_json(path)?;
        Ok(section.profile)
    }

    /// Write the store as a JSON snapshot file
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails
    pub fn save(&self, path: &Path) -> AppResult<()> {
        let raw = serde_json::to_string_pretty(&self.snapshot)?;
        fs::write(path, raw)
            .map_err(|e| AppError::from(e).with_resource_id(path.display().to_string()))?;
        debug!(path = %path.display(), "saved snapshot");
        Ok(())
    }

    /// Current contents
    #[must_use]
    pub const fn snapshot(&self) -> &StoreSnapshot {
        &self.snapshot
    }

    /// Validate and store a profile, replacing any existing one
    ///
    /// The first profile also records its weight as a weight log entry.
    ///
    /// # Errors
    ///
    /// Returns the validation error if any field is out of range
    pub fn upsert_profile(&mut self, input: &ProfileInput, now: NaiveDateTime) -> AppResult<Profile> {
        let profile = input.validate()?;
        if self.snapshot.profile.is_none() {
            self.add_weight(WeightEntry {
                id: 0,
                weight_kg: profile.current_weight_kg,
                notes: Some("Profile update".to_owned()),
                measured_at: now,
            });
        }
        self.snapshot.profile = Some(profile.clone());
        Ok(profile)
    }

    /// Add a food entry under the next free id, which is returned
    pub fn add_food(&mut self, mut entry: FoodEntry) -> u64 {
        entry.id = next_id(self.snapshot.food_entries.iter().map(|f| f.id));
        let id = entry.id;
        insert_sorted(&mut self.snapshot.food_entries, entry, |f| f.logged_at);
        id
    }

    /// Add an exercise session under the next free id, which is returned
    pub fn add_activity(&mut self, mut entry: ActivityEntry) -> u64 {
        entry.id = next_id(self.snapshot.activities.iter().map(|a| a.id));
        let id = entry.id;
        insert_sorted(&mut self.snapshot.activities, entry, |a| a.performed_at);
        id
    }

    /// Add a weight measurement under the next free id, which is returned
    pub fn add_weight(&mut self, mut entry: WeightEntry) -> u64 {
        entry.id = next_id(self.snapshot.weight_logs.iter().map(|w| w.id));
        let id = entry.id;
        insert_sorted(&mut self.snapshot.weight_logs, entry, |w| w.measured_at);
        id
    }

    /// Add a vital sign measurement under the next free id, which is returned
    pub fn add_health(&mut self, mut entry: HealthMeasurement) -> u64 {
        entry.id = next_id(self.snapshot.health_measurements.iter().map(|h| h.id));
        let id = entry.id;
        insert_sorted(&mut self.snapshot.health_measurements, entry, |h| h.measured_at);
        id
    }

    /// Remove a food entry by id
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` if no entry has that id
    pub fn delete_food(&mut self, id: u64) -> AppResult<()> {
        let before = self.snapshot.food_entries.len();
        self.snapshot.food_entries.retain(|f| f.id != id);
        if self.snapshot.food_entries.len() == before {
            return Err(AppError::not_found(format!("Food entry {id}")));
        }
        Ok(())
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> AppResult<T> {
    let raw = fs::read_to_string(path)
        .map_err(|e| AppError::from(e).with_resource_id(path.display().to_string()))?;
    serde_json::from_str(&raw)
        .map_err(|e| AppError::from(e).with_resource_id(path.display().to_string()))
}

fn next_id(ids: impl Iterator<Item = u64>) -> u64 {
    ids.max().map_or(1, |max| max + 1)
}

fn insert_sorted<T>(rows: &mut Vec<T>, row: T, key: impl Fn(&T) -> NaiveDateTime) {
    let at = key(&row);
    let index = rows.partition_point(|existing| key(existing) <= at);
    rows.insert(index, row);
}

fn within<T>(rows: &[T], start: NaiveDate, end: NaiveDate, key: impl Fn(&T) -> NaiveDateTime) -> Vec<T>
where
    T: Clone,
{
    rows.iter()
        .filter(|&row| (start..=end).contains(&key(row).date()))
        .cloned()
        .collect()
}

impl NutritionStore for InMemoryStore {
    fn latest_profile(&self) -> AppResult<Option<Profile>> {
        Ok(self.snapshot.profile.clone())
    }

    fn food_entries(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<FoodEntry>> {
        Ok(within(&self.snapshot.food_entries, start, end, |f| f.logged_at))
    }

    fn activities(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<ActivityEntry>> {
        Ok(within(&self.snapshot.activities, start, end, |a| a.performed_at))
    }

    fn weights(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<WeightEntry>> {
        Ok(within(&self.snapshot.weight_logs, start, end, |w| w.measured_at))
    }

    fn latest_weight(&self) -> AppResult<Option<WeightEntry>> {
        Ok(self.snapshot.weight_logs.last().cloned())
    }

    fn health_measurements(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<HealthMeasurement>> {
        Ok(within(&self.snapshot.health_measurements, start, end, |h| h.measured_at))
    }
}
