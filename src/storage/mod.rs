// ABOUTME: Storage abstraction read by the nutrition engine's collaborators
// ABOUTME: NutritionStore trait, per-day aggregation, and the streak history adapter

//! Storage collaborator interface
//!
//! The engine never reads storage itself. Services fetch a profile and per-day
//! aggregates through [`NutritionStore`] and hand plain values to the engine.
//! All date ranges are inclusive calendar days in local time.

pub mod memory;

pub use memory::{InMemoryStore, StoreSnapshot};

use chrono::{Days, NaiveDate};
use nutritrack_core::errors::{AppError, AppResult};
use nutritrack_core::models::{
    ActivityEntry, DailyAggregate, DayEnergy, FoodEntry, HealthMeasurement, Profile, WeightEntry,
};
use nutritrack_intelligence::HistoricalAggregateProvider;
use tracing::trace;

/// Core storage abstraction trait
///
/// Implementations return rows ordered by their timestamp, oldest first.
pub trait NutritionStore: Send + Sync {
    /// Most recently saved profile, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails
    fn latest_profile(&self) -> AppResult<Option<Profile>>;

    /// Food entries logged between `start` and `end`
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails
    fn food_entries(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<FoodEntry>>;

    /// Exercise sessions performed between `start` and `end`
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails
    fn activities(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<ActivityEntry>>;

    /// Weight measurements taken between `start` and `end`
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails
    fn weights(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<WeightEntry>>;

    /// Most recent weight measurement, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails
    fn latest_weight(&self) -> AppResult<Option<WeightEntry>>;

    /// Vital sign measurements taken between `start` and `end`
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails
    fn health_measurements(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<HealthMeasurement>>;

    /// Summed intake and exercise burn for one day, zero when nothing was logged
    ///
    /// # Errors
    ///
    /// Returns an error if either read fails
    fn daily_aggregate(&self, date: NaiveDate) -> AppResult<DailyAggregate> {
        let food = self.food_entries(date, date)?;
        let activities = self.activities(date, date)?;
        Ok(DailyAggregate::from_entries(&food, &activities))
    }
}

/// Serves the streak scan from a store, one day per request
pub struct StoreHistory<'a, S: ?Sized> {
    store: &'a S,
    today: NaiveDate,
}

impl<'a, S: NutritionStore + ?Sized> StoreHistory<'a, S> {
    /// History relative to `today`
    pub const fn new(store: &'a S, today: NaiveDate) -> Self {
        Self { store, today }
    }

    /// Calendar day `offset` days before today
    ///
    /// # Errors
    ///
    /// Returns an error if the date would precede the calendar's range
    pub fn date_for_offset(&self, offset: u32) -> AppResult<NaiveDate> {
        self.today
            .checked_sub_days(Days::new(u64::from(offset)))
            .ok_or_else(|| {
                AppError::invalid_input(format!("{offset} days before {} is out of range", self.today))
            })
    }
}

impl<S: NutritionStore + ?Sized> HistoricalAggregateProvider for StoreHistory<'_, S> {
    fn day_energy(&self, offset: u32) -> AppResult<DayEnergy> {
        let date = self.date_for_offset(offset)?;
        let energy = self.store.daily_aggregate(date)?.energy();
        trace!(%date, offset, calories = energy.calories, "loaded historical day");
        Ok(energy)
    }
}
