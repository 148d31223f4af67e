// ABOUTME: Library entry point for the NutriTrack collaborator layer
// ABOUTME: Storage, configuration, logging and the dashboard service around the scoring engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriTrack Contributors

#![deny(unsafe_code)]

//! # NutriTrack
//!
//! Nutritional goals, daily adherence scoring and calorie streaks.
//!
//! The computations live in `nutritrack-intelligence` and take plain values. This
//! crate wires them to data:
//!
//! - **storage**: the `NutritionStore` interface, an in-memory store and its JSON snapshot
//! - **services**: the dashboard service fetching profile and history for the engine
//! - **config** / **logging**: environment-driven settings and tracing setup
//!
//! ```rust,no_run
//! use nutritrack::services::DashboardService;
//! use nutritrack::storage::InMemoryStore;
//! use std::path::Path;
//!
//! # fn main() -> nutritrack::errors::AppResult<()> {
//! let store = InMemoryStore::load(Path::new("./data/nutritrack.json"))?;
//! let service = DashboardService::new(store);
//! let status = service.gamification_status(chrono::Local::now().date_naive())?;
//! println!("streak: {} days", status.streak_days);
//! # Ok(())
//! # }
//! ```

/// Environment-driven configuration
pub mod config;

/// Tracing subscriber setup
pub mod logging;

/// Services driving the engine from a store
pub mod services;

/// Storage interface and the in-memory store
pub mod storage;

pub use nutritrack_core::{constants, errors, models};
pub use nutritrack_intelligence as intelligence;
