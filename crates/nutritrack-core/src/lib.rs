// ABOUTME: Core types and constants for the NutriTrack nutrition engine
// ABOUTME: Foundation crate with error handling, domain models, and engine constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriTrack Contributors

#![deny(unsafe_code)]

//! # NutriTrack Core
//!
//! Foundation crate providing shared types and constants for the NutriTrack
//! nutrition engine. It changes rarely so the engine and collaborator crates can
//! compile against a stable base.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Immutable engine constants (activity multipliers, macro split, points)
//! - **models**: Profile, daily aggregates, and the logged record types

/// Unified error handling system with standard error codes
pub mod errors;

/// Engine constants organized by domain
pub mod constants;

/// Core data models (Profile, `DailyAggregate`, food/activity/weight/health records)
pub mod models;
