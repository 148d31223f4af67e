// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriTrack Contributors
// ABOUTME: Profile check command for nutritrack-cli
// ABOUTME: Runs the snapshot's profile, as written, through the same checks as profile updates

use super::print_json;
use anyhow::Result;
use nutritrack::errors::AppError;
use nutritrack::storage::InMemoryStore;
use serde_json::json;
use std::path::Path;
use tracing::info;

pub fn validate(data_path: &Path) -> Result<()> {
    let input = InMemoryStore::load_profile_input(data_path)?
        .ok_or_else(AppError::profile_required)?;
    let validated = input.validate()?;
    info!(age = validated.age, sex = %validated.sex.as_str(), "profile is valid");
    print_json(&json!({ "valid": true, "profile": validated }))
}
