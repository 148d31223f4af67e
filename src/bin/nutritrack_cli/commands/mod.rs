// ABOUTME: Re-exports command modules for nutritrack-cli
// ABOUTME: Dashboard reports and profile checks

pub mod dashboard;
pub mod profile;

use anyhow::Result;
use serde::Serialize;

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
