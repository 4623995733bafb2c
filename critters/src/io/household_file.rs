//! Household description loading with invariant validation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing::debug;

use crate::core::invariants::validate_description;
use crate::description::HouseholdDescription;

/// Load and validate a household description from disk.
pub fn load_description(path: &Path) -> Result<HouseholdDescription> {
    debug!(path = %path.display(), "loading household description");
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read household {}", path.display()))?;
    let description: HouseholdDescription = toml::from_str(&contents)
        .with_context(|| format!("parse household {}", path.display()))?;
    validate_description_invariants(&description)?;
    debug!(
        cats = description.cats.len(),
        humans = description.humans.len(),
        "household description loaded"
    );
    Ok(description)
}

fn validate_description_invariants(description: &HouseholdDescription) -> Result<()> {
    let errors = validate_description(description);
    if errors.is_empty() {
        return Ok(());
    }
    Err(anyhow!(
        "household invariants failed: {}",
        errors.join("; ")
    ))
}
