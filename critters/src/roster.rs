//! Rendering helpers for `critters household`.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::core::household::Household;
use crate::io::household_file::load_description;

/// Render every cat, then every human, one line each in insertion order.
pub fn render_roster(household: &Household) -> Vec<String> {
    household.roster()
}

/// Load a description file, build the household and render it.
pub fn roster_from_path(path: &Path) -> Result<Vec<String>> {
    let description = load_description(path)?;
    let household = description
        .build()
        .with_context(|| format!("build household from {}", path.display()))?;
    let lines = render_roster(&household);
    info!(path = %path.display(), members = lines.len(), "rendered household");
    Ok(lines)
}
