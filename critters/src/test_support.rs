//! Test-only helpers for building household descriptions.

use crate::description::{CatEntry, HouseholdDescription, HumanEntry};

/// TOML form of [`sample_description`].
pub const SAMPLE_HOUSEHOLD_TOML: &str = r#"[[cats]]
name = "Felix"
human = "Alice"

[[cats]]
name = "Tom"

[[humans]]
name = "Alice"
cat = "Tom"

[[humans]]
name = "Bob"
"#;

pub fn cat_entry(name: &str, human: Option<&str>) -> CatEntry {
    CatEntry {
        name: name.to_string(),
        human: human.map(str::to_string),
    }
}

pub fn human_entry(name: &str, cat: Option<&str>) -> HumanEntry {
    HumanEntry {
        name: name.to_string(),
        cat: cat.map(str::to_string),
    }
}

/// Felix adopted Alice, Alice adopted Tom (not Felix), Bob has no cat.
pub fn sample_description() -> HouseholdDescription {
    HouseholdDescription {
        cats: vec![cat_entry("Felix", Some("Alice")), cat_entry("Tom", None)],
        humans: vec![human_entry("Alice", Some("Tom")), human_entry("Bob", None)],
    }
}

/// Scratch directory holding `household.toml` with [`SAMPLE_HOUSEHOLD_TOML`].
pub fn sample_household_dir() -> anyhow::Result<tempfile::TempDir> {
    let temp = tempfile::tempdir()?;
    std::fs::write(temp.path().join("household.toml"), SAMPLE_HOUSEHOLD_TOML)?;
    Ok(temp)
}
