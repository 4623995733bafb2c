use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::household::{CatId, Household, HumanId};

/// Household members as declared in a description file.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HouseholdDescription {
    pub cats: Vec<CatEntry>,
    pub humans: Vec<HumanEntry>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub human: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HumanEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cat: Option<String>,
}

impl HouseholdDescription {
    /// Create every member, then apply adoptions (cats first, then humans).
    pub fn build(&self) -> Result<Household> {
        let mut household = Household::new();
        let cat_ids: Vec<CatId> = self
            .cats
            .iter()
            .map(|cat| household.add_cat(cat.name.as_str()))
            .collect();
        let human_ids: Vec<HumanId> = self
            .humans
            .iter()
            .map(|human| household.add_human(human.name.as_str()))
            .collect();

        for (entry, &cat) in self.cats.iter().zip(&cat_ids) {
            let Some(human_name) = &entry.human else {
                continue;
            };
            let human = household
                .find_human(human_name)
                .with_context(|| format!("cat '{}': unknown human '{}'", entry.name, human_name))?;
            household.adopt_human(cat, human)?;
        }

        for (entry, &human) in self.humans.iter().zip(&human_ids) {
            let Some(cat_name) = &entry.cat else {
                continue;
            };
            let cat = household
                .find_cat(cat_name)
                .with_context(|| format!("human '{}': unknown cat '{}'", entry.name, cat_name))?;
            household.adopt_cat(human, cat)?;
        }

        Ok(household)
    }
}
