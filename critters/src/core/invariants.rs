//! Semantic checks for household descriptions that TOML parsing cannot express.

use std::collections::HashSet;

use crate::description::HouseholdDescription;

/// Check description invariants:
/// - No duplicate cat names
/// - No duplicate human names
/// - Every `human` / `cat` reference names a declared member
///
/// Messages follow declaration order.
pub fn validate_description(description: &HouseholdDescription) -> Vec<String> {
    let mut errors = Vec::new();

    let mut cat_names = HashSet::new();
    for cat in &description.cats {
        if !cat_names.insert(cat.name.as_str()) {
            errors.push(format!("duplicate cat name '{}'", cat.name));
        }
    }

    let mut human_names = HashSet::new();
    for human in &description.humans {
        if !human_names.insert(human.name.as_str()) {
            errors.push(format!("duplicate human name '{}'", human.name));
        }
    }

    for cat in &description.cats {
        let dangling = cat
            .human
            .as_deref()
            .filter(|human| !human_names.contains(human));
        if let Some(human) = dangling {
            errors.push(format!("cat '{}': unknown human '{}'", cat.name, human));
        }
    }

    for human in &description.humans {
        let dangling = human
            .cat
            .as_deref()
            .filter(|cat| !cat_names.contains(cat));
        if let Some(cat) = dangling {
            errors.push(format!("human '{}': unknown cat '{}'", human.name, cat));
        }
    }

    errors
}
