//! Cats and humans that can adopt one another.
//!
//! Both kinds live in a [`Household`] arena and refer to each other by id.
//! An adoption only sets the adopter's side: `adopt_human(cat, human)` leaves
//! `human.cat` untouched, so the relation may be one-sided or cyclic.

use anyhow::{Result, anyhow};
use tracing::debug;

/// Label rendered when no adoption has happened.
pub const NONE_LABEL: &str = "none";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CatId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HumanId(usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HouseCat {
    pub name: String,
    pub human: Option<HumanId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Human {
    pub name: String,
    pub cat: Option<CatId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Household {
    cats: Vec<HouseCat>,
    humans: Vec<Human>,
}

impl Household {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_cat(&mut self, name: impl Into<String>) -> CatId {
        let id = CatId(self.cats.len());
        self.cats.push(HouseCat {
            name: name.into(),
            human: None,
        });
        id
    }

    pub fn add_human(&mut self, name: impl Into<String>) -> HumanId {
        let id = HumanId(self.humans.len());
        self.humans.push(Human {
            name: name.into(),
            cat: None,
        });
        id
    }

    pub fn cat(&self, id: CatId) -> Result<&HouseCat> {
        self.cats
            .get(id.0)
            .ok_or_else(|| anyhow!("unknown cat id {}", id.0))
    }

    pub fn human(&self, id: HumanId) -> Result<&Human> {
        self.humans
            .get(id.0)
            .ok_or_else(|| anyhow!("unknown human id {}", id.0))
    }

    /// Point `cat` at `human`, replacing any earlier human.
    pub fn adopt_human(&mut self, cat: CatId, human: HumanId) -> Result<()> {
        self.human(human)?;
        let entry = self
            .cats
            .get_mut(cat.0)
            .ok_or_else(|| anyhow!("unknown cat id {}", cat.0))?;
        debug!(cat = %entry.name, previous = ?entry.human, human = human.0, "cat adopted human");
        entry.human = Some(human);
        Ok(())
    }

    /// Point `human` at `cat`, replacing any earlier cat.
    pub fn adopt_cat(&mut self, human: HumanId, cat: CatId) -> Result<()> {
        self.cat(cat)?;
        let entry = self
            .humans
            .get_mut(human.0)
            .ok_or_else(|| anyhow!("unknown human id {}", human.0))?;
        debug!(human = %entry.name, previous = ?entry.cat, cat = cat.0, "human adopted cat");
        entry.cat = Some(cat);
        Ok(())
    }

    pub fn render_cat(&self, id: CatId) -> Result<String> {
        Ok(self.cat_line(self.cat(id)?))
    }

    pub fn render_human(&self, id: HumanId) -> Result<String> {
        Ok(self.human_line(self.human(id)?))
    }

    /// Every cat, then every human, one rendered line each in insertion order.
    pub fn roster(&self) -> Vec<String> {
        self.cats
            .iter()
            .map(|cat| self.cat_line(cat))
            .chain(self.humans.iter().map(|human| self.human_line(human)))
            .collect()
    }

    // Stored ids were validated by `adopt_*`.
    fn cat_line(&self, cat: &HouseCat) -> String {
        let human = cat
            .human
            .and_then(|id| self.humans.get(id.0))
            .map_or(NONE_LABEL, |human| human.name.as_str());
        format!("Cat -- name: {}, human: {}", cat.name, human)
    }

    fn human_line(&self, human: &Human) -> String {
        let cat = human
            .cat
            .and_then(|id| self.cats.get(id.0))
            .map_or(NONE_LABEL, |cat| cat.name.as_str());
        format!("Human -- name: {}, cat: {}", human.name, cat)
    }

    pub fn cats(&self) -> impl Iterator<Item = (CatId, &HouseCat)> {
        self.cats
            .iter()
            .enumerate()
            .map(|(index, cat)| (CatId(index), cat))
    }

    pub fn humans(&self) -> impl Iterator<Item = (HumanId, &Human)> {
        self.humans
            .iter()
            .enumerate()
            .map(|(index, human)| (HumanId(index), human))
    }

    pub fn find_cat(&self, name: &str) -> Option<CatId> {
        self.cats().find(|(_, cat)| cat.name == name).map(|(id, _)| id)
    }

    pub fn find_human(&self, name: &str) -> Option<HumanId> {
        self.humans()
            .find(|(_, human)| human.name == name)
            .map(|(id, _)| id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_entities_render_placeholder() {
        let mut household = Household::new();
        let felix = household.add_cat("Felix");
        let alice = household.add_human("Alice");

        assert_eq!(
            household.render_cat(felix).expect("render"),
            "Cat -- name: Felix, human: none"
        );
        assert_eq!(
            household.render_human(alice).expect("render"),
            "Human -- name: Alice, cat: none"
        );
    }

    #[test]
    fn adoption_is_one_sided() {
        let mut household = Household::new();
        let felix = household.add_cat("Felix");
        let alice = household.add_human("Alice");

        household.adopt_human(felix, alice).expect("adopt");

        assert_eq!(
            household.render_cat(felix).expect("render"),
            "Cat -- name: Felix, human: Alice"
        );
        assert_eq!(household.human(alice).expect("human").cat, None);
        assert_eq!(
            household.render_human(alice).expect("render"),
            "Human -- name: Alice, cat: none"
        );
    }

    #[test]
    fn adoption_overwrites_previous_reference() {
        let mut household = Household::new();
        let felix = household.add_cat("Felix");
        let alice = household.add_human("Alice");
        let bob = household.add_human("Bob");

        household.adopt_human(felix, alice).expect("adopt alice");
        household.adopt_human(felix, bob).expect("adopt bob");

        assert_eq!(household.cat(felix).expect("cat").human, Some(bob));
        assert_eq!(
            household.render_cat(felix).expect("render"),
            "Cat -- name: Felix, human: Bob"
        );
    }

    #[test]
    fn both_sides_may_point_at_each_other() {
        let mut household = Household::new();
        let felix = household.add_cat("Felix");
        let alice = household.add_human("Alice");

        household.adopt_human(felix, alice).expect("adopt human");
        household.adopt_cat(alice, felix).expect("adopt cat");

        assert_eq!(
            household.render_human(alice).expect("render"),
            "Human -- name: Alice, cat: Felix"
        );
        assert_eq!(
            household.render_cat(felix).expect("render"),
            "Cat -- name: Felix, human: Alice"
        );
    }

    #[test]
    fn foreign_ids_are_rejected() {
        let mut other = Household::new();
        other.add_cat("Stray");
        let stray = other.add_cat("Stray two");

        let mut household = Household::new();
        let alice = household.add_human("Alice");

        let err = household.adopt_cat(alice, stray).expect_err("foreign id");
        assert!(err.to_string().contains("unknown cat id 1"));
        assert!(household.render_cat(stray).is_err());
        assert_eq!(household.human(alice).expect("human").cat, None);
    }

    #[test]
    fn roster_lists_cats_then_humans() {
        let mut household = Household::new();
        let felix = household.add_cat("Felix");
        household.add_cat("Tom");
        let alice = household.add_human("Alice");
        household.adopt_cat(alice, felix).expect("adopt");

        assert_eq!(
            household.roster(),
            vec![
                "Cat -- name: Felix, human: none",
                "Cat -- name: Tom, human: none",
                "Human -- name: Alice, cat: Felix",
            ]
        );
    }

    #[test]
    fn find_returns_first_match_in_insertion_order() {
        let mut household = Household::new();
        let first = household.add_cat("Felix");
        household.add_cat("Felix");
        assert_eq!(household.find_cat("Felix"), Some(first));
        assert_eq!(household.find_human("Nobody"), None);
    }
}
