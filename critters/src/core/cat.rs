//! A named cat whose hunger counter never drops below zero.

use std::fmt;

use tracing::debug;

/// Hunger removed per mouse eaten.
pub const MOUSE_HUNGER: u64 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cat {
    pub name: String,
    hunger: u64,
}

impl Cat {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hunger: 0,
        }
    }

    pub fn hunger(&self) -> u64 {
        self.hunger
    }

    /// Eat `count` mice, lowering hunger by `MOUSE_HUNGER` each, clamped at zero.
    pub fn eat(&mut self, count: u32) {
        let before = self.hunger;
        let relief = u64::from(count).saturating_mul(MOUSE_HUNGER);
        self.hunger = self.hunger.saturating_sub(relief);
        debug!(name = %self.name, count, before, after = self.hunger, "cat ate");
    }

    pub fn eat_one(&mut self) {
        self.eat(1);
    }

    /// Jump `height` units, raising hunger by the same amount.
    ///
    /// Non-positive heights leave hunger untouched.
    pub fn jump(&mut self, height: i64) {
        if height <= 0 {
            debug!(name = %self.name, height, "ignoring non-positive jump");
            return;
        }
        let before = self.hunger;
        self.hunger = self.hunger.saturating_add(height.unsigned_abs());
        debug!(name = %self.name, height, before, after = self.hunger, "cat jumped");
    }

    pub fn jump_once(&mut self) {
        self.jump(1);
    }

    pub fn say(
        &self,
        a: impl fmt::Display,
        b: impl fmt::Display,
        c: impl fmt::Display,
        d: impl fmt::Display,
    ) -> String {
        format!("{} says {}, {}, {} and {}.", self.name, a, b, c, d)
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Cat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cat -- name: {}, hunger: {}", self.name, self.hunger)
    }
}
