//! I/O helpers for critters commands.

pub mod config;
pub mod household_file;
