//! Deterministic, pure logic for cats, humans and points.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data structures and return deterministic outputs suitable for tests.

pub mod cat;
pub mod household;
pub mod invariants;
pub mod points;
