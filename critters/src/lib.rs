//! Cats, humans and coordinate pairs.
//!
//! The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (the hungry [`core::cat::Cat`],
//!   the cat/human [`core::household::Household`], point arithmetic).
//!   No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (config and household files).
//!
//! [`roster`] coordinates the two to implement `critters household`.

pub mod core;
pub mod description;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod roster;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
