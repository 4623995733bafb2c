//! Stable exit codes for critters CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed due to invalid arguments, config, or household file.
pub const INVALID: i32 = 1;
