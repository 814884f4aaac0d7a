//! Exit codes for the extpack binary.
//!
//! Skipped optional inputs still exit [`SUCCESS`]; only a hard failure
//! (unwritable archive, unrecoverable I/O) exits non-zero.

pub const SUCCESS: i32 = 0;
pub const FATAL_ERROR: i32 = 1;
