//! Exit code constants for the letterpress CLI.
//!
//! - 0: Success
//! - 1: Locate failure (missing directory, no matching files, unreadable source)
//! - 2: Configuration failure (missing credential)
//! - 3: Upstream failure (generation API error)
//! - 4: Write failure (draft could not be written)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Locate failure: `.memory/` absent, no letter files, or source unreadable.
pub const LOCATE_FAILURE: i32 = 1;

/// Configuration failure: required credential missing from the environment.
pub const CONFIG_FAILURE: i32 = 2;

/// Upstream failure: the generation API call failed.
pub const UPSTREAM_FAILURE: i32 = 3;

/// Write failure: the draft file could not be written.
pub const WRITE_FAILURE: i32 = 4;
