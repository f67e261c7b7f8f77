//! Stable exit codes for combiner CLI commands.

/// Command succeeded. Individual unreadable inputs do not change this.
pub const OK: i32 = 0;
/// Invalid config or arguments, unwritable output, or any other error.
pub const INVALID: i32 = 1;
