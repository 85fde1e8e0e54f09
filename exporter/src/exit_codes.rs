//! Stable exit codes for the `export-resume` binary.

/// The resume was exported.
pub const OK: i32 = 0;
/// Any fatal condition: configuration, missing artifact or base directory, filesystem failure.
pub const FAILED: i32 = 1;
