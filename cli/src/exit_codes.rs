//! # Exit Codes
//!
//! Standard exit codes for the tsguard CLI.
//!
//! CI pipelines gate on these: the scan result maps to 0 or 1, and bad
//! invocations get their own code.

/// Successful execution: nothing to check, or scan completed clean
pub const EXIT_SUCCESS: i32 = 0;

/// At least one unjustified `@ts-ignore` was found
pub const EXIT_VIOLATIONS_FOUND: i32 = 1;

/// Invalid input (bad arguments, unusable invocation)
pub const EXIT_INVALID_INPUT: i32 = 2;
