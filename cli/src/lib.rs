//! # tsguard CLI Library
//!
//! This crate provides the command layer of `tsguard`, a CI helper that
//! fails when changed files contain `@ts-ignore` suppressions without an
//! adjacent `// Reason:` justification.
//!
//! ## Modules
//!
//! - [`commands`] - CLI command implementations
//! - [`errors`] - Error display helpers
//! - [`exit_codes`] - Standard exit codes

pub mod commands;
pub mod errors;
pub mod exit_codes;
