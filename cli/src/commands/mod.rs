//! # CLI Command Implementations
//!
//! This module contains the implementation of all CLI commands.
//!
//! ## Available Commands
//!
//! - [`check`] - Scan changed files for unjustified `@ts-ignore` comments

pub mod check;
