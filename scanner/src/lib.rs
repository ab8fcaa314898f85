//! # tsguard scanner
//!
//! Library backing the `tsguard` CLI: scans changed files for `@ts-ignore`
//! suppression comments that lack an adjacent justification.
//!
//! A suppression is considered justified when the line immediately before it
//! is a comment of the form:
//!
//! ```text
//! // Reason: legacy API mismatch
//! // @ts-ignore
//! ```
//!
//! ## Modules
//!
//! - [`extensions`] - Binary/media extension filter
//! - [`model`] - Violation and report data model
//! - [`scanner`] - The line-based suppression scan
//! - [`error`] - Scan error taxonomy

pub mod error;
pub mod extensions;
pub mod model;
pub mod scanner;

// Re-export commonly used types
pub use error::ScanError;
pub use extensions::is_binary_path;
pub use model::{ScanReport, Violation};
pub use scanner::{scan_file, scan_files, scan_source};
