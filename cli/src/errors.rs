//! # Error Display
//!
//! User-friendly error display for the tsguard CLI. This styles
//! command-level failures; the scan's own result markers are printed
//! verbatim by the check command.

use colored::Colorize;

/// Display a generic error
///
/// # Arguments
///
/// * `message` - The error message to display
pub fn display_error(message: &str) {
    eprintln!("{} Error: {}", "✗".red().bold(), message);
}
