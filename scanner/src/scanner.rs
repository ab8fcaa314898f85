//! Line-based scan for unjustified `@ts-ignore` comments.
//!
//! The scan is purely textual: a line containing the marker substring is a
//! violation unless the line immediately before it carries a
//! `// Reason: ...` comment. No source syntax is parsed.

use log::{error, info, warn};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use crate::error::ScanError;
use crate::extensions::is_binary_path;
use crate::model::{ScanReport, UnreadableFile, Violation};

/// The suppression comment marker.
const SUPPRESSION_MARKER: &str = "@ts-ignore";

/// Matches a justification comment: `//`, optional whitespace, `Reason:`,
/// then anything. Checked against the trimmed previous line.
static JUSTIFICATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"//\s*Reason:.*").expect("justification regex is valid"));

/// Scan source text for unjustified suppression markers.
///
/// Iterates lines with 1-based numbering, keeping a two-line sliding window:
/// the previous line starts as the empty string and advances after every
/// line, whether or not it matched. A marker line is justified only by the
/// line immediately before it.
///
/// # Arguments
/// * `path` - Label recorded on each violation (not opened here)
/// * `source` - The text to scan
pub fn scan_source(path: &str, source: &str) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut previous_line = "";

    for (line_idx, line) in source.lines().enumerate() {
        let line_num = (line_idx + 1) as u32; // 1-indexed

        if line.trim().contains(SUPPRESSION_MARKER)
            && !JUSTIFICATION_RE.is_match(previous_line.trim())
        {
            violations.push(Violation {
                path: path.to_string(),
                line: line_num,
            });
        }

        previous_line = line;
    }

    violations
}

/// Scan a single file for unjustified suppression markers.
///
/// Paths with a known binary/media extension are refused before any I/O and
/// yield no violations. The file is read as UTF-8; decoding failures surface
/// as [`ScanError::Read`].
///
/// # Errors
///
/// * [`ScanError::NotFound`] - the path does not exist
/// * [`ScanError::Read`] - the file could not be read as UTF-8 text
pub fn scan_file(path: impl AsRef<Path>) -> Result<Vec<Violation>, ScanError> {
    let path = path.as_ref();
    if is_binary_path(path) {
        return Ok(Vec::new());
    }

    let label = path.to_string_lossy();
    let source =
        fs::read_to_string(path).map_err(|source| ScanError::from_io(&label, source))?;

    Ok(scan_source(&label, &source))
}

/// Scan an ordered list of files, containing per-file failures.
///
/// Files are processed strictly one at a time, in the order supplied.
/// Binary/media paths are skipped without being opened. A missing file is
/// logged as a warning, an unreadable one as an error; neither aborts the
/// scan and neither counts as a violation.
pub fn scan_files<I, P>(paths: I) -> ScanReport
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut report = ScanReport::default();

    for path in paths {
        let path = path.as_ref();
        if is_binary_path(path) {
            continue;
        }

        let label = path.to_string_lossy().to_string();
        info!("Checking file: {}", label);

        match scan_file(path) {
            Ok(violations) => {
                report.files_checked += 1;
                report.violations.extend(violations);
            }
            Err(ScanError::NotFound { path }) => {
                warn!("File not found: {}", path);
                report.missing.push(path);
            }
            Err(ScanError::Read { path, source }) => {
                error!("could not read {}: {}", path, source);
                report.unreadable.push(UnreadableFile {
                    path,
                    reason: source.to_string(),
                });
            }
        }
    }

    report
}
