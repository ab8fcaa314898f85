//! Data structures for scan results.

use serde::{Deserialize, Serialize};

/// An unjustified `@ts-ignore` found in a scanned file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Path of the file the marker was found in, as supplied by the caller.
    pub path: String,

    /// Line number of the marker (1-indexed).
    pub line: u32,
}

/// Aggregate result of scanning a list of files.
///
/// Per-file failures are contained here rather than aborting the run: a
/// missing or unreadable file is recorded and the scan moves on. Only
/// [`ScanReport::has_violations`] affects the caller's exit code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    /// Unjustified suppressions, in file order then line order.
    pub violations: Vec<Violation>,

    /// Supplied paths that did not exist.
    pub missing: Vec<String>,

    /// Paths that existed but could not be read, with the failure rendered
    /// as a string.
    pub unreadable: Vec<UnreadableFile>,

    /// Number of files actually opened and scanned.
    pub files_checked: usize,
}

/// A file that existed but could not be read as UTF-8 text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnreadableFile {
    /// Path of the file.
    pub path: String,
    /// Human-readable cause (I/O or decoding failure).
    pub reason: String,
}

impl ScanReport {
    /// Whether any unjustified suppression was found across all files.
    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violation_can_be_created() {
        let violation = Violation {
            path: "src/app.ts".to_string(),
            line: 42,
        };

        assert_eq!(violation.path, "src/app.ts");
        assert_eq!(violation.line, 42);
    }

    #[test]
    fn empty_report_has_no_violations() {
        let report = ScanReport::default();
        assert!(!report.has_violations());
        assert_eq!(report.files_checked, 0);
    }

    #[test]
    fn missing_files_do_not_count_as_violations() {
        let report = ScanReport {
            missing: vec!["gone.ts".to_string()],
            ..Default::default()
        };
        assert!(!report.has_violations());
    }

    #[test]
    fn report_with_violation_fails() {
        let report = ScanReport {
            violations: vec![Violation {
                path: "a.ts".to_string(),
                line: 1,
            }],
            ..Default::default()
        };
        assert!(report.has_violations());
    }

    #[test]
    fn violation_can_be_serialized() {
        let violation = Violation {
            path: "src/app.ts".to_string(),
            line: 7,
        };

        let json = serde_json::to_string(&violation).unwrap();
        assert!(json.contains("src/app.ts"));
        assert!(json.contains("7"));
    }

    #[test]
    fn report_can_be_deserialized() {
        let json = r#"{
            "violations": [{"path": "a.ts", "line": 3}],
            "missing": ["gone.ts"],
            "unreadable": [],
            "files_checked": 2
        }"#;

        let report: ScanReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].line, 3);
        assert_eq!(report.missing, vec!["gone.ts"]);
        assert_eq!(report.files_checked, 2);
    }
}
