//! # Check Command
//!
//! Scans a list of changed files for `@ts-ignore` comments that are not
//! justified by a `// Reason:` comment on the line immediately before.
//!
//! ## Behavior
//!
//! The supplied list is first filtered to `.ts`/`.tsx` paths purely to decide
//! whether there is anything worth checking; if that sub-list is empty the
//! command exits 0 without scanning. When the scan does run it covers the
//! FULL supplied list (a changed `.md` file is scanned too), excluding only
//! known binary/media extensions. The two filters are deliberately
//! independent.
//!
//! ## Usage
//!
//! ```bash
//! tsguard check --files src/app.ts src/util.ts
//! tsguard check --files $CHANGED_FILES --json
//! ```

use anyhow::Result;
use log::{error, info, warn};

use crate::exit_codes::*;
use tsguard_scanner::{is_binary_path, scan_file, scan_files, ScanError};

/// Arguments for the check command
pub struct CheckArgs {
    /// Changed files to check
    pub files: Vec<String>,
    /// Output the scan report as JSON instead of text markers
    pub json: bool,
}

/// Execute the check command
///
/// # Arguments
///
/// * `args` - Check command arguments
///
/// # Returns
///
/// * `Ok(EXIT_SUCCESS)` - No TypeScript files supplied, or scan came back clean
/// * `Ok(EXIT_VIOLATIONS_FOUND)` - At least one unjustified suppression
pub fn execute(args: CheckArgs) -> Result<i32> {
    let ts_files: Vec<&String> = args
        .files
        .iter()
        .filter(|f| f.ends_with(".ts") || f.ends_with(".tsx"))
        .collect();

    if ts_files.is_empty() {
        info!("No TypeScript files to check.");
        return Ok(EXIT_SUCCESS);
    }

    if args.json {
        let report = scan_files(&args.files);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(if report.has_violations() {
            EXIT_VIOLATIONS_FOUND
        } else {
            EXIT_SUCCESS
        });
    }

    let mut found = false;

    for file in &args.files {
        if is_binary_path(file) {
            continue;
        }

        info!("Checking file: {}", file);
        match scan_file(file) {
            Ok(violations) => {
                for violation in violations {
                    println!(
                        "❌ Error: '@ts-ignore' found in {} at line {}",
                        violation.path, violation.line
                    );
                    found = true;
                }
            }
            Err(ScanError::NotFound { path }) => {
                warn!("File not found: {}", path);
            }
            Err(err) => {
                error!("{}", err);
            }
        }
    }

    if !found {
        println!("✅ No '@ts-ignore' comments found in the files.");
    }

    Ok(if found {
        EXIT_VIOLATIONS_FOUND
    } else {
        EXIT_SUCCESS
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn create_test_file(dir: &Path, name: &str, contents: &str) -> String {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path.to_string_lossy().to_string()
    }

    fn run(files: Vec<String>) -> i32 {
        execute(CheckArgs { files, json: false }).unwrap()
    }

    #[test]
    fn test_no_typescript_files_exits_clean_without_scanning() {
        let temp_dir = TempDir::new().unwrap();
        // Marker in a .md file, but no .ts/.tsx in the list: never scanned
        let md = create_test_file(temp_dir.path(), "notes.md", "// @ts-ignore");

        assert_eq!(run(vec![md]), EXIT_SUCCESS);
    }

    #[test]
    fn test_justified_suppression_passes() {
        let temp_dir = TempDir::new().unwrap();
        let ts = create_test_file(
            temp_dir.path(),
            "app.ts",
            "// Reason: legacy API mismatch\n// @ts-ignore\nconst x = 1;\n",
        );

        assert_eq!(run(vec![ts]), EXIT_SUCCESS);
    }

    #[test]
    fn test_unjustified_suppression_fails() {
        let temp_dir = TempDir::new().unwrap();
        let ts = create_test_file(temp_dir.path(), "app.ts", "// @ts-ignore\nconst x = 1;\n");

        assert_eq!(run(vec![ts]), EXIT_VIOLATIONS_FOUND);
    }

    #[test]
    fn test_binary_file_contents_are_ignored() {
        let temp_dir = TempDir::new().unwrap();
        let png = create_test_file(temp_dir.path(), "image.png", "// @ts-ignore");
        let ts = create_test_file(temp_dir.path(), "clean.ts", "const x = 1;\n");

        assert_eq!(run(vec![png, ts]), EXIT_SUCCESS);
    }

    #[test]
    fn test_missing_file_is_not_a_failure() {
        let temp_dir = TempDir::new().unwrap();
        let gone = temp_dir.path().join("gone.ts").to_string_lossy().to_string();
        let ts = create_test_file(temp_dir.path(), "clean.ts", "const x = 1;\n");

        assert_eq!(run(vec![gone, ts]), EXIT_SUCCESS);
    }

    #[test]
    fn test_non_typescript_files_are_scanned_when_ts_files_present() {
        // The .ts pre-filter only gates the early exit; the scan covers the
        // full list, so the .md violation fails the run.
        let temp_dir = TempDir::new().unwrap();
        let md = create_test_file(temp_dir.path(), "notes.md", "// @ts-ignore");
        let ts = create_test_file(temp_dir.path(), "clean.ts", "const x = 1;\n");

        assert_eq!(run(vec![md, ts]), EXIT_VIOLATIONS_FOUND);
    }

    #[test]
    fn test_tsx_counts_as_typescript() {
        let temp_dir = TempDir::new().unwrap();
        let tsx = create_test_file(
            temp_dir.path(),
            "view.tsx",
            "// @ts-ignore\nexport const V = () => null;\n",
        );

        assert_eq!(run(vec![tsx]), EXIT_VIOLATIONS_FOUND);
    }

    #[test]
    fn test_json_output_reports_violations() {
        let temp_dir = TempDir::new().unwrap();
        let ts = create_test_file(temp_dir.path(), "app.ts", "// @ts-ignore\nlet x;\n");

        let code = execute(CheckArgs {
            files: vec![ts],
            json: true,
        })
        .unwrap();

        assert_eq!(code, EXIT_VIOLATIONS_FOUND);
    }

    #[test]
    fn test_json_output_clean_run() {
        let temp_dir = TempDir::new().unwrap();
        let ts = create_test_file(temp_dir.path(), "app.ts", "const x = 1;\n");

        let code = execute(CheckArgs {
            files: vec![ts],
            json: true,
        })
        .unwrap();

        assert_eq!(code, EXIT_SUCCESS);
    }
}
