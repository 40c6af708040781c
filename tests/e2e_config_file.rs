/// End-to-end tests for config file loading and CLI option merging.
///
/// These tests exercise the full flow from config file on disk through CLI invocation
/// to correct output, using `assert_cmd` and `tempfile` for isolated test environments.
use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

/// Write a config file at the specified path.
fn write_config(path: &std::path::Path, content: &str) {
    fs::write(path, content).unwrap();
}

fn lab_catalog() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/lab-catalog.json")
}

/// Config that points at the lab catalog, followed by `body`
fn config_with_catalog(body: &str) -> String {
    format!("catalog: {}\n{}", lab_catalog().display(), body)
}

/// Model column of each CSV data row
fn csv_models(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .skip(1)
        .filter_map(|line| line.split(',').nth(1))
        .map(|cell| cell.trim_matches('"').to_string())
        .collect()
}

// ============================================================================
// Config File Auto-Discovery Tests
// ============================================================================

mod auto_discovery_tests {
    use super::*;

    #[test]
    fn test_auto_discovery_applies_filters_and_format() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("fw-compare.config.yml"),
            &config_with_catalog(
                r#"
format: csv
tiers:
  - soho
  - smb
"#,
            ),
        );

        let output = cargo_bin_cmd!("fw-compare")
            .current_dir(dir.path())
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert_eq!(csv_models(&stdout), vec!["Alpha", "Bravo"]);
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Auto-discovered config file"));
    }

    #[test]
    fn test_auto_discovery_applies_sort_and_overrides() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("fw-compare.config.yml"),
            &config_with_catalog(
                r#"
format: csv
sort:
  key: maxSessions
  direction: asc
overrides:
  b:
    maxSessions: 100
"#,
            ),
        );

        let output = cargo_bin_cmd!("fw-compare")
            .current_dir(dir.path())
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert_eq!(csv_models(&stdout), vec!["Bravo", "Alpha", "Charlie"]);
        assert!(stdout.contains("\"100\""));
    }

    #[test]
    fn test_no_config_file_runs_normally() {
        let dir = TempDir::new().unwrap();

        let output = cargo_bin_cmd!("fw-compare")
            .current_dir(dir.path())
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        // Default format is the table over the built-in catalog
        assert!(stdout.contains("Showing 59 of 59 appliances"));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(!stderr.contains("Auto-discovered config file"));
    }
}

// ============================================================================
// Explicit --config Tests
// ============================================================================

mod explicit_config_tests {
    use super::*;

    #[test]
    fn test_explicit_config_path() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("custom.yml");
        write_config(
            &config_path,
            &config_with_catalog(
                r#"
format: markdown
search: charlie
"#,
            ),
        );

        let output = cargo_bin_cmd!("fw-compare")
            .arg("--config")
            .arg(&config_path)
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("Showing 1 of 3 appliances."));
        assert!(stdout.contains("Charlie"));
        assert!(!stdout.contains("Alpha"));
    }

    #[test]
    fn test_explicit_config_missing_file() {
        cargo_bin_cmd!("fw-compare")
            .args(["-c", "/nonexistent/fw-compare.config.yml"])
            .assert()
            .code(3);
    }

    #[test]
    fn test_invalid_yaml_fails() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("broken.yml");
        write_config(&config_path, "vendors: [unclosed\n");

        let output = cargo_bin_cmd!("fw-compare")
            .arg("--config")
            .arg(&config_path)
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(3));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_sort_direction_fails() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        write_config(
            &config_path,
            r#"
sort:
  key: model
  direction: sideways
"#,
        );

        let output = cargo_bin_cmd!("fw-compare")
            .arg("--config")
            .arg(&config_path)
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(3));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Invalid config: sort.direction"));
    }

    #[test]
    fn test_invalid_format_in_config_fails() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        write_config(&config_path, "format: json\n");

        let output = cargo_bin_cmd!("fw-compare")
            .arg("--config")
            .arg(&config_path)
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(3));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Invalid config: format"));
    }

    #[test]
    fn test_unknown_field_warns() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        write_config(
            &config_path,
            &config_with_catalog("colour_scheme: dark\n"),
        );

        let output = cargo_bin_cmd!("fw-compare")
            .arg("--config")
            .arg(&config_path)
            .output()
            .unwrap();

        assert!(output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Unknown config field 'colour_scheme'"));
    }
}

// ============================================================================
// CLI Override Tests
// ============================================================================

mod cli_override_tests {
    use super::*;

    #[test]
    fn test_cli_format_and_filters_override_config() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("fw-compare.config.yml"),
            &config_with_catalog(
                r#"
format: markdown
vendors: [v1]
"#,
            ),
        );

        let output = cargo_bin_cmd!("fw-compare")
            .current_dir(dir.path())
            .args(["-f", "csv", "-v", "v2"])
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert_eq!(csv_models(&stdout), vec!["Charlie"]);
    }

    #[test]
    fn test_cli_ascending_overrides_config_direction() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("fw-compare.config.yml"),
            &config_with_catalog(
                r#"
format: csv
sort:
  key: model
  direction: desc
"#,
            ),
        );

        let output = cargo_bin_cmd!("fw-compare")
            .current_dir(dir.path())
            .arg("--ascending")
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert_eq!(csv_models(&stdout), vec!["Alpha", "Bravo", "Charlie"]);
    }

    #[test]
    fn test_cli_override_applies_after_config_override() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("fw-compare.config.yml"),
            &config_with_catalog(
                r#"
format: csv
overrides:
  a:
    fwThroughput: 60000
"#,
            ),
        );

        let output = cargo_bin_cmd!("fw-compare")
            .current_dir(dir.path())
            .args(["-b", "a:fwThroughput=1000"])
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert_eq!(csv_models(&stdout), vec!["Charlie", "Alpha", "Bravo"]);
        assert!(stdout.contains("\"1000\""));
        assert!(!stdout.contains("\"60000\""));
    }
}
