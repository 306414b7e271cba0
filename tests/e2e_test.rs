/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const DEPS: &str = "tests/fixtures/deps.json";
const OVERRIDES: &str = "tests/fixtures/overrides.json";

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: Success - every direct dependency is allowed
    #[test]
    fn test_exit_code_success() {
        cargo_bin_cmd!("licence-detector")
            .args(["-i", DEPS])
            .assert()
            .code(0);
    }

    /// Exit code 0: Success - indirect GPL dependency corrected by an override
    #[test]
    fn test_exit_code_success_with_overrides() {
        cargo_bin_cmd!("licence-detector")
            .args(["-i", DEPS, "--overrides", OVERRIDES, "--include-indirect"])
            .assert()
            .code(0);
    }

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("licence-detector").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("licence-detector")
            .arg("--version")
            .assert()
            .code(0);
    }

    /// Exit code 1: Policy violation - GPL-3.0 is not in the default rules
    #[test]
    fn test_exit_code_policy_violation() {
        cargo_bin_cmd!("licence-detector")
            .args(["-i", DEPS, "--include-indirect"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("github.com/gorhill/cronexpr"))
            .stderr(predicate::str::contains("GPL-3.0"));
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("licence-detector")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("licence-detector")
            .args(["-i", DEPS, "-f", "cyclonedx"])
            .assert()
            .code(2);
    }

    /// Exit code 3: Application error - non-existent module graph
    #[test]
    fn test_exit_code_application_error_nonexistent_input() {
        cargo_bin_cmd!("licence-detector")
            .args(["-i", "/nonexistent/path/deps.json"])
            .assert()
            .code(3);
    }

    /// Exit code 3: Application error - override licence file cannot be read
    #[test]
    fn test_exit_code_application_error_unreadable_override() {
        cargo_bin_cmd!("licence-detector")
            .args([
                "-i",
                DEPS,
                "--overrides",
                "tests/fixtures/overrides-invalid-licence-file.json",
                "--include-indirect",
            ])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("github.com/davecgh/go-spew"))
            .stderr(predicate::str::contains("path/to/nowhere"));
    }

    /// Exit code 3: Application error - malformed overrides file
    #[test]
    fn test_exit_code_application_error_malformed_overrides() {
        cargo_bin_cmd!("licence-detector")
            .args(["-i", DEPS, "--overrides", "tests/fixtures/overrides-malformed.json"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("line 2"));
    }

    /// Exit code 3: Application error - module graph is not JSON
    #[test]
    fn test_exit_code_application_error_invalid_module_graph() {
        cargo_bin_cmd!("licence-detector")
            .args(["-i", "Cargo.toml"])
            .assert()
            .code(3);
    }
}

#[test]
fn test_e2e_markdown_is_default_format() {
    cargo_bin_cmd!("licence-detector")
        .args(["-i", DEPS])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Third-Party Dependency Licences"))
        .stdout(predicate::str::contains("## Direct Dependencies"))
        .stdout(predicate::str::contains(
            "[go.uber.org/zap](https://go.uber.org/zap)",
        ))
        .stdout(predicate::str::contains("github.com/gorhill/cronexpr").not());
}

#[test]
fn test_e2e_json_format() {
    let output = cargo_bin_cmd!("licence-detector")
        .args([
            "-i",
            DEPS,
            "--overrides",
            OVERRIDES,
            "--include-indirect",
            "-f",
            "json",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    let direct = report["direct"].as_array().unwrap();
    let indirect = report["indirect"].as_array().unwrap();
    assert_eq!(direct.len(), 3);
    assert_eq!(indirect.len(), 3);
    assert_eq!(direct[0]["name"], "github.com/ekzhu/minhash-lsh");
    assert_eq!(indirect[0]["name"], "github.com/davecgh/go-spew");
    assert_eq!(indirect[0]["licenceType"], "ISC");
    assert_eq!(indirect[1]["licenceType"], "Apache-2.0");
    assert_eq!(indirect[2]["url"], "https://github.com/russross/blackfriday");
}

#[test]
fn test_e2e_notice_format() {
    cargo_bin_cmd!("licence-detector")
        .args(["-i", DEPS, "-f", "notice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Module  : k8s.io/apimachinery"))
        .stdout(predicate::str::contains("Licence : Apache-2.0"))
        .stdout(predicate::str::contains(
            "Permission is hereby granted, free of charge",
        ));
}

#[test]
fn test_e2e_custom_rules_file() {
    cargo_bin_cmd!("licence-detector")
        .args([
            "-i",
            DEPS,
            "-r",
            "tests/fixtures/rules.json",
            "--include-indirect",
            "-f",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"licenceType\": \"GPL-3.0\""));
}

#[test]
fn test_e2e_strict_rules_file() {
    cargo_bin_cmd!("licence-detector")
        .args(["-i", DEPS, "-r", "tests/fixtures/rules-strict.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("go.uber.org/zap"));
}

#[test]
fn test_e2e_reads_module_graph_from_stdin() {
    let graph = fs::read_to_string(DEPS).unwrap();

    cargo_bin_cmd!("licence-detector")
        .args(["-f", "json"])
        .write_stdin(graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("k8s.io/apimachinery"));
}

#[test]
fn test_e2e_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("licences.md");

    cargo_bin_cmd!("licence-detector")
        .args(["-i", DEPS, "-o"])
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Report written"));

    let content = fs::read_to_string(&output_path).unwrap();
    assert!(content.contains("## Direct Dependencies"));
    assert!(content.contains("*No indirect dependencies*"));
}

#[test]
fn test_e2e_output_file_missing_parent_directory() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("missing").join("licences.md");

    cargo_bin_cmd!("licence-detector")
        .args(["-i", DEPS, "-o"])
        .arg(&output_path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Parent directory does not exist"));

    assert!(!output_path.exists());
}

#[test]
fn test_e2e_progress_goes_to_stderr() {
    cargo_bin_cmd!("licence-detector")
        .args(["-i", DEPS, "-f", "json"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Detecting licences for 3 module(s)"))
        .stderr(predicate::str::contains(
            "Validated licences of 3 direct and 0 indirect dependencies",
        ))
        .stdout(predicate::str::contains("Detecting").not());
}
