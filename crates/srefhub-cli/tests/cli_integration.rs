//! CLI Integration Tests
//!
//! These tests verify the CLI commands work end-to-end without a backend:
//! offline commands, session persistence and error reporting when the
//! server cannot be reached.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

/// Create a CLI command with a temporary data directory and an API URL
/// nothing listens on
fn cli_cmd(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("srefhub").expect("Failed to find srefhub binary");
    cmd.arg("--data-dir")
        .arg(data_dir.path())
        .arg("--api-url")
        .arg("http://127.0.0.1:9/api")
        .env_remove("SREFHUB_API_URL")
        .env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Span Command Tests
// ============================================================================

#[test]
fn test_span_portrait_image() {
    let data_dir = TempDir::new().unwrap();

    // 1024x1536 at 280px wide renders 420px tall: ceil(420 / 8) = 53 rows
    cli_cmd(&data_dir)
        .args(["span", "--width", "1024", "--height", "1536", "--column", "280"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rendered height: 420px"))
        .stdout(predicate::str::contains("Span: 53 rows"))
        .stdout(predicate::str::contains("grid-row-end: span 53;"));
}

#[test]
fn test_span_with_gap_and_row_height() {
    let data_dir = TempDir::new().unwrap();

    // Square image, 300px column, 10px rows, 4px gap: ceil(304 / 10) = 31
    cli_cmd(&data_dir)
        .args([
            "span", "--width", "500", "--height", "500", "--column", "300", "--row-height", "10",
            "--gap", "4",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Span: 31 rows"));
}

#[test]
fn test_span_zero_width_falls_back() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["span", "--width", "0", "--height", "400", "--column", "280"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Span: 38 rows (fallback"));
}

// ============================================================================
// Session Tests
// ============================================================================

#[test]
fn test_info_when_logged_out() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("API: http://127.0.0.1:9/api"))
        .stdout(predicate::str::contains("Session: not logged in"));
}

#[test]
fn test_login_persists_and_logout_clears() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["login", "--token", "abc123", "--user-id", "u42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Token stored"));

    assert!(data_dir.path().join("session.json").exists());

    cli_cmd(&data_dir)
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("Session: logged in as u42"));

    cli_cmd(&data_dir)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out."));

    assert!(!data_dir.path().join("session.json").exists());

    cli_cmd(&data_dir)
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("Session: not logged in"));
}

#[test]
fn test_login_rejects_blank_token() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["login", "--token", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Token must not be empty"));
}

#[test]
fn test_dashboard_needs_a_user() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .arg("dashboard")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No user id"));
}

// ============================================================================
// Admin Import Tests
// ============================================================================

#[test]
fn test_import_dry_run_csv() {
    let data_dir = TempDir::new().unwrap();
    let file = data_dir.path().join("gallery.csv");
    fs::write(
        &file,
        "title,prompt,model\n\"Rainy, neon\",\"a \"\"wet\"\" street\nat night\",flux\nKoi,pond,sora\n",
    )
    .unwrap();

    cli_cmd(&data_dir)
        .args(["admin", "import", "gallery"])
        .arg(&file)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run: 2 gallery record(s)"))
        .stdout(predicate::str::contains("model"));
}

#[test]
fn test_import_dry_run_json_with_explicit_format() {
    let data_dir = TempDir::new().unwrap();
    let file = data_dir.path().join("posts.txt");
    fs::write(&file, r#"{"records":[{"title":"a"},{"title":"b"},{"title":"c"}]}"#).unwrap();

    cli_cmd(&data_dir)
        .args(["admin", "import", "posts"])
        .arg(&file)
        .args(["--format", "json", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run: 3 posts record(s)"));
}

#[test]
fn test_import_unknown_extension_needs_format() {
    let data_dir = TempDir::new().unwrap();
    let file = data_dir.path().join("dump.xlsx");
    fs::write(&file, "irrelevant").unwrap();

    cli_cmd(&data_dir)
        .args(["admin", "import", "posts"])
        .arg(&file)
        .arg("--dry-run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("pass --format"));
}

#[test]
fn test_import_unknown_resource() {
    let data_dir = TempDir::new().unwrap();
    let file = data_dir.path().join("x.json");
    fs::write(&file, "[]").unwrap();

    cli_cmd(&data_dir)
        .args(["admin", "import", "comments"])
        .arg(&file)
        .arg("--dry-run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown resource"));
}

// ============================================================================
// Network Error Tests
// ============================================================================

#[test]
fn test_gallery_list_reports_network_error() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["gallery", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Network error"));
}

#[test]
fn test_invalid_sort_is_rejected() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["gallery", "list", "--sort", "oldest"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown sort"));
}
