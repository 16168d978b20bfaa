//! CLI end-to-end tests that invoke the compiled `tmpl` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a Command for the tmpl binary, isolated from the user's global catalog
fn tmpl_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("tmpl").expect("Failed to find tmpl binary");
    cmd.current_dir(dir)
        .env("TMPL_CONFIG_DIR", dir.join("global-catalog"))
        .env_remove("TMPL_CATALOG")
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// A project catalog with the `bullet`/`frail` lint schema from the docs
fn lint_catalog(root: &Path) {
    write(
        root,
        "catalog/schemas/lint.toml",
        r#"
kind = "lint"

[options.bullet]
type = "string"
required = true
default = "-"
"#,
    );
    write(
        root,
        "catalog/templates/default-lint.toml",
        r#"
[meta]
name = "default-lint"
kind = "lint"

[values]
bullet = "*"
"#,
    );
}

// ============================================================================
// materialize
// ============================================================================

#[test]
fn test_materialize_prints_json() {
    let temp = TempDir::new().unwrap();
    lint_catalog(temp.path());

    tmpl_cmd(temp.path())
        .args(["--no-builtins", "--catalog", "catalog", "materialize", "default-lint"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""bullet": "*""#));
}

#[test]
fn test_materialize_type_mismatch_exits_one() {
    let temp = TempDir::new().unwrap();
    lint_catalog(temp.path());

    tmpl_cmd(temp.path())
        .args([
            "--no-builtins",
            "--catalog",
            "catalog",
            "materialize",
            "default-lint",
            "--set",
            "bullet=7",
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr("bullet: type-mismatch (expected string, found integer)\n");
}

#[test]
fn test_materialize_invalid_stderr_is_one_finding_per_line() {
    let temp = TempDir::new().unwrap();
    lint_catalog(temp.path());

    let output = tmpl_cmd(temp.path())
        .args([
            "--no-builtins",
            "--catalog",
            "catalog",
            "materialize",
            "default-lint",
            "--set",
            "bullet=7",
            "--set",
            "frail=\"yes\"",
        ])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    let lines: Vec<_> = stderr.lines().collect();
    assert_eq!(lines.len(), 2);
    for line in lines {
        let (key, rest) = line.split_once(": ").unwrap();
        assert!(!key.is_empty() && !key.starts_with("error"), "{line}");
        assert!(rest.ends_with(')') && rest.contains(" ("), "{line}");
    }
}

#[test]
fn test_materialize_unknown_template() {
    let temp = TempDir::new().unwrap();

    tmpl_cmd(temp.path())
        .args(["materialize", "nonexistent"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Template not found: nonexistent"));
}

#[test]
fn test_materialize_unknown_key_warns_but_succeeds() {
    let temp = TempDir::new().unwrap();

    tmpl_cmd(temp.path())
        .args(["materialize", "remark", "--set", "quiet=true"])
        .assert()
        .success()
        .stderr(predicate::str::contains("warning:"))
        .stderr(predicate::str::contains("quiet: unknown-key"));
}

#[test]
fn test_materialize_module_format() {
    let temp = TempDir::new().unwrap();

    tmpl_cmd(temp.path())
        .args(["materialize", "karma-chromium-headless", "--format", "module"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "module.exports = config => config.set({",
        ))
        .stdout(predicate::str::contains("\"JesiChromiumHeadless\""));
}

#[test]
fn test_materialize_writes_output_and_checks() {
    let temp = TempDir::new().unwrap();

    tmpl_cmd(temp.path())
        .args(["materialize", "remark", "-o", ".remarkrc.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let written = fs::read_to_string(temp.path().join(".remarkrc.yaml")).unwrap();
    assert!(written.contains("remark-gfm: true"));

    tmpl_cmd(temp.path())
        .args(["materialize", "remark", "-o", ".remarkrc.yaml", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("up to date"));

    tmpl_cmd(temp.path())
        .args([
            "materialize",
            "remark",
            "-o",
            ".remarkrc.yaml",
            "--check",
            "--set",
            "frail=false",
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("+frail: false"))
        .stderr(predicate::str::contains("out of date"));
}

#[test]
fn test_project_catalog_is_loaded() {
    let temp = TempDir::new().unwrap();
    write(
        temp.path(),
        ".templates/templates/strict.toml",
        r#"
[meta]
name = "strict-remark"
kind = "lint"

[values]
frail = true

[values.plugins]
remark-preset-lint-recommended = true
"#,
    );

    tmpl_cmd(temp.path())
        .args(["materialize", "strict-remark"])
        .assert()
        .success()
        .stdout(predicate::str::contains("remark-preset-lint-recommended"));
}

// ============================================================================
// validate / list / show / schema
// ============================================================================

#[test]
fn test_validate_file() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "karma.json", r#"{"files": ["test.js"], "singleRun": true}"#);
    write(temp.path(), "broken.json", r#"{"retryLimit": "none"}"#);

    tmpl_cmd(temp.path())
        .args(["validate", "karma.json", "--kind", "test-runner"])
        .assert()
        .success()
        .stdout(predicate::str::contains("valid test-runner configuration"));

    tmpl_cmd(temp.path())
        .args(["validate", "broken.json", "--kind", "test-runner"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("files: missing-required"))
        .stderr(predicate::str::contains("retryLimit: type-mismatch"));
}

#[test]
fn test_list_shows_builtins() {
    let temp = TempDir::new().unwrap();

    tmpl_cmd(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available Templates"))
        .stdout(predicate::str::contains("remark-consistent"))
        .stdout(predicate::str::contains("karma-chromium-headless"))
        .stdout(predicate::str::contains("Total:"));
}

#[test]
fn test_list_kind_filter() {
    let temp = TempDir::new().unwrap();

    tmpl_cmd(temp.path())
        .args(["list", "--kind", "test-runner"])
        .assert()
        .success()
        .stdout(predicate::str::contains("karma-chromium-headless"))
        .stdout(predicate::str::contains("remark-consistent").not());
}

#[test]
fn test_show_and_schema() {
    let temp = TempDir::new().unwrap();

    tmpl_cmd(temp.path())
        .args(["show", "remark"])
        .assert()
        .success()
        .stdout(predicate::str::contains("kind:        lint"))
        .stdout(predicate::str::contains("listItemIndent"));

    tmpl_cmd(temp.path())
        .args(["schema", "test-runner"])
        .assert()
        .success()
        .stdout(predicate::str::contains("browserNoActivityTimeout"));
}

#[test]
fn test_help_exits_zero() {
    let temp = TempDir::new().unwrap();

    tmpl_cmd(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("materialize"));
}
