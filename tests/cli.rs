#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const NOTES: &str = "---\ntitle: Hello\ndraft: true\n---\n# Hi\n";

fn md_to_mdx_cmd() -> Command {
    let mut cmd = Command::new(cargo_bin("md-to-mdx"));
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_converts_current_directory_by_default() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("notes.md"), NOTES).unwrap();

    md_to_mdx_cmd()
        .current_dir(temp.path())
        .args(["-a", "draft:isDraft"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Converting Markdown to MDX..."))
        .stdout(predicate::str::contains("Converted: notes.md → notes.mdx"))
        .stdout(predicate::str::contains("Conversion complete!"));

    let output = fs::read_to_string(temp.path().join("notes.mdx")).unwrap();
    assert_eq!(
        output,
        "export const metadata = {\n  \"title\": \"Hello\",\n  \"isDraft\": true\n};\n\n# Hi\n"
    );
}

#[test]
fn test_deep_conversion_with_relative_output() {
    let temp = TempDir::new().unwrap();
    let docs = temp.path().join("docs");
    fs::create_dir_all(docs.join("sub")).unwrap();
    fs::write(docs.join("sub/page.md"), NOTES).unwrap();

    md_to_mdx_cmd()
        .current_dir(temp.path())
        .args(["docs", "--deep", "--out", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page.md → page.mdx"));

    assert!(temp.path().join("out/sub/page.mdx").is_file());
    assert!(!docs.join("sub/page.mdx").exists());
}

#[test]
fn test_shallow_conversion_skips_subdirectories() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("sub")).unwrap();
    fs::write(temp.path().join("sub/page.md"), NOTES).unwrap();

    md_to_mdx_cmd()
        .current_dir(temp.path())
        .args([".", "--deep", "--no-deep"])
        .assert()
        .success();

    assert!(!temp.path().join("sub/page.mdx").exists());
}

#[test]
fn test_unknown_flag_is_an_ignored_positional() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("docs")).unwrap();
    fs::write(temp.path().join("docs/notes.md"), NOTES).unwrap();

    md_to_mdx_cmd()
        .current_dir(temp.path())
        .args(["docs", "--weird"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Converted: notes.md → notes.mdx"));

    assert!(temp.path().join("docs/notes.mdx").is_file());
}

#[test]
fn test_help() {
    md_to_mdx_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: md-to-mdx [path] [options]"))
        .stdout(predicate::str::contains("--adapter"));
}

#[test]
fn test_help_does_not_convert() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("notes.md"), NOTES).unwrap();

    md_to_mdx_cmd()
        .current_dir(temp.path())
        .arg("-h")
        .assert()
        .success();

    assert!(!temp.path().join("notes.mdx").exists());
}

#[test]
fn test_invalid_adapter_prints_error_and_usage() {
    md_to_mdx_cmd()
        .args(["--adapter", "badtoken"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("✗ Error:"))
        .stderr(predicate::str::contains("badtoken"))
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_missing_flag_value() {
    md_to_mdx_cmd()
        .arg("--out")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--out"));
}

#[test]
fn test_missing_input_path() {
    let temp = TempDir::new().unwrap();

    md_to_mdx_cmd()
        .current_dir(temp.path())
        .arg("nope.md")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Path not found"));
}

#[test]
fn test_wrong_extension() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("notes.txt"), NOTES).unwrap();

    md_to_mdx_cmd()
        .current_dir(temp.path())
        .arg("notes.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file must have .md extension"));
}
