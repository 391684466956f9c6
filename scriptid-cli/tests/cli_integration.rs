//! Integration tests for the scriptid CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

/// Copy a fixture into a scratch directory so outputs land beside it
fn copy_fixture(dir: &Path, name: &str) -> PathBuf {
    let target = dir.join(name);
    fs::copy(fixture_path(name), &target).unwrap();
    target
}

fn scriptid(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("scriptid").unwrap();
    cmd.current_dir(dir);
    cmd
}

#[test]
fn test_annotate_csv_default_columns() {
    let temp_dir = TempDir::new().unwrap();
    let input = copy_fixture(temp_dir.path(), "voters.csv");

    scriptid(temp_dir.path())
        .arg("annotate")
        .arg("-i")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Annotated → "))
        .stdout(predicate::str::contains("voters_lang.csv"));

    let output = fs::read_to_string(temp_dir.path().join("voters_lang.csv")).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines[0],
        "id,Name,Relative_Name,lastname,rel_lastname,Name_lang,Relative_Name_lang,lastname_lang,rel_lastname_lang"
    );
    assert!(lines[1].ends_with(",hi,hi,en,en"));
    assert!(lines[2].ends_with(",tam,tam,en,en"));
    assert!(lines[3].ends_with(",ur,ur,ur,ur"));
    assert!(lines[4].ends_with(",en,en,en,en"));
    assert!(lines[5].ends_with(",te,kn,bn,or"));
}

#[test]
fn test_annotate_writes_cache_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = copy_fixture(temp_dir.path(), "voters.csv");

    scriptid(temp_dir.path())
        .args(["annotate", "-q", "--cols", "Name", "-i"])
        .arg(&input)
        .assert()
        .success();

    let cache = fs::read_to_string(temp_dir.path().join("lang_cache.json")).unwrap();
    let snapshot: serde_json::Value = serde_json::from_str(&cache).unwrap();
    assert_eq!(snapshot["रमेश"], "hi");
    assert_eq!(snapshot["Ramesh"], "en");
    assert_eq!(snapshot.as_object().unwrap().len(), 5);
}

#[test]
fn test_no_cache_leaves_no_snapshot() {
    let temp_dir = TempDir::new().unwrap();
    let input = copy_fixture(temp_dir.path(), "voters.csv");

    scriptid(temp_dir.path())
        .args(["annotate", "--no-cache", "-i"])
        .arg(&input)
        .assert()
        .success();

    assert!(!temp_dir.path().join("lang_cache.json").exists());
}

#[test]
fn test_existing_cache_overrides_scan() {
    let temp_dir = TempDir::new().unwrap();
    let input = copy_fixture(temp_dir.path(), "voters.csv");
    let cache = temp_dir.path().join("names.json");
    fs::write(&cache, r#"{"Ramesh": "hi"}"#).unwrap();

    scriptid(temp_dir.path())
        .args(["annotate", "--cols", "Name", "--cache"])
        .arg(&cache)
        .arg("-i")
        .arg(&input)
        .assert()
        .success();

    let output = fs::read_to_string(temp_dir.path().join("voters_lang.csv")).unwrap();
    assert!(output.contains("4,Ramesh,Sita,Kumar,Devi,hi"));
}

#[test]
fn test_chunked_csv_matches_whole_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = copy_fixture(temp_dir.path(), "voters.csv");
    let whole = temp_dir.path().join("whole.csv");
    let chunked = temp_dir.path().join("chunked.csv");

    scriptid(temp_dir.path())
        .args(["annotate", "--no-cache", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&whole)
        .assert()
        .success();
    scriptid(temp_dir.path())
        .args(["annotate", "--no-cache", "--chunk-rows", "2", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&chunked)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(whole).unwrap(),
        fs::read_to_string(chunked).unwrap()
    );
}

#[test]
fn test_annotate_json_lines() {
    let temp_dir = TempDir::new().unwrap();
    let input = copy_fixture(temp_dir.path(), "records.jsonl");

    scriptid(temp_dir.path())
        .args(["annotate", "--no-cache", "--cols", "Name", "-i"])
        .arg(&input)
        .assert()
        .success();

    let output = fs::read_to_string(temp_dir.path().join("records_lang.jsonl")).unwrap();
    let labels: Vec<String> = output
        .lines()
        .map(|line| {
            let record: serde_json::Value = serde_json::from_str(line).unwrap();
            record["Name_lang"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(labels, vec!["pa", "ml", "en"]);
}

#[test]
fn test_glob_input() {
    let temp_dir = TempDir::new().unwrap();
    for name in ["a.csv", "b.csv"] {
        fs::write(temp_dir.path().join(name), "Name\nRamesh\n").unwrap();
    }

    scriptid(temp_dir.path())
        .args(["annotate", "--no-cache", "--cols", "Name", "-i", "*.csv"])
        .assert()
        .success();

    assert!(temp_dir.path().join("a_lang.csv").exists());
    assert!(temp_dir.path().join("b_lang.csv").exists());
}

#[test]
fn test_rerun_glob_ignores_previous_outputs() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.csv"), "Name\nRamesh\n").unwrap();

    for _ in 0..2 {
        scriptid(temp_dir.path())
            .args(["annotate", "--no-cache", "--cols", "Name", "-i", "*.csv"])
            .assert()
            .success();
    }

    assert!(temp_dir.path().join("a_lang.csv").exists());
    assert!(!temp_dir.path().join("a_lang_lang.csv").exists());
}

#[test]
fn test_output_can_replace_input() {
    let temp_dir = TempDir::new().unwrap();
    let input = copy_fixture(temp_dir.path(), "voters.csv");

    scriptid(temp_dir.path())
        .args(["annotate", "--no-cache", "--chunk-rows", "2", "--cols", "Name", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&input)
        .assert()
        .success();

    let output = fs::read_to_string(&input).unwrap();
    assert!(output.starts_with("id,Name,Relative_Name,lastname,rel_lastname,Name_lang\n"));
    assert_eq!(output.lines().count(), 6);
}

#[test]
fn test_missing_column_fails() {
    let temp_dir = TempDir::new().unwrap();
    let input = copy_fixture(temp_dir.path(), "voters.csv");

    scriptid(temp_dir.path())
        .args(["annotate", "--cols", "Name", "Village", "-i"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Column 'Village' not found"));

    assert!(!temp_dir.path().join("voters_lang.csv").exists());
}

#[test]
fn test_unsupported_extension_fails() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("names.txt");
    fs::write(&input, "Ramesh\n").unwrap();

    scriptid(temp_dir.path())
        .arg("annotate")
        .arg("-i")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file type: .txt"));
}

#[test]
fn test_nonexistent_file() {
    let temp_dir = TempDir::new().unwrap();

    scriptid(temp_dir.path())
        .args(["annotate", "-i", "nonexistent.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_config_file_columns() {
    let temp_dir = TempDir::new().unwrap();
    let input = copy_fixture(temp_dir.path(), "voters.csv");
    let config = temp_dir.path().join("scriptid.toml");
    fs::write(&config, "[annotate]\ncolumns = [\"lastname\"]\nauto_cache = false\n").unwrap();

    scriptid(temp_dir.path())
        .arg("annotate")
        .arg("-c")
        .arg(&config)
        .arg("-i")
        .arg(&input)
        .assert()
        .success();

    let output = fs::read_to_string(temp_dir.path().join("voters_lang.csv")).unwrap();
    assert!(output.starts_with("id,Name,Relative_Name,lastname,rel_lastname,lastname_lang\n"));
    assert!(!temp_dir.path().join("lang_cache.json").exists());
}

#[test]
fn test_detect_text_output() {
    let temp_dir = TempDir::new().unwrap();

    scriptid(temp_dir.path())
        .args(["detect", "रमेश", "Ramesh", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("रमेश\thi\t1.000"))
        .stdout(predicate::str::contains("Ramesh\ten\t1.000"))
        .stdout(predicate::str::contains("\ten\t0.000"));
}

#[test]
fn test_detect_json_output() {
    let temp_dir = TempDir::new().unwrap();

    let output = scriptid(temp_dir.path())
        .args(["detect", "-f", "json", "abcरमे"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed[0]["language"], "hi");
    assert_eq!(parsed[0]["score"], 0.5);
}

#[test]
fn test_list_languages() {
    let temp_dir = TempDir::new().unwrap();

    scriptid(temp_dir.path())
        .args(["list", "languages"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tam"))
        .stdout(predicate::str::contains("Malayalam"))
        .stdout(predicate::str::contains("U+0600..U+06FF"));
}

#[test]
fn test_help_and_version() {
    let mut cmd = Command::cargo_bin("scriptid").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("annotate"))
        .stdout(predicate::str::contains("detect"));

    let mut cmd = Command::cargo_bin("scriptid").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("scriptid"));
}
