//! Integration tests for the poetry-typing binary
//!
//! Every test runs in a scratch directory so no stray config file or
//! results directory is picked up.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const VERSES: &str = "\
Sing in me, Muse, and through me tell the story of that man.
Nel mezzo del cammin di nostra vita mi ritrovai per una selva oscura.

A seagull soars in the pink evening, tracing wind with patient wings.
On the mountains of the moon, down the valley of the shadow.
O mar salgado, quanto do teu sal / São lágrimas de Portugal!
";

fn cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("poetry-typing").unwrap();
    cmd.current_dir(dir).env_remove("POETRY_TYPING_CONFIG");
    cmd
}

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_help() {
    let temp = TempDir::new().unwrap();
    cmd(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--min-line-length"));
}

#[test]
fn test_missing_verse_file_is_usage_error() {
    let temp = TempDir::new().unwrap();
    cmd(temp.path())
        .arg("nowhere.txt")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Verse file not found"))
        .stderr(predicate::str::contains("nowhere.txt"));
    assert!(!temp.path().join("results").exists());
}

#[test]
fn test_default_mode_writes_timestamped_file() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "verses.txt", VERSES);

    let stdout = stdout_of(cmd(temp.path()).args([
        "--seed",
        "123",
        "--count",
        "2",
        "--min-line-length",
        "0",
    ]));

    let path = PathBuf::from(stdout.trim_end_matches('\n'));
    assert!(path.is_absolute());
    assert_eq!(
        path.parent().unwrap(),
        std::fs::canonicalize(temp.path().join("results")).unwrap()
    );
    let name = path.file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("result-") && name.ends_with(".txt"));

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.ends_with('\n'));
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Sing in me, Muse"));
}

#[test]
fn test_creates_nested_out_dir() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "verses.txt", VERSES);
    let out_dir = temp.path().join("nested").join("results");

    let stdout = stdout_of(
        cmd(temp.path())
            .args(["--seed", "7", "--count", "1"])
            .arg("--out-dir")
            .arg(&out_dir),
    );

    assert!(out_dir.is_dir());
    let path = PathBuf::from(stdout.trim_end_matches('\n'));
    assert_eq!(
        path.parent().unwrap(),
        std::fs::canonicalize(&out_dir).unwrap()
    );
    assert!(path.exists());
}

#[test]
fn test_custom_timestamp_format() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "verses.txt", VERSES);

    let stdout = stdout_of(cmd(temp.path()).args(["--timestamp-format", "fixed"]));
    assert!(stdout.trim_end().ends_with("result-fixed.txt"));
}

#[test]
fn test_invalid_timestamp_format_fails() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "verses.txt", VERSES);

    cmd(temp.path())
        .args(["--timestamp-format", "%Q"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid timestamp format"));
    assert!(!temp.path().join("results").exists());
}

#[test]
fn test_stdout_single_line_has_one_newline() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "verses.txt", VERSES);

    let stdout = stdout_of(cmd(temp.path()).args([
        "--stdout",
        "--seed",
        "123",
        "--count",
        "5",
        "--single-line",
    ]));
    assert!(stdout.ends_with('\n'));
    assert_eq!(stdout.matches('\n').count(), 1);
    assert!(stdout.starts_with("Sing in me, Muse"));
}

#[test]
fn test_seeded_runs_are_identical() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "verses.txt", VERSES);
    let args = ["--stdout", "--seed", "99"];

    let first = stdout_of(cmd(temp.path()).args(args));
    let second = stdout_of(cmd(temp.path()).args(args));
    assert_eq!(first, second);
    assert!(!first.is_empty());
}

#[test]
fn test_blank_lines_skipped() {
    let temp = TempDir::new().unwrap();
    let verses = write_file(
        temp.path(),
        "poems.txt",
        "First light on quiet seas.\n\n   \nSecond verse appearing.\nThird stanza stays.\n",
    );

    let stdout = stdout_of(
        cmd(temp.path())
            .args(["--stdout", "--seed", "99", "--min-line-length", "0"])
            .arg(&verses),
    );
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|line| !line.trim().is_empty()));
}

#[test]
fn test_short_lines_concatenate_by_default() {
    let temp = TempDir::new().unwrap();
    write_file(
        temp.path(),
        "verses.txt",
        "abiding romance\nabject submission\nabjured ambition\n",
    );

    let stdout = stdout_of(cmd(temp.path()).args(["--stdout", "--seed", "1"]));
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("abiding romance "));
    assert!(lines[1].starts_with("abjured ambition "));
}

#[test]
fn test_count_beyond_available() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "verses.txt", "alpha\n");

    let stdout = stdout_of(cmd(temp.path()).args(["--stdout", "--count", "5"]));
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.starts_with("alpha "));
}

#[test]
fn test_empty_source_prints_nothing() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "verses.txt", "\n   \n");

    cmd(temp.path())
        .args(["--stdout", "--single-line"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_custom_symbols() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "verses.txt", VERSES);

    let stdout = stdout_of(cmd(temp.path()).args(["--stdout", "--symbols", "#"]));
    for line in stdout.lines() {
        assert!(line.ends_with(" ##"), "unexpected suffix: {}", line);
    }
}

#[test]
fn test_distinct_symbols_need_two() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "verses.txt", VERSES);

    cmd(temp.path())
        .args(["--stdout", "--symbols", "#", "--distinct-symbols"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("at least two different symbols"));
}

#[test]
fn test_repeated_symbol_is_not_a_distinct_pair() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "verses.txt", VERSES);

    cmd(temp.path())
        .args(["--stdout", "--symbols", "##", "--distinct-symbols"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("at least two different symbols"));
}

#[test]
fn test_whitespace_symbols_rejected() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "verses.txt", "abiding romance\nabject submission\n");

    cmd(temp.path())
        .args(["--stdout", "--symbols", " "])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("must not contain whitespace"));
}

#[test]
fn test_whitespace_symbols_rejected_from_config() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "verses.txt", VERSES);
    write_file(
        temp.path(),
        ".poetry-typing.json",
        r##"{"stdout": true, "symbols": "#\t%"}"##,
    );

    cmd(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("must not contain whitespace"));
}

#[test]
fn test_negative_seed_is_accepted() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "verses.txt", VERSES);

    let first = stdout_of(cmd(temp.path()).args(["--stdout", "--seed", "-5"]));
    let second = stdout_of(cmd(temp.path()).args(["--stdout", "--seed=-5"]));
    assert_eq!(first, second);
    assert_eq!(first.lines().count(), 5);
}

#[test]
fn test_config_file_is_applied() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "verses.txt", "one\ntwo\nthree\n");
    write_file(
        temp.path(),
        ".poetry-typing.json",
        r#"{"stdout": true, "minLineLength": 0, "symbols": "%"}"#,
    );

    let stdout = stdout_of(&mut cmd(temp.path()));
    assert_eq!(stdout.lines().count(), 3);
    assert!(stdout.lines().all(|line| line.ends_with(" %%")));
}

#[test]
fn test_broken_config_file_fails() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "verses.txt", VERSES);
    write_file(temp.path(), "custom.json", "{ nope");

    cmd(temp.path())
        .args(["--config", "custom.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("custom.json"));
}
