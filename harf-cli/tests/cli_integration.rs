//! Integration tests for the harf CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn harf() -> Command {
    Command::cargo_bin("harf").unwrap()
}

#[test]
fn test_normalize_uthmani_file() {
    let mut cmd = harf();
    cmd.arg("normalize").arg("-i").arg(fixture_path("fatiha.txt"));

    cmd.assert()
        .success()
        .stdout("بسم الله الرحمان الرحيم الحمد لله رب العالمين\n");
}

#[test]
fn test_normalize_per_line() {
    let mut cmd = harf();
    cmd.arg("normalize")
        .arg("-i")
        .arg(fixture_path("fatiha.txt"))
        .arg("--per-line");

    cmd.assert()
        .success()
        .stdout("بسم الله الرحمان الرحيم\nالحمد لله رب العالمين\n");
}

#[test]
fn test_normalize_stdin() {
    let mut cmd = harf();
    cmd.arg("normalize").write_stdin("۞ وَإِذْ  قَالَ");

    cmd.assert().success().stdout("وإذ قال\n");
}

#[test]
fn test_empty_stdin() {
    let mut cmd = harf();
    cmd.arg("normalize").write_stdin("");

    cmd.assert().success().stdout("\n");
}

#[test]
fn test_strip_hamza_shorthand() {
    let mut cmd = harf();
    cmd.arg("normalize")
        .arg("-i")
        .arg(fixture_path("baqarah-189.txt"))
        .arg("--strip-hamza");

    cmd.assert().success().stdout("يسلونك عن الهلة\n");
}

#[test]
fn test_matching_preset() {
    let mut cmd = harf();
    cmd.arg("normalize")
        .arg("--preset")
        .arg("matching")
        .write_stdin("مَا سَأَلَ عَلَى");

    cmd.assert().success().stdout("ما سل علي\n");
}

#[test]
fn test_none_preset_is_identity() {
    let mut cmd = harf();
    cmd.arg("normalize")
        .arg("--preset")
        .arg("none")
        .write_stdin("بِسْمِ  ١");

    cmd.assert().success().stdout("بِسْمِ  ١\n");
}

#[test]
fn test_disable_flag() {
    let mut cmd = harf();
    cmd.arg("normalize")
        .arg("--disable")
        .arg("verse-numbers")
        .write_stdin("آية ١٢٣");

    cmd.assert().success().stdout("اية ١٢٣\n");
}

#[test]
fn test_options_json() {
    let mut cmd = harf();
    cmd.arg("normalize")
        .arg("--options")
        .arg(r#"{"diacritics": false}"#)
        .write_stdin("بِسْمِ ﴿١﴾");

    cmd.assert().success().stdout("بِسْمِ\n");
}

#[test]
fn test_json_output() {
    let mut cmd = harf();
    cmd.arg("normalize")
        .arg("-i")
        .arg(fixture_path("fatiha.txt"))
        .arg("-f")
        .arg("json");

    let output = cmd.assert().success().get_output().stdout.clone();
    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let documents = parsed.as_array().unwrap();

    assert_eq!(documents.len(), 1);
    assert!(documents[0]["source"]
        .as_str()
        .unwrap()
        .ends_with("fatiha.txt"));
    assert_eq!(
        documents[0]["text"],
        "بسم الله الرحمان الرحيم الحمد لله رب العالمين"
    );
    assert_eq!(documents[0]["output_chars"], 45);
}

#[test]
fn test_glob_pattern_in_sorted_order() {
    let mut cmd = harf();
    cmd.arg("normalize")
        .arg("-i")
        .arg("tests/fixtures/*.txt")
        .arg("-q");

    cmd.assert()
        .success()
        .stdout("يسلونك عن الأهلة\nبسم الله الرحمان الرحيم الحمد لله رب العالمين\n");
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("out.txt");

    let mut cmd = harf();
    cmd.arg("normalize")
        .arg("-i")
        .arg(fixture_path("baqarah-189.txt"))
        .arg("-o")
        .arg(&output_path);

    cmd.assert().success().stdout("");

    let written = fs::read_to_string(&output_path).unwrap();
    assert_eq!(written, "يسلونك عن الأهلة\n");
}

#[test]
fn test_arabic_file_name() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("الإخلاص.txt");
    fs::write(&input_path, "قُلْ هُوَ ٱللَّهُ أَحَدٌ ﴿١﴾").unwrap();

    let mut cmd = harf();
    cmd.arg("normalize").arg("-i").arg(&input_path);

    cmd.assert().success().stdout("قل هو الله أحد\n");
}

#[test]
fn test_missing_file() {
    let mut cmd = harf();
    cmd.arg("normalize").arg("-i").arg("nonexistent.txt");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("File not found: nonexistent.txt"));
}

#[test]
fn test_glob_without_matches() {
    let mut cmd = harf();
    cmd.arg("normalize").arg("-i").arg("tests/fixtures/*.md");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn test_unknown_flag() {
    let mut cmd = harf();
    cmd.arg("normalize").arg("--enable").arg("vowels");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown option flag 'vowels'"));
}

#[test]
fn test_invalid_options_json() {
    let mut cmd = harf();
    cmd.arg("normalize")
        .arg("--options")
        .arg("{\"diacritics\": 1}")
        .write_stdin("كلمة");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid options:"));
}

#[test]
fn test_preset_conflicts_with_options() {
    let mut cmd = harf();
    cmd.arg("normalize")
        .arg("--preset")
        .arg("none")
        .arg("--options")
        .arg("{}");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_list_flags() {
    let mut cmd = harf();
    cmd.arg("list").arg("flags");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("diacritics"))
        .stdout(predicate::str::contains("smallLetters"))
        .stdout(predicate::str::contains("stripHamza"));
}

#[test]
fn test_list_stages() {
    let mut cmd = harf();
    cmd.arg("list").arg("stages");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1. diacritics"))
        .stdout(predicate::str::contains("6. strip-hamza"))
        .stdout(predicate::str::contains("7. whitespace"));
}

#[test]
fn test_help_message() {
    let mut cmd = harf();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("normalization"))
        .stdout(predicate::str::contains("normalize"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn test_version() {
    let mut cmd = harf();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("harf"));
}
