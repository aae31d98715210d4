//! Integration tests for the jam CLI

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn jam() -> Command {
    Command::cargo_bin("jam").unwrap()
}

#[test]
fn test_help_command() {
    jam()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("info"))
        .stdout(predicate::str::contains("pack"))
        .stdout(predicate::str::contains("unpack"));
}

#[test]
fn test_version_command() {
    jam()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("jam"));
}

#[test]
fn test_invalid_command() {
    jam()
        .arg("invalid")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_pack_info_unpack_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("level.dat");
    let packed = dir.path().join("level.jam");
    let expanded = dir.path().join("level.out");

    let mut data = vec![0u8; 3000];
    data.extend((0u8..=255).cycle().take(900));
    fs::write(&input, &data).unwrap();

    jam()
        .arg("pack")
        .arg(&input)
        .arg(&packed)
        .args(["--compression", "lzh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lzh"));

    jam()
        .arg("info")
        .arg(&packed)
        .assert()
        .success()
        .stdout(predicate::str::contains("JAMP"))
        .stdout(predicate::str::contains("lzh"))
        .stdout(predicate::str::contains("3900 bytes"));

    jam()
        .arg("unpack")
        .arg(&packed)
        .arg(&expanded)
        .assert()
        .success();

    assert_eq!(fs::read(&expanded).unwrap(), data);
}

#[test]
fn test_legacy_pack_defaults_to_lzw() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sound.dat");
    let packed = dir.path().join("sound.comp");
    let expanded = dir.path().join("sound.out");

    let data = b"APOGEE SOUND BANK ".repeat(40);
    fs::write(&input, &data).unwrap();

    jam()
        .arg("pack")
        .arg(&input)
        .arg(&packed)
        .arg("--legacy")
        .assert()
        .success();

    jam()
        .arg("info")
        .arg(&packed)
        .assert()
        .success()
        .stdout(predicate::str::contains("COMP"))
        .stdout(predicate::str::contains("lzw"))
        .stdout(predicate::str::contains("undeclared"));

    jam()
        .arg("unpack")
        .arg(&packed)
        .arg(&expanded)
        .assert()
        .success();

    assert_eq!(fs::read(&expanded).unwrap(), data);
}

#[test]
fn test_legacy_rejects_other_compression() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.dat");
    fs::write(&input, b"data").unwrap();

    jam()
        .arg("pack")
        .arg(&input)
        .arg(dir.path().join("out.jam"))
        .args(["--compression", "lzh", "--legacy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("always LZW"));
}

#[test]
fn test_info_rejects_unrecognized_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("not-a-container");
    fs::write(&file, b"MThd\x00\x00\x00\x06").unwrap();

    jam()
        .arg("info")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse"))
        .stderr(predicate::str::contains("Invalid chunk tag"));
}

#[test]
fn test_unpack_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();

    jam()
        .arg("unpack")
        .arg(dir.path().join("missing.jam"))
        .arg(dir.path().join("out.dat"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to open"));
}
