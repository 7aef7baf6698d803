use crate::utils::{tmp_path, write_animation};
use apng_cli::{cli, command::Command};
use assert_cmd::cargo::cargo_bin_cmd;
use clap::Parser;
use predicates::prelude::*;
use std::fs;

/// Precondition: A two frame APNG exists.
/// Action: Run `apng chunk list <file>`.
/// Expectation: Every chunk type is listed in stream order.
#[test]
fn chunk_list_basic() {
    let path = write_animation("chunk_list_basic/anim.png").unwrap();

    let assert = cargo_bin_cmd!("apng")
        .args(["chunk", "list"])
        .arg(&path)
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let types = stdout
        .lines()
        .filter_map(|line| line.split_whitespace().nth(1))
        .collect::<Vec<_>>();
    assert_eq!(
        types,
        ["IHDR", "acTL", "tEXt", "fcTL", "IDAT", "fcTL", "fdAT", "IEND"]
    );
}

/// Precondition: A two frame APNG exists.
/// Action: Run `apng chunk list <file>`.
/// Expectation: Offsets start right after the signature and are printed in hex.
#[test]
fn chunk_list_shows_hex_offsets() {
    let path = write_animation("chunk_list_hex/anim.png").unwrap();

    cargo_bin_cmd!("apng")
        .args(["chunk", "list"])
        .arg(&path)
        .assert()
        .success()
        // IHDR at 8, acTL at 8 + 25
        .stdout(predicate::str::contains("0x0008").and(predicate::str::contains("0x0021")));
}

/// Precondition: A two frame APNG exists.
/// Action: Run `apng chunk list --header <file>`.
/// Expectation: A header row names each column.
#[test]
fn chunk_list_with_header() {
    let path = write_animation("chunk_list_header/anim.png").unwrap();

    cargo_bin_cmd!("apng")
        .args(["chunk", "list", "--header"])
        .arg(&path)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Index")
                .and(predicate::str::contains("Type"))
                .and(predicate::str::contains("Size"))
                .and(predicate::str::contains("Offset"))
                .and(predicate::str::contains("Body").not()),
        );
}

/// Precondition: A two frame APNG exists.
/// Action: Run `apng chunk list --long <file>`.
/// Expectation: Decoded fields of the animation chunks are shown.
#[test]
fn chunk_list_long() {
    let path = write_animation("chunk_list_long/anim.png").unwrap();

    cargo_bin_cmd!("apng")
        .args(["chunk", "list", "--long", "--header"])
        .arg(&path)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Body")
                .and(predicate::str::contains("width=100 height=50 bit_depth=8"))
                .and(predicate::str::contains("num_frames=2 num_plays=0"))
                .and(predicate::str::contains(
                    "sequence=1 width=40 height=20 x=0 y=0 delay=1/10 dispose=none blend=over",
                ))
                .and(predicate::str::contains("sequence=2")),
        );
}

/// Precondition: An APNG whose tEXt payload was altered after its checksum was computed.
/// Action: Run `apng chunk list` with and without `--verify-crc`.
/// Expectation: Listing succeeds both ways, the mismatch is reported only when verifying.
#[test]
fn chunk_list_verify_crc() {
    let path = write_animation("chunk_list_crc/anim.png").unwrap();
    let mut bytes = fs::read(&path).unwrap();
    // signature + IHDR + acTL + tEXt length and type
    bytes[8 + 25 + 20 + 8] ^= 0x20;
    fs::write(&path, bytes).unwrap();

    cargo_bin_cmd!("apng")
        .args(["chunk", "list"])
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    cargo_bin_cmd!("apng")
        .args(["chunk", "list", "--verify-crc"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("tEXt"))
        .stderr(predicate::str::contains("crc mismatch in tEXt chunk"));
}

/// Precondition: The input file does not start with the PNG signature.
/// Action: Run `apng chunk list <file>`.
/// Expectation: The command fails and names the problem.
#[test]
fn chunk_list_not_png() {
    let path = tmp_path("chunk_list_not_png/plain.txt");
    fs::write(&path, "definitely not a png").unwrap();

    cargo_bin_cmd!("apng")
        .args(["chunk", "list"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a PNG file"));
}

/// Precondition: No file exists at the specified path.
/// Action: Run `apng chunk list <nonexistent>`.
/// Expectation: Command fails with an error.
#[test]
fn chunk_list_missing_file() {
    let result = cli::Cli::try_parse_from(["apng", "chunk", "list", "nonexistent/anim.png"])
        .unwrap()
        .execute();

    assert!(
        result.is_err(),
        "chunk list should fail for missing input file"
    );
}
