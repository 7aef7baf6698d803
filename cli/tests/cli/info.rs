use crate::utils::{write_animation, write_still};
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

/// Precondition: A two frame APNG exists.
/// Action: Run `apng info <file>`.
/// Expectation: The header, the animation control and every frame are printed.
#[test]
fn info_animated() {
    let path = write_animation("info_animated/anim.png").unwrap();

    cargo_bin_cmd!("apng")
        .arg("info")
        .arg(&path)
        .assert()
        .success()
        .stdout(concat!(
            "image: 100x50, bit depth 8, color type 6, interlace 0\n",
            "animation: 2 frames, plays infinite\n",
            "frame 0: 100x50 at (0, 0), delay 0.100s, dispose none, blend over, default image\n",
            "frame 1: 40x20 at (0, 0), delay 0.100s, dispose none, blend over\n",
        ));
}

/// Precondition: A PNG without an acTL chunk exists.
/// Action: Run `apng info <file>`.
/// Expectation: The image is reported as not animated.
#[test]
fn info_still() {
    let path = write_still("info_still/still.png").unwrap();

    cargo_bin_cmd!("apng")
        .arg("info")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("animation: none"));
}

/// Precondition: A PNG truncated in the middle of a chunk.
/// Action: Run `apng info <file>`.
/// Expectation: The command fails with a truncation error.
#[test]
fn info_truncated() {
    let path = write_animation("info_truncated/anim.png").unwrap();
    let bytes = std::fs::read(&path).unwrap();
    std::fs::write(&path, &bytes[..bytes.len() - 6]).unwrap();

    cargo_bin_cmd!("apng")
        .arg("info")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("truncated chunk"));
}
