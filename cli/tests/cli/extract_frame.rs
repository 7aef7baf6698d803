use crate::utils::{PAYLOAD_0, PAYLOAD_1, tmp_path, write_animation, write_still};
use assert_cmd::cargo::cargo_bin_cmd;
use libapng::{Chunk, ChunkKind, ChunkReader, ReadOptions, TypedChunk, read_signature};
use predicates::prelude::*;
use std::{fs, path::Path};

fn read_png(path: &Path) -> Vec<TypedChunk> {
    let bytes = fs::read(path).unwrap();
    let mut source = bytes.as_slice();
    read_signature(&mut source).unwrap();
    ChunkReader::with_options(source, ReadOptions::builder().verify_crc(true).build())
        .chunks(false)
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}

/// Precondition: A two frame APNG exists.
/// Action: Run `apng extract-frame --frame 1 -o <out> <file>`.
/// Expectation: The output is a still PNG sized to the frame holding the fdAT payload as IDAT.
#[test]
fn extract_second_frame() {
    let path = write_animation("extract_frame_second/anim.png").unwrap();
    let output = tmp_path("extract_frame_second/frame1.png");

    cargo_bin_cmd!("apng")
        .args(["extract-frame", "--frame", "1", "-o"])
        .arg(&output)
        .arg(&path)
        .assert()
        .success();

    let chunks = read_png(&output);
    let kinds = chunks.iter().map(TypedChunk::kind).collect::<Vec<_>>();
    assert_eq!(
        kinds,
        [
            ChunkKind::Header,
            ChunkKind::Generic,
            ChunkKind::ImageData,
            ChunkKind::End
        ]
    );
    let header = chunks[0].header().unwrap();
    assert_eq!((header.width, header.height), (40, 20));
    assert_eq!(chunks[1].ty().as_bytes(), b"tEXt");
    assert_eq!(chunks[2].data(), PAYLOAD_1);
}

/// Precondition: A two frame APNG whose default image is the first frame.
/// Action: Run `apng extract-frame --frame 0 -o <out> <file>`.
/// Expectation: The IDAT payload of the default image is copied.
#[test]
fn extract_default_image_frame() {
    let path = write_animation("extract_frame_first/anim.png").unwrap();
    let output = tmp_path("extract_frame_first/frame0.png");

    cargo_bin_cmd!("apng")
        .args(["extract-frame", "--frame", "0", "-o"])
        .arg(&output)
        .arg(&path)
        .assert()
        .success();

    let chunks = read_png(&output);
    let header = chunks[0].header().unwrap();
    assert_eq!((header.width, header.height), (100, 50));
    assert_eq!(chunks[2].frame_payload(), Some(PAYLOAD_0));
    assert!(chunks.iter().all(|c| !matches!(
        c.kind(),
        ChunkKind::AnimationControl | ChunkKind::FrameControl | ChunkKind::FrameData
    )));
}

/// Precondition: A two frame APNG exists.
/// Action: Run `apng extract-frame --frame 5`.
/// Expectation: The command fails without creating the output.
#[test]
fn extract_frame_out_of_range() {
    let path = write_animation("extract_frame_range/anim.png").unwrap();
    let output = tmp_path("extract_frame_range/frame5.png");

    cargo_bin_cmd!("apng")
        .args(["extract-frame", "--frame", "5", "-o"])
        .arg(&output)
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("frame 5 out of range"));
    assert!(!output.exists());
}

/// Precondition: The output file already exists.
/// Action: Run `apng extract-frame` with and without `--overwrite`.
/// Expectation: The file is replaced only with `--overwrite`.
#[test]
fn extract_frame_overwrite() {
    let path = write_animation("extract_frame_overwrite/anim.png").unwrap();
    let output = tmp_path("extract_frame_overwrite/frame.png");
    fs::write(&output, "keep me").unwrap();

    cargo_bin_cmd!("apng")
        .args(["extract-frame", "--frame", "1", "-o"])
        .arg(&output)
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(fs::read(&output).unwrap(), b"keep me");

    cargo_bin_cmd!("apng")
        .args(["extract-frame", "--frame", "1", "--overwrite", "-o"])
        .arg(&output)
        .arg(&path)
        .assert()
        .success();
    assert_eq!(read_png(&output).len(), 4);
}

/// Precondition: A PNG without animation chunks.
/// Action: Run `apng extract-frame --frame 0`.
/// Expectation: The command refuses to extract.
#[test]
fn extract_frame_from_still_image() {
    let path = write_still("extract_frame_still/still.png").unwrap();
    let output = tmp_path("extract_frame_still/frame.png");

    cargo_bin_cmd!("apng")
        .args(["extract-frame", "--frame", "0", "-o"])
        .arg(&output)
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not an animated PNG"));
}
