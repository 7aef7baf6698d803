use libapng::{
    AnimationControl, ChunkType, ChunkWriter, FrameControl, ImageHeader, RawChunk, TypedChunk,
};
use std::{fs, io, path::PathBuf};

pub const PAYLOAD_0: &[u8] = &[0x78, 0x9C, 0x63, 0x60, 0x00, 0x00, 0x00, 0x02, 0x00, 0x01];
pub const PAYLOAD_1: &[u8] = &[0x78, 0x9C, 0x63, 0x68, 0x00, 0x00, 0x00, 0x82, 0x00, 0x81];

pub fn header() -> ImageHeader {
    ImageHeader {
        width: 100,
        height: 50,
        bit_depth: 8,
        color_type: 6,
        compression_method: 0,
        filter_method: 0,
        interlace_method: 0,
    }
}

pub fn frame_control(sequence_number: u32, width: u32, height: u32) -> FrameControl {
    FrameControl {
        sequence_number,
        width,
        height,
        x_offset: 0,
        y_offset: 0,
        delay_num: 1,
        delay_den: 10,
        dispose_op: 0,
        blend_op: 1,
    }
}

pub fn text_chunk() -> RawChunk {
    RawChunk::from_data(ChunkType::try_from("tEXt").unwrap(), b"Comment\0apng".to_vec())
}

/// Returns a fresh path under the cargo target tmp dir, creating its parent.
pub fn tmp_path(name: &str) -> PathBuf {
    let path = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let _ = fs::remove_file(&path);
    path
}

/// Writes a two frame animation whose default image is the first frame.
pub fn write_animation(name: &str) -> io::Result<PathBuf> {
    let path = tmp_path(name);
    let mut fdat = 2u32.to_be_bytes().to_vec();
    fdat.extend_from_slice(PAYLOAD_1);

    let mut writer = ChunkWriter::from(Vec::new());
    writer.write_signature()?;
    writer.write_chunk(TypedChunk::from(header()))?;
    writer.write_chunk(TypedChunk::from(AnimationControl {
        num_frames: 2,
        num_plays: 0,
    }))?;
    writer.write_chunk(text_chunk())?;
    writer.write_chunk(TypedChunk::from(frame_control(0, 100, 50)))?;
    writer.write_data(ChunkType::IDAT, PAYLOAD_0)?;
    writer.write_chunk(TypedChunk::from(frame_control(1, 40, 20)))?;
    writer.write_data(ChunkType::fdAT, &fdat)?;
    writer.write_data(ChunkType::IEND, &[])?;
    fs::write(&path, writer.into_inner())?;
    Ok(path)
}

/// Writes a PNG without animation chunks.
pub fn write_still(name: &str) -> io::Result<PathBuf> {
    let path = tmp_path(name);
    let mut writer = ChunkWriter::from(Vec::new());
    writer.write_signature()?;
    writer.write_chunk(TypedChunk::from(header()))?;
    writer.write_data(ChunkType::IDAT, PAYLOAD_0)?;
    writer.write_data(ChunkType::IEND, &[])?;
    fs::write(&path, writer.into_inner())?;
    Ok(path)
}
