#![allow(dead_code)]
use libapng::{
    AnimationControl, Chunk, ChunkType, FrameControl, ImageHeader, RawChunk, TypedChunk,
};

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
        blend_op: 0,
    }
}

fn fdat(sequence_number: u32, payload: &[u8]) -> RawChunk {
    let mut data = sequence_number.to_be_bytes().to_vec();
    data.extend_from_slice(payload);
    RawChunk::from_data(ChunkType::fdAT, data)
}

/// A two frame animation with a private ancillary chunk in front of the image data.
pub fn animation_chunks() -> Vec<RawChunk> {
    vec![
        TypedChunk::from(header()).into_raw(),
        TypedChunk::from(AnimationControl {
            num_frames: 2,
            num_plays: 0,
        })
        .into_raw(),
        RawChunk::from_data(ChunkType::try_from("prVt").unwrap(), b"private".to_vec()),
        TypedChunk::from(frame_control(0, 100, 50)).into_raw(),
        RawChunk::from_data(ChunkType::IDAT, PAYLOAD_0),
        TypedChunk::from(frame_control(1, 40, 20)).into_raw(),
        fdat(2, PAYLOAD_1),
        RawChunk::from_data(ChunkType::IEND, []),
    ]
}

pub fn to_stream(chunks: &[RawChunk]) -> Vec<u8> {
    let mut bytes = Vec::new();
    for chunk in chunks {
        bytes.extend_from_slice(&chunk.to_vec());
    }
    bytes
}

pub fn animation_stream() -> Vec<u8> {
    to_stream(&animation_chunks())
}

pub fn total_len(chunks: &[RawChunk]) -> usize {
    chunks.iter().map(Chunk::bytes_len).sum()
}
