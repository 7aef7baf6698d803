#![no_main]

use libapng::{Chunk, ChunkReader, ChunkType, RawChunk, ReadOptions};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: ([u8; 4], &[u8])| {
    let (ty, data) = data;
    let Ok(ty) = ChunkType::try_from(ty) else {
        return;
    };
    let chunk = RawChunk::from_data(ty, data);
    let bytes = chunk.to_vec();
    assert_eq!(bytes.len(), chunk.bytes_len());

    let options = ReadOptions::builder().verify_crc(true).build();
    let read = ChunkReader::with_options(bytes.as_slice(), options)
        .read(false)
        .map(|outcome| outcome.into_chunk());
    match read {
        Ok(Some(typed)) => assert_eq!(typed.raw(), &chunk),
        Ok(None) => unreachable!(),
        // fixed layout variants reject short payloads
        Err(e) => assert!(matches!(e, libapng::ChunkError::MalformedVariant { .. })),
    }
});
