#![no_main]

use libapng::{ChunkReader, ChunkWriter, ReadOptions};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&[u8], bool)| {
    let (data, skip_data) = data;
    let options = ReadOptions::builder().validate_type(false).build();
    let mut reader = ChunkReader::with_options(data, options);
    let chunks = reader
        .chunks(skip_data)
        .map_while(Result::ok)
        .collect::<Vec<_>>();
    if skip_data {
        return;
    }
    let mut writer = ChunkWriter::from(Vec::new());
    for chunk in &chunks {
        writer.write_chunk(chunk).unwrap();
    }
    let written = writer.into_inner();
    assert_eq!(written, data[..written.len()]);
});
