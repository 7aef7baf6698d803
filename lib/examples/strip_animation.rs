//! Removes the animation chunks, leaving the default image as a still PNG.
use libapng::{ChunkKind, ChunkReader, ChunkWriter, read_signature};
use std::{
    fs,
    io::{self, BufReader, BufWriter},
};

fn strip<R: io::Read, W: io::Write>(mut r: R, w: W) -> io::Result<()> {
    read_signature(&mut r)?;
    let mut reader = ChunkReader::new(r);
    let mut writer = ChunkWriter::from(w);
    writer.write_signature()?;
    for chunk in reader.chunks(false) {
        let chunk = chunk?;
        match chunk.kind() {
            ChunkKind::AnimationControl | ChunkKind::FrameControl | ChunkKind::FrameData => {}
            _ => {
                writer.write_chunk(&chunk)?;
            }
        }
    }
    writer.flush()
}

fn main() -> io::Result<()> {
    let mut args = std::env::args().skip(1);
    match (args.next(), args.next()) {
        (Some(input), Some(output)) => strip(
            BufReader::new(fs::File::open(input)?),
            BufWriter::new(fs::File::create(output)?),
        ),
        _ => Err(io::Error::other("usage: strip_animation <INPUT> <OUTPUT>")),
    }
}
