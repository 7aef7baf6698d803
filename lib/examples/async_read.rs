use libapng::{ChunkReader, ReadOutcome, prelude::*, read_signature};
use std::io;
use tokio_util::compat::TokioAsyncReadCompatExt;

#[tokio::main]
async fn main() -> io::Result<()> {
    let path = std::env::args()
        .nth(1)
        .ok_or_else(|| io::Error::other("usage: async_read <FILE>"))?;
    let bytes = tokio::fs::read(path).await?;
    let mut source = bytes.as_slice();
    read_signature(&mut source)?;
    let mut reader = ChunkReader::new(source.compat());
    while let ReadOutcome::Chunk(chunk) = reader.read_async(true).await? {
        println!("{} {:?} {}", chunk.ty(), chunk.kind(), chunk.length());
    }
    Ok(())
}
