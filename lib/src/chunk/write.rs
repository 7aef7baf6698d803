use crate::{
    chunk::{Chunk, ChunkExt, ChunkType},
    signature::PNG_SIGNATURE,
};
use std::io::{self, Write};

/// Serializes chunks into a byte sink.
///
/// Chunks are written exactly as stored, including the stored checksum.
///
/// # Examples
/// ```
/// use libapng::{ChunkType, ChunkWriter};
///
/// let mut writer = ChunkWriter::from(Vec::new());
/// assert_eq!(writer.write_data(ChunkType::IEND, &[]).unwrap(), 12);
/// assert_eq!(
///     writer.into_inner(),
///     [0, 0, 0, 0, b'I', b'E', b'N', b'D', 0xAE, 0x42, 0x60, 0x82]
/// );
/// ```
pub struct ChunkWriter<W> {
    w: W,
}

impl<W> ChunkWriter<W> {
    /// Gets a reference to the underlying sink.
    #[inline]
    pub fn get_ref(&self) -> &W {
        &self.w
    }

    /// Unwraps this writer, returning the underlying sink.
    #[inline]
    pub fn into_inner(self) -> W {
        self.w
    }
}

impl<W> From<W> for ChunkWriter<W>
where
    W: Write,
{
    #[inline]
    fn from(writer: W) -> Self {
        Self { w: writer }
    }
}

impl<W: Write> ChunkWriter<W> {
    /// Writes the 8-byte PNG signature.
    #[inline]
    pub fn write_signature(&mut self) -> io::Result<usize> {
        self.w.write_all(PNG_SIGNATURE)?;
        Ok(PNG_SIGNATURE.len())
    }

    /// Writes `chunk` and returns the number of bytes written.
    ///
    /// The data field is emitted only when present, so a chunk whose payload
    /// was skipped while reading produces its length, type and checksum only.
    #[inline]
    pub fn write_chunk<C: Chunk>(&mut self, chunk: C) -> io::Result<usize> {
        chunk.write_chunk_in(&mut self.w)
    }

    /// Writes a chunk built from `ty` and `data` with a freshly computed checksum.
    #[inline]
    pub fn write_data(&mut self, ty: ChunkType, data: &[u8]) -> io::Result<usize> {
        self.write_chunk((ty, data))
    }

    /// Flushes the underlying sink.
    #[inline]
    pub fn flush(&mut self) -> io::Result<()> {
        self.w.flush()
    }
}
