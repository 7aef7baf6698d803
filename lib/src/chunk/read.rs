use crate::{
    cancel::CancelFlag,
    chunk::{
        ChunkExt, ChunkKind, ChunkType, MAX_CHUNK_DATA_LENGTH, RawChunk, TypedChunk,
    },
    error::{ChunkError, ChunkField},
    options::ReadOptions,
};
#[cfg(feature = "unstable-async")]
use futures_io::AsyncRead;
#[cfg(feature = "unstable-async")]
use futures_util::AsyncReadExt;
use std::{
    io::{self, Read},
    mem,
};

/// Result of a single [`ChunkReader::read`] call.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ReadOutcome {
    /// A chunk was read.
    Chunk(TypedChunk),
    /// The source ended cleanly between chunks.
    EndOfInput,
    /// The cancel flag was set. No bytes were consumed.
    Cancelled,
}

impl ReadOutcome {
    /// Returns the chunk, if one was read.
    #[inline]
    pub fn into_chunk(self) -> Option<TypedChunk> {
        match self {
            Self::Chunk(chunk) => Some(chunk),
            Self::EndOfInput | Self::Cancelled => None,
        }
    }
}

/// Streaming chunk decoder.
///
/// Each reader is one decode session: it owns its source and the scratch
/// buffer used for the 4-byte fields, so independent readers can run on
/// separate threads without coordination.
///
/// # Examples
/// ```
/// use libapng::{Chunk, ChunkReader, ChunkType, ReadOutcome};
///
/// let bytes = [0, 0, 0, 0, b'I', b'E', b'N', b'D', 0xAE, 0x42, 0x60, 0x82];
/// let mut reader = ChunkReader::new(&bytes[..]);
/// let ReadOutcome::Chunk(chunk) = reader.read(false).unwrap() else {
///     unreachable!()
/// };
/// assert_eq!(chunk.raw().ty(), ChunkType::IEND);
/// assert_eq!(reader.read(false).unwrap(), ReadOutcome::EndOfInput);
/// ```
pub struct ChunkReader<R> {
    r: R,
    scratch: [u8; mem::size_of::<u32>()],
    options: ReadOptions,
    cancel: Option<CancelFlag>,
}

impl<R> ChunkReader<R> {
    /// Creates a reader with default [`ReadOptions`].
    #[inline]
    pub fn new(reader: R) -> Self {
        Self::with_options(reader, ReadOptions::default())
    }

    /// Creates a reader with the given [`ReadOptions`].
    #[inline]
    pub fn with_options(reader: R, options: ReadOptions) -> Self {
        Self {
            r: reader,
            scratch: [0; mem::size_of::<u32>()],
            options,
            cancel: None,
        }
    }

    /// Attaches a cancel flag checked before every chunk.
    #[inline]
    pub fn with_cancel_flag(mut self, flag: CancelFlag) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Options in effect for this reader.
    #[inline]
    pub fn options(&self) -> &ReadOptions {
        &self.options
    }

    /// Gets a reference to the underlying source.
    #[inline]
    pub fn get_ref(&self) -> &R {
        &self.r
    }

    /// Gets a mutable reference to the underlying source.
    #[inline]
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.r
    }

    /// Unwraps this reader, returning the underlying source.
    #[inline]
    pub fn into_inner(self) -> R {
        self.r
    }

    #[inline]
    fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelFlag::is_cancelled)
    }

    fn check_length(&self, length: u32) -> Result<u32, ChunkError> {
        if length > MAX_CHUNK_DATA_LENGTH {
            return Err(ChunkError::LengthOverflow(length));
        }
        Ok(length)
    }

    fn check_type(&self, ty: [u8; 4]) -> Result<(ChunkType, ChunkKind), ChunkError> {
        let ty = if self.options.validate_type() {
            ChunkType::new(ty)?
        } else {
            ChunkType(ty)
        };
        Ok((ty, ChunkKind::resolve(ty)))
    }

    fn finish(&self, raw: RawChunk) -> Result<TypedChunk, ChunkError> {
        let chunk = TypedChunk::from_raw(raw)?;
        if self.options.verify_crc() {
            let computed = chunk.computed_crc();
            if computed != chunk.raw().crc {
                log::debug!(
                    "crc mismatch in {} chunk: stored {:#010x}, computed {computed:#010x}",
                    chunk.raw().ty,
                    chunk.raw().crc
                );
                return Err(ChunkError::CrcMismatch {
                    chunk: Box::new(chunk),
                    computed,
                });
            }
        }
        Ok(chunk)
    }
}

impl<R: Read> ChunkReader<R> {
    /// Reads the next chunk.
    ///
    /// When `skip_data` is `true`, the payload and checksum of `IDAT` and
    /// `fdAT` chunks are stepped over without being kept; the returned chunk
    /// then has empty data and no decoded body.
    ///
    /// # Errors
    ///
    /// - [`ChunkError::Truncated`] if the source ends inside a chunk.
    /// - [`ChunkError::Stream`] if the source fails.
    /// - [`ChunkError::MalformedVariant`] if a known chunk's payload is too short.
    /// - [`ChunkError::CrcMismatch`] if checksum verification is enabled and fails.
    /// - [`ChunkError::InvalidChunkType`] or [`ChunkError::LengthOverflow`] on a
    ///   corrupt header.
    pub fn read(&mut self, skip_data: bool) -> Result<ReadOutcome, ChunkError> {
        if self.is_cancelled() {
            log::debug!("chunk reading cancelled");
            return Ok(ReadOutcome::Cancelled);
        }
        let n = read_full(&mut self.r, &mut self.scratch)?;
        if n == 0 {
            return Ok(ReadOutcome::EndOfInput);
        }
        let length = u32::from_be_bytes(short_read(ChunkField::Length, n, self.scratch)?);
        let length = self.check_length(length)?;

        let n = read_full(&mut self.r, &mut self.scratch)?;
        let (ty, kind) = self.check_type(short_read(ChunkField::Type, n, self.scratch)?)?;
        log::trace!("read {ty} chunk header, length {length}");

        if skip_data && kind.is_bulk() {
            let expected = u64::from(length) + mem::size_of::<u32>() as u64;
            let skipped = io::copy(&mut (&mut self.r).take(expected), &mut io::sink())?;
            if skipped < expected {
                return Err(skip_truncated(length, skipped));
            }
            log::debug!("skipped {expected} bytes of {ty} chunk");
            return Ok(ReadOutcome::Chunk(TypedChunk::skipped(length, ty, kind)));
        }

        let mut data = Vec::new();
        let n = (&mut self.r).take(u64::from(length)).read_to_end(&mut data)?;
        if n < length as usize {
            return Err(ChunkError::Truncated {
                field: ChunkField::Data,
                expected: u64::from(length),
                actual: n as u64,
            });
        }
        let n = read_full(&mut self.r, &mut self.scratch)?;
        let crc = u32::from_be_bytes(short_read(ChunkField::Crc, n, self.scratch)?);

        let raw = RawChunk {
            length,
            ty,
            data,
            crc,
        };
        self.finish(raw).map(ReadOutcome::Chunk)
    }

    /// Returns an iterator reading chunks until the end of input or cancellation.
    ///
    /// The iterator stops after the first unrecoverable error.
    #[inline]
    pub fn chunks(&mut self, skip_data: bool) -> Chunks<'_, R> {
        Chunks {
            reader: self,
            skip_data,
            done: false,
        }
    }
}

#[cfg(feature = "unstable-async")]
impl<R: AsyncRead + Unpin> ChunkReader<R> {
    /// Reads the next chunk from an async source.
    ///
    /// Behaves exactly like [`ChunkReader::read`].
    ///
    /// # Errors
    ///
    /// Same as [`ChunkReader::read`].
    pub async fn read_async(&mut self, skip_data: bool) -> Result<ReadOutcome, ChunkError> {
        if self.is_cancelled() {
            log::debug!("chunk reading cancelled");
            return Ok(ReadOutcome::Cancelled);
        }
        let n = read_full_async(&mut self.r, &mut self.scratch).await?;
        if n == 0 {
            return Ok(ReadOutcome::EndOfInput);
        }
        let length = u32::from_be_bytes(short_read(ChunkField::Length, n, self.scratch)?);
        let length = self.check_length(length)?;

        let n = read_full_async(&mut self.r, &mut self.scratch).await?;
        let (ty, kind) = self.check_type(short_read(ChunkField::Type, n, self.scratch)?)?;
        log::trace!("read {ty} chunk header, length {length}");

        if skip_data && kind.is_bulk() {
            let expected = u64::from(length) + mem::size_of::<u32>() as u64;
            let skipped =
                futures_util::io::copy((&mut self.r).take(expected), &mut futures_util::io::sink())
                    .await?;
            if skipped < expected {
                return Err(skip_truncated(length, skipped));
            }
            log::debug!("skipped {expected} bytes of {ty} chunk");
            return Ok(ReadOutcome::Chunk(TypedChunk::skipped(length, ty, kind)));
        }

        let mut data = Vec::new();
        let n = (&mut self.r)
            .take(u64::from(length))
            .read_to_end(&mut data)
            .await?;
        if n < length as usize {
            return Err(ChunkError::Truncated {
                field: ChunkField::Data,
                expected: u64::from(length),
                actual: n as u64,
            });
        }
        let n = read_full_async(&mut self.r, &mut self.scratch).await?;
        let crc = u32::from_be_bytes(short_read(ChunkField::Crc, n, self.scratch)?);

        let raw = RawChunk {
            length,
            ty,
            data,
            crc,
        };
        self.finish(raw).map(ReadOutcome::Chunk)
    }
}

impl<R> From<R> for ChunkReader<R> {
    #[inline]
    fn from(reader: R) -> Self {
        Self::new(reader)
    }
}

/// Iterator over the chunks of a [`ChunkReader`], created by [`ChunkReader::chunks`].
pub struct Chunks<'r, R> {
    reader: &'r mut ChunkReader<R>,
    skip_data: bool,
    done: bool,
}

impl<R: Read> Iterator for Chunks<'_, R> {
    type Item = Result<TypedChunk, ChunkError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.reader.read(self.skip_data) {
            Ok(ReadOutcome::Chunk(chunk)) => Some(Ok(chunk)),
            Ok(ReadOutcome::EndOfInput | ReadOutcome::Cancelled) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = !e.is_recoverable();
                Some(Err(e))
            }
        }
    }
}

impl<R: Read> std::iter::FusedIterator for Chunks<'_, R> {}

/// Reads until `buf` is full or the source ends, returning the number of bytes read.
fn read_full<R: Read>(r: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match r.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

#[cfg(feature = "unstable-async")]
async fn read_full_async<R: AsyncRead + Unpin>(r: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match r.read(&mut buf[filled..]).await {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

#[inline]
fn short_read(field: ChunkField, n: usize, buf: [u8; 4]) -> Result<[u8; 4], ChunkError> {
    if n < buf.len() {
        return Err(ChunkError::Truncated {
            field,
            expected: buf.len() as u64,
            actual: n as u64,
        });
    }
    Ok(buf)
}

fn skip_truncated(length: u32, skipped: u64) -> ChunkError {
    let length = u64::from(length);
    if skipped < length {
        ChunkError::Truncated {
            field: ChunkField::Data,
            expected: length,
            actual: skipped,
        }
    } else {
        ChunkError::Truncated {
            field: ChunkField::Crc,
            expected: mem::size_of::<u32>() as u64,
            actual: skipped - length,
        }
    }
}
