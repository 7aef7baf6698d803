use crate::chunk::{ChunkType, TypedChunk};
use std::{
    fmt::{self, Display, Formatter},
    io,
};

/// Unknown value error.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct UnknownValueError(pub(crate) u8);

impl Display for UnknownValueError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "unknown value {}", self.0)
    }
}

impl std::error::Error for UnknownValueError {}

/// Reason a 4-byte sequence is not a well-formed chunk type code.
#[derive(thiserror::Error, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum ChunkTypeError {
    /// A byte is outside `A-Z` and `a-z`.
    #[error("chunk type must consist of ASCII letters")]
    NonAsciiAlphabetic,
    /// The source did not have exactly four bytes.
    #[error("chunk type must be 4 bytes, got {0}")]
    InvalidLength(usize),
}

/// Field of the chunk framing being read when a short read happened.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum ChunkField {
    /// 4-byte length prefix
    Length,
    /// 4-byte type code
    Type,
    /// Payload
    Data,
    /// 4-byte trailing checksum
    Crc,
}

impl Display for ChunkField {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Length => "length",
            Self::Type => "chunk type",
            Self::Data => "chunk data",
            Self::Crc => "crc",
        })
    }
}

/// Errors raised while reading or writing chunks.
#[derive(thiserror::Error, Debug)]
pub enum ChunkError {
    /// The underlying byte source failed.
    #[error(transparent)]
    Stream(#[from] io::Error),
    /// The source ended inside a chunk.
    #[error("truncated chunk: expected {expected} bytes of {field}, got {actual}")]
    Truncated {
        field: ChunkField,
        expected: u64,
        actual: u64,
    },
    /// A known chunk's payload is shorter than its fixed layout.
    #[error("malformed {ty} chunk: expected {expected} bytes of data, got {actual}")]
    MalformedVariant {
        ty: ChunkType,
        expected: usize,
        actual: usize,
    },
    /// The stored checksum does not match the computed one.
    ///
    /// The decoded chunk is returned so the caller can decide to continue with it.
    #[error("crc mismatch in {} chunk: stored {:#010x}, computed {computed:#010x}", .chunk.raw().ty, .chunk.raw().crc)]
    CrcMismatch {
        chunk: Box<TypedChunk>,
        computed: u32,
    },
    /// The type code is not made of ASCII letters.
    #[error("invalid chunk type: {0}")]
    InvalidChunkType(#[from] ChunkTypeError),
    /// The declared length exceeds 2^31 - 1.
    #[error("chunk length {0} exceeds the maximum of 2^31 - 1")]
    LengthOverflow(u32),
    /// The destination slice cannot hold the serialized chunk.
    #[error("buffer too small: {required} bytes required, {available} available")]
    BufferTooSmall { required: usize, available: usize },
}

impl ChunkError {
    /// Returns `true` if the error leaves a usable chunk behind.
    #[inline]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::CrcMismatch { .. })
    }

    /// Takes the best-effort chunk out of a recoverable error.
    #[inline]
    pub fn into_chunk(self) -> Option<TypedChunk> {
        match self {
            Self::CrcMismatch { chunk, .. } => Some(*chunk),
            _ => None,
        }
    }
}

impl From<ChunkError> for io::Error {
    #[inline]
    fn from(value: ChunkError) -> Self {
        match value {
            ChunkError::Stream(e) => e,
            e @ ChunkError::Truncated { .. } => io::Error::new(io::ErrorKind::UnexpectedEof, e),
            e @ ChunkError::BufferTooSmall { .. } => io::Error::new(io::ErrorKind::WriteZero, e),
            e => io::Error::new(io::ErrorKind::InvalidData, e),
        }
    }
}
