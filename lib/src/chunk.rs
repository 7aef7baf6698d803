mod codec;
mod crc;
mod read;
mod registry;
mod traits;
mod types;
mod variant;
mod write;

pub(crate) use self::crc::Crc32;
pub use self::{
    read::{ChunkReader, Chunks, ReadOutcome},
    registry::ChunkKind,
    traits::*,
    types::*,
    variant::*,
    write::ChunkWriter,
};
use crate::error::ChunkError;
use std::{
    io::{self, Write},
    mem,
};

/// Minimum required size of bytes to represent [`Chunk`].
/// length:4 + chunk type:4 + data:0 + crc:4
pub const MIN_CHUNK_BYTES_SIZE: usize =
    mem::size_of::<u32>() + mem::size_of::<ChunkType>() + mem::size_of::<u32>();

/// Largest length a chunk may declare.
pub const MAX_CHUNK_DATA_LENGTH: u32 = i32::MAX as u32;

pub(crate) trait ChunkExt: Chunk {
    #[inline]
    fn write_chunk_in<W: Write>(&self, writer: &mut W) -> io::Result<usize> {
        let data = self.data();
        writer.write_all(&self.length().to_be_bytes())?;
        writer.write_all(&self.ty().0)?;
        writer.write_all(data)?;
        writer.write_all(&self.crc().to_be_bytes())?;
        Ok(MIN_CHUNK_BYTES_SIZE + data.len())
    }

    /// Convert the provided `Chunk` instance into a `Vec<u8>`.
    #[inline]
    fn to_bytes(&self) -> Vec<u8> {
        let mut vec = Vec::with_capacity(MIN_CHUNK_BYTES_SIZE + self.data().len());
        vec.extend_from_slice(&self.length().to_be_bytes());
        vec.extend_from_slice(&self.ty().0);
        vec.extend_from_slice(self.data());
        vec.extend_from_slice(&self.crc().to_be_bytes());
        vec
    }

    /// Checksum computed from the type code and data, ignoring any stored value.
    #[inline]
    fn computed_crc(&self) -> u32 {
        (self.ty(), self.data()).crc()
    }
}

impl<T> ChunkExt for T where T: Chunk {}

#[inline]
fn data_length(len: usize) -> u32 {
    debug_assert!(
        len <= MAX_CHUNK_DATA_LENGTH as usize,
        "chunk data of {len} bytes exceeds the maximum of 2^31 - 1"
    );
    len as u32
}

/// Represents a raw chunk
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct RawChunk {
    pub(crate) length: u32,
    pub(crate) ty: ChunkType,
    pub(crate) data: Vec<u8>,
    pub(crate) crc: u32,
}

impl RawChunk {
    /// Create a new [`RawChunk`] from given [`ChunkType`] and bytes.
    ///
    /// `data` must not be longer than [`MAX_CHUNK_DATA_LENGTH`].
    ///
    /// # Examples
    /// ```
    /// use libapng::{Chunk, ChunkType, RawChunk};
    ///
    /// let chunk = RawChunk::from_data(ChunkType::IEND, []);
    ///
    /// assert_eq!(chunk.length(), 0);
    /// assert_eq!(chunk.ty(), ChunkType::IEND);
    /// assert_eq!(chunk.data(), &[]);
    /// assert_eq!(chunk.crc(), 0xAE42_6082);
    /// ```
    #[inline]
    pub fn from_data<T: Into<Vec<u8>>>(ty: ChunkType, data: T) -> Self {
        #[inline]
        fn inner(ty: ChunkType, data: Vec<u8>) -> RawChunk {
            let chunk = (ty, &data[..]);
            RawChunk {
                length: data_length(data.len()),
                crc: chunk.crc(),
                ty,
                data,
            }
        }
        inner(ty, data.into())
    }

    /// Create a [`RawChunk`] carrying an explicit checksum, as found on the wire.
    ///
    /// `data` must not be longer than [`MAX_CHUNK_DATA_LENGTH`].
    #[inline]
    pub fn with_crc<T: Into<Vec<u8>>>(ty: ChunkType, data: T, crc: u32) -> Self {
        let data = data.into();
        Self {
            length: data_length(data.len()),
            ty,
            data,
            crc,
        }
    }

    /// Serializes the chunk into a new `Vec<u8>`.
    #[inline]
    pub fn to_vec(&self) -> Vec<u8> {
        self.to_bytes()
    }
}

impl Chunk for RawChunk {
    #[inline]
    fn length(&self) -> u32 {
        self.length
    }

    #[inline]
    fn ty(&self) -> ChunkType {
        self.ty
    }

    #[inline]
    fn data(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    fn crc(&self) -> u32 {
        self.crc
    }
}

impl<T: AsRef<[u8]>> Chunk for (ChunkType, T) {
    #[inline]
    fn ty(&self) -> ChunkType {
        self.0
    }

    #[inline]
    fn data(&self) -> &[u8] {
        self.1.as_ref()
    }
}

impl<T: Chunk> Chunk for &T {
    #[inline]
    fn length(&self) -> u32 {
        (*self).length()
    }

    #[inline]
    fn ty(&self) -> ChunkType {
        (*self).ty()
    }

    #[inline]
    fn data(&self) -> &[u8] {
        (*self).data()
    }

    #[inline]
    fn crc(&self) -> u32 {
        (*self).crc()
    }
}

/// A chunk together with its variant and decoded fields.
///
/// The variant is fixed by the type code. When the payload was skipped while
/// reading, [`TypedChunk::body`] is `None` and the data is empty while
/// [`Chunk::length`] still reports the declared length.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypedChunk {
    raw: RawChunk,
    kind: ChunkKind,
    body: Option<ChunkBody>,
}

impl TypedChunk {
    /// Decodes the variant fields of an in-memory chunk.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::MalformedVariant`] if the payload is too short for
    /// the variant resolved from the type code.
    ///
    /// # Examples
    /// ```
    /// use libapng::{ChunkType, RawChunk, TypedChunk};
    ///
    /// let raw = RawChunk::from_data(ChunkType::acTL, [0, 0, 0, 2, 0, 0, 0, 0]);
    /// let chunk = TypedChunk::from_raw(raw).unwrap();
    /// assert_eq!(chunk.animation_control().unwrap().num_frames, 2);
    /// ```
    pub fn from_raw(raw: RawChunk) -> Result<Self, ChunkError> {
        let kind = ChunkKind::resolve(raw.ty);
        let body = ChunkBody::decode(kind, raw.ty, &raw.data)?;
        Ok(Self {
            raw,
            kind,
            body: Some(body),
        })
    }

    pub(crate) fn skipped(length: u32, ty: ChunkType, kind: ChunkKind) -> Self {
        Self {
            raw: RawChunk {
                length,
                ty,
                data: Vec::new(),
                crc: 0,
            },
            kind,
            body: None,
        }
    }

    /// The underlying wire record.
    #[inline]
    pub fn raw(&self) -> &RawChunk {
        &self.raw
    }

    /// Consumes the chunk and returns the underlying wire record.
    #[inline]
    pub fn into_raw(self) -> RawChunk {
        self.raw
    }

    /// Variant resolved from the type code.
    #[inline]
    pub fn kind(&self) -> ChunkKind {
        self.kind
    }

    /// Decoded fields, `None` if the payload was skipped.
    #[inline]
    pub fn body(&self) -> Option<&ChunkBody> {
        self.body.as_ref()
    }

    /// Returns `true` if the payload was skipped while reading.
    #[inline]
    pub fn is_skipped(&self) -> bool {
        self.body.is_none()
    }

    /// Decoded `IHDR` fields.
    #[inline]
    pub fn header(&self) -> Option<&ImageHeader> {
        match &self.body {
            Some(ChunkBody::Header(h)) => Some(h),
            _ => None,
        }
    }

    /// Decoded `acTL` fields.
    #[inline]
    pub fn animation_control(&self) -> Option<&AnimationControl> {
        match &self.body {
            Some(ChunkBody::AnimationControl(a)) => Some(a),
            _ => None,
        }
    }

    /// Decoded `fcTL` fields.
    #[inline]
    pub fn frame_control(&self) -> Option<&FrameControl> {
        match &self.body {
            Some(ChunkBody::FrameControl(f)) => Some(f),
            _ => None,
        }
    }

    /// Decoded `fdAT` sequence number.
    #[inline]
    pub fn frame_data(&self) -> Option<&FrameData> {
        match &self.body {
            Some(ChunkBody::FrameData(f)) => Some(f),
            _ => None,
        }
    }

    /// Compressed pixel bytes of an `IDAT` or `fdAT` chunk.
    ///
    /// For `fdAT` the leading sequence number is excluded.
    #[inline]
    pub fn frame_payload(&self) -> Option<&[u8]> {
        match &self.body {
            Some(ChunkBody::ImageData) => Some(&self.raw.data),
            Some(ChunkBody::FrameData(_)) => Some(&self.raw.data[FrameData::SEQUENCE_SIZE..]),
            _ => None,
        }
    }

    /// Re-frames the pixel payload of this chunk as an `IDAT` chunk with a fresh checksum.
    ///
    /// Returns `None` unless this is a decoded `IDAT` or `fdAT` chunk.
    #[inline]
    pub fn to_image_data(&self) -> Option<RawChunk> {
        self.frame_payload()
            .map(|payload| RawChunk::from_data(ChunkType::IDAT, payload))
    }

    /// Serializes the chunk into `dst` starting at `offset` and returns the offset past it.
    ///
    /// The stored checksum is written as is. A skipped chunk has no data to
    /// write, so only its length, type and checksum fields are emitted.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::BufferTooSmall`] if `dst` cannot hold the chunk at `offset`.
    ///
    /// # Examples
    /// ```
    /// use libapng::{Chunk, ChunkType, RawChunk, TypedChunk};
    ///
    /// let chunk = TypedChunk::from_raw(RawChunk::from_data(ChunkType::IEND, [])).unwrap();
    /// let mut buf = vec![0; chunk.bytes_len()];
    /// assert_eq!(chunk.copy_to_slice(&mut buf, 0).unwrap(), 12);
    /// assert_eq!(&buf[4..8], b"IEND");
    /// ```
    pub fn copy_to_slice(&self, dst: &mut [u8], offset: usize) -> Result<usize, ChunkError> {
        let data = &self.raw.data;
        let chunk_len = MIN_CHUNK_BYTES_SIZE + data.len();
        offset
            .checked_add(chunk_len)
            .filter(|required| *required <= dst.len())
            .ok_or(ChunkError::BufferTooSmall {
                required: offset.saturating_add(chunk_len),
                available: dst.len(),
            })?;
        let mut offset = codec::put_u32(dst, offset, self.raw.length);
        offset = codec::put_u32(dst, offset, self.raw.ty.to_u32());
        if !data.is_empty() {
            dst[offset..offset + data.len()].copy_from_slice(data);
            offset += data.len();
        }
        Ok(codec::put_u32(dst, offset, self.raw.crc))
    }
}

impl Chunk for TypedChunk {
    #[inline]
    fn length(&self) -> u32 {
        self.raw.length
    }

    #[inline]
    fn ty(&self) -> ChunkType {
        self.raw.ty
    }

    #[inline]
    fn data(&self) -> &[u8] {
        &self.raw.data
    }

    #[inline]
    fn crc(&self) -> u32 {
        self.raw.crc
    }
}

impl From<ImageHeader> for TypedChunk {
    #[inline]
    fn from(value: ImageHeader) -> Self {
        Self {
            raw: RawChunk::from_data(ChunkType::IHDR, value.to_bytes()),
            kind: ChunkKind::Header,
            body: Some(ChunkBody::Header(value)),
        }
    }
}

impl From<AnimationControl> for TypedChunk {
    #[inline]
    fn from(value: AnimationControl) -> Self {
        Self {
            raw: RawChunk::from_data(ChunkType::acTL, value.to_bytes()),
            kind: ChunkKind::AnimationControl,
            body: Some(ChunkBody::AnimationControl(value)),
        }
    }
}

impl From<FrameControl> for TypedChunk {
    #[inline]
    fn from(value: FrameControl) -> Self {
        Self {
            raw: RawChunk::from_data(ChunkType::fcTL, value.to_bytes()),
            kind: ChunkKind::FrameControl,
            body: Some(ChunkBody::FrameControl(value)),
        }
    }
}
