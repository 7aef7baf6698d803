use super::{
    ChunkKind, ChunkType,
    codec::{be_u16, be_u32},
};
use crate::error::{ChunkError, UnknownValueError};

/// Semantic fields of a decoded chunk, one arm per [`ChunkKind`].
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ChunkBody {
    /// Decoded `IHDR`
    Header(ImageHeader),
    /// `IDAT`, payload kept opaque
    ImageData,
    /// `IEND`
    End,
    /// Decoded `acTL`
    AnimationControl(AnimationControl),
    /// Decoded `fcTL`
    FrameControl(FrameControl),
    /// Decoded `fdAT`
    FrameData(FrameData),
    /// Any other chunk, payload kept opaque
    Generic,
}

impl ChunkBody {
    /// Decodes the fields of a `kind` chunk out of `data`.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::MalformedVariant`] when `data` is shorter than the
    /// variant's fixed layout, or for `IHDR` not exactly 13 bytes.
    pub(crate) fn decode(kind: ChunkKind, ty: ChunkType, data: &[u8]) -> Result<Self, ChunkError> {
        let malformed = || ChunkError::MalformedVariant {
            ty,
            expected: kind.min_data_len(),
            actual: data.len(),
        };
        Ok(match kind {
            ChunkKind::Header => {
                if data.len() != ImageHeader::SIZE {
                    return Err(malformed());
                }
                Self::Header(ImageHeader::from_bytes(data).ok_or_else(malformed)?)
            }
            ChunkKind::ImageData => Self::ImageData,
            ChunkKind::End => Self::End,
            ChunkKind::AnimationControl => {
                Self::AnimationControl(AnimationControl::from_bytes(data).ok_or_else(malformed)?)
            }
            ChunkKind::FrameControl => {
                Self::FrameControl(FrameControl::from_bytes(data).ok_or_else(malformed)?)
            }
            ChunkKind::FrameData => {
                Self::FrameData(FrameData::from_bytes(data).ok_or_else(malformed)?)
            }
            ChunkKind::Generic => Self::Generic,
        })
    }

    /// Variant this body belongs to.
    #[inline]
    pub const fn kind(&self) -> ChunkKind {
        match self {
            Self::Header(_) => ChunkKind::Header,
            Self::ImageData => ChunkKind::ImageData,
            Self::End => ChunkKind::End,
            Self::AnimationControl(_) => ChunkKind::AnimationControl,
            Self::FrameControl(_) => ChunkKind::FrameControl,
            Self::FrameData(_) => ChunkKind::FrameData,
            Self::Generic => ChunkKind::Generic,
        }
    }
}

/// Image dimensions and pixel format carried by the `IHDR` chunk.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct ImageHeader {
    pub width: u32,
    pub height: u32,
    pub bit_depth: u8,
    pub color_type: u8,
    pub compression_method: u8,
    pub filter_method: u8,
    pub interlace_method: u8,
}

impl ImageHeader {
    /// Payload size of an `IHDR` chunk.
    pub const SIZE: usize = 13;

    fn from_bytes(data: &[u8]) -> Option<Self> {
        Some(Self {
            width: be_u32(data, 0)?,
            height: be_u32(data, 4)?,
            bit_depth: *data.get(8)?,
            color_type: *data.get(9)?,
            compression_method: *data.get(10)?,
            filter_method: *data.get(11)?,
            interlace_method: *data.get(12)?,
        })
    }

    /// Encodes the header into its 13-byte payload.
    ///
    /// # Examples
    /// ```
    /// use libapng::ImageHeader;
    ///
    /// let header = ImageHeader {
    ///     width: 100,
    ///     height: 50,
    ///     bit_depth: 8,
    ///     color_type: 6,
    ///     compression_method: 0,
    ///     filter_method: 0,
    ///     interlace_method: 0,
    /// };
    /// assert_eq!(
    ///     header.to_bytes(),
    ///     [0, 0, 0, 100, 0, 0, 0, 50, 8, 6, 0, 0, 0]
    /// );
    /// ```
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut data = [0; Self::SIZE];
        data[0..4].copy_from_slice(&self.width.to_be_bytes());
        data[4..8].copy_from_slice(&self.height.to_be_bytes());
        data[8] = self.bit_depth;
        data[9] = self.color_type;
        data[10] = self.compression_method;
        data[11] = self.filter_method;
        data[12] = self.interlace_method;
        data
    }
}

/// Frame count and loop count carried by the `acTL` chunk.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct AnimationControl {
    pub num_frames: u32,
    /// `0` loops forever.
    pub num_plays: u32,
}

impl AnimationControl {
    /// Payload size of an `acTL` chunk.
    pub const SIZE: usize = 8;

    fn from_bytes(data: &[u8]) -> Option<Self> {
        Some(Self {
            num_frames: be_u32(data, 0)?,
            num_plays: be_u32(data, 4)?,
        })
    }

    /// Returns `true` if the animation loops forever.
    #[inline]
    pub const fn is_infinite(&self) -> bool {
        self.num_plays == 0
    }

    /// Encodes the fields into an 8-byte payload.
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut data = [0; Self::SIZE];
        data[0..4].copy_from_slice(&self.num_frames.to_be_bytes());
        data[4..8].copy_from_slice(&self.num_plays.to_be_bytes());
        data
    }
}

/// Frame region, timing and compositing instructions carried by the `fcTL` chunk.
///
/// The dispose and blend operations are kept as raw bytes so that unknown
/// values survive a round trip; [`FrameControl::dispose`] and
/// [`FrameControl::blend`] interpret them.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct FrameControl {
    pub sequence_number: u32,
    pub width: u32,
    pub height: u32,
    pub x_offset: u32,
    pub y_offset: u32,
    pub delay_num: u16,
    pub delay_den: u16,
    pub dispose_op: u8,
    pub blend_op: u8,
}

impl FrameControl {
    /// Payload size of an `fcTL` chunk.
    pub const SIZE: usize = 26;

    fn from_bytes(data: &[u8]) -> Option<Self> {
        Some(Self {
            sequence_number: be_u32(data, 0)?,
            width: be_u32(data, 4)?,
            height: be_u32(data, 8)?,
            x_offset: be_u32(data, 12)?,
            y_offset: be_u32(data, 16)?,
            delay_num: be_u16(data, 20)?,
            delay_den: be_u16(data, 22)?,
            dispose_op: *data.get(24)?,
            blend_op: *data.get(25)?,
        })
    }

    /// Encodes the fields into a 26-byte payload.
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut data = [0; Self::SIZE];
        data[0..4].copy_from_slice(&self.sequence_number.to_be_bytes());
        data[4..8].copy_from_slice(&self.width.to_be_bytes());
        data[8..12].copy_from_slice(&self.height.to_be_bytes());
        data[12..16].copy_from_slice(&self.x_offset.to_be_bytes());
        data[16..20].copy_from_slice(&self.y_offset.to_be_bytes());
        data[20..22].copy_from_slice(&self.delay_num.to_be_bytes());
        data[22..24].copy_from_slice(&self.delay_den.to_be_bytes());
        data[24] = self.dispose_op;
        data[25] = self.blend_op;
        data
    }

    /// Dispose operation applied after the frame is shown.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored byte is not a defined operation.
    #[inline]
    pub fn dispose(&self) -> Result<DisposeOp, UnknownValueError> {
        DisposeOp::try_from(self.dispose_op)
    }

    /// Blend operation used to render the frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored byte is not a defined operation.
    #[inline]
    pub fn blend(&self) -> Result<BlendOp, UnknownValueError> {
        BlendOp::try_from(self.blend_op)
    }

    /// Frame delay in seconds. A zero denominator means 1/100 second units.
    #[inline]
    pub fn delay_secs(&self) -> f64 {
        let den = if self.delay_den == 0 {
            100
        } else {
            self.delay_den
        };
        f64::from(self.delay_num) / f64::from(den)
    }
}

/// Frame sequence number carried in front of the `fdAT` payload.
///
/// The frame's compressed pixel bytes follow it in the chunk data, see
/// [`TypedChunk::frame_payload`](crate::TypedChunk::frame_payload).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct FrameData {
    pub sequence_number: u32,
}

impl FrameData {
    /// Size of the sequence number that prefixes the frame payload.
    pub const SEQUENCE_SIZE: usize = 4;

    fn from_bytes(data: &[u8]) -> Option<Self> {
        Some(Self {
            sequence_number: be_u32(data, 0)?,
        })
    }
}

/// How the frame area is treated before rendering the next frame.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[repr(u8)]
pub enum DisposeOp {
    /// Leave the output buffer as is.
    None = 0,
    /// Clear the frame area to fully transparent black.
    Background = 1,
    /// Revert the frame area to its previous contents.
    Previous = 2,
}

impl TryFrom<u8> for DisposeOp {
    type Error = UnknownValueError;

    #[inline]
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::Background),
            2 => Ok(Self::Previous),
            value => Err(UnknownValueError(value)),
        }
    }
}

/// How the frame is combined with the output buffer.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[repr(u8)]
pub enum BlendOp {
    /// Overwrite the frame area.
    Source = 0,
    /// Alpha-composite over the frame area.
    Over = 1,
}

impl TryFrom<u8> for BlendOp {
    type Error = UnknownValueError;

    #[inline]
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Source),
            1 => Ok(Self::Over),
            value => Err(UnknownValueError(value)),
        }
    }
}
