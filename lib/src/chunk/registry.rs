use super::ChunkType;

/// Variant of a chunk, selected from its type code.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum ChunkKind {
    /// `IHDR`
    Header,
    /// `IDAT`
    ImageData,
    /// `IEND`
    End,
    /// `acTL`
    AnimationControl,
    /// `fcTL`
    FrameControl,
    /// `fdAT`
    FrameData,
    /// Any other type code. The payload is kept verbatim.
    Generic,
}

/// Known type codes. Anything missing here resolves to [`ChunkKind::Generic`].
const REGISTRY: [(ChunkType, ChunkKind); 6] = [
    (ChunkType::IHDR, ChunkKind::Header),
    (ChunkType::IDAT, ChunkKind::ImageData),
    (ChunkType::IEND, ChunkKind::End),
    (ChunkType::acTL, ChunkKind::AnimationControl),
    (ChunkType::fcTL, ChunkKind::FrameControl),
    (ChunkType::fdAT, ChunkKind::FrameData),
];

impl ChunkKind {
    /// Looks up the variant for `ty`.
    ///
    /// Unknown codes are never rejected.
    ///
    /// # Examples
    /// ```
    /// use libapng::{ChunkKind, ChunkType};
    ///
    /// assert_eq!(ChunkKind::resolve(ChunkType::fcTL), ChunkKind::FrameControl);
    /// assert_eq!(
    ///     ChunkKind::resolve(ChunkType::new(*b"tEXt").unwrap()),
    ///     ChunkKind::Generic
    /// );
    /// ```
    #[inline]
    pub fn resolve(ty: ChunkType) -> Self {
        let code = ty.to_u32();
        REGISTRY
            .iter()
            .find(|(known, _)| known.to_u32() == code)
            .map_or(Self::Generic, |(_, kind)| *kind)
    }

    /// Type code registered for this variant, `None` for [`ChunkKind::Generic`].
    #[inline]
    pub fn chunk_type(self) -> Option<ChunkType> {
        REGISTRY
            .iter()
            .find(|(_, kind)| *kind == self)
            .map(|(ty, _)| *ty)
    }

    /// Returns `true` for variants carrying compressed pixel data.
    ///
    /// Only these payloads are dropped when reading with `skip_data`.
    #[inline]
    pub const fn is_bulk(self) -> bool {
        matches!(self, Self::ImageData | Self::FrameData)
    }

    /// Fixed minimum payload size of the variant.
    #[inline]
    pub(crate) const fn min_data_len(self) -> usize {
        match self {
            Self::Header => super::variant::ImageHeader::SIZE,
            Self::AnimationControl => super::variant::AnimationControl::SIZE,
            Self::FrameControl => super::variant::FrameControl::SIZE,
            Self::FrameData => super::variant::FrameData::SEQUENCE_SIZE,
            Self::ImageData | Self::End | Self::Generic => 0,
        }
    }
}
