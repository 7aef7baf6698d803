use crate::error::ChunkTypeError;
use std::fmt::{self, Debug, Display, Formatter};

/// A 4-byte chunk type code.
///
/// Each byte is an ASCII letter. Bit 5 (the lowercase bit) of each byte carries
/// a property flag, see [`ChunkType::is_critical`], [`ChunkType::is_private`],
/// [`ChunkType::is_reserved`] and [`ChunkType::is_safe_to_copy`].
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ChunkType(pub(crate) [u8; 4]);

impl ChunkType {
    // -- Critical chunks --
    /// Image header
    pub const IHDR: ChunkType = ChunkType(*b"IHDR");
    /// Image data
    pub const IDAT: ChunkType = ChunkType(*b"IDAT");
    /// Image trailer
    pub const IEND: ChunkType = ChunkType(*b"IEND");

    // -- Animation extension chunks --
    /// Animation control
    #[allow(non_upper_case_globals)]
    pub const acTL: ChunkType = ChunkType(*b"acTL");
    /// Frame control
    #[allow(non_upper_case_globals)]
    pub const fcTL: ChunkType = ChunkType(*b"fcTL");
    /// Frame data
    #[allow(non_upper_case_globals)]
    pub const fdAT: ChunkType = ChunkType(*b"fdAT");

    /// Creates a [`ChunkType`] after checking that every byte is an ASCII letter.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkTypeError::NonAsciiAlphabetic`] if any byte is not in `A-Z` or `a-z`.
    ///
    /// # Examples
    /// ```
    /// use libapng::ChunkType;
    ///
    /// assert_eq!(ChunkType::new(*b"IHDR").unwrap(), ChunkType::IHDR);
    /// assert!(ChunkType::new(*b"I1DR").is_err());
    /// ```
    #[inline]
    pub const fn new(ty: [u8; 4]) -> Result<Self, ChunkTypeError> {
        let mut i = 0;
        while i < ty.len() {
            if !ty[i].is_ascii_alphabetic() {
                return Err(ChunkTypeError::NonAsciiAlphabetic);
            }
            i += 1;
        }
        Ok(Self(ty))
    }

    /// Creates a [`ChunkType`] without checking its bytes.
    ///
    /// # Safety
    ///
    /// Callers must ensure every byte is an ASCII letter, otherwise the
    /// property accessors and [`Display`] give meaningless results.
    #[inline]
    pub const unsafe fn from_unchecked(ty: [u8; 4]) -> Self {
        Self(ty)
    }

    /// Big-endian packed integer form of the type code.
    ///
    /// # Examples
    /// ```
    /// use libapng::ChunkType;
    ///
    /// assert_eq!(ChunkType::IHDR.to_u32(), 0x4948_4452);
    /// ```
    #[inline]
    pub const fn to_u32(self) -> u32 {
        u32::from_be_bytes(self.0)
    }

    /// Unpacks a big-endian packed type code.
    ///
    /// # Errors
    ///
    /// Returns an error when the unpacked bytes are not all ASCII letters.
    #[inline]
    pub const fn from_u32(value: u32) -> Result<Self, ChunkTypeError> {
        Self::new(value.to_be_bytes())
    }

    /// Raw bytes of the type code.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// Length of the type code in bytes.
    #[allow(clippy::len_without_is_empty)]
    #[inline]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the chunk is critical (first letter uppercase).
    #[inline]
    pub const fn is_critical(&self) -> bool {
        self.0[0] & 32 == 0
    }

    /// Returns `true` if the chunk is private (second letter lowercase).
    #[inline]
    pub const fn is_private(&self) -> bool {
        self.0[1] & 32 != 0
    }

    /// Returns `true` if the reserved bit (third letter lowercase) is set.
    #[inline]
    pub const fn is_reserved(&self) -> bool {
        self.0[2] & 32 != 0
    }

    /// Returns `true` if the chunk is safe to copy when unknown (fourth letter lowercase).
    #[inline]
    pub const fn is_safe_to_copy(&self) -> bool {
        self.0[3] & 32 != 0
    }
}

impl TryFrom<[u8; 4]> for ChunkType {
    type Error = ChunkTypeError;

    #[inline]
    fn try_from(value: [u8; 4]) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ChunkType {
    type Error = ChunkTypeError;

    #[inline]
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let bytes: [u8; 4] = value
            .as_bytes()
            .try_into()
            .map_err(|_| ChunkTypeError::InvalidLength(value.len()))?;
        Self::new(bytes)
    }
}

impl Display for ChunkType {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for b in self.0 {
            if b.is_ascii_graphic() {
                write!(f, "{}", b as char)?;
            } else {
                write!(f, "\\x{b:02x}")?;
            }
        }
        Ok(())
    }
}

impl Debug for ChunkType {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ChunkType").field(&self.to_string()).finish()
    }
}
