/// Options for reading chunks.
///
/// # Examples
/// ```
/// use libapng::ReadOptions;
///
/// let options = ReadOptions::builder().verify_crc(true).build();
/// assert!(options.verify_crc());
/// assert!(options.validate_type());
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct ReadOptions {
    verify_crc: bool,
    validate_type: bool,
}

impl ReadOptions {
    /// Returns a builder for [ReadOptions].
    ///
    /// # Returns
    ///
    /// [ReadOptionsBuilder]: Builder object for [ReadOptions].
    #[inline]
    pub const fn builder() -> ReadOptionsBuilder {
        ReadOptionsBuilder::new()
    }

    /// Converts [ReadOptions] into a [ReadOptionsBuilder].
    #[inline]
    pub fn into_builder(self) -> ReadOptionsBuilder {
        self.into()
    }

    /// Whether the stored checksum is compared against the payload.
    #[inline]
    pub const fn verify_crc(&self) -> bool {
        self.verify_crc
    }

    /// Whether type codes must consist of ASCII letters.
    #[inline]
    pub const fn validate_type(&self) -> bool {
        self.validate_type
    }
}

impl Default for ReadOptions {
    #[inline]
    fn default() -> Self {
        ReadOptionsBuilder::new().build()
    }
}

/// A builder for creating [`ReadOptions`].
///
/// # Examples
///
/// ```
/// use libapng::ReadOptions;
///
/// let read_options = ReadOptions::builder()
///     .verify_crc(true)
///     .validate_type(false)
///     .build();
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct ReadOptionsBuilder {
    verify_crc: bool,
    validate_type: bool,
}

impl From<ReadOptions> for ReadOptionsBuilder {
    #[inline]
    fn from(value: ReadOptions) -> Self {
        Self {
            verify_crc: value.verify_crc,
            validate_type: value.validate_type,
        }
    }
}

impl Default for ReadOptionsBuilder {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl ReadOptionsBuilder {
    #[inline]
    const fn new() -> Self {
        Self {
            verify_crc: false,
            validate_type: true,
        }
    }

    /// Compare each chunk's stored checksum with one computed over its type and data.
    ///
    /// A mismatch is reported as [`ChunkError::CrcMismatch`](crate::ChunkError::CrcMismatch).
    /// Chunks whose payload is skipped are never verified.
    #[inline]
    pub fn verify_crc(&mut self, verify: bool) -> &mut Self {
        self.verify_crc = verify;
        self
    }

    /// Reject type codes containing bytes other than ASCII letters.
    ///
    /// When disabled any 4 bytes are accepted and read as a generic chunk.
    #[inline]
    pub fn validate_type(&mut self, validate: bool) -> &mut Self {
        self.validate_type = validate;
        self
    }

    /// Creates a new [`ReadOptions`].
    #[inline]
    pub fn build(&self) -> ReadOptions {
        ReadOptions {
            verify_crc: self.verify_crc,
            validate_type: self.validate_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[cfg(all(target_family = "wasm", target_os = "unknown"))]
    use wasm_bindgen_test::wasm_bindgen_test as test;

    #[test]
    fn defaults() {
        let options = ReadOptions::default();
        assert!(!options.verify_crc());
        assert!(options.validate_type());
    }

    #[test]
    fn into_builder_keeps_values() {
        let options = ReadOptions::builder().verify_crc(true).build();
        let rebuilt = options.into_builder().validate_type(false).build();
        assert!(rebuilt.verify_crc());
        assert!(!rebuilt.validate_type());
    }
}
