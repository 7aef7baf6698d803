//! Big-endian field access shared by the variant decoders and the writer.
use std::mem;

/// Reads a big-endian `u32` at `offset`, or `None` if `bytes` is too short.
#[inline]
pub(crate) fn be_u32(bytes: &[u8], offset: usize) -> Option<u32> {
    let (field, _) = bytes
        .get(offset..)?
        .split_first_chunk::<{ mem::size_of::<u32>() }>()?;
    Some(u32::from_be_bytes(*field))
}

/// Reads a big-endian `u16` at `offset`, or `None` if `bytes` is too short.
#[inline]
pub(crate) fn be_u16(bytes: &[u8], offset: usize) -> Option<u16> {
    let (field, _) = bytes
        .get(offset..)?
        .split_first_chunk::<{ mem::size_of::<u16>() }>()?;
    Some(u16::from_be_bytes(*field))
}

/// Writes `value` big-endian at `offset` and returns the offset past it.
///
/// The caller sizes `dst`; an out of range write panics.
#[inline]
pub(crate) fn put_u32(dst: &mut [u8], offset: usize, value: u32) -> usize {
    let end = offset + mem::size_of::<u32>();
    dst[offset..end].copy_from_slice(&value.to_be_bytes());
    end
}
