use std::io::{self, Read};

/// The 8-byte signature preceding the first chunk of a PNG or APNG stream.
pub const PNG_SIGNATURE: &[u8; 8] = b"\x89PNG\r\n\x1A\n";

/// Reads and checks the PNG signature, leaving `reader` at the first chunk.
///
/// # Errors
///
/// Returns [`io::ErrorKind::InvalidData`] if the signature does not match, or
/// any error raised while reading it.
///
/// # Examples
/// ```
/// use libapng::{PNG_SIGNATURE, read_signature};
///
/// let mut source = &PNG_SIGNATURE[..];
/// read_signature(&mut source).unwrap();
/// assert!(read_signature(&b"GIF89a\0\0"[..]).is_err());
/// ```
pub fn read_signature<R: Read>(mut reader: R) -> io::Result<()> {
    let mut signature = [0u8; PNG_SIGNATURE.len()];
    reader.read_exact(&mut signature)?;
    if &signature != PNG_SIGNATURE {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            String::from("not png format"),
        ));
    }
    Ok(())
}
