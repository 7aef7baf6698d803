//! A library for reading and writing the chunk stream of APNG files
//!
//! This library decodes the length-prefixed chunks of an animated PNG into
//! typed records and serializes them back byte for byte, including chunk types
//! it does not know. Chunks are read one at a time from any [`std::io::Read`],
//! and the compressed pixel payloads can be skipped when only the animation
//! metadata is needed.
//!
//! ```
//! use libapng::{ChunkReader, ChunkWriter, prelude::*};
//!
//! let mut stream = ChunkWriter::from(Vec::new());
//! stream.write_data(libapng::ChunkType::IEND, &[]).unwrap();
//! let bytes = stream.into_inner();
//!
//! let mut reader = ChunkReader::new(bytes.as_slice());
//! for chunk in reader.chunks(true) {
//!     let chunk = chunk.unwrap();
//!     println!("{} {}", chunk.ty(), chunk.length());
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/libapng/0.1.0")]
pub(crate) mod cancel;
pub(crate) mod chunk;
pub(crate) mod error;
pub(crate) mod options;
pub mod prelude;
pub(crate) mod signature;

pub use cancel::*;
pub use chunk::*;
pub use error::*;
pub use options::*;
pub use signature::*;
