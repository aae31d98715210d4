//! JAMPAK chunked compression container library
//!
//! JAMPAK is the chunk format used by mid-90s Apogee-era engines to store
//! compressed asset and save data. A chunk is a fixed-layout header followed
//! by a payload compressed with one of three strategies (`NONE`, `LZW`,
//! `LZH`). This crate provides parsing and building for both header
//! generations, the payload codecs, and a transfer backend abstraction over
//! file and memory sources/destinations.

pub mod backend;
pub mod chunk;
pub mod compress;
pub mod decompress;
pub mod error;
pub mod header;
pub mod lzh;
pub mod lzw;

pub use backend::{Dest, Source};
pub use chunk::{read_chunk, read_chunk_into, write_chunk, write_legacy_chunk};
pub use error::{Error, Result};
pub use header::{ChunkHeader, ChunkTag, CompressionType};

/// Tag bytes for the legacy 8-byte header form
pub const COMP_TAG: [u8; 4] = *b"COMP";

/// Tag bytes for the current 16-byte header form
pub const JAMP_TAG: [u8; 4] = *b"JAMP";

/// Encoded size of a current-form chunk header
pub const HEADER_LEN: usize = 16;

/// Encoded size of a legacy-form chunk header
pub const LEGACY_HEADER_LEN: usize = 8;
