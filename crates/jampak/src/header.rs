//! Chunk header parsing and building
//!
//! Handles both header generations: the legacy 8-byte `COMP` form and the
//! current 16-byte `JAMP` form.

use std::fmt;
use std::io::{Cursor, Read};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use tracing::debug;

use crate::backend::{Dest, Source};
use crate::{COMP_TAG, Error, HEADER_LEN, JAMP_TAG, LEGACY_HEADER_LEN, Result};

/// Container version tag at the start of every chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkTag {
    /// Legacy 8-byte header, always LZW
    Comp,
    /// Current 16-byte header
    Jamp,
}

impl ChunkTag {
    /// Map stored tag bytes to a tag, `None` when unrecognized.
    pub const fn from_bytes(bytes: [u8; 4]) -> Option<Self> {
        match bytes {
            COMP_TAG => Some(Self::Comp),
            JAMP_TAG => Some(Self::Jamp),
            _ => None,
        }
    }

    /// Stored byte form of the tag.
    pub const fn as_bytes(self) -> [u8; 4] {
        match self {
            Self::Comp => COMP_TAG,
            Self::Jamp => JAMP_TAG,
        }
    }
}

impl fmt::Display for ChunkTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Comp => write!(f, "COMP"),
            Self::Jamp => write!(f, "JAMP"),
        }
    }
}

/// Payload compression strategy enumerants as stored in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionType {
    /// Verbatim bytes
    None = 0,
    /// LZW dictionary coding
    Lzw = 1,
    /// LZH dictionary coding
    Lzh = 2,
}

impl CompressionType {
    /// Map a stored enumerant to a strategy, `None` when unknown.
    pub const fn from_u32(value: u32) -> Option<Self> {
        match value {
            0 => Some(Self::None),
            1 => Some(Self::Lzw),
            2 => Some(Self::Lzh),
            _ => None,
        }
    }

    /// Stored integer form of the strategy.
    pub const fn as_u32(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for CompressionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Lzw => "lzw",
            Self::Lzh => "lzh",
        };
        write!(f, "{name}")
    }
}

/// Parsed or to-be-written chunk header.
///
/// Headers are immutable once parsed; a reread replaces the value. The
/// legacy `COMP` form stores no compressed length (`compressed_len()` is
/// `None`) and its payload runs to the end of the source.
/// [`ChunkHeader::legacy`] is the only way to build one, so legacy chunks
/// are LZW for written data just as they are for stored data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
    tag: ChunkTag,
    original_len: u32,
    compression: CompressionType,
    compressed_len: Option<u32>,
}

impl ChunkHeader {
    /// Build a current-form `JAMP` header.
    pub const fn new(
        original_len: u32,
        compression: CompressionType,
        compressed_len: u32,
    ) -> Self {
        Self {
            tag: ChunkTag::Jamp,
            original_len,
            compression,
            compressed_len: Some(compressed_len),
        }
    }

    /// Build a legacy-form `COMP` header.
    pub const fn legacy(original_len: u32) -> Self {
        Self {
            tag: ChunkTag::Comp,
            original_len,
            compression: CompressionType::Lzw,
            compressed_len: None,
        }
    }

    /// Parse a header at the source's current position.
    ///
    /// Reads the common 8-byte prefix, then branches on the tag: `COMP`
    /// headers end there, `JAMP` headers carry 8 more bytes of compression
    /// type and compressed length.
    pub fn read(src: &mut Source<'_>) -> Result<Self> {
        let mut prefix = [0u8; LEGACY_HEADER_LEN];
        src.read_exact(&mut prefix)?;

        let mut cursor = Cursor::new(&prefix[..]);
        let mut tag_bytes = [0u8; 4];
        cursor.read_exact(&mut tag_bytes)?;
        let tag = ChunkTag::from_bytes(tag_bytes).ok_or(Error::InvalidTag(tag_bytes))?;
        let original_len = cursor.read_u32::<LittleEndian>()?;

        let header = match tag {
            ChunkTag::Comp => Self::legacy(original_len),
            ChunkTag::Jamp => {
                let mut rest = [0u8; HEADER_LEN - LEGACY_HEADER_LEN];
                src.read_exact(&mut rest)
                    .map_err(|e| whole_header_counts(e, LEGACY_HEADER_LEN as u64))?;

                let mut cursor = Cursor::new(&rest[..]);
                let compression_value = cursor.read_u32::<LittleEndian>()?;
                let compression = CompressionType::from_u32(compression_value)
                    .ok_or(Error::UnsupportedCompression(compression_value))?;
                let compressed_len = cursor.read_u32::<LittleEndian>()?;

                Self::new(original_len, compression, compressed_len)
            }
        };

        debug!(
            "Parsed {} header: original_len={}, compression={}, compressed_len={:?}",
            header.tag, header.original_len, header.compression, header.compressed_len
        );

        Ok(header)
    }

    /// Serialize the header to the destination in fixed field order.
    pub fn write(&self, dest: &mut Dest<'_>) -> Result<()> {
        let mut encoded = Vec::with_capacity(self.encoded_len());
        encoded.extend_from_slice(&self.tag.as_bytes());
        encoded.write_u32::<LittleEndian>(self.original_len)?;
        if let Some(compressed_len) = self.compressed_len {
            encoded.write_u32::<LittleEndian>(self.compression.as_u32())?;
            encoded.write_u32::<LittleEndian>(compressed_len)?;
        }
        dest.write_all(&encoded)
    }

    /// Container version tag.
    pub const fn tag(&self) -> ChunkTag {
        self.tag
    }

    /// Payload length after decompression.
    pub const fn original_len(&self) -> u32 {
        self.original_len
    }

    /// Payload compression strategy.
    pub const fn compression(&self) -> CompressionType {
        self.compression
    }

    /// Stored payload length, `None` for legacy headers.
    pub const fn compressed_len(&self) -> Option<u32> {
        self.compressed_len
    }

    /// Encoded header size in bytes for this tag.
    pub const fn encoded_len(&self) -> usize {
        match self.tag {
            ChunkTag::Comp => LEGACY_HEADER_LEN,
            ChunkTag::Jamp => HEADER_LEN,
        }
    }

    /// Whether this is the legacy 8-byte form.
    pub const fn is_legacy(&self) -> bool {
        matches!(self.tag, ChunkTag::Comp)
    }
}

/// Rewrite a truncation hit partway through a header into whole-header
/// byte counts.
fn whole_header_counts(err: Error, already_read: u64) -> Error {
    match err {
        Error::Truncated { expected, actual } => Error::Truncated {
            expected: expected + already_read,
            actual: actual + already_read,
        },
        other => other,
    }
}
