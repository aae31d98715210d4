//! Error types for JAMPAK parsing, compression, and transfer

use thiserror::Error;

/// Result type for JAMPAK operations
pub type Result<T> = std::result::Result<T, Error>;

/// JAMPAK error types
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Chunk tag is neither `COMP` nor `JAMP`
    #[error("Invalid chunk tag: expected 'COMP' or 'JAMP', got {0:?}")]
    InvalidTag([u8; 4]),

    /// Fewer bytes available than the header or declared payload requires
    #[error("Truncated data: expected {expected} bytes, got {actual}")]
    Truncated { expected: u64, actual: u64 },

    /// Decoded stream failed a byte-count or token-stream check
    #[error("Corrupt chunk: {0}")]
    CorruptChunk(String),

    /// Unknown compression-type enumerant
    #[error("Unsupported compression type: {0}")]
    UnsupportedCompression(u32),

    /// Memory-backed destination capacity exceeded
    #[error("Buffer overflow: destination capacity is {capacity} bytes")]
    BufferOverflow { capacity: usize },

    /// Payload does not fit the 32-bit length fields
    #[error("Chunk too large: {0} bytes exceeds the u32 length field")]
    ChunkTooLarge(usize),
}
