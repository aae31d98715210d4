//! Compression strategy dispatch, read side
//!
//! Selects the payload codec from a parsed header and enforces the declared
//! byte counts: a chunk must store exactly `compressed_len` bytes and expand
//! to exactly `original_len` bytes. Unknown strategies never reach this
//! module; they are rejected at header parse.

use tracing::{debug, trace};

use crate::backend::{Dest, Source};
use crate::header::{ChunkHeader, CompressionType};
use crate::{Error, Result, lzh, lzw};

/// Decompress a chunk payload into a freshly allocated buffer.
///
/// The source must be positioned at the payload, immediately after the
/// header.
pub fn decompress(src: &mut Source<'_>, header: &ChunkHeader) -> Result<Vec<u8>> {
    trace!(
        "Decompressing {} chunk: original_len={}",
        header.compression(),
        header.original_len()
    );

    let original_len = header.original_len() as usize;
    let decoded = match header.compression() {
        CompressionType::None => {
            check_stored_len(header)?;
            let mut buf = vec![0u8; original_len];
            src.read_exact(&mut buf)?;
            buf
        }
        CompressionType::Lzw => lzw::decompress(&read_payload(src, header)?)?,
        CompressionType::Lzh => lzh::decompress(&read_payload(src, header)?, original_len)?,
    };

    if decoded.len() != original_len {
        return Err(Error::CorruptChunk(format!(
            "decompressed length mismatch: expected {original_len} bytes, got {}",
            decoded.len()
        )));
    }

    debug!(
        "{} chunk expanded to {} bytes",
        header.compression(),
        decoded.len()
    );
    Ok(decoded)
}

/// Decompress a chunk payload into an arbitrary destination.
///
/// `NONE` payloads stream byte-for-byte through the transfer primitives;
/// the dictionary strategies decode in memory first, then write out.
/// Returns the number of bytes produced.
pub fn decompress_into(
    src: &mut Source<'_>,
    dest: &mut Dest<'_>,
    header: &ChunkHeader,
) -> Result<u64> {
    match header.compression() {
        CompressionType::None => {
            check_stored_len(header)?;
            for _ in 0..header.original_len() {
                let byte = src.get_byte()?;
                dest.put_byte(byte)?;
            }
        }
        CompressionType::Lzw | CompressionType::Lzh => {
            let decoded = decompress(src, header)?;
            dest.write_all(&decoded)?;
        }
    }
    Ok(u64::from(header.original_len()))
}

/// Read the stored payload: exactly `compressed_len` bytes, or everything
/// remaining for legacy headers.
fn read_payload(src: &mut Source<'_>, header: &ChunkHeader) -> Result<Vec<u8>> {
    match header.compressed_len() {
        Some(len) => {
            let mut payload = vec![0u8; len as usize];
            src.read_exact(&mut payload)?;
            Ok(payload)
        }
        None => {
            let mut payload = Vec::new();
            src.read_to_end(&mut payload)?;
            Ok(payload)
        }
    }
}

/// An uncompressed chunk must store exactly as many bytes as it declares.
fn check_stored_len(header: &ChunkHeader) -> Result<()> {
    let original = u64::from(header.original_len());
    let stored = header.compressed_len().map_or(original, u64::from);
    if stored != original {
        return Err(Error::CorruptChunk(format!(
            "uncompressed chunk stores {stored} bytes but declares {original}"
        )));
    }
    Ok(())
}
