//! Whole-chunk operations
//!
//! The save/load layers deal in complete chunks: compress-and-write with a
//! header in front, or parse-header-then-expand. A corrupt chunk aborts
//! that chunk's load; there is no partial recovery here.

use tracing::debug;

use crate::backend::{Dest, Source};
use crate::header::{ChunkHeader, CompressionType};
use crate::{Error, Result, compress, decompress};

/// Compress `data` and write it as a `JAMP` chunk.
///
/// Returns the header that was written in front of the payload.
pub fn write_chunk(
    dest: &mut Dest<'_>,
    data: &[u8],
    compression: CompressionType,
) -> Result<ChunkHeader> {
    let original_len = field_len(data)?;
    let payload = compress::compress(data, compression)?;
    let compressed_len = field_len(&payload)?;

    let header = ChunkHeader::new(original_len, compression, compressed_len);
    header.write(dest)?;
    dest.write_all(&payload)?;
    dest.flush()?;

    debug!(
        "Wrote {} chunk: {} bytes -> {} stored",
        compression, original_len, compressed_len
    );
    Ok(header)
}

/// Compress `data` with LZW and write it as a legacy `COMP` chunk.
///
/// The legacy header stores no compressed length; readers recover the
/// payload by reading to the end of the source.
pub fn write_legacy_chunk(dest: &mut Dest<'_>, data: &[u8]) -> Result<ChunkHeader> {
    let original_len = field_len(data)?;
    let payload = compress::compress(data, CompressionType::Lzw)?;

    let header = ChunkHeader::legacy(original_len);
    header.write(dest)?;
    dest.write_all(&payload)?;
    dest.flush()?;

    debug!(
        "Wrote legacy chunk: {} bytes -> {} stored",
        original_len,
        payload.len()
    );
    Ok(header)
}

/// Parse a chunk header and expand the payload into memory.
pub fn read_chunk(src: &mut Source<'_>) -> Result<(ChunkHeader, Vec<u8>)> {
    let header = ChunkHeader::read(src)?;
    let data = decompress::decompress(src, &header)?;
    Ok((header, data))
}

/// Parse a chunk header and expand the payload into a destination.
pub fn read_chunk_into(src: &mut Source<'_>, dest: &mut Dest<'_>) -> Result<ChunkHeader> {
    let header = ChunkHeader::read(src)?;
    decompress::decompress_into(src, dest, &header)?;
    dest.flush()?;
    Ok(header)
}

/// Lengths are stored as u32; anything bigger cannot be represented.
fn field_len(data: &[u8]) -> Result<u32> {
    u32::try_from(data.len()).map_err(|_| Error::ChunkTooLarge(data.len()))
}
