//! Compression strategy dispatch, write side

use tracing::debug;

use crate::header::CompressionType;
use crate::{Result, lzh, lzw};

/// Compress `data` with the given strategy.
///
/// `NONE` returns the bytes verbatim; the dictionary strategies delegate
/// to their codecs.
pub fn compress(data: &[u8], compression: CompressionType) -> Result<Vec<u8>> {
    let out = match compression {
        CompressionType::None => data.to_vec(),
        CompressionType::Lzw => lzw::compress(data)?,
        CompressionType::Lzh => lzh::compress(data),
    };

    debug!("{}: {} bytes -> {} bytes", compression, data.len(), out.len());
    Ok(out)
}
