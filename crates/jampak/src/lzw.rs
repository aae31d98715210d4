//! LZW payload codec
//!
//! Thin adapter over the `weezl` LZW implementation, fixed at the MSB bit
//! order and 8-bit symbol size the chunk format has always used. Decode
//! failures surface as [`Error::CorruptChunk`].

use weezl::{BitOrder, decode, encode};

use crate::{Error, Result};

/// Symbol size in bits; codes start one bit wider
const CODE_SIZE: u8 = 8;

/// Compress `data` into an LZW code stream.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    encode::Encoder::new(BitOrder::Msb, CODE_SIZE)
        .encode(data)
        .map_err(|e| Error::CorruptChunk(format!("LZW encode failed: {e}")))
}

/// Expand an LZW code stream produced by [`compress`].
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    decode::Decoder::new(BitOrder::Msb, CODE_SIZE)
        .decode(data)
        .map_err(|e| Error::CorruptChunk(format!("LZW decode failed: {e}")))
}
