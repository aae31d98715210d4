//! LZH payload codec
//!
//! The dictionary stage of the LZHUF-family scheme the format's `LZH`
//! enumerant names: LZSS over a 4 KiB sliding window with match lengths
//! 3..=18. Each group of up to eight tokens is led by a flag byte, low bit
//! first; a set bit marks a literal byte, a clear bit marks a two-byte copy
//! token holding a 12-bit distance and a 4-bit length.

use crate::{Error, Result};

/// Sliding window size in bytes
const WINDOW_SIZE: usize = 4096;

/// Shortest copy worth a token
const MIN_MATCH: usize = 3;

/// Longest copy a token can express
const MAX_MATCH: usize = 18;

/// Compress `data` into an LZSS token stream.
pub fn compress(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len() / 2 + 8);
    let mut pos = 0;
    let mut flags_at = 0;
    let mut flag_bit = 8;

    while pos < data.len() {
        if flag_bit == 8 {
            flags_at = out.len();
            out.push(0);
            flag_bit = 0;
        }

        match longest_match(data, pos) {
            Some((distance, len)) => {
                let distance_bits = (distance - 1) as u16;
                let high = ((distance_bits >> 8) << 4) as u8;
                out.push((distance_bits & 0xFF) as u8);
                out.push(high | (len - MIN_MATCH) as u8);
                pos += len;
            }
            None => {
                out[flags_at] |= 1 << flag_bit;
                out.push(data[pos]);
                pos += 1;
            }
        }
        flag_bit += 1;
    }

    out
}

/// Expand an LZSS token stream produced by [`compress`].
///
/// `expected_len` is the decompressed length declared by the chunk header;
/// token streams that disagree with it are rejected.
pub fn decompress(data: &[u8], expected_len: usize) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(expected_len);
    let mut pos = 0;

    while pos < data.len() {
        let flags = data[pos];
        pos += 1;
        if pos == data.len() {
            return Err(Error::CorruptChunk(
                "dangling flag byte at end of LZH stream".into(),
            ));
        }

        for bit in 0..8 {
            if pos == data.len() {
                break;
            }
            if flags & (1 << bit) != 0 {
                out.push(data[pos]);
                pos += 1;
            } else {
                if pos + 2 > data.len() {
                    return Err(Error::CorruptChunk("truncated LZH copy token".into()));
                }
                let low = data[pos] as usize;
                let high = data[pos + 1] as usize;
                pos += 2;

                let distance = (((high >> 4) << 8) | low) + 1;
                let len = (high & 0x0F) + MIN_MATCH;
                if distance > out.len() {
                    return Err(Error::CorruptChunk(
                        "LZH copy reaches before start of output".into(),
                    ));
                }
                let start = out.len() - distance;
                for i in 0..len {
                    let byte = out[start + i];
                    out.push(byte);
                }
            }
            if out.len() > expected_len {
                return Err(Error::CorruptChunk(format!(
                    "LZH output exceeds declared length {expected_len}"
                )));
            }
        }
    }

    if out.len() != expected_len {
        return Err(Error::CorruptChunk(format!(
            "LZH length mismatch: expected {expected_len} bytes, got {}",
            out.len()
        )));
    }
    Ok(out)
}

/// Find the longest window match at `pos`, as `(distance, len)`.
fn longest_match(data: &[u8], pos: usize) -> Option<(usize, usize)> {
    let limit = MAX_MATCH.min(data.len() - pos);
    if limit < MIN_MATCH {
        return None;
    }

    let window_start = pos.saturating_sub(WINDOW_SIZE);
    let mut best_distance = 0;
    let mut best_len = 0;

    for candidate in window_start..pos {
        let mut len = 0;
        while len < limit && data[candidate + len] == data[pos + len] {
            len += 1;
        }
        if len > best_len {
            best_len = len;
            best_distance = pos - candidate;
            if len == limit {
                break;
            }
        }
    }

    if best_len >= MIN_MATCH {
        Some((best_distance, best_len))
    } else {
        None
    }
}
