//! Pack a file into a chunk container

use std::fs::{self, File};
use std::path::Path;

use anyhow::{Context, bail};
use jampak::{CompressionType, Dest, write_chunk, write_legacy_chunk};
use tracing::info;

use crate::CompressionArg;

pub fn handle(
    input: &Path,
    output: &Path,
    compression: CompressionArg,
    legacy: bool,
) -> anyhow::Result<()> {
    let compression = CompressionType::from(compression);
    if legacy && compression != CompressionType::Lzw {
        bail!("legacy COMP containers are always LZW; drop --compression or pass lzw");
    }

    let data = fs::read(input).with_context(|| format!("failed to read {}", input.display()))?;

    let file =
        File::create(output).with_context(|| format!("failed to create {}", output.display()))?;
    let mut dest = Dest::buffered(file);
    let header = if legacy {
        write_legacy_chunk(&mut dest, &data)?
    } else {
        write_chunk(&mut dest, &data, compression)?
    };
    drop(dest);

    let stored = fs::metadata(output)
        .with_context(|| format!("failed to stat {}", output.display()))?
        .len();
    info!(
        "Packed {} into {} ({} bytes in, {} on disk)",
        input.display(),
        output.display(),
        data.len(),
        stored
    );
    println!(
        "{}: {} bytes -> {} bytes ({})",
        output.display(),
        header.original_len(),
        stored,
        header.compression()
    );

    Ok(())
}
