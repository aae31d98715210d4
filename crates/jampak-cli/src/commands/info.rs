//! Inspect a packed file's header

use std::fs::File;
use std::path::Path;

use anyhow::Context;
use jampak::{ChunkHeader, Source};

pub fn handle(file: &Path) -> anyhow::Result<()> {
    let handle = File::open(file).with_context(|| format!("failed to open {}", file.display()))?;
    let mut src = Source::buffered(handle);
    let header =
        ChunkHeader::read(&mut src).with_context(|| format!("failed to parse {}", file.display()))?;

    println!("File:            {}", file.display());
    println!("Tag:             {}", header.tag());
    println!("Compression:     {}", header.compression());
    println!("Original size:   {} bytes", header.original_len());
    match header.compressed_len() {
        Some(len) => {
            println!("Compressed size: {len} bytes");
            if header.original_len() > 0 {
                let ratio = f64::from(len) / f64::from(header.original_len()) * 100.0;
                println!("Ratio:           {ratio:.1}%");
            }
        }
        None => println!("Compressed size: undeclared (legacy chunk)"),
    }

    Ok(())
}
