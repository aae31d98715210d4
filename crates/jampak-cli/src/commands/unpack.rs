//! Expand a chunk container back into the original data

use std::fs::File;
use std::path::Path;

use anyhow::Context;
use jampak::{Dest, Source, read_chunk_into};
use tracing::info;

pub fn handle(input: &Path, output: &Path) -> anyhow::Result<()> {
    let file = File::open(input).with_context(|| format!("failed to open {}", input.display()))?;
    let mut src = Source::buffered(file);

    let file =
        File::create(output).with_context(|| format!("failed to create {}", output.display()))?;
    let mut dest = Dest::buffered(file);

    let header = read_chunk_into(&mut src, &mut dest)
        .with_context(|| format!("failed to unpack {}", input.display()))?;
    drop(dest);

    info!("Unpacked {} into {}", input.display(), output.display());
    println!(
        "{}: {} bytes ({})",
        output.display(),
        header.original_len(),
        header.compression()
    );

    Ok(())
}
