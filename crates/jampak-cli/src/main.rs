use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;

use jampak_cli::{CompressionArg, commands};

#[derive(Parser)]
#[command(
    name = "jam",
    about = "JAMPAK tool for packing and unpacking compressed game data",
    version,
    author,
    long_about = "A command-line tool for working with JAMPAK chunk containers: pack files with NONE/LZW/LZH compression, expand them back, and inspect container headers, including the legacy COMP form."
)]
struct Cli {
    /// Set the logging level
    #[arg(short, long, value_enum, default_value = "info")]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show the header fields of a packed file
    Info {
        /// Packed file to inspect
        file: PathBuf,
    },

    /// Compress a file into a chunk container
    Pack {
        /// File to pack
        input: PathBuf,

        /// Where to write the container
        output: PathBuf,

        /// Compression strategy
        #[arg(short, long, value_enum, default_value = "lzw")]
        compression: CompressionArg,

        /// Write the legacy 8-byte COMP header (implies LZW)
        #[arg(long)]
        legacy: bool,
    },

    /// Expand a chunk container back into the original data
    Unpack {
        /// Packed file to read
        input: PathBuf,

        /// Where to write the expanded data
        output: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(Level::from(cli.log_level))
        .with_target(false)
        .init();

    // Handle commands
    match cli.command {
        Commands::Info { file } => commands::info::handle(&file)?,
        Commands::Pack {
            input,
            output,
            compression,
            legacy,
        } => commands::pack::handle(&input, &output, compression, legacy)?,
        Commands::Unpack { input, output } => commands::unpack::handle(&input, &output)?,
    }

    Ok(())
}
