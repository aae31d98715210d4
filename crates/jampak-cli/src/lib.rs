//! JAMPAK CLI library
//!
//! This library provides the core functionality for the jam CLI tool.

pub mod commands;

// Re-export command handlers
pub use crate::commands::{
    info::handle as handle_info, pack::handle as handle_pack, unpack::handle as handle_unpack,
};

use clap::ValueEnum;
use jampak::CompressionType;

/// Compression strategy selectable on the command line
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompressionArg {
    /// Store the payload verbatim
    None,
    /// 12-bit LZW, the engine's default
    Lzw,
    /// LZSS dictionary coding
    Lzh,
}

impl From<CompressionArg> for CompressionType {
    fn from(arg: CompressionArg) -> Self {
        match arg {
            CompressionArg::None => Self::None,
            CompressionArg::Lzw => Self::Lzw,
            CompressionArg::Lzh => Self::Lzh,
        }
    }
}
