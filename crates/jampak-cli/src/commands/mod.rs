//! Command handlers for the jam CLI

pub mod info;
pub mod pack;
pub mod unpack;
