//! Error types for pool and wire-reference operations

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PoolError {
    #[error("Pool is full: all {capacity} slots occupied")]
    PoolFull { capacity: usize },

    #[error("Reference space exhausted: {required} ids required, {available} available")]
    BandSpaceExhausted { required: u32, available: u32 },
}

pub type Result<T> = std::result::Result<T, PoolError>;
