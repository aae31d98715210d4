//! Object pools and stable save references
//!
//! Mid-90s Apogee-era engines keep their live objects in three fixed
//! arrays (actors, static objects, door objects) and persist relationships
//! between them in saved games. Raw addresses do not survive a save/load
//! cycle, so references are written as 16-bit ids drawn from per-pool
//! bands at the top of the id space. This crate provides the pools as
//! fixed-capacity arenas and the band codec between slot indices and wire
//! ids, configured explicitly so tests can run against small synthetic
//! layouts.

pub mod error;
pub mod pool;
pub mod wire;

pub use error::{PoolError, Result};
pub use pool::ObjectPool;
pub use wire::{Band, NULL_REF, PoolCaps, RefCodec};
