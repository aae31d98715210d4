//! Wire-reference codec: banded 16-bit ids for pool slots
//!
//! Saved data cannot carry memory addresses, so object relationships are
//! persisted as 16-bit ids carved into per-pool bands near the top of the
//! id space:
//!
//! ```text
//! 0xFFFF                               reserved, never a reference
//! 0xFFFF-A     ..= 0xFFFE              actor band   (A = actor capacity)
//! 0xFFFF-A-S   ..= 0xFFFF-A-1          static band  (S = static capacity)
//! 0xFFFF-A-S-D ..= 0xFFFF-A-S-1        door band    (D = door capacity)
//! 0                                    NULL_REF, "no reference"
//! ```
//!
//! Which band a stored id belongs to is decided by the field's position in
//! the surrounding save format, not by the value itself, so each pool gets
//! its own encode/decode pair.

use tracing::debug;

use crate::error::{PoolError, Result};

/// The reserved "no reference" wire value, used by every pool.
pub const NULL_REF: u16 = 0;

/// Ids available for bands: `1..=0xFFFE`. `0` and `0xFFFF` stay reserved.
const ID_SPACE: u32 = 0xFFFE;

/// Per-pool capacities the codec lays bands out for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolCaps {
    pub actors: u16,
    pub statics: u16,
    pub doors: u16,
}

impl PoolCaps {
    /// The original engine's pool sizes.
    pub const CLASSIC: Self = Self {
        actors: 150,
        statics: 400,
        doors: 64,
    };
}

/// One pool's contiguous range of wire ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    anchor: u16,
    capacity: u16,
}

impl Band {
    const fn new(anchor: u16, capacity: u16) -> Self {
        Self { anchor, capacity }
    }

    /// Wire id slot 0 maps to.
    pub const fn anchor(&self) -> u16 {
        self.anchor
    }

    pub const fn capacity(&self) -> u16 {
        self.capacity
    }

    /// Lowest id in the band.
    pub const fn first(&self) -> u16 {
        self.anchor
    }

    /// Highest id in the band. Meaningful only when `capacity > 0`.
    pub const fn last(&self) -> u16 {
        self.anchor + self.capacity - 1
    }

    /// Whether `wire` falls inside this band.
    pub const fn contains(&self, wire: u16) -> bool {
        wire >= self.anchor && wire - self.anchor < self.capacity
    }
}

/// Bidirectional slot/wire-id mapping over the three engine pools.
///
/// Bands are computed once at construction from explicit capacities and
/// validated to be pairwise disjoint and clear of the reserved values `0`
/// and `0xFFFF`. Encoding never fails: slots that do not name a live range
/// become [`NULL_REF`]. Decoding never fails either: ids outside the target
/// band come back as `None`, and whether that means a dangling reference or
/// save corruption is the caller's decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefCodec {
    actors: Band,
    statics: Band,
    doors: Band,
}

impl RefCodec {
    /// Lays out the three bands for `caps`.
    ///
    /// The actor band is anchored at `0xFFFF - actors` so it ends at
    /// `0xFFFE`; the static band sits immediately below it and the door
    /// band below that. Fails when the capacities cannot all fit between
    /// the reserved endpoints of the id space.
    pub fn new(caps: PoolCaps) -> Result<Self> {
        let required =
            u32::from(caps.actors) + u32::from(caps.statics) + u32::from(caps.doors);
        if required > ID_SPACE {
            return Err(PoolError::BandSpaceExhausted {
                required,
                available: ID_SPACE,
            });
        }

        let actor_anchor = 0xFFFF - caps.actors;
        let static_anchor = actor_anchor - caps.statics;
        let door_anchor = static_anchor - caps.doors;
        debug!(
            "Reference bands: actor anchor {} (capacity {}), static anchor {} (capacity {}), door anchor {} (capacity {})",
            actor_anchor, caps.actors, static_anchor, caps.statics, door_anchor, caps.doors
        );

        Ok(Self {
            actors: Band::new(actor_anchor, caps.actors),
            statics: Band::new(static_anchor, caps.statics),
            doors: Band::new(door_anchor, caps.doors),
        })
    }

    /// Encodes an actor slot. `None` and out-of-range slots become
    /// [`NULL_REF`].
    pub fn encode_actor(&self, slot: Option<u16>) -> u16 {
        Self::encode(self.actors, slot)
    }

    /// Recovers the actor slot `wire` names, if it lies in the actor band.
    pub fn decode_actor(&self, wire: u16) -> Option<u16> {
        Self::decode(self.actors, wire)
    }

    pub fn encode_static(&self, slot: Option<u16>) -> u16 {
        Self::encode(self.statics, slot)
    }

    pub fn decode_static(&self, wire: u16) -> Option<u16> {
        Self::decode(self.statics, wire)
    }

    pub fn encode_door(&self, slot: Option<u16>) -> u16 {
        Self::encode(self.doors, slot)
    }

    pub fn decode_door(&self, wire: u16) -> Option<u16> {
        Self::decode(self.doors, wire)
    }

    pub const fn actor_band(&self) -> Band {
        self.actors
    }

    pub const fn static_band(&self) -> Band {
        self.statics
    }

    pub const fn door_band(&self) -> Band {
        self.doors
    }

    fn encode(band: Band, slot: Option<u16>) -> u16 {
        match slot {
            Some(slot) if slot < band.capacity => band.anchor + slot,
            _ => NULL_REF,
        }
    }

    fn decode(band: Band, wire: u16) -> Option<u16> {
        if band.contains(wire) {
            Some(wire - band.anchor)
        } else {
            None
        }
    }
}
