//! Set-associative cache model.
//!
//! The model owns `2^s` sets of `E` lines each and the hit, miss and
//! eviction counters. Its single mutating operation is [`CacheModel::access`].

pub mod decoder;
pub mod line;
pub mod set;

use std::fmt;

use log::{debug, info};

use self::decoder::AddressDecoder;
use self::set::CacheSet;
use crate::common::{Addr, ConfigError};
use crate::config::Geometry;
use crate::stats::SimStats;

pub use self::decoder::DecodedAddr;
pub use self::line::CacheLine;

/// Result of a single cache access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The tag was resident.
    Hit,
    /// Cold miss: the tag was placed in an empty line.
    MissCold,
    /// Conflict miss: the least recently used line was overwritten.
    MissEvict,
}

impl Outcome {
    pub fn is_hit(self) -> bool {
        self == Outcome::Hit
    }

    pub fn is_miss(self) -> bool {
        !self.is_hit()
    }

    pub fn evicted(self) -> bool {
        self == Outcome::MissEvict
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Outcome::Hit => "hit",
            Outcome::MissCold => "miss",
            Outcome::MissEvict => "miss eviction",
        })
    }
}

/// The simulated cache.
#[derive(Debug)]
pub struct CacheModel {
    geometry: Geometry,
    decoder: AddressDecoder,
    sets: Vec<CacheSet>,
    stats: SimStats,
}

impl CacheModel {
    /// Builds an empty cache for a validated geometry.
    pub fn new(geometry: Geometry) -> Self {
        let sets = (0..geometry.set_count())
            .map(|_| CacheSet::new(geometry.lines_per_set()))
            .collect();

        info!(
            "cache: {} sets x {} lines, {}-byte blocks ({} bytes)",
            geometry.set_count(),
            geometry.lines_per_set(),
            geometry.block_size(),
            geometry.capacity_bytes()
        );

        Self {
            geometry,
            decoder: AddressDecoder::new(&geometry),
            sets,
            stats: SimStats::default(),
        }
    }

    /// Validates `(s, E, b)` and builds an empty cache.
    pub fn from_parts(
        set_bits: u32,
        lines_per_set: usize,
        block_bits: u32,
    ) -> Result<Self, ConfigError> {
        Geometry::new(set_bits, lines_per_set, block_bits).map(Self::new)
    }

    /// Simulates one access to `addr` and updates the counters.
    pub fn access(&mut self, addr: Addr) -> Outcome {
        let DecodedAddr { set_index, tag } = self.decoder.decode(addr);
        let (outcome, victim) = self.sets[set_index].resolve_with_victim(tag);

        match outcome {
            Outcome::Hit => self.stats.hits += 1,
            Outcome::MissCold => self.stats.misses += 1,
            Outcome::MissEvict => {
                self.stats.misses += 1;
                self.stats.evictions += 1;
            }
        }

        if let Some(victim) = victim {
            debug!(
                "evict set {} tag {:#x} for tag {:#x} (addr {:#x})",
                set_index, victim, tag, addr
            );
        }

        outcome
    }

    /// True if the block holding `addr` is resident. Does not update recency
    /// or counters.
    pub fn contains(&self, addr: Addr) -> bool {
        let DecodedAddr { set_index, tag } = self.decoder.decode(addr);
        self.sets[set_index].probe(tag)
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn decoder(&self) -> &AddressDecoder {
        &self.decoder
    }

    pub fn set(&self, index: usize) -> Option<&CacheSet> {
        self.sets.get(index)
    }

    pub fn hits(&self) -> u64 {
        self.stats.hits
    }

    pub fn misses(&self) -> u64 {
        self.stats.misses
    }

    pub fn evictions(&self) -> u64 {
        self.stats.evictions
    }

    /// Total accesses simulated, `hits + misses`.
    pub fn accesses(&self) -> u64 {
        self.stats.accesses()
    }

    /// Snapshot of the counters.
    pub fn stats(&self) -> SimStats {
        self.stats
    }
}
