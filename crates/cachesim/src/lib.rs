//! Set-Associative Cache Simulator Library.
//!
//! This crate replays a recorded memory access trace against a model of a
//! set-associative cache with least-recently-used replacement, and counts
//! the resulting hits, misses and evictions. It is used to compare how cache
//! geometry (set count, associativity, block size) affects an access pattern.
//!
//! # Architecture
//!
//! * **Decoder**: Splits an address into a set index and a tag.
//! * **Cache**: Sets of lines with per-line recency stamps and LRU eviction.
//! * **Trace**: Valgrind-style trace records and the replay loop.
//!
//! # Modules
//!
//! * `common`: Shared types and error handling.
//! * `config`: Cache geometry and geometry file loading.
//! * `cache`: The cache model.
//! * `trace`: Trace parsing and replay.
//! * `stats`: Hit/miss/eviction counters and summary reporting.

/// Shared types and error handling.
///
/// Provides the error types used by configuration loading, trace reading,
/// and record parsing.
pub mod common;

/// Cache geometry and configuration files.
///
/// Validates the `(s, E, b)` triple and loads it from TOML files.
pub mod config;

/// Cache model: address decoder, lines, sets, and the top-level model.
///
/// Implements the per-access outcome determination and LRU replacement.
pub mod cache;

/// Trace records and the replay loop that drives the cache model.
pub mod trace;

/// Simulation statistics collection and reporting.
///
/// Holds the hit, miss and eviction counters and renders the summary
/// line, the persisted results record and the JSON form.
pub mod stats;

pub use cache::{CacheModel, Outcome};
pub use config::Geometry;
pub use stats::SimStats;
