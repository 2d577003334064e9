//! Common types used throughout the cache simulator.
//!
//! This module provides the address type and the error types shared by
//! configuration loading, trace reading and record parsing.

/// Error types for configuration, trace sources and trace records.
pub mod error;

pub use error::{ConfigError, RecordError, TraceError};

/// Memory address as recorded in a trace (64-bit host word).
pub type Addr = u64;

/// Width of an [`Addr`] in bits.
pub const ADDRESS_BITS: u32 = Addr::BITS;
