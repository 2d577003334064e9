//! # Cache Unit Tests
//!
//! Tests for the address decoder, the per-set LRU logic, and the model that
//! ties them together.

/// Tests for address to (set, tag) decoding.
pub mod decoder;
