//! Cache geometry and geometry files.
//!
//! A cache is described by three numbers, named as in the classic `csim`
//! command line:
//!
//! * `s`: set-index bits, giving `2^s` sets.
//! * `E`: lines per set (associativity).
//! * `b`: block-offset bits, giving `2^b`-byte blocks.
//!
//! [`Geometry`] is the validated form; [`Config`] is what a TOML file or the
//! command line supplies before validation.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::{ADDRESS_BITS, ConfigError};

/// Upper bound on `2^s * E`, keeping the line array allocation sane.
pub const MAX_TOTAL_LINES: usize = 1 << 26;

/// Validated cache geometry.
///
/// Construct with [`Geometry::new`]; every instance satisfies `s > 0`,
/// `E > 0`, `b > 0`, `s + b <= 64`, and `2^s * E <= MAX_TOTAL_LINES`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Geometry {
    set_bits: u32,
    lines_per_set: usize,
    block_bits: u32,
}

impl Geometry {
    /// Validates `(s, E, b)` and returns the geometry.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::NonPositive`] if any parameter is zero.
    /// * [`ConfigError::AddressWidthExceeded`] if `s + b` is wider than an address.
    /// * [`ConfigError::TooLarge`] if the cache would exceed [`MAX_TOTAL_LINES`].
    pub fn new(set_bits: u32, lines_per_set: usize, block_bits: u32) -> Result<Self, ConfigError> {
        if set_bits == 0 {
            return Err(ConfigError::NonPositive("s"));
        }
        if lines_per_set == 0 {
            return Err(ConfigError::NonPositive("E"));
        }
        if block_bits == 0 {
            return Err(ConfigError::NonPositive("b"));
        }
        if set_bits.saturating_add(block_bits) > ADDRESS_BITS {
            return Err(ConfigError::AddressWidthExceeded {
                set_bits,
                block_bits,
            });
        }

        let total = 1usize
            .checked_shl(set_bits)
            .and_then(|sets| sets.checked_mul(lines_per_set));
        match total {
            Some(lines) if lines <= MAX_TOTAL_LINES => Ok(Self {
                set_bits,
                lines_per_set,
                block_bits,
            }),
            _ => Err(ConfigError::TooLarge {
                set_bits,
                lines_per_set,
            }),
        }
    }

    /// Set-index bit count (`s`).
    pub fn set_bits(&self) -> u32 {
        self.set_bits
    }

    /// Lines per set (`E`).
    pub fn lines_per_set(&self) -> usize {
        self.lines_per_set
    }

    /// Block-offset bit count (`b`).
    pub fn block_bits(&self) -> u32 {
        self.block_bits
    }

    /// Number of sets, `2^s`.
    pub fn set_count(&self) -> usize {
        1 << self.set_bits
    }

    /// Block size in bytes, `2^b`.
    pub fn block_size(&self) -> u64 {
        1 << self.block_bits
    }

    /// Total capacity in bytes, `2^s * E * 2^b`, saturating.
    pub fn capacity_bytes(&self) -> u64 {
        (self.set_count() as u64)
            .saturating_mul(self.lines_per_set as u64)
            .saturating_mul(self.block_size())
    }
}

/// Top-level layout of a geometry file.
///
/// ```toml
/// [cache]
/// s = 4
/// E = 1
/// b = 4
/// ```
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub cache: GeometryConfig,
}

/// Possibly incomplete geometry, as read from a file or from flags.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeometryConfig {
    #[serde(default, alias = "s")]
    pub set_bits: Option<u32>,

    #[serde(default, alias = "E")]
    pub lines_per_set: Option<usize>,

    #[serde(default, alias = "b")]
    pub block_bits: Option<u32>,
}

impl Config {
    /// Reads and parses a TOML geometry file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })
    }
}

impl GeometryConfig {
    /// Returns `self` with every parameter present in `overrides` replaced.
    pub fn merge(self, overrides: GeometryConfig) -> GeometryConfig {
        GeometryConfig {
            set_bits: overrides.set_bits.or(self.set_bits),
            lines_per_set: overrides.lines_per_set.or(self.lines_per_set),
            block_bits: overrides.block_bits.or(self.block_bits),
        }
    }

    /// Checks that all parameters are present and validates them.
    pub fn resolve(&self) -> Result<Geometry, ConfigError> {
        let set_bits = self.set_bits.ok_or(ConfigError::Missing("s"))?;
        let lines_per_set = self.lines_per_set.ok_or(ConfigError::Missing("E"))?;
        let block_bits = self.block_bits.ok_or(ConfigError::Missing("b"))?;
        Geometry::new(set_bits, lines_per_set, block_bits)
    }
}
