//! Error Types.
//!
//! Three families of failure exist in the simulator:
//!
//! * [`ConfigError`]: the cache geometry is missing, non-positive, or does not
//!   fit the address width. Raised before the cache is built.
//! * [`TraceError`]: the trace source cannot be opened or read. Aborts replay.
//! * [`RecordError`]: a single trace line cannot be parsed. The replayer logs
//!   it and moves on to the next line.
//!
//! Address decoding and set resolution have no failure modes.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::ADDRESS_BITS;

/// Invalid or unreadable cache configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required geometry parameter was not supplied.
    #[error("missing required cache parameter `{0}`")]
    Missing(&'static str),

    /// A geometry parameter was supplied as zero.
    #[error("cache parameter `{0}` must be greater than zero")]
    NonPositive(&'static str),

    /// `s + b` exceeds the address width, so no bits would remain to decode.
    #[error(
        "s + b = {} exceeds the {}-bit address width",
        u64::from(*.set_bits) + u64::from(*.block_bits),
        ADDRESS_BITS
    )]
    AddressWidthExceeded {
        /// Set-index bit count.
        set_bits: u32,
        /// Block-offset bit count.
        block_bits: u32,
    },

    /// The cache would need more lines than the simulator will allocate.
    #[error("cache with 2^{set_bits} sets of {lines_per_set} lines is too large to simulate")]
    TooLarge {
        /// Set-index bit count.
        set_bits: u32,
        /// Lines per set.
        lines_per_set: usize,
    },

    /// A geometry file could not be read.
    #[error("could not read config '{}': {source}", .path.display())]
    Read {
        /// Path of the geometry file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A geometry file is not valid TOML or has the wrong shape.
    #[error("could not parse config '{}': {message}", .path.display())]
    Parse {
        /// Path of the geometry file.
        path: PathBuf,
        /// Deserializer message.
        message: String,
    },
}

/// The trace source could not be opened or read.
#[derive(Debug, Error)]
pub enum TraceError {
    /// Opening the trace file failed.
    #[error("{}: {source}", .path.display())]
    Open {
        /// Path of the trace file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Reading from an open trace source failed.
    #[error("trace read failed at line {line}: {source}")]
    Read {
        /// 1-based line number at which the read failed.
        line: usize,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// A trace line that does not match `<Kind> <hexAddress>,<length>`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// The operation letter is not one of `I`, `L`, `S`, `M`.
    #[error("unknown access kind '{0}'")]
    UnknownKind(String),

    /// Nothing follows the operation letter.
    #[error("missing address")]
    MissingAddress,

    /// The address field is not a hexadecimal number.
    #[error("invalid address '{0}'")]
    InvalidAddress(String),

    /// No `,<length>` follows the address.
    #[error("missing access length")]
    MissingLength,

    /// The length field is not a decimal number.
    #[error("invalid access length '{0}'")]
    InvalidLength(String),
}
