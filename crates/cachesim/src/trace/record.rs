//! Trace Records.
//!
//! One record per line, as produced by `valgrind --tool=lackey
//! --trace-mem=yes`:
//!
//! ```text
//! I 0400d7d4,8
//!  M 0421c7f0,4
//!  L 04f6b868,8
//!  S 7ff0005c8,8
//! ```
//!
//! Data records are indented by one space, instruction fetches are not. The
//! address is hexadecimal and the length is the access size in bytes.

use std::fmt;
use std::str::FromStr;

use crate::common::{Addr, RecordError};

/// Kind of memory operation in a trace record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessKind {
    /// Instruction fetch (`I`). Never reaches the data cache.
    Instruction,
    /// Data load (`L`).
    Load,
    /// Data store (`S`).
    Store,
    /// Data modify (`M`): a load followed by a store to the same address.
    Modify,
}

impl AccessKind {
    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter {
            "I" => Some(AccessKind::Instruction),
            "L" => Some(AccessKind::Load),
            "S" => Some(AccessKind::Store),
            "M" => Some(AccessKind::Modify),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            AccessKind::Instruction => 'I',
            AccessKind::Load => 'L',
            AccessKind::Store => 'S',
            AccessKind::Modify => 'M',
        }
    }

    /// Number of cache accesses this kind translates to.
    pub fn cache_accesses(self) -> usize {
        match self {
            AccessKind::Instruction => 0,
            AccessKind::Load | AccessKind::Store => 1,
            AccessKind::Modify => 2,
        }
    }
}

/// A parsed trace line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceRecord {
    pub kind: AccessKind,
    pub addr: Addr,
    /// Access size in bytes. Carried for display only.
    pub len: u32,
}

impl TraceRecord {
    pub fn new(kind: AccessKind, addr: Addr, len: u32) -> Self {
        Self { kind, addr, len }
    }

    /// Parses one trace line. Blank lines yield `Ok(None)`.
    pub fn parse_line(line: &str) -> Result<Option<Self>, RecordError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        line.parse().map(Some)
    }
}

impl FromStr for TraceRecord {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (letter, rest) = s.split_once(char::is_whitespace).unwrap_or((s, ""));

        let kind = AccessKind::from_letter(letter)
            .ok_or_else(|| RecordError::UnknownKind(letter.to_string()))?;

        let rest = rest.trim();
        if rest.is_empty() {
            return Err(RecordError::MissingAddress);
        }

        let (addr, len) = rest.split_once(',').ok_or(RecordError::MissingLength)?;
        let addr = addr.trim();
        let digits = addr
            .strip_prefix("0x")
            .or_else(|| addr.strip_prefix("0X"))
            .unwrap_or(addr);
        if digits.is_empty() {
            return Err(RecordError::MissingAddress);
        }
        let addr = Addr::from_str_radix(digits, 16)
            .map_err(|_| RecordError::InvalidAddress(addr.to_string()))?;

        let len = len.trim();
        if len.is_empty() {
            return Err(RecordError::MissingLength);
        }
        let len = len
            .parse::<u32>()
            .map_err(|_| RecordError::InvalidLength(len.to_string()))?;

        Ok(TraceRecord { kind, addr, len })
    }
}

impl fmt::Display for TraceRecord {
    /// Formats as `K addr,len`, e.g. `L 10,1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:x},{}", self.kind.letter(), self.addr, self.len)
    }
}
