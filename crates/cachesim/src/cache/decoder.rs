//! Address Decoder.
//!
//! Splits an address into the three fields a set-associative cache uses:
//!
//! ```text
//!  63             s+b  s+b-1       b  b-1        0
//! +-------------------+-------------+------------+
//! |        tag        |  set index  |   offset   |
//! +-------------------+-------------+------------+
//! ```

use crate::common::{ADDRESS_BITS, Addr};
use crate::config::Geometry;

/// Set index and tag of a decoded address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecodedAddr {
    pub set_index: usize,
    pub tag: u64,
}

/// Precomputed shifts and masks for one geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressDecoder {
    block_bits: u32,
    tag_shift: u32,
    set_mask: u64,
}

impl AddressDecoder {
    pub fn new(geometry: &Geometry) -> Self {
        Self {
            block_bits: geometry.block_bits(),
            tag_shift: geometry.set_bits() + geometry.block_bits(),
            set_mask: (1u64 << geometry.set_bits()) - 1,
        }
    }

    /// Returns `(set_index, tag)` for `addr`.
    ///
    /// `tag = addr >> (s + b)` and `set_index = (addr >> b) mod 2^s`. When
    /// `s + b` equals the address width every address has tag 0.
    #[inline]
    pub fn decode(&self, addr: Addr) -> DecodedAddr {
        let tag = if self.tag_shift >= ADDRESS_BITS {
            0
        } else {
            addr >> self.tag_shift
        };
        let set_index = ((addr >> self.block_bits) & self.set_mask) as usize;
        DecodedAddr { set_index, tag }
    }

    /// Byte offset of `addr` within its block.
    pub fn block_offset(&self, addr: Addr) -> u64 {
        addr & ((1u64 << self.block_bits) - 1)
    }

    /// `addr` with the block-offset bits cleared.
    pub fn block_base(&self, addr: Addr) -> Addr {
        addr & !((1u64 << self.block_bits) - 1)
    }
}
