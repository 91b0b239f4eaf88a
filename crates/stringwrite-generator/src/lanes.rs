//! The 64-lane character generator.
//!
//! Lane `i` starts from register value `i` and always produces byte `i` of
//! a block. One block fill advances every lane by exactly one step.

use crate::lfsr::BitGenerator;

/// Number of lanes, and the size of one generated block in bytes.
pub const LANES: usize = 64;

/// Replacement for bytes outside the printable ASCII range.
pub const REPLACEMENT: u8 = b'.';

/// Fixed array of independently seeded lane generators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaneBank {
    lanes: [BitGenerator; LANES],
}

impl LaneBank {
    /// Create the bank with lane `i` seeded to `i`.
    pub fn new() -> Self {
        Self {
            lanes: std::array::from_fn(|i| BitGenerator::new(i as u8)),
        }
    }

    /// Create the bank as it would be after `fills` block fills.
    pub fn after_fills(fills: u64) -> Self {
        let mut bank = Self::new();
        bank.advance(fills);
        bank
    }

    /// Skip `fills` block fills.
    pub fn advance(&mut self, fills: u64) {
        for lane in self.lanes.iter_mut() {
            lane.advance(fills);
        }
    }

    /// Draw one byte from every lane into a block of printable characters.
    pub fn fill_block(&mut self) -> [u8; LANES] {
        let mut block = [0u8; LANES];
        for (slot, lane) in block.iter_mut().zip(self.lanes.iter_mut()) {
            *slot = printable(lane.next_byte());
        }
        block
    }
}

impl Default for LaneBank {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a raw byte to a printable ASCII character.
///
/// Keeps the low 7 bits; control characters and DEL become `.`.
#[inline]
pub fn printable(raw: u8) -> u8 {
    match raw & 0x7F {
        0..=31 | 127 => REPLACEMENT,
        c => c,
    }
}

/// Number of block fills a row of the given length consumes.
///
/// Every row fills at least one block, including empty rows.
#[inline]
pub fn fills_for_len(len: usize) -> u64 {
    len.div_ceil(LANES).max(1) as u64
}
