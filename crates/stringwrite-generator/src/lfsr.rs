//! 8-bit Fibonacci linear-feedback shift register.
//!
//! The register shifts left by one bit per step. The feedback bit is the
//! parity of bits 7, 5, 4 and 3 (polynomial `x^8 + x^6 + x^5 + x^4 + 1`),
//! and is inserted into bit 0. [`BitGenerator::next_byte`] returns the
//! register value *after* the step.
//!
//! The tap set is maximal-length: every non-zero state lies on a single
//! cycle of [`PERIOD`] states. The all-zero state is a fixed point and
//! produces zeros forever. It is accepted as a seed because lane 0 of the
//! value synthesizer is seeded with it.

/// Seed of the primary (length) generator.
pub const DEFAULT_SEED: u8 = 1;

/// Feedback taps (bits 7, 5, 4, 3).
pub const TAPS: u8 = 0b1011_1000;

/// Cycle length of any non-zero state.
pub const PERIOD: u64 = 255;

/// Deterministic pseudo-random byte generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitGenerator {
    state: u8,
}

impl BitGenerator {
    /// Create a generator with the given register value.
    pub const fn new(seed: u8) -> Self {
        Self { state: seed }
    }

    /// Current register value.
    pub fn state(&self) -> u8 {
        self.state
    }

    /// Whether the register is stuck in the all-zero state.
    pub fn is_degenerate(&self) -> bool {
        self.state == 0
    }

    /// Advance one step and return the new register value.
    #[inline]
    pub fn next_byte(&mut self) -> u8 {
        let feedback = ((self.state & TAPS).count_ones() & 1) as u8;
        self.state = (self.state << 1) | feedback;
        self.state
    }

    /// Advance `steps` steps without producing output.
    pub fn advance(&mut self, steps: u64) {
        if self.is_degenerate() {
            return;
        }
        for _ in 0..steps % PERIOD {
            self.next_byte();
        }
    }
}

impl Default for BitGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed_sequence() {
        let mut lfsr = BitGenerator::default();
        let out: Vec<u8> = (0..8).map(|_| lfsr.next_byte()).collect();
        assert_eq!(out, vec![2, 4, 8, 17, 35, 71, 142, 28]);
    }

    #[test]
    fn test_independent_instances_agree() {
        for seed in 0..=u8::MAX {
            let mut a = BitGenerator::new(seed);
            let mut b = BitGenerator::new(seed);
            for _ in 0..600 {
                assert_eq!(a.next_byte(), b.next_byte());
            }
        }
    }

    #[test]
    fn test_zero_seed_is_constant() {
        let mut lfsr = BitGenerator::new(0);
        assert!(lfsr.is_degenerate());
        for _ in 0..1000 {
            assert_eq!(lfsr.next_byte(), 0);
        }
        lfsr.advance(12345);
        assert_eq!(lfsr.state(), 0);
    }

    #[test]
    fn test_every_nonzero_seed_has_full_period() {
        for seed in 1..=u8::MAX {
            let mut lfsr = BitGenerator::new(seed);
            let mut steps = 0u64;
            loop {
                lfsr.next_byte();
                steps += 1;
                assert!(!lfsr.is_degenerate());
                if lfsr.state() == seed {
                    break;
                }
            }
            assert_eq!(steps, PERIOD, "seed {seed}");
        }
    }

    #[test]
    fn test_advance_matches_stepping() {
        for steps in [0u64, 1, 7, 254, 255, 256, 1000, 65_537] {
            let mut stepped = BitGenerator::new(0x5A);
            for _ in 0..steps {
                stepped.next_byte();
            }
            let mut jumped = BitGenerator::new(0x5A);
            jumped.advance(steps);
            assert_eq!(stepped, jumped, "steps {steps}");
        }
    }
}
