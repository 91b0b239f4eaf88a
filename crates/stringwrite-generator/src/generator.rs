//! String length and content synthesis.

use crate::lanes::{LaneBank, LANES};
use crate::lfsr::{BitGenerator, DEFAULT_SEED};

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// A buffer could not be reserved
    #[error("Could not allocate {what} buffer ({bytes} bytes)")]
    AllocationFailed { what: &'static str, bytes: usize },

    /// `min + (byte & mask)` does not fit a 32-bit length
    #[error("Length of row {row} exceeds i32::MAX")]
    LengthOverflow { row: usize },

    /// The sum of all lengths does not fit in memory addressing
    #[error("Total character count overflows")]
    TotalOverflow,

    /// A caller-supplied length is negative
    #[error("Row {row} has negative length {length}")]
    NegativeLength { row: usize, length: i32 },
}

/// Lengths drawn for one synthesis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedLengths {
    /// One length per row.
    pub lengths: Vec<i32>,
    /// Sum of `lengths`.
    pub total: usize,
}

/// Produces reproducible string lengths and printable string content.
///
/// Lengths come from a single LFSR seeded with `seed`. Content comes from a
/// [`LaneBank`] whose seeding does not depend on any configuration, so two
/// synthesizers with different length settings still share the same
/// character stream.
#[derive(Debug, Clone)]
pub struct StringSynthesizer {
    /// Minimum string length
    min: u32,
    /// Mask applied to each drawn byte before adding `min`
    mask: u32,
    /// Seed of the length generator
    seed: u8,
}

impl StringSynthesizer {
    /// Create a synthesizer drawing lengths in `min..min + mask + 1`.
    pub fn new(min: u32, mask: u32) -> Self {
        Self {
            min,
            mask,
            seed: DEFAULT_SEED,
        }
    }

    /// Use a different seed for the length generator.
    pub fn with_seed(mut self, seed: u8) -> Self {
        self.seed = seed;
        self
    }

    /// Minimum string length.
    pub fn min(&self) -> u32 {
        self.min
    }

    /// Mask applied to each drawn byte.
    pub fn mask(&self) -> u32 {
        self.mask
    }

    /// Seed of the length generator.
    pub fn seed(&self) -> u8 {
        self.seed
    }

    /// Draw `amount` lengths.
    pub fn lengths(&self, amount: usize) -> Result<SynthesizedLengths, GeneratorError> {
        let mut lfsr = BitGenerator::new(self.seed);
        let mut lengths = reserve::<i32>("lengths", amount)?;
        let mut total = 0usize;

        for row in 0..amount {
            let drawn = u32::from(lfsr.next_byte()) & self.mask;
            let len = u64::from(self.min) + u64::from(drawn);
            let len = i32::try_from(len).map_err(|_| GeneratorError::LengthOverflow { row })?;
            total = total
                .checked_add(len as usize)
                .ok_or(GeneratorError::TotalOverflow)?;
            lengths.push(len);
        }

        Ok(SynthesizedLengths { lengths, total })
    }

    /// Synthesize the characters for the given lengths.
    pub fn values(&self, lengths: &[i32]) -> Result<Vec<u8>, GeneratorError> {
        generate_values(lengths)
    }
}

/// Draw `amount` lengths with the default seed.
pub fn generate_lengths(
    amount: usize,
    min: u32,
    mask: u32,
) -> Result<SynthesizedLengths, GeneratorError> {
    StringSynthesizer::new(min, mask).lengths(amount)
}

/// Synthesize printable characters for every row, in row order.
///
/// Returns exactly `sum(lengths)` bytes.
pub fn generate_values(lengths: &[i32]) -> Result<Vec<u8>, GeneratorError> {
    let total = total_len(lengths)?;
    let mut values = zeroed("values", total)?;
    let mut bank = LaneBank::new();
    write_rows(&mut bank, lengths, 0, &mut values)?;
    Ok(values)
}

/// Sum of `lengths`, rejecting negative entries.
pub fn total_len(lengths: &[i32]) -> Result<usize, GeneratorError> {
    lengths
        .iter()
        .enumerate()
        .try_fold(0usize, |acc, (row, &len)| {
            acc.checked_add(row_len(row, len)?)
                .ok_or(GeneratorError::TotalOverflow)
        })
}

/// Write the characters of `lengths` into `out`, continuing from `bank`.
///
/// `out` must be exactly `sum(lengths)` bytes long. `first_row` is the row
/// index of `lengths[0]`, used in errors.
pub(crate) fn write_rows(
    bank: &mut LaneBank,
    lengths: &[i32],
    first_row: usize,
    out: &mut [u8],
) -> Result<(), GeneratorError> {
    let mut pos = 0usize;
    for (i, &len) in lengths.iter().enumerate() {
        let mut remaining = row_len(first_row + i, len)?;
        loop {
            let block = bank.fill_block();
            let take = remaining.min(LANES);
            out[pos..pos + take].copy_from_slice(&block[..take]);
            pos += take;
            remaining -= take;
            if remaining == 0 {
                break;
            }
        }
    }
    debug_assert_eq!(pos, out.len());
    Ok(())
}

pub(crate) fn row_len(row: usize, length: i32) -> Result<usize, GeneratorError> {
    usize::try_from(length).map_err(|_| GeneratorError::NegativeLength { row, length })
}

pub(crate) fn reserve<T>(what: &'static str, len: usize) -> Result<Vec<T>, GeneratorError> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|_| GeneratorError::AllocationFailed {
            what,
            bytes: len.saturating_mul(std::mem::size_of::<T>()),
        })?;
    Ok(buffer)
}

/// Reserve exactly `len` bytes and zero-fill them.
pub(crate) fn zeroed(what: &'static str, len: usize) -> Result<Vec<u8>, GeneratorError> {
    let mut buffer = reserve::<u8>(what, len)?;
    buffer.resize(len, 0);
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lengths_golden() {
        let lengths = generate_lengths(3, 2, 1).unwrap();
        assert_eq!(lengths.lengths, vec![2, 2, 2]);
        assert_eq!(lengths.total, 6);

        let lengths = generate_lengths(5, 3, 7).unwrap();
        assert_eq!(lengths.lengths, vec![5, 7, 3, 4, 6]);
        assert_eq!(lengths.total, 25);
    }

    #[test]
    fn test_lengths_follow_lfsr_with_full_mask() {
        let lengths = generate_lengths(8, 0, 255).unwrap();
        assert_eq!(lengths.lengths, vec![2, 4, 8, 17, 35, 71, 142, 28]);
    }

    #[test]
    fn test_lengths_in_bounds() {
        for (min, mask) in [(0, 0), (0, 1), (5, 15), (100, 255), (7, 0xFFFF)] {
            let lengths = generate_lengths(1000, min, mask).unwrap();
            let lo = min as i64;
            let hi = min as i64 + mask as i64 + 1;
            for &len in &lengths.lengths {
                assert!((lo..hi).contains(&(len as i64)), "{len} not in {lo}..{hi}");
            }
            let sum: i64 = lengths.lengths.iter().map(|&l| l as i64).sum();
            assert_eq!(sum as usize, lengths.total);
        }
    }

    #[test]
    fn test_zero_amount() {
        let lengths = generate_lengths(0, 10, 255).unwrap();
        assert!(lengths.lengths.is_empty());
        assert_eq!(lengths.total, 0);
        assert!(generate_values(&lengths.lengths).unwrap().is_empty());
    }

    #[test]
    fn test_length_overflow() {
        let result = generate_lengths(4, i32::MAX as u32, 255);
        assert!(matches!(
            result,
            Err(GeneratorError::LengthOverflow { row: 0 })
        ));
    }

    #[test]
    fn test_allocation_failure() {
        let result = generate_lengths(usize::MAX, 0, 1);
        assert!(matches!(
            result,
            Err(GeneratorError::AllocationFailed {
                what: "lengths",
                ..
            })
        ));
    }

    #[test]
    fn test_accessors() {
        let synthesizer = StringSynthesizer::new(4, 63).with_seed(9);
        assert_eq!(synthesizer.min(), 4);
        assert_eq!(synthesizer.mask(), 63);
        assert_eq!(synthesizer.seed(), 9);
        assert_eq!(StringSynthesizer::new(0, 0).seed(), DEFAULT_SEED);
    }

    #[test]
    fn test_custom_seed_changes_lengths() {
        let default = StringSynthesizer::new(0, 255).lengths(16).unwrap();
        let seeded = StringSynthesizer::new(0, 255)
            .with_seed(0x2A)
            .lengths(16)
            .unwrap();
        assert_ne!(default, seeded);
    }

    #[test]
    fn test_values_golden() {
        assert_eq!(generate_values(&[2, 2, 2]).unwrap(), b"......");
        assert_eq!(generate_values(&[2, 4, 8, 1]).unwrap(), b"..........#+2:.");
        assert_eq!(
            generate_values(&[5, 7, 3, 4, 6]).unwrap(),
            b".................#2.#Gd.-"
        );
    }

    #[test]
    fn test_values_length_and_charset() {
        let lengths = generate_lengths(200, 0, 255).unwrap();
        let values = generate_values(&lengths.lengths).unwrap();
        assert_eq!(values.len(), lengths.total);
        assert!(values.iter().all(|b| (32..=126).contains(b)));
    }

    #[test]
    fn test_empty_row_still_consumes_a_block() {
        // The empty row burns one fill, so row 2 starts from the third block.
        let with_empty = generate_values(&[1, 0, 64]).unwrap();
        let mut bank = LaneBank::new();
        bank.fill_block();
        bank.fill_block();
        let third = bank.fill_block();
        assert_eq!(with_empty.len(), 65);
        assert_eq!(&with_empty[1..], &third[..]);
    }

    #[test]
    fn test_long_row_spans_blocks() {
        let values = generate_values(&[130]).unwrap();
        let mut bank = LaneBank::new();
        let mut expected = Vec::new();
        for _ in 0..3 {
            expected.extend_from_slice(&bank.fill_block());
        }
        expected.truncate(130);
        assert_eq!(values, expected);
    }

    #[test]
    fn test_negative_length_rejected() {
        let result = generate_values(&[3, -1, 2]);
        assert!(matches!(
            result,
            Err(GeneratorError::NegativeLength { row: 1, length: -1 })
        ));
    }

    #[test]
    fn test_deterministic_generation() {
        let a = generate_lengths(64, 1, 127).unwrap();
        let b = generate_lengths(64, 1, 127).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            generate_values(&a.lengths).unwrap(),
            generate_values(&b.lengths).unwrap()
        );
    }
}
