//! Packing lengths and values into a columnar string array.

use arrow::array::StringArray;
use arrow::buffer::{Buffer, OffsetBuffer, ScalarBuffer};
use tracing::debug;

use crate::error::PackError;
use crate::offsets::build_offsets;

/// Builds a string array from an offsets buffer and a values buffer.
///
/// Both buffers are handed over by value; the packer keeps no reference to
/// them afterwards.
pub trait ArrayConstructor {
    /// The array type produced.
    type Array;

    /// Build an array of `num_strings` rows.
    ///
    /// `offsets` has `num_strings + 1` monotonic entries ending at
    /// `values.len()`.
    fn construct(
        &self,
        num_strings: usize,
        offsets: Vec<i32>,
        values: Vec<u8>,
    ) -> Result<Self::Array, PackError>;
}

/// Constructor for [`arrow::array::StringArray`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrowStringArray;

impl ArrayConstructor for ArrowStringArray {
    type Array = StringArray;

    fn construct(
        &self,
        num_strings: usize,
        offsets: Vec<i32>,
        values: Vec<u8>,
    ) -> Result<StringArray, PackError> {
        if offsets.len() != num_strings + 1 {
            return Err(PackError::InvariantViolation(format!(
                "expected {} offsets, got {}",
                num_strings + 1,
                offsets.len()
            )));
        }
        let offsets = OffsetBuffer::new(ScalarBuffer::from(offsets));
        let values = Buffer::from_vec(values);
        Ok(StringArray::try_new(offsets, values, None)?)
    }
}

/// Check that `lengths`, `values` and the declared counts agree.
pub fn validate(
    lengths: &[i32],
    values: &[u8],
    num_strings: usize,
    num_chars: usize,
) -> Result<(), PackError> {
    if num_strings != lengths.len() {
        return Err(PackError::InvariantViolation(format!(
            "num_strings is {num_strings} but {} lengths were given",
            lengths.len()
        )));
    }
    if num_chars != values.len() {
        return Err(PackError::InvariantViolation(format!(
            "num_chars is {num_chars} but {} value bytes were given",
            values.len()
        )));
    }

    let mut sum = 0u64;
    for (row, &len) in lengths.iter().enumerate() {
        let len = u64::try_from(len).map_err(|_| {
            PackError::InvariantViolation(format!("row {row} has negative length {len}"))
        })?;
        sum += len;
    }
    if sum != num_chars as u64 {
        return Err(PackError::InvariantViolation(format!(
            "lengths sum to {sum} but num_chars is {num_chars}"
        )));
    }
    Ok(())
}

/// Pack a column, copying `values` into a freshly allocated buffer.
pub fn pack<C: ArrayConstructor>(
    constructor: &C,
    lengths: &[i32],
    values: &[u8],
    num_strings: usize,
    num_chars: usize,
) -> Result<C::Array, PackError> {
    validate(lengths, values, num_strings, num_chars)?;

    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(num_chars)
        .map_err(|_| PackError::AllocationFailed {
            what: "values",
            bytes: num_chars,
        })?;
    buffer.extend_from_slice(values);

    let offsets = build_offsets(lengths)?;
    debug!(
        "Packing {} strings ({} chars, {} offsets)",
        num_strings,
        num_chars,
        offsets.len()
    );
    constructor.construct(num_strings, offsets, buffer)
}

/// Pack a column, taking ownership of `values` without copying.
pub fn pack_owned<C: ArrayConstructor>(
    constructor: &C,
    lengths: &[i32],
    values: Vec<u8>,
) -> Result<C::Array, PackError> {
    validate(lengths, &values, lengths.len(), values.len())?;
    let offsets = build_offsets(lengths)?;
    constructor.construct(lengths.len(), offsets, values)
}

/// [`pack`] into an Arrow [`StringArray`].
pub fn pack_arrow(
    lengths: &[i32],
    values: &[u8],
    num_strings: usize,
    num_chars: usize,
) -> Result<StringArray, PackError> {
    pack(&ArrowStringArray, lengths, values, num_strings, num_chars)
}
