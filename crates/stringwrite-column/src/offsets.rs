//! Length to offset conversion.

use crate::error::PackError;

/// Exclusive prefix sum of `lengths`.
///
/// The result has `lengths.len() + 1` entries, starts at 0 and ends at the
/// total character count. Fails with [`PackError::OffsetOverflow`] when an
/// offset does not fit in an `i32`, and with
/// [`PackError::InvariantViolation`] on a negative length.
pub fn build_offsets(lengths: &[i32]) -> Result<Vec<i32>, PackError> {
    let entries = lengths.len() + 1;
    let mut offsets = Vec::new();
    offsets
        .try_reserve_exact(entries)
        .map_err(|_| PackError::AllocationFailed {
            what: "offsets",
            bytes: entries.saturating_mul(std::mem::size_of::<i32>()),
        })?;

    let mut offset = 0i32;
    offsets.push(offset);
    for (row, &len) in lengths.iter().enumerate() {
        if len < 0 {
            return Err(PackError::InvariantViolation(format!(
                "row {row} has negative length {len}"
            )));
        }
        offset = offset
            .checked_add(len)
            .ok_or(PackError::OffsetOverflow { row })?;
        offsets.push(offset);
    }

    Ok(offsets)
}
