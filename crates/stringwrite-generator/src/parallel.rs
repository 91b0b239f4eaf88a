//! Row-partitioned value synthesis on rayon.
//!
//! Each worker owns a contiguous range of rows and a private [`LaneBank`]
//! fast-forwarded to the state the sequential pass would have at that
//! range's first row. Each chunk writes into its own slice of a single
//! output buffer, in row order, so the result is identical to
//! [`generate_values`] for any worker count.

use std::ops::Range;

use rayon::prelude::*;
use tracing::debug;

use crate::generator::{
    generate_values, row_len, total_len, write_rows, zeroed, GeneratorError,
};
use crate::lanes::{fills_for_len, LaneBank};

/// One worker's share of the rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Rows handled by this chunk
    pub rows: Range<usize>,
    /// Block fills consumed by every row before `rows.start`
    pub fills_before: u64,
    /// Characters produced by this chunk
    pub bytes: usize,
}

/// Split `lengths` into at most `workers` contiguous chunks.
pub fn plan_chunks(lengths: &[i32], workers: usize) -> Result<Vec<Chunk>, GeneratorError> {
    if lengths.is_empty() {
        return Ok(Vec::new());
    }
    let rows_per_chunk = lengths.len().div_ceil(workers.max(1));

    let mut chunks = Vec::new();
    let mut fills_before = 0u64;
    for (index, rows) in lengths.chunks(rows_per_chunk).enumerate() {
        let start = index * rows_per_chunk;
        let mut bytes = 0usize;
        let mut fills = 0u64;
        for (i, &len) in rows.iter().enumerate() {
            let len = row_len(start + i, len)?;
            bytes = bytes
                .checked_add(len)
                .ok_or(GeneratorError::TotalOverflow)?;
            fills += fills_for_len(len);
        }
        chunks.push(Chunk {
            rows: start..start + rows.len(),
            fills_before,
            bytes,
        });
        fills_before += fills;
    }
    Ok(chunks)
}

/// Synthesize values with up to `workers` parallel chunks.
pub fn generate_values_parallel(
    lengths: &[i32],
    workers: usize,
) -> Result<Vec<u8>, GeneratorError> {
    if workers <= 1 || lengths.len() < 2 {
        return generate_values(lengths);
    }

    let total = total_len(lengths)?;
    let chunks = plan_chunks(lengths, workers)?;
    debug!(
        "Synthesizing {} rows in {} chunks across {} workers",
        lengths.len(),
        chunks.len(),
        workers
    );

    let mut values = zeroed("values", total)?;
    fill_chunks(lengths, &chunks, &mut values)?;
    Ok(values)
}

/// Write every chunk into its own disjoint slice of `out`.
///
/// `out` must be exactly the sum of all chunk sizes.
pub(crate) fn fill_chunks(
    lengths: &[i32],
    chunks: &[Chunk],
    out: &mut [u8],
) -> Result<(), GeneratorError> {
    let mut slices = Vec::with_capacity(chunks.len());
    let mut rest = out;
    for chunk in chunks {
        let (head, tail) = std::mem::take(&mut rest).split_at_mut(chunk.bytes);
        slices.push((chunk, head));
        rest = tail;
    }

    slices.into_par_iter().try_for_each(|(chunk, slice)| {
        let mut bank = LaneBank::after_fills(chunk.fills_before);
        write_rows(
            &mut bank,
            &lengths[chunk.rows.clone()],
            chunk.rows.start,
            slice,
        )
    })
}
