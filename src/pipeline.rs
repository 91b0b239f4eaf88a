//! End-to-end synthesis: lengths, then values, then the packed array.

use crate::config::ColumnConfig;
use arrow::array::StringArray;
use std::time::{Duration, Instant};
use stringwrite_column::{pack_owned, ArrowStringArray, PackError};
use stringwrite_generator::{generate_values_parallel, GeneratorError, StringSynthesizer};
use tracing::{debug, info};

/// Error type for a pipeline run.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Length or value synthesis failed
    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),

    /// Packing into the columnar array failed
    #[error("Pack error: {0}")]
    Pack(#[from] PackError),
}

/// Metrics from a pipeline run.
#[derive(Debug, Clone, Default)]
pub struct GenerationMetrics {
    /// Number of strings generated.
    pub rows: usize,
    /// Number of characters generated.
    pub chars: usize,
    /// Time spent drawing lengths.
    pub lengths_duration: Duration,
    /// Time spent synthesizing characters.
    pub values_duration: Duration,
    /// Time spent building the array.
    pub pack_duration: Duration,
    /// Total time taken.
    pub total_duration: Duration,
}

impl GenerationMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Calculate characters per second.
    pub fn chars_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.chars as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Output of a pipeline run.
#[derive(Debug)]
pub struct GeneratedColumn {
    /// One length per row.
    pub lengths: Vec<i32>,
    /// The packed string array.
    pub array: StringArray,
    /// Timings and sizes.
    pub metrics: GenerationMetrics,
}

/// Generate and pack a column for `config`.
pub fn run(config: &ColumnConfig) -> Result<GeneratedColumn, PipelineError> {
    let start_time = Instant::now();
    let mut metrics = GenerationMetrics::default();

    info!(
        "Generating {} strings (min_len={}, len_mask={:#x}, seed={}, workers={})",
        config.num_strings, config.min_len, config.len_mask, config.seed, config.workers
    );

    let stage = Instant::now();
    let synthesizer = StringSynthesizer::new(config.min_len, config.len_mask).with_seed(config.seed);
    let lengths = synthesizer.lengths(config.num_strings)?;
    metrics.lengths_duration = stage.elapsed();
    debug!(
        "Drew {} lengths totalling {} chars in {:?}",
        lengths.lengths.len(),
        lengths.total,
        metrics.lengths_duration
    );

    let stage = Instant::now();
    let values = generate_values_parallel(&lengths.lengths, config.workers)?;
    metrics.values_duration = stage.elapsed();
    debug!(
        "Synthesized {} chars in {:?}",
        values.len(),
        metrics.values_duration
    );

    metrics.rows = lengths.lengths.len();
    metrics.chars = values.len();

    let stage = Instant::now();
    let array = pack_owned(&ArrowStringArray, &lengths.lengths, values)?;
    metrics.pack_duration = stage.elapsed();
    metrics.total_duration = start_time.elapsed();

    info!(
        "Generation complete: {} strings, {} chars in {:?} ({:.2} rows/sec)",
        metrics.rows,
        metrics.chars,
        metrics.total_duration,
        metrics.rows_per_second()
    );

    Ok(GeneratedColumn {
        lengths: lengths.lengths,
        array,
        metrics,
    })
}
