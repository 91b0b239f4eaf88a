//! Stringwrite library
//!
//! Generates a deterministic column of printable variable-length strings and
//! packs it into an Arrow string array (offsets + values).
//!
//! # Crates
//!
//! - `stringwrite_generator` - LFSR, 64-lane block generator, length and
//!   value synthesis
//! - `stringwrite_column` - offsets encoding and array construction
//!
//! # CLI Usage
//!
//! ```bash
//! # 1000 strings of 4..=67 characters on 4 workers
//! stringwrite generate --num-strings 1000 --min-len 4 --len-mask 63 --workers 4
//!
//! # Same, from a config file, as JSON
//! stringwrite generate --config column.yaml --format json
//! ```

pub mod config;
pub mod pipeline;

pub use config::{ColumnArgs, ColumnConfig, ConfigError};
pub use pipeline::{run, GeneratedColumn, GenerationMetrics, PipelineError};

// Re-export the member crates for convenience
pub use stringwrite_column as column;
pub use stringwrite_generator as generator;
