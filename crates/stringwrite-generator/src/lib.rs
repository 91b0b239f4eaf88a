//! Deterministic string column synthesizer.
//!
//! This crate produces a reproducible column of variable-length printable
//! strings as two flat sequences: one length per row and the concatenated
//! characters of every row. The same configuration always yields the same
//! bytes, regardless of how many workers are used.
//!
//! # Architecture
//!
//! ```text
//!  BitGenerator (seed 1)          LaneBank (64 x BitGenerator, seeds 0..63)
//!         │                                   │
//!         ▼                                   ▼
//!  ┌──────────────┐   lengths   ┌──────────────────────────┐
//!  │  lengths()   │────────────▶│  values() / parallel     │
//!  └──────────────┘             └─────────────┬────────────┘
//!                                             │
//!                                             ▼
//!                                 Vec<i32> lengths + Vec<u8> values
//! ```
//!
//! # Example
//!
//! ```rust
//! use stringwrite_generator::{generate_lengths, generate_values};
//!
//! let lengths = generate_lengths(3, 2, 1).unwrap();
//! let values = generate_values(&lengths.lengths).unwrap();
//! assert_eq!(values.len(), lengths.total);
//! ```

pub mod generator;
pub mod lanes;
pub mod lfsr;
pub mod parallel;

// Re-exports for convenience
pub use generator::{
    generate_lengths, generate_values, total_len, GeneratorError, StringSynthesizer,
    SynthesizedLengths,
};
pub use lanes::{LaneBank, LANES};
pub use lfsr::{BitGenerator, DEFAULT_SEED};
pub use parallel::generate_values_parallel;
