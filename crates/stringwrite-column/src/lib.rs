//! Columnar packing for synthesized string columns.
//!
//! Converts a sequence of row lengths plus a flat character buffer into the
//! offsets + values layout used by variable-length columnar string arrays,
//! and hands both buffers to an [`ArrayConstructor`].
//!
//! # Example
//!
//! ```rust
//! use stringwrite_column::pack_arrow;
//!
//! let array = pack_arrow(&[2, 0, 3], b"abxyz", 3, 5).unwrap();
//! assert_eq!(array.value(2), "xyz");
//! assert_eq!(array.value_offsets(), &[0, 2, 2, 5]);
//! ```

mod error;
pub mod list;
pub mod offsets;
pub mod packer;

pub use error::PackError;
pub use list::deserialize_to_list;
pub use offsets::build_offsets;
pub use packer::{pack, pack_arrow, pack_owned, validate, ArrayConstructor, ArrowStringArray};
