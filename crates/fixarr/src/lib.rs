//! fixarr: a fixed-capacity, explicitly managed array of signed integers.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the fixarr sub-crates. For most users, adding `fixarr` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use fixarr::prelude::*;
//!
//! let mut array = FixedArray::from_slice(&[0, 1, 2, 3, 4], 6).unwrap();
//! assert_eq!(array.sum(), 10);
//!
//! array.insert(3, 5).unwrap();
//! assert_eq!(array.as_slice(), &[0, 1, 2, 5, 3, 4]);
//!
//! assert_eq!(array.remove(1), Ok(1));
//! assert_eq!(array.find(5), Some(2));
//!
//! let mut sampler = RandomSampler::seeded(42);
//! let value = array.sample_random(&mut sampler).unwrap();
//! assert!(array.as_slice().contains(&value));
//!
//! // Growing consumes the old handle and returns the new one.
//! let array = array.grow(3).unwrap();
//! assert_eq!(array.capacity(), 8);
//! array.release();
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `fixarr-core` | `Element`, error types, `IndexSource` |
//! | [`array`] | `fixarr-array` | `FixedArray`, `ArrayConfig`, `RandomSampler` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, errors and traits (`fixarr-core`).
pub use fixarr_core as types;

/// Array storage, configuration and sampling (`fixarr-array`).
pub use fixarr_array as array;

/// Common imports for working with fixarr.
///
/// ```rust
/// use fixarr::prelude::*;
/// ```
pub mod prelude {
    pub use fixarr_array::{ArrayConfig, ConfigError, FixedArray, GrowError, RandomSampler};
    pub use fixarr_core::{ArrayError, Element, ErrorKind, IndexSource, NOT_FOUND};
}
