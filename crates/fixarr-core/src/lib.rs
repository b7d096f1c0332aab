//! Core types and traits for the fixarr fixed-capacity array.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the element type, the error types shared by every operation, and the
//! [`IndexSource`] trait used for random access.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod traits;

pub use error::{ArrayError, ErrorKind};
pub use traits::IndexSource;

/// The value stored in every array slot.
pub type Element = i32;

/// Sentinel returned by sentinel-style searches when no slot matches.
pub const NOT_FOUND: isize = -1;
