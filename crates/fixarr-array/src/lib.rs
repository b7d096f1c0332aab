//! Owned fixed-capacity integer array for fixarr.
//!
//! A [`FixedArray`] owns a zero-initialised `Box<[Element]>` of exactly
//! `capacity` slots together with its logical length. Every mutating
//! operation keeps `len <= capacity` and leaves the unused tail zeroed.
//!
//! # Architecture
//!
//! ```text
//! FixedArray
//! ├── buffer.rs   allocation, grow, release, accessors
//! ├── read.rs     sum, format, find, random access
//! └── write.rs    insert, remove, set, push, extend, clear
//! ArrayConfig     capacity, limit and sampler seed
//! RandomSampler   ChaCha8-backed IndexSource, seeded once
//! ```
//!
//! # Ownership
//!
//! Growth and release consume the array. A handle that has been grown or
//! released cannot be named again, so use-after-release and double release
//! are compile errors rather than runtime hazards. A grow that cannot
//! allocate hands the original array back inside [`GrowError`].
//!
//! [`Element`]: fixarr_core::Element

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod config;
pub mod read;
pub mod sampler;
pub mod write;

// Public re-exports for the primary API surface.
pub use buffer::{FixedArray, GrowError};
pub use config::{ArrayConfig, ConfigError};
pub use sampler::RandomSampler;
