//! Benchmark profiles for the fixarr array operations.
//!
//! - [`counting_array`]: `0, 1, 2, ...` with configurable headroom
//! - [`PROFILE_SIZES`]: element counts every benchmark sweeps

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use fixarr_array::FixedArray;
use fixarr_core::ArrayError;
use fixarr_test_utils::fixtures::counting_values;

/// Element counts swept by the benchmarks.
pub const PROFILE_SIZES: [usize; 3] = [1_000, 10_000, 100_000];

/// Build an array holding `0..len` with `headroom` free trailing slots.
///
/// # Panics
///
/// If `len - 1` does not fit in an element.
pub fn counting_array(len: usize, headroom: usize) -> Result<FixedArray, ArrayError> {
    let values = counting_values(len);
    FixedArray::from_slice(&values, len.saturating_add(headroom))
}
