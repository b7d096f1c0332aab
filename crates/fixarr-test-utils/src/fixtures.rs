//! Reusable element fixtures.
//!
//! - [`counting_values`]: `0, 1, 2, ...` of a given length.
//! - [`DEMO_VALUES`]: the five-element walkthrough array.
//! - [`AFTER_INSERT`] / [`AFTER_REMOVE`] / [`AFTER_GROW`]: its expected
//!   states after each walkthrough step.

use fixarr_core::Element;

/// Starting elements of the walkthrough array.
pub const DEMO_VALUES: [Element; 5] = [0, 1, 2, 3, 4];

/// Logical elements after inserting `5` at index `3`.
pub const AFTER_INSERT: [Element; 6] = [0, 1, 2, 5, 3, 4];

/// Every slot of the six-slot buffer after also removing index `1`.
pub const AFTER_REMOVE: [Element; 6] = [0, 2, 5, 3, 4, 0];

/// Every slot after growing [`DEMO_VALUES`] by three.
pub const AFTER_GROW: [Element; 8] = [0, 1, 2, 3, 4, 0, 0, 0];

/// `0, 1, ..., len - 1`.
pub fn counting_values(len: usize) -> Vec<Element> {
    (0..len)
        .map(|i| Element::try_from(i).expect("fixture length fits in Element"))
        .collect()
}
