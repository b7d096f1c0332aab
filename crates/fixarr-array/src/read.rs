//! Read-only operations over the logical elements.
//!
//! None of these mutate the array: traversal, rendering, linear search and
//! random access all borrow it shared.

use std::fmt;

use fixarr_core::{ArrayError, Element, IndexSource, NOT_FOUND};
use tracing::trace;

use crate::buffer::FixedArray;
use crate::config::ArrayConfig;

// Every element fits in 32 bits of magnitude, so a full buffer at the
// largest allowed capacity still sums inside i128.
const _: () = assert!(
    (ArrayConfig::DEFAULT_MAX_CAPACITY as i128)
        .checked_mul(1i128 << 31)
        .is_some()
);

/// Add `values` onto `start`.
fn accumulate<'a>(start: i128, values: impl IntoIterator<Item = &'a Element>) -> i128 {
    values.into_iter().fold(start, |acc, &v| acc + i128::from(v))
}

impl FixedArray {
    /// Sum of the logical elements in index order.
    ///
    /// Accumulates in `i128`. Capacity is bounded by
    /// [`ArrayConfig::DEFAULT_MAX_CAPACITY`], which keeps the total in range.
    pub fn sum(&self) -> i128 {
        accumulate(0, self.iter())
    }

    /// Space-separated rendering of the logical elements, e.g. `"0 1 2"`.
    pub fn format(&self) -> String {
        join(self.as_slice())
    }

    /// Space-separated rendering of every slot, including the unused tail.
    pub fn format_slots(&self) -> String {
        join(self.slots())
    }

    /// Lowest index whose element equals `target`.
    pub fn find(&self, target: Element) -> Option<usize> {
        self.iter().position(|&v| v == target)
    }

    /// Like [`find`](Self::find), but returns [`NOT_FOUND`] (`-1`) when no
    /// element matches.
    pub fn find_or_sentinel(&self, target: Element) -> isize {
        match self.find(target) {
            // Slot counts are bounded by isize::MAX, so the index always fits.
            Some(index) => index as isize,
            None => NOT_FOUND,
        }
    }

    /// Element at `index`, if it is a logical element.
    pub fn get(&self, index: usize) -> Option<Element> {
        self.as_slice().get(index).copied()
    }

    /// Return the element at an index drawn from `source`.
    ///
    /// # Errors
    ///
    /// [`ArrayError::Empty`] when there are no logical elements, and
    /// [`ArrayError::IndexOutOfRange`] if `source` picks an index outside
    /// `0..len`.
    pub fn sample_random<S: IndexSource + ?Sized>(
        &self,
        source: &mut S,
    ) -> Result<Element, ArrayError> {
        if self.is_empty() {
            return Err(ArrayError::Empty);
        }
        let index = source.pick(self.len());
        let value = self.get(index).ok_or(ArrayError::IndexOutOfRange {
            index,
            len: self.len(),
        })?;
        trace!(index, value, "sampled element");
        Ok(value)
    }
}

impl fmt::Display for FixedArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "array: {}", self.format())
    }
}

fn join(values: &[Element]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(usize);

    impl IndexSource for Fixed {
        fn pick(&mut self, _len: usize) -> usize {
            self.0
        }
    }

    fn counting(len: usize, capacity: usize) -> FixedArray {
        let values: Vec<Element> = (0..len as Element).collect();
        FixedArray::from_slice(&values, capacity).unwrap()
    }

    #[test]
    fn sum_of_first_five() {
        assert_eq!(counting(5, 5).sum(), 10);
    }

    #[test]
    fn sum_of_empty_is_zero() {
        assert_eq!(FixedArray::allocate(4).unwrap().sum(), 0);
    }

    #[test]
    fn sum_does_not_overflow_i32() {
        let array = FixedArray::from_slice(&[Element::MAX, Element::MAX], 2).unwrap();
        assert_eq!(array.sum(), 2 * i128::from(Element::MAX));
    }

    #[test]
    fn sum_of_negative_extremes() {
        let array = FixedArray::from_slice(&[Element::MIN, Element::MIN, 1], 3).unwrap();
        assert_eq!(array.sum(), 2 * i128::from(Element::MIN) + 1);
    }

    #[test]
    fn accumulation_passes_the_i64_range() {
        let values = [Element::MAX; 4];
        let total = accumulate(i128::from(i64::MAX), values.iter());
        assert_eq!(total, i128::from(i64::MAX) + 4 * i128::from(Element::MAX));
        assert!(i64::try_from(total).is_err());
    }

    #[test]
    fn format_is_space_separated() {
        let array = counting(5, 8);
        assert_eq!(array.format(), "0 1 2 3 4");
        assert_eq!(array.format_slots(), "0 1 2 3 4 0 0 0");
        assert_eq!(array.to_string(), "array: 0 1 2 3 4");
    }

    #[test]
    fn format_of_empty_is_empty() {
        let array = FixedArray::allocate(2).unwrap();
        assert_eq!(array.format(), "");
        assert_eq!(array.to_string(), "array: ");
    }

    #[test]
    fn find_returns_first_match() {
        let array = FixedArray::from_slice(&[0, 1, 2, 5, 3, 4], 6).unwrap();
        assert_eq!(array.find(5), Some(3));
        assert_eq!(array.find_or_sentinel(5), 3);

        let array = FixedArray::from_slice(&[9, 4, 9], 3).unwrap();
        assert_eq!(array.find(9), Some(0));
    }

    #[test]
    fn find_missing_returns_sentinel() {
        let array = counting(5, 5);
        assert_eq!(array.find(42), None);
        assert_eq!(array.find_or_sentinel(42), NOT_FOUND);
    }

    #[test]
    fn find_ignores_unused_zero_slots() {
        let array = FixedArray::from_slice(&[1, 2], 4).unwrap();
        assert_eq!(array.find(0), None);
    }

    #[test]
    fn reads_do_not_mutate() {
        let array = counting(5, 7);
        let before = array.slots().to_vec();
        let _ = array.sum();
        let _ = array.find(3);
        let _ = array.format();
        let _ = array.sample_random(&mut Fixed(2));
        assert_eq!(array.slots(), before.as_slice());
    }

    #[test]
    fn sample_returns_picked_element() {
        let array = FixedArray::from_slice(&[10, 20, 30], 3).unwrap();
        assert_eq!(array.sample_random(&mut Fixed(1)), Ok(20));
    }

    #[test]
    fn sample_empty_is_invalid_argument() {
        let array = FixedArray::allocate(3).unwrap();
        let err = array.sample_random(&mut Fixed(0)).unwrap_err();
        assert_eq!(err, ArrayError::Empty);
        assert_eq!(err.kind(), fixarr_core::ErrorKind::InvalidArgument);
    }

    #[test]
    fn sample_rejects_out_of_range_pick() {
        let array = counting(3, 5);
        let err = array.sample_random(&mut Fixed(3)).unwrap_err();
        assert_eq!(err, ArrayError::IndexOutOfRange { index: 3, len: 3 });
    }

    #[test]
    fn get_is_bounded_by_len() {
        let array = counting(2, 4);
        assert_eq!(array.get(1), Some(1));
        assert_eq!(array.get(2), None);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn sum_matches_iterator_sum(
                values in proptest::collection::vec(any::<Element>(), 0..64),
            ) {
                let array = FixedArray::from_slice(&values, values.len()).unwrap();
                let expected: i128 = values.iter().map(|&v| i128::from(v)).sum();
                prop_assert_eq!(array.sum(), expected);
            }

            #[test]
            fn find_agrees_with_position(
                values in proptest::collection::vec(-4i32..4, 0..32),
                target in -4i32..4,
            ) {
                let array = FixedArray::from_slice(&values, values.len()).unwrap();
                prop_assert_eq!(array.find(target), values.iter().position(|&v| v == target));
            }
        }
    }
}
