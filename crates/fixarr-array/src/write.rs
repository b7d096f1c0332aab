//! In-place mutation of the logical elements.
//!
//! Every operation here updates the length itself and either succeeds
//! completely or returns an error with the buffer untouched. None of them
//! change the capacity; use [`FixedArray::grow`] for that.

use fixarr_core::{ArrayError, Element};
use tracing::trace;

use crate::buffer::FixedArray;

impl FixedArray {
    /// Insert `value` at `index`, shifting `[index, len)` up by one slot.
    ///
    /// # Errors
    ///
    /// [`ArrayError::IndexOutOfRange`] if `index > len`, and
    /// [`ArrayError::Full`] if there is no free trailing slot.
    pub fn insert(&mut self, index: usize, value: Element) -> Result<(), ArrayError> {
        let capacity = self.capacity();
        let (data, len) = self.parts_mut();
        if index > *len {
            return Err(ArrayError::IndexOutOfRange { index, len: *len });
        }
        if *len == capacity {
            return Err(ArrayError::Full { capacity });
        }
        // Overlapping copy toward higher indices; the slot at `len` is free.
        data.copy_within(index..*len, index + 1);
        data[index] = value;
        *len += 1;
        trace!(index, value, len = *len, "inserted element");
        Ok(())
    }

    /// Remove and return the element at `index`, shifting `[index + 1, len)`
    /// down by one slot and zeroing the vacated last slot.
    ///
    /// # Errors
    ///
    /// [`ArrayError::IndexOutOfRange`] if `index >= len`.
    pub fn remove(&mut self, index: usize) -> Result<Element, ArrayError> {
        let (data, len) = self.parts_mut();
        if index >= *len {
            return Err(ArrayError::IndexOutOfRange { index, len: *len });
        }
        let removed = data[index];
        data.copy_within(index + 1..*len, index);
        *len -= 1;
        data[*len] = 0;
        trace!(index, removed, len = *len, "removed element");
        Ok(removed)
    }

    /// Append `value` after the last logical element.
    pub fn push(&mut self, value: Element) -> Result<(), ArrayError> {
        self.insert(self.len(), value)
    }

    /// Append every value in `values`, or none of them.
    ///
    /// # Errors
    ///
    /// [`ArrayError::TooManyElements`] if `values` does not fit in the
    /// remaining slots.
    pub fn extend_from_slice(&mut self, values: &[Element]) -> Result<(), ArrayError> {
        let remaining = self.remaining();
        if values.len() > remaining {
            return Err(ArrayError::TooManyElements {
                count: values.len(),
                capacity: remaining,
            });
        }
        let (data, len) = self.parts_mut();
        data[*len..*len + values.len()].copy_from_slice(values);
        *len += values.len();
        Ok(())
    }

    /// Overwrite the logical element at `index`, returning the old value.
    pub fn set(&mut self, index: usize, value: Element) -> Result<Element, ArrayError> {
        let (data, len) = self.parts_mut();
        if index >= *len {
            return Err(ArrayError::IndexOutOfRange { index, len: *len });
        }
        Ok(std::mem::replace(&mut data[index], value))
    }

    /// Zero every logical slot and reset the length to zero.
    pub fn clear(&mut self) {
        let (data, len) = self.parts_mut();
        data[..*len].fill(0);
        *len = 0;
    }
}
