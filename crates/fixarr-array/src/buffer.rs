//! Buffer ownership: allocation, growth, release and accessors.
//!
//! A [`FixedArray`] is a boxed slice allocated to its full capacity at
//! creation and zero-filled. Its capacity only changes through
//! [`FixedArray::grow`], which moves the logical elements into a fresh
//! buffer and releases the old one.

use fixarr_core::{ArrayError, Element};
use thiserror::Error;
use tracing::debug;

use crate::config::ArrayConfig;

/// An owned, contiguous, fixed-capacity buffer of [`Element`]s.
///
/// Logical elements occupy `[0, len)`. Slots `[len, capacity)` are unused
/// and always hold zero.
#[derive(Clone, Debug)]
pub struct FixedArray {
    /// Backing storage. Allocated to full capacity at creation.
    data: Box<[Element]>,
    /// Number of logical elements.
    len: usize,
    /// Largest capacity this array or any array grown from it may hold.
    max_capacity: usize,
}

/// A failed [`FixedArray::grow`].
///
/// Holds the array that was being grown, unchanged, so the caller keeps
/// its elements.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct GrowError {
    array: FixedArray,
    error: ArrayError,
}

impl GrowError {
    /// Why the grow failed.
    pub fn error(&self) -> &ArrayError {
        &self.error
    }

    /// The array that could not be grown.
    pub fn array(&self) -> &FixedArray {
        &self.array
    }

    /// Take back the array that could not be grown.
    pub fn into_array(self) -> FixedArray {
        self.array
    }

    /// Drop the array and keep only the error.
    pub fn into_error(self) -> ArrayError {
        self.error
    }
}

impl From<GrowError> for ArrayError {
    fn from(err: GrowError) -> Self {
        err.error
    }
}

/// Allocate `capacity` zeroed slots, reporting allocator failure.
fn zeroed_slots(capacity: usize, max_capacity: usize) -> Result<Box<[Element]>, ArrayError> {
    if capacity > max_capacity {
        return Err(ArrayError::CapacityExceeded {
            requested: capacity,
            max_capacity,
        });
    }
    let mut data: Vec<Element> = Vec::new();
    data.try_reserve_exact(capacity)
        .map_err(|_| ArrayError::AllocationFailed {
            requested: capacity,
        })?;
    data.resize(capacity, 0);
    Ok(data.into_boxed_slice())
}

impl FixedArray {
    /// Allocate an empty array with `capacity` zeroed slots.
    pub fn allocate(capacity: usize) -> Result<Self, ArrayError> {
        Self::allocate_with_limit(capacity, ArrayConfig::DEFAULT_MAX_CAPACITY)
    }

    /// Allocate an empty array as described by `config`.
    ///
    /// The config's `max_capacity` is carried by the array and bounds every
    /// later [`grow`](Self::grow).
    pub fn with_config(config: &ArrayConfig) -> Result<Self, ArrayError> {
        Self::allocate_with_limit(config.capacity, config.max_capacity)
    }

    fn allocate_with_limit(capacity: usize, max_capacity: usize) -> Result<Self, ArrayError> {
        let data = zeroed_slots(capacity, max_capacity)?;
        debug!(capacity, "allocated array");
        Ok(Self {
            data,
            len: 0,
            max_capacity,
        })
    }

    /// Allocate `capacity` slots and copy `values` into the leading ones.
    ///
    /// The array carries the default capacity limit; use
    /// [`from_slice_with_config`](Self::from_slice_with_config) to set one.
    pub fn from_slice(values: &[Element], capacity: usize) -> Result<Self, ArrayError> {
        Self::from_slice_with_config(values, &ArrayConfig::new(capacity))
    }

    /// Allocate as described by `config` and copy `values` into the leading
    /// slots.
    pub fn from_slice_with_config(
        values: &[Element],
        config: &ArrayConfig,
    ) -> Result<Self, ArrayError> {
        if values.len() > config.capacity {
            return Err(ArrayError::TooManyElements {
                count: values.len(),
                capacity: config.capacity,
            });
        }
        let mut array = Self::with_config(config)?;
        array.data[..values.len()].copy_from_slice(values);
        array.len = values.len();
        Ok(array)
    }

    /// Move the logical elements into a new buffer of `len + extension`
    /// slots and release this one.
    ///
    /// The new tail is zero-filled. Unused slots of the old buffer are not
    /// carried over, so a grow can also compact an array whose length is
    /// well below its capacity. `extension == 0` reallocates at the
    /// current length.
    ///
    /// # Errors
    ///
    /// If the new buffer cannot be allocated, the untouched array comes back
    /// inside the [`GrowError`].
    pub fn grow(self, extension: usize) -> Result<Self, GrowError> {
        let Some(capacity) = self.len.checked_add(extension) else {
            let error = ArrayError::CapacityOverflow {
                len: self.len,
                extension,
            };
            return Err(GrowError { array: self, error });
        };
        let mut data = match zeroed_slots(capacity, self.max_capacity) {
            Ok(data) => data,
            Err(error) => return Err(GrowError { array: self, error }),
        };
        data[..self.len].copy_from_slice(self.as_slice());
        debug!(
            old_capacity = self.capacity(),
            new_capacity = capacity,
            len = self.len,
            "grew array"
        );
        let grown = Self {
            data,
            len: self.len,
            max_capacity: self.max_capacity,
        };
        self.release();
        Ok(grown)
    }

    /// Return the buffer to the allocator.
    ///
    /// Dropping the array has the same effect; this makes the end of the
    /// lifetime explicit at the call site.
    pub fn release(self) {
        debug!(capacity = self.capacity(), "released array");
        drop(self.data);
    }

    /// Release the buffer, handing back the logical elements.
    pub fn into_vec(self) -> Vec<Element> {
        let len = self.len;
        let mut values = self.data.into_vec();
        values.truncate(len);
        values
    }

    /// Number of logical elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether there are no logical elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total number of slots in the backing buffer.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Number of unused trailing slots.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.len
    }

    /// Whether every slot holds a logical element.
    pub fn is_full(&self) -> bool {
        self.len == self.data.len()
    }

    /// Largest capacity this array may be grown to.
    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    /// The logical elements.
    pub fn as_slice(&self) -> &[Element] {
        &self.data[..self.len]
    }

    /// Every slot of the backing buffer, including the unused zeroed tail.
    pub fn slots(&self) -> &[Element] {
        &self.data
    }

    /// Iterate over the logical elements in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.as_slice().iter()
    }

    /// Memory usage of the backing buffer in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.data.len() * std::mem::size_of::<Element>()
    }

    /// Mutable access to the whole buffer for the write operations.
    pub(crate) fn parts_mut(&mut self) -> (&mut [Element], &mut usize) {
        (&mut self.data, &mut self.len)
    }
}

impl<'a> IntoIterator for &'a FixedArray {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
