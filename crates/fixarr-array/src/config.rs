//! Array configuration parameters.

use thiserror::Error;

use fixarr_core::Element;

/// Configuration for allocating a [`FixedArray`](crate::FixedArray).
///
/// Controls the initial capacity, the largest capacity the array may ever
/// grow to, and the seed used by [`RandomSampler`](crate::RandomSampler).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Number of slots allocated up front.
    pub capacity: usize,

    /// Upper bound on the capacity of the array and of every array grown
    /// from it. Requests above this limit fail with an allocation error.
    ///
    /// Default: [`ArrayConfig::DEFAULT_MAX_CAPACITY`].
    pub max_capacity: usize,

    /// Seed for random access. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl ArrayConfig {
    /// Largest slot count the allocator can address.
    pub const DEFAULT_MAX_CAPACITY: usize = isize::MAX as usize / std::mem::size_of::<Element>();

    /// Create a config for the given capacity.
    ///
    /// Uses default values for all other parameters.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            max_capacity: Self::DEFAULT_MAX_CAPACITY,
            seed: None,
        }
    }

    /// Set the capacity limit.
    pub fn with_max_capacity(mut self, max_capacity: usize) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    /// Set the random-access seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_capacity > Self::DEFAULT_MAX_CAPACITY {
            return Err(ConfigError::LimitTooLarge {
                max_capacity: self.max_capacity,
            });
        }
        if self.capacity > self.max_capacity {
            return Err(ConfigError::CapacityAboveLimit {
                capacity: self.capacity,
                max_capacity: self.max_capacity,
            });
        }
        Ok(())
    }

    /// Size of the initial buffer in bytes.
    pub fn buffer_bytes(&self) -> usize {
        self.capacity * std::mem::size_of::<Element>()
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Errors detected during [`ArrayConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The initial capacity is above the configured limit.
    #[error("capacity {capacity} exceeds max_capacity {max_capacity}")]
    CapacityAboveLimit {
        /// The configured capacity.
        capacity: usize,
        /// The configured limit.
        max_capacity: usize,
    },
    /// The limit is larger than any buffer the allocator can address.
    #[error("max_capacity {max_capacity} exceeds the addressable limit")]
    LimitTooLarge {
        /// The configured limit.
        max_capacity: usize,
    },
}
