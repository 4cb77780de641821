//! Construction-time configuration for [`DynamicArray`](crate::DynamicArray).

use crate::error::{Error, Result};

/// Capacity used when none is given.
pub const DEFAULT_CAPACITY: usize = 16;

/// How `remove_at` reclaims the vacated slot.
///
/// The policy is fixed when the array is built; one array never mixes the
/// two strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RemovalPolicy {
    /// Allocate fresh storage of exactly `len - 1` slots and move every
    /// surviving element into it. Capacity tracks length after a removal,
    /// so the next `add` always reallocates.
    #[default]
    Rebuild,
    /// Shift the tail left by one in place and clear the last slot.
    /// Capacity is unchanged.
    Shift,
}

/// Configuration for a [`DynamicArray`](crate::DynamicArray).
///
/// Validated at construction; immutable afterwards.
///
/// ```
/// use dynarray::{ArrayConfig, DynamicArray, RemovalPolicy};
///
/// let config = ArrayConfig::default()
///     .with_initial_capacity(4)
///     .with_removal(RemovalPolicy::Shift);
/// let array: DynamicArray<u8> = DynamicArray::with_config(config).unwrap();
/// assert_eq!(array.capacity(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Number of slots allocated up front. Must not be negative.
    pub initial_capacity: isize,
    /// Strategy used by `remove_at`.
    pub removal: RemovalPolicy,
}

impl ArrayConfig {
    /// Creates a config with the given capacity and the default policy.
    pub const fn new(initial_capacity: isize) -> Self {
        Self {
            initial_capacity,
            removal: RemovalPolicy::Rebuild,
        }
    }

    /// Replaces the initial capacity.
    #[must_use]
    pub const fn with_initial_capacity(mut self, initial_capacity: isize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Replaces the removal policy.
    #[must_use]
    pub const fn with_removal(mut self, removal: RemovalPolicy) -> Self {
        self.removal = removal;
        self
    }

    /// Checks the config and returns the capacity as `usize`.
    pub fn validated_capacity(&self) -> Result<usize> {
        usize::try_from(self.initial_capacity).map_err(|_| Error::InvalidArgument {
            capacity: self.initial_capacity,
        })
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY as isize)
    }
}
