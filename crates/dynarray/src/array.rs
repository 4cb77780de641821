//! The growable array itself.
//!
//! Storage is a boxed slice of `Option<T>` slots: `Some` in the live region
//! `[0, len)`, `None` everywhere after it. Capacity is the slice length and
//! only changes when the slice is replaced wholesale, either by growth in
//! [`DynamicArray::add`] or by a rebuild in [`DynamicArray::remove_at`].
//!
//! # Growth
//!
//! `add` checks `len + 1 >= capacity` before every write and doubles the
//! capacity when it holds (`0` becomes `1`). Growth therefore fires while one
//! slot is still free:
//!
//! ```
//! use dynarray::DynamicArray;
//!
//! let mut array = DynamicArray::new(1).unwrap();
//! array.add("first");
//! assert_eq!(array.capacity(), 2);
//! ```
//!
//! # Bounds
//!
//! Every accessor is checked. Method accessors return
//! [`Error::IndexOutOfRange`]; `array[i]` panics with the same message.

use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};

use dynarray_log::{debug, trace, warn};

use crate::config::{ArrayConfig, DEFAULT_CAPACITY, RemovalPolicy};
use crate::error::{Error, Result};
use crate::iter::{IntoIter, Iter, IterMut};

/// Storage statistics for a [`DynamicArray`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayStats {
    /// Number of live elements.
    pub len: usize,
    /// Number of allocated slots.
    pub capacity: usize,
    /// How many times the backing storage has been replaced.
    pub reallocations: usize,
}

/// A generic, contiguous, growable sequence.
///
/// ```
/// use dynarray::DynamicArray;
///
/// let mut array = DynamicArray::default();
/// for i in 0..10 {
///     array.add(i);
/// }
/// assert_eq!(array.remove_at(3), Ok(3));
/// assert_eq!(array.to_string(), "[0, 1, 2, 4, 5, 6, 7, 8, 9]");
/// assert!(!array.contains(&3));
/// ```
#[derive(Clone)]
pub struct DynamicArray<T> {
    slots: Box<[Option<T>]>,
    len: usize,
    policy: RemovalPolicy,
    reallocations: usize,
}

impl<T> DynamicArray<T> {
    /// Creates an array with `initial_capacity` empty slots.
    ///
    /// Fails with [`Error::InvalidArgument`] when the capacity is negative.
    pub fn new(initial_capacity: isize) -> Result<Self> {
        Self::with_config(ArrayConfig::new(initial_capacity))
    }

    /// Creates an array from a validated [`ArrayConfig`].
    pub fn with_config(config: ArrayConfig) -> Result<Self> {
        let capacity = config
            .validated_capacity()
            .inspect_err(|err| warn!("rejected array config: {err}"))?;
        Ok(Self::from_parts(capacity, config.removal))
    }

    /// Creates an array with `capacity` empty slots and the default policy.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_parts(capacity, RemovalPolicy::default())
    }

    fn from_parts(capacity: usize, policy: RemovalPolicy) -> Self {
        Self {
            slots: empty_slots(capacity),
            len: 0,
            policy,
            reallocations: 0,
        }
    }

    /// Number of live elements.
    pub fn size(&self) -> usize {
        self.len
    }

    /// Number of live elements; same as [`size`](Self::size).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// The removal strategy this array was built with.
    pub fn policy(&self) -> RemovalPolicy {
        self.policy
    }

    /// Current storage statistics.
    pub fn stats(&self) -> ArrayStats {
        ArrayStats {
            len: self.len,
            capacity: self.capacity(),
            reallocations: self.reallocations,
        }
    }

    fn out_of_range(&self, index: usize) -> Error {
        Error::IndexOutOfRange {
            index,
            len: self.len,
        }
    }

    /// Returns a reference to the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.slots[..self.len]
            .get(index)
            .and_then(Option::as_ref)
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Returns a mutable reference to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let err = self.out_of_range(index);
        self.slots[..self.len]
            .get_mut(index)
            .and_then(Option::as_mut)
            .ok_or(err)
    }

    /// Overwrites the element at `index`; the length is unchanged.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        self.replace(index, value).map(drop)
    }

    /// Overwrites the element at `index` and returns the old value.
    pub fn replace(&mut self, index: usize, value: T) -> Result<T> {
        self.get_mut(index).map(|slot| mem::replace(slot, value))
    }

    /// Appends `value`, growing the storage first if `len + 1 >= capacity`.
    ///
    /// # Panics
    ///
    /// Panics if the doubled capacity overflows `usize`.
    pub fn add(&mut self, value: T) {
        let capacity = self.capacity();
        if self.len + 1 >= capacity {
            let grown = match capacity {
                0 => 1,
                n => n.checked_mul(2).expect("capacity overflow"),
            };
            debug!("growing storage {capacity} -> {grown} (len {})", self.len);
            self.reallocate(grown);
        }
        self.slots[self.len] = Some(value);
        self.len += 1;
    }

    /// Replaces the storage with `new_capacity` slots, moving the live
    /// elements across in order.
    fn reallocate(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.len);
        let mut slots = empty_slots(new_capacity);
        for (dst, src) in slots.iter_mut().zip(&mut self.slots[..self.len]) {
            *dst = src.take();
        }
        self.slots = slots;
        self.reallocations += 1;
    }

    /// Removes and returns the element at `index`.
    ///
    /// Fails with [`Error::IndexOutOfRange`] and leaves the array untouched
    /// when `index >= len`. What happens to the capacity depends on the
    /// array's [`RemovalPolicy`].
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        let err = self.out_of_range(index);
        let removed = self.slots[..self.len]
            .get_mut(index)
            .and_then(Option::take)
            .ok_or(err)?;

        match self.policy {
            RemovalPolicy::Rebuild => {
                let rebuilt = self.len - 1;
                debug!("rebuilding storage {} -> {rebuilt}", self.capacity());
                let mut slots = empty_slots(rebuilt);
                // the vacated slot is None, so filter_map skips it
                let survivors = self.slots[..self.len].iter_mut().filter_map(Option::take);
                for (dst, value) in slots.iter_mut().zip(survivors) {
                    *dst = Some(value);
                }
                self.slots = slots;
                self.reallocations += 1;
            }
            RemovalPolicy::Shift => {
                self.slots[index..self.len].rotate_left(1);
            }
        }

        self.len -= 1;
        trace!("removed index {index}, len now {}", self.len);
        Ok(removed)
    }

    /// Drops every element; the capacity is kept.
    pub fn clear(&mut self) {
        trace!("clearing {} elements", self.len);
        for slot in &mut self.slots[..self.len] {
            *slot = None;
        }
        self.len = 0;
    }

    /// Iterates over the live elements in index order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.slots[..self.len])
    }

    /// Iterates mutably over the live elements in index order.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.slots[..self.len])
    }
}

impl<T: PartialEq> DynamicArray<T> {
    /// Index of the first element equal to `value`, scanning `[0, len)`.
    ///
    /// Arrays of `Option<U>` can search for a stored "no value" with
    /// `index_of(&None)`; the spare slots past `len` never match.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|item| item == value)
    }

    /// Returns `true` if an element equal to `value` is present.
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Removes the first element equal to `value`.
    ///
    /// Returns `false`, leaving the array unchanged, when no element matches.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.index_of(value) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }
}

impl<T: Clone> DynamicArray<T> {
    /// Copies the live elements into a `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    /// Compares live elements only; capacity and policy are ignored.
    fn eq(&self, other: &Self) -> bool {
        self.slots[..self.len] == other.slots[..other.len]
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: fmt::Display> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DynamicArray(")?;
        f.debug_list().entries(self.iter()).finish()?;
        f.write_str(")")
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::default();
        array.extend(iter);
        array
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.slots, self.len)
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
