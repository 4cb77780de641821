//! Iterators over the live region of a [`DynamicArray`](crate::DynamicArray).
//!
//! Each iterator walks slots `[0, len)` only; the empty slots past `len` are
//! never visited. Live slots always hold a value, so mapping through
//! `Option` never ends an iteration early.

use std::iter::FusedIterator;
use std::slice;
use std::vec;

/// Borrowing iterator returned by [`DynamicArray::iter`](crate::DynamicArray::iter).
#[derive(Debug)]
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, Option<T>>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(live: &'a [Option<T>]) -> Self {
        Self { inner: live.iter() }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next().and_then(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().and_then(Option::as_ref)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Mutable iterator returned by [`DynamicArray::iter_mut`](crate::DynamicArray::iter_mut).
#[derive(Debug)]
pub struct IterMut<'a, T> {
    inner: slice::IterMut<'a, Option<T>>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(live: &'a mut [Option<T>]) -> Self {
        Self {
            inner: live.iter_mut(),
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        self.inner.next().and_then(Option::as_mut)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().and_then(Option::as_mut)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator produced by `DynamicArray::into_iter`.
///
/// Elements not yet yielded are dropped with the iterator.
#[derive(Debug)]
pub struct IntoIter<T> {
    inner: vec::IntoIter<Option<T>>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(slots: Box<[Option<T>]>, len: usize) -> Self {
        let mut slots = slots.into_vec();
        slots.truncate(len);
        Self {
            inner: slots.into_iter(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next().flatten()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back().flatten()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
