//! Fixed-capacity collections
//!
//! This module provides:
//! - [`BoundedVec`]: a vector with a compile-time maximum element count,
//!   enforced at write time with a typed push failure
//! - [`transfer_all`]: ordered copy of a source sequence into a bounded
//!   destination, wrapping overflow with a context label

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ConversionError;

/// A sequence holding at most `N` elements.
///
/// Pushing past the capacity is a typed failure, not a panic, so
/// oversized input surfaces as a recoverable error with provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedVec<T, const N: usize> {
    items: Vec<T>,
}

impl<T, const N: usize> BoundedVec<T, N> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Maximum number of elements this collection can hold.
    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an element, returning it back if the collection is full.
    pub fn try_push(&mut self, item: T) -> Result<(), T> {
        if self.items.len() >= N {
            return Err(item);
        }
        self.items.push(item);
        Ok(())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T, const N: usize> Default for BoundedVec<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> std::ops::Index<usize> for BoundedVec<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a BoundedVec<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T, const N: usize> IntoIterator for BoundedVec<T, N> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<T: Serialize, const N: usize> Serialize for BoundedVec<T, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>, const N: usize> Deserialize<'de> for BoundedVec<T, N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        if items.len() > N {
            return Err(D::Error::custom(format!(
                "sequence length {} exceeds capacity {}",
                items.len(),
                N
            )));
        }
        Ok(Self { items })
    }
}

/// Copy every element of `source` into `dest`, preserving order.
///
/// Aborts on the first element that would exceed the destination
/// capacity and returns [`ConversionError::CapacityExceeded`] naming
/// `context`. The destination may hold a partial copy on failure; the
/// caller is expected to discard it.
pub fn transfer_all<T, I, const N: usize>(
    source: I,
    dest: &mut BoundedVec<T, N>,
    context: &str,
) -> Result<(), ConversionError>
where
    I: IntoIterator<Item = T>,
{
    for item in source {
        if dest.try_push(item).is_err() {
            return Err(ConversionError::capacity_exceeded(context));
        }
    }
    Ok(())
}
