//! Separate-chaining buckets.
//!
//! A [`Bucket`] is the chain of strings that share one bucket index. Elements
//! keep their insertion order. Short chains are stored inline, which is the
//! common case when the load factor stays near its configured bound.

use std::fmt;

use smallvec::SmallVec;

use crate::policy::equal;

/// Number of strings a bucket holds before spilling to the heap.
const INLINE_CAPACITY: usize = 4;

/// An insertion-ordered chain of strings with the same bucket index.
#[derive(Clone, Debug)]
pub(crate) struct Bucket {
    elements: SmallVec<[String; INLINE_CAPACITY]>,
}

impl Bucket {
    #[inline]
    pub(crate) fn new() -> Self {
        Self {
            elements: SmallVec::new(),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns the position of the element case-insensitively equal to `string`.
    #[inline]
    pub(crate) fn position(&self, string: &str) -> Option<usize> {
        self.elements.iter().position(|element| equal(element, string))
    }

    #[inline]
    pub(crate) fn contains(&self, string: &str) -> bool {
        self.position(string).is_some()
    }

    /// Appends `string` without checking for duplicates.
    #[inline]
    pub(crate) fn push(&mut self, string: String) {
        self.elements.push(string);
    }

    /// Removes the element equal to `string`, keeping the order of the rest.
    pub(crate) fn remove(&mut self, string: &str) -> Option<String> {
        self.position(string).map(|position| self.elements.remove(position))
    }

    #[inline]
    pub(crate) fn clear(&mut self) {
        self.elements.clear();
    }

    #[inline]
    pub(crate) fn iter(&self) -> std::slice::Iter<'_, String> {
        self.elements.iter()
    }
}

impl IntoIterator for Bucket {
    type Item = String;
    type IntoIter = smallvec::IntoIter<[String; INLINE_CAPACITY]>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

/// Renders the members as `a, b, c`.
impl fmt::Display for Bucket {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for element in &self.elements {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        Ok(())
    }
}
