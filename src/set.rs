//! Case-insensitive string hash set.
//!
//! This module provides [`CaseInsensitiveStringSet`], a mutable hash set of
//! strings in which two strings that differ only in letter case are the same
//! element.
//!
//! # Overview
//!
//! Collisions are resolved by separate chaining: each bucket is an
//! insertion-ordered chain of strings. The bucket array starts with
//! [`INITIAL_BUCKET_COUNT`] buckets and is rebuilt at a larger power of two
//! whenever an insertion would leave the load factor above the configured
//! maximum.
//!
//! - O(1 + load factor) `insert`, `contains`, `remove`
//! - O(n) rehash, triggered only by a successful insert
//! - O(1) `len` and `is_empty`
//!
//! The bucket array never shrinks, neither on `remove` nor on `clear`.
//!
//! # Examples
//!
//! ```rust
//! use caseless_set::CaseInsensitiveStringSet;
//!
//! let mut set = CaseInsensitiveStringSet::new();
//! assert!(set.insert("Almaty"));
//! assert!(!set.insert("ALMATY"));   // same element, different case
//! assert!(set.contains("almaty"));
//!
//! assert!(set.remove("aLmAtY"));
//! assert!(set.is_empty());
//! ```

use std::fmt;

use crate::bucket::Bucket;
use crate::config::SetConfig;
use crate::error::ConfigError;
use crate::rehash::{
    INITIAL_BUCKET_COUNT, bucket_index, empty_buckets, load_factor, redistribute,
    required_bucket_count,
};
use crate::statistics::{self, Statistics};

// =============================================================================
// CaseInsensitiveStringSet Definition
// =============================================================================

/// A hash set of strings compared without regard to ASCII letter case.
///
/// The set stores the spelling of the first successful insertion; later
/// insertions of a case variant are rejected.
///
/// Cloning produces a deep, independent copy.
///
/// # Time Complexity
///
/// | Operation            | Complexity                  |
/// |----------------------|-----------------------------|
/// | `new`                | O(1)                        |
/// | `insert`             | O(1 + load factor), O(n) on rehash |
/// | `contains`           | O(1 + load factor)          |
/// | `remove`             | O(1 + load factor)          |
/// | `clear`              | O(bucket count + n)         |
/// | `len`                | O(1)                        |
/// | `standard_deviation` | O(bucket count)             |
///
/// # Examples
///
/// ```rust
/// use caseless_set::{CaseInsensitiveStringSet, SetConfig};
///
/// let config = SetConfig::new(25.0)?;
/// let set = CaseInsensitiveStringSet::from_strings(
///     ["abC", "aBc", "abcD", "key", "like"],
///     config,
/// );
///
/// assert_eq!(set.len(), 4);
/// assert!(set.contains("ABC"));
/// assert!(!set.contains("abcde"));
/// # Ok::<(), caseless_set::ConfigError>(())
/// ```
#[derive(Clone)]
pub struct CaseInsensitiveStringSet {
    size: usize,
    config: SetConfig,
    buckets: Vec<Bucket>,
}

impl CaseInsensitiveStringSet {
    /// Creates an empty set with the default configuration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use caseless_set::{CaseInsensitiveStringSet, DEFAULT_MAX_LOAD_FACTOR};
    ///
    /// let set = CaseInsensitiveStringSet::new();
    /// assert!(set.is_empty());
    /// assert_eq!(set.bucket_count(), 8);
    /// assert_eq!(set.max_load_factor(), DEFAULT_MAX_LOAD_FACTOR);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SetConfig::default())
    }

    /// Creates an empty set with the given configuration.
    #[must_use]
    pub fn with_config(config: SetConfig) -> Self {
        Self {
            size: 0,
            config,
            buckets: empty_buckets(INITIAL_BUCKET_COUNT),
        }
    }

    /// Creates an empty set with the given maximum load factor.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `max_load_factor` is not strictly positive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use caseless_set::CaseInsensitiveStringSet;
    ///
    /// assert!(CaseInsensitiveStringSet::with_max_load_factor(25.0).is_ok());
    /// assert!(CaseInsensitiveStringSet::with_max_load_factor(0.0).is_err());
    /// ```
    pub fn with_max_load_factor(max_load_factor: f64) -> Result<Self, ConfigError> {
        SetConfig::new(max_load_factor).map(Self::with_config)
    }

    /// Creates a set from an initial batch of strings.
    ///
    /// Strings are inserted one at a time with [`insert`](Self::insert)
    /// semantics; case variants of an earlier string are skipped.
    pub fn from_strings<I>(strings: I, config: SetConfig) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str> + Into<String>,
    {
        let mut set = Self::with_config(config);
        set.extend(strings);
        set
    }

    /// Returns the number of elements in the set.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the current number of buckets.
    ///
    /// Always a power of two, at least [`INITIAL_BUCKET_COUNT`].
    #[inline]
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the configured maximum load factor.
    #[inline]
    #[must_use]
    pub const fn max_load_factor(&self) -> f64 {
        self.config.max_load_factor()
    }

    /// Returns the configuration the set was built with.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> SetConfig {
        self.config
    }

    /// Returns `true` if the set contains a case variant of `string`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use caseless_set::CaseInsensitiveStringSet;
    ///
    /// let mut set = CaseInsensitiveStringSet::new();
    /// set.insert("Shymkent");
    ///
    /// assert!(set.contains("SHYMKENT"));
    /// assert!(!set.contains("Kostanay"));
    /// ```
    #[must_use]
    pub fn contains(&self, string: &str) -> bool {
        self.buckets[self.index_of(string)].contains(string)
    }

    /// Inserts `string` into the set.
    ///
    /// Returns `true` if the string was added, `false` if a case variant was
    /// already present. A successful insertion grows the bucket array when
    /// the load factor would otherwise exceed the configured maximum.
    ///
    /// Growth stops at [`MAX_BUCKET_COUNT`](crate::MAX_BUCKET_COUNT), and a
    /// bucket array that cannot be allocated leaves the table as it was. The
    /// insertion still succeeds; only the load factor bound is relaxed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use caseless_set::CaseInsensitiveStringSet;
    ///
    /// let mut set = CaseInsensitiveStringSet::new();
    /// assert!(set.insert("abC"));
    /// assert!(!set.insert("aBc"));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert<S>(&mut self, string: S) -> bool
    where
        S: AsRef<str> + Into<String>,
    {
        if !self.insert_without_rehash(string) {
            return false;
        }
        self.rehash_if_needed();
        true
    }

    /// Removes the case variant of `string` from the set.
    ///
    /// Returns `true` if an element was removed. The bucket array is never
    /// shrunk.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use caseless_set::CaseInsensitiveStringSet;
    ///
    /// let mut set = CaseInsensitiveStringSet::new();
    /// set.insert("atyrau");
    ///
    /// assert!(set.remove("Atyrau"));
    /// assert!(!set.remove("atyrau"));
    /// ```
    pub fn remove(&mut self, string: &str) -> bool {
        let index = self.index_of(string);
        if self.buckets[index].remove(string).is_none() {
            return false;
        }
        self.size -= 1;
        true
    }

    /// Removes every element, keeping the current bucket count.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use caseless_set::CaseInsensitiveStringSet;
    ///
    /// let mut set: CaseInsensitiveStringSet = (0..100).map(|n| format!("s{n}")).collect();
    /// let bucket_count = set.bucket_count();
    ///
    /// set.clear();
    /// assert!(set.is_empty());
    /// assert_eq!(set.bucket_count(), bucket_count);
    /// ```
    pub fn clear(&mut self) {
        self.buckets.iter_mut().for_each(Bucket::clear);
        self.size = 0;
    }

    /// Returns the ratio of stored elements to buckets.
    #[inline]
    #[must_use]
    pub fn load_factor(&self) -> f64 {
        load_factor(self.size, self.bucket_count())
    }

    /// Returns the population standard deviation of the bucket lengths
    /// around the current load factor.
    ///
    /// A value close to zero means elements are spread evenly.
    #[must_use]
    pub fn standard_deviation(&self) -> f64 {
        statistics::standard_deviation(&self.buckets, self.load_factor())
    }

    /// Returns a snapshot of the size and distribution of the set.
    ///
    /// Its [`Display`](fmt::Display) output is the statistics report.
    #[must_use]
    pub fn statistics(&self) -> Statistics {
        Statistics {
            size: self.size,
            bucket_count: self.bucket_count(),
            load_factor: self.load_factor(),
            max_load_factor: self.max_load_factor(),
            standard_deviation: self.standard_deviation(),
        }
    }

    #[inline]
    fn index_of(&self, string: &str) -> usize {
        bucket_index(string, self.bucket_count())
    }

    fn insert_without_rehash<S>(&mut self, string: S) -> bool
    where
        S: AsRef<str> + Into<String>,
    {
        let index = self.index_of(string.as_ref());
        let bucket = &mut self.buckets[index];
        if bucket.contains(string.as_ref()) {
            tracing::trace!(string = string.as_ref(), "duplicate insert rejected");
            return false;
        }
        bucket.push(string.into());
        self.size += 1;
        true
    }

    fn rehash_if_needed(&mut self) {
        let max_load_factor = self.max_load_factor();
        if self.load_factor() <= max_load_factor {
            return;
        }

        let old_bucket_count = self.bucket_count();
        let new_bucket_count = required_bucket_count(self.size, max_load_factor);
        if new_bucket_count <= old_bucket_count {
            return;
        }

        if let Err(error) = redistribute(&mut self.buckets, new_bucket_count) {
            tracing::warn!(
                size = self.size,
                old_bucket_count,
                new_bucket_count,
                %error,
                "rehash skipped, bucket array could not be allocated"
            );
            return;
        }

        tracing::debug!(
            size = self.size,
            old_bucket_count,
            new_bucket_count,
            max_load_factor,
            "rehashed set"
        );
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl Default for CaseInsensitiveStringSet {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Extend<S> for CaseInsensitiveStringSet
where
    S: AsRef<str> + Into<String>,
{
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for string in iter {
            self.insert(string);
        }
    }
}

impl<S> FromIterator<S> for CaseInsensitiveStringSet
where
    S: AsRef<str> + Into<String>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_strings(iter, SetConfig::default())
    }
}

/// Two sets are equal when they hold the same elements under
/// case-insensitive comparison, whatever their bucket counts or
/// configurations.
impl PartialEq for CaseInsensitiveStringSet {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        self.buckets
            .iter()
            .flat_map(Bucket::iter)
            .all(|element| other.contains(element))
    }
}

impl Eq for CaseInsensitiveStringSet {}

impl fmt::Debug for CaseInsensitiveStringSet {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_set()
            .entries(self.buckets.iter().flat_map(Bucket::iter))
            .finish()
    }
}

/// Renders every bucket on its own line as `bucket[i]: { a, b }`.
impl fmt::Display for CaseInsensitiveStringSet {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, bucket) in self.buckets.iter().enumerate() {
            writeln!(formatter, "bucket[{index}]: {{ {bucket} }}")?;
        }
        Ok(())
    }
}

static_assertions::assert_impl_all!(CaseInsensitiveStringSet: Send, Sync, Clone);

// =============================================================================
// Tests
// =============================================================================
