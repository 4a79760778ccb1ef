//! Case-insensitive hashing and equality.
//!
//! The two functions in this module decide which strings the set treats as
//! the same element and which bucket a string belongs to. They must agree:
//! whenever [`equal`] returns `true` for two strings, [`hash`] returns the
//! same digest for both, so equal strings always land in the same bucket
//! regardless of the bucket count.
//!
//! Case folding is ASCII-only: `A`-`Z` map to `a`-`z` and every other
//! character is compared as-is. Folding never changes the number of
//! characters in a string.
//!
//! # Examples
//!
//! ```rust
//! use caseless_set::policy::{equal, hash};
//!
//! assert!(equal("Almaty", "ALMATY"));
//! assert_eq!(hash("Almaty"), hash("aLmAtY"));
//! assert!(!equal("abc", "abcd"));
//! ```

/// Multiplier of the polynomial string hash.
pub const HASH_BASE: u64 = 31;

/// Computes the case-insensitive polynomial hash of `string`.
///
/// The digest is `sum(lower(c[i]) * 31^(n - 1 - i))` over the characters of
/// the string, most significant character first. Arithmetic wraps in a
/// `u64`, so long strings produce a well-defined digest rather than
/// overflowing.
///
/// # Examples
///
/// ```rust
/// use caseless_set::policy::hash;
///
/// assert_eq!(hash(""), 0);
/// assert_eq!(hash("a"), 97);
/// assert_eq!(hash("ab"), 97 * 31 + 98);
/// assert_eq!(hash("AB"), hash("ab"));
/// ```
#[inline]
#[must_use]
pub fn hash(string: &str) -> u64 {
    string.chars().fold(0u64, |accumulator, character| {
        accumulator
            .wrapping_mul(HASH_BASE)
            .wrapping_add(u64::from(character.to_ascii_lowercase()))
    })
}

/// Returns `true` if the two strings are equal after lowercasing.
///
/// Strings of different length are never equal.
///
/// # Examples
///
/// ```rust
/// use caseless_set::policy::equal;
///
/// assert!(equal("Key", "kEY"));
/// assert!(!equal("key", "keys"));
/// ```
#[inline]
#[must_use]
pub fn equal(left: &str, right: &str) -> bool {
    if left.len() != right.len() {
        return false;
    }
    left.eq_ignore_ascii_case(right)
}
