//! Bucket routing and the grow-on-insert rehash policy.
//!
//! The bucket array starts at [`INITIAL_BUCKET_COUNT`] buckets and only ever
//! grows. When an insertion pushes the load factor above the configured
//! maximum, the smallest count in `8, 16, 32, ...` that brings it back under
//! the bound is chosen and every element is moved into a freshly allocated
//! array of that length.
//!
//! Growth stops at [`MAX_BUCKET_COUNT`]. A rehash whose bucket array cannot
//! be allocated is skipped and the old array is kept, so an extremely small
//! maximum load factor degrades to a best-effort bound instead of aborting.

use std::collections::TryReserveError;

use crate::bucket::Bucket;
use crate::policy::hash;

/// Number of buckets of a freshly constructed set.
pub const INITIAL_BUCKET_COUNT: usize = 8;

/// Largest bucket count the set grows to: the greatest power of two whose
/// bucket array stays within the `isize::MAX` bytes an allocation may span.
pub const MAX_BUCKET_COUNT: usize = {
    let limit = (usize::MAX >> 1) / std::mem::size_of::<Bucket>();
    1 << (usize::BITS - 1 - limit.leading_zeros())
};

/// Maps `string` to its bucket index for a table of `bucket_count` buckets.
#[inline]
// The remainder is below bucket_count, so it always fits back into usize.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn bucket_index(string: &str, bucket_count: usize) -> usize {
    debug_assert!(bucket_count > 0);
    (hash(string) % bucket_count as u64) as usize
}

/// Ratio of stored elements to buckets.
#[inline]
#[allow(clippy::cast_precision_loss)]
pub(crate) fn load_factor(size: usize, bucket_count: usize) -> f64 {
    size as f64 / bucket_count as f64
}

/// Returns the smallest bucket count of the form `8 << i` whose load factor
/// for `size` elements does not exceed `max_load_factor`.
///
/// Never exceeds [`MAX_BUCKET_COUNT`].
pub(crate) fn required_bucket_count(size: usize, max_load_factor: f64) -> usize {
    let mut candidate = INITIAL_BUCKET_COUNT;
    while candidate < MAX_BUCKET_COUNT && load_factor(size, candidate) > max_load_factor {
        candidate *= 2;
    }
    candidate
}

/// Creates `bucket_count` empty buckets.
pub(crate) fn empty_buckets(bucket_count: usize) -> Vec<Bucket> {
    let mut buckets = Vec::with_capacity(bucket_count);
    buckets.resize_with(bucket_count, Bucket::new);
    buckets
}

/// Moves every element of `buckets` into a new array of `bucket_count`
/// buckets, recomputing each index.
///
/// Elements are visited bucket by bucket in index order, and within a bucket
/// in insertion order; that visiting order becomes the order inside the new
/// buckets.
///
/// # Errors
///
/// Returns the allocation error if the new array cannot be reserved. The
/// buckets are left untouched in that case.
pub(crate) fn redistribute(
    buckets: &mut Vec<Bucket>,
    bucket_count: usize,
) -> Result<(), TryReserveError> {
    let mut rehashed = Vec::new();
    rehashed.try_reserve_exact(bucket_count)?;
    rehashed.resize_with(bucket_count, Bucket::new);

    for element in std::mem::replace(buckets, rehashed).into_iter().flatten() {
        let index = bucket_index(&element, bucket_count);
        buckets[index].push(element);
    }
    Ok(())
}
