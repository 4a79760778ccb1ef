//! # caseless-set
//!
//! A case-insensitive string hash set with separate chaining, explicit
//! load-factor control and automatic rehashing.
//!
//! ## Overview
//!
//! - [`CaseInsensitiveStringSet`]: the set itself
//! - [`SetConfig`]: validated configuration (maximum load factor)
//! - [`Statistics`]: size and bucket distribution report
//! - [`policy`]: the case-insensitive `hash` and `equal` functions
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`SetConfig`]
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events and never installs a subscriber: a
//! `debug` event per rehash, a `warn` event when a rehash is skipped because
//! the bucket array cannot be allocated, and a `trace` event per rejected
//! duplicate.
//!
//! ## Example
//!
//! ```rust
//! use caseless_set::prelude::*;
//!
//! let mut set = CaseInsensitiveStringSet::with_max_load_factor(25.0)?;
//! for word in ["abC", "aBc", "abcD", "key", "like"] {
//!     set.insert(word);
//! }
//!
//! assert_eq!(set.len(), 4);
//! assert!(set.contains("ABC"));
//! println!("{set}");
//! print!("{}", set.statistics());
//! # Ok::<(), ConfigError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use caseless_set::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{DEFAULT_MAX_LOAD_FACTOR, SetConfig};
    pub use crate::error::ConfigError;
    pub use crate::set::CaseInsensitiveStringSet;
    pub use crate::statistics::Statistics;
}

mod bucket;
mod config;
mod error;
pub mod policy;
mod rehash;
mod set;
mod statistics;

pub use config::{DEFAULT_MAX_LOAD_FACTOR, SetConfig};
pub use error::ConfigError;
pub use rehash::{INITIAL_BUCKET_COUNT, MAX_BUCKET_COUNT};
pub use set::CaseInsensitiveStringSet;
pub use statistics::Statistics;
