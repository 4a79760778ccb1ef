//! Set configuration.
//!
//! [`SetConfig`] carries the maximum load factor of a
//! [`CaseInsensitiveStringSet`](crate::CaseInsensitiveStringSet). A value of
//! this type has always passed validation, so a set built from it never has
//! to check its threshold again.
//!
//! # Example
//!
//! ```rust
//! use caseless_set::{CaseInsensitiveStringSet, SetConfig};
//!
//! let config = SetConfig::new(25.0)?;
//! let set = CaseInsensitiveStringSet::with_config(config);
//! assert_eq!(set.max_load_factor(), 25.0);
//! # Ok::<(), caseless_set::ConfigError>(())
//! ```

use crate::error::ConfigError;

/// Maximum load factor used when none is given.
pub const DEFAULT_MAX_LOAD_FACTOR: f64 = 3.0;

/// Validated configuration of a set.
///
/// With the `serde` feature the configuration serializes as
/// `{"max_load_factor": 3.0}`; deserializing runs the same validation as
/// [`SetConfig::new`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSetConfig"))]
pub struct SetConfig {
    max_load_factor: f64,
}

impl SetConfig {
    /// Creates a configuration with the given maximum load factor.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotANumber`] if `max_load_factor` is NaN and
    /// [`ConfigError::NonPositiveLoadFactor`] if it is zero or negative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use caseless_set::{ConfigError, SetConfig};
    ///
    /// assert!(SetConfig::new(0.75).is_ok());
    /// assert_eq!(
    ///     SetConfig::new(-2.0),
    ///     Err(ConfigError::NonPositiveLoadFactor { value: -2.0 })
    /// );
    /// ```
    pub fn new(max_load_factor: f64) -> Result<Self, ConfigError> {
        if max_load_factor.is_nan() {
            return Err(ConfigError::NotANumber);
        }
        if max_load_factor <= 0.0 {
            return Err(ConfigError::NonPositiveLoadFactor {
                value: max_load_factor,
            });
        }
        Ok(Self { max_load_factor })
    }

    /// Returns the maximum load factor.
    #[inline]
    #[must_use]
    pub const fn max_load_factor(&self) -> f64 {
        self.max_load_factor
    }
}

impl Default for SetConfig {
    #[inline]
    fn default() -> Self {
        Self {
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
        }
    }
}

impl TryFrom<f64> for SetConfig {
    type Error = ConfigError;

    fn try_from(max_load_factor: f64) -> Result<Self, Self::Error> {
        Self::new(max_load_factor)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSetConfig {
    max_load_factor: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSetConfig> for SetConfig {
    type Error = ConfigError;

    fn try_from(raw: RawSetConfig) -> Result<Self, Self::Error> {
        Self::new(raw.max_load_factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_default_uses_default_max_load_factor() {
        assert_eq!(SetConfig::default().max_load_factor(), DEFAULT_MAX_LOAD_FACTOR);
    }

    #[rstest]
    #[case(0.0)]
    #[case(-0.0)]
    #[case(-1.0)]
    #[case(f64::NEG_INFINITY)]
    fn test_new_rejects_non_positive(#[case] value: f64) {
        assert!(matches!(
            SetConfig::new(value),
            Err(ConfigError::NonPositiveLoadFactor { .. })
        ));
    }

    #[rstest]
    fn test_new_rejects_nan() {
        assert_eq!(SetConfig::new(f64::NAN), Err(ConfigError::NotANumber));
    }

    #[rstest]
    #[case(f64::MIN_POSITIVE)]
    #[case(0.5)]
    #[case(3.0)]
    #[case(25.0)]
    fn test_new_accepts_positive(#[case] value: f64) {
        let config = SetConfig::new(value).unwrap();
        assert_eq!(config.max_load_factor(), value);
    }

    #[rstest]
    fn test_try_from_f64() {
        assert_eq!(SetConfig::try_from(3.0), Ok(SetConfig::default()));
        assert!(SetConfig::try_from(0.0).is_err());
    }
}
