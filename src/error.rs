//! Error types for set configuration.
//!
//! Inserting a duplicate or removing a missing string is not an error; those
//! operations report `false`. The only failure a set can produce is an
//! invalid configuration at construction time.

use thiserror::Error;

/// Represents an invalid set configuration.
///
/// # Examples
///
/// ```rust
/// use caseless_set::{ConfigError, SetConfig};
///
/// let error = SetConfig::new(0.0).unwrap_err();
/// assert_eq!(error, ConfigError::NonPositiveLoadFactor { value: 0.0 });
/// assert_eq!(
///     format!("{error}"),
///     "max load factor must be > 0, got 0"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// The maximum load factor is zero or negative.
    #[error("max load factor must be > 0, got {value}")]
    NonPositiveLoadFactor {
        /// The rejected value.
        value: f64,
    },

    /// The maximum load factor is NaN.
    #[error("max load factor must be a number, got NaN")]
    NotANumber,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_non_positive_display() {
        let error = ConfigError::NonPositiveLoadFactor { value: -1.5 };
        assert_eq!(format!("{error}"), "max load factor must be > 0, got -1.5");
    }

    #[rstest]
    fn test_not_a_number_display() {
        assert_eq!(
            format!("{}", ConfigError::NotANumber),
            "max load factor must be a number, got NaN"
        );
    }

    #[rstest]
    fn test_config_error_is_error_trait() {
        fn assert_error<E: std::error::Error>(_: &E) {}

        assert_error(&ConfigError::NotANumber);
    }

    #[rstest]
    fn test_config_error_equality() {
        let error1 = ConfigError::NonPositiveLoadFactor { value: 0.0 };
        let error2 = ConfigError::NonPositiveLoadFactor { value: 0.0 };
        let error3 = ConfigError::NonPositiveLoadFactor { value: -1.0 };

        assert_eq!(error1, error2);
        assert_ne!(error1, error3);
        assert_ne!(error1, ConfigError::NotANumber);
    }
}
