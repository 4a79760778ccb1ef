//! Distribution statistics and the human-readable report.

use std::fmt;

use crate::bucket::Bucket;

/// A snapshot of a set's size and bucket distribution.
///
/// The [`Display`](fmt::Display) implementation renders the report:
///
/// ```text
/// set size =            4
/// load factor =         0.5 ( max = 25 )
/// standard deviation =  0.707107
/// ```
///
/// Floating-point values are printed with six significant digits, in the
/// shortest of fixed or scientific notation, with trailing zeros removed.
///
/// # Examples
///
/// ```rust
/// use caseless_set::CaseInsensitiveStringSet;
///
/// let set: CaseInsensitiveStringSet = ["if", "the", "value"].into_iter().collect();
/// let statistics = set.statistics();
/// assert_eq!(statistics.size, 3);
/// assert_eq!(statistics.bucket_count, 8);
/// assert!(format!("{statistics}").starts_with("set size =            3\n"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Statistics {
    /// Number of stored elements.
    pub size: usize,
    /// Number of buckets.
    pub bucket_count: usize,
    /// `size / bucket_count`.
    pub load_factor: f64,
    /// Configured maximum load factor.
    pub max_load_factor: f64,
    /// Population standard deviation of the bucket lengths around the load factor.
    pub standard_deviation: f64,
}

impl fmt::Display for Statistics {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(formatter, "set size =            {}", self.size)?;
        writeln!(
            formatter,
            "load factor =         {} ( max = {} )",
            Significant(self.load_factor),
            Significant(self.max_load_factor)
        )?;
        writeln!(
            formatter,
            "standard deviation =  {}",
            Significant(self.standard_deviation)
        )
    }
}

/// Renders an `f64` with [`Significant::DIGITS`] significant digits, like
/// the `%g` conversion.
struct Significant(f64);

impl Significant {
    const DIGITS: i32 = 6;
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

impl fmt::Display for Significant {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            return formatter.write_str("nan");
        }
        if value.is_infinite() {
            return formatter.write_str(if value < 0.0 { "-inf" } else { "inf" });
        }
        if value == 0.0 {
            return formatter.write_str("0");
        }

        // Rounding to the target precision first settles the exponent, so
        // 999999.5 becomes 1e+06 rather than 999999.
        let scientific = format!("{:.*e}", (Self::DIGITS - 1).unsigned_abs() as usize, value);
        let Some((mantissa, exponent)) = scientific.split_once('e') else {
            return formatter.write_str(&scientific);
        };
        let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;

        if exponent < -4 || exponent >= Self::DIGITS {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(
                formatter,
                "{}e{sign}{:02}",
                trim_fraction(mantissa),
                exponent.unsigned_abs()
            )
        } else {
            let decimals = (Self::DIGITS - 1 - exponent).unsigned_abs() as usize;
            formatter.write_str(trim_fraction(&format!("{value:.decimals$}")))
        }
    }
}

/// Computes `sqrt((1 / n) * sum((len_i - load_factor)^2))` over the buckets.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn standard_deviation(buckets: &[Bucket], load_factor: f64) -> f64 {
    if buckets.is_empty() {
        return 0.0;
    }
    let sum: f64 = buckets
        .iter()
        .map(|bucket| {
            let difference = bucket.len() as f64 - load_factor;
            difference * difference
        })
        .sum();
    (sum / buckets.len() as f64).sqrt()
}
