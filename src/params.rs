use std::f64::consts::LN_2;

use log::warn;

use crate::error::{BloomError, Result};

/// Largest bit array a filter may use: `i32::MAX` 64-bit words, 16 GiB.
pub const MAX_SIZE: usize = (i32::MAX as usize).saturating_mul(64);

/// Validated sizing parameters of a [`crate::BloomFilter`].
///
/// Holds the caller's `(expected_elements, tolerance)` pair together with the
/// bit array size and probe count derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterParams {
    expected_elements: usize,
    tolerance: f64,
    size: usize,
    probes: usize,
}

impl FilterParams {
    /// Derives the array size and probe count for `expected_elements` keys at a
    /// false-positive rate of `tolerance`.
    ///
    /// Fails with [`BloomError::InvalidConfiguration`] if `expected_elements` is
    /// zero, if `tolerance` is not strictly between 0 and 1, or if the derived
    /// size is too large to allocate.
    pub fn new(expected_elements: usize, tolerance: f64) -> Result<Self> {
        if expected_elements == 0 {
            warn!("rejecting bloom filter configuration with zero expected elements");
            return Err(BloomError::invalid_configuration(
                "expected_elements must be greater than 0",
            ));
        }

        if tolerance.is_nan() || tolerance <= 0.0 || tolerance >= 1.0 {
            warn!("rejecting bloom filter configuration with tolerance {tolerance}");
            return Err(BloomError::invalid_configuration(format!(
                "tolerance must lie strictly between 0 and 1, got {tolerance}"
            )));
        }

        let size = filter_size(expected_elements, tolerance).ok_or_else(|| {
            warn!(
                "rejecting bloom filter configuration: {expected_elements} elements at tolerance {tolerance} overflows the bit array"
            );
            BloomError::invalid_configuration(format!(
                "{expected_elements} elements at tolerance {tolerance} need more than {MAX_SIZE} bits"
            ))
        })?;

        Ok(FilterParams {
            expected_elements,
            tolerance,
            size,
            probes: probe_count(tolerance),
        })
    }

    pub fn expected_elements(&self) -> usize {
        self.expected_elements
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Number of bits in the array.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of hash probes per key.
    pub fn probes(&self) -> usize {
        self.probes
    }
}

/// Returns `ceil(-(n * ln(e)) / ln(2)^2)`, or `None` if it exceeds the largest
/// addressable bit array.
///
/// Never returns `Some(0)`.
pub fn filter_size(expected_elements: usize, tolerance: f64) -> Option<usize> {
    let ln2_squared = LN_2.powi(2);
    let size = (-((expected_elements as f64 * tolerance.ln()) / ln2_squared)).ceil();

    if !size.is_finite() || size > MAX_SIZE as f64 {
        return None;
    }

    Some((size as usize).max(1))
}

/// Returns `ceil(-log2(e))`, at least 1.
pub fn probe_count(tolerance: f64) -> usize {
    ((-tolerance.log2()).ceil() as usize).max(1)
}
