//! Histogram placeholder and bucket-bound validation.
//!
//! Histograms are not implemented: [`Histogram::new`] always fails and the
//! type has no values. The bucket helpers are usable on their own.

use std::convert::Infallible;

use crate::credentials::Credentials;
use crate::error::{Error, Result};
use crate::model::Value;
use crate::sender::{MetricSender, PushSender};

/// Default upper bounds, ending with the implicit `+inf` bucket.
pub const DEFAULT_BUCKETS: [f64; 15] = [
    0.005,
    0.01,
    0.025,
    0.05,
    0.075,
    0.1,
    0.25,
    0.5,
    0.75,
    1.0,
    2.5,
    5.0,
    7.5,
    10.0,
    f64::INFINITY,
];

/// Validate histogram bucket upper bounds.
///
/// Bounds must be ascending. A final `+inf` bound is appended when missing.
///
/// # Errors
/// Returns [`Error::NotSorted`] if the bounds are out of order or contain NaN.
pub fn bucket_bounds(bounds: &[f64]) -> Result<Vec<f64>> {
    let sorted = bounds
        .windows(2)
        .all(|pair| pair[0].partial_cmp(&pair[1]).is_some_and(|o| o.is_le()));
    if !sorted || bounds.iter().any(|b| b.is_nan()) {
        return Err(Error::NotSorted);
    }

    let mut bounds = bounds.to_vec();
    if bounds.last() != Some(&f64::INFINITY) {
        bounds.push(f64::INFINITY);
    }
    Ok(bounds)
}

/// Not implemented. No value of this type can exist.
#[derive(Debug)]
pub struct Histogram {
    never: Infallible,
}

impl Histogram {
    /// Always fails with [`Error::NotImplemented`], whatever the arguments.
    pub fn new(
        _credentials: &Credentials,
        _metric_name: impl Into<String>,
        _help_text: impl Into<String>,
        _bucket_bounds: &[f64],
    ) -> Result<Self> {
        Err(Error::NotImplemented("histogram"))
    }
}

impl MetricSender for Histogram {
    fn sender(&self) -> &PushSender {
        match self.never {}
    }

    fn current_value(&self) -> Value {
        match self.never {}
    }
}
