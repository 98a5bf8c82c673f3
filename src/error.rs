//! Error types for pushprom-rs.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The label mapping passed to a send was empty.
    #[error("can not send metrics: no labels provided")]
    NoLabels,

    #[error("bucket bounds are not sorted")]
    NotSorted,

    /// Permanent: the metric type has no working implementation.
    #[error("{0} is not implemented yet")]
    NotImplemented(&'static str),

    /// Failure in the underlying HTTP call, passed through untouched.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;
