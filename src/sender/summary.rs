//! Summary placeholder.

use std::convert::Infallible;

use crate::credentials::Credentials;
use crate::error::{Error, Result};
use crate::model::Value;
use crate::sender::{MetricSender, PushSender};

/// Not implemented. No value of this type can exist.
#[derive(Debug)]
pub struct Summary {
    never: Infallible,
}

impl Summary {
    /// Always fails with [`Error::NotImplemented`], whatever the arguments.
    pub fn new(
        _credentials: &Credentials,
        _metric_name: impl Into<String>,
        _help_text: impl Into<String>,
    ) -> Result<Self> {
        Err(Error::NotImplemented("summary"))
    }
}

impl MetricSender for Summary {
    fn sender(&self) -> &PushSender {
        match self.never {}
    }

    fn current_value(&self) -> Value {
        match self.never {}
    }
}
