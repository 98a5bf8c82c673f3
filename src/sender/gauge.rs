//! Free-moving value pushed as a `gauge` metric.

use crate::credentials::Credentials;
use crate::error::Result;
use crate::model::{MetricKind, Value};
use crate::sender::{MetricSender, PushSender};

/// A value that can move in both directions.
///
/// The value is unconstrained. If it becomes NaN or infinite, pushprom
/// receives `"value": null`.
#[derive(Debug, Clone)]
pub struct Gauge {
    sender: PushSender,
    value: f64,
}

impl Gauge {
    /// # Errors
    /// Returns [`Error::InvalidConfiguration`](crate::error::Error::InvalidConfiguration)
    /// if `metric_name` is empty.
    pub fn new(
        credentials: &Credentials,
        metric_name: impl Into<String>,
        help_text: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            sender: PushSender::new(credentials, metric_name, help_text, MetricKind::Gauge)?,
            value: 0.0,
        })
    }

    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.sender = self.sender.with_client(client);
        self
    }

    pub fn increase_by(&mut self, delta: f64) {
        self.value += delta;
    }

    pub fn decrease_by(&mut self, delta: f64) {
        self.value -= delta;
    }

    /// Current local value.
    pub fn counter(&self) -> f64 {
        self.value
    }
}

impl MetricSender for Gauge {
    fn sender(&self) -> &PushSender {
        &self.sender
    }

    fn current_value(&self) -> Value {
        Value::Float(self.value)
    }
}
