//! Monotonic counter pushed as a `counter` metric.

use crate::credentials::Credentials;
use crate::error::Result;
use crate::model::{MetricKind, Value};
use crate::sender::{MetricSender, PushSender};

/// A counter that only goes up by one at a time, until [`reset`](Counter::reset).
#[derive(Debug, Clone)]
pub struct Counter {
    sender: PushSender,
    value: u64,
}

impl Counter {
    /// # Errors
    /// Returns [`Error::InvalidConfiguration`](crate::error::Error::InvalidConfiguration)
    /// if `metric_name` is empty.
    pub fn new(
        credentials: &Credentials,
        metric_name: impl Into<String>,
        help_text: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            sender: PushSender::new(credentials, metric_name, help_text, MetricKind::Counter)?,
            value: 0,
        })
    }

    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.sender = self.sender.with_client(client);
        self
    }

    pub fn increase(&mut self) {
        self.value += 1;
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }

    /// Current local value.
    pub fn counter(&self) -> u64 {
        self.value
    }
}

impl MetricSender for Counter {
    fn sender(&self) -> &PushSender {
        &self.sender
    }

    fn current_value(&self) -> Value {
        Value::Unsigned(self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter() -> Counter {
        Counter::new(&Credentials::new("localhost", "9091"), "jobs", "Jobs done").unwrap()
    }

    #[test]
    fn starts_at_zero() {
        let c = counter();
        assert_eq!(c.counter(), 0);
        assert_eq!(c.kind(), MetricKind::Counter);
    }

    #[test]
    fn increase_then_reset() {
        let mut c = counter();
        for _ in 0..5 {
            c.increase();
        }
        assert_eq!(c.counter(), 5);
        assert_eq!(c.current_value(), Value::Unsigned(5));

        c.reset();
        assert_eq!(c.counter(), 0);
    }
}
