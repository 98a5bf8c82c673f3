//! Metric senders.
//!
//! [`PushSender`] owns the endpoint and metric identity and performs the
//! actual HTTP push. The typed metrics ([`Counter`], [`Gauge`], and the
//! unimplemented [`Histogram`] / [`Summary`]) wrap a `PushSender` and expose
//! it through the [`MetricSender`] capability.

pub mod counter;
pub mod gauge;
pub mod histogram;
pub mod summary;

pub use counter::Counter;
pub use gauge::Gauge;
pub use histogram::Histogram;
pub use summary::Summary;

use reqwest::Response;
use tracing::Instrument as _;

use crate::credentials::Credentials;
use crate::error::{Error, Result};
use crate::model::{Labels, MetricKind, Payload, Value};
use crate::telemetry;

/// Value of the `method` field of every push.
const PUSH_METHOD: &str = "add";

/// Sends samples of one named metric to a pushprom endpoint.
///
/// Can push any kind of metric. For Prometheus-style semantics use the typed
/// wrappers, which keep a local value and push it on demand.
#[derive(Debug, Clone)]
pub struct PushSender {
    endpoint: String,
    metric_name: String,
    help_text: String,
    kind: MetricKind,
    client: reqwest::Client,
}

impl PushSender {
    /// Create a sender for `metric_name`.
    ///
    /// `kind` accepts a [`MetricKind`] or a string tag; unrecognized tags
    /// become [`MetricKind::Gauge`] without an error.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfiguration`] if `metric_name` is empty.
    pub fn new(
        credentials: &Credentials,
        metric_name: impl Into<String>,
        help_text: impl Into<String>,
        kind: impl Into<MetricKind>,
    ) -> Result<Self> {
        let metric_name = metric_name.into();
        if metric_name.is_empty() {
            return Err(Error::InvalidConfiguration(
                "metric_name must not be empty".to_string(),
            ));
        }

        Ok(Self {
            endpoint: credentials.address(),
            metric_name,
            help_text: help_text.into(),
            kind: kind.into(),
            client: reqwest::Client::new(),
        })
    }

    /// Use a preconfigured HTTP client (timeouts, proxies, ...).
    ///
    /// The default client has no request timeout.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn metric_name(&self) -> &str {
        &self.metric_name
    }

    pub fn help_text(&self) -> &str {
        &self.help_text
    }

    pub fn kind(&self) -> MetricKind {
        self.kind
    }

    /// Build the JSON envelope for a sample without sending it.
    ///
    /// NaN and infinite values are not rejected, but they go out as
    /// `"value": null` and a `warn` event is emitted.
    ///
    /// # Errors
    /// Returns [`Error::NoLabels`] if `labels` is empty.
    pub fn payload(&self, value: impl Into<Value>, labels: &Labels) -> Result<Payload> {
        if labels.is_empty() {
            return Err(Error::NoLabels);
        }
        let value = value.into();
        if !value.is_finite() {
            tracing::warn!(
                metric = %self.metric_name,
                %value,
                "non-finite metric value will be sent as null"
            );
        }
        Ok(Payload {
            kind: self.kind,
            name: self.metric_name.clone(),
            help: self.help_text.clone(),
            method: PUSH_METHOD.to_string(),
            value,
            labels: labels.clone(),
        })
    }

    /// Push one sample with `labels` as a single JSON POST.
    ///
    /// The raw response is returned as-is; a non-2xx status is not an error.
    /// Nothing is retried.
    ///
    /// # Errors
    /// Returns [`Error::NoLabels`] if `labels` is empty, or
    /// [`Error::Transport`] if the request itself fails.
    pub async fn send(&self, value: impl Into<Value>, labels: &Labels) -> Result<Response> {
        let payload = self.payload(value, labels)?;
        let span = telemetry::push::start_push_span(&self.metric_name, self.kind);

        tracing::debug!(
            parent: &span,
            endpoint = %self.endpoint,
            value = %payload.value,
            "pushing metric"
        );
        let response = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .instrument(span.clone())
            .await?;

        telemetry::push::record_response(&span, response.status().as_u16());
        Ok(response)
    }
}

/// Shared capability of every metric type: identify the metric, report its
/// locally held value and push samples.
pub trait MetricSender {
    /// The underlying sender.
    fn sender(&self) -> &PushSender;

    /// The locally held value that [`send_current`](Self::send_current) pushes.
    fn current_value(&self) -> Value;

    fn metric_name(&self) -> &str {
        self.sender().metric_name()
    }

    fn kind(&self) -> MetricKind {
        self.sender().kind()
    }

    /// Push an arbitrary sample under this metric. See [`PushSender::send`].
    fn send(
        &self,
        value: impl Into<Value>,
        labels: &Labels,
    ) -> impl Future<Output = Result<Response>> + Send {
        self.sender().send(value.into(), labels)
    }

    /// Push the locally held value. See [`PushSender::send`].
    fn send_current(&self, labels: &Labels) -> impl Future<Output = Result<Response>> + Send {
        self.sender().send(self.current_value(), labels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds() -> Credentials {
        Credentials::new("localhost", "9091")
    }

    fn labels() -> Labels {
        Labels::from([("method".to_string(), "get_user".to_string())])
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = PushSender::new(&creds(), "", "help", MetricKind::Counter).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
        assert!(err.to_string().contains("metric_name must not be empty"));
    }

    #[test]
    fn unknown_kind_tag_becomes_gauge() {
        let sender = PushSender::new(&creds(), "requests", "help", "bogus").unwrap();
        assert_eq!(sender.kind(), MetricKind::Gauge);
    }

    #[test]
    fn sender_targets_credentials_address() {
        let sender = PushSender::new(&creds(), "requests", "help", "counter").unwrap();
        assert_eq!(sender.endpoint(), "http://localhost:9091");
        assert_eq!(sender.kind(), MetricKind::Counter);
    }

    #[test]
    fn payload_mirrors_sender_state() {
        let sender = PushSender::new(&creds(), "requests", "Total requests", "counter").unwrap();
        let payload = sender.payload(3u64, &labels()).unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "counter",
                "name": "requests",
                "help": "Total requests",
                "method": "add",
                "value": 3,
                "labels": {"method": "get_user"},
            })
        );
    }

    #[test]
    fn payload_rejects_empty_labels() {
        let sender = PushSender::new(&creds(), "requests", "help", "gauge").unwrap();
        let err = sender.payload(1.0, &Labels::new()).unwrap_err();
        assert!(matches!(err, Error::NoLabels));
    }

    #[test]
    fn non_finite_value_is_sent_as_null() {
        let sender = PushSender::new(&creds(), "temperature", "help", "gauge").unwrap();
        let payload = sender.payload(f64::INFINITY, &labels()).unwrap();
        assert_eq!(payload.value, Value::Float(f64::INFINITY));

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json["value"].is_null());
        assert_eq!(json["name"], "temperature");
    }
}
