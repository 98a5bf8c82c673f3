//! Push span helpers.

use tracing::Span;

use crate::model::MetricKind;

/// Start a span covering one push of `metric_name`.
///
/// The `http.status_code` field is declared empty and filled in by
/// [`record_response`].
pub fn start_push_span(metric_name: &str, kind: MetricKind) -> Span {
    tracing::debug_span!(
        "pushprom.push",
        "metric.name" = metric_name,
        "metric.kind" = %kind,
        "http.status_code" = tracing::field::Empty,
    )
}

/// Record the response status on the push span.
pub fn record_response(span: &Span, status: u16) {
    span.record("http.status_code", status);
    span.in_scope(|| {
        tracing::debug!(status, "metric pushed");
    });
}
