//! Core data model.
//!
//! A pushed sample carries a metric kind, a numeric value and a set of labels,
//! wrapped in the JSON envelope pushprom expects.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Label set attached to a pushed sample (e.g. method name, datasource).
pub type Labels = BTreeMap<String, String>;

// ---------------------------------------------------------------------------
// Metric kind
// ---------------------------------------------------------------------------

/// Prometheus metric type a sender reports as.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    Counter,
    #[default]
    Gauge,
    Histogram,
    Summary,
}

impl MetricKind {
    /// Parse a type tag. Anything unrecognized becomes [`MetricKind::Gauge`].
    ///
    /// The fallback is silent for callers (no error), but a `warn` event is
    /// emitted so a misspelled tag shows up in logs.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "counter" => MetricKind::Counter,
            "gauge" => MetricKind::Gauge,
            "histogram" => MetricKind::Histogram,
            "summary" => MetricKind::Summary,
            other => {
                tracing::warn!(tag = other, "unrecognized metric kind, falling back to gauge");
                MetricKind::Gauge
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::Counter => "counter",
            MetricKind::Gauge => "gauge",
            MetricKind::Histogram => "histogram",
            MetricKind::Summary => "summary",
        }
    }
}

impl From<&str> for MetricKind {
    fn from(tag: &str) -> Self {
        MetricKind::from_tag(tag)
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Value
// ---------------------------------------------------------------------------

/// A numeric sample. Serializes as a bare JSON number, so integers stay
/// integers on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::Unsigned(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Unsigned(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Signed(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Signed(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl Value {
    /// False for NaN and infinite floats, which serialize as JSON `null`.
    pub fn is_finite(self) -> bool {
        match self {
            Value::Float(v) => v.is_finite(),
            Value::Unsigned(_) | Value::Signed(_) => true,
        }
    }
}

impl FromStr for Value {
    type Err = Error;

    /// Integers parse as integers, everything else as a float.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(v) = s.parse::<u64>() {
            return Ok(Value::Unsigned(v));
        }
        if let Ok(v) = s.parse::<i64>() {
            return Ok(Value::Signed(v));
        }
        s.parse::<f64>()
            .map(Value::Float)
            .map_err(|e| Error::Other(format!("invalid metric value {s:?}: {e}")))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unsigned(v) => write!(f, "{v}"),
            Value::Signed(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Payload
// ---------------------------------------------------------------------------

/// JSON envelope of a single push.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    #[serde(rename = "type")]
    pub kind: MetricKind,
    pub name: String,
    pub help: String,
    /// Always `"add"`.
    pub method: String,
    pub value: Value,
    pub labels: Labels,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_parse() {
        assert_eq!(MetricKind::from_tag("counter"), MetricKind::Counter);
        assert_eq!(MetricKind::from_tag("gauge"), MetricKind::Gauge);
        assert_eq!(MetricKind::from_tag("histogram"), MetricKind::Histogram);
        assert_eq!(MetricKind::from_tag("summary"), MetricKind::Summary);
    }

    #[test]
    fn unknown_tag_falls_back_to_gauge() {
        assert_eq!(MetricKind::from_tag("bogus"), MetricKind::Gauge);
        assert_eq!(MetricKind::from_tag("Counter"), MetricKind::Gauge);
        assert_eq!(MetricKind::from_tag(""), MetricKind::Gauge);
    }

    #[test]
    fn kind_serializes_as_lowercase_tag() {
        let json = serde_json::to_string(&MetricKind::Histogram).unwrap();
        assert_eq!(json, "\"histogram\"");
        assert_eq!(MetricKind::Summary.to_string(), "summary");
    }

    #[test]
    fn value_parses_integers_before_floats() {
        assert_eq!("42".parse::<Value>().unwrap(), Value::Unsigned(42));
        assert_eq!("-3".parse::<Value>().unwrap(), Value::Signed(-3));
        assert_eq!("2.5".parse::<Value>().unwrap(), Value::Float(2.5));
        assert!("nope".parse::<Value>().is_err());
    }

    #[test]
    fn value_serializes_as_bare_number() {
        assert_eq!(serde_json::to_string(&Value::from(7u64)).unwrap(), "7");
        assert_eq!(serde_json::to_string(&Value::from(-7i64)).unwrap(), "-7");
        assert_eq!(serde_json::to_string(&Value::from(0.5)).unwrap(), "0.5");
    }

    #[test]
    fn non_finite_floats_are_flagged() {
        assert!(Value::from(1.5).is_finite());
        assert!(Value::from(u64::MAX).is_finite());
        assert!(!Value::from(f64::INFINITY).is_finite());
        assert!(!Value::from(f64::NAN).is_finite());
        assert_eq!(serde_json::to_string(&Value::from(f64::NAN)).unwrap(), "null");
    }
}
