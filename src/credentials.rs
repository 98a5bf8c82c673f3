//! Addressing for a pushprom endpoint.

use std::fmt;

/// Host and port of a pushprom server.
///
/// Both parts are stored verbatim. No validation or URL-encoding is applied
/// and the scheme is always `http`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    host: String,
    port: String,
}

impl Credentials {
    pub fn new(host: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: port.into(),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    /// Base URL every metric is POSTed to, e.g. `http://localhost:9091`.
    pub fn address(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "http://{}:{}", self.host, self.port)
    }
}
