//! # pushprom-rs
//!
//! Client for pushing application metrics to a pushprom endpoint.
//!
//! Each push is a single JSON POST carrying the metric type, name, help text,
//! value and labels. [`Counter`] and [`Gauge`] keep a local value and push it
//! on demand; histograms and summaries are not implemented yet.
//!
//! # Example
//! ```no_run
//! use pushprom_rs::{Counter, Credentials, Labels, MetricSender};
//!
//! # async fn run() -> pushprom_rs::error::Result<()> {
//! let creds = Credentials::new("localhost", "9091");
//! let mut jobs = Counter::new(&creds, "jobs_done", "Number of finished jobs")?;
//! jobs.increase();
//!
//! let labels = Labels::from([("worker".to_string(), "w1".to_string())]);
//! let response = jobs.send_current(&labels).await?;
//! println!("pushprom answered {}", response.status());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod credentials;
pub mod error;
pub mod model;
pub mod sender;
pub mod telemetry;

pub use credentials::Credentials;
pub use model::{Labels, MetricKind, Payload, Value};
pub use sender::{Counter, Gauge, Histogram, MetricSender, PushSender, Summary};
