//! Metrics ingestion: the `MetricsSource` contract, a Prometheus-backed
//! implementation, and the per-node `NetworkMatrix` built from three
//! configured instant queries.

pub mod config;
pub mod error;
pub mod matrix;
pub mod source;
pub mod types;

pub use config::PrometheusConfig;
pub use error::{MetricsError, Result};
pub use matrix::build_network_matrix;
pub use source::{MetricsSource, PrometheusMetricsSource};
pub use types::{NetworkMatrix, NodeMetrics, Sample};
