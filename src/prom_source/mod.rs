//! Range-query access to the upstream time-series backend
//!
//! The analysis core consumes telemetry exclusively through the
//! [`MetricSource`] trait, which keeps it testable against mocks; this
//! module also ships the production implementation backed by a
//! Prometheus-compatible HTTP API.

pub mod client;

pub use client::PromClient;

use crate::analysis_core::normalizer::RawSample;
use crate::analysis_core::window::AnalysisWindow;
use async_trait::async_trait;

#[derive(Debug)]
pub enum SourceError {
    Http(reqwest::Error),
    Status(u16),
    Decode(serde_json::Error),
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        SourceError::Http(err)
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Decode(err)
    }
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceError::Http(e) => write!(f, "HTTP error: {}", e),
            SourceError::Status(code) => write!(f, "Upstream returned status {}", code),
            SourceError::Decode(e) => write!(f, "Response decode error: {}", e),
        }
    }
}

impl std::error::Error for SourceError {}

/// Range-query interface over a time-series backend.
///
/// Implementations bound their own request latency; the analysis core adds
/// no retry or timeout logic on top.
#[async_trait]
pub trait MetricSource: Send + Sync {
    /// Fetch raw `[timestamp, value]` pairs for `expr` over `window`.
    async fn range_query(
        &self,
        expr: &str,
        window: &AnalysisWindow,
    ) -> Result<Vec<RawSample>, SourceError>;
}
