//! Prometheus HTTP API client

use super::{MetricSource, SourceError};
use crate::analysis_core::normalizer::RawSample;
use crate::analysis_core::window::AnalysisWindow;
use crate::config::{PromAuth, PromConfig};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Envelope returned by `query_range`. Only the fields this client reads
/// are modeled; everything else in the payload is ignored.
#[derive(Debug, Deserialize)]
struct PromResponse {
    data: Option<PromData>,
}

#[derive(Debug, Deserialize)]
struct PromData {
    #[serde(default)]
    result: Vec<PromResult>,
}

#[derive(Debug, Deserialize)]
struct PromResult {
    #[serde(default)]
    values: Vec<RawSample>,
}

/// Client for the Prometheus-compatible `query_range` endpoint.
pub struct PromClient {
    http: reqwest::Client,
    base_url: String,
    auth: PromAuth,
}

impl PromClient {
    pub fn from_config(config: &PromConfig) -> Result<Self, SourceError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            auth: config.auth.clone(),
        })
    }
}

#[async_trait]
impl MetricSource for PromClient {
    async fn range_query(
        &self,
        expr: &str,
        window: &AnalysisWindow,
    ) -> Result<Vec<RawSample>, SourceError> {
        let url = format!("{}/query_range", self.base_url);
        let mut request = self.http.get(&url).query(&[
            ("query", expr.to_string()),
            ("start", window.start.to_string()),
            ("end", window.end.to_string()),
            ("step", window.step.to_string()),
        ]);

        request = match &self.auth {
            PromAuth::None => request,
            PromAuth::Basic(encoded) => {
                request.header(reqwest::header::AUTHORIZATION, format!("Basic {}", encoded))
            }
            PromAuth::Bearer(token) => request.bearer_auth(token),
            PromAuth::UserToken { user, token } => request.basic_auth(user, Some(token)),
        };

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(SourceError::Status(response.status().as_u16()));
        }

        let body = response.text().await?;
        let parsed: PromResponse = serde_json::from_str(&body)?;

        // Only the first matching series is analyzed; the expressions are
        // written to aggregate down to a single result.
        let values = parsed
            .data
            .and_then(|d| d.result.into_iter().next())
            .map(|r| r.values)
            .unwrap_or_default();

        log::debug!("{} returned {} raw points", expr, values.len());
        Ok(values)
    }
}
