//! HTTP client for the analysis service.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use super::{AnalysisError, AnalysisRequest, AnalysisResponse, AnalysisResult};
use crate::config::Config;
use crate::reflection::ReflectionText;

/// User-Agent header sent with every request.
pub const USER_AGENT: &str = concat!("reflect/", env!("CARGO_PKG_VERSION"));

/// Path of the analysis endpoint, relative to the service base URL.
const ANALYZE_PATH: &str = "/analyze";

/// Client for `POST /analyze`.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    http: reqwest::Client,
    endpoint: String,
}

impl AnalysisClient {
    /// Creates a client for the given service base URL.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            endpoint: format!("{}{ANALYZE_PATH}", base_url.trim_end_matches('/')),
        })
    }

    /// Creates a client from config, applying the optional URL override.
    ///
    /// # Errors
    /// Returns an error if the resolved URL is invalid or the client cannot be built.
    pub fn from_config(config: &Config, url_override: Option<&str>) -> Result<Self> {
        let base_url = config.effective_service_url(url_override)?;
        Self::new(&base_url, config.request_timeout())
    }

    /// Full URL requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one reflection for analysis.
    ///
    /// The response body is interpreted whatever the HTTP status, since the
    /// service reports application errors as JSON with a 4xx/5xx status.
    ///
    /// # Errors
    /// Returns a transport error when the request fails or the body is not
    /// usable, or an application error when the service flags one.
    pub async fn analyze(&self, text: &ReflectionText) -> Result<AnalysisResult, AnalysisError> {
        let started = Instant::now();
        tracing::debug!(
            endpoint = %self.endpoint,
            chars = text.char_count(),
            "sending reflection for analysis"
        );

        let outcome = self.send(text).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &outcome {
            Ok(result) => tracing::info!(
                emotion = %result.emotion,
                confidence = result.confidence,
                suggestions = result.suggestions.len(),
                elapsed_ms,
                "analysis completed"
            ),
            Err(err) => tracing::warn!(
                kind = %err.kind,
                message = %err.message,
                details = err.details.as_deref().unwrap_or(""),
                elapsed_ms,
                "analysis failed"
            ),
        }

        outcome
    }

    async fn send(&self, text: &ReflectionText) -> Result<AnalysisResult, AnalysisError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&AnalysisRequest {
                text: text.as_str(),
            })
            .send()
            .await
            .map_err(|e| AnalysisError::transport(format!("request failed: {e}")))?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            AnalysisError::transport(format!("failed to read response body (HTTP {status}): {e}"))
        })?;

        let parsed: AnalysisResponse = serde_json::from_slice(&body).map_err(|e| {
            AnalysisError::transport(format!("invalid response body (HTTP {status}): {e}"))
        })?;

        parsed.into_result()
    }
}
