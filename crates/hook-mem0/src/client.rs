//! HTTP client for the hosted mem0 API.

use crate::config::MemoryConfig;
use crate::transcript::MemoryMessage;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use thiserror::Error;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// One stored memory as returned by search, ranked by similarity.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MemoryRecord {
    #[serde(default)]
    pub memory: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub score: f64,
}

/// Failure talking to the remote service. Callers degrade every variant to
/// "no memories" / "save skipped"; nothing here may reach the host.
#[derive(Debug, Error)]
pub enum MemoryError {
    #[error("mem0 request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("mem0 returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("unexpected response shape from mem0")]
    UnexpectedShape,
}

/// Boundary to the remote memory service.
#[derive(Debug, Clone)]
pub struct MemoryClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    user_id: String,
}

impl MemoryClient {
    pub fn new(config: &MemoryConfig) -> Result<Self, MemoryError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            user_id: config.user_id.clone(),
        })
    }

    /// Search stored memories ranked by similarity to `query`.
    ///
    /// The service answers either `{"results": [...]}` or a bare array; both
    /// are accepted, anything else is [`MemoryError::UnexpectedShape`].
    pub async fn search(
        &self,
        query: &str,
        top_k: usize,
        threshold: f64,
    ) -> Result<Vec<MemoryRecord>, MemoryError> {
        let body = json!({
            "query": query,
            "filters": { "user_id": self.user_id },
            "top_k": top_k,
            "threshold": threshold,
        });

        let response = self
            .http
            .post(format!("{}/v2/memories/search/", self.base_url))
            .header("Authorization", format!("Token {}", self.api_key))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(MemoryError::Status(response.status()));
        }

        parse_search_response(response.json().await?)
    }

    /// Store messages under the configured user scope.
    pub async fn add(&self, messages: &[MemoryMessage]) -> Result<(), MemoryError> {
        let body = json!({
            "messages": messages,
            "user_id": self.user_id,
        });

        let response = self
            .http
            .post(format!("{}/v1/memories/", self.base_url))
            .header("Authorization", format!("Token {}", self.api_key))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(MemoryError::Status(response.status()));
        }

        Ok(())
    }
}

/// Extract records from either accepted response shape. Individual records
/// that do not deserialize are dropped rather than failing the batch.
fn parse_search_response(payload: Value) -> Result<Vec<MemoryRecord>, MemoryError> {
    let items = match payload {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("results") {
            Some(Value::Array(items)) => items,
            _ => return Err(MemoryError::UnexpectedShape),
        },
        _ => return Err(MemoryError::UnexpectedShape),
    };

    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}
