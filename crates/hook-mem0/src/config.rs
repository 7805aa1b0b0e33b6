//! Typed configuration resolved from the environment.

use hook_common::EnvSource;
use thiserror::Error;

/// Hosted mem0 API endpoint used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.mem0.ai";

/// Configuration error. Numeric knobs fail closed: the hook logs the error
/// and emits the default result instead of crashing or silently coercing.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} is not a valid number: {value:?}")]
    Malformed { var: &'static str, value: String },

    #[error("{var} is out of range: {value:?}")]
    OutOfRange { var: &'static str, value: String },
}

/// Per-invocation mem0 settings, immutable once resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryConfig {
    /// mem0 API key; empty disables all remote calls
    pub api_key: String,
    /// Identifier partitioning stored memories per caller
    pub user_id: String,
    /// mem0 API endpoint
    pub base_url: String,
    /// Max records returned by search
    pub top_k: usize,
    /// Minimum similarity score for a search result
    pub threshold: f64,
    /// Whether every submitted prompt is also stored
    pub auto_save: bool,
    /// Max transcript messages stored at session end
    pub save_limit: usize,
}

impl MemoryConfig {
    /// Resolve the configuration from an environment snapshot.
    pub fn resolve(env: &EnvSource) -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: env.get("MEM0_API_KEY").unwrap_or_default().to_string(),
            user_id: env.get("MEM0_USER_ID").unwrap_or("cursor-user").to_string(),
            base_url: env
                .get("MEM0_BASE_URL")
                .filter(|v| !v.is_empty())
                .unwrap_or(DEFAULT_BASE_URL)
                .to_string(),
            top_k: positive_int(env, "MEM0_TOP_K", 5)?,
            threshold: unit_float(env, "MEM0_THRESHOLD", 0.3)?,
            auto_save: env
                .get("MEM0_AUTO_SAVE")
                .map(|v| v.eq_ignore_ascii_case("true"))
                .unwrap_or(true),
            save_limit: positive_int(env, "MEM0_SAVE_MESSAGES", 10)?,
        })
    }

    /// Whether remote calls are allowed at all.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

fn positive_int(env: &EnvSource, var: &'static str, default: usize) -> Result<usize, ConfigError> {
    let Some(raw) = env.get(var) else {
        return Ok(default);
    };
    let value: usize = raw.parse().map_err(|_| ConfigError::Malformed {
        var,
        value: raw.to_string(),
    })?;
    if value == 0 {
        return Err(ConfigError::OutOfRange {
            var,
            value: raw.to_string(),
        });
    }
    Ok(value)
}

fn unit_float(env: &EnvSource, var: &'static str, default: f64) -> Result<f64, ConfigError> {
    let Some(raw) = env.get(var) else {
        return Ok(default);
    };
    let value: f64 = raw.parse().map_err(|_| ConfigError::Malformed {
        var,
        value: raw.to_string(),
    })?;
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::OutOfRange {
            var,
            value: raw.to_string(),
        });
    }
    Ok(value)
}
