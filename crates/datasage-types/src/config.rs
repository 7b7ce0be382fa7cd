//! Global configuration shape.
//!
//! Loaded from `{data_dir}/config.toml` by the infra config loader; every
//! field has a default so a missing file means a fully default config.

use serde::{Deserialize, Serialize};

/// Global configuration for the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Upstream model identifier.
    #[serde(default = "default_model")]
    pub model: String,

    /// Deadline for one completion call, in seconds. Expiry surfaces as a
    /// timeout error to the caller; there is no automatic retry.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Sampling temperature passed through to the provider, if set.
    #[serde(default)]
    pub temperature: Option<f64>,

    /// Output token cap passed through to the provider, if set.
    #[serde(default)]
    pub max_output_tokens: Option<u32>,
}

fn default_model() -> String {
    "gemini-1.5-pro".to_string()
}

fn default_request_timeout_secs() -> u64 {
    120
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            request_timeout_secs: default_request_timeout_secs(),
            temperature: None,
            max_output_tokens: None,
        }
    }
}
