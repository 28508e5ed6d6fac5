//! Process-wide stage configuration.
//!
//! The only configured value is the default inference endpoint. It is
//! injected into the infer stage at construction time so tests can
//! exercise endpoint resolution without touching the environment.

use serde::{Deserialize, Serialize};

/// Environment variable naming the default inference endpoint.
///
/// Read by [`StageConfig::from_env`], which the CLI entry point uses;
/// library consumers construct a [`StageConfig`] directly.
pub const ENDPOINT_ENV: &str = "LENSGATE_ENDPOINT";

/// Configuration shared by stage handlers within one process.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StageConfig {
    /// Endpoint invoked when the input envelope names none.
    #[serde(default)]
    pub default_endpoint: Option<String>,
}

impl StageConfig {
    /// Configuration with an explicit default endpoint.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            default_endpoint: Some(endpoint.into()),
        }
    }

    /// Read the default endpoint from [`ENDPOINT_ENV`].
    ///
    /// An unset or empty variable leaves the default unconfigured.
    pub fn from_env() -> Self {
        let default_endpoint = std::env::var(ENDPOINT_ENV)
            .ok()
            .filter(|v| !v.is_empty());
        Self { default_endpoint }
    }
}
