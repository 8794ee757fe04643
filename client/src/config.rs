//! Client configuration loaded via OrthoConfig.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

use crate::outbound::mock::MockLatency;

/// Default base URL of the remote users service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_LIST_DELAY_MS: u64 = 500;
const DEFAULT_CREATE_DELAY_MS: u64 = 300;

/// Errors raised while interpreting configuration values.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configured base URL does not parse.
    #[error("invalid base url {value:?}: {source}")]
    InvalidBaseUrl {
        /// Raw configured value.
        value: String,
        /// Underlying parse failure.
        #[source]
        source: url::ParseError,
    },
    /// The configured base URL cannot carry a path.
    #[error("base url {value:?} cannot be used as a resource base")]
    OpaqueBaseUrl {
        /// Raw configured value.
        value: String,
    },
}

/// Configuration values controlling the remote endpoint and mock latency.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_DIRECTORY")]
pub struct ClientSettings {
    /// Base URL of the remote users service.
    #[ortho_config(default = DEFAULT_BASE_URL.to_owned())]
    pub base_url: String,
    /// Simulated latency, in milliseconds, before the mock list is served.
    #[ortho_config(default = DEFAULT_LIST_DELAY_MS)]
    pub list_delay_ms: u64,
    /// Simulated latency, in milliseconds, before a mock user is created.
    #[ortho_config(default = DEFAULT_CREATE_DELAY_MS)]
    pub create_delay_ms: u64,
    /// Optional per-request timeout in milliseconds; unset means no timeout.
    pub request_timeout_ms: Option<u64>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            list_delay_ms: DEFAULT_LIST_DELAY_MS,
            create_delay_ms: DEFAULT_CREATE_DELAY_MS,
            request_timeout_ms: None,
        }
    }
}

impl ClientSettings {
    /// Parse the configured base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the value is not an absolute,
    /// path-capable URL.
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        let value = self.base_url.as_str();
        let url = Url::parse(value).map_err(|source| ConfigError::InvalidBaseUrl {
            value: value.to_owned(),
            source,
        })?;
        if url.cannot_be_a_base() {
            return Err(ConfigError::OpaqueBaseUrl {
                value: value.to_owned(),
            });
        }
        Ok(url)
    }

    /// Return the configured mock latency.
    #[must_use]
    pub const fn mock_latency(&self) -> MockLatency {
        MockLatency {
            list: Duration::from_millis(self.list_delay_ms),
            create: Duration::from_millis(self.create_delay_ms),
        }
    }

    /// Return the per-request timeout, if one is configured.
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }
}
