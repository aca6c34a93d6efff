//! # Server Configuration
//!
//! Settings are read from the environment (a `.env` file is loaded first by
//! the binary). Unset or blank variables fall back to the defaults below.
//!
//! | Variable | Default |
//! |---|---|
//! | `MODEL_SERVICE_HOST` | `127.0.0.1` |
//! | `MODEL_SERVICE_PORT` | `3000` |
//! | `MODEL_SERVICE_CORS_ORIGIN` | `http://localhost:8080` |
//! | `RUST_LOG` | `info` |

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use axum::http::HeaderValue;

pub const HOST_VAR: &str = "MODEL_SERVICE_HOST";
pub const PORT_VAR: &str = "MODEL_SERVICE_PORT";
pub const CORS_ORIGIN_VAR: &str = "MODEL_SERVICE_CORS_ORIGIN";
pub const LOG_FILTER_VAR: &str = "RUST_LOG";

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:8080";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid IP address: {value:?}")]
    InvalidHost { var: &'static str, value: String },
    #[error("{var} is not a valid port: {value:?}")]
    InvalidPort { var: &'static str, value: String },
    #[error("{var} is not a valid origin: {value:?}")]
    InvalidOrigin { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Origin allowed by the CORS layer
    pub cors_origin: HeaderValue,
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            cors_origin: HeaderValue::from_static(DEFAULT_CORS_ORIGIN),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ServerConfig {
    /// Load the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load the configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |var: &str| {
            lookup(var)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let mut config = Self::default();

        if let Some(value) = read(HOST_VAR) {
            config.host = value.parse().map_err(|_| ConfigError::InvalidHost {
                var: HOST_VAR,
                value,
            })?;
        }

        if let Some(value) = read(PORT_VAR) {
            config.port = value.parse().map_err(|_| ConfigError::InvalidPort {
                var: PORT_VAR,
                value,
            })?;
        }

        if let Some(value) = read(CORS_ORIGIN_VAR) {
            config.cors_origin =
                HeaderValue::from_str(&value).map_err(|_| ConfigError::InvalidOrigin {
                    var: CORS_ORIGIN_VAR,
                    value,
                })?;
        }

        if let Some(value) = read(LOG_FILTER_VAR) {
            config.log_filter = value;
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
