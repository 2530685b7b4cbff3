//! Listener and deployment settings for the thread API

use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};

use super::error::ValidationError;

/// Where the thread API listens and how it presents itself.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Literal IP to bind (IPv4 or IPv6, no brackets). Hostnames are rejected.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port for `POST /api/assistants/threads` and `/health`
    #[serde(default = "default_port")]
    pub port: u16,

    /// Deployment environment. Production switches logs to JSON and
    /// requires an HTTPS upstream.
    #[serde(default)]
    pub environment: Environment,

    /// `EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Comma-separated browser origins allowed to call the API.
    /// Unset means no CORS headers at all.
    pub cors_origins: Option<String>,
}

/// Deployment environment
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl ServerConfig {
    /// Address for the TCP listener.
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| ValidationError::InvalidSocketAddr)?;
        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Allowed CORS origins, trimmed, with blank entries dropped.
    pub fn cors_origins_list(&self) -> Vec<String> {
        let Some(ref origins) = self.cors_origins else {
            return Vec::new();
        };
        origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect()
    }

    /// Rejects port 0 (an ephemeral port clients could not find) and
    /// hosts that are not IP literals.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        self.socket_addr().map(|_| ())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: Environment::default(),
            log_level: default_log_level(),
            cors_origins: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info,portal_ai=debug,tower_http=info".to_string()
}
