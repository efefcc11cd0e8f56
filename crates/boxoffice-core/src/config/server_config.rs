use serde::{Deserialize, Serialize};

use super::defaults;

/// HTTP listener configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind outside production mode.
    pub host: String,
    pub port: u16,
    /// Production mode binds all interfaces regardless of `host`.
    pub production: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::DEFAULT_HOST.to_string(),
            port: defaults::DEFAULT_PORT,
            production: defaults::DEFAULT_PRODUCTION,
        }
    }
}

impl ServerConfig {
    /// Interface actually bound.
    pub fn bind_host(&self) -> &str {
        if self.production {
            defaults::PRODUCTION_HOST
        } else {
            &self.host
        }
    }

    /// `host:port` suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_host(), self.port)
    }
}
