use std::net::{IpAddr, SocketAddr};
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main configuration for the Studi API server
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub agent: AgentConfig,
}

/// Configuration for the listening socket
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind
    pub host: String,
    /// Listening port; overridden by `--port` / the `PORT` environment variable
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8000,
        }
    }
}

impl ServerConfig {
    /// Resolve the configured host and port into a socket address
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .with_context(|| format!("Invalid bind address: {}", self.host))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Configuration for cross-origin requests
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Origins allowed to call the API with credentials
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![
                "http://localhost:3000".into(),
                "http://localhost:5173".into(),
                "https://studi.app".into(),
            ],
        }
    }
}

/// Configuration for the simulated agent system
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Simulated processing time for a query, in milliseconds
    pub query_delay_ms: u64,
    /// Simulated processing time for plan creation, in milliseconds
    pub plan_delay_ms: u64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            query_delay_ms: 1000,
            plan_delay_ms: 1500,
        }
    }
}

impl AgentConfig {
    pub fn query_delay(&self) -> Duration {
        Duration::from_millis(self.query_delay_ms)
    }

    pub fn plan_delay(&self) -> Duration {
        Duration::from_millis(self.plan_delay_ms)
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}
