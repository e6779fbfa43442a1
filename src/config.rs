use serde::{Deserialize, Serialize};
use anyhow::Result;
use crate::prober::ProbeKind;
use crate::util::{join_host_port, parse_host_port};
use std::path::Path;
use tokio::fs;

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct TargetConfig {
    pub name: String,
    pub kind: ProbeKind,
    #[serde(default)]
    pub host: String,
    pub port: Option<u16>,
    // Full URL for http probes; built from host + port when absent
    #[serde(default)]
    pub url: Option<String>,
    // Local http/socks5 proxy, e.g. "socks5://127.0.0.1:1080"
    #[serde(default)]
    pub proxy: String,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ProbeConfig {
    #[serde(default = "default_timeout_secs")]
    pub default_timeout_secs: u64,
    pub targets: Vec<TargetConfig>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

impl ProbeConfig {
    /// Get the log level as a tracing::Level
    pub fn get_tracing_level(&self) -> Result<tracing::Level> {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Ok(tracing::Level::TRACE),
            "debug" => Ok(tracing::Level::DEBUG),
            "info" => Ok(tracing::Level::INFO),
            "warn" | "warning" => Ok(tracing::Level::WARN),
            "error" => Ok(tracing::Level::ERROR),
            _ => Err(anyhow::anyhow!("Invalid log level: {}. Valid levels are: trace, debug, info, warn, error", self.log_level))
        }
    }

    /// Validate the log level is one of the supported values
    pub fn validate_log_level(&self) -> Result<()> {
        self.get_tracing_level().map(|_| ())
    }

    /// Load from the file named by `TARGET_CONFIG`, defaulting to `targets.json`.
    pub async fn load() -> Result<Self> {
        let config_file = std::env::var("TARGET_CONFIG")
            .unwrap_or_else(|_| "targets.json".to_string());
        Self::load_file(&config_file).await
    }

    pub async fn load_file(file_path: &str) -> Result<Self> {
        if !Path::new(file_path).exists() {
            return Err(anyhow::anyhow!("Config file not found: {}", file_path));
        }

        let content = fs::read_to_string(file_path).await?;
        let config: ProbeConfig = serde_json::from_str(&content)?;
        config.validate_log_level()?;
        Ok(config)
    }
}

impl TargetConfig {
    pub fn get_host_port(&self, default_port: u16) -> (String, u16) {
        match self.port {
            Some(port) => (self.host.clone(), port),
            None => parse_host_port(&self.host, default_port),
        }
    }

    pub fn get_http_url(&self) -> String {
        if let Some(url) = &self.url {
            return url.clone();
        }
        let (host, port) = self.get_host_port(80);
        format!("http://{}/", join_host_port(&host, port))
    }

    /// Raw `host:port` of a proxy server for connect probes.
    pub fn get_connect_address(&self) -> String {
        match self.port {
            Some(port) => join_host_port(&self.host, port),
            None => self.host.clone(),
        }
    }
}
