use serde::Deserialize;

use crate::errors::ConfigError;

fn default_port() -> u16 { 8080 }
fn default_host() -> String { "0.0.0.0".to_string() }
fn default_static_dir() -> String { "static".to_string() }
fn default_cors_permissive() -> bool { true }
fn default_log_filter() -> String { "info".to_string() }

fn default_savings_delay_ms() -> u64 { 2000 }
fn default_carbon_delay_ms() -> u64 { 2500 }
fn default_panel_delay_ms() -> u64 { 2500 }
fn default_farm_delay_ms() -> u64 { 3000 }
fn default_orientation_delay_ms() -> u64 { 3000 }

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    /// Directory served as the site front-end (fallback route)
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    #[serde(default = "default_cors_permissive")]
    pub cors_permissive: bool,
    /// `tracing_subscriber::EnvFilter` directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    #[serde(default)]
    pub presentation: PresentationConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Pauses applied before an estimate is handed back, mirroring the
/// "analyzing…" wait of the calculator pages. Off unless `simulate_delay` is set.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PresentationConfig {
    #[serde(default)]
    pub simulate_delay: bool,
    #[serde(default = "default_savings_delay_ms")]
    pub savings_delay_ms: u64,
    #[serde(default = "default_carbon_delay_ms")]
    pub carbon_delay_ms: u64,
    #[serde(default = "default_panel_delay_ms")]
    pub panel_delay_ms: u64,
    #[serde(default = "default_farm_delay_ms")]
    pub farm_delay_ms: u64,
    #[serde(default = "default_orientation_delay_ms")]
    pub orientation_delay_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            simulate_delay: false,
            savings_delay_ms: default_savings_delay_ms(),
            carbon_delay_ms: default_carbon_delay_ms(),
            panel_delay_ms: default_panel_delay_ms(),
            farm_delay_ms: default_farm_delay_ms(),
            orientation_delay_ms: default_orientation_delay_ms(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            static_dir: default_static_dir(),
            cors_permissive: default_cors_permissive(),
            log_filter: default_log_filter(),
            presentation: PresentationConfig::default(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        Self::parse(path, &content)
    }

    fn parse(path: &str, content: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &str) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Read { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }
}
