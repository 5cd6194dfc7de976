use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub map: MapSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_workers")]
    pub workers: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataSettings {
    /// CSV of 2024 Seoul sale records, read once at startup.
    #[serde(default = "default_listings_path")]
    pub listings_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MapSettings {
    /// Row count above which markers go into a cluster group.
    #[serde(default = "default_cluster_threshold")]
    pub cluster_threshold: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: default_workers(),
        }
    }
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            listings_path: default_listings_path(),
        }
    }
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            cluster_threshold: default_cluster_threshold(),
        }
    }
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 3000 }
fn default_workers() -> usize { 8 }
fn default_listings_path() -> String { "data/2024_price.csv".to_string() }
fn default_cluster_threshold() -> usize { 200 }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml, optional)
    /// 3. Environment variables (prefixed with HOMES__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., HOMES__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("HOMES")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
