use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

pub const CONFIG_VERSION: u32 = 1;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            store: StoreConfig::default(),
            http: HttpConfig::default(),
        }
    }
}

impl Config {
    /// Reads the TOML config at `path`.
    ///
    /// A missing file yields the defaults, an unreadable or malformed one is an error.
    pub fn load(path: &Path) -> anyhow::Result<Config> {
        if !path.exists() {
            log::info!(
                "Config {} not found, using defaults",
                path.to_string_lossy()
            );
            return Ok(Config::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.to_string_lossy()))?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> anyhow::Result<Config> {
        let cfg: Config = toml::from_str(contents).with_context(|| "Failed to parse config TOML")?;
        if cfg.version != CONFIG_VERSION {
            anyhow::bail!(
                "Unsupported config version {}, expected {}",
                cfg.version,
                CONFIG_VERSION
            );
        }
        Ok(cfg)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub bind_addr: String,
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Memory,
    /// SQLite database held in memory
    Sqlite,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,
    /// start with the sample catalog
    #[serde(default = "default_seed")]
    pub seed: bool,
}

fn default_seed() -> bool {
    true
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            seed: default_seed(),
        }
    }
}
