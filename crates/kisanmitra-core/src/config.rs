use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
///
/// This gets loaded from config file, env vars, and CLI args.
/// Priority: CLI > Env > File > Defaults (like a sensible person would do)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    pub location: LocationConfig,
    pub data: DataConfig,
    pub display: DisplayConfig,
}

impl AppConfig {
    /// Load config from default location or fall back to defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let config: AppConfig = toml::from_str(&contents)
                .map_err(|e| crate::Error::ConfigError(format!("Failed to parse config: {}", e)))?;
            Ok(config)
        } else {
            // No config file? Use defaults
            Ok(Self::default())
        }
    }

    /// Save config to disk
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::ConfigError(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(&config_path, contents)?;
        Ok(())
    }

    /// Config file path: XDG on Linux/macOS, AppData on Windows
    fn config_path() -> crate::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| crate::Error::ConfigError("Could not find config directory".into()))?
            .join("kisanmitra");

        Ok(config_dir.join("config.toml"))
    }
}

/// Where the farmer is - drives the default state/district filters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    #[serde(default = "default_state")]
    pub state: String,

    #[serde(default = "default_district")]
    pub district: String,
}

fn default_state() -> String {
    "Punjab".to_string()
}

fn default_district() -> String {
    "Ludhiana".to_string()
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            state: default_state(),
            district: default_district(),
        }
    }
}

/// Tuning for the mock data feeds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Simulated network latency in milliseconds
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,

    /// Fixed RNG seed for reproducible mock collections
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_latency_ms() -> u64 {
    1500 // what a rural connection actually feels like
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Interface language code (en, hi, pa)
    #[serde(default = "default_language")]
    pub language: String,

    /// Row cap for compact dashboard widgets
    #[serde(default = "default_compact_limit")]
    pub compact_limit: usize,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_compact_limit() -> usize {
    5
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            compact_limit: default_compact_limit(),
        }
    }
}
