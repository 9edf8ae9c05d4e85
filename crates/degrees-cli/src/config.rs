//! CLI configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "DEGREES_CONFIG";

/// Location of the config file
pub fn config_file_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".degrees")
        .join("config.toml")
}

/// Configuration for the CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dataset directory used when --data-dir is not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Default output format
    pub format: String,

    /// Default expansion budget for path searches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_expansions: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            format: "table".to_string(),
            max_expansions: None,
        }
    }
}

impl Config {
    /// Load the config file, falling back to defaults if it is missing or invalid
    pub fn load() -> Self {
        let path = config_file_path();
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(_) => return Self::default(),
        };

        match toml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring invalid config file {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Write the config file, creating its directory if needed
    pub fn save(&self) -> anyhow::Result<()> {
        let path = config_file_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, toml::to_string_pretty(self)?)?;
        tracing::debug!("Saved config to {:?}", path);
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &["data_dir", "format", "max_expansions"]
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data_dir" => Some(
                self.data_dir
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            "format" => Some(self.format.clone()),
            "max_expansions" => Some(
                self.max_expansions
                    .map(|n| n.to_string())
                    .unwrap_or_default(),
            ),
            _ => None,
        }
    }

    /// Set a value; an empty value clears optional keys
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "data_dir" => {
                self.data_dir = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            "format" => match value {
                "table" | "json" | "csv" => self.format = value.to_string(),
                _ => anyhow::bail!("Invalid format '{}': expected table, json or csv", value),
            },
            "max_expansions" => {
                self.max_expansions = if value.is_empty() {
                    None
                } else {
                    let budget: usize = value.parse()?;
                    degrees_core::limits::validate_expansion_budget(budget)?;
                    Some(budget)
                };
            }
            _ => anyhow::bail!(
                "Unknown config key: {} (available: {})",
                key,
                Self::keys().join(", ")
            ),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut config = Config::default();

        config.set("data_dir", "small").unwrap();
        config.set("max_expansions", "1000").unwrap();
        config.set("format", "json").unwrap();

        assert_eq!(config.get("data_dir").as_deref(), Some("small"));
        assert_eq!(config.max_expansions, Some(1000));
        assert_eq!(config.get("format").as_deref(), Some("json"));
        assert_eq!(config.get("nope"), None);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = Config::default();

        assert!(config.set("format", "xml").is_err());
        assert!(config.set("max_expansions", "0").is_err());
        assert!(config.set("max_expansions", "lots").is_err());
        assert!(config.set("colour", "blue").is_err());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_empty_value_clears_optional_key() {
        let mut config = Config::default();
        config.set("data_dir", "small").unwrap();
        config.set("data_dir", "").unwrap();
        assert_eq!(config.data_dir, None);
    }

    #[test]
    fn test_toml_round_trip_keeps_defaults() {
        let config: Config = toml::from_str("data_dir = \"small\"\n").unwrap();
        assert_eq!(config.data_dir, Some(PathBuf::from("small")));
        assert_eq!(config.format, "table");
    }
}
