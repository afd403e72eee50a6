use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration file structure for emraudit.
///
/// Lets users pin AWS connection settings instead of passing them through
/// the environment on every run. Configuration files are loaded from the
/// current directory, the home directory, or a specified path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// AWS connection overrides
    #[serde(default)]
    pub aws: AwsConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AwsConfig {
    /// Region to query; falls back to the ambient AWS config chain
    pub region: Option<String>,

    /// Named profile from the shared AWS credentials/config files
    pub profile: Option<String>,

    /// Alternate EMR endpoint (e.g. a local emulation stack)
    pub endpoint_url: Option<String>,
}

impl Config {
    /// Load configuration from a file.
    ///
    /// Searches for configuration files in this order:
    /// 1. Specified path
    /// 2. ./emraudit.toml / .json / .yaml / .yml
    /// 3. ~/.emraudit.toml / ~/.emraudit.yaml
    ///
    /// Returns default configuration if no file is found. A specified path
    /// that cannot be read or parsed is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load_from_path(path);
        }

        // Try common configuration file names
        let candidates = [
            "emraudit.toml",
            "emraudit.json",
            "emraudit.yaml",
            "emraudit.yml",
        ];

        for candidate in &candidates {
            let path = Path::new(candidate);
            if path.exists() {
                return Self::load_from_path(path);
            }
        }

        if let Some(home) = dirs::home_dir() {
            for candidate in [".emraudit.toml", ".emraudit.yaml"] {
                let path = home.join(candidate);
                if path.exists() {
                    return Self::load_from_path(&path);
                }
            }
        }

        // No config file found, return defaults
        Ok(Self::default())
    }

    /// Load configuration from a specific file path.
    fn load_from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");

        match extension {
            "toml" => toml::from_str(&contents)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display())),
            "json" => serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display())),
            "yaml" | "yml" => serde_yaml::from_str(&contents)
                .with_context(|| format!("Failed to parse YAML config: {}", path.display())),
            _ => {
                // Try TOML first, then JSON, then YAML
                toml::from_str(&contents)
                    .or_else(|_| serde_json::from_str(&contents))
                    .or_else(|_| serde_yaml::from_str(&contents))
                    .with_context(|| format!("Failed to parse config file: {}", path.display()))
            }
        }
    }
}
