// src/core/config_manager.rs
//! Layered client configuration: defaults, YAML file, environment, CLI flags

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::config::ClientConfig;

const DEFAULT_CONFIG_FILE: &str = "shukatsu.yaml";

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub environment: String,
    pub client: ClientConfig,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    local: Option<FileSection>,
    #[serde(default)]
    production: Option<FileSection>,
}

#[derive(Debug, Default, Clone, Deserialize)]
struct FileSection {
    base_url: Option<String>,
    timeout_ms: Option<u64>,
}

impl ConfigManager {
    /// Load configuration from the working directory and process environment
    pub fn load() -> Result<Self> {
        let environment = Self::get_environment(|key| std::env::var(key).ok());
        info!("Loading client configuration for environment: {}", environment);

        let explicit_path = std::env::var("SHUKATSU_CONFIG").ok().map(PathBuf::from);
        let file_content = Self::read_config_file(explicit_path)?;

        Self::resolve(environment, file_content.as_deref(), |key| {
            std::env::var(key).ok()
        })
    }

    /// Read the config file. A path given through `SHUKATSU_CONFIG` must
    /// exist; the default `shukatsu.yaml` is optional.
    fn read_config_file(explicit_path: Option<PathBuf>) -> Result<Option<String>> {
        let config_path = match explicit_path {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Config file not found: {}", path.display());
                }
                path
            }
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !path.exists() {
                    debug!("No {} in working directory, using defaults", DEFAULT_CONFIG_FILE);
                    return Ok(None);
                }
                path
            }
        };

        debug!("Reading config file: {}", config_path.display());
        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        Ok(Some(content))
    }

    fn get_environment(env: impl Fn(&str) -> Option<String>) -> String {
        env("SHUKATSU_ENV")
            .or_else(|| env("ENVIRONMENT"))
            .unwrap_or_else(|| "local".to_string())
    }

    /// Merge defaults, the optional file content and environment lookups
    fn resolve(
        environment: String,
        file_content: Option<&str>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let mut client = ClientConfig::default();

        if let Some(content) = file_content {
            let config_file: ConfigFile =
                serde_yaml::from_str(content).context("Failed to parse config file")?;
            let section = match environment.as_str() {
                "production" => config_file.production,
                _ => config_file.local,
            };
            if let Some(section) = section {
                if let Some(base_url) = section.base_url {
                    client = client.with_base_url(&base_url);
                }
                if let Some(timeout_ms) = section.timeout_ms {
                    client = client.with_timeout_ms(timeout_ms);
                }
            }
        }

        if let Some(base_url) = env("SHUKATSU_API_URL") {
            client = client.with_base_url(&base_url);
        }

        if let Some(timeout) = env("SHUKATSU_TIMEOUT_MS") {
            let timeout_ms = timeout
                .trim()
                .parse::<u64>()
                .with_context(|| format!("SHUKATSU_TIMEOUT_MS must be a number, got {}", timeout))?;
            client = client.with_timeout_ms(timeout_ms);
        }

        let manager = Self {
            environment,
            client,
        };
        manager.validate()?;
        Ok(manager)
    }

    /// Apply command-line flags on top of the loaded configuration
    pub fn with_overrides(mut self, base_url: Option<&str>, timeout_ms: Option<u64>) -> Result<Self> {
        if let Some(base_url) = base_url {
            self.client = self.client.with_base_url(base_url);
        }
        if let Some(timeout_ms) = timeout_ms {
            self.client = self.client.with_timeout_ms(timeout_ms);
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        if self.client.base_url.is_empty() {
            anyhow::bail!("Backend base URL must not be empty");
        }
        if !self.client.base_url.starts_with("http://") && !self.client.base_url.starts_with("https://") {
            anyhow::bail!(
                "Backend base URL must start with http:// or https://, got {}",
                self.client.base_url
            );
        }
        Ok(())
    }
}
