//! Tool configuration (jsonmodel.toml) parsing and validation

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// jsonmodel.toml structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolConfig {
    #[serde(default)]
    pub generator: GeneratorSection,

    /// Path to the generator settings document
    #[serde(default)]
    pub settings: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorSection {
    /// Command used to invoke the external generator. May contain leading
    /// arguments ("npx quicktype"); split on whitespace at invocation time.
    #[serde(default = "default_command")]
    pub command: String,
}

impl Default for GeneratorSection {
    fn default() -> Self {
        Self {
            command: default_command(),
        }
    }
}

fn default_command() -> String {
    "quicktype".to_string()
}

impl ToolConfig {
    /// Load the config. An explicit path must exist; the default path
    /// (`./jsonmodel.toml`) falls back to built-in defaults when missing.
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new("jsonmodel.toml");
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load config from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config: {:?}", path.as_ref()))?;

        Self::parse(&content)
    }

    /// Parse config from a string
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config")
    }

    /// Validate the config
    pub fn validate(&self) -> Result<()> {
        if self.generator.command.trim().is_empty() {
            anyhow::bail!("Generator command cannot be empty");
        }

        if let Some(settings) = &self.settings {
            if settings.trim().is_empty() {
                anyhow::bail!("Settings path cannot be empty when specified");
            }
        }

        Ok(())
    }

    /// The generator command split into program and leading arguments
    pub fn command_line(&self) -> Vec<String> {
        self.generator
            .command
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }
}

/// Check command implementation
pub fn check(config_path: Option<String>) -> Result<()> {
    let path = config_path.unwrap_or_else(|| "jsonmodel.toml".to_string());

    println!("Checking config: {path}");

    let config = ToolConfig::from_file(&path)?;
    config.validate()?;

    println!("✓ Config is valid");
    println!("  Generator command: {}", config.generator.command);
    if let Some(settings) = &config.settings {
        println!("  Settings document: {settings}");
    }

    Ok(())
}

#[cfg(test)]
#[path = "config/config_tests.rs"]
mod config_tests;
