//! Generator settings document resolution.
//!
//! The settings document is a JSON file keyed by lowercase language code;
//! each entry maps a setting name to its default value, description,
//! enumerated choices, and primitive type. A missing document or language
//! section yields an empty bag so collectors can fall back to hardcoded
//! defaults.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ModelGenError, ModelGenResult};

/// Settings document bundled with the tool, used when no file is found
const EMBEDDED_SETTINGS: &str = include_str!("../settings/jsonmodel.settings.json");

/// Candidate locations tried in order when no explicit path is configured
const CANDIDATE_PATHS: &[&str] = &[
    "jsonmodel.settings.json",
    "settings/jsonmodel.settings.json",
];

/// Primitive type of a setting value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingType {
    Boolean,
    String,
}

/// One setting entry: default value, description, choices, type
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingSpec {
    #[serde(default)]
    pub default: serde_json::Value,

    #[serde(default)]
    pub description: Option<String>,

    /// Enumerated allowed values, when the setting is restricted
    #[serde(default, rename = "enum")]
    pub choices: Option<Vec<String>>,

    /// Primitive type; `string` when unspecified
    #[serde(default, rename = "type")]
    pub value_type: Option<SettingType>,
}

/// Per-language bag of setting entries
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct LanguageSettings(HashMap<String, SettingSpec>);

impl LanguageSettings {
    pub fn get(&self, name: &str) -> Option<&SettingSpec> {
        self.0.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Default value as raw JSON, `Null` when absent
    pub fn default_value(&self, name: &str) -> &serde_json::Value {
        self.get(name)
            .map_or(&serde_json::Value::Null, |spec| &spec.default)
    }

    /// Default value as a string, when present and string-typed
    pub fn default_str(&self, name: &str) -> Option<&str> {
        self.default_value(name).as_str()
    }

    /// Default value as a bool; absent or non-boolean defaults are `false`
    pub fn default_bool(&self, name: &str) -> bool {
        self.default_value(name).as_bool().unwrap_or(false)
    }

    /// Enumerated choices for a restricted setting
    pub fn choices(&self, name: &str) -> Option<&[String]> {
        self.get(name)
            .and_then(|spec| spec.choices.as_deref())
    }

    pub fn description(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|spec| spec.description.as_deref())
    }

    /// Declared type of a setting, `String` when unspecified
    pub fn setting_type(&self, name: &str) -> SettingType {
        self.get(name)
            .and_then(|spec| spec.value_type)
            .unwrap_or(SettingType::String)
    }
}

/// The whole settings document, keyed by lowercase language code
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct GeneratorSettings(HashMap<String, LanguageSettings>);

impl GeneratorSettings {
    /// Resolve the settings document.
    ///
    /// Resolution order: the explicit path if given, else the first existing
    /// candidate location, else the embedded default document. Load failures
    /// are logged and resolution continues down the chain; this never fails.
    pub fn resolve(explicit: Option<&Path>) -> Self {
        if let Some(path) = explicit {
            match Self::load(path) {
                Ok(settings) => return settings,
                Err(err) => {
                    tracing::warn!("could not load settings from {}: {err}", path.display());
                }
            }
        }

        for candidate in CANDIDATE_PATHS {
            let path = PathBuf::from(candidate);
            if !path.exists() {
                continue;
            }
            match Self::load(&path) {
                Ok(settings) => return settings,
                Err(err) => {
                    tracing::warn!("could not load settings from {}: {err}", path.display());
                }
            }
        }

        tracing::debug!("no settings document found, using embedded defaults");
        Self::parse(EMBEDDED_SETTINGS).unwrap_or_else(|err| {
            tracing::error!("embedded settings document is invalid: {err}");
            Self::default()
        })
    }

    /// Load and parse a settings document from a file
    pub fn load(path: &Path) -> ModelGenResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse a settings document from a JSON string
    pub fn parse(content: &str) -> ModelGenResult<Self> {
        serde_json::from_str(content)
            .map_err(|err| ModelGenError::Config(format!("invalid settings document: {err}")))
    }

    /// Settings bag for a language code; empty when the section is missing
    pub fn language(&self, code: &str) -> LanguageSettings {
        match self.0.get(&code.to_ascii_lowercase()) {
            Some(settings) => settings.clone(),
            None => {
                tracing::debug!("no settings section for language: {code}");
                LanguageSettings::default()
            }
        }
    }
}
