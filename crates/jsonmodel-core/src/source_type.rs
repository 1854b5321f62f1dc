//! Source-type detection for generator inputs.
//!
//! `.json` inputs are classified as data or schema by [`detect_json_kind`];
//! other supported extensions map to a fixed source type.

use std::path::Path;

use crate::error::{ModelGenError, ModelGenResult};

/// Source language passed to the external generator via `--src-lang`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceType {
    /// JSON Schema document
    Schema,
    /// Plain JSON data
    Json,
    /// GraphQL schema (`.graphql` / `.gql`)
    GraphQl,
    /// TypeScript source (`.ts` / `.tsx`)
    TypeScript,
}

impl SourceType {
    /// The `--src-lang` token the generator expects
    pub fn as_str(self) -> &'static str {
        match self {
            SourceType::Schema => "schema",
            SourceType::Json => "json",
            SourceType::GraphQl => "graphql",
            SourceType::TypeScript => "typescript",
        }
    }

    /// Classify a file by extension, sniffing `.json` contents when needed
    pub fn from_path(path: &Path) -> ModelGenResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Ok(detect_json_kind(path)),
            "graphql" | "gql" => Ok(SourceType::GraphQl),
            "ts" | "tsx" => Ok(SourceType::TypeScript),
            "" => Err(ModelGenError::UnsupportedExtension(format!(
                "{} has no extension",
                path.display()
            ))),
            other => Err(ModelGenError::UnsupportedExtension(format!(".{other}"))),
        }
    }
}

impl std::fmt::Display for SourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a `.json` file as data or schema.
///
/// Rules, in priority order:
/// 1. A `.schema.json` suffix decides `Schema` without reading the file.
/// 2. A `.data.json` suffix decides `Json` without reading the file.
/// 3. A filename or directory segment containing/equal to `schema`
///    tentatively marks the file as `Schema`.
/// 4. If the filename contains `data`, or step 3 left the file marked as
///    `Json`, the content is consulted: a top-level object with a `$schema`
///    key means `Schema`, anything else means `Json`. Read or parse failures
///    keep the tentative classification and are logged, never fatal.
///
/// Note the asymmetry inherited from the observed behavior: a `schema`
/// directory segment alone suppresses the content check, but a filename
/// containing `data` forces it, and the content verdict then overrides the
/// path hint.
pub fn detect_json_kind(path: &Path) -> SourceType {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    if file_name.ends_with(".schema.json") {
        return SourceType::Schema;
    }
    if file_name.ends_with(".data.json") {
        return SourceType::Json;
    }

    let mut kind = SourceType::Json;
    if file_name.contains("schema") || has_schema_directory(path) {
        kind = SourceType::Schema;
    }

    if file_name.contains("data") || kind == SourceType::Json {
        match sniff_schema_key(path) {
            Ok(true) => kind = SourceType::Schema,
            Ok(false) => kind = SourceType::Json,
            Err(err) => {
                tracing::warn!(
                    "could not inspect {} for a $schema key: {err}",
                    path.display()
                );
            }
        }
    }

    kind
}

/// True when any directory component of the path contains `schema`
fn has_schema_directory(path: &Path) -> bool {
    let Some(parent) = path.parent() else {
        return false;
    };
    parent.components().any(|component| {
        component
            .as_os_str()
            .to_str()
            .is_some_and(|segment| segment.to_ascii_lowercase().contains("schema"))
    })
}

/// Read and parse the file, reporting whether a top-level `$schema` key exists
fn sniff_schema_key(path: &Path) -> std::io::Result<bool> {
    let content = std::fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&content).map_err(std::io::Error::other)?;
    Ok(value
        .as_object()
        .is_some_and(|object| object.contains_key("$schema")))
}
