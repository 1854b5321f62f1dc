//! jsonmodel-core - Source classification and generator plumbing for jsonmodel
//!
//! This crate provides the non-interactive building blocks of the jsonmodel
//! pipeline:
//! - [`SourceType`] and the JSON data-vs-schema detector
//! - [`LanguageDescriptor`] registry mapping display names to generator codes
//! - [`GeneratorSettings`] resolution for per-language defaults
//! - [`OptionMap`] for insertion-ordered command-line flags
//! - [`ModelGenError`] for error handling

mod error;
mod language;
mod naming;
mod options;
mod settings;
mod source_type;

pub use error::{ModelGenError, ModelGenResult};
pub use language::{
    LanguageDescriptor, SUPPORTED_LANGUAGES, find_language, generator_code, model_file_name,
};
pub use naming::{capitalize, class_name, to_pascal_case};
pub use options::OptionMap;
pub use settings::{GeneratorSettings, LanguageSettings, SettingSpec, SettingType};
pub use source_type::{SourceType, detect_json_kind};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        GeneratorSettings, LanguageSettings, ModelGenError, ModelGenResult, OptionMap, SourceType,
        generator_code, model_file_name,
    };
}
