//! Static registry of supported target languages.
//!
//! Pure lookup tables with no external effects: display name to generator
//! code, and model file naming per language.

use crate::error::{ModelGenError, ModelGenResult};
use crate::naming::class_name;

/// One supported target language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageDescriptor {
    /// Human-readable name shown in the language picker
    pub display_name: &'static str,
    /// Identifier the external generator expects for `--lang`
    pub generator_code: &'static str,
    /// File extension for the generated model (without the leading dot)
    pub file_extension: &'static str,
}

/// All languages the external generator supports
pub const SUPPORTED_LANGUAGES: &[LanguageDescriptor] = &[
    LanguageDescriptor { display_name: "Java", generator_code: "java", file_extension: "java" },
    LanguageDescriptor { display_name: "C#", generator_code: "csharp", file_extension: "cs" },
    LanguageDescriptor { display_name: "TypeScript", generator_code: "typescript", file_extension: "ts" },
    LanguageDescriptor { display_name: "Python", generator_code: "python", file_extension: "py" },
    LanguageDescriptor { display_name: "Go", generator_code: "go", file_extension: "go" },
    LanguageDescriptor { display_name: "Kotlin", generator_code: "kotlin", file_extension: "kt" },
    LanguageDescriptor { display_name: "Dart", generator_code: "dart", file_extension: "dart" },
    LanguageDescriptor { display_name: "Swift", generator_code: "swift", file_extension: "swift" },
    LanguageDescriptor { display_name: "Ruby", generator_code: "ruby", file_extension: "rb" },
    LanguageDescriptor { display_name: "JavaScript", generator_code: "javascript", file_extension: "js" },
    LanguageDescriptor { display_name: "Flow", generator_code: "flow", file_extension: "js.flow" },
    LanguageDescriptor { display_name: "Rust", generator_code: "rust", file_extension: "rs" },
    LanguageDescriptor { display_name: "C++", generator_code: "cpp", file_extension: "cpp" },
    LanguageDescriptor { display_name: "Scala", generator_code: "scala", file_extension: "scala" },
    LanguageDescriptor { display_name: "Objective-C", generator_code: "objective-c", file_extension: "m" },
    LanguageDescriptor { display_name: "Elm", generator_code: "elm", file_extension: "elm" },
    LanguageDescriptor { display_name: "JSON Schema", generator_code: "schema", file_extension: "schema.json" },
    LanguageDescriptor { display_name: "Pike", generator_code: "pike", file_extension: "pike" },
    LanguageDescriptor { display_name: "Prop-Types", generator_code: "prop-types", file_extension: "prop-types.js" },
    LanguageDescriptor { display_name: "Haskell", generator_code: "haskell", file_extension: "hs" },
    LanguageDescriptor { display_name: "PHP", generator_code: "php", file_extension: "php" },
];

/// Look up a language descriptor by display name
pub fn find_language(display_name: &str) -> Option<&'static LanguageDescriptor> {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|lang| lang.display_name == display_name)
}

/// Resolve the generator identifier for a display name.
///
/// Unlike [`model_file_name`], an unknown language is an error here: the
/// generator would reject the invocation anyway.
pub fn generator_code(display_name: &str) -> ModelGenResult<&'static str> {
    find_language(display_name)
        .map(|lang| lang.generator_code)
        .ok_or_else(|| ModelGenError::UnsupportedLanguage(display_name.to_string()))
}

/// Compute the model file name for an input base name and target language.
///
/// `my-order` targeting Python becomes `MyOrder.py`. Unknown languages fall
/// back to a `.txt` extension rather than failing.
pub fn model_file_name(base_name: &str, display_name: &str) -> String {
    let class = class_name(base_name);
    let extension = find_language(display_name).map_or("txt", |lang| lang.file_extension);
    format!("{class}.{extension}")
}
