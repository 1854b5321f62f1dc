//! The generate pipeline.
//!
//! Validates the input file, resolves the source type and target language
//! (prompting when not given on the command line), collects per-language
//! generator options, and hands the resolved invocation to the runner. Any
//! dismissed prompt aborts the whole pipeline before the generator runs, so
//! a cancelled run touches nothing on disk.

use std::path::{Path, PathBuf};

use jsonmodel_core::{
    GeneratorSettings, ModelGenError, ModelGenResult, SUPPORTED_LANGUAGES, SourceType,
    detect_json_kind, generator_code, model_file_name,
};

use crate::collect;
use crate::config::ToolConfig;
use crate::prompt::{self, AcceptDefaults, Prompter, TerminalPrompter};
use crate::runner::{self, Invocation};

const JSON_DATA: &str = "JSON Data";
const JSON_SCHEMA: &str = "JSON Schema";

pub struct GenerateArgs {
    pub file: String,
    pub lang: Option<String>,
    pub src_lang: String,
    pub settings: Option<String>,
    pub config: Option<String>,
    pub yes: bool,
}

pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    if args.yes {
        run_with_prompter(args, &mut AcceptDefaults)
    } else {
        run_with_prompter(args, &mut TerminalPrompter::new())
    }
}

fn run_with_prompter(args: GenerateArgs, prompter: &mut dyn Prompter) -> anyhow::Result<()> {
    let input_path = PathBuf::from(&args.file);

    let source_type = resolve_source_type(&args.src_lang, &input_path, prompter)?;
    let language = resolve_language(args.lang.as_deref(), prompter)?;
    let language_code = generator_code(&language)?;

    let config = ToolConfig::load(args.config.as_deref())?;
    config.validate()?;
    let command = config.command_line();

    let settings_path = args.settings.as_deref().or(config.settings.as_deref());
    let settings = GeneratorSettings::resolve(settings_path.map(Path::new));

    let options = collect::collect_options(&language, &input_path, &settings, prompter)?;

    let base_name = input_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("model");
    let output_file = model_file_name(base_name, &language);

    let model_path = runner::run(
        &command,
        Invocation {
            source_type,
            source_file: input_path,
            language_code,
            output_file,
            options,
        },
    )?;

    if model_path.is_file() {
        println!("✓ Model generated: {}", model_path.display());
    } else {
        tracing::warn!(
            "generator reported success but {} is missing",
            model_path.display()
        );
        println!(
            "Generator finished; expected output at {}",
            model_path.display()
        );
    }

    Ok(())
}

/// JSON-driven runs need a `.json` input, and the file must parse
fn validate_json_input(path: &Path) -> ModelGenResult<()> {
    let is_json = path
        .extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| extension.eq_ignore_ascii_case("json"));
    if !is_json {
        return Err(ModelGenError::NotJson(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    serde_json::from_str::<serde_json::Value>(&content).map_err(|err| {
        ModelGenError::InvalidJson {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    })?;
    Ok(())
}

/// Resolve the source kind. JSON-driven kinds validate the input file;
/// explicit `graphql`/`typescript` hand the file to the generator as-is.
fn resolve_source_type(
    src_lang: &str,
    path: &Path,
    prompter: &mut dyn Prompter,
) -> ModelGenResult<SourceType> {
    match src_lang {
        "json" => {
            validate_json_input(path)?;
            Ok(SourceType::Json)
        }
        "schema" => {
            validate_json_input(path)?;
            Ok(SourceType::Schema)
        }
        "graphql" => Ok(SourceType::GraphQl),
        "typescript" => Ok(SourceType::TypeScript),
        "auto" => {
            validate_json_input(path)?;
            confirm_source_type(detect_json_kind(path), prompter)
        }
        other => Err(ModelGenError::Config(format!(
            "unknown source kind: {other} (expected auto, json, schema, graphql, or typescript)"
        ))),
    }
}

/// Three-way pick with the auto-detected kind listed first as the default
fn confirm_source_type(
    detected: SourceType,
    prompter: &mut dyn Prompter,
) -> ModelGenResult<SourceType> {
    let detected_label = match detected {
        SourceType::Schema => JSON_SCHEMA,
        _ => JSON_DATA,
    };
    let auto = format!("Auto-detected: {detected_label}");
    let choices = vec![auto.clone(), JSON_DATA.to_string(), JSON_SCHEMA.to_string()];

    let answer = prompt::pick_or_cancel(prompter, "Select the source type", &choices, &auto)?;

    if answer == auto {
        return Ok(match detected {
            SourceType::Schema => SourceType::Schema,
            _ => SourceType::Json,
        });
    }
    Ok(if answer == JSON_SCHEMA {
        SourceType::Schema
    } else {
        SourceType::Json
    })
}

/// Resolve the target language display name: an explicit `--lang` accepts
/// the display name or generator code, otherwise prompt over the full list
fn resolve_language(lang: Option<&str>, prompter: &mut dyn Prompter) -> ModelGenResult<String> {
    if let Some(lang) = lang {
        let descriptor = SUPPORTED_LANGUAGES
            .iter()
            .find(|descriptor| {
                descriptor.display_name.eq_ignore_ascii_case(lang)
                    || descriptor.generator_code.eq_ignore_ascii_case(lang)
            })
            .ok_or_else(|| ModelGenError::UnsupportedLanguage(lang.to_string()))?;
        return Ok(descriptor.display_name.to_string());
    }

    let choices: Vec<String> = SUPPORTED_LANGUAGES
        .iter()
        .map(|descriptor| descriptor.display_name.to_string())
        .collect();
    prompt::pick_or_cancel(
        prompter,
        "Select the target language (default: Java)",
        &choices,
        "Java",
    )
}
