//! Per-language option collectors.
//!
//! Each collector is a short prompt script: read the settings bag, compute a
//! smart default (often derived from the input file's path), prompt with the
//! default pre-selected, and render the answers as generator flags in an
//! [`OptionMap`]. Languages without a collector get an empty map.

use std::path::{Path, PathBuf};

use jsonmodel_core::{GeneratorSettings, LanguageSettings, ModelGenResult, OptionMap};

use crate::prompt::{self, Prompter};

mod csharp;
mod java;
mod python;
mod typescript;

/// Collect generator options for a target language
pub fn collect_options(
    language: &str,
    input_path: &Path,
    settings: &GeneratorSettings,
    prompter: &mut dyn Prompter,
) -> ModelGenResult<OptionMap> {
    match language {
        "Java" => java::collect(input_path, &settings.language("java"), prompter),
        "C#" => csharp::collect(input_path, &settings.language("csharp"), prompter),
        "TypeScript" => typescript::collect(&settings.language("typescript"), prompter),
        "Python" => python::collect(&settings.language("python"), prompter),
        _ => Ok(OptionMap::new()),
    }
}

/// One boolean generator setting: always rendered as exactly one of
/// `--<flag>` / `--no-<flag>`
pub(crate) struct BoolSetting {
    /// Key in the settings document (camelCase)
    pub setting: &'static str,
    /// Generator flag stem (kebab-case, without dashes or `no-` prefix)
    pub flag: &'static str,
    /// Question shown to the user
    pub placeholder: &'static str,
}

/// Prompt for each boolean setting and render the answer as a flag pair
pub(crate) fn collect_bool_settings(
    prompter: &mut dyn Prompter,
    settings: &LanguageSettings,
    descriptors: &[BoolSetting],
    options: &mut OptionMap,
) -> ModelGenResult<()> {
    for descriptor in descriptors {
        let default = settings.default_bool(descriptor.setting);
        let answer = prompt::yes_no(
            prompter,
            &format!("{} (default: {})", descriptor.placeholder, yn(default)),
            default,
        )?;

        if answer {
            options.insert_flag(format!("--{}", descriptor.flag));
        } else {
            options.insert_flag(format!("--no-{}", descriptor.flag));
        }
    }
    Ok(())
}

/// Confirm a derived output directory, creating it on request.
///
/// Returns `None` when the user declines or creation fails; the caller then
/// omits `--out` and output lands next to the source file.
pub(crate) fn confirm_output_directory(
    prompter: &mut dyn Prompter,
    directory: &Path,
) -> ModelGenResult<Option<PathBuf>> {
    if directory.exists() {
        return Ok(Some(directory.to_path_buf()));
    }

    let create = prompt::yes_no(
        prompter,
        &format!(
            "Output directory '{}' does not exist. Create it?",
            directory.display()
        ),
        false,
    )?;
    if !create {
        return Ok(None);
    }

    match std::fs::create_dir_all(directory) {
        Ok(()) => {
            tracing::info!("created output directory: {}", directory.display());
            Ok(Some(directory.to_path_buf()))
        }
        Err(err) => {
            tracing::error!(
                "failed to create output directory {}: {err}",
                directory.display()
            );
            Ok(None)
        }
    }
}

/// Path components as owned strings, for marker-folder scanning
pub(crate) fn path_segments(path: &Path) -> Vec<String> {
    path.components()
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .collect()
}

pub(crate) fn yn(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
