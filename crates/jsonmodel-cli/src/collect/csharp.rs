//! C# option collector.
//!
//! Derives the namespace and output directory from the last `schema` folder
//! in the path: the segments after it become the namespace (capitalized,
//! dot-joined), and the output directory is the same path with the `schema`
//! folder removed and the following folders capitalized per C# convention.

use std::path::{Path, PathBuf};

use jsonmodel_core::{LanguageSettings, ModelGenResult, OptionMap, capitalize};

use crate::prompt::{self, Prompter};

use super::{confirm_output_directory, path_segments};

#[derive(Debug, Default, PartialEq)]
struct OutputInfo {
    output_dir: Option<PathBuf>,
    namespace: Option<String>,
}

fn output_info(path: &Path) -> OutputInfo {
    let segments = path_segments(path);
    // Last schema folder wins when the path has several
    let Some(schema_index) = segments
        .iter()
        .rposition(|segment| segment.eq_ignore_ascii_case("schema"))
    else {
        return OutputInfo::default();
    };

    let namespace_segments = segments
        .get(schema_index + 1..segments.len().saturating_sub(1))
        .unwrap_or_default();
    let namespace = if namespace_segments.is_empty() {
        None
    } else {
        Some(
            namespace_segments
                .iter()
                .map(|segment| capitalize(segment))
                .collect::<Vec<_>>()
                .join("."),
        )
    };

    let mut output = segments;
    output.remove(schema_index);
    let last_directory = output.len().saturating_sub(1);
    for segment in &mut output[schema_index..last_directory] {
        *segment = capitalize(segment);
    }
    output.truncate(last_directory);

    // A leading schema folder leaves nothing to relocate into: dropping it
    // reduces the path to nothing (or the bare filesystem root), so no
    // output directory is derived and output stays next to the source file.
    let directory: PathBuf = output.iter().collect();
    let output_dir = if directory.as_os_str().is_empty() || directory.parent().is_none() {
        None
    } else {
        Some(directory)
    };

    OutputInfo {
        output_dir,
        namespace,
    }
}

pub(crate) fn collect(
    input_path: &Path,
    settings: &LanguageSettings,
    prompter: &mut dyn Prompter,
) -> ModelGenResult<OptionMap> {
    let info = output_info(input_path);

    let mut default_namespace = settings.default_str("namespace").unwrap_or("Models").to_string();
    if let Some(namespace) = &info.namespace {
        default_namespace = namespace.clone();
    }

    let namespace = prompt::required_input(
        prompter,
        "Enter the namespace for the C# model",
        "e.g., MyNamespace.Models",
        &default_namespace,
        "Namespace",
    )?;

    let default_framework = settings
        .default_str("framework")
        .unwrap_or("NewtonSoft")
        .to_string();
    let framework_choices: Vec<String> = settings
        .choices("framework")
        .map(<[String]>::to_vec)
        .unwrap_or_else(|| vec!["NewtonSoft".to_string(), "SystemTextJson".to_string()]);
    let framework = prompt::pick_or_cancel(
        prompter,
        &format!("Select the JSON framework (default: {default_framework})"),
        &framework_choices,
        &default_framework,
    )?;

    let default_array_type = settings.default_str("arrayType").unwrap_or("list").to_string();
    let array_type_choices: Vec<String> = settings
        .choices("arrayType")
        .map(<[String]>::to_vec)
        .unwrap_or_else(|| vec!["array".to_string(), "list".to_string()]);
    let array_type = prompt::pick_or_cancel(
        prompter,
        &format!("Use T[] or List<T>? (default: {default_array_type})"),
        &array_type_choices,
        &default_array_type,
    )?;

    let output_dir = match info.output_dir {
        Some(directory) => confirm_output_directory(prompter, &directory)?,
        None => None,
    };

    let mut options = OptionMap::new();
    options.insert("--namespace", namespace);
    options.insert("--framework", framework);
    options.insert("--array-type", array_type);

    if let Some(directory) = output_dir {
        options.insert("--out", directory.to_string_lossy());
    }

    Ok(options)
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::prompt::ScriptedPrompter;
    use jsonmodel_core::ModelGenError;

    #[test]
    fn output_info___derives_namespace_from_segments_after_schema() {
        let info = output_info(Path::new("/repo/schema/orders/models/order.json"));

        assert_eq!(info.namespace.as_deref(), Some("Orders.Models"));
    }

    #[test]
    fn output_info___removes_schema_and_capitalizes_following_folders() {
        let info = output_info(Path::new("/repo/schema/orders/models/order.json"));

        assert_eq!(
            info.output_dir.as_deref(),
            Some(Path::new("/repo/Orders/Models"))
        );
    }

    #[test]
    fn output_info___schema_directly_holding_file_has_no_namespace() {
        let info = output_info(Path::new("/repo/schema/order.json"));

        assert_eq!(info.namespace, None);
        assert_eq!(info.output_dir.as_deref(), Some(Path::new("/repo")));
    }

    #[test]
    fn output_info___uses_last_schema_folder() {
        let info = output_info(Path::new("/repo/schema/old/schema/models/order.json"));

        assert_eq!(info.namespace.as_deref(), Some("Models"));
        assert_eq!(
            info.output_dir.as_deref(),
            Some(Path::new("/repo/schema/old/Models"))
        );
    }

    #[test]
    fn output_info___leading_schema_folder_derives_no_directory() {
        let info = output_info(Path::new("schema/order.json"));

        assert_eq!(info.output_dir, None);
        assert_eq!(info.namespace, None);
    }

    #[test]
    fn output_info___schema_at_filesystem_root_derives_no_directory() {
        let info = output_info(Path::new("/schema/order.json"));

        assert_eq!(info.output_dir, None);
    }

    #[test]
    fn output_info___no_schema_folder_yields_nothing() {
        let info = output_info(Path::new("/repo/src/models/order.json"));

        assert_eq!(info, OutputInfo::default());
    }

    #[test]
    fn collect___renders_flags_in_prompt_order() {
        let settings = LanguageSettings::default();
        // namespace, framework, array type; no schema folder so no directory prompt
        let mut prompter = ScriptedPrompter::new()
            .answer("Acme.Models")
            .answer("SystemTextJson")
            .accept_default();

        let options = collect(
            Path::new("/repo/src/models/order.json"),
            &settings,
            &mut prompter,
        )
        .unwrap();

        let flags: Vec<_> = options.iter().collect();
        assert_eq!(
            flags,
            vec![
                ("--namespace", "Acme.Models"),
                ("--framework", "SystemTextJson"),
                ("--array-type", "list"),
            ]
        );
    }

    #[test]
    fn collect___derived_namespace_is_the_default() {
        let settings = LanguageSettings::default();
        let mut prompter = ScriptedPrompter::new()
            .accept_default()
            .accept_default()
            .accept_default()
            .answer("no"); // decline output directory creation

        let options = collect(
            Path::new("/repo/schema/orders/models/order.json"),
            &settings,
            &mut prompter,
        )
        .unwrap();

        assert_eq!(options.get("--namespace"), Some("Orders.Models"));
        assert!(!options.contains("--out"));
    }

    #[test]
    fn collect___leading_schema_folder_emits_no_out_flag() {
        let settings = LanguageSettings::default();
        // namespace, framework, array type; a directory prompt would hit the
        // trailing cancel and abort
        let mut prompter = ScriptedPrompter::new()
            .accept_default()
            .accept_default()
            .accept_default()
            .cancel();

        let options = collect(Path::new("schema/order.json"), &settings, &mut prompter).unwrap();

        assert!(!options.contains("--out"));
        assert_eq!(options.get("--namespace"), Some("Models"));
    }

    #[test]
    fn collect___empty_namespace_is_missing_input() {
        let settings = LanguageSettings::default();
        let mut prompter = ScriptedPrompter::new().answer("");

        let err = collect(
            Path::new("/repo/src/models/order.json"),
            &settings,
            &mut prompter,
        )
        .unwrap_err();

        assert!(matches!(err, ModelGenError::MissingInput(field) if field == "Namespace"));
    }

    #[test]
    fn collect___cancel_aborts() {
        let settings = LanguageSettings::default();
        let mut prompter = ScriptedPrompter::new().answer("Acme.Models").cancel();

        let err = collect(
            Path::new("/repo/src/models/order.json"),
            &settings,
            &mut prompter,
        )
        .unwrap_err();

        assert!(matches!(err, ModelGenError::Cancelled));
    }
}
