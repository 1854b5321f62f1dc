//! Java option collector.
//!
//! Derives the default package from the path segments following a `java`
//! folder, and an output directory from the `schema`/`java` convention:
//! when a `schema` folder sits directly above the `java` folder, the
//! generated code belongs under the sibling `main`/`java` tree.

use std::path::{Path, PathBuf};

use jsonmodel_core::{LanguageSettings, ModelGenResult, OptionMap};

use crate::prompt::{self, Prompter};

use super::{confirm_output_directory, path_segments, yn};

/// Dot-joined package from the segments between the `java` folder and the
/// file name, when both exist
fn default_package_name(path: &Path) -> Option<String> {
    let segments = path_segments(path);
    let java_index = segments
        .iter()
        .position(|segment| segment.eq_ignore_ascii_case("java"))?;
    if java_index + 1 >= segments.len() {
        return None;
    }

    let package = &segments[java_index + 1..segments.len() - 1];
    if package.is_empty() {
        None
    } else {
        // Package identifiers are conventionally lowercase
        Some(package.join(".").to_ascii_lowercase())
    }
}

/// Output directory derived by substituting `schema` with `main` when the
/// `schema` folder directly contains the `java` folder
fn output_directory(path: &Path) -> Option<PathBuf> {
    let segments = path_segments(path);
    let schema_index = segments
        .iter()
        .position(|segment| segment.eq_ignore_ascii_case("schema"))?;
    let java_index = segments
        .iter()
        .position(|segment| segment.eq_ignore_ascii_case("java"))?;

    // The convention only applies when schema is the direct parent of java
    if java_index != schema_index + 1 {
        return None;
    }

    let mut output = segments;
    output[schema_index] = "main".to_string();
    output.truncate(output.len() - 1); // drop the file name
    Some(output.iter().collect())
}

pub(crate) fn collect(
    input_path: &Path,
    settings: &LanguageSettings,
    prompter: &mut dyn Prompter,
) -> ModelGenResult<OptionMap> {
    let derived_directory = output_directory(input_path);

    let mut default_package = settings
        .default_str("package")
        .unwrap_or("com.example.model")
        .to_string();
    if let Some(detected) = default_package_name(input_path) {
        default_package = detected;
    }

    let package = prompt::required_input(
        prompter,
        "Enter the package name for the Java model",
        "e.g., com.example.models",
        &default_package,
        "Package name",
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

    let default_lombok = settings.default_bool("lombok");
    let lombok = prompt::yes_no(
        prompter,
        &format!("Use Lombok? (default: {})", yn(default_lombok)),
        default_lombok,
    )?;

    let mut copy_annotations = None;
    if lombok {
        let default_copy = settings.default_bool("lombokCopyAnnotations");
        copy_annotations = Some(prompt::yes_no(
            prompter,
            &format!(
                "Copy annotations to Lombok-generated methods? (default: {})",
                yn(default_copy)
            ),
            default_copy,
        )?);
    }

    let output_dir = match derived_directory {
        Some(directory) => confirm_output_directory(prompter, &directory)?,
        None => None,
    };

    let mut options = OptionMap::new();
    options.insert("--package", package);
    options.insert("--array-type", array_type);

    if lombok {
        options.insert_flag("--lombok");
    } else {
        options.insert_flag("--no-lombok");
    }

    if let Some(copy) = copy_annotations {
        if copy {
            options.insert_flag("--lombok-copy-annotations");
        } else {
            options.insert_flag("--no-lombok-copy-annotations");
        }
    }

    if let Some(directory) = output_dir {
        options.insert("--out", directory.to_string_lossy());
    }

    Ok(options)
}
