//! External generator invocation.
//!
//! Builds the argument list, runs the generator with the source file's
//! directory as working directory, and relocates the generated files when
//! the collector asked for a different output directory. `--out` is a
//! tool-level option: it is removed from the option map before the
//! generator sees it.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use jsonmodel_core::{ModelGenError, ModelGenResult, OptionMap, SourceType};

/// One generator run, fully resolved
pub struct Invocation {
    pub source_type: SourceType,
    pub source_file: PathBuf,
    pub language_code: &'static str,
    /// File name the generator is asked to write, relative to the source dir
    pub output_file: String,
    pub options: OptionMap,
}

/// Render the argument list: the fixed invocation prefix, then the
/// collected options in prompt order. Bare flags carry no value argument.
pub fn build_generator_args(
    source_type: SourceType,
    source_file: &Path,
    language_code: &str,
    output_file: &str,
    options: &OptionMap,
) -> Vec<String> {
    let mut args = vec![
        "--src-lang".to_string(),
        source_type.as_str().to_string(),
        "--src".to_string(),
        source_file.to_string_lossy().into_owned(),
        "--lang".to_string(),
        language_code.to_string(),
        "-o".to_string(),
        output_file.to_string(),
    ];

    for (flag, value) in options.iter() {
        args.push(flag.to_string());
        if !value.is_empty() {
            args.push(value.to_string());
        }
    }

    args
}

/// Run the generator and return the path of the generated model file.
///
/// A launch failure or non-zero exit is a [`ModelGenError::Generator`] with
/// the generator's stderr when it wrote any. Relocation is best-effort: when
/// moving the outputs fails, the files stay next to the source and the
/// source-side path is returned.
pub fn run(command: &[String], mut invocation: Invocation) -> ModelGenResult<PathBuf> {
    let Some((program, leading)) = command.split_first() else {
        return Err(ModelGenError::Config(
            "generator command is empty".to_string(),
        ));
    };

    let out_dir = invocation.options.take("--out").map(PathBuf::from);

    let source_dir = invocation
        .source_file
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf);

    let args = build_generator_args(
        invocation.source_type,
        &invocation.source_file,
        invocation.language_code,
        &invocation.output_file,
        &invocation.options,
    );
    tracing::info!("running: {program} {}", args.join(" "));

    let child = Command::new(program)
        .args(leading)
        .args(&args)
        .current_dir(&source_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|err| ModelGenError::Generator(format!("failed to launch {program}: {err}")))?;
    let output = child.wait_with_output().map_err(|err| {
        ModelGenError::Generator(format!("failed to collect output from {program}: {err}"))
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let message = stderr.trim();
        return Err(ModelGenError::Generator(if message.is_empty() {
            format!("exited with {}", output.status)
        } else {
            message.to_string()
        }));
    }

    let generated = source_dir.join(&invocation.output_file);
    let Some(target) = out_dir else {
        return Ok(generated);
    };
    if target == source_dir {
        return Ok(generated);
    }

    let suffix = output_suffix(&invocation.output_file);
    match relocate_outputs(&source_dir, &target, &suffix) {
        Ok(0) => {
            tracing::warn!("no generated files found to move into {}", target.display());
            Ok(generated)
        }
        Ok(moved) => {
            tracing::info!("moved {moved} file(s) to {}", target.display());
            Ok(target.join(&invocation.output_file))
        }
        Err(err) => {
            tracing::warn!(
                "could not move generated files to {}: {err}",
                target.display()
            );
            Ok(generated)
        }
    }
}

/// Suffix identifying generated files, e.g. `.java` or `.schema.json`.
/// Everything after the first dot, so multi-part extensions stay intact.
fn output_suffix(output_file: &str) -> String {
    match output_file.split_once('.') {
        Some((_, extension)) => format!(".{extension}"),
        None => output_file.to_string(),
    }
}

/// Move every file with the generated suffix from the source directory into
/// the target directory. Copy-then-remove, so it works across filesystems.
fn relocate_outputs(
    source_dir: &Path,
    target_dir: &Path,
    suffix: &str,
) -> std::io::Result<usize> {
    std::fs::create_dir_all(target_dir)?;

    let mut moved = 0;
    for entry in std::fs::read_dir(source_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if !name.ends_with(suffix) {
            continue;
        }

        std::fs::copy(entry.path(), target_dir.join(name))?;
        std::fs::remove_file(entry.path())?;
        moved += 1;
    }
    Ok(moved)
}
