//! Python option collector: target version pick plus three boolean settings.

use jsonmodel_core::{LanguageSettings, ModelGenResult, OptionMap};

use crate::prompt::{self, Prompter};

use super::{BoolSetting, collect_bool_settings};

const BOOL_SETTINGS: &[BoolSetting] = &[
    BoolSetting {
        setting: "justTypes",
        flag: "just-types",
        placeholder: "Classes only?",
    },
    BoolSetting {
        setting: "nicePropertyNames",
        flag: "nice-property-names",
        placeholder: "Transform property names to be Pythonic?",
    },
    BoolSetting {
        setting: "pydanticBaseModel",
        flag: "pydantic-base-model",
        placeholder: "Use pydantic BaseModel?",
    },
];

pub(crate) fn collect(
    settings: &LanguageSettings,
    prompter: &mut dyn Prompter,
) -> ModelGenResult<OptionMap> {
    let default_version = settings.default_str("pythonVersion").unwrap_or("3.7").to_string();
    let version_choices: Vec<String> = settings
        .choices("pythonVersion")
        .map(<[String]>::to_vec)
        .unwrap_or_else(|| vec!["3.5".to_string(), "3.6".to_string(), "3.7".to_string()]);
    let version = prompt::pick_or_cancel(
        prompter,
        &format!("Select Python version (default: {default_version})"),
        &version_choices,
        &default_version,
    )?;

    let mut options = OptionMap::new();
    options.insert("--python-version", version);
    collect_bool_settings(prompter, settings, BOOL_SETTINGS, &mut options)?;
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
    fn collect___version_comes_first_then_bool_flags() {
        let settings = LanguageSettings::default();
        let mut prompter = ScriptedPrompter::new()
            .answer("3.6")
            .answer("yes")
            .answer("no")
            .answer("yes");

        let options = collect(&settings, &mut prompter).unwrap();

        let flags: Vec<_> = options.iter().collect();
        assert_eq!(
            flags,
            vec![
                ("--python-version", "3.6"),
                ("--just-types", ""),
                ("--no-nice-property-names", ""),
                ("--pydantic-base-model", ""),
            ]
        );
    }

    #[test]
    fn collect___accepting_defaults_emits_negative_flags() {
        let settings = LanguageSettings::default();
        let mut prompter = ScriptedPrompter::new();

        let options = collect(&settings, &mut prompter).unwrap();

        assert_eq!(options.get("--python-version"), Some("3.7"));
        assert!(options.contains("--no-just-types"));
        assert!(options.contains("--no-nice-property-names"));
        assert!(options.contains("--no-pydantic-base-model"));
    }

    #[test]
    fn collect___cancel_at_version_pick_aborts() {
        let settings = LanguageSettings::default();
        let mut prompter = ScriptedPrompter::new().cancel();

        let err = collect(&settings, &mut prompter).unwrap_err();

        assert!(matches!(err, ModelGenError::Cancelled));
    }
}
