//! TypeScript option collector: four boolean settings, no path derivation.

use jsonmodel_core::{LanguageSettings, ModelGenResult, OptionMap};

use crate::prompt::Prompter;

use super::{BoolSetting, collect_bool_settings};

const BOOL_SETTINGS: &[BoolSetting] = &[
    BoolSetting {
        setting: "justTypes",
        flag: "just-types",
        placeholder: "Interfaces only?",
    },
    BoolSetting {
        setting: "runtimeTypecheck",
        flag: "runtime-typecheck",
        placeholder: "Verify JSON.parse results at runtime?",
    },
    BoolSetting {
        setting: "nicePropertyNames",
        flag: "nice-property-names",
        placeholder: "Transform property names to be JavaScripty?",
    },
    BoolSetting {
        setting: "readonly",
        flag: "readonly",
        placeholder: "Use readonly type members?",
    },
];

pub(crate) fn collect(
    settings: &LanguageSettings,
    prompter: &mut dyn Prompter,
) -> ModelGenResult<OptionMap> {
    let mut options = OptionMap::new();
    collect_bool_settings(prompter, settings, BOOL_SETTINGS, &mut options)?;
    Ok(options)
}
