#![allow(non_snake_case)]
#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn ToolConfig___default___uses_quicktype_command() {
    let config = ToolConfig::default();

    assert_eq!(config.generator.command, "quicktype");
    assert!(config.settings.is_none());
}

#[test]
fn ToolConfig___parse___reads_generator_section() {
    let config = ToolConfig::parse(
        r#"
        [generator]
        command = "npx quicktype"
        "#,
    )
    .unwrap();

    assert_eq!(config.generator.command, "npx quicktype");
}

#[test]
fn ToolConfig___parse___reads_settings_path() {
    let config = ToolConfig::parse(r#"settings = "custom/settings.json""#).unwrap();

    assert_eq!(config.settings.as_deref(), Some("custom/settings.json"));
}

#[test]
fn ToolConfig___parse___empty_document_yields_defaults() {
    let config = ToolConfig::parse("").unwrap();

    assert_eq!(config.generator.command, "quicktype");
}

#[test]
fn ToolConfig___parse___rejects_malformed_toml() {
    assert!(ToolConfig::parse("[generator").is_err());
}

#[test]
fn ToolConfig___validate___rejects_empty_command() {
    let config = ToolConfig::parse(
        r#"
        [generator]
        command = "  "
        "#,
    )
    .unwrap();

    assert!(config.validate().is_err());
}

#[test]
fn ToolConfig___validate___rejects_empty_settings_path() {
    let config = ToolConfig::parse(r#"settings = """#).unwrap();

    assert!(config.validate().is_err());
}

#[test]
fn ToolConfig___validate___accepts_defaults() {
    assert!(ToolConfig::default().validate().is_ok());
}

#[test]
fn ToolConfig___command_line___splits_program_and_leading_args() {
    let config = ToolConfig::parse(
        r#"
        [generator]
        command = "npx quicktype"
        "#,
    )
    .unwrap();

    assert_eq!(config.command_line(), vec!["npx", "quicktype"]);
}

#[test]
fn ToolConfig___load___explicit_missing_path_is_an_error() {
    assert!(ToolConfig::load(Some("/nonexistent/jsonmodel.toml")).is_err());
}

#[test]
fn ToolConfig___load___reads_file_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jsonmodel.toml");
    std::fs::write(
        &path,
        r#"
        settings = "my.settings.json"

        [generator]
        command = "quicktype"
        "#,
    )
    .unwrap();

    let config = ToolConfig::load(path.to_str()).unwrap();

    assert_eq!(config.settings.as_deref(), Some("my.settings.json"));
}
