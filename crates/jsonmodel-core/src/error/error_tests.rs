#![allow(non_snake_case)]

use super::*;

#[test]
fn ModelGenError___unsupported_language___names_the_language() {
    let err = ModelGenError::UnsupportedLanguage("Brainfuck".to_string());

    assert_eq!(err.to_string(), "unsupported language: Brainfuck");
}

#[test]
fn ModelGenError___missing_input___names_the_field() {
    let err = ModelGenError::MissingInput("Package name".to_string());

    assert_eq!(err.to_string(), "Package name is required");
}

#[test]
fn ModelGenError___invalid_json___includes_path_and_message() {
    let err = ModelGenError::InvalidJson {
        path: "order.json".to_string(),
        message: "expected value at line 1".to_string(),
    };

    assert_eq!(
        err.to_string(),
        "invalid JSON in order.json: expected value at line 1"
    );
}

#[test]
fn ModelGenError___generator___carries_diagnostic_text() {
    let err = ModelGenError::Generator("stderr text here".to_string());

    assert_eq!(err.to_string(), "generator failed: stderr text here");
}

#[test]
fn ModelGenError___cancelled___is_not_a_failure() {
    assert!(!ModelGenError::Cancelled.is_failure());
}

#[test]
fn ModelGenError___generator___is_a_failure() {
    assert!(ModelGenError::Generator("boom".to_string()).is_failure());
}

#[test]
fn ModelGenError___from_io_error___wraps_source() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");

    let err: ModelGenError = io.into();

    assert!(matches!(err, ModelGenError::Io(_)));
}
