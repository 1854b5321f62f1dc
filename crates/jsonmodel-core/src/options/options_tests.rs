#![allow(non_snake_case)]

use super::*;

#[test]
fn OptionMap___iter___preserves_insertion_order() {
    let mut options = OptionMap::new();
    options.insert("--package", "com.example");
    options.insert("--array-type", "list");
    options.insert_flag("--lombok");

    let flags: Vec<_> = options.iter().map(|(flag, _)| flag).collect();

    assert_eq!(flags, vec!["--package", "--array-type", "--lombok"]);
}

#[test]
fn OptionMap___insert___updates_existing_flag_in_place() {
    let mut options = OptionMap::new();
    options.insert("--package", "com.example");
    options.insert("--array-type", "list");

    options.insert("--package", "org.acme");

    assert_eq!(options.get("--package"), Some("org.acme"));
    let flags: Vec<_> = options.iter().map(|(flag, _)| flag).collect();
    assert_eq!(flags, vec!["--package", "--array-type"]);
}

#[test]
fn OptionMap___insert_flag___stores_empty_value() {
    let mut options = OptionMap::new();
    options.insert_flag("--just-types");

    assert_eq!(options.get("--just-types"), Some(""));
    assert!(options.contains("--just-types"));
}

#[test]
fn OptionMap___take___removes_and_returns_value() {
    let mut options = OptionMap::new();
    options.insert("--package", "com.example");
    options.insert("--out", "/tmp/out");
    options.insert("--array-type", "list");

    let out = options.take("--out");

    assert_eq!(out.as_deref(), Some("/tmp/out"));
    assert!(!options.contains("--out"));
    assert_eq!(options.len(), 2);
}

#[test]
fn OptionMap___take___missing_flag_returns_none() {
    let mut options = OptionMap::new();

    assert_eq!(options.take("--out"), None);
}

#[test]
fn OptionMap___get___missing_flag_returns_none() {
    let options = OptionMap::new();

    assert_eq!(options.get("--package"), None);
    assert!(options.is_empty());
}
