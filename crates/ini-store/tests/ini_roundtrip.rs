//! Integration tests for the ini-store public API.
//!
//! These tests exercise parsing, mutation, serialization, and file
//! persistence together through the crate root exports, including the
//! documented edge cases around duplicate headers and undeclared sections.

use ini_store::{load_from_file, ConfigStore, FileError, ParseError};

/// Parses `text`, serializes the result, and returns the serialized form.
fn roundtrip(text: &str) -> String {
    let store: ConfigStore = text.parse().expect("parse must succeed");
    store.to_ini_string()
}

#[test]
fn test_roundtrip_reproduces_clean_input() {
    // For input with unique section names and no ` = ` inside values, the
    // round-trip reproduces the text exactly (comments and blanks dropped).
    let text = "[server]\nhost = localhost\nport = 8080\n[client]\nretries = 3\n";
    assert_eq!(roundtrip(text), text);
}

#[test]
fn test_roundtrip_drops_comments_and_blank_lines() {
    // Arrange
    let text = "; generated file\n\n[server]\n; bind host\nhost = localhost\n\n";

    // Act
    let serialized = roundtrip(text);

    // Assert
    assert_eq!(serialized, "[server]\nhost = localhost\n");
}

#[test]
fn test_roundtrip_is_stable_after_first_pass() {
    // Serializing, reparsing, and serializing again must be a fixed point.
    let text = "[a]\nk = v\n[b]\nx = y = z\n";
    let once = roundtrip(text);
    let twice = roundtrip(&once);
    assert_eq!(once, twice);
}

#[test]
fn test_duplicate_header_end_to_end() {
    // Arrange – the documented reset-on-redeclare scenario
    let text = "[server]\nhost = localhost\nport = 8080\n\n[server]\ntimeout = 30\n";

    // Act
    let store: ConfigStore = text.parse().unwrap();

    // Assert – both headers recorded, first declaration's content discarded
    assert_eq!(store.section_names(), ["server", "server"]);
    assert_eq!(store.get("server", "host"), None);
    assert_eq!(store.get("server", "timeout"), Some("30"));

    // Serialization re-emits current content under each recorded header.
    assert_eq!(
        store.to_ini_string(),
        "[server]\ntimeout = 30\n[server]\ntimeout = 30\n"
    );
}

#[test]
fn test_direct_set_without_header_is_invisible_to_serialization() {
    // Arrange
    let mut store = ConfigStore::new();

    // Act
    store.set("db", "user", "admin");

    // Assert – readable through get, absent from output
    assert_eq!(store.get("db", "user"), Some("admin"));
    assert_eq!(store.to_ini_string(), "");
}

#[test]
fn test_set_after_parse_appears_in_declared_section_output() {
    // Arrange
    let mut store: ConfigStore = "[server]\nhost = localhost\n".parse().unwrap();

    // Act – mutate a declared section, then serialize a fresh snapshot
    store.set("server", "port", "8080");

    // Assert
    assert_eq!(
        store.to_ini_string(),
        "[server]\nhost = localhost\nport = 8080\n"
    );
}

#[test]
fn test_value_containing_separator_survives_roundtrip() {
    // Arrange – the value holds a literal ` = ` tail
    let store: ConfigStore = "[s]\nformula = a = b\n".parse().unwrap();

    // Assert
    assert_eq!(store.get("s", "formula"), Some("a = b"));
    assert_eq!(store.to_ini_string(), "[s]\nformula = a = b\n");
}

#[test]
fn test_missing_separator_is_reported_not_a_crash() {
    let err = "[s]\nkeyvalue\n".parse::<ConfigStore>().unwrap_err();
    assert_eq!(
        err,
        ParseError::MissingSeparator {
            line: 2,
            content: "keyvalue".to_string(),
        }
    );
}

#[test]
fn test_file_roundtrip_through_temp_dir() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.ini");
    let store: ConfigStore = "[net]\nport = 8080\n[log]\nlevel = debug\n"
        .parse()
        .unwrap();

    // Act
    store.save_to_file(&path).unwrap();
    let loaded = load_from_file(&path).unwrap();

    // Assert
    assert_eq!(loaded, store);
    assert_eq!(loaded.section_names(), ["net", "log"]);
}

#[test]
fn test_save_then_edit_then_save_writes_fresh_snapshot() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.ini");
    let mut store: ConfigStore = "[net]\nport = 8080\n".parse().unwrap();
    store.save_to_file(&path).unwrap();

    // Act – interleave mutation and a second save
    store.set("net", "port", "9090");
    store.save_to_file(&path).unwrap();

    // Assert – the file reflects only the latest state
    let loaded = load_from_file(&path).unwrap();
    assert_eq!(loaded.get("net", "port"), Some("9090"));
}

#[test]
fn test_load_missing_file_propagates_io_error() {
    let err = load_from_file("/nonexistent/dir/app.ini").unwrap_err();
    assert!(matches!(err, FileError::Io { .. }));
}
