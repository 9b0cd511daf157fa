//! Tests for dialect file loading and CLI config resolution
use std::io::Write;

use clap::Parser;
use svg_template_converter::config::{Args, Config, Dialect};

fn write_dialect_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

#[test]
fn test_dialect_file_overrides_defaults() {
    let file = write_dialect_file("slot-attribute = \"data-name\"\ngroup-attribute = \"data-layer\"\n");

    let dialect = Dialect::from_file(file.path()).expect("load dialect");
    assert_eq!(dialect.slot_attribute, "data-name");
    assert_eq!(dialect.group_attribute, "data-layer");
}

#[test]
fn test_partial_dialect_file_keeps_remaining_defaults() {
    let file = write_dialect_file("group-attribute = \"data-layer\"\n");

    let dialect = Dialect::from_file(file.path()).expect("load dialect");
    assert_eq!(dialect.slot_attribute, "data-slot");
    assert_eq!(dialect.group_attribute, "data-layer");
}

#[test]
fn test_config_uses_explicit_dialect_file() {
    let file = write_dialect_file("slot-attribute = \"data-field\"\n");

    let args = Args::try_parse_from([
        "svg-tc",
        "diagram.svg",
        "--dialect",
        file.path().to_str().expect("utf-8 path"),
    ])
    .expect("parse args");
    let config = Config::from_args(args).expect("config");

    let dialect = config.load_dialect().expect("load dialect");
    assert_eq!(dialect.slot_attribute, "data-field");
}

#[test]
fn test_missing_dialect_file_fails() {
    let args = Args::try_parse_from([
        "svg-tc",
        "diagram.svg",
        "--dialect",
        "/nonexistent/dialect.toml",
    ])
    .expect("parse args");
    let config = Config::from_args(args).expect("config");

    assert!(config.load_dialect().is_err());
}

#[test]
fn test_malformed_dialect_file_fails() {
    let file = write_dialect_file("slot-attribute = [not, a, string]\n");
    assert!(Dialect::from_file(file.path()).is_err());
}
