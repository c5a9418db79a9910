//! Tests for TOML config parsing and logger construction from config.

use catlog::{CallerSource, Category, CategoryMask, Color, Config, GateMode, Logger};
use std::fs;
use tempfile::TempDir;

#[test]
fn empty_config_uses_defaults() {
    let config = Config::parse("").unwrap();
    assert_eq!(config.parse_mask(), CategoryMask::ALL);
    assert_eq!(config.parse_gate(), GateMode::Trace);
    assert_eq!(config.parse_caller(), CallerSource::Location);
    assert!(config.terminal.enabled);
    assert!(config.terminal.colors);
    assert_eq!(config.terminal.structure, "{timestamp}{tag}{caller}: {msg}");
}

#[test]
fn full_config() {
    let config = Config::parse(
        r##"
[general]
categories = "net|trace"
gate = "category"

[terminal]
colors = false
caller = "stack"
source_suffix = ".rs"
structure = "{tag} {msg}"

[colors]
net = "#010203"
view = "not-a-color"

[labels]
model = "MODEL"
"##,
    )
    .unwrap();

    assert_eq!(config.parse_mask(), Category::Net | Category::Trace);
    assert_eq!(config.parse_gate(), GateMode::Category);
    assert_eq!(config.parse_caller(), CallerSource::Stack);
    assert!(!config.terminal.colors);
    assert_eq!(config.terminal.source_suffix, ".rs");
    assert_eq!(config.color_for(Category::Net), Some(Color::new(1, 2, 3)));
    assert_eq!(config.color_for(Category::View), None);
    assert_eq!(config.label_for(Category::Model), Some("MODEL"));
    assert_eq!(config.label_for(Category::Net), None);
}

#[test]
fn invalid_values_fall_back() {
    let config = Config::parse(
        r#"
[general]
categories = "net|sound"
gate = "sometimes"

[terminal]
caller = "psychic"
"#,
    )
    .unwrap();

    assert_eq!(config.parse_mask(), CategoryMask::ALL);
    assert_eq!(config.parse_gate(), GateMode::Trace);
    assert_eq!(config.parse_caller(), CallerSource::Location);
}

#[test]
fn strict_mask_names_unknown_category() {
    let config = Config::parse("[general]\ncategories = \"net|sound\"\n").unwrap();
    let err = config.mask().unwrap_err();
    assert!(
        matches!(&err, catlog::Error::InvalidCategory(name) if name.trim() == "sound"),
        "{err}"
    );

    let config = Config::parse("[general]\ncategories = \"net, trace\"\n").unwrap();
    assert_eq!(config.mask().unwrap(), Category::Net | Category::Trace);
}

#[test]
fn malformed_toml_is_an_error() {
    let err = Config::parse("[general\ncategories = ").unwrap_err();
    assert!(matches!(err, catlog::Error::ConfigParse(_)));
}

#[test]
fn load_from_missing_file_yields_defaults() {
    let tmp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&tmp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.parse_mask(), CategoryMask::ALL);
}

#[test]
fn load_from_file() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("catlog.toml");
    fs::write(&path, "[general]\ncategories = \"view\"\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.parse_mask(), CategoryMask::from(Category::View));
}

#[test]
fn logger_from_config() {
    let config = Config::parse(
        r#"
[general]
categories = "model"
gate = "category"

[terminal]
enabled = false

[labels]
model = "M"
"#,
    )
    .unwrap();

    let logger = Logger::from_config(&config);
    assert_eq!(logger.output_count(), 0);
    assert_eq!(logger.enabled_categories(), CategoryMask::from(Category::Model));
    assert_eq!(logger.gate_mode(), GateMode::Category);
    assert_eq!(logger.label(Category::Model), "M");
    assert_eq!(logger.label(Category::View), "view log");
}

#[test]
fn logger_from_default_config_has_terminal() {
    let logger = Logger::from_config(&Config::default());
    assert_eq!(logger.output_count(), 1);
    assert_eq!(logger.enabled_categories(), CategoryMask::ALL);
}
