use cmodule::config::{load_rules, parse_rules, ConfigFormat, GuardStyle, ModuleRules};
use cmodule::error::Error;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_parse_json_rules() {
    let content = r#"{
        "copyright": ["line1", "line2"],
        "guardStyle": {"suffix": "_H", "prefix": "P_", "saveExtension": true},
        "endifComment": "// $(GUARD)"
    }"#;
    let rules = parse_rules(content, ConfigFormat::Json).unwrap();

    assert_eq!(
        rules,
        ModuleRules {
            copyright: vec!["line1".to_string(), "line2".to_string()],
            guard_style: GuardStyle {
                suffix: "_H".to_string(),
                prefix: "P_".to_string(),
                save_extension: true,
            },
            endif_comment: "// $(GUARD)".to_string(),
        }
    );
}

#[test]
fn test_missing_fields_default() {
    let rules = parse_rules(r#"{"guardStyle": {"suffix": "_H"}, "extra": 1}"#, ConfigFormat::Json)
        .unwrap();

    assert!(rules.copyright.is_empty());
    assert_eq!(rules.guard_style.suffix, "_H");
    assert!(!rules.guard_style.save_extension);
    assert_eq!(rules.endif_comment, "");
}

#[test]
fn test_parse_yaml_rules() {
    let content = "copyright:\n  - \"// Co\"\nguardStyle:\n  suffix: _H\nendifComment: \"// $(GUARD)\"\n";
    let rules = parse_rules(content, ConfigFormat::Yaml).unwrap();

    assert_eq!(rules.copyright, vec!["// Co"]);
    assert_eq!(rules.guard_style.suffix, "_H");
    assert_eq!(rules.endif_comment, "// $(GUARD)");
}

#[test]
fn test_config_format_from_path() {
    assert_eq!(ConfigFormat::from_path("module-rules.json"), ConfigFormat::Json);
    assert_eq!(ConfigFormat::from_path("rules.yml"), ConfigFormat::Yaml);
    assert_eq!(ConfigFormat::from_path("rules.yaml"), ConfigFormat::Yaml);
    assert_eq!(ConfigFormat::from_path("rules"), ConfigFormat::Json);
}

#[test]
fn test_load_rules() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("module-rules.json");
    fs::write(&path, r#"{"copyright": ["// Co"]}"#).unwrap();

    let rules = load_rules(&path).unwrap();
    assert_eq!(rules.copyright, vec!["// Co"]);
}

#[test]
fn test_load_rules_errors() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("module-rules.json");

    assert!(matches!(load_rules(&path), Err(Error::ConfigRead { .. })));

    fs::write(&path, "{ not json").unwrap();
    assert!(matches!(load_rules(&path), Err(Error::JsonParse(_))));

    fs::write(&path, r#"{"copyright": "not a list"}"#).unwrap();
    assert!(matches!(load_rules(&path), Err(Error::JsonParse(_))));
}
