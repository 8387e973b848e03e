use std::io::Write;

use tempfile::NamedTempFile;

use super::*;
use crate::error::ConveneError;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn empty_file_yields_defaults() {
    let file = write_config("");
    let (config, warnings) = load_with_warnings(file.path()).unwrap();
    assert!(warnings.is_empty());
    assert_eq!(config.conference.name, "Test");
    assert_eq!(config.conference.deposit, "0.01");
    assert_eq!(config.conference.limit_of_participants, 10);
    assert_eq!(config.conference.cooling_period, 604_800);
    assert_eq!(config.conference.encryption, "");
    assert_eq!(config.network.name, "development");
}

#[test]
fn partial_conference_section_keeps_other_defaults() {
    let file = write_config(
        r#"
[conference]
name = "DevCon"
limit_of_participants = 50
"#,
    );
    let (config, _) = load_with_warnings(file.path()).unwrap();
    assert_eq!(config.conference.name, "DevCon");
    assert_eq!(config.conference.limit_of_participants, 50);
    assert_eq!(config.conference.deposit, "0.01");
    assert_eq!(config.conference.cooling_period, 604_800);
}

#[test]
fn unknown_key_produces_warning_with_suggestion() {
    let file = write_config(
        r#"
[conference]
deposti = "0.02"
"#,
    );
    let (_, warnings) = load_with_warnings(file.path()).unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "deposti");
    assert_eq!(warnings[0].suggestion.as_deref(), Some("deposit"));
    assert_eq!(warnings[0].line, Some(3));
}

#[test]
fn missing_file_is_config_not_found() {
    let err = Config::load(std::path::Path::new("does/not/exist.toml")).unwrap_err();
    assert!(matches!(err, ConveneError::ConfigNotFound { .. }));
}

#[test]
fn malformed_toml_is_invalid_config() {
    let file = write_config("[conference\nname = 3");
    let err = Config::load(file.path()).unwrap_err();
    assert!(matches!(err, ConveneError::InvalidConfig { .. }));
}

#[test]
fn wrong_value_type_is_invalid_config() {
    let file = write_config(
        r#"
[conference]
limit_of_participants = "ten"
"#,
    );
    let err = Config::load(file.path()).unwrap_err();
    assert!(matches!(err, ConveneError::InvalidConfig { .. }));
}
