//! Tests for loading play configuration.

use std::io::Write;
use strictly_minimax::Mark;
use strictly_minimax_cli::PlayConfig;

#[test]
fn test_defaults() {
    let config = PlayConfig::default();
    assert_eq!(*config.human(), Mark::O);
    assert_eq!(config.engine(), Mark::X);
    assert!(!*config.hints());
    assert_eq!(config.human_name(), "Human");
    assert_eq!(config.engine_name(), "Minimax");
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "human = \"x\"\nhints = true\nhuman_name = \"Ada\"").unwrap();

    let config = PlayConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.human(), Mark::X);
    assert_eq!(config.engine(), Mark::O);
    assert!(*config.hints());
    assert_eq!(config.human_name(), "Ada");
    assert_eq!(config.engine_name(), "Minimax");
}

#[test]
fn test_empty_file_uses_defaults() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let config = PlayConfig::from_file(file.path()).unwrap();
    assert_eq!(config, PlayConfig::default());
}

#[test]
fn test_bad_mark_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "human = \"z\"").unwrap();
    let err = PlayConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = PlayConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_setters_override() {
    let config = PlayConfig::default().with_human(Mark::X).with_hints(true);
    assert_eq!(*config.human(), Mark::X);
    assert!(*config.hints());
}
