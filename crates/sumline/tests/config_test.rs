//! Tests for session configuration loading.

use std::io::Write;
use sumline::SessionConfig;

#[test]
fn test_defaults() {
    let config = SessionConfig::default();
    assert_eq!(config.player_x(), "Player 1");
    assert_eq!(config.player_o(), "Player 2");
    assert!(*config.show_instructions());
    assert!(!*config.rematch());
}

#[test]
fn test_partial_file_fills_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "player_x = \"Ada\"\nrematch = true").unwrap();

    let config = SessionConfig::from_file(file.path()).unwrap();

    assert_eq!(config.player_x(), "Ada");
    assert_eq!(config.player_o(), "Player 2");
    assert!(*config.rematch());
    assert!(*config.show_instructions());
}

#[test]
fn test_flags_override_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "player_x = \"Ada\"\nshow_instructions = true").unwrap();

    let config = SessionConfig::from_file(file.path())
        .unwrap()
        .with_player_x(Some("Linus".to_string()))
        .with_player_o(None)
        .without_instructions(true);

    assert_eq!(config.player_x(), "Linus");
    assert_eq!(config.player_o(), "Player 2");
    assert!(!*config.show_instructions());
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = SessionConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "player_x = ").unwrap();

    let err = SessionConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}
