//! Tests for loading play configuration from disk.

use std::io::Write;
use tictactoe_cli::PlayConfig;
use tictactoe_core::Player;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "human = \"O\"\ncpu_delay_ms = 0\nseed = 7").unwrap();

    let config = PlayConfig::load(Some(file.path())).unwrap();
    assert_eq!(*config.human(), Player::O);
    assert_eq!(*config.cpu_delay_ms(), 0);
    assert_eq!(*config.seed(), Some(7));
}

#[test]
fn test_command_line_overrides_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "human = \"O\"\nseed = 7").unwrap();

    let config = PlayConfig::load(Some(file.path()))
        .unwrap()
        .with_overrides(Some(Player::X), None, Some(9));
    assert_eq!(*config.human(), Player::X);
    assert_eq!(*config.cpu_delay_ms(), 500);
    assert_eq!(*config.seed(), Some(9));
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = PlayConfig::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "human = \"Z\"").unwrap();

    let err = PlayConfig::load(Some(file.path())).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error:"));
}
