//! Tests for loading arena configuration from disk.

use std::io::Write;
use xo_arena::{ArenaArgs, ArenaConfig};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write config");
    file
}

#[test]
fn test_load_from_file() {
    let file = write_config("board_count = 3\nshow_score = false\nlog_file = \"arena.log\"\n");
    let config = ArenaConfig::from_file(file.path()).expect("Valid config");

    assert_eq!(*config.board_count(), 3);
    assert!(!*config.show_score());
    assert!(*config.show_titles());
    assert_eq!(config.log_file().to_str(), Some("arena.log"));
}

#[test]
fn test_command_line_overrides_file() {
    let file = write_config("board_count = 3\n");
    let args = ArenaArgs {
        config: Some(file.path().to_path_buf()),
        boards: Some(5),
    };
    assert_eq!(*args.load_config().expect("Valid config").board_count(), 5);
}

#[test]
fn test_out_of_range_board_count_rejected() {
    let file = write_config("board_count = 0\n");
    let err = ArenaConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("board_count"));
}

#[test]
fn test_malformed_file_rejected() {
    let file = write_config("board_count = \"many\"\n");
    let err = ArenaConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_missing_file_rejected() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let err = ArenaConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_default_config_loads_back() {
    let file = write_config(&ArenaConfig::default().to_toml().expect("Serializable"));
    assert_eq!(
        ArenaConfig::from_file(file.path()).expect("Valid config"),
        ArenaConfig::default()
    );
}
