use super::*;

#[test]
fn test_defaults() {
    let config = MiniMaxConfig::from_toml_str("").unwrap();
    assert_eq!(config, MiniMaxConfig::default());
    assert_eq!(config.depth, 3);
    assert!(config.move_time().is_none());
}

#[test]
fn test_parse_all_fields() {
    let config = MiniMaxConfig::from_toml_str("depth = 5\nmove_time_ms = 250\n").unwrap();
    assert_eq!(config.depth, 5);
    assert_eq!(config.move_time(), Some(Duration::from_millis(250)));
}

#[test]
fn test_bad_value_is_toml_error() {
    let err = MiniMaxConfig::from_toml_str("depth = \"deep\"").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = MiniMaxConfig::load("/nonexistent/minimax.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("minimax_config_{}.toml", std::process::id()));
    std::fs::write(&path, "depth = 2").unwrap();
    let config = MiniMaxConfig::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(config.depth, 2);
}
