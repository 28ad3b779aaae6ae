use pretty_assertions::assert_eq;
use reqlog_core::{log_debug, AppConfig, ConfigError, Level, Logger, DEFAULT_CONFIG_FILE};
use std::path::PathBuf;

#[test]
fn test_load_from_disk_and_open_logger() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("service.log");
    let config_path = dir.path().join(DEFAULT_CONFIG_FILE);
    std::fs::write(
        &config_path,
        format!(
            "; service settings\nport = 9090\nsave_path = {}\nlevel = debug\n",
            log_path.display()
        ),
    )
    .unwrap();

    let config = AppConfig::load(&config_path).unwrap();
    assert_eq!(
        config,
        AppConfig {
            port: 9090,
            save_path: log_path.clone(),
            level: Level::Debug,
        }
    );

    let logger = Logger::new(&config.save_path, config.level).unwrap();
    log_debug!(logger, "configured", config.port);
    logger.close().unwrap();

    let contents = std::fs::read_to_string(&log_path).unwrap();
    assert!(contents.ends_with("[debug] configured 9090\n"));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join(DEFAULT_CONFIG_FILE);

    match AppConfig::load(&missing) {
        Err(ConfigError::Load { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected load error, got {:?}", other),
    }
}

#[test]
fn test_zero_valued_config_is_rejected() {
    let err = AppConfig::from_ini_str("").unwrap_err();
    assert!(matches!(err, ConfigError::MissingKey("port")));
}

#[test]
fn test_relative_save_path_kept_as_is() {
    let config = AppConfig::from_ini_str("port = 8000\nsave_path = ./logs/app.log\n").unwrap();
    assert_eq!(config.save_path, PathBuf::from("./logs/app.log"));
}
