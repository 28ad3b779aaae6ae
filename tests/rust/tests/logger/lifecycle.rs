use reqlog_core::log_error;
use tests::{Level, Logger, LoggerError, TempLog};

#[test]
fn test_creates_missing_file() {
    let log = TempLog::new();
    assert!(!log.path.exists());

    let logger = log.open(Level::Info);
    assert!(log.path.exists());
    assert_eq!(logger.path(), log.path.as_path());
}

#[cfg(unix)]
#[test]
fn test_file_is_read_write() {
    use std::os::unix::fs::PermissionsExt;

    let log = TempLog::new();
    let _logger = log.open(Level::Info);

    // 0666 filtered through the process umask; the owner always keeps rw
    let mode = std::fs::metadata(&log.path).unwrap().permissions().mode();
    assert_eq!(mode & 0o600, 0o600);
}

#[test]
fn test_reopen_appends() {
    let log = TempLog::new();

    let first = log.open(Level::Info);
    log_error!(first, "one");
    first.close().unwrap();

    let second = log.open(Level::Info);
    log_error!(second, "two");
    second.close().unwrap();

    let messages: Vec<String> = log.lines().into_iter().map(|l| l.message).collect();
    assert_eq!(messages, vec!["one", "two"]);
}

#[test]
fn test_close_twice_returns_error() {
    let log = TempLog::new();
    let logger = log.open(Level::Info);
    let child = logger.with_correlation_id("c");

    assert!(logger.close().is_ok());
    assert!(matches!(child.close(), Err(LoggerError::Closed)));
    assert!(matches!(logger.close(), Err(LoggerError::Closed)));
}

#[test]
fn test_unopenable_path_is_reported() {
    let log = TempLog::new();
    let bad = log.path.join("not-a-dir").join("app.log");

    match Logger::new(&bad, Level::Info) {
        Err(LoggerError::Open { path, .. }) => assert_eq!(path, bad),
        other => panic!("expected open error, got {:?}", other.map(|_| ())),
    }
}
