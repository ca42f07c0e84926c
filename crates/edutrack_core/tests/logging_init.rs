use edutrack_core::{init_logging, logging_status, LoggingError};
use tempfile::TempDir;

#[test]
fn init_is_idempotent_and_rejects_reconfiguration() {
    let dir = TempDir::new().expect("temp dir");
    let log_dir = dir.path().join("logs");
    let log_dir = log_dir.to_str().expect("utf-8 temp path");

    init_logging("info", log_dir).expect("first init");
    init_logging("INFO", log_dir).expect("same config is a no-op");

    let status = logging_status().expect("logging active");
    assert_eq!(status.level.as_str(), "info");
    assert!(status.log_dir.is_dir());

    let err = init_logging("debug", log_dir).expect_err("level change must fail");
    assert!(matches!(err, LoggingError::Conflict { .. }));
}

#[test]
fn invalid_input_is_rejected_before_start() {
    assert!(matches!(
        init_logging("loud", "/tmp/edutrack-logs"),
        Err(LoggingError::UnsupportedLevel(_))
    ));
    assert!(matches!(
        init_logging("info", "relative/logs"),
        Err(LoggingError::RelativeDirectory(_))
    ));
}
