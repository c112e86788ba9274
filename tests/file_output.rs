//! Tests for the file target and its console fallback.

use logfacade::{DestinationKind, LogContext, Logger, LoggerConfig};
use std::fs;
use tempfile::TempDir;

fn file_config(backend: &str, directory: &str) -> LoggerConfig {
    LoggerConfig {
        backend: backend.to_string(),
        level: "info".to_string(),
        target: "file".to_string(),
        directory: directory.to_string(),
        ..LoggerConfig::default()
    }
}

#[test]
fn file_target_appends_to_output_log() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("nested").join("logs");
    let ctx = LogContext::new();

    let logger = ctx.new_logger(&file_config("logrus", &dir.to_string_lossy()));
    assert_eq!(logger.output().kind(), DestinationKind::File);
    logger.info("one");
    logger.info("two");
    logger.flush();

    let content = fs::read_to_string(dir.join("output.log")).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("msg=one"));
    assert!(lines[1].ends_with("msg=two"));
}

#[test]
fn reopening_appends_instead_of_truncating() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().to_string_lossy().into_owned();
    let ctx = LogContext::new();

    ctx.new_logger(&file_config("std", &dir)).info("first run");
    ctx.new_logger(&file_config("std", &dir)).info("second run");

    let content = fs::read_to_string(tmp.path().join("output.log")).unwrap();
    assert_eq!(content.lines().count(), 2);
}

#[test]
fn uncreatable_directory_falls_back_to_console() {
    let tmp = TempDir::new().unwrap();
    let blocker = tmp.path().join("not-a-dir");
    fs::write(&blocker, "occupied").unwrap();
    let dir = blocker.join("logs");
    let ctx = LogContext::new();

    for backend in ["std", "logrus", "zap"] {
        let logger = ctx.new_logger(&file_config(backend, &dir.to_string_lossy()));
        assert_eq!(logger.output().kind(), DestinationKind::Stderr, "{backend}");

        logger.debug("d");
        logger.info("i");
        logger.warn("w");
        logger.error("e");
        logger.print("p");
    }
    assert!(!dir.exists());
}

#[test]
fn unopenable_file_falls_back_to_console() {
    let tmp = TempDir::new().unwrap();
    // A directory where the log file should be makes the open fail.
    fs::create_dir(tmp.path().join("output.log")).unwrap();
    let ctx = LogContext::new();

    let logger = ctx.new_logger(&file_config("zap", &tmp.path().to_string_lossy()));
    assert_eq!(logger.output().kind(), DestinationKind::Stderr);
    logger.info("still works");
}

#[test]
fn console_target_never_creates_files() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("unused");
    let ctx = LogContext::new();
    let cfg = LoggerConfig {
        target: "console".to_string(),
        ..file_config("logrus", &dir.to_string_lossy())
    };

    let logger = ctx.new_logger(&cfg);
    assert_eq!(logger.output().kind(), DestinationKind::Stderr);
    assert!(!dir.exists());
}

#[test]
fn log_file_path_expands_environment() {
    let Ok(home) = std::env::var("HOME") else {
        return;
    };
    let cfg = file_config("std", "$HOME/app-logs");
    assert_eq!(
        cfg.log_file_path(),
        std::path::Path::new(&home).join("app-logs").join("output.log")
    );
}
