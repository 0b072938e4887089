use log::Log;
use std::fs;
use todoview::config::LoggingConfig;
use todoview::logger;

#[test]
fn test_logging_disabled_installs_nothing() {
    let config = LoggingConfig::default();
    assert!(!config.enabled);

    let path = logger::init(&config).unwrap();
    assert!(path.is_none());
}

#[test]
fn test_log_file_path() {
    let path = logger::get_log_file_path();
    assert!(path.ends_with("todoview/todoview.log"));
}

#[test]
fn test_dispatch_writes_to_file() {
    let dir = std::env::temp_dir().join("todoview_test_logger");
    let _ = fs::remove_dir_all(&dir);
    let log_path = dir.join("nested").join("test.log");

    // Build without installing globally so tests stay independent
    let (_level, file_logger) = logger::dispatch(log::LevelFilter::Info, &log_path).unwrap().into_log();
    assert!(log_path.exists());

    file_logger.log(
        &log::Record::builder()
            .args(format_args!("Test message with file"))
            .level(log::Level::Info)
            .target("todoview::test")
            .build(),
    );
    file_logger.log(
        &log::Record::builder()
            .args(format_args!("filtered out"))
            .level(log::Level::Debug)
            .target("todoview::test")
            .build(),
    );
    file_logger.flush();

    let content = fs::read_to_string(&log_path).unwrap();
    assert!(content.contains("INFO todoview::test] Test message with file"));
    assert!(!content.contains("filtered out"));

    let _ = fs::remove_dir_all(&dir);
}
