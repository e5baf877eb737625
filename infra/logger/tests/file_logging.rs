use bts_logger::{LevelFilter, Logger, Rotation};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn file_logging_creates_log_file() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let logger = Logger::builder("file-logging")
        .console(false)
        .level(LevelFilter::INFO)
        .file(&log_dir)
        .rotation(Rotation::NEVER)
        .max_files(2)
        .init()?;

    assert!(logger.has_file_output());
    tracing::info!(host = "TxHost_File", "resolved host");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let content = fs::read_to_string(&log_file)?;
    assert!(content.contains("resolved host"));
    assert!(content.contains("TxHost_File"));

    Ok(())
}
