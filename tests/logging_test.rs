//! File handler tests.
//!
//! These install the global subscriber, so they live in their own binary.

use std::collections::HashMap;
use std::fs;

use oll_crm::{logging, AppError, Settings};

#[test]
fn test_file_handler_writes_events_and_init_runs_once() {
    let tmp = tempfile::tempdir().unwrap();
    let vars: HashMap<&str, String> = HashMap::from([
        ("DEBUG", "true".to_string()),
        ("LOG_TO_FILE", "true".to_string()),
        ("BASE_DIR", tmp.path().to_string_lossy().into_owned()),
    ]);
    let settings = Settings::from_lookup(|key| vars.get(key).cloned()).unwrap();
    assert!(settings.logging.file);

    let guard = logging::init(&settings.logging, true).expect("subscriber installs");
    tracing::info!("file handler event");
    logging::log_startup_warnings(&settings);

    let again = logging::init(&settings.logging, true);
    assert!(matches!(again, Err(AppError::Internal(_))));

    // Flushes the non-blocking writer
    drop(guard);

    let path = tmp.path().join("logs").join("oll_crm.log");
    assert_eq!(settings.logging.file_path(), path);

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("file handler event"));
    assert!(contents.contains("SECRET_KEY not set, using insecure default for development"));
}
