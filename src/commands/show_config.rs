//! Show-config command - Loads settings and reports the logging layout.
//!
//! Runs before logging is initialised; every failure is printed and turned
//! into exit status 1.

use std::io::Write;

use crate::config::{Environment, Settings};
use crate::errors::{AppError, AppResult};
use crate::logging;

/// Execute the command and return the process exit code.
pub fn execute(environment: Environment) -> i32 {
    let mut stdout = std::io::stdout();
    let result = Settings::load(environment).and_then(|settings| report(&settings, &mut stdout));

    match result {
        Ok(()) => 0,
        Err(e) => {
            println!("❌ Error in configuration: {}", e);
            1
        }
    }
}

/// Write the configuration report for `settings` to `out`.
pub fn report<W: Write>(settings: &Settings, out: &mut W) -> AppResult<()> {
    writeln!(out, "Testing configuration...")?;

    logging::ensure_logs_dir(&settings.logging)?;
    let logs_dir = settings.logging.logs_dir();
    writeln!(out, "Logs directory path: {}", logs_dir.display())?;
    writeln!(out, "Logs directory exists: {}", logs_dir.is_dir())?;

    writeln!(out, "Logging configuration loaded successfully")?;
    if !settings.logging.file {
        return Err(AppError::config("logging has no file handler configured"));
    }
    writeln!(
        out,
        "File handler filename: {}",
        settings.logging.file_path().display()
    )?;

    writeln!(out, "✅ Settings configuration test passed!")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_with_file_handler() {
        let tmp = tempfile::tempdir().unwrap();
        let base = tmp.path().to_string_lossy().to_string();
        let settings = Settings::from_lookup(|key| match key {
            "SECRET_KEY" => Some("report-secret".to_string()),
            "BASE_DIR" => Some(base.clone()),
            _ => None,
        })
        .unwrap();

        let mut out = Vec::new();
        report(&settings, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();

        assert!(output.contains("Logs directory exists: true"));
        assert!(output.contains(&format!(
            "File handler filename: {}",
            tmp.path().join("logs").join("oll_crm.log").display()
        )));
        assert!(output.ends_with("✅ Settings configuration test passed!\n"));
    }

    #[test]
    fn test_report_without_file_handler_fails() {
        let settings = Settings::test_from_lookup(|_| None);
        let mut out = Vec::new();

        let result = report(&settings, &mut out);

        assert!(matches!(result, Err(AppError::Config(_))));
        let output = String::from_utf8(out).unwrap();
        assert!(!output.contains("passed"));
    }
}
