//! Test-logging command - Emits one event per level.

use std::io::Write;

use crate::errors::AppResult;

/// Execute the test-logging command, printing to stdout.
pub fn execute() -> AppResult<()> {
    run(&mut std::io::stdout())
}

/// Write the banner lines to `out` and log at every level in between.
pub fn run<W: Write>(out: &mut W) -> AppResult<()> {
    writeln!(out, "Testing logging configuration...")?;

    tracing::debug!("Debug message");
    tracing::info!("Info message");
    tracing::warn!("Warning message");
    tracing::error!("Error message");

    writeln!(out, "✅ Logging test completed successfully")?;
    Ok(())
}
