use std::time::Duration;

use meetnotify_domain::{LoggingConfig, MeetNotifyError, Result};
use tracing::{info, warn};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins over the configured level. Output goes to stderr so
/// command output on stdout stays clean.
///
/// # Errors
/// `Config` when the filter directive is invalid or a subscriber is already
/// installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level).map_err(|e| {
            MeetNotifyError::Config(format!("Invalid log level '{}': {}", config.level, e))
        })?,
    };

    let builder = fmt().with_env_filter(filter).with_target(false).with_writer(std::io::stderr);
    let installed = if config.json {
        builder.json().finish().try_init()
    } else {
        builder.finish().try_init()
    };

    installed.map_err(|e| MeetNotifyError::Config(format!("Failed to install logger: {}", e)))
}

/// Log the outcome of a command execution with structured fields.
///
/// Callers must avoid forwarding sensitive values in `command`.
#[inline]
pub fn log_command_execution(
    command: &str,
    elapsed: Duration,
    error: Option<&MeetNotifyError>,
) {
    let duration_ms = elapsed.as_millis() as u64;

    match error {
        None => info!(command, duration_ms, "command_execution_success"),
        Some(err) => warn!(
            command,
            duration_ms,
            error_type = err.label(),
            error = %err,
            "command_execution_failure"
        ),
    }
}
