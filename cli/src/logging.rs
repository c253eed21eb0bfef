//! Logging configuration with file-based output and size-based rotation.
//!
//! Writes logs to `~/.config/steep/steep.log` (or platform equivalent) with
//! 1 MB size-based rotation. Set `DEBUG_LOGGING=1` to also log to stderr,
//! with debug output for steep crates.

use rolling_file::{BasicRollingFileAppender, RollingConditionBasic};
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

const DEBUG_DIRECTIVE: &str = "info,steep_core=debug,steep_cli=debug,steep=debug";

/// Initialize logging.
///
/// Returns a `WorkerGuard` that must be held for the application lifetime
/// so buffered logs are flushed on shutdown.
///
/// # Behavior
/// - **File output:** INFO+ (DEBUG+ for steep crates with `DEBUG_LOGGING`)
/// - **Stderr output:** only with `DEBUG_LOGGING`, so the prompt stays clean
/// - **Rotation:** Size-based at 1 MB, keeps only the latest rotated file
///
/// # Fallback
/// If the log file cannot be created, logs warnings to stderr only and
/// returns `None`.
pub fn init() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let debug_logging = std::env::var("DEBUG_LOGGING").is_ok();

    let Some(log_dir) = dirs::config_dir().map(|config| config.join("steep")) else {
        init_stderr_only(debug_logging);
        return None;
    };

    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        // Can't use tracing yet since subscriber not initialized
        eprintln!(
            "Failed to create log directory {:?}: {}, using stderr only",
            log_dir, e
        );
        init_stderr_only(debug_logging);
        return None;
    }

    let log_path = log_dir.join("steep.log");
    let file_appender = match BasicRollingFileAppender::new(
        &log_path,
        RollingConditionBasic::new().max_size(1024 * 1024),
        1,
    ) {
        Ok(appender) => appender,
        Err(e) => {
            eprintln!("Failed to create log file at {:?}: {}", log_path, e);
            init_stderr_only(debug_logging);
            return None;
        }
    };

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    let stderr_layer = debug_logging.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_span_events(FmtSpan::NONE)
    });

    let filter = EnvFilter::new(if debug_logging { DEBUG_DIRECTIVE } else { "info" });

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .with(filter)
        .init();

    tracing::info!(log_file = ?log_path, debug_logging, "steep logging initialized");

    Some(guard)
}

/// Fallback when file logging is unavailable.
fn init_stderr_only(debug_logging: bool) {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    let filter = EnvFilter::new(if debug_logging { DEBUG_DIRECTIVE } else { "warn" });

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(filter)
        .init();

    tracing::info!(debug_logging, "steep logging initialized (stderr only)");
}
