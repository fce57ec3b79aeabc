use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_DIRECTIVE, LOG_FILE_NAME};

/// Initializes console logging on stderr, plus a daily-rolling JSON log file
/// when `log_dir` is given.
///
/// The returned guard flushes the file writer when dropped; hold it for the
/// lifetime of the run.
pub fn init_logging(log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE));

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let _ = fs::create_dir_all(dir);
            let file_appender = tracing_appender::rolling::daily(dir, LOG_FILE_NAME);
            let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);
            (
                Some(fmt::layer().json().with_writer(non_blocking_writer)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    // stdout is reserved for run diagnostics
    let console_layer = fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    guard
}
