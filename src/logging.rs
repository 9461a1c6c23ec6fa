use std::path::Path;

use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding a filter directive, e.g. `mazegraph=trace`.
pub const LOG_ENV: &str = "MAZEGRAPH_LOG";
/// Filter used when `MAZEGRAPH_LOG` is unset or invalid.
pub const DEFAULT_DIRECTIVE: &str = "mazegraph=info";

/// Installs the global subscriber, writing to `mazegraph.log` in `log_dir`.
///
/// Logs go to a file so they don't interleave with the maze printed to the terminal.
/// The returned guard flushes pending lines when dropped; keep it alive until exit.
pub fn init_tracing(log_dir: &Path) -> Result<WorkerGuard, Box<dyn std::error::Error>> {
    std::fs::create_dir_all(log_dir)?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix("mazegraph")
        .filename_suffix("log")
        .build(log_dir)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(writer)
                .with_ansi(false),
        )
        .try_init()?;
    Ok(guard)
}
