//! Logging Infrastructure
//!
//! Console output (pretty for development, JSON for production) plus an
//! optional daily rotating file under `{log_dir}/app`.

use std::fs;
use std::path::Path;
use std::sync::Mutex;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize console logging only
pub fn init_logger(level: &str, json_format: bool) -> anyhow::Result<()> {
    init_logger_with_file(level, json_format, None)
}

/// Initialize the logging system
///
/// `RUST_LOG` takes precedence over `level` when set. Fails instead of
/// panicking when a global subscriber is already installed.
///
/// # Examples
/// ```no_run
/// # fn main() -> anyhow::Result<()> {
/// // Development setup (console only)
/// catalog_engine::utils::init_logger_with_file("debug", false, None)?;
/// # Ok(())
/// # }
/// ```
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&Path>,
) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let file_writer = log_dir.map(app_log_writer).transpose()?;
    let subscriber = tracing_subscriber::registry().with(env_filter);

    if json_format {
        let console_layer = fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);
        let file_layer = file_writer.map(|writer| {
            fmt::layer()
                .json()
                .with_target(true)
                .with_current_span(true)
                .with_writer(writer)
        });
        subscriber.with(console_layer).with(file_layer).try_init()?;
    } else {
        let console_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true);
        let file_layer = file_writer.map(|writer| {
            fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(writer)
        });
        subscriber.with(console_layer).with(file_layer).try_init()?;
    }

    tracing::debug!(level, json_format, ?log_dir, "Logger initialized");
    Ok(())
}

/// Daily rotating appender for application logs
fn app_log_writer(log_dir: &Path) -> anyhow::Result<Mutex<RollingFileAppender>> {
    let app_log_dir = log_dir.join("app");
    fs::create_dir_all(&app_log_dir)?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("catalog-engine")
        .filename_suffix("log")
        .build(app_log_dir)?;
    Ok(Mutex::new(appender))
}
