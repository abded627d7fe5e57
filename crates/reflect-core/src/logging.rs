//! Tracing subscriber setup.
//!
//! The interactive form owns the terminal, so it logs to a file under
//! `${REFLECT_HOME}/logs`. One-shot commands log to stderr.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::{LogConfig, paths};

/// Environment variable overriding the log filter.
pub const LOG_ENV: &str = "REFLECT_LOG";

/// File name used inside the logs directory.
pub const LOG_FILE_NAME: &str = "reflect.log";

/// Filter used for stderr logging when `REFLECT_LOG` is unset.
const STDERR_DEFAULT_FILTER: &str = "warn";

/// Where log records go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// `${REFLECT_HOME}/logs/reflect.log`
    File,
    /// Standard error
    Stderr,
}

/// Installs the global subscriber.
///
/// Keep the returned guard alive for the life of the process; dropping it
/// flushes and stops the background writer.
///
/// # Errors
/// Returns an error if the filter is invalid, the log directory cannot be
/// created, or a subscriber is already installed.
pub fn init(config: &LogConfig, target: LogTarget) -> Result<Option<WorkerGuard>> {
    let env = std::env::var(LOG_ENV).ok();
    let fallback = match target {
        LogTarget::File => config.filter.as_str(),
        LogTarget::Stderr => STDERR_DEFAULT_FILTER,
    };
    let filter = build_filter(env.as_deref(), fallback)?;

    match target {
        LogTarget::File => {
            let dir = paths::logs_dir();
            let (writer, guard) = file_writer(&dir)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .try_init()
                .map_err(|e| anyhow!("Failed to install log subscriber: {e}"))?;
            Ok(Some(guard))
        }
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init()
                .map_err(|e| anyhow!("Failed to install log subscriber: {e}"))?;
            Ok(None)
        }
    }
}

/// Builds the filter from the env directive when set, else the fallback.
fn build_filter(env: Option<&str>, fallback: &str) -> Result<EnvFilter> {
    let directive = select_directive(env, fallback);
    EnvFilter::try_new(directive).with_context(|| format!("Invalid log filter: {directive}"))
}

fn select_directive<'a>(env: Option<&'a str>, fallback: &'a str) -> &'a str {
    env.map(str::trim)
        .filter(|d| !d.is_empty())
        .unwrap_or(fallback)
}

fn file_writer(dir: &Path) -> Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    Ok(tracing_appender::non_blocking(appender))
}
