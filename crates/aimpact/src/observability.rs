//! Logging setup for the CLI.
//!
//! Human-readable logs go to stderr. When a log file is configured, the same
//! events are also written as JSON lines through a non-blocking appender.
//!
//! Log file resolution (first match wins):
//! 1. `AIMPACT_LOG_PATH` - exact file path
//! 2. `AIMPACT_LOG_DIR` - directory, file named `aimpact.jsonl`
//! 3. `log_dir` from configuration, file named `aimpact.jsonl`

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

const LOG_PATH_ENV: &str = "AIMPACT_LOG_PATH";
const LOG_DIR_ENV: &str = "AIMPACT_LOG_DIR";
const LOG_FILE_NAME: &str = "aimpact.jsonl";

/// Where (if anywhere) to write JSONL logs.
#[derive(Debug, Clone, Default)]
pub struct ObservabilityConfig {
    /// Full path of the JSONL log file.
    pub log_file: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Resolve the log file from the environment, falling back to the
    /// configured log directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_file = std::env::var_os(LOG_PATH_ENV)
            .map(PathBuf::from)
            .or_else(|| std::env::var_os(LOG_DIR_ENV).map(|d| PathBuf::from(d).join(LOG_FILE_NAME)))
            .or_else(|| config_log_dir.map(|d| d.join(LOG_FILE_NAME)));
        Self { log_file }
    }
}

/// Build the log filter.
///
/// `RUST_LOG` wins when set. Otherwise `--quiet` means errors only, each
/// `-v` raises verbosity (debug, then trace), and with neither the
/// configured level applies.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => config_level,
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    EnvFilter::new(level)
}

/// Install the global subscriber.
///
/// The returned guard flushes the file appender on drop; hold it until exit.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .compact();

    let (file_layer, guard) = match config.log_file {
        Some(ref path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            let file_name = path
                .file_name()
                .with_context(|| format!("log path has no file name: {}", path.display()))?;
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().json().with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}
