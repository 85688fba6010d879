//! Tracing subscriber setup.
//!
//! Filter priority (highest to lowest):
//!
//! 1. `DEVPATH_LOG` env var (directives such as `devpath_engine=debug,warn`)
//! 2. `RUST_LOG`
//! 3. `--log-level`
//!
//! Console commands log to stderr. The interactive browser owns the terminal,
//! so it logs to `devpath.log` in the workspace directory instead.

use is_terminal::IsTerminal;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::types::LogLevel;

pub const LOG_FILE_NAME: &str = "devpath.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    Stderr,
    File(PathBuf),
}

/// Install the global subscriber. A second call, or a log file that cannot be
/// opened, leaves logging as it was.
pub fn init(level: LogLevel, sink: &LogSink) {
    let filter = build_env_filter(level);

    match sink {
        LogSink::Stderr => {
            let use_ansi = std::io::stderr().is_terminal();
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_ansi(use_ansi)
                        .with_target(true)
                        .without_time()
                        .compact(),
                )
                .try_init();
        }
        LogSink::File(path) => {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
                return;
            };
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false)
                        .with_target(true),
                )
                .try_init();
        }
    }
}

fn build_env_filter(level: LogLevel) -> EnvFilter {
    if let Ok(directives) = std::env::var("DEVPATH_LOG")
        && let Ok(filter) = EnvFilter::try_new(&directives)
    {
        return filter;
    }

    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    EnvFilter::new(level.to_string())
}
