// src/log.rs
//! Logging for all three frontends.
//!
//! Call sites use the short `logf!` / `logd!` / `loge!` / `logw!` macros; they
//! forward to `tracing`. `init()` installs a subscriber that writes to stderr
//! and to a per-process file under `.store/` (kept out of stdout so the CLI
//! can print JSON cleanly).

use std::{fs, path::Path, sync::OnceLock};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*};

use crate::config::consts::{LOG_DIR, LOG_FILE};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Install the global subscriber. Later calls are no-ops.
///
/// `default_filter` applies when `RUST_LOG` is unset.
pub fn init(default_filter: &str) {
    if LOG_GUARD.get().is_some() {
        return;
    }

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let stderr_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    // File layer is best-effort: a read-only working dir must not stop the app.
    let file_layer = match fs::create_dir_all(LOG_DIR) {
        Ok(()) => {
            let appender = tracing_appender::rolling::never(Path::new(LOG_DIR), LOG_FILE);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let _ = LOG_GUARD.set(guard);
            Some(fmt::layer().with_ansi(false).with_writer(writer))
        }
        Err(_) => None,
    };

    let subscriber = Registry::default()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer);

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        // Someone (a test harness, usually) got there first.
        return;
    }
    tracing::debug!("Logging initialized ({LOG_DIR}/{LOG_FILE})");
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}
