// src/log.rs
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::{Mutex, OnceLock};

use tracing_subscriber::{EnvFilter, fmt, fmt::time::Uptime};

use crate::config::consts::LOG_FILE;

#[doc(hidden)]
pub use tracing as __tracing;

static INSTALLED: OnceLock<()> = OnceLock::new();

/// Send everything logged through `logf!`/`logd!`/`loge!` to an append-only file
/// (`.store/debug.log` unless a path is given). `RUST_LOG` narrows or widens the
/// filter; the default is `info`.
///
/// Only the first call installs a subscriber; later calls are no-ops.
/// Library code never calls this, so without it the macros are silent.
pub fn init(path: Option<&Path>) -> io::Result<()> {
    if INSTALLED.get().is_some() {
        return Ok(());
    }
    let path = path.unwrap_or(Path::new(LOG_FILE));
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_timer(Uptime::default())
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init();

    let _ = INSTALLED.set(());
    Ok(())
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::__tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::__tracing::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::__tracing::error!($($arg)*)
    };
}
