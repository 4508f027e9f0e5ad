//! Logging for the MouseHero shell.
//!
//! Dual output: colored stdout and a plain-text file in the application log directory.

use crate::error::logger::LoggerError;

use common::ErrorLocation;

use std::io::stdout;
use std::panic::Location;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::Color::{Blue, Green, Magenta, Red, Yellow};
use fern::colors::ColoredLevelConfig;
use humantime::format_rfc3339;
use log::{LevelFilter, info, warn};

static INIT_LOGGER_LOCK: Mutex<()> = Mutex::new(());

static LOGGER_INSTALLED: AtomicBool = AtomicBool::new(false);

pub const LOG_FILE_NAME: &str = "mousehero.log";

const LOGGER_INITIALIZED_MESSAGE_PREFIX: &str = "Logger initialized with level: ";

const LOGGER_ALREADY_INITIALIZED_MESSAGE: &str = "Logger already initialized";

/// Install the global logger.
///
/// Safe to call more than once: once a logger is installed, later calls log a warning and
/// return `Ok`. A failed attempt installs nothing, so the next call tries again.
///
/// # Errors
///
/// Returns [`LoggerError::Initialize`] if the log file cannot be created or the global
/// logger cannot be installed.
pub fn initialize(log_dir: &Path, level: LevelFilter) -> Result<(), LoggerError> {
    let _guard = INIT_LOGGER_LOCK
        .lock()
        .unwrap_or_else(PoisonError::into_inner);

    let installed_now = install_once(&LOGGER_INSTALLED, || {
        build_dispatch(log_dir, level).and_then(apply_dispatch)
    })?;

    if installed_now {
        info!("{LOGGER_INITIALIZED_MESSAGE_PREFIX}{level:?}");
    }
    Ok(())
}

/// Run `install` unless `installed` is already set; set it only when `install` succeeds.
///
/// Returns `true` when this call did the install.
pub(crate) fn install_once<F>(installed: &AtomicBool, install: F) -> Result<bool, LoggerError>
where
    F: FnOnce() -> Result<(), LoggerError>,
{
    if installed.load(Ordering::SeqCst) {
        warn!("{LOGGER_ALREADY_INITIALIZED_MESSAGE}");
        return Ok(false);
    }

    install()?;
    installed.store(true, Ordering::SeqCst);
    Ok(true)
}

/// Assemble the stdout and file dispatch without installing it.
#[track_caller]
pub(crate) fn build_dispatch(log_dir: &Path, level: LevelFilter) -> Result<Dispatch, LoggerError> {
    let location = ErrorLocation::from(Location::caller());
    let log_file_path = log_dir.join(LOG_FILE_NAME);

    let color_configuration = ColoredLevelConfig::new()
        .debug(Blue)
        .info(Green)
        .warn(Yellow)
        .error(Red)
        .trace(Magenta);

    let stdout_dispatch = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{file}:{line}]",
                date = format_rfc3339(SystemTime::now()),
                level = color_configuration.color(record.level()),
                message = message,
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0),
            ))
        })
        .chain(stdout());

    let log_file = fern::log_file(&log_file_path).map_err(|e| LoggerError::Initialize {
        message: format!("Failed to create log file {}: {e}", log_file_path.display()),
        location,
    })?;

    let file_dispatch = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{file}:{line}]",
                date = format_rfc3339(SystemTime::now()),
                level = record.level(),
                message = message,
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0)
            ))
        })
        .chain(log_file);

    Ok(Dispatch::new()
        .level(level)
        .chain(stdout_dispatch)
        .chain(file_dispatch))
}

#[track_caller]
fn apply_dispatch(dispatch: Dispatch) -> Result<(), LoggerError> {
    let location = ErrorLocation::from(Location::caller());

    dispatch.apply().map_err(|e| LoggerError::Initialize {
        message: format!("Failed to initialize logger: {e}"),
        location,
    })
}
