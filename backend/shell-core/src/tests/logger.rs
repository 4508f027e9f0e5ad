// Unit tests for logger initialization
// Tests focus on idempotence and error handling

use crate::error::logger::LoggerError;
use crate::logger::{build_dispatch, initialize, install_once};

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use log::LevelFilter;
use serial_test::serial;

/// **VALUE**: Verifies that calling initialize() multiple times doesn't panic or fail.
///
/// **WHY THIS MATTERS**: Setup hooks and tests can both reach the logger. A second global
/// logger install must not take the app down at startup.
///
/// **BUG THIS CATCHES**: Would catch removal of the install guard, which would
/// make fern fail when setting a global logger twice.
#[test]
#[serial]
fn given_logger_initialized_when_called_again_then_returns_ok() {
    // GIVEN: A temporary log directory
    let temp_dir = tempfile::tempdir().unwrap();

    // WHEN: Calling initialize twice
    let first = initialize(temp_dir.path(), LevelFilter::Debug);
    let second = initialize(temp_dir.path(), LevelFilter::Debug);

    // THEN: Both succeed
    assert!(first.is_ok(), "First initialization should succeed: {first:?}");
    assert!(second.is_ok(), "Second initialization should be idempotent");
}

/// **VALUE**: Verifies that an unusable log directory produces an error instead of a panic.
///
/// **WHY THIS MATTERS**: A read-only or missing app data directory must surface as a clear
/// error the binary can report.
///
/// **BUG THIS CATCHES**: Would catch `fern::log_file()` being unwrapped.
#[test]
#[serial]
fn given_invalid_log_dir_when_building_dispatch_then_returns_error() {
    // GIVEN: A path that cannot contain files
    let invalid_dir = PathBuf::from("/dev/null/invalid-path");

    // WHEN: Building the dispatch
    let result = build_dispatch(&invalid_dir, LevelFilter::Info);

    // THEN: Initialize error mentioning the log file
    match result {
        Err(LoggerError::Initialize { message, .. }) => {
            assert!(message.contains("log file"), "Unexpected message: {message}");
        }
        Ok(_) => panic!("Should return error for invalid log directory"),
    }
}

/// **VALUE**: Verifies that building the dispatch creates the log file.
///
/// **WHY THIS MATTERS**: Users attach this file to bug reports; it must exist as soon as the
/// logger is configured.
///
/// **BUG THIS CATCHES**: Would catch a renamed log file or a file chain that is never built.
#[test]
#[serial]
fn given_writable_dir_when_building_dispatch_then_creates_log_file() {
    // GIVEN: A writable directory
    let temp_dir = tempfile::tempdir().unwrap();

    // WHEN: Building the dispatch
    let result = build_dispatch(temp_dir.path(), LevelFilter::Info);

    // THEN: Ok, and the log file exists
    assert!(result.is_ok());
    assert!(temp_dir.path().join(crate::logger::LOG_FILE_NAME).exists());
}

/// **VALUE**: Verifies a failed install leaves the logger uninstalled so a retry can succeed.
///
/// **WHY THIS MATTERS**: If the first log directory is unusable, a later call with a good
/// directory must still install the logger instead of silently reporting success.
///
/// **BUG THIS CATCHES**: Would catch the "already initialized" flag being set before the
/// install attempt, which turns every later call into a no-op with no logger at all.
#[test]
fn given_failed_install_when_retried_then_installs_and_later_calls_skip() {
    // GIVEN: A fresh flag and an install that fails first, then succeeds
    let installed = AtomicBool::new(false);
    let attempts = AtomicUsize::new(0);
    let install = || {
        if attempts.fetch_add(1, Ordering::SeqCst) == 0 {
            build_dispatch(&PathBuf::from("/dev/null/invalid-path"), LevelFilter::Info).map(|_| ())
        } else {
            Ok(())
        }
    };

    // WHEN: Installing three times
    let first = install_once(&installed, install);
    let after_first = installed.load(Ordering::SeqCst);
    let second = install_once(&installed, install);
    let third = install_once(&installed, install);

    // THEN: The failure is reported and not remembered; the retry installs; the third skips
    assert!(matches!(first, Err(LoggerError::Initialize { .. })));
    assert!(!after_first, "A failed install must not mark the logger installed");
    assert!(matches!(second, Ok(true)));
    assert!(matches!(third, Ok(false)));
    assert!(installed.load(Ordering::SeqCst));
    assert_eq!(attempts.load(Ordering::SeqCst), 2);
}
