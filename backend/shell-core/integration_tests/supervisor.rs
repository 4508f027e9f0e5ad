use crate::helpers::{RecordingSignaler, pid, write_handle};

use shell_core::error::signal::SignalError;
use shell_core::handle::{FileServerHandleStore, InMemoryServerHandleRepository};
use shell_core::signal::SysinfoSignaler;
use shell_core::supervisor::{DefaultShutdownSupervisor, ShutdownSupervisor, TerminationOutcome};

use tempfile::tempdir;

// ============================================================================
// ShutdownSupervisor - terminate path
// ============================================================================

/// **VALUE**: Verifies shutdown without a handle file completes and sends nothing.
///
/// **WHY THIS MATTERS**: The shell is often quit before the server was ever started.
///
/// **BUG THIS CATCHES**: Would catch signaling a default pid or failing on a missing file.
#[test]
fn given_missing_handle_when_will_terminate_then_no_signal() {
    // GIVEN: An empty application-support directory
    let dir = tempdir().unwrap();
    let supervisor = ShutdownSupervisor::new(
        FileServerHandleStore::with_base_dir(dir.path()),
        RecordingSignaler::delivering(),
    );

    // WHEN
    supervisor.on_will_terminate();
    let outcome = supervisor.terminate_server();

    // THEN
    assert!(matches!(outcome, TerminationOutcome::NoHandle));
    assert!(supervisor.signaler().calls().is_empty());
}

/// **VALUE**: Verifies a valid handle produces exactly one signal to exactly that pid.
///
/// **WHY THIS MATTERS**: This is the whole point of the supervisor: the recorded server, and
/// nothing else, gets asked to stop.
///
/// **BUG THIS CATCHES**: Would catch duplicate signals, retries, or the wrong target.
#[test]
fn given_valid_handle_when_will_terminate_then_signals_once() {
    // GIVEN
    let dir = tempdir().unwrap();
    write_handle(dir.path(), "4242");
    let supervisor = ShutdownSupervisor::new(
        FileServerHandleStore::with_base_dir(dir.path()),
        RecordingSignaler::delivering(),
    );

    // WHEN
    supervisor.on_will_terminate();

    // THEN
    assert_eq!(supervisor.signaler().calls(), vec![pid(4242)]);
}

/// **VALUE**: Verifies the outcome names the signaled pid.
///
/// **WHY THIS MATTERS**: Callers that want to report what happened rely on the outcome.
///
/// **BUG THIS CATCHES**: Would catch an outcome that drops the pid.
#[test]
fn given_padded_handle_when_terminate_server_then_outcome_is_signaled() {
    // GIVEN
    let supervisor = ShutdownSupervisor::new(
        InMemoryServerHandleRepository::with_contents("  4242\n"),
        RecordingSignaler::delivering(),
    );

    // WHEN
    let outcome = supervisor.terminate_server();

    // THEN
    assert_eq!(outcome.signaled_pid(), Some(pid(4242)));
    assert_eq!(supervisor.signaler().calls(), vec![pid(4242)]);
}

/// **VALUE**: Verifies malformed and empty handles send nothing and raise nothing.
///
/// **WHY THIS MATTERS**: A corrupted record must degrade to a no-op at shutdown.
///
/// **BUG THIS CATCHES**: Would catch a parse error escaping `on_will_terminate`.
#[test]
fn given_malformed_handle_when_will_terminate_then_no_signal() {
    for contents in ["not-a-pid", "", "0", "-1"] {
        // GIVEN
        let supervisor = ShutdownSupervisor::new(
            InMemoryServerHandleRepository::with_contents(contents),
            RecordingSignaler::delivering(),
        );

        // WHEN
        supervisor.on_will_terminate();

        // THEN
        assert!(
            matches!(supervisor.terminate_server(), TerminationOutcome::NoHandle),
            "{contents:?} should be treated as no handle"
        );
        assert!(supervisor.signaler().calls().is_empty());
    }
}

/// **VALUE**: Verifies a stale handle is attempted once and the failure is absorbed.
///
/// **WHY THIS MATTERS**: After the server exits on its own the handle points at nothing;
/// shutdown must carry on.
///
/// **BUG THIS CATCHES**: Would catch retries on failure or a failure that propagates.
#[test]
fn given_stale_handle_when_will_terminate_then_attempts_and_swallows_failure() {
    // GIVEN
    let supervisor = ShutdownSupervisor::new(
        InMemoryServerHandleRepository::with_contents("31337"),
        RecordingSignaler::target_absent(),
    );

    // WHEN
    supervisor.on_will_terminate();

    // THEN: One attempt, no panic
    assert_eq!(supervisor.signaler().calls(), vec![pid(31337)]);

    // AND: The detailed outcome reports the absent target
    let outcome = supervisor.terminate_server();
    assert!(matches!(
        outcome,
        TerminationOutcome::SignalFailed {
            error: SignalError::TargetAbsent { .. },
            ..
        }
    ));
}

/// **VALUE**: End-to-end run with the real file store and the real signaler against a pid
/// that cannot exist.
///
/// **WHY THIS MATTERS**: This is exactly what happens when the shell quits long after the
/// server died.
///
/// **BUG THIS CATCHES**: Would catch any panic along the real read, parse and signal path.
#[test]
fn given_unlikely_pid_on_disk_when_will_terminate_then_reports_target_absent() {
    // GIVEN
    let dir = tempdir().unwrap();
    write_handle(dir.path(), "99999999");
    let supervisor = ShutdownSupervisor::new(
        FileServerHandleStore::with_base_dir(dir.path()),
        SysinfoSignaler::new(),
    );

    // WHEN
    supervisor.on_will_terminate();
    let outcome = supervisor.terminate_server();

    // THEN: Signal attempted, target absent
    match outcome {
        TerminationOutcome::SignalFailed { pid: failed, error } => {
            assert_eq!(failed, pid(99_999_999));
            assert!(matches!(error, SignalError::TargetAbsent { .. }));
        }
        other => panic!("Expected SignalFailed, got {other:?}"),
    }
}

/// **VALUE**: Verifies the production supervisor resolves the handle below the user's
/// application-support directory.
///
/// **WHY THIS MATTERS**: The binary uses `for_current_user()`; the path must match where the
/// server launcher writes, and resolving it must never panic.
///
/// **BUG THIS CATCHES**: Would catch an unwrap on directory lookup or a drifted layout.
///
/// **NOTE**: Only the path is checked. Running the terminate path here could signal a real
/// server on a developer machine.
#[test]
fn given_current_user_supervisor_when_resolving_path_then_ends_with_namespace() {
    // GIVEN
    let supervisor = DefaultShutdownSupervisor::for_current_user();

    // WHEN
    let path = supervisor.repository().path();

    // THEN: Either the platform has no data dir, or the layout matches
    if let Ok(path) = path {
        assert!(path.ends_with("MouseHero/server.pid"), "Unexpected path {path:?}");
    }
}

/// **VALUE**: Verifies the production handle path on macOS is `~/Library/MouseHero/server.pid`.
///
/// **WHY THIS MATTERS**: That is where the server launcher records its pid. Any other
/// directory means every quit ends in `NoHandle` and the server keeps running.
///
/// **BUG THIS CATCHES**: Would catch resolving through `dirs::data_dir()` on macOS, which
/// adds `Application Support` to the path.
#[cfg(target_os = "macos")]
#[test]
fn given_macos_current_user_supervisor_when_resolving_path_then_uses_user_library() {
    // GIVEN
    let supervisor = DefaultShutdownSupervisor::for_current_user();
    let home = dirs::home_dir().expect("macOS always has a home directory");

    // WHEN
    let path = supervisor.repository().path().unwrap();

    // THEN
    assert_eq!(path, home.join("Library").join("MouseHero").join("server.pid"));
}
