use shell_core::error::signal::SignalError;
use shell_core::handle::ProcessId;
use shell_core::signal::{ProcessSignaler, SysinfoSignaler};

// ============================================================================
// SysinfoSignaler - real signal delivery
// ============================================================================

/// **VALUE**: Verifies signaling a pid with no process reports `TargetAbsent`.
///
/// **WHY THIS MATTERS**: Stale handles are the normal case after the server stopped on its
/// own. The signaler must report it, not panic.
///
/// **BUG THIS CATCHES**: Would catch an unwrap on the process lookup.
#[test]
fn given_nonexistent_pid_when_terminated_then_reports_target_absent() {
    // GIVEN: A syntactically valid pid above every platform's pid limit
    let pid = ProcessId::new(99_999_999).unwrap();

    // WHEN
    let result = SysinfoSignaler::new().terminate(pid);

    // THEN
    assert!(
        matches!(result, Err(SignalError::TargetAbsent { pid: 99_999_999, .. })),
        "Expected TargetAbsent, got {result:?}"
    );
}

/// **VALUE**: Verifies the signaler refuses to address PID 1.
///
/// **WHY THIS MATTERS**: A handle file corrupted to `1` must never reach init.
///
/// **BUG THIS CATCHES**: Would catch removal of the init guard on the public path.
#[test]
fn given_pid_1_when_terminated_then_refuses() {
    let result = SysinfoSignaler::new().terminate(ProcessId::new(1).unwrap());

    assert!(matches!(result, Err(SignalError::Refused { pid: 1, .. })));
}

/// **VALUE**: Verifies a live process receives SIGTERM, and only SIGTERM.
///
/// **WHY THIS MATTERS**: The server must get the chance to shut down cleanly. A SIGKILL
/// fallback would skip its cleanup.
///
/// **BUG THIS CATCHES**: Would catch delivery of the wrong signal or a forceful kill.
#[cfg(unix)]
#[test]
fn given_live_child_when_terminated_then_exits_by_sigterm() {
    use std::os::unix::process::ExitStatusExt;
    use std::process::Command;

    // GIVEN: A long-running child process
    let mut child = Command::new("sleep").arg("60").spawn().unwrap();
    let pid = ProcessId::new(child.id() as i32).unwrap();

    // WHEN: Requesting graceful termination
    let result = SysinfoSignaler::new().terminate(pid);

    // THEN: Delivered, and the child died from signal 15
    let status = child.wait().unwrap();
    assert!(result.is_ok(), "Signal should be delivered: {result:?}");
    assert_eq!(status.signal(), Some(15), "Child should exit from SIGTERM");
}
