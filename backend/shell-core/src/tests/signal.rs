// Unit tests for signal module private functions
// Public signaler behaviour is covered in integration_tests/signal.rs

use crate::error::signal::SignalError;
use crate::signal::{refuse_protected_pid, with_process};

use common::ErrorLocation;

use std::panic::Location;

/// **VALUE**: Tests that `with_process()` finds a process that certainly exists.
///
/// **WHY THIS MATTERS**: The signaler reports "target absent" whenever this lookup misses. If
/// the targeted refresh stopped finding live processes, every shutdown would silently skip
/// the server.
///
/// **BUG THIS CATCHES**: Would catch a broken `ProcessesToUpdate::Some` refresh or a pid
/// conversion error.
#[test]
fn given_own_pid_when_with_process_called_then_executes_closure() {
    // GIVEN: Our own PID
    let our_pid = std::process::id();

    // WHEN: Looking it up
    let result = with_process(our_pid, |p| p.pid().as_u32());

    // THEN: The closure ran against our process
    assert_eq!(result, Some(our_pid), "Should find our own process");
}

/// **VALUE**: Tests that `with_process()` answers `None` for a pid that cannot exist.
///
/// **WHY THIS MATTERS**: Stale handle files point at exited processes all the time. The
/// lookup must report absence rather than panic.
///
/// **BUG THIS CATCHES**: Would catch a lookup that unwraps a missing process.
#[test]
fn given_nonexistent_pid_when_with_process_called_then_returns_none() {
    // GIVEN: A PID that doesn't exist
    let fake_pid = u32::MAX;

    // WHEN: Looking it up
    let result = with_process(fake_pid, |_| true);

    // THEN: None
    assert!(result.is_none(), "Should return None for non-existent process");
}

/// **VALUE**: Verifies PID 1 is never addressed.
///
/// **WHY THIS MATTERS**: A corrupted handle file containing `1` must not lead the shell to
/// signal init.
///
/// **BUG THIS CATCHES**: Would catch removal of the init guard.
#[test]
fn given_pid_1_when_checked_then_refused() {
    // GIVEN: PID 1
    let location = ErrorLocation::from(Location::caller());

    // WHEN: Checking whether it may be signaled
    let result = refuse_protected_pid(1, location);

    // THEN: Refused
    assert!(matches!(result, Err(SignalError::Refused { pid: 1, .. })));
}

/// **VALUE**: Verifies the shell never signals itself.
///
/// **WHY THIS MATTERS**: If the handle file were overwritten with the shell's own pid, the
/// terminate hook would interrupt the shell's own shutdown.
///
/// **BUG THIS CATCHES**: Would catch removal of the self-pid guard.
#[test]
fn given_own_pid_when_checked_then_refused() {
    // GIVEN: Our own PID
    let our_pid = std::process::id();
    let location = ErrorLocation::from(Location::caller());

    // WHEN: Checking whether it may be signaled
    let result = refuse_protected_pid(our_pid, location);

    // THEN: Refused, and the error names the pid
    let err = result.expect_err("own pid must be refused");
    assert_eq!(err.pid(), our_pid);
}

/// **VALUE**: Verifies ordinary pids pass the guard.
///
/// **WHY THIS MATTERS**: An over-eager guard would turn every shutdown into a no-op.
///
/// **BUG THIS CATCHES**: Would catch an inverted comparison in the guard.
#[test]
fn given_ordinary_pid_when_checked_then_allowed() {
    // GIVEN: An ordinary PID
    let location = ErrorLocation::from(Location::caller());

    // WHEN / THEN: Allowed
    assert!(refuse_protected_pid(4242, location).is_ok());
}
