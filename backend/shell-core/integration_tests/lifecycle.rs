use crate::helpers::{CountingWindows, RecordingSignaler, pid};

use shell_core::handle::InMemoryServerHandleRepository;
use shell_core::lifecycle::{LifecycleEvent, LifecycleReply, ShellLifecycle};
use shell_core::supervisor::ShutdownSupervisor;

fn lifecycle_with_handle(
    contents: &str,
) -> ShellLifecycle<InMemoryServerHandleRepository, RecordingSignaler> {
    ShellLifecycle::new(ShutdownSupervisor::new(
        InMemoryServerHandleRepository::with_contents(contents),
        RecordingSignaler::delivering(),
    ))
}

// ============================================================================
// ShellLifecycle - event dispatch
// ============================================================================

/// **VALUE**: Verifies closing the last window neither quits nor stops the server.
///
/// **WHY THIS MATTERS**: The app lives in the background after its window closes. Stopping
/// the server there would break every client connected to it.
///
/// **BUG THIS CATCHES**: Would catch the last-window hook routing into the supervisor.
#[test]
fn given_last_window_closed_when_dispatched_then_keeps_running_and_sends_nothing() {
    // GIVEN
    let lifecycle = lifecycle_with_handle("4242");
    let windows = CountingWindows::with_window();

    // WHEN
    let reply = lifecycle.handle(LifecycleEvent::LastWindowClosed, &windows);

    // THEN
    assert_eq!(reply, LifecycleReply::ShouldTerminate(false));
    assert_eq!(lifecycle.supervisor().repository().read_count(), 0);
    assert!(lifecycle.supervisor().signaler().calls().is_empty());
}

/// **VALUE**: Verifies the terminate event signals the recorded server.
///
/// **WHY THIS MATTERS**: This is the only trigger point for stopping the server.
///
/// **BUG THIS CATCHES**: Would catch the terminate event being dropped by the dispatcher.
#[test]
fn given_will_terminate_when_dispatched_then_signals_server() {
    // GIVEN
    let lifecycle = lifecycle_with_handle("4242");
    let windows = CountingWindows::with_window();

    // WHEN
    let reply = lifecycle.handle(LifecycleEvent::WillTerminate, &windows);

    // THEN
    assert_eq!(reply, LifecycleReply::Acknowledged);
    assert_eq!(lifecycle.supervisor().signaler().calls(), vec![pid(4242)]);
}

/// **VALUE**: Verifies a repeated terminate event is acknowledged without a second signal.
///
/// **WHY THIS MATTERS**: Some runtimes deliver exit notifications more than once. A second
/// pass could hit a pid already reused by another process.
///
/// **BUG THIS CATCHES**: Would catch removal of the once-per-run guard.
#[test]
fn given_repeated_will_terminate_when_dispatched_then_signals_once() {
    // GIVEN
    let lifecycle = lifecycle_with_handle("4242");
    let windows = CountingWindows::with_window();

    // WHEN
    lifecycle.handle(LifecycleEvent::WillTerminate, &windows);
    let second = lifecycle.handle(LifecycleEvent::WillTerminate, &windows);

    // THEN
    assert_eq!(second, LifecycleReply::Acknowledged);
    assert_eq!(lifecycle.supervisor().repository().read_count(), 1);
    assert_eq!(lifecycle.supervisor().signaler().calls().len(), 1);
}

/// **VALUE**: Verifies reopen without visible windows brings a window forward.
///
/// **WHY THIS MATTERS**: Clicking the dock icon of a background app must show its window.
///
/// **BUG THIS CATCHES**: Would catch reopen ignoring the visibility flag.
#[test]
fn given_reopen_without_visible_windows_when_dispatched_then_focuses_window() {
    // GIVEN
    let lifecycle = lifecycle_with_handle("4242");
    let windows = CountingWindows::with_window();

    // WHEN
    let reply = lifecycle.handle(
        LifecycleEvent::Reopen {
            has_visible_windows: false,
        },
        &windows,
    );

    // THEN
    assert_eq!(reply, LifecycleReply::ReopenHandled(true));
    assert_eq!(windows.focus_calls(), 1);
    assert_eq!(lifecycle.supervisor().repository().read_count(), 0);
}

/// **VALUE**: Verifies reopen with visible windows leaves them alone.
///
/// **WHY THIS MATTERS**: Stealing focus when the user already sees the window is jarring.
///
/// **BUG THIS CATCHES**: Would catch an inverted visibility check.
#[test]
fn given_reopen_with_visible_windows_when_dispatched_then_does_not_focus() {
    // GIVEN
    let lifecycle = lifecycle_with_handle("4242");
    let windows = CountingWindows::with_window();

    // WHEN
    let reply = lifecycle.handle(
        LifecycleEvent::Reopen {
            has_visible_windows: true,
        },
        &windows,
    );

    // THEN
    assert_eq!(reply, LifecycleReply::ReopenHandled(true));
    assert_eq!(windows.focus_calls(), 0);
}

/// **VALUE**: Verifies reopen with no window at all is a harmless no-op.
///
/// **WHY THIS MATTERS**: If the window was destroyed there is nothing to show; the reopen
/// must still be answered.
///
/// **BUG THIS CATCHES**: Would catch a panic on a missing window.
#[test]
fn given_reopen_without_any_window_when_dispatched_then_still_handled() {
    // GIVEN
    let lifecycle = lifecycle_with_handle("4242");
    let windows = CountingWindows::without_window();

    // WHEN
    let reply = lifecycle.handle(
        LifecycleEvent::Reopen {
            has_visible_windows: false,
        },
        &windows,
    );

    // THEN
    assert_eq!(reply, LifecycleReply::ReopenHandled(true));
    assert!(lifecycle.supervisor().signaler().calls().is_empty());
}

/// **VALUE**: Verifies the secure restorable state capability is always on.
///
/// **WHY THIS MATTERS**: macOS warns at launch when this answer is missing or false.
///
/// **BUG THIS CATCHES**: Would catch the flag being flipped or routed elsewhere.
#[test]
fn given_secure_restorable_state_query_when_dispatched_then_supported() {
    let lifecycle = lifecycle_with_handle("");
    let windows = CountingWindows::with_window();

    let reply = lifecycle.handle(LifecycleEvent::SecureRestorableStateQuery, &windows);

    assert_eq!(reply, LifecycleReply::SupportsSecureRestorableState(true));
    assert_eq!(lifecycle.supervisor().repository().read_count(), 0);
}
