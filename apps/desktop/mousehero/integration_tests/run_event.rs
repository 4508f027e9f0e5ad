use crate::helpers::{NoWindows, state_with};

use mousehero::run_event::{RunEventAction, ShellRunEvent, dispatch_run_event};

use shell_core::launch_at_startup::LaunchAtStartupBridge;
use shell_core::lifecycle::WindowController;

use std::sync::atomic::{AtomicUsize, Ordering};

// ============================================================================
// Run-loop event translation
// ============================================================================

#[derive(Default)]
struct FocusCounter {
    focused: AtomicUsize,
}

impl WindowController for FocusCounter {
    fn focus_first_window(&self) -> bool {
        self.focused.fetch_add(1, Ordering::SeqCst);
        true
    }
}

/// **VALUE**: Verifies an exit request without a code keeps the app alive.
///
/// **WHY THIS MATTERS**: Tauri asks to exit when the last window goes away. The shell lives
/// in the background, so the exit must be prevented and the server left running.
///
/// **BUG THIS CATCHES**: Would catch the request being allowed through, or being treated as
/// a termination that signals the server.
#[test]
fn given_exit_requested_without_code_when_dispatched_then_prevents_exit_without_signal() {
    // GIVEN
    let state = state_with("4242", LaunchAtStartupBridge::unsupported());

    // WHEN
    let action = dispatch_run_event(
        &state.lifecycle,
        ShellRunEvent::ExitRequested { code: None },
        &NoWindows,
    );

    // THEN
    assert_eq!(action, RunEventAction::PreventExit);
    assert!(
        state
            .lifecycle
            .supervisor()
            .signaler()
            .calls
            .lock()
            .unwrap()
            .is_empty()
    );
}

/// **VALUE**: Verifies an explicit exit code is honoured.
///
/// **WHY THIS MATTERS**: `AppHandle::exit(code)` is a deliberate quit; preventing it would
/// make the app impossible to close programmatically.
///
/// **BUG THIS CATCHES**: Would catch every exit request being swallowed.
#[test]
fn given_exit_requested_with_code_when_dispatched_then_continues() {
    // GIVEN
    let state = state_with("4242", LaunchAtStartupBridge::unsupported());

    // WHEN
    let action = dispatch_run_event(
        &state.lifecycle,
        ShellRunEvent::ExitRequested { code: Some(0) },
        &NoWindows,
    );

    // THEN
    assert_eq!(action, RunEventAction::Continue);
}

/// **VALUE**: Verifies the final exit event signals the recorded server exactly once.
///
/// **WHY THIS MATTERS**: Cmd+Q ends the run loop with `Exit`; this is the only point where
/// the server gets stopped.
///
/// **BUG THIS CATCHES**: Would catch `Exit` not being mapped to the terminate hook, or a
/// repeated `Exit` signaling twice.
#[test]
fn given_exit_when_dispatched_twice_then_server_signaled_once() {
    // GIVEN
    let state = state_with("4242\n", LaunchAtStartupBridge::unsupported());

    // WHEN
    let first = dispatch_run_event(&state.lifecycle, ShellRunEvent::Exit, &NoWindows);
    let second = dispatch_run_event(&state.lifecycle, ShellRunEvent::Exit, &NoWindows);

    // THEN
    assert_eq!(first, RunEventAction::Continue);
    assert_eq!(second, RunEventAction::Continue);
    let calls = state.lifecycle.supervisor().signaler().calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].as_u32(), 4242);
}

/// **VALUE**: Verifies a dock reopen focuses a window only when none is visible.
///
/// **WHY THIS MATTERS**: The window starts hidden; clicking the dock icon is how the user
/// brings it back.
///
/// **BUG THIS CATCHES**: Would catch `Reopen` being dropped or focusing over a visible window.
#[test]
fn given_reopen_when_dispatched_then_focuses_only_without_visible_windows() {
    // GIVEN
    let state = state_with("", LaunchAtStartupBridge::unsupported());
    let windows = FocusCounter::default();

    // WHEN
    let hidden = dispatch_run_event(
        &state.lifecycle,
        ShellRunEvent::Reopen {
            has_visible_windows: false,
        },
        &windows,
    );
    let visible = dispatch_run_event(
        &state.lifecycle,
        ShellRunEvent::Reopen {
            has_visible_windows: true,
        },
        &windows,
    );

    // THEN
    assert_eq!(hidden, RunEventAction::Continue);
    assert_eq!(visible, RunEventAction::Continue);
    assert_eq!(windows.focused.load(Ordering::SeqCst), 1);
    assert!(
        state
            .lifecycle
            .supervisor()
            .signaler()
            .calls
            .lock()
            .unwrap()
            .is_empty()
    );
}
