use crate::helpers::{NoWindows, state_with};

use shell_core::launch_at_startup::{InMemoryLoginItemService, LaunchAtStartupBridge};
use shell_core::lifecycle::{LifecycleEvent, LifecycleReply};

// ============================================================================
// Integration tests for AppState + shell-core wiring
// These exercise the state the Tauri runtime manages, without a Tauri runtime
// ============================================================================

/// **VALUE**: Tests the run-event sequence the binary produces: last window gone, then exit.
///
/// **WHY THIS MATTERS**: This is the closest we get to an end-to-end run without a Tauri
/// runtime. The server must survive the window closing and be signaled at exit.
///
/// **BUG THIS CATCHES**: Would catch the state wiring a different supervisor than the one
/// the lifecycle uses, or the last-window path stopping the server.
#[test]
fn given_managed_state_when_window_closes_then_exit_then_server_signaled_once() {
    // GIVEN
    let state = state_with("4242\n", LaunchAtStartupBridge::unsupported());

    // WHEN: The last window closes
    let reply = state
        .lifecycle
        .handle(LifecycleEvent::LastWindowClosed, &NoWindows);

    // THEN: The app keeps running and nothing is signaled
    assert_eq!(reply, LifecycleReply::ShouldTerminate(false));
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

    // WHEN: The runtime exits (Exit may be observed twice)
    state
        .lifecycle
        .handle(LifecycleEvent::WillTerminate, &NoWindows);
    state
        .lifecycle
        .handle(LifecycleEvent::WillTerminate, &NoWindows);

    // THEN: Exactly one graceful terminate to the recorded pid
    let calls = state.lifecycle.supervisor().signaler().calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].as_u32(), 4242);
}

/// **VALUE**: Tests the launch-at-startup bridge held in state round-trips.
///
/// **WHY THIS MATTERS**: Tauri commands reach the bridge only through managed state.
///
/// **BUG THIS CATCHES**: Would catch the state dropping or replacing the injected service.
#[test]
fn given_state_with_login_service_when_toggled_then_reports_enabled() {
    // GIVEN
    let state = state_with(
        "",
        LaunchAtStartupBridge::new(Some(Box::new(InMemoryLoginItemService::new()))),
    );

    // WHEN
    state
        .launch_at_startup
        .set_launch_at_login_enabled(true)
        .unwrap();

    // THEN
    assert!(state.launch_at_startup.is_supported());
    assert!(state.launch_at_startup.is_launch_at_login_enabled().unwrap());
}
