use mousehero::state::AppState;

use shell_core::error::signal::SignalError;
use shell_core::handle::{InMemoryServerHandleRepository, ProcessId};
use shell_core::launch_at_startup::LaunchAtStartupBridge;
use shell_core::lifecycle::{ShellLifecycle, WindowController};
use shell_core::signal::ProcessSignaler;
use shell_core::supervisor::ShutdownSupervisor;

use std::sync::Mutex;

#[derive(Default)]
pub(crate) struct RecordingSignaler {
    pub(crate) calls: Mutex<Vec<ProcessId>>,
}

impl ProcessSignaler for RecordingSignaler {
    fn terminate(&self, pid: ProcessId) -> Result<(), SignalError> {
        self.calls.lock().unwrap().push(pid);
        Ok(())
    }
}

pub(crate) struct NoWindows;

impl WindowController for NoWindows {
    fn focus_first_window(&self) -> bool {
        false
    }
}

pub(crate) fn state_with(
    handle: &str,
    bridge: LaunchAtStartupBridge,
) -> AppState<InMemoryServerHandleRepository, RecordingSignaler> {
    AppState::new(
        ShellLifecycle::new(ShutdownSupervisor::new(
            InMemoryServerHandleRepository::with_contents(handle),
            RecordingSignaler::default(),
        )),
        bridge,
    )
}
