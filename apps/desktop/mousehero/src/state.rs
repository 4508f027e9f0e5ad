use shell_core::handle::{FileServerHandleStore, ServerHandleRepository};
use shell_core::launch_at_startup::LaunchAtStartupBridge;
use shell_core::lifecycle::ShellLifecycle;
use shell_core::signal::{ProcessSignaler, SysinfoSignaler};
use shell_core::supervisor::ShutdownSupervisor;

use log::info;

/// State managed by Tauri for the lifetime of the application.
///
/// Holds the lifecycle delegate (which owns the shutdown supervisor) and the
/// launch-at-startup bridge. Both are synchronous and need no actor or lock.
pub struct AppState<R = FileServerHandleStore, S = SysinfoSignaler> {
    pub lifecycle: ShellLifecycle<R, S>,
    pub launch_at_startup: LaunchAtStartupBridge,
}

impl<R, S> AppState<R, S>
where
    R: ServerHandleRepository,
    S: ProcessSignaler,
{
    pub fn new(lifecycle: ShellLifecycle<R, S>, launch_at_startup: LaunchAtStartupBridge) -> Self {
        Self {
            lifecycle,
            launch_at_startup,
        }
    }
}

impl AppState {
    /// Production state: handle file under the user's application-support directory and
    /// the platform login-item service when one is available.
    pub fn for_current_user() -> Self {
        let launch_at_startup = LaunchAtStartupBridge::detect();
        info!(
            "Launch at startup supported: {}",
            launch_at_startup.is_supported()
        );

        Self::new(
            ShellLifecycle::new(ShutdownSupervisor::for_current_user()),
            launch_at_startup,
        )
    }
}
