//! Translation of Tauri run-loop events into shell lifecycle events.
//!
//! `RunEvent` carries runtime handles that cannot be built outside a running app, so
//! `main.rs` first reduces it to [`ShellRunEvent`] and applies the returned
//! [`RunEventAction`].

use shell_core::handle::ServerHandleRepository;
use shell_core::lifecycle::{LifecycleEvent, LifecycleReply, ShellLifecycle, WindowController};
use shell_core::signal::ProcessSignaler;

use log::{debug, info};

/// The run-loop events the shell reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellRunEvent {
    /// `RunEvent::ExitRequested`. No code means the last window went away.
    ExitRequested { code: Option<i32> },
    /// `RunEvent::Exit`, the final event before the process ends (also Cmd+Q).
    Exit,
    /// `RunEvent::Reopen` (macOS dock click).
    Reopen { has_visible_windows: bool },
}

/// What the run loop should do after an event was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunEventAction {
    Continue,
    PreventExit,
}

pub fn dispatch_run_event<R, S>(
    lifecycle: &ShellLifecycle<R, S>,
    event: ShellRunEvent,
    windows: &dyn WindowController,
) -> RunEventAction
where
    R: ServerHandleRepository,
    S: ProcessSignaler,
{
    match event {
        ShellRunEvent::ExitRequested { code: None } => {
            let reply = lifecycle.handle(LifecycleEvent::LastWindowClosed, windows);

            if reply == LifecycleReply::ShouldTerminate(false) {
                debug!("Last window closed - staying alive in the background");
                return RunEventAction::PreventExit;
            }
            RunEventAction::Continue
        }
        ShellRunEvent::ExitRequested { code: Some(code) } => {
            debug!("Exit requested with code {code}");
            RunEventAction::Continue
        }
        ShellRunEvent::Exit => {
            lifecycle.handle(LifecycleEvent::WillTerminate, windows);
            info!("MouseHero shell exiting");
            RunEventAction::Continue
        }
        ShellRunEvent::Reopen {
            has_visible_windows,
        } => {
            lifecycle.handle(
                LifecycleEvent::Reopen {
                    has_visible_windows,
                },
                windows,
            );
            RunEventAction::Continue
        }
    }
}
