//! Mapping of GUI lifecycle callbacks onto shell behaviour.
//!
//! The window system is an event source. Each callback it delivers maps to exactly one
//! hook here:
//!
//! | Tauri run event                  | Event                         |
//! |----------------------------------|-------------------------------|
//! | `RunEvent::Exit`                 | [`LifecycleEvent::WillTerminate`] |
//! | `RunEvent::ExitRequested` (no code) | [`LifecycleEvent::LastWindowClosed`] |
//! | `RunEvent::Reopen` (macOS)       | [`LifecycleEvent::Reopen`] |
//! | queried once at setup            | [`LifecycleEvent::SecureRestorableStateQuery`] |
//!
//! Only `WillTerminate` reaches the [`ShutdownSupervisor`].

use crate::handle::ServerHandleRepository;
use crate::signal::ProcessSignaler;
use crate::supervisor::ShutdownSupervisor;

use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, info, trace};

/// Lifecycle notifications delivered by the GUI runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    WillTerminate,
    LastWindowClosed,
    Reopen { has_visible_windows: bool },
    SecureRestorableStateQuery,
}

/// Answer returned to the GUI runtime for a [`LifecycleEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleReply {
    Acknowledged,
    ShouldTerminate(bool),
    ReopenHandled(bool),
    SupportsSecureRestorableState(bool),
}

/// Window operations the lifecycle hooks need from the GUI layer.
pub trait WindowController {
    /// Bring the first existing window to the foreground.
    ///
    /// Returns `false` if there is no window to show.
    fn focus_first_window(&self) -> bool;
}

/// Lifecycle delegate owning the shutdown supervisor.
pub struct ShellLifecycle<R, S> {
    supervisor: ShutdownSupervisor<R, S>,
    terminated: AtomicBool,
}

impl<R, S> ShellLifecycle<R, S>
where
    R: ServerHandleRepository,
    S: ProcessSignaler,
{
    pub fn new(supervisor: ShutdownSupervisor<R, S>) -> Self {
        Self {
            supervisor,
            terminated: AtomicBool::new(false),
        }
    }

    pub fn supervisor(&self) -> &ShutdownSupervisor<R, S> {
        &self.supervisor
    }

    pub fn handle(&self, event: LifecycleEvent, windows: &dyn WindowController) -> LifecycleReply {
        trace!("Lifecycle event: {event:?}");

        match event {
            LifecycleEvent::WillTerminate => {
                self.will_terminate();
                LifecycleReply::Acknowledged
            }
            LifecycleEvent::LastWindowClosed => {
                LifecycleReply::ShouldTerminate(self.should_terminate_after_last_window_closed())
            }
            LifecycleEvent::Reopen {
                has_visible_windows,
            } => LifecycleReply::ReopenHandled(
                self.should_handle_reopen(has_visible_windows, windows),
            ),
            LifecycleEvent::SecureRestorableStateQuery => {
                LifecycleReply::SupportsSecureRestorableState(
                    self.supports_secure_restorable_state(),
                )
            }
        }
    }

    /// Run the shutdown supervisor. Repeated deliveries within one run are ignored.
    pub fn will_terminate(&self) {
        if self.terminated.swap(true, Ordering::SeqCst) {
            debug!("Terminate hook already ran for this application run");
            return;
        }

        info!("Application will terminate - stopping background server");
        self.supervisor.on_will_terminate();
    }

    /// The application keeps running in the background after its last window closes.
    pub fn should_terminate_after_last_window_closed(&self) -> bool {
        false
    }

    pub fn should_handle_reopen(
        &self,
        has_visible_windows: bool,
        windows: &dyn WindowController,
    ) -> bool {
        if !has_visible_windows {
            let focused = windows.focus_first_window();
            debug!("Reopen without visible windows: focused existing window={focused}");
        }

        true
    }

    pub fn supports_secure_restorable_state(&self) -> bool {
        true
    }
}
