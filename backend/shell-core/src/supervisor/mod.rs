//! Best-effort termination of the background server at application shutdown.
//!
//! Flow, once per run: read the handle record, parse it, send one graceful terminate.
//! Every failure along the way ends here; shutdown is never blocked or aborted.

use crate::error::signal::SignalError;
use crate::handle::{FileServerHandleStore, ProcessId, ServerHandleRepository};
use crate::signal::{ProcessSignaler, SysinfoSignaler};

use log::{debug, info, warn};

/// What a termination attempt did.
#[derive(Debug)]
pub enum TerminationOutcome {
    /// One graceful terminate was delivered to the recorded process.
    Signaled(ProcessId),

    /// No usable handle: file missing, unreadable or malformed.
    NoHandle,

    /// A handle was found but the signal could not be delivered.
    SignalFailed { pid: ProcessId, error: SignalError },
}

impl TerminationOutcome {
    pub fn signaled_pid(&self) -> Option<ProcessId> {
        match self {
            TerminationOutcome::Signaled(pid) => Some(*pid),
            _ => None,
        }
    }
}

/// Translates the terminal lifecycle event into at most one terminate signal.
pub struct ShutdownSupervisor<R, S> {
    repository: R,
    signaler: S,
}

/// Production pairing: handle file in the user's application-support directory,
/// signals delivered through `sysinfo`.
pub type DefaultShutdownSupervisor = ShutdownSupervisor<FileServerHandleStore, SysinfoSignaler>;

impl DefaultShutdownSupervisor {
    pub fn for_current_user() -> Self {
        Self::new(FileServerHandleStore::for_current_user(), SysinfoSignaler::new())
    }
}

impl<R, S> ShutdownSupervisor<R, S>
where
    R: ServerHandleRepository,
    S: ProcessSignaler,
{
    pub fn new(repository: R, signaler: S) -> Self {
        Self {
            repository,
            signaler,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn signaler(&self) -> &S {
        &self.signaler
    }

    /// Read the recorded server process and request its graceful termination.
    ///
    /// Does not wait for the process to exit, does not retry and never escalates.
    pub fn terminate_server(&self) -> TerminationOutcome {
        let Some(pid) = self.repository.read() else {
            return TerminationOutcome::NoHandle;
        };

        match self.signaler.terminate(pid) {
            Ok(()) => TerminationOutcome::Signaled(pid),
            Err(error) => TerminationOutcome::SignalFailed { pid, error },
        }
    }

    /// Hook for the application's "will terminate" event.
    ///
    /// The outcome is logged and dropped; this never fails from the caller's perspective.
    pub fn on_will_terminate(&self) {
        match self.terminate_server() {
            TerminationOutcome::Signaled(pid) => {
                info!("Requested graceful termination of server PID {pid}");
            }
            TerminationOutcome::NoHandle => {
                debug!("No server handle recorded - nothing to terminate");
            }
            TerminationOutcome::SignalFailed { pid, error } => {
                warn!("Server PID {pid} was not signaled, continuing shutdown: {error}");
            }
        }
    }
}
