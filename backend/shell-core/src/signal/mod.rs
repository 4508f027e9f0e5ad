//! Graceful termination requests addressed to a process id.
//!
//! Only the cooperative terminate signal is ever sent. There is no fallback to a forceful
//! kill and no waiting for the target to exit.

use crate::error::signal::SignalError;
use crate::handle::ProcessId;

use common::ErrorLocation;

use std::panic::Location;

use log::{debug, trace};
use sysinfo::{Pid, Process, ProcessesToUpdate, Signal, System};

/// PID of the init process; never a valid server target.
const INIT_PID: u32 = 1;

/// Delivers the graceful-terminate signal.
pub trait ProcessSignaler {
    /// Send one graceful-terminate request to `pid`.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError`] if the target is absent, the OS rejects delivery, the
    /// platform has no graceful terminate, or the pid is one the signaler refuses to address.
    fn terminate(&self, pid: ProcessId) -> Result<(), SignalError>;
}

/// Signaler backed by `sysinfo`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SysinfoSignaler;

impl SysinfoSignaler {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessSignaler for SysinfoSignaler {
    #[track_caller]
    fn terminate(&self, pid: ProcessId) -> Result<(), SignalError> {
        let location = ErrorLocation::from(Location::caller());
        let raw_pid = pid.as_u32();

        refuse_protected_pid(raw_pid, location)?;

        let delivered = with_process(raw_pid, |p| p.kill_with(Signal::Term));

        match delivered {
            None => {
                debug!("Signal attempted, target absent: PID {raw_pid}");
                Err(SignalError::TargetAbsent {
                    pid: raw_pid,
                    location,
                })
            }
            Some(None) => {
                debug!("SIGTERM is not supported on this platform, not escalating: PID {raw_pid}");
                Err(SignalError::Unsupported {
                    pid: raw_pid,
                    location,
                })
            }
            Some(Some(false)) => {
                debug!("OS rejected SIGTERM for PID {raw_pid}");
                Err(SignalError::Rejected {
                    pid: raw_pid,
                    location,
                })
            }
            Some(Some(true)) => {
                debug!("Sent SIGTERM to PID {raw_pid}");
                Ok(())
            }
        }
    }
}

pub(crate) fn refuse_protected_pid(pid: u32, location: ErrorLocation) -> Result<(), SignalError> {
    if pid == INIT_PID {
        return Err(SignalError::Refused {
            pid,
            message: String::from("Refusing to signal PID 1 (init process)"),
            location,
        });
    }

    if pid == std::process::id() {
        return Err(SignalError::Refused {
            pid,
            message: format!("Refusing to signal the shell's own process (PID {pid})"),
            location,
        });
    }

    Ok(())
}

/// Look up a single process and run `f` against it.
///
/// Only the requested pid is refreshed. Returns `None` if no such process exists.
pub(crate) fn with_process<F, R>(pid: u32, f: F) -> Option<R>
where
    F: FnOnce(&Process) -> R,
{
    let target = Pid::from_u32(pid);
    let mut sys = System::new();
    sys.refresh_processes(ProcessesToUpdate::Some(&[target]), true);

    trace!("Looked up PID {pid}");

    sys.process(target).map(f)
}
