use shell_core::error::signal::SignalError;
use shell_core::handle::ProcessId;
use shell_core::lifecycle::WindowController;
use shell_core::signal::ProcessSignaler;
use shell_core::{APP_NAMESPACE, SERVER_HANDLE_FILE_NAME};

use common::ErrorLocation;

use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// How a [`RecordingSignaler`] answers.
#[derive(Debug, Clone, Copy)]
pub enum SignalBehaviour {
    Deliver,
    TargetAbsent,
}

/// Signaler that records every request instead of touching real processes.
pub struct RecordingSignaler {
    behaviour: SignalBehaviour,
    calls: Mutex<Vec<ProcessId>>,
}

impl RecordingSignaler {
    pub fn delivering() -> Self {
        Self {
            behaviour: SignalBehaviour::Deliver,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn target_absent() -> Self {
        Self {
            behaviour: SignalBehaviour::TargetAbsent,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<ProcessId> {
        self.calls.lock().unwrap().clone()
    }
}

impl ProcessSignaler for RecordingSignaler {
    #[track_caller]
    fn terminate(&self, pid: ProcessId) -> Result<(), SignalError> {
        self.calls.lock().unwrap().push(pid);

        match self.behaviour {
            SignalBehaviour::Deliver => Ok(()),
            SignalBehaviour::TargetAbsent => Err(SignalError::TargetAbsent {
                pid: pid.as_u32(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

/// Window controller that counts focus requests.
pub struct CountingWindows {
    has_window: bool,
    focus_calls: AtomicUsize,
}

impl CountingWindows {
    pub fn with_window() -> Self {
        Self {
            has_window: true,
            focus_calls: AtomicUsize::new(0),
        }
    }

    pub fn without_window() -> Self {
        Self {
            has_window: false,
            focus_calls: AtomicUsize::new(0),
        }
    }

    pub fn focus_calls(&self) -> usize {
        self.focus_calls.load(Ordering::SeqCst)
    }
}

impl WindowController for CountingWindows {
    fn focus_first_window(&self) -> bool {
        self.focus_calls.fetch_add(1, Ordering::SeqCst);
        self.has_window
    }
}

/// Write a handle file below `base_dir` the way the server launcher would.
pub fn write_handle(base_dir: &Path, contents: &str) -> PathBuf {
    let dir = base_dir.join(APP_NAMESPACE);
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(SERVER_HANDLE_FILE_NAME);
    fs::write(&path, contents).unwrap();
    path
}

pub fn pid(raw: i32) -> ProcessId {
    ProcessId::new(raw).unwrap()
}
