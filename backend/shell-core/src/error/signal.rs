use common::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum SignalError {
    #[error("Signal Target Absent Error: no process with PID {pid} {location}")]
    TargetAbsent { pid: u32, location: ErrorLocation },

    #[error("Signal Rejected Error: OS refused SIGTERM for PID {pid} {location}")]
    Rejected { pid: u32, location: ErrorLocation },

    #[error("Signal Unsupported Error: graceful terminate unavailable for PID {pid} {location}")]
    Unsupported { pid: u32, location: ErrorLocation },

    #[error("Signal Refused Error: {message} {location}")]
    Refused {
        pid: u32,
        message: String,
        location: ErrorLocation,
    },
}

impl SignalError {
    pub fn pid(&self) -> u32 {
        match self {
            SignalError::TargetAbsent { pid, .. }
            | SignalError::Rejected { pid, .. }
            | SignalError::Unsupported { pid, .. }
            | SignalError::Refused { pid, .. } => *pid,
        }
    }
}
