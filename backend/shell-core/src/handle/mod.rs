//! Read side of the server handle record.
//!
//! The background server records its process identifier in a small text file when it
//! starts. The shell only ever reads that record; it never writes, locks or deletes it.
//!
//! # Format
//!
//! ```text
//! <pid>
//! ```
//!
//! A single decimal process identifier, optionally surrounded by whitespace or a
//! trailing newline. Zero and negative values are rejected since the OS signal call
//! treats them as process-group or broadcast targets.

pub mod file_store;
pub mod memory;

pub use file_store::{FileServerHandleStore, resolve_server_handle_path, server_handle_path};
pub use memory::InMemoryServerHandleRepository;

use crate::error::handle_store::HandleStoreError;

use common::ErrorLocation;

use std::fmt::{Display, Formatter, Result as FormatResult};
use std::panic::Location;

use log::debug;

/// A validated, strictly positive OS process identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProcessId(u32);

impl ProcessId {
    /// Validate a raw signed identifier.
    ///
    /// # Errors
    ///
    /// Returns [`HandleStoreError::Parse`] for zero or negative values.
    #[track_caller]
    pub fn new(raw: i32) -> Result<Self, HandleStoreError> {
        if raw <= 0 {
            return Err(HandleStoreError::Parse {
                message: format!("process id must be positive, got {raw}"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self(raw.unsigned_abs()))
    }

    /// Parse handle file contents: trim surrounding whitespace, then read a signed 32-bit
    /// integer.
    ///
    /// # Errors
    ///
    /// Returns [`HandleStoreError::Parse`] if the trimmed text is not an integer or is not
    /// a positive one.
    #[track_caller]
    pub fn parse(contents: &str) -> Result<Self, HandleStoreError> {
        let location = ErrorLocation::from(Location::caller());
        let trimmed = contents.trim();

        let raw = trimmed
            .parse::<i32>()
            .map_err(|e| HandleStoreError::Parse {
                message: format!("{trimmed:?} is not a process id: {e}"),
                location,
            })?;

        Self::new(raw)
    }

    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl Display for ProcessId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        write!(formatter, "{}", self.0)
    }
}

/// Source of the recorded server process identifier.
///
/// Implementations must re-read their backing storage on every call; the record can be
/// rewritten by another process at any time.
pub trait ServerHandleRepository {
    /// Read and parse the current handle.
    fn read_handle(&self) -> Result<ProcessId, HandleStoreError>;

    /// Read the current handle, folding every failure into `None`.
    fn read(&self) -> Option<ProcessId> {
        match self.read_handle() {
            Ok(pid) => Some(pid),
            Err(e) => {
                debug!("No usable server handle: {e}");
                None
            }
        }
    }
}
