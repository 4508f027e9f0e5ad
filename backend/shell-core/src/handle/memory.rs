use crate::error::handle_store::HandleStoreError;
use crate::handle::{ProcessId, ServerHandleRepository};

use common::ErrorLocation;

use std::panic::Location;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory stand-in for the handle file.
///
/// Holds the raw file contents (not a parsed id) so parsing follows exactly the same rules
/// as the filesystem store. Counts reads so callers can assert the record was consulted.
#[derive(Debug, Default)]
pub struct InMemoryServerHandleRepository {
    contents: Mutex<Option<String>>,
    reads: AtomicUsize,
}

impl InMemoryServerHandleRepository {
    /// An empty store, equivalent to a missing handle file.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Mutex::new(Some(contents.into())),
            reads: AtomicUsize::new(0),
        }
    }

    pub fn set_contents(&self, contents: impl Into<String>) {
        if let Ok(mut guard) = self.contents.lock() {
            *guard = Some(contents.into());
        }
    }

    pub fn clear(&self) {
        if let Ok(mut guard) = self.contents.lock() {
            *guard = None;
        }
    }

    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl ServerHandleRepository for InMemoryServerHandleRepository {
    #[track_caller]
    fn read_handle(&self) -> Result<ProcessId, HandleStoreError> {
        let location = ErrorLocation::from(Location::caller());
        self.reads.fetch_add(1, Ordering::SeqCst);

        let guard = self
            .contents
            .lock()
            .map_err(|_| HandleStoreError::Unavailable {
                message: String::from("In-memory handle store lock poisoned"),
                location,
            })?;

        match guard.as_deref() {
            Some(contents) => ProcessId::parse(contents),
            None => Err(HandleStoreError::Unavailable {
                message: String::from("No server handle recorded"),
                location,
            }),
        }
    }
}
