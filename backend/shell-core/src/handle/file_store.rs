use crate::error::handle_store::HandleStoreError;
use crate::handle::{ProcessId, ServerHandleRepository};
use crate::{APP_NAMESPACE, SERVER_HANDLE_FILE_NAME, SERVER_HANDLE_RELATIVE_PATH};

use common::ErrorLocation;

use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};

use log::trace;

/// Compose the handle file path below an application-support directory.
pub fn server_handle_path(base_dir: &Path) -> PathBuf {
    base_dir.join(APP_NAMESPACE).join(SERVER_HANDLE_FILE_NAME)
}

/// Resolve the handle file path for the current OS user.
///
/// # Platform Behavior
/// - **macOS**: `~/Library/MouseHero/server.pid` (the user Library directory, where the
///   server launcher keeps its per-user files)
/// - **Linux**: `$XDG_DATA_HOME/MouseHero/server.pid` or `~/.local/share/MouseHero/server.pid`
/// - **Windows**: `%APPDATA%\MouseHero\server.pid`
///
/// # Errors
///
/// Returns [`HandleStoreError::Unavailable`] when the platform has no per-user directory.
#[track_caller]
pub fn resolve_server_handle_path() -> Result<PathBuf, HandleStoreError> {
    handle_base_dir()
        .map(|base_dir| server_handle_path(&base_dir))
        .ok_or_else(|| HandleStoreError::Unavailable {
            message: format!(
                "Cannot determine the per-user application support directory for {SERVER_HANDLE_RELATIVE_PATH}"
            ),
            location: ErrorLocation::from(Location::caller()),
        })
}

#[cfg(target_os = "macos")]
fn handle_base_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| user_library_dir(&home))
}

#[cfg(not(target_os = "macos"))]
fn handle_base_dir() -> Option<PathBuf> {
    dirs::data_dir()
}

/// `~/Library`, not `~/Library/Application Support`.
#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
pub(crate) fn user_library_dir(home: &Path) -> PathBuf {
    home.join("Library")
}

/// Handle store backed by the real filesystem.
#[derive(Debug, Clone, Default)]
pub struct FileServerHandleStore {
    base_dir: Option<PathBuf>,
}

impl FileServerHandleStore {
    /// Store rooted at the current user's application-support directory.
    ///
    /// The directory is looked up on every read, not at construction.
    pub fn for_current_user() -> Self {
        Self { base_dir: None }
    }

    /// Store rooted at an explicit application-support directory.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
        }
    }

    #[track_caller]
    pub fn path(&self) -> Result<PathBuf, HandleStoreError> {
        match self.base_dir {
            Some(ref base_dir) => Ok(server_handle_path(base_dir)),
            None => resolve_server_handle_path(),
        }
    }
}

impl ServerHandleRepository for FileServerHandleStore {
    #[track_caller]
    fn read_handle(&self) -> Result<ProcessId, HandleStoreError> {
        let location = ErrorLocation::from(Location::caller());
        let path = self.path()?;

        trace!("Reading server handle from {}", path.display());

        let contents = fs::read_to_string(&path).map_err(|e| HandleStoreError::Read {
            path: path.clone(),
            location,
            source: e,
        })?;

        ProcessId::parse(&contents)
    }
}
