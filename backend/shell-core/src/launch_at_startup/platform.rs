//! Platform login-item registration through the `auto-launch` crate.
//!
//! - **macOS**: launch agent plist for the enclosing `.app` bundle
//! - **Linux**: XDG autostart `.desktop` entry
//! - **Windows**: `Run` registry key

use crate::APP_NAMESPACE;
use crate::error::login_item::LoginItemError;
use crate::launch_at_startup::LoginItemService;

use common::ErrorLocation;

use std::env;
use std::panic::Location;
use std::path::{Path, PathBuf};

use auto_launch::{AutoLaunch, AutoLaunchBuilder};
use log::{debug, info, warn};

pub struct AutoLaunchLoginItemService {
    auto_launch: AutoLaunch,
}

impl AutoLaunchLoginItemService {
    /// Build the service for the running executable under the application namespace.
    ///
    /// Returns `None` when the executable path cannot be resolved or the platform backend
    /// cannot be configured.
    pub fn detect() -> Option<Self> {
        let exe = match env::current_exe() {
            Ok(exe) => exe,
            Err(e) => {
                warn!("Cannot resolve current executable for login item: {e}");
                return None;
            }
        };

        Self::for_executable(APP_NAMESPACE, &exe)
    }

    pub fn for_executable(app_name: &str, exe: &Path) -> Option<Self> {
        let app_path = login_item_app_path(exe);
        let Some(app_path_str) = app_path.to_str() else {
            warn!("Login item path is not valid UTF-8: {}", app_path.display());
            return None;
        };

        let mut builder = AutoLaunchBuilder::new();
        builder
            .set_app_name(app_name)
            .set_app_path(app_path_str)
            .set_use_launch_agent(true);

        match builder.build() {
            Ok(auto_launch) => {
                debug!("Login item service ready for {}", app_path.display());
                Some(Self { auto_launch })
            }
            Err(e) => {
                warn!("Login item service could not be configured: {e}");
                None
            }
        }
    }
}

impl LoginItemService for AutoLaunchLoginItemService {
    #[track_caller]
    fn is_enabled(&self) -> Result<bool, LoginItemError> {
        let location = ErrorLocation::from(Location::caller());

        self.auto_launch
            .is_enabled()
            .map_err(|e| LoginItemError::Service {
                message: format!("Failed to query login item registration: {e}"),
                location,
                source: Box::new(e),
            })
    }

    #[track_caller]
    fn set_enabled(&self, enabled: bool) -> Result<(), LoginItemError> {
        let location = ErrorLocation::from(Location::caller());

        let result = if enabled {
            self.auto_launch.enable()
        } else {
            self.auto_launch.disable()
        };

        result.map_err(|e| LoginItemError::Service {
            message: format!("Failed to update login item registration (enabled={enabled}): {e}"),
            location,
            source: Box::new(e),
        })?;

        info!("Launch at login set to {enabled}");
        Ok(())
    }
}

/// Path registered as the login item.
///
/// Inside a macOS bundle (`Foo.app/Contents/MacOS/foo`) this is the bundle directory;
/// everywhere else it is the executable itself.
pub(crate) fn login_item_app_path(exe: &Path) -> PathBuf {
    exe.ancestors()
        .find(|ancestor| ancestor.extension().is_some_and(|ext| ext == "app"))
        .unwrap_or(exe)
        .to_path_buf()
}
