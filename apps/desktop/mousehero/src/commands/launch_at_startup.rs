use crate::error::MouseHeroError;
use crate::state::AppState;

use shell_core::launch_at_startup::{MethodCall, MethodResponse};

use log::debug;
use tauri::{State, command as TauriCommand};

/// Query whether the app is registered to launch at login.
///
/// # Returns
///
/// * `Ok(bool)` - Current registration state
/// * `Err(MouseHeroError::Unsupported)` - No login item service in this build
/// * `Err(MouseHeroError::LoginItem)` - The OS query failed
#[TauriCommand]
pub fn launch_at_startup_is_enabled(state: State<'_, AppState>) -> Result<bool, MouseHeroError> {
    state
        .launch_at_startup
        .is_launch_at_login_enabled()
        .map_err(MouseHeroError::from_login_item)
}

/// Register or unregister the app as a login item.
///
/// The frontend passes the argument as `setEnabledValue`.
#[TauriCommand]
pub fn launch_at_startup_set_enabled(
    state: State<'_, AppState>,
    set_enabled_value: bool,
) -> Result<(), MouseHeroError> {
    debug!("Setting launch at startup to {set_enabled_value}");

    state
        .launch_at_startup
        .set_launch_at_login_enabled(set_enabled_value)
        .map_err(MouseHeroError::from_login_item)
}

/// Channel-style entry point: dispatch a named method call to the bridge.
#[TauriCommand]
pub fn launch_at_startup(state: State<'_, AppState>, call: MethodCall) -> MethodResponse {
    state.launch_at_startup.handle(&call)
}
