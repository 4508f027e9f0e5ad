//! Request/response bridge for the "launch at login" toggle.
//!
//! The GUI layer talks to this module over a named channel with two methods:
//!
//! - `launchAtStartupIsEnabled`: no arguments, answers a bool
//! - `launchAtStartupSetEnabled`: named bool argument `setEnabledValue`, answers null
//!
//! The OS login-item service is a runtime capability. When it is missing, every call
//! answers [`MethodResponse::NotImplemented`] so the GUI can hide the toggle instead of
//! failing.

pub mod memory;
pub mod platform;

pub use memory::InMemoryLoginItemService;
pub use platform::AutoLaunchLoginItemService;

use crate::error::login_item::LoginItemError;

use common::ErrorLocation;

use std::panic::Location;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const LAUNCH_AT_STARTUP_CHANNEL: &str = "launch_at_startup";
pub const IS_ENABLED_METHOD: &str = "launchAtStartupIsEnabled";
pub const SET_ENABLED_METHOD: &str = "launchAtStartupSetEnabled";
pub const SET_ENABLED_ARGUMENT: &str = "setEnabledValue";

/// Error code carried by [`MethodResponse::Error`] when the login-item service fails.
pub const LOGIN_ITEM_ERROR_CODE: &str = "LOGIN_ITEM_ERROR";

/// OS registration of the application as a login item.
pub trait LoginItemService: Send + Sync {
    fn is_enabled(&self) -> Result<bool, LoginItemError>;

    fn set_enabled(&self, enabled: bool) -> Result<(), LoginItemError>;
}

/// A method invocation arriving on the channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    #[serde(default)]
    pub arguments: Value,
}

impl MethodCall {
    pub fn new(method: impl Into<String>, arguments: Value) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }
}

/// Channel reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum MethodResponse {
    Success(Value),
    Error { code: String, message: String },
    NotImplemented,
}

pub struct LaunchAtStartupBridge {
    service: Option<Box<dyn LoginItemService>>,
}

impl LaunchAtStartupBridge {
    pub fn new(service: Option<Box<dyn LoginItemService>>) -> Self {
        Self { service }
    }

    /// Bridge backed by the platform login-item service, if one can be built.
    pub fn detect() -> Self {
        let service = AutoLaunchLoginItemService::detect()
            .map(|service| Box::new(service) as Box<dyn LoginItemService>);

        if service.is_none() {
            warn!("Login item service unavailable - launch at startup is unsupported");
        }

        Self::new(service)
    }

    pub fn unsupported() -> Self {
        Self::new(None)
    }

    pub fn is_supported(&self) -> bool {
        self.service.is_some()
    }

    /// # Errors
    ///
    /// Returns [`LoginItemError::Unavailable`] without a service, or the service's own error.
    #[track_caller]
    pub fn is_launch_at_login_enabled(&self) -> Result<bool, LoginItemError> {
        self.service()?.is_enabled()
    }

    /// # Errors
    ///
    /// Returns [`LoginItemError::Unavailable`] without a service, or the service's own error.
    #[track_caller]
    pub fn set_launch_at_login_enabled(&self, enabled: bool) -> Result<(), LoginItemError> {
        self.service()?.set_enabled(enabled)
    }

    /// Dispatch a channel call. Never panics; unknown methods answer `NotImplemented`.
    pub fn handle(&self, call: &MethodCall) -> MethodResponse {
        if self.service.is_none() {
            debug!("{} called without a login item service", call.method);
            return MethodResponse::NotImplemented;
        }

        match call.method.as_str() {
            IS_ENABLED_METHOD => match self.is_launch_at_login_enabled() {
                Ok(enabled) => MethodResponse::Success(Value::Bool(enabled)),
                Err(e) => error_response(e),
            },
            SET_ENABLED_METHOD => {
                let Some(enabled) = call
                    .arguments
                    .get(SET_ENABLED_ARGUMENT)
                    .and_then(Value::as_bool)
                else {
                    warn!(
                        "{SET_ENABLED_METHOD} called without a boolean {SET_ENABLED_ARGUMENT}, ignoring"
                    );
                    return MethodResponse::Success(Value::Null);
                };

                match self.set_launch_at_login_enabled(enabled) {
                    Ok(()) => MethodResponse::Success(Value::Null),
                    Err(e) => error_response(e),
                }
            }
            other => {
                debug!("Unknown {LAUNCH_AT_STARTUP_CHANNEL} method: {other}");
                MethodResponse::NotImplemented
            }
        }
    }

    #[track_caller]
    fn service(&self) -> Result<&dyn LoginItemService, LoginItemError> {
        self.service
            .as_deref()
            .ok_or_else(|| LoginItemError::Unavailable {
                message: String::from("No login item service in this build"),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

fn error_response(error: LoginItemError) -> MethodResponse {
    if error.is_unavailable() {
        return MethodResponse::NotImplemented;
    }

    warn!("Login item service failed: {error}");
    MethodResponse::Error {
        code: String::from(LOGIN_ITEM_ERROR_CODE),
        message: error.to_string(),
    }
}
