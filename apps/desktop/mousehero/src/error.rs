use common::ErrorLocation;

use shell_core::error::login_item::LoginItemError;

use std::panic::Location;

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur in Tauri commands and application setup.
///
/// These errors are converted to strings for IPC, but we maintain
/// structured error information and location tracking internally.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum MouseHeroError {
    /// Error from this App
    #[error("MouseHero Error: {message} {location}")]
    MouseHero {
        message: String,
        location: ErrorLocation,
    },

    /// The login item service is missing from this build
    #[error("Unsupported Error: {message} {location}")]
    Unsupported {
        message: String,
        location: ErrorLocation,
    },

    /// The login item service failed
    #[error("Login Item Error: {message} {location}")]
    LoginItem {
        message: String,
        location: ErrorLocation,
    },
}

impl MouseHeroError {
    #[track_caller]
    pub fn from_login_item(error: LoginItemError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        if error.is_unavailable() {
            MouseHeroError::Unsupported {
                message: error.to_string(),
                location,
            }
        } else {
            MouseHeroError::LoginItem {
                message: error.to_string(),
                location,
            }
        }
    }
}
