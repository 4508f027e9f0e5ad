use common::ErrorLocation;

use std::error::Error as StdError;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum LoginItemError {
    /// No login-item service is available in this build or on this platform.
    #[error("Login Item Service Unavailable Error: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },

    /// The service exists but the OS registration call failed.
    #[error("Login Item Service Error: {message} {location}")]
    Service {
        message: String,
        location: ErrorLocation,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl LoginItemError {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, LoginItemError::Unavailable { .. })
    }
}
