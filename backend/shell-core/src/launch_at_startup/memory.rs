use crate::error::login_item::LoginItemError;
use crate::launch_at_startup::LoginItemService;

use common::ErrorLocation;

use std::io::Error as IoError;
use std::panic::Location;
use std::sync::Mutex;

/// Login-item service that keeps the registration flag in memory.
///
/// A failing instance answers every call with [`LoginItemError::Service`].
#[derive(Debug, Default)]
pub struct InMemoryLoginItemService {
    enabled: Mutex<bool>,
    failing: bool,
}

impl InMemoryLoginItemService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            enabled: Mutex::new(false),
            failing: true,
        }
    }

    #[track_caller]
    fn check(&self, operation: &str) -> Result<(), LoginItemError> {
        if self.failing {
            return Err(LoginItemError::Service {
                message: format!("Simulated failure during {operation}"),
                location: ErrorLocation::from(Location::caller()),
                source: Box::new(IoError::other("login item registry unreachable")),
            });
        }

        Ok(())
    }
}

impl LoginItemService for InMemoryLoginItemService {
    #[track_caller]
    fn is_enabled(&self) -> Result<bool, LoginItemError> {
        self.check("is_enabled")?;
        Ok(self.enabled.lock().map(|g| *g).unwrap_or(false))
    }

    #[track_caller]
    fn set_enabled(&self, enabled: bool) -> Result<(), LoginItemError> {
        self.check("set_enabled")?;
        if let Ok(mut guard) = self.enabled.lock() {
            *guard = enabled;
        }
        Ok(())
    }
}
