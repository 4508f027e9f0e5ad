//! Shared building blocks for the MouseHero shell.
//!
//! ## Architecture
//!
//! - **common** (this crate): Types shared by every layer, such as error locations
//! - **shell-core**: Server supervision, lifecycle dispatch and the login-item bridge
//! - **mousehero**: Tauri application wiring everything together
//!
//! Keeping the location type here lets every crate report errors in the same format.

pub mod error;

pub use error::error_location::ErrorLocation;

#[cfg(test)]
mod tests;
