// Library exports for testing
// The binary (main.rs) imports these as well

pub mod commands;
pub mod error;
pub mod run_event;
pub mod state;
pub mod window;

#[cfg(test)]
mod tests;
