pub mod config;
pub mod error;
pub mod handle;
pub mod launch_at_startup;
pub mod lifecycle;
pub mod logger;
pub mod signal;
pub mod supervisor;

#[cfg(test)]
mod tests;

pub const APP_NAMESPACE: &str = "MouseHero";
pub const SERVER_HANDLE_FILE_NAME: &str = "server.pid";
pub const SERVER_HANDLE_RELATIVE_PATH: &str =
    const_format::concatcp!(APP_NAMESPACE, "/", SERVER_HANDLE_FILE_NAME);
