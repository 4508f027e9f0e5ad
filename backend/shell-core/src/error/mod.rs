pub mod config;
pub mod handle_store;
pub mod logger;
pub mod login_item;
pub mod signal;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error(transparent)]
    HandleStore(#[from] handle_store::HandleStoreError),

    #[error(transparent)]
    Signal(#[from] signal::SignalError),

    #[error(transparent)]
    LoginItem(#[from] login_item::LoginItemError),

    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Logger(#[from] logger::LoggerError),
}
