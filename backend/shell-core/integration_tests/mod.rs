mod config;
mod error;
mod handle;
mod helpers;
mod launch_at_startup;
mod lifecycle;
mod signal;
mod supervisor;
