mod handle;
mod launch_at_startup;
mod logger;
mod signal;
