mod helpers;
mod run_event;
mod state;
mod window;
