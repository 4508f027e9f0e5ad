mod handle_store;
mod login_item;
mod signal;
