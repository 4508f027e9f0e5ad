mod file_store;
mod memory;
mod process_id;
