pub mod file_store;
pub mod key_value;
pub mod local;
pub mod memory_store;
pub mod remote;
