//! Key/value storage implementations - in-memory and JSON file.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::InMemoryStorage;
