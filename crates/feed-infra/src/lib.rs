//! # Feed Infrastructure
//!
//! Concrete implementations of the ports defined in `feed-core`.
//!
//! - [`repository`] - process-lifetime post store backing the HTTP API
//! - [`storage`] - key/value storage for client sessions, in memory or in a JSON file

pub mod repository;
pub mod storage;

pub use repository::InMemoryPostRepository;
pub use storage::{FileStorage, InMemoryStorage};
