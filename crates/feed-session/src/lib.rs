//! # Feed Session
//!
//! Client-side state of one signed-in user: the signed-in identity, the
//! locally kept feed, and profile settings. Every store writes through to
//! a [`KeyValueStore`](feed_core::ports::KeyValueStore) on each mutation and
//! rehydrates from it once when the [`Session`] is opened.

mod auth;
mod feed;
mod posts;
mod profile;
mod session;
mod storage;

pub use auth::AuthStore;
pub use feed::{FeedController, FeedItem, Notice};
pub use posts::PostStore;
pub use profile::ProfileStore;
pub use session::Session;
pub use storage::{POSTS_KEY, PROFILE_KEY, USER_KEY};
