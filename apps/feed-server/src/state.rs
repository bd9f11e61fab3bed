//! Application state - shared across all handlers.

use std::sync::Arc;

use feed_core::domain::Post;
use feed_core::ports::PostRepository;
use feed_infra::InMemoryPostRepository;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    /// Build the application state for a fresh process.
    pub async fn new(config: &AppConfig) -> Self {
        let seed = if config.seed_posts {
            vec![welcome_post()]
        } else {
            Vec::new()
        };

        tracing::info!(seeded = seed.len(), "Application state initialized (in-memory posts)");
        Self::with_repository(Arc::new(InMemoryPostRepository::with_posts(seed)))
    }

    pub fn with_repository(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }
}

fn welcome_post() -> Post {
    Post::new(
        "system",
        "feed",
        "Welcome! Share what you're playing, like posts and leave comments.",
        None,
    )
}
