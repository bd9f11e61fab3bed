//! Domain entities - the core business objects.

mod post;
mod profile;
mod user;

pub use post::{Comment, Post};
pub use profile::{DEFAULT_AVATAR_COLOR, ProfileData, ProfileUpdate, Theme};
pub use user::{MOCK_LOGIN_USER_ID, User};

/// Generate a collision-resistant identifier for a new entity.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
