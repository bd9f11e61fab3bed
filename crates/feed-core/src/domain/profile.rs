use serde::{Deserialize, Serialize};

pub const DEFAULT_AVATAR_COLOR: &str = "#3b82f6";

/// Colour scheme picked on the profile page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Extended profile fields stored alongside the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileData {
    pub bio: String,
    pub website: String,
    pub twitter: String,
    pub github: String,
    pub theme: Theme,
    pub avatar_color: String,
}

impl Default for ProfileData {
    fn default() -> Self {
        Self {
            bio: String::new(),
            website: String::new(),
            twitter: String::new(),
            github: String::new(),
            theme: Theme::default(),
            avatar_color: DEFAULT_AVATAR_COLOR.to_string(),
        }
    }
}

/// Partial profile edit; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub bio: Option<String>,
    pub website: Option<String>,
    pub twitter: Option<String>,
    pub github: Option<String>,
    pub theme: Option<Theme>,
    pub avatar_color: Option<String>,
}

impl ProfileData {
    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(bio) = update.bio {
            self.bio = bio;
        }
        if let Some(website) = update.website {
            self.website = website;
        }
        if let Some(twitter) = update.twitter {
            self.twitter = twitter;
        }
        if let Some(github) = update.github {
            self.github = github;
        }
        if let Some(theme) = update.theme {
            self.theme = theme;
        }
        if let Some(color) = update.avatar_color {
            self.avatar_color = color;
        }
    }
}
