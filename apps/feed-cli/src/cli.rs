//! Command line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use feed_core::domain::{ProfileUpdate, Theme};

#[derive(Debug, Parser)]
#[command(name = "feed", version, about = "A tiny social feed, kept on your disk")]
pub struct Cli {
    /// Session storage file.
    #[arg(long, global = true, env = "FEED_STORAGE", default_value = "feed-storage.json")]
    pub storage: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in (the password is not checked).
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
    },
    /// Create an account and sign in.
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
    },
    /// Sign out.
    Logout,
    /// Show the signed-in user.
    Whoami,
    /// Publish a post.
    Post {
        content: String,
        /// Image URL to attach.
        #[arg(long)]
        image: Option<String>,
    },
    /// Replace the text of one of your posts.
    Edit { post_id: String, content: String },
    /// Delete one of your posts.
    Delete { post_id: String },
    /// Like a post, or take the like back.
    Like { post_id: String },
    /// Comment on a post.
    Comment { post_id: String, content: String },
    /// Show the feed, newest first.
    List {
        /// Print raw JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Show or change profile settings.
    #[command(subcommand)]
    Profile(ProfileCommand),
}

#[derive(Debug, Subcommand)]
pub enum ProfileCommand {
    Show,
    Set(ProfileArgs),
}

#[derive(Debug, Args)]
pub struct ProfileArgs {
    #[arg(long)]
    pub bio: Option<String>,
    #[arg(long)]
    pub website: Option<String>,
    #[arg(long)]
    pub twitter: Option<String>,
    #[arg(long)]
    pub github: Option<String>,
    #[arg(long, value_enum)]
    pub theme: Option<ThemeArg>,
    #[arg(long)]
    pub avatar_color: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

impl From<ProfileArgs> for ProfileUpdate {
    fn from(args: ProfileArgs) -> Self {
        ProfileUpdate {
            bio: args.bio,
            website: args.website,
            twitter: args.twitter,
            github: args.github,
            theme: args.theme.map(Theme::from),
            avatar_color: args.avatar_color,
        }
    }
}
