//! Command execution against an open session.

use std::io::Write;

use anyhow::Context;

use feed_session::{FeedItem, Notice, Session};

use crate::cli::{Command, ProfileCommand};

pub async fn run(session: &Session, command: Command, out: &mut impl Write) -> anyhow::Result<()> {
    let auth = session.auth();
    let feed = session.feed();

    match command {
        Command::Login { email, password } => {
            let user = auth.login(&email, &password).await?;
            writeln!(out, "Signed in as {} ({})", user.username, user.email)?;
        }
        Command::Register {
            username,
            email,
            password,
        } => {
            let user = auth.register(&username, &email, &password).await?;
            writeln!(out, "Welcome, {}! Your id is {}", user.username, user.id)?;
        }
        Command::Logout => {
            auth.logout().await?;
            writeln!(out, "Signed out")?;
        }
        Command::Whoami => match auth.current_user().await {
            Some(user) => writeln!(out, "{} <{}> (id {})", user.username, user.email, user.id)?,
            None => writeln!(out, "Not signed in")?,
        },
        Command::Post { content, image } => {
            notify(out, feed.submit_post(&content, image.as_deref()).await?)?
        }
        Command::Edit { post_id, content } => {
            notify(out, feed.save_edit(&post_id, &content).await?)?
        }
        Command::Delete { post_id } => notify(out, feed.delete(&post_id).await?)?,
        Command::Like { post_id } => notify(out, feed.like(&post_id).await?)?,
        Command::Comment { post_id, content } => {
            notify(out, feed.comment(&post_id, &content).await?)?
        }
        Command::List { json } => {
            if json {
                let posts = session.posts().posts().await;
                let raw = serde_json::to_string_pretty(&posts).context("encoding feed")?;
                writeln!(out, "{raw}")?;
            } else {
                print_feed(out, &feed.feed().await)?;
            }
        }
        Command::Profile(ProfileCommand::Show) => {
            let profile = session.profile().profile().await;
            writeln!(out, "{}", serde_json::to_string_pretty(&profile)?)?;
        }
        Command::Profile(ProfileCommand::Set(args)) => {
            let profile = session.profile().update(args.into()).await?;
            writeln!(out, "{}", serde_json::to_string_pretty(&profile)?)?;
        }
    }

    Ok(())
}

fn notify(out: &mut impl Write, notice: Notice) -> std::io::Result<()> {
    match notice {
        Notice::Success(msg) => writeln!(out, "{msg}"),
        Notice::Error(msg) => writeln!(out, "error: {msg}"),
    }
}

fn print_feed(out: &mut impl Write, items: &[FeedItem]) -> std::io::Result<()> {
    if items.is_empty() {
        return writeln!(out, "No posts yet");
    }

    for item in items {
        let post = &item.post;
        let heart = if item.liked_by_me { "♥" } else { "♡" };
        let mine = if item.is_mine { " (you)" } else { "" };

        writeln!(
            out,
            "[{}] {}{} · {}",
            post.id,
            post.username,
            mine,
            post.created_at.format("%Y-%m-%d %H:%M")
        )?;
        writeln!(out, "    {}", post.content)?;
        if let Some(url) = &post.image_url {
            writeln!(out, "    image: {url}")?;
        }
        writeln!(out, "    {heart} {}  · {} comments", item.like_count, post.comments.len())?;
        for comment in &post.comments {
            writeln!(out, "      {}: {}", comment.username, comment.content)?;
        }
    }
    Ok(())
}
