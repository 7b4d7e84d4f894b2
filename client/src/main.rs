//! `blog` - command-line front end for the blog backend.
//!
//! Thin consumer of [`BlogApi`]: every subcommand maps to one client operation, prints
//! the result on stdout and reports failures on stderr with a non-zero exit code.
//! Ctrl-C cancels the in-flight request.

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use blog_client::config::ClientConfig;
use blog_client::debug::{logger, LogConfig};
use blog_client::{ApiClient, ApiError, BlogApi, CancelToken, FileSessionStore};
use clap::{Parser, Subcommand};
use shared::utils::preview;
use shared::{CommentId, PostId, UserId};

const PREVIEW_CHARS: usize = 72;

#[derive(Debug, Parser)]
#[command(name = "blog", version, about = "Blog API client")]
struct Cli {
    /// API base URL including the version prefix (overrides BLOG_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Session file (overrides BLOG_SESSION_FILE)
    #[arg(long, global = true)]
    session_file: Option<std::path::PathBuf>,

    /// Debug logging for the client
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Log in and store the session
    Login {
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account
    Register {
        name: String,
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the logged-in user
    Whoami,
    /// List posts
    Posts,
    /// Publish a post
    Post {
        content: String,
        #[arg(long)]
        image: Option<String>,
    },
    DeletePost {
        post_id: PostId,
    },
    Like {
        post_id: PostId,
    },
    Unlike {
        post_id: PostId,
    },
    ToggleLike {
        post_id: PostId,
    },
    /// List who liked a post
    Likes {
        post_id: PostId,
    },
    Comments {
        post_id: PostId,
    },
    Comment {
        post_id: PostId,
        content: String,
    },
    EditComment {
        post_id: PostId,
        comment_id: CommentId,
        content: String,
    },
    DeleteComment {
        post_id: PostId,
        comment_id: CommentId,
    },
    /// Show a profile (defaults to the logged-in user)
    Profile {
        user_id: Option<UserId>,
    },
    SetUsername {
        username: String,
    },
    SetBio {
        bio: String,
    },
    SetPfp {
        image_url: String,
    },
    DeletePfp,
    /// Search posts
    Search {
        query: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let log_config = if cli.verbose {
        LogConfig::from_env().verbose()
    } else {
        LogConfig::from_env()
    };
    let _log_guard = logger::init(&log_config);

    let api = match build_client(&cli) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let cancel = CancelToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });
    let api = api.with_cancel(cancel);

    let mut stdout = io::stdout().lock();
    match run(cli.command, &api, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            if e.downcast_ref::<ApiError>().is_some_and(ApiError::requires_login) {
                eprintln!("Run `blog login <email> --password <password>` first.");
            }
            ExitCode::FAILURE
        }
    }
}

fn build_client(cli: &Cli) -> anyhow::Result<ApiClient> {
    let mut config = ClientConfig::from_env().context("Invalid client configuration")?;
    if let Some(url) = &cli.api_url {
        config.base_url = url.clone();
    }
    if let Some(path) = &cli.session_file {
        config.session_file = path.clone();
    }
    config.validate().context("Invalid client configuration")?;

    let store = Arc::new(FileSessionStore::new(&config.session_file));
    tracing::debug!(base_url = %config.base_url, session_file = %store.path().display(), "Client configured");
    Ok(ApiClient::new(&config, store))
}

async fn run(command: Command, api: &dyn BlogApi, out: &mut impl Write) -> anyhow::Result<()> {
    match command {
        Command::Login { email, password } => {
            let session = api.login(&email, &password).await?;
            writeln!(out, "Logged in as {} <{}>", session.user.name, session.user.email)?;
        }
        Command::Register {
            name,
            email,
            password,
            confirm_password,
        } => {
            let user = api.register(&name, &email, &password, &confirm_password).await?;
            writeln!(out, "Account created for {} (id {}). Please log in.", user.email, user.id)?;
        }
        Command::Logout => {
            api.logout()?;
            writeln!(out, "Logged out")?;
        }
        Command::Whoami => match api.current_user() {
            Some(user) => writeln!(out, "{} <{}> (id {})", user.name, user.email, user.id)?,
            None => writeln!(out, "Not logged in")?,
        },
        Command::Posts => {
            let posts = api.list_posts().await?;
            write_posts(out, &posts)?;
        }
        Command::Post { content, image } => {
            let post = api.create_post(&content, image.as_deref()).await?;
            writeln!(out, "Created post {}", post.id)?;
        }
        Command::DeletePost { post_id } => {
            api.delete_post(post_id).await?;
            writeln!(out, "Deleted post {post_id}")?;
        }
        Command::Like { post_id } => {
            api.like(post_id).await?;
            writeln!(out, "Liked post {post_id}")?;
        }
        Command::Unlike { post_id } => {
            api.unlike(post_id).await?;
            writeln!(out, "Unliked post {post_id}")?;
        }
        Command::ToggleLike { post_id } => {
            let liked = api.toggle_like(post_id).await?;
            let state = if liked { "Liked" } else { "Unliked" };
            writeln!(out, "{state} post {post_id}")?;
        }
        Command::Likes { post_id } => {
            let likes = api.get_likes(post_id).await?;
            writeln!(out, "{} like(s)", likes.len())?;
            for like in likes {
                writeln!(out, "  user {}", like.user_id)?;
            }
        }
        Command::Comments { post_id } => {
            let comments = api.list_comments(post_id).await?;
            if comments.is_empty() {
                writeln!(out, "No comments yet")?;
            }
            for comment in comments {
                writeln!(
                    out,
                    "[{}] user {} at {}: {}",
                    comment.id,
                    comment.author_id,
                    comment.created_at.format("%Y-%m-%d %H:%M"),
                    preview(&comment.content, PREVIEW_CHARS)
                )?;
            }
        }
        Command::Comment { post_id, content } => {
            let comment = api.add_comment(post_id, &content).await?;
            writeln!(out, "Added comment {}", comment.id)?;
        }
        Command::EditComment {
            post_id,
            comment_id,
            content,
        } => {
            api.update_comment(post_id, comment_id, &content).await?;
            writeln!(out, "Updated comment {comment_id}")?;
        }
        Command::DeleteComment { post_id, comment_id } => {
            api.delete_comment(post_id, comment_id).await?;
            writeln!(out, "Deleted comment {comment_id}")?;
        }
        Command::Profile { user_id } => {
            let user_id = match user_id {
                Some(id) => id,
                None => api.current_user().ok_or(ApiError::AuthRequired)?.id,
            };
            let profile = api.get_user_profile(user_id).await?;
            writeln!(out, "Username: {}", profile.username)?;
            writeln!(out, "Bio:      {}", profile.bio.as_deref().unwrap_or("-"))?;
            writeln!(out, "Picture:  {}", profile.profile_picture.as_deref().unwrap_or("-"))?;
        }
        Command::SetUsername { username } => {
            api.update_username(&username).await?;
            writeln!(out, "Username updated")?;
        }
        Command::SetBio { bio } => {
            api.update_bio(&bio).await?;
            writeln!(out, "Bio updated")?;
        }
        Command::SetPfp { image_url } => {
            api.update_profile_picture(&image_url).await?;
            writeln!(out, "Profile picture updated")?;
        }
        Command::DeletePfp => {
            api.delete_profile_picture().await?;
            writeln!(out, "Profile picture removed")?;
        }
        Command::Search { query } => {
            let posts = api.search_posts(&query).await?;
            if posts.is_empty() {
                writeln!(out, "No posts match \"{}\"", query.trim())?;
            } else {
                write_posts(out, &posts)?;
            }
        }
    }

    Ok(())
}

fn write_posts(out: &mut impl Write, posts: &[shared::Post]) -> io::Result<()> {
    for post in posts {
        let image = if post.image_url.is_some() { " [image]" } else { "" };
        writeln!(
            out,
            "#{} by user {}{}: {}",
            post.id,
            post.author_id,
            image,
            preview(&post.content, PREVIEW_CHARS)
        )?;
    }
    Ok(())
}
