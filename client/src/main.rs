//! List or create directory users, falling back to mock data when the remote service fails.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::io::{self, Write};

use clap::{Parser, Subcommand};
use client::config::ClientSettings;
use client::inbound::cli::{UserListView, load_users, submit_user};
use client::state_builders::build_user_directory;
use ortho_config::OrthoConfig;
use tokio::runtime::Builder;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

/// `user-directory` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "user-directory",
    about = "List or create users, falling back to mock data when the API is unavailable",
    version
)]
struct CliArgs {
    /// Emit logs as JSON lines.
    #[arg(long)]
    json: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Load and print the user list.
    List,
    /// Load the list, create a user, and print the updated list.
    Create {
        /// Name of the new user.
        #[arg(long)]
        name: String,
        /// Email of the new user.
        #[arg(long)]
        email: String,
    },
}

fn main() -> io::Result<()> {
    let args = CliArgs::try_parse().map_err(io::Error::other)?;
    init_tracing(args.json);

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    runtime.block_on(async_main(args))
}

fn init_tracing(json: bool) {
    let builder = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr);
    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}

async fn async_main(args: CliArgs) -> io::Result<()> {
    let settings = ClientSettings::load_from_iter([OsString::from("user-directory")])
        .map_err(|error| io::Error::other(format!("load configuration: {error}")))?;
    let directory = build_user_directory(&settings)
        .map_err(|error| io::Error::other(format!("build user directory: {error}")))?;

    let mut view = UserListView::default();
    load_users(&directory, &mut view).await;

    if let Some(Command::Create { name, email }) = args.command {
        submit_user(&directory, &mut view, &name, &email)
            .await
            .map_err(|error| io::Error::new(io::ErrorKind::InvalidInput, error))?;
    }

    let mut stdout = io::stdout().lock();
    view.render(&mut stdout)?;
    stdout.flush()
}
