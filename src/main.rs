use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use roster_tui::{load_users, run, sample_users, User};

/// Terminal viewer for a user roster with search filtering and role badges
#[derive(Parser, Debug)]
#[command(name = "roster-tui", version, about)]
struct Cli {
    /// JSON file holding an array of user records
    #[arg(long, value_name = "FILE")]
    users: Option<PathBuf>,

    /// Start in the loading state
    #[arg(long)]
    loading: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(cli.debug)
        .compact()
        .init();

    // The binary plays the caller: it supplies the list and the callback
    let users = match &cli.users {
        Some(path) => load_users(path)
            .with_context(|| format!("Failed to load roster from {}", path.display()))?,
        None => sample_users(),
    };

    info!(
        count = users.len(),
        loading = cli.loading,
        "starting roster viewer"
    );

    let mut last_selected: Option<User> = None;
    run(users, cli.loading, |user| {
        last_selected = Some(user.clone());
    })?;

    if let Some(user) = last_selected {
        println!("Selected: {} <{}> ({})", user.name, user.email, user.role);
    }

    Ok(())
}
