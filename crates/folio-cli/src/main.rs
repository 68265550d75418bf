//! folio: a personal portfolio with a credential-gated editing dashboard.

mod commands;
mod context;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::dashboard::DashboardCommand;
use crate::context::AppContext;

#[derive(Parser)]
#[command(
    name = "folio",
    version,
    about = "Personal portfolio with a credential-gated editing dashboard"
)]
struct Cli {
    /// Override the data directory (defaults to the per-user location).
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the public welcome page.
    Show,
    /// Authenticate as the site owner.
    Login {
        /// Page to open after a successful login.
        #[arg(long, value_name = "PAGE", default_value = "dashboard")]
        return_to: String,
    },
    /// Report whether a session is active.
    Status,
    /// End the current session.
    Logout,
    /// Edit the published content (requires an active session).
    #[command(subcommand)]
    Dashboard(DashboardCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let mut ctx = AppContext::bootstrap(cli.data_dir)?;

    match cli.command {
        Command::Show => commands::show::run(&ctx),
        Command::Login { return_to } => commands::login::run(&mut ctx, &return_to).await?,
        Command::Status => commands::session::status(&ctx),
        Command::Logout => commands::session::logout(&mut ctx),
        Command::Dashboard(op) => commands::dashboard::run(&mut ctx, op)?,
    }

    Ok(())
}
