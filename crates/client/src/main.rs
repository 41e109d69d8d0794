//! sconwar client binary.
//!
//! # Architecture
//!
//! This binary is the composition root. One-shot subcommands talk to the
//! server through [`runtime::GameApi`] and print their result; `interactive`
//! assembles:
//! 1. Runtime (refresh loops, command interpreter) via RuntimeBuilder
//! 2. Frontend (UI) - CLI
//!
//! and injects both into the [`sconwar_client::Client`] container.
//!
//! # Examples
//!
//! ```bash
//! sconwar games-get
//! sconwar --gameid <uuid> --playerid <uuid> interactive
//! sconwar --playerid <uuid> interactive --new
//! ```

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use runtime::{GameApi, HttpTransport, RuntimeConfig, Session};
use sconwar_client::commands;

#[derive(Debug, Parser)]
#[command(name = "sconwar", version, about = "Terminal client for sconwar")]
struct Cli {
    /// Game to act in.
    #[arg(long = "gameid", env = "SCONWAR_GAME_ID", default_value = "", global = true)]
    game_id: String,

    /// Player to act as.
    #[arg(
        long = "playerid",
        env = "SCONWAR_PLAYER_ID",
        default_value = "",
        global = true
    )]
    player_id: String,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// List the games on the server.
    GamesGet,
    /// Create a new game.
    GamesNew {
        /// Defaults to a random five-letter name.
        #[arg(long)]
        name: Option<String>,
    },
    /// Show the details of a game.
    GamesInfo,
    /// Join a game.
    GamesJoin,
    /// Register a new player.
    PlayerRegister {
        #[arg(long)]
        name: String,
    },
    /// Print the board once.
    PlayerView,
    /// Play in the terminal UI.
    Interactive {
        /// Create, join and start a new game first.
        #[arg(long)]
        new: bool,
    },
}

impl Cli {
    fn session(&self) -> Result<Session> {
        Ok(Session::new(&self.game_id, &self.player_id)?)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = RuntimeConfig::from_env();

    let transport = HttpTransport::new(&config.api_host, config.request_timeout)
        .context("failed to build HTTP client")?;
    let api = GameApi::new(Arc::new(transport));

    if !matches!(cli.command, CliCommand::Interactive { .. }) {
        init_stderr_logging();
    }

    let output = match &cli.command {
        CliCommand::GamesGet => commands::games_get(&api).await?,
        CliCommand::GamesNew { name } => {
            let name = name.clone().unwrap_or_else(commands::random_game_name);
            commands::games_new(&api, &name).await?
        }
        CliCommand::GamesInfo => commands::games_info(&api, &cli.session()?).await?,
        CliCommand::GamesJoin => commands::games_join(&api, &cli.session()?).await?,
        CliCommand::PlayerRegister { name } => commands::player_register(&api, name).await?,
        CliCommand::PlayerView => commands::player_view(&api, &cli.session()?).await?,
        CliCommand::Interactive { new } => {
            run_interactive(&cli, *new, config, &api).await?;
            return Ok(());
        }
    };

    println!("{output}");
    Ok(())
}

/// Warnings and errors to stderr for the one-shot commands; stdout carries
/// their output.
fn init_stderr_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_interactive(cli: &Cli, new: bool, config: RuntimeConfig, api: &GameApi) -> Result<()> {
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use runtime::Runtime;
    use sconwar_client::Client;

    // 1. Load frontend configuration from environment
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging; the guard flushes the file writer on exit
    let _log_guard = logging::setup_logging(config.session_label.as_deref())?;

    tracing::info!("Starting sconwar client");
    tracing::info!(api_host = %config.api_host, "Using game server");

    // 3. Resolve the session, creating a fresh game when asked
    let session = if new {
        commands::new_interactive_game(api, &cli.player_id)
            .await
            .context("failed to set up a new game")?
    } else {
        cli.session()?
    };

    // 4. Build Runtime (independent layer)
    let runtime = Runtime::builder().config(config).session(session).build()?;

    // 5. Build Frontend (independent layer)
    let frontend = CliFrontend::new(frontend_config, cli_config);

    // 6. Build and run
    let client = Client::builder().runtime(runtime).frontend(frontend).build()?;

    tracing::info!("Client assembled, starting...");
    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}

#[cfg(not(feature = "frontend-cli"))]
async fn run_interactive(
    _cli: &Cli,
    _new: bool,
    _config: RuntimeConfig,
    _api: &GameApi,
) -> Result<()> {
    anyhow::bail!("interactive mode requires the `frontend-cli` feature")
}
