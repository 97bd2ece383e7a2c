use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

mod commands;
mod console;
mod logging;
mod runner;
mod transport;

use afk_core::{AfkConfig, SystemClock};
use afk_state::PresenceController;
use presence_store::FileStateStore;

use console::ConsoleTransport;
use logging::init_logging;
use runner::Runner;
use transport::ChatTransport;

#[derive(Parser, Debug, Clone)]
#[command(name = "afk-bot")]
#[command(about = "AFK presence bot")]
#[command(version)]
struct Cli {
    /// Enable debug mode
    #[arg(long, short, default_value = "false")]
    debug: bool,

    /// Authorize the transport session and exit without running the bot
    #[arg(long, default_value = "false")]
    login: bool,

    /// Path to the persisted presence state (overrides AFK_STATE_PATH)
    #[arg(long)]
    state_path: Option<PathBuf>,

    /// Log level (overrides debug flag)
    #[arg(long, env = "RUST_LOG")]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AfkConfig::from_env()?;
    if let Some(path) = cli.state_path {
        config.state_path = path;
    }

    // Initialize logging
    if cli.log_level.is_some() {
        // If RUST_LOG is set, use it
        env_logger::init();
    } else {
        init_logging(&config.log_level, cli.debug);
    }

    log::info!("Starting AFK bot");
    log::info!("  Session: {}", config.session_name);
    log::info!("  State path: {}", config.state_path.display());
    log::info!("  UTC offset: {}", config.utc_offset);

    let mut transport = ConsoleTransport::new();
    transport.connect().await?;

    if cli.login {
        log::info!("Session authorized, exiting (--login).");
        return Ok(());
    }

    let clock = Arc::new(SystemClock::new(config.utc_offset));
    let store = Arc::new(FileStateStore::new(&config.state_path, clock.clone()));
    let controller = PresenceController::new(store, clock);

    Runner::new(transport, controller).run().await
}
