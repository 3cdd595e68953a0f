//! CRON - AI code analysis assistant in the terminal
//!
//! Binary entry point: argument parsing, logging and settings, then either
//! the TUI or a one-shot JSON dump of the initial state.

use std::path::PathBuf;

use clap::Parser;
use cron_app::config::{default_config_dir, load_settings};
use cron_app::{AppState, Route};
use cron_core::prelude::*;

/// CRON - AI code analysis assistant in the terminal
#[derive(Parser, Debug)]
#[command(name = "cron")]
#[command(about = "A terminal mockup of the CRON AI code assistant", long_about = None)]
struct Args {
    /// Route to open on start, e.g. "/analysis/1" or "/settings"
    #[arg(long, value_name = "PATH", default_value = "/")]
    route: String,

    /// Directory holding config.toml (defaults to the user config dir)
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Print the initial state for the route as JSON and exit (no TUI)
    #[arg(long)]
    dump_state: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Logs go to a file; the terminal belongs to the TUI
    cron_core::logging::init()?;

    let config_dir = args.config_dir.unwrap_or_else(default_config_dir);
    info!("Config directory: {}", config_dir.display());
    let settings = load_settings(&config_dir);

    let mut state = AppState::new(settings, config_dir);
    state.navigate(Route::parse(&args.route));

    if args.dump_state {
        println!("{}", serde_json::to_string_pretty(&state)?);
        return Ok(());
    }

    let result = cron_tui::run(state).await;
    if let Err(ref e) = result {
        if e.is_fatal() {
            error!("Fatal error: {:?}", e);
        } else {
            error!("Application error: {:?}", e);
        }
    }
    result
}
