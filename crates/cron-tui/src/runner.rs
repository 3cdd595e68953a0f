//! Main TUI runner - terminal lifecycle and event loop

use cron_app::signals;
use cron_app::{AppState, Message};
use cron_core::prelude::*;
use tokio::sync::mpsc;

use super::{event, process, render};

/// Run the TUI until the user quits
pub async fn run(mut state: AppState) -> Result<()> {
    install_panic_hook();

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;

    // Unified channel for timers, the settings writer and the signal handler
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    signals::spawn_signal_handler(msg_tx.clone());

    info!("Starting on route {}", state.route.path());
    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx);

    ratatui::restore();
    info!("CRON exiting");
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
) -> Result<()> {
    while !state.should_quit() {
        // Results of background work
        while let Ok(msg) = msg_rx.try_recv() {
            process::process_message(state, msg, &msg_tx);
        }

        terminal
            .draw(|frame| render::view(frame, state))
            .map_err(|e| Error::terminal(format!("Failed to draw frame: {}", e)))?;

        match event::poll() {
            Ok(Some(message)) => process::process_message(state, message, &msg_tx),
            Ok(None) => {}
            Err(e) if e.is_recoverable() => warn!("Event poll failed: {}", e),
            Err(e) => return Err(e),
        }
    }

    Ok(())
}

/// Restore the terminal before the panic report prints
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        error!("Panic: {}", panic_info);
        original_hook(panic_info);
    }));
}
