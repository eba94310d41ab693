//! Terminal event loop
//!
//! Draws the view, drains results of background actions and polls the
//! terminal for the next key or tick.

use ratatui::DefaultTerminal;
use tokio::sync::mpsc;

use sacco_app::config::Settings;
use sacco_app::signals::spawn_shutdown_listener;
use sacco_app::{process_message, AppState, Message, Services};
use sacco_core::prelude::*;
use sacco_store::{ImageUploader, RecordStore};

use crate::{event, render, terminal};

/// Capacity of the message channel fed by background tasks
const CHANNEL_CAPACITY: usize = 64;

/// Run the portal until the user quits
pub async fn run<S, U>(settings: Settings, services: Services<S, U>) -> Result<()>
where
    S: RecordStore + Sync + 'static,
    U: ImageUploader + Sync + 'static,
{
    terminal::install_panic_hook();
    let mut term = terminal::init()?;
    info!("Terminal initialized");

    let state = AppState::with_settings(settings);
    let result = run_loop(&mut term, state, &services).await;

    terminal::restore();
    info!("Terminal restored");
    result
}

async fn run_loop<S, U>(
    term: &mut DefaultTerminal,
    mut state: AppState,
    services: &Services<S, U>,
) -> Result<()>
where
    S: RecordStore + Sync + 'static,
    U: ImageUploader + Sync + 'static,
{
    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(CHANNEL_CAPACITY);
    let shutdown = spawn_shutdown_listener(msg_tx.clone());

    while !state.should_quit() {
        term.draw(|frame| render::view(frame, &mut state))
            .map_err(|e| Error::terminal(e.to_string()))?;

        while let Ok(message) = msg_rx.try_recv() {
            process_message(&mut state, message, &msg_tx, services);
        }
        if state.should_quit() {
            break;
        }

        if let Some(message) = event::poll()? {
            process_message(&mut state, message, &msg_tx, services);
        }

        // Let spawned loads make progress on a current-thread runtime
        tokio::task::yield_now().await;
    }

    shutdown.abort();
    info!("Event loop finished");
    Ok(())
}
