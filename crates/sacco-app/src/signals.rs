//! Quit cleanly on SIGINT, SIGTERM or SIGHUP
//!
//! Raw mode swallows Ctrl+C as a key press, so this mostly matters for
//! signals sent from outside the terminal.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use sacco_core::prelude::*;

use crate::message::Message;

/// Forward the first shutdown signal to the event loop as [`Message::Quit`]
pub fn spawn_shutdown_listener(msg_tx: mpsc::Sender<Message>) -> JoinHandle<()> {
    tokio::spawn(async move {
        match shutdown_signal().await {
            Ok(name) => {
                info!("{} received, quitting", name);
                if msg_tx.send(Message::Quit).await.is_err() {
                    debug!("Event loop already stopped");
                }
            }
            Err(e) => error!("Cannot listen for shutdown signals: {}", e),
        }
    })
}

#[cfg(unix)]
async fn shutdown_signal() -> Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let listen = |kind: SignalKind, name: &str| {
        signal(kind).map_err(|e| Error::terminal(format!("{} handler: {}", name, e)))
    };
    let mut interrupt = listen(SignalKind::interrupt(), "SIGINT")?;
    let mut terminate = listen(SignalKind::terminate(), "SIGTERM")?;
    let mut hangup = listen(SignalKind::hangup(), "SIGHUP")?;

    let name = tokio::select! {
        _ = interrupt.recv() => "SIGINT",
        _ = terminate.recv() => "SIGTERM",
        _ = hangup.recv() => "SIGHUP",
    };
    Ok(name)
}

#[cfg(not(unix))]
async fn shutdown_signal() -> Result<&'static str> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("Ctrl+C handler: {}", e)))?;
    Ok("Ctrl+C")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_listener_stays_idle_without_signal() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);
        let handle = spawn_shutdown_listener(tx);

        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        assert!(!handle.is_finished());
        assert!(rx.try_recv().is_err());

        handle.abort();
    }
}
