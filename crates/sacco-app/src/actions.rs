//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every action runs on a spawned task and reports back with exactly one
//! message, so the update function never waits on a collaborator.

use std::path::Path;
use std::sync::Arc;

use tokio::sync::mpsc;

use sacco_core::prelude::*;
use sacco_store::{
    fetch_dashboard, upload_file_name, FixtureStore, ImageUploader, RecordStore,
    SimulatedUploader,
};

use crate::config::Settings;
use crate::handler::UpdateAction;
use crate::message::Message;

/// Collaborators the actions talk to
pub struct Services<S, U> {
    pub store: Arc<S>,
    pub uploader: Arc<U>,
}

impl<S, U> Services<S, U> {
    pub fn new(store: S, uploader: U) -> Self {
        Self {
            store: Arc::new(store),
            uploader: Arc::new(uploader),
        }
    }
}

// Derive would require `S: Clone, U: Clone`.
impl<S, U> Clone for Services<S, U> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            uploader: Arc::clone(&self.uploader),
        }
    }
}

/// The local backends used by the `sacco` binary
pub type LocalServices = Services<FixtureStore, SimulatedUploader>;

impl LocalServices {
    /// Build the fixture store and uploader described by `settings`.
    ///
    /// A relative fixture path is resolved against `base_dir`.
    pub fn from_settings(settings: &Settings, base_dir: &Path) -> Result<Self> {
        let store = match &settings.store.fixtures {
            Some(path) => FixtureStore::from_path(&base_dir.join(path))?,
            None => FixtureStore::builtin(),
        };
        Ok(Services::new(
            store.with_latency(settings.store.latency()),
            SimulatedUploader::new(),
        ))
    }
}

/// Execute an action by spawning a background task
///
/// The result message is tagged with `epoch`, the session it was started in.
pub fn handle_action<S, U>(
    action: UpdateAction,
    epoch: u64,
    msg_tx: mpsc::Sender<Message>,
    services: &Services<S, U>,
) where
    S: RecordStore + Sync + 'static,
    U: ImageUploader + Sync + 'static,
{
    match action {
        UpdateAction::LoadDashboard => {
            let store = Arc::clone(&services.store);
            tokio::spawn(async move {
                let msg = match fetch_dashboard(store.as_ref()).await {
                    Ok(snapshot) => Message::DashboardLoaded {
                        epoch,
                        snapshot: Box::new(snapshot),
                    },
                    Err(e) => Message::DashboardLoadFailed {
                        epoch,
                        error: e.to_string(),
                    },
                };
                send(&msg_tx, msg).await;
            });
        }

        UpdateAction::LoadLoanPortfolio => {
            let store = Arc::clone(&services.store);
            tokio::spawn(async move {
                let msg = match store.get_loan_portfolio().await {
                    Ok(loans) => Message::LoansLoaded { epoch, loans },
                    Err(e) => Message::LoansLoadFailed {
                        epoch,
                        error: e.to_string(),
                    },
                };
                send(&msg_tx, msg).await;
            });
        }

        UpdateAction::UploadProfileImage { path } => {
            let uploader = Arc::clone(&services.uploader);
            tokio::spawn(async move {
                let msg = match uploader.upload(&path).await {
                    Ok(receipt) => Message::ImageUploaded { epoch, receipt },
                    Err(Error::Upload { file, reason }) => Message::ImageUploadFailed {
                        epoch,
                        file,
                        reason,
                    },
                    Err(e) => Message::ImageUploadFailed {
                        epoch,
                        file: upload_file_name(&path),
                        reason: e.to_string(),
                    },
                };
                send(&msg_tx, msg).await;
            });
        }
    }
}

async fn send(msg_tx: &mpsc::Sender<Message>, msg: Message) {
    if let Err(e) = msg_tx.send(msg).await {
        warn!("Dropping action result, channel closed: {}", e);
    }
}
