//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `navigation`: Login, logout and destination changes
//! - `forms`: Form edits and per-form submit handling
//! - `dashboard`: Dashboard load results
//! - `loans`: Loan table, detail modal and application form
//! - `profile`: Profile form and image upload

pub(crate) mod dashboard;
pub(crate) mod forms;
pub(crate) mod keys;
pub(crate) mod loans;
pub(crate) mod navigation;
pub(crate) mod profile;
pub(crate) mod update;


use std::path::PathBuf;

use crate::message::Message;

// Re-export main entry point
pub use keys::handle_key;
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Query every dashboard collection and report one complete snapshot
    LoadDashboard,

    /// Query the loan portfolio for the management table
    LoadLoanPortfolio,

    /// Hand a profile image to the upload collaborator
    UploadProfileImage { path: PathBuf },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
