//! sacco-app - Application state and orchestration for the SACCO portal
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the session and navigation shell, the record table with its
//! detail selector, the form capture engine, notifications, configuration
//! loading and the background actions that talk to the record store.

pub mod actions;
pub mod config;
pub mod form;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod notifications;
pub mod process;
pub mod router;
pub mod selection;
pub mod session;
pub mod signals;
pub mod state;
pub mod table;

// Re-export primary types
pub use actions::{handle_action, LocalServices, Services};
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::{FormEdit, FormId, Message};
pub use process::process_message;
pub use router::{Router, Screen};
pub use session::SessionState;
pub use state::{AppState, Focus, UiMode};
