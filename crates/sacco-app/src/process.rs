//! Message processing
//!
//! Runs a message through the TEA update function, follows up on chained
//! messages and dispatches every resulting action.

use tokio::sync::mpsc;

use sacco_store::{ImageUploader, RecordStore};

use crate::actions::{handle_action, Services};
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<S, U>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    services: &Services<S, U>,
) where
    S: RecordStore + Sync + 'static,
    U: ImageUploader + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, state.session_epoch, msg_tx.clone(), services);
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
