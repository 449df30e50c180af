//! Dispatcher for middleware action dispatch
//!
//! Actions dispatched through the Dispatcher go back through the full
//! middleware chain (via the action channel to the background worker). This
//! is how a key press becomes `TextInput`, then `RepoForm(Char)`, or how an
//! async submission reports form snapshots back to the reducer.

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Dispatcher for sending actions through the middleware chain
#[derive(Debug, Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    /// The action_tx should feed the background worker so dispatched actions
    /// re-enter the middleware chain.
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Dispatch an action to be processed through the middleware chain
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
