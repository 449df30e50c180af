//! Translation Middleware
//!
//! Translates generic `TextInput` and `ViewContext` actions into
//! view-specific actions using the active view, then re-dispatches them so
//! they go through the full middleware chain.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

#[derive(Debug, Default)]
pub struct TranslationMiddleware;

impl TranslationMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for TranslationMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let translated = match action {
            Action::TextInput(input) => state
                .view_stack
                .last()
                .and_then(|view| view.translate_text_input(input.clone())),
            Action::ViewContext(context) => state
                .view_stack
                .last()
                .and_then(|view| view.translate_context_action(*context)),
            _ => return true,
        };

        match translated {
            Some(translated) => {
                log::debug!("Translating {:?} to {:?}", action, translated);
                dispatcher.dispatch(translated);
            }
            None => log::debug!("Action not handled by active view: {:?}", action),
        }
        false
    }
}
