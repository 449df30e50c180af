//! KeyboardMiddleware - translates keyboard events into generic actions
//!
//! ## Layer 1: Priority keys
//! Ctrl+C always quits. Esc quits unless the active view takes text input.
//!
//! ## Layer 2: Capabilities
//! Views with TEXT_INPUT receive character keys, Backspace and Ctrl+U as
//! `TextInput` actions.
//!
//! ## Layer 3: Context keys
//! Enter becomes `ViewContext(Confirm)`, interpreted by the active view.

use crate::actions::{Action, ContextAction, GlobalAction, TextInputAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Default)]
pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    fn handle_key(&self, key: KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
        if let Some(action) = translate_key(key, state) {
            log::debug!("Key {:?} -> {:?}", key.code, action);
            dispatcher.dispatch(action);
        } else {
            log::trace!("Key {:?} ignored", key.code);
        }
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Global(GlobalAction::KeyPressed(key)) = action {
            self.handle_key(*key, state, dispatcher);
            return false;
        }
        true
    }
}

fn translate_key(key: KeyEvent, state: &AppState) -> Option<Action> {
    let capabilities = state
        .view_stack
        .last()
        .map(|view| view.capabilities(state))
        .unwrap_or_default();
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Layer 1
    if ctrl && key.code == KeyCode::Char('c') {
        return Some(Action::Global(GlobalAction::Quit));
    }
    if key.code == KeyCode::Esc {
        return (!capabilities.accepts_text_input()).then_some(Action::Global(GlobalAction::Quit));
    }

    // Layer 2
    if capabilities.accepts_text_input() {
        match key.code {
            KeyCode::Char('u') if ctrl => {
                return Some(Action::TextInput(TextInputAction::ClearLine));
            }
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                return Some(Action::TextInput(TextInputAction::Char(c)));
            }
            KeyCode::Backspace if key.modifiers.contains(KeyModifiers::SUPER) => {
                return Some(Action::TextInput(TextInputAction::ClearLine));
            }
            KeyCode::Backspace => return Some(Action::TextInput(TextInputAction::Backspace)),
            _ => {}
        }
    }

    // Layer 3
    match key.code {
        KeyCode::Enter => Some(Action::ViewContext(ContextAction::Confirm)),
        _ => None,
    }
}
