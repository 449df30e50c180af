use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod keyboard_middleware;
pub mod logging_middleware;
pub mod repo_form_middleware;
pub mod session_middleware;
pub mod translation_middleware;

pub use keyboard_middleware::KeyboardMiddleware;
pub use logging_middleware::LoggingMiddleware;
pub use repo_form_middleware::RepoFormMiddleware;
pub use session_middleware::SessionMiddleware;
pub use translation_middleware::TranslationMiddleware;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware runs on the background thread, so it can touch storage or spawn
/// network requests without affecting the UI render loop.
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (read-only snapshot)
    /// - `dispatcher`: Use to dispatch actions that should re-enter middleware chain
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
