//! Actions module
//!
//! Actions are tagged by domain:
//! - Generic actions (TextInput, ViewContext) that the active view translates
//! - Global actions that affect the entire application
//! - Domain actions already targeted at a reducer or middleware

pub mod bootstrap;
pub mod context_action;
pub mod global;
pub mod repo_form;
pub mod session;
pub mod text_input;

pub use bootstrap::BootstrapAction;
pub use context_action::ContextAction;
pub use global::GlobalAction;
pub use repo_form::RepoFormAction;
pub use session::SessionAction;
pub use text_input::TextInputAction;

/// Root action enum - tagged by domain
#[derive(Debug, Clone)]
pub enum Action {
    /// Generic text input action - will be translated by active view
    TextInput(TextInputAction),
    /// Context-sensitive action - will be translated by active view
    ViewContext(ContextAction),

    /// Global application actions
    Global(GlobalAction),
    /// Startup sequence
    Bootstrap(BootstrapAction),
    /// Session detection and login
    Session(SessionAction),
    /// Repository form actions
    RepoForm(RepoFormAction),
}
