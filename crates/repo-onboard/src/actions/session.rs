//! Session actions

use onboard_client::{Route, SessionState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    /// Detection settled the session for this run
    Detected {
        state: SessionState,
        /// Address after marker cleanup
        location: String,
        route: Route,
    },
    /// User asked to log in with GitHub
    LoginRequested,
    /// Login URL was handed to the system browser
    LoginRedirected(String),
}
