//! Application State

use crate::theme::Theme;
use crate::views::{LoginView, View};
use onboard_client::{RepoFormState, Route, SessionState};

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    /// Stack of views - the last one is active and rendered on top
    pub view_stack: Vec<Box<dyn View>>,
    pub session: SessionState,
    /// Address shown in the header, after marker cleanup
    pub location: String,
    pub route: Route,
    /// Last snapshot published by the submission owner
    pub form: RepoFormState,
    /// Login URL handed to the browser, printed after the TUI exits
    pub login_redirect: Option<String>,
    /// Tick counter for the busy spinner
    pub tick: usize,
    pub theme: Theme,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            running: true,
            view_stack: vec![Box::new(LoginView::new())],
            session: SessionState::default(),
            location: String::new(),
            route: Route::Home,
            form: RepoFormState::default(),
            login_redirect: None,
            tick: 0,
            theme: Theme::default(),
        }
    }
}
