//! Session Middleware
//!
//! Runs session detection once at startup and performs the login hand-off.

use crate::actions::{Action, BootstrapAction, GlobalAction, SessionAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use crate::utils::browser::BrowserNavigator;
use onboard_client::{
    LaunchLocation, OnboardingBackend, PageLocation, RepoSubmission, Route, SessionDetector,
};
use onboard_config::ClientStorage;
use std::sync::Arc;

pub struct SessionMiddleware {
    detector: SessionDetector,
    location: LaunchLocation,
    storage: Box<dyn ClientStorage>,
    navigator: BrowserNavigator,
    submission: Arc<RepoSubmission<dyn OnboardingBackend>>,
}

impl SessionMiddleware {
    pub fn new(
        location: LaunchLocation,
        storage: Box<dyn ClientStorage>,
        submission: Arc<RepoSubmission<dyn OnboardingBackend>>,
    ) -> Self {
        Self {
            detector: SessionDetector::new(),
            location,
            storage,
            navigator: BrowserNavigator::new(),
            submission,
        }
    }

    /// The detector only runs on the home route; any other path keeps its
    /// address and shows the not-found view
    fn detect(&mut self, dispatcher: &Dispatcher) {
        let route = Route::from_path(&self.location.pathname());
        let state = match route {
            Route::Home => self.detector.detect(&mut self.location),
            Route::NotFound => self.detector.state(),
        };
        let location = self.location.href();
        log::info!("Session {:?} at {} ({:?})", state, location, route);

        dispatcher.dispatch(Action::Session(SessionAction::Detected {
            state,
            location,
            route,
        }));
    }

    fn login(&mut self, dispatcher: &Dispatcher) {
        self.submission
            .login(self.storage.as_mut(), &mut self.navigator);

        if let Some(url) = self.navigator.last_url() {
            dispatcher.dispatch(Action::Session(SessionAction::LoginRedirected(
                url.to_string(),
            )));
        }
        // The browser owns the flow from here; the redirect comes back as a new launch
        dispatcher.dispatch(Action::Global(GlobalAction::Quit));
    }
}

impl Middleware for SessionMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Bootstrap(BootstrapAction::Start) => {
                self.detect(dispatcher);
                true
            }
            Action::Session(SessionAction::LoginRequested) => {
                self.login(dispatcher);
                false
            }
            _ => true,
        }
    }
}
