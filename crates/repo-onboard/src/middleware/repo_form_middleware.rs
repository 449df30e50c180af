//! Repository Form Middleware
//!
//! Bridges the repository form to `RepoSubmission`:
//! - edits become `set_repo_path` calls
//! - `Submit` spawns `submit_repository` on the middleware's runtime
//! - every published form snapshot is dispatched as `RepoForm(Updated)`
//!
//! Edits and submits are ignored while a submission is in flight.

use crate::actions::{Action, BootstrapAction, RepoFormAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use onboard_client::{OnboardingBackend, RepoSubmission};
use std::sync::Arc;
use tokio::runtime::Runtime;
use tokio::task::JoinHandle;

pub struct RepoFormMiddleware {
    runtime: Runtime,
    submission: Arc<RepoSubmission<dyn OnboardingBackend>>,
    in_flight: Option<JoinHandle<()>>,
}

impl RepoFormMiddleware {
    pub fn new(submission: Arc<RepoSubmission<dyn OnboardingBackend>>) -> anyhow::Result<Self> {
        let runtime = Runtime::new()?;
        Ok(Self {
            runtime,
            submission,
            in_flight: None,
        })
    }

    fn is_busy(&self) -> bool {
        self.submission.state().is_submitting()
            || self
                .in_flight
                .as_ref()
                .is_some_and(|handle| !handle.is_finished())
    }

    fn forward_snapshots(&self, dispatcher: &Dispatcher) {
        let mut updates = self.submission.subscribe();
        let dispatcher = dispatcher.clone();
        self.runtime.spawn(async move {
            while updates.changed().await.is_ok() {
                let snapshot = updates.borrow_and_update().clone();
                dispatcher.dispatch(Action::RepoForm(RepoFormAction::Updated(snapshot)));
            }
            log::debug!("Form snapshot forwarding stopped");
        });
    }

    fn edit(&self, edit: impl FnOnce(&mut String)) {
        let mut path = self.submission.state().repo_path().to_string();
        edit(&mut path);
        self.submission.set_repo_path(path);
    }

    fn submit(&mut self) {
        let submission = Arc::clone(&self.submission);
        self.in_flight = Some(self.runtime.spawn(async move {
            let outcome = submission.submit_repository().await;
            log::info!("Repository submission finished: {:?}", outcome);
        }));
    }
}

impl Middleware for RepoFormMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        let form_action = match action {
            Action::Bootstrap(BootstrapAction::Start) => {
                self.forward_snapshots(dispatcher);
                return true;
            }
            Action::RepoForm(RepoFormAction::Updated(_)) => return true,
            Action::RepoForm(form_action) => form_action,
            _ => return true,
        };

        if self.is_busy() {
            log::debug!("Submission in flight, ignoring {:?}", form_action);
            return false;
        }

        match form_action {
            RepoFormAction::Char(c) => self.edit(|path| path.push(*c)),
            RepoFormAction::Backspace => self.edit(|path| {
                path.pop();
            }),
            RepoFormAction::ClearField => self.edit(String::clear),
            RepoFormAction::Submit => self.submit(),
            RepoFormAction::Updated(_) => {}
        }
        false
    }
}
