//! Repository submission
//!
//! `RepoSubmission` owns the repository form (path, busy flag, status
//! message) and drives the two dependent backend calls:
//!
//! ```text
//! Idle ─► validate ─┬─► Rejected (blank path) ─► Idle
//!                   └─► set_repo ─┬─► failed ─────────────────► Idle
//!                                 └─► saved ─┬─► (no token/id) ► Idle
//!                                            └─► configure_repo ─► Idle
//! ```
//!
//! Every state change is published on a `watch` channel so a renderer can
//! show the busy indicator while a request is in flight. The busy flag has no
//! setter; it is raised and cleared only by `submit_repository`.

use crate::backend::OnboardingBackend;
use crate::location::Navigator;
use crate::types::{RepoPath, SetRepoRequest};
use onboard_config::{ClientStorage, StorageScope};
use std::sync::Arc;
use tokio::sync::watch;

pub const EMPTY_PATH_MESSAGE: &str = "Please enter a repository path.";
pub const SUBMITTED_MESSAGE: &str = "Repository path submitted successfully.";
pub const SUBMIT_FAILED_MESSAGE: &str = "Error submitting repository path.";

/// Snapshot of the repository form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoFormState {
    repo_path: String,
    is_submitting: bool,
    status_message: String,
}

impl RepoFormState {
    pub fn repo_path(&self) -> &str {
        &self.repo_path
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }
}

/// Which backend call a failed submission stopped at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStage {
    SetRepository,
    Configuration,
}

/// Terminal state reached by one `submit_repository` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Blank path, nothing was sent
    Rejected,
    /// Repository path saved, no configuration call was due
    Saved,
    /// Repository path saved and configured
    Configured,
    Failed { stage: SubmissionStage },
}

/// Owner of the repository form and its submission sequence
pub struct RepoSubmission<B: ?Sized> {
    backend: Arc<B>,
    state: watch::Sender<RepoFormState>,
}

impl<B> RepoSubmission<B>
where
    B: OnboardingBackend + ?Sized,
{
    pub fn new(backend: Arc<B>) -> Self {
        let (state, _) = watch::channel(RepoFormState::default());
        Self { backend, state }
    }

    /// Receive every published form state
    pub fn subscribe(&self) -> watch::Receiver<RepoFormState> {
        self.state.subscribe()
    }

    /// Current form state
    pub fn state(&self) -> RepoFormState {
        self.state.borrow().clone()
    }

    /// Replace the entered path (one call per keystroke)
    pub fn set_repo_path(&self, path: impl Into<String>) {
        let path = path.into();
        self.state.send_modify(|form| form.repo_path = path);
    }

    /// Hand off to the backend's login endpoint
    ///
    /// Clears all client storage first. Nothing is returned; a failed login
    /// shows up as a missing marker when the user comes back.
    pub fn login(&self, storage: &mut dyn ClientStorage, navigator: &mut dyn Navigator) {
        for scope in [StorageScope::Local, StorageScope::Session] {
            if let Err(e) = storage.clear(scope) {
                log::error!("Failed to clear {:?} storage: {:#}", scope, e);
            }
        }

        let login_url = self.backend.login_url();
        log::info!("Redirecting to login: {}", login_url);
        navigator.assign(&login_url);
    }

    /// Submit the entered path
    ///
    /// Concurrent calls are not deduplicated; callers keep the trigger
    /// disabled while `is_submitting` is set.
    pub async fn submit_repository(&self) -> SubmissionOutcome {
        let input = self.state.borrow().repo_path.clone();

        let Some(repo_path) = RepoPath::parse(&input) else {
            log::warn!("Empty repository path submitted");
            self.state.send_modify(|form| {
                form.status_message = EMPTY_PATH_MESSAGE.to_string();
            });
            return SubmissionOutcome::Rejected;
        };

        self.state.send_modify(|form| {
            form.is_submitting = true;
            form.status_message.clear();
        });

        let outcome = self.run_requests(&repo_path).await;

        self.state.send_modify(|form| form.is_submitting = false);
        log::debug!("Submission of {} finished: {:?}", repo_path, outcome);
        outcome
    }

    async fn run_requests(&self, repo_path: &RepoPath) -> SubmissionOutcome {
        log::info!("Submitting repository path: {}", repo_path);

        let saved = match self.backend.set_repo(&SetRepoRequest::new(repo_path)).await {
            Ok(saved) => saved,
            Err(e) => {
                log::error!("set_repo failed: {}", e);
                self.publish_message(e.user_message(SUBMIT_FAILED_MESSAGE));
                return SubmissionOutcome::Failed {
                    stage: SubmissionStage::SetRepository,
                };
            }
        };

        log::debug!("set_repo succeeded: {:?}", saved.message());
        self.publish_message(saved.message().unwrap_or(SUBMITTED_MESSAGE).to_string());

        let Some(configuration) = saved.configuration_request() else {
            return SubmissionOutcome::Saved;
        };

        log::info!("Sending configuration for {}", configuration.repo_id.as_str());
        match self.backend.configure_repo(&configuration).await {
            Ok(configured) => {
                log::debug!("configure_repo succeeded: {:?}", configured.message());
                if let Some(message) = configured.message() {
                    self.publish_message(message.to_string());
                }
                SubmissionOutcome::Configured
            }
            Err(e) => {
                log::error!("configure_repo failed: {}", e);
                self.publish_message(e.user_message(SUBMIT_FAILED_MESSAGE));
                SubmissionOutcome::Failed {
                    stage: SubmissionStage::Configuration,
                }
            }
        }
    }

    fn publish_message(&self, message: String) {
        self.state.send_modify(|form| form.status_message = message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorBody, TransportError};
    use crate::types::{
        ConfigurationRequest, ConfigurationResponse, QueryRequest, QueryResponse, RepoId,
        SetRepoResponse,
    };
    use async_trait::async_trait;
    use onboard_config::MemoryStorage;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        SetRepo(String),
        Configure { id: String, repo_id: String },
    }

    /// Scripted backend that records calls and the busy flag seen by each
    #[derive(Default)]
    struct FakeBackend {
        set_repo: Mutex<Option<Result<SetRepoResponse, TransportError>>>,
        configure: Mutex<Option<Result<ConfigurationResponse, TransportError>>>,
        calls: Mutex<Vec<Call>>,
        busy_during_calls: Mutex<Vec<bool>>,
        observer: Mutex<Option<watch::Receiver<RepoFormState>>>,
    }

    impl FakeBackend {
        fn with_set_repo(self, response: Result<SetRepoResponse, TransportError>) -> Self {
            *self.set_repo.lock().unwrap() = Some(response);
            self
        }

        fn with_configure(self, response: Result<ConfigurationResponse, TransportError>) -> Self {
            *self.configure.lock().unwrap() = Some(response);
            self
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        fn record_busy(&self) {
            if let Some(observer) = self.observer.lock().unwrap().as_ref() {
                let busy = observer.borrow().is_submitting();
                self.busy_during_calls.lock().unwrap().push(busy);
            }
        }
    }

    #[async_trait]
    impl OnboardingBackend for FakeBackend {
        fn login_url(&self) -> String {
            "https://api.example.com/dissertation/login".to_string()
        }

        async fn set_repo(
            &self,
            request: &SetRepoRequest,
        ) -> Result<SetRepoResponse, TransportError> {
            self.record_busy();
            self.calls
                .lock()
                .unwrap()
                .push(Call::SetRepo(request.repo_path.clone()));
            self.set_repo
                .lock()
                .unwrap()
                .take()
                .expect("unexpected set_repo call")
        }

        async fn configure_repo(
            &self,
            request: &ConfigurationRequest,
        ) -> Result<ConfigurationResponse, TransportError> {
            self.record_busy();
            self.calls.lock().unwrap().push(Call::Configure {
                id: request.id.clone(),
                repo_id: request.repo_id.as_str().to_string(),
            });
            self.configure
                .lock()
                .unwrap()
                .take()
                .expect("unexpected configure_repo call")
        }

        async fn query(&self, _request: &QueryRequest) -> Result<QueryResponse, TransportError> {
            unreachable!("query is not part of submission")
        }
    }

    fn saved(message: Option<&str>, token: Option<&str>, repo_id: Option<&str>) -> SetRepoResponse {
        SetRepoResponse {
            message: message.map(str::to_string),
            github_token: token.map(str::to_string),
            repo_id: repo_id.map(RepoId::new),
        }
    }

    fn configured(message: Option<&str>) -> ConfigurationResponse {
        ConfigurationResponse {
            message: message.map(str::to_string),
        }
    }

    fn rejected(status: u16, body: serde_json::Value) -> TransportError {
        TransportError::Status {
            status,
            body: ErrorBody::parse(&body.to_string()),
        }
    }

    fn submission(backend: FakeBackend) -> (Arc<FakeBackend>, RepoSubmission<FakeBackend>) {
        let backend = Arc::new(backend);
        let submission = RepoSubmission::new(Arc::clone(&backend));
        *backend.observer.lock().unwrap() = Some(submission.subscribe());
        (backend, submission)
    }

    #[tokio::test]
    async fn test_empty_path_is_rejected_without_network() {
        let (backend, submission) = submission(FakeBackend::default());

        for input in ["", "   ", "\t\n"] {
            submission.set_repo_path(input);
            let outcome = submission.submit_repository().await;

            assert_eq!(outcome, SubmissionOutcome::Rejected);
            assert_eq!(submission.state().status_message(), EMPTY_PATH_MESSAGE);
            assert!(!submission.state().is_submitting());
        }
        assert_eq!(backend.calls(), vec![]);
    }

    #[tokio::test]
    async fn test_token_and_identifier_trigger_configuration() {
        let (backend, submission) = submission(
            FakeBackend::default()
                .with_set_repo(Ok(saved(Some("ok"), Some("tok1"), Some("id1"))))
                .with_configure(Ok(configured(Some("configured")))),
        );

        submission.set_repo_path("octocat/hello-world");
        let outcome = submission.submit_repository().await;

        assert_eq!(outcome, SubmissionOutcome::Configured);
        assert_eq!(submission.state().status_message(), "configured");
        assert_eq!(
            backend.calls(),
            vec![
                Call::SetRepo("octocat/hello-world".to_string()),
                Call::Configure {
                    id: "tok1".to_string(),
                    repo_id: "id1".to_string(),
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_without_token_only_set_repo_runs() {
        let (backend, submission) =
            submission(FakeBackend::default().with_set_repo(Ok(saved(Some("saved"), None, None))));

        submission.set_repo_path("octocat/hello-world");
        let outcome = submission.submit_repository().await;

        assert_eq!(outcome, SubmissionOutcome::Saved);
        assert_eq!(submission.state().status_message(), "saved");
        assert_eq!(backend.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_without_identifier_only_set_repo_runs() {
        let (backend, submission) =
            submission(FakeBackend::default().with_set_repo(Ok(saved(None, Some("tok1"), None))));

        submission.set_repo_path("octocat/hello-world");
        let outcome = submission.submit_repository().await;

        assert_eq!(outcome, SubmissionOutcome::Saved);
        assert_eq!(submission.state().status_message(), SUBMITTED_MESSAGE);
        assert_eq!(backend.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_path_is_trimmed_before_sending() {
        let (backend, submission) =
            submission(FakeBackend::default().with_set_repo(Ok(saved(None, None, None))));

        submission.set_repo_path("  octocat/hello-world  ");
        submission.submit_repository().await;

        assert_eq!(
            backend.calls(),
            vec![Call::SetRepo("octocat/hello-world".to_string())]
        );
        assert_eq!(submission.state().repo_path(), "  octocat/hello-world  ");
    }

    #[tokio::test]
    async fn test_configuration_without_message_keeps_saved_message() {
        let (_backend, submission) = submission(
            FakeBackend::default()
                .with_set_repo(Ok(saved(Some("ok"), Some("tok1"), Some("id1"))))
                .with_configure(Ok(configured(None))),
        );

        submission.set_repo_path("octocat/hello-world");
        let outcome = submission.submit_repository().await;

        assert_eq!(outcome, SubmissionOutcome::Configured);
        assert_eq!(submission.state().status_message(), "ok");
    }

    #[tokio::test]
    async fn test_set_repo_failure_uses_detail() {
        let (backend, submission) = submission(
            FakeBackend::default()
                .with_set_repo(Err(rejected(404, json!({ "detail": "repo not found" })))),
        );

        submission.set_repo_path("octocat/hello-world");
        let outcome = submission.submit_repository().await;

        assert_eq!(
            outcome,
            SubmissionOutcome::Failed {
                stage: SubmissionStage::SetRepository
            }
        );
        assert_eq!(submission.state().status_message(), "repo not found");
        assert!(!submission.state().is_submitting());
        assert_eq!(backend.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_network_failure_uses_fallback() {
        let (_backend, submission) = submission(
            FakeBackend::default()
                .with_set_repo(Err(TransportError::Network("connection refused".into()))),
        );

        submission.set_repo_path("octocat/hello-world");
        submission.submit_repository().await;

        assert_eq!(submission.state().status_message(), SUBMIT_FAILED_MESSAGE);
        assert!(!submission.state().is_submitting());
    }

    #[tokio::test]
    async fn test_configuration_failure_is_reported() {
        let (backend, submission) = submission(
            FakeBackend::default()
                .with_set_repo(Ok(saved(Some("ok"), Some("tok1"), Some("id1"))))
                .with_configure(Err(rejected(
                    403,
                    json!({ "message": "You do not have read permission for this repository." }),
                ))),
        );

        submission.set_repo_path("octocat/hello-world");
        let outcome = submission.submit_repository().await;

        assert_eq!(
            outcome,
            SubmissionOutcome::Failed {
                stage: SubmissionStage::Configuration
            }
        );
        assert_eq!(
            submission.state().status_message(),
            "You do not have read permission for this repository."
        );
        assert!(!submission.state().is_submitting());
        assert_eq!(backend.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_busy_flag_brackets_requests() {
        let (backend, submission) = submission(
            FakeBackend::default()
                .with_set_repo(Ok(saved(Some("ok"), Some("tok1"), Some("id1"))))
                .with_configure(Ok(configured(Some("configured")))),
        );

        submission.set_repo_path("octocat/hello-world");
        assert!(!submission.state().is_submitting());

        submission.submit_repository().await;

        assert_eq!(*backend.busy_during_calls.lock().unwrap(), vec![true, true]);
        assert!(!submission.state().is_submitting());
    }

    #[tokio::test]
    async fn test_resubmission_runs_full_sequence_again() {
        let (backend, submission) =
            submission(FakeBackend::default().with_set_repo(Ok(saved(Some("first"), None, None))));

        submission.set_repo_path("octocat/hello-world");
        submission.submit_repository().await;

        *backend.set_repo.lock().unwrap() = Some(Ok(saved(Some("second"), None, None)));
        submission.submit_repository().await;

        assert_eq!(submission.state().status_message(), "second");
        assert_eq!(backend.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_observers_see_published_state() {
        let (_backend, submission) =
            submission(FakeBackend::default().with_set_repo(Ok(saved(Some("saved"), None, None))));
        let mut observer = submission.subscribe();

        submission.set_repo_path("octocat/hello-world");
        assert!(observer.has_changed().unwrap());
        assert_eq!(
            observer.borrow_and_update().repo_path(),
            "octocat/hello-world"
        );

        submission.submit_repository().await;
        assert!(observer.has_changed().unwrap());
        assert_eq!(observer.borrow_and_update().status_message(), "saved");
    }

    struct RecordingNavigator(Vec<String>);

    impl Navigator for RecordingNavigator {
        fn assign(&mut self, url: &str) {
            self.0.push(url.to_string());
        }
    }

    #[test]
    fn test_login_clears_storage_and_redirects() {
        let submission = RepoSubmission::new(Arc::new(FakeBackend::default()));
        let mut storage = MemoryStorage::new();
        storage
            .set(StorageScope::Local, "session_cookie", "session=abc")
            .unwrap();
        storage.set(StorageScope::Session, "tab", "1").unwrap();
        let mut navigator = RecordingNavigator(Vec::new());

        submission.login(&mut storage, &mut navigator);

        assert!(storage.is_empty());
        assert_eq!(
            navigator.0,
            vec!["https://api.example.com/dissertation/login".to_string()]
        );
    }
}
