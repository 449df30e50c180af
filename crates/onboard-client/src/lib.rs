//! Client for the repository onboarding backend
//!
//! This crate holds the client-side flow of the onboarding frontend:
//! detecting the return from the GitHub OAuth redirect, and submitting a
//! repository in two dependent steps. The backend is reached through the
//! `OnboardingBackend` trait so the flow can run against any transport.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐     ┌─────────────────────────────┐
//! │ SessionDetector  │     │ RepoSubmission              │
//! │ (PageLocation)   │     │ - set_repo_path()           │
//! └──────────────────┘     │ - submit_repository()       │
//!                          │ - login()                   │
//!                          └─────────────────────────────┘
//!                                        │
//!                          ┌─────────────┴──────────────┐
//!                          ▼                            ▼
//!                 ┌─────────────────┐        ┌──────────────────┐
//!                 │ HttpBackend     │        │ test fakes       │
//!                 │ (reqwest)       │        │                  │
//!                 └─────────────────┘        └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use onboard_client::{HttpBackend, RepoSubmission};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), onboard_client::TransportError> {
//! let backend = Arc::new(HttpBackend::new("https://api.example.com", None)?);
//! let submission = RepoSubmission::new(backend);
//!
//! submission.set_repo_path("octocat/hello-world");
//! submission.submit_repository().await;
//! println!("{}", submission.state().status_message());
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod endpoints;
pub mod error;
pub mod http_backend;
pub mod location;
pub mod orchestrator;
pub mod query;
pub mod session;
pub mod types;

pub use backend::OnboardingBackend;
pub use endpoints::Endpoints;
pub use error::{ErrorBody, TransportError};
pub use http_backend::HttpBackend;
pub use location::{LaunchLocation, Navigator, PageLocation};
pub use orchestrator::{RepoFormState, RepoSubmission, SubmissionOutcome, SubmissionStage};
pub use query::ask_repository;
pub use session::{Route, SessionDetector, SessionState};
pub use types::{
    ConfigurationRequest, ConfigurationResponse, QueryRequest, QueryResponse, RepoId, RepoPath,
    SetRepoRequest, SetRepoResponse,
};
