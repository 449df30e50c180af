//! Backend trait
//!
//! Defines the calls the client makes against the onboarding backend.
//! `HttpBackend` is the real implementation; tests script their own.

use crate::error::TransportError;
use crate::types::{
    ConfigurationRequest, ConfigurationResponse, QueryRequest, QueryResponse, SetRepoRequest,
    SetRepoResponse,
};
use async_trait::async_trait;

/// Onboarding backend
///
/// Implementations must be `Send + Sync` so a single backend can be shared
/// between the UI and spawned submission tasks.
#[async_trait]
pub trait OnboardingBackend: Send + Sync {
    /// Full URL of the login endpoint that starts the GitHub OAuth redirect
    fn login_url(&self) -> String;

    /// Register the repository path for the authenticated session
    ///
    /// On success the backend may hand back a GitHub token and a repository
    /// identifier for the follow-up configuration call.
    async fn set_repo(&self, request: &SetRepoRequest) -> Result<SetRepoResponse, TransportError>;

    /// Configure the repository (webhook, indexing) using the token from
    /// `set_repo`
    async fn configure_repo(
        &self,
        request: &ConfigurationRequest,
    ) -> Result<ConfigurationResponse, TransportError>;

    /// Ask a question about a configured repository
    async fn query(&self, request: &QueryRequest) -> Result<QueryResponse, TransportError>;
}
