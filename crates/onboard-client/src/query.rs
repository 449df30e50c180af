//! Questions about a configured repository

use crate::backend::OnboardingBackend;
use crate::types::QueryRequest;

pub const QUERY_EMPTY_MESSAGE: &str = "Please enter a question and a repository.";
pub const QUERY_NO_ANSWER_MESSAGE: &str = "No answer returned.";
pub const QUERY_FAILED_MESSAGE: &str = "Error querying repository.";

/// Ask the backend about `repo` and reduce the result to one message
pub async fn ask_repository<B>(backend: &B, repo: &str, question: &str) -> String
where
    B: OnboardingBackend + ?Sized,
{
    let (repo, question) = (repo.trim(), question.trim());
    if repo.is_empty() || question.is_empty() {
        log::warn!("Query rejected: empty question or repository");
        return QUERY_EMPTY_MESSAGE.to_string();
    }

    let request = QueryRequest {
        query: question.to_string(),
        repo: repo.to_string(),
    };

    log::info!("Querying {}: {}", repo, question);
    match backend.query(&request).await {
        Ok(response) => response
            .message()
            .unwrap_or(QUERY_NO_ANSWER_MESSAGE)
            .to_string(),
        Err(e) => {
            log::error!("Query failed: {}", e);
            e.user_message(QUERY_FAILED_MESSAGE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorBody, TransportError};
    use crate::types::{
        ConfigurationRequest, ConfigurationResponse, QueryResponse, SetRepoRequest,
        SetRepoResponse,
    };
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct QueryBackend {
        answer: Mutex<Option<Result<QueryResponse, TransportError>>>,
        asked: Mutex<Vec<QueryRequest>>,
    }

    impl QueryBackend {
        fn answering(answer: Result<QueryResponse, TransportError>) -> Self {
            Self {
                answer: Mutex::new(Some(answer)),
                asked: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl OnboardingBackend for QueryBackend {
        fn login_url(&self) -> String {
            String::new()
        }

        async fn set_repo(&self, _: &SetRepoRequest) -> Result<SetRepoResponse, TransportError> {
            unreachable!()
        }

        async fn configure_repo(
            &self,
            _: &ConfigurationRequest,
        ) -> Result<ConfigurationResponse, TransportError> {
            unreachable!()
        }

        async fn query(&self, request: &QueryRequest) -> Result<QueryResponse, TransportError> {
            self.asked.lock().unwrap().push(request.clone());
            self.answer.lock().unwrap().take().expect("single query")
        }
    }

    #[tokio::test]
    async fn test_answer_is_returned() {
        let backend = QueryBackend::answering(Ok(QueryResponse {
            message: Some("It parses TOML.".to_string()),
        }));

        let answer = ask_repository(&backend, "octocat/hello-world", " What does it do? ").await;

        assert_eq!(answer, "It parses TOML.");
        assert_eq!(
            backend.asked.lock().unwrap()[0],
            QueryRequest {
                query: "What does it do?".to_string(),
                repo: "octocat/hello-world".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_blank_input_is_rejected() {
        let backend = QueryBackend::answering(Ok(QueryResponse::default()));

        assert_eq!(ask_repository(&backend, "", "why?").await, QUERY_EMPTY_MESSAGE);
        assert_eq!(ask_repository(&backend, "a/b", "  ").await, QUERY_EMPTY_MESSAGE);
        assert!(backend.asked.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failure_message_policy_applies() {
        let backend = QueryBackend::answering(Err(TransportError::Status {
            status: 500,
            body: ErrorBody::parse(r#"{"detail":"queue unavailable"}"#),
        }));

        assert_eq!(
            ask_repository(&backend, "a/b", "why?").await,
            "queue unavailable"
        );
    }

    #[tokio::test]
    async fn test_missing_answer() {
        let backend = QueryBackend::answering(Ok(QueryResponse::default()));
        assert_eq!(
            ask_repository(&backend, "a/b", "why?").await,
            QUERY_NO_ANSWER_MESSAGE
        );
    }
}
