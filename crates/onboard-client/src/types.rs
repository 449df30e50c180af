//! Wire types for the onboarding backend
//!
//! The backend uses the JSON key `repo_path` both for the path the user
//! submits and for the identifier it hands back. Those are kept apart here as
//! `RepoPath` (input) and `RepoId` (output).
//!
//! Response fields are decoded one by one: a field with an unexpected JSON
//! type reads as absent without discarding its siblings. Numeric
//! identifiers are taken in their decimal form.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Repository path as entered by the user, trimmed and non-empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoPath(String);

impl RepoPath {
    /// Returns `None` for empty or whitespace-only input
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RepoPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Repository identifier returned by the set-repository call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RepoId(String);

impl RepoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Body of `POST /dissertation/set_repo`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetRepoRequest {
    pub repo_path: String,
}

impl SetRepoRequest {
    pub fn new(path: &RepoPath) -> Self {
        Self {
            repo_path: path.as_str().to_string(),
        }
    }
}

/// Successful response of `POST /dissertation/set_repo`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SetRepoResponse {
    #[serde(default, deserialize_with = "lenient_string")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub github_token: Option<String>,
    #[serde(default, rename = "repo_path", deserialize_with = "lenient_repo_id")]
    pub repo_id: Option<RepoId>,
}

impl SetRepoResponse {
    /// Returned message, empty strings count as absent
    pub fn message(&self) -> Option<&str> {
        non_empty(self.message.as_deref())
    }

    /// Follow-up configuration request, only when both the token and the
    /// repository identifier are present and non-empty
    pub fn configuration_request(&self) -> Option<ConfigurationRequest> {
        let token = non_empty(self.github_token.as_deref())?;
        let repo_id = self
            .repo_id
            .as_ref()
            .filter(|id| !id.as_str().is_empty())?;

        Some(ConfigurationRequest {
            id: token.to_string(),
            repo_id: repo_id.clone(),
        })
    }
}

/// Body of `POST /dissertation/repo/configuration`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigurationRequest {
    /// GitHub token handed out by the set-repository call
    pub id: String,
    #[serde(rename = "repoId")]
    pub repo_id: RepoId,
}

/// Successful response of `POST /dissertation/repo/configuration`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigurationResponse {
    #[serde(default, deserialize_with = "lenient_string")]
    pub message: Option<String>,
}

impl ConfigurationResponse {
    pub fn message(&self) -> Option<&str> {
        non_empty(self.message.as_deref())
    }
}

/// Body of `GET /dissertation/query`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryRequest {
    pub query: String,
    pub repo: String,
}

/// Successful response of `GET /dissertation/query`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QueryResponse {
    #[serde(default, deserialize_with = "lenient_string")]
    pub message: Option<String>,
}

impl QueryResponse {
    pub fn message(&self) -> Option<&str> {
        non_empty(self.message.as_deref())
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_repo_id<'de, D>(deserializer: D) -> Result<Option<RepoId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(RepoId(s)),
        Value::Number(n) => Some(RepoId(n.to_string())),
        _ => None,
    })
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_repo_path_rejects_blank_input() {
        assert_eq!(RepoPath::parse(""), None);
        assert_eq!(RepoPath::parse("   \t"), None);
        assert_eq!(
            RepoPath::parse("  octocat/hello-world ").map(|p| p.to_string()),
            Some("octocat/hello-world".to_string())
        );
    }

    #[test]
    fn test_set_repo_request_body() {
        let path = RepoPath::parse(" octocat/hello-world").unwrap();
        let body = serde_json::to_value(SetRepoRequest::new(&path)).unwrap();
        assert_eq!(body, json!({ "repo_path": "octocat/hello-world" }));
    }

    #[test]
    fn test_set_repo_response_maps_repo_path_to_identifier() {
        let response: SetRepoResponse = serde_json::from_value(json!({
            "message": "ok",
            "github_token": "tok1",
            "repo_path": "id1",
        }))
        .unwrap();

        assert_eq!(response.message(), Some("ok"));
        assert_eq!(
            response.configuration_request(),
            Some(ConfigurationRequest {
                id: "tok1".to_string(),
                repo_id: RepoId::new("id1"),
            })
        );
    }

    #[test]
    fn test_configuration_request_needs_token_and_identifier() {
        let no_token: SetRepoResponse =
            serde_json::from_value(json!({ "repo_path": "id1" })).unwrap();
        assert_eq!(no_token.configuration_request(), None);

        let empty_token: SetRepoResponse =
            serde_json::from_value(json!({ "github_token": "", "repo_path": "id1" })).unwrap();
        assert_eq!(empty_token.configuration_request(), None);

        let no_id: SetRepoResponse =
            serde_json::from_value(json!({ "github_token": "tok1", "repo_path": null })).unwrap();
        assert_eq!(no_id.configuration_request(), None);

        let empty_id: SetRepoResponse =
            serde_json::from_value(json!({ "github_token": "tok1", "repo_path": "" })).unwrap();
        assert_eq!(empty_id.configuration_request(), None);
    }

    #[test]
    fn test_configuration_request_body() {
        let request = ConfigurationRequest {
            id: "tok1".to_string(),
            repo_id: RepoId::new("id1"),
        };
        assert_eq!(
            serde_json::to_value(request).unwrap(),
            json!({ "id": "tok1", "repoId": "id1" })
        );
    }

    #[test]
    fn test_numeric_repo_id_keeps_sibling_fields() {
        let response: SetRepoResponse = serde_json::from_value(json!({
            "message": "ok",
            "github_token": "tok1",
            "repo_path": 42,
        }))
        .unwrap();

        assert_eq!(response.message(), Some("ok"));
        assert_eq!(
            response.configuration_request(),
            Some(ConfigurationRequest {
                id: "tok1".to_string(),
                repo_id: RepoId::new("42"),
            })
        );
    }

    #[test]
    fn test_mistyped_field_reads_as_absent() {
        let response: SetRepoResponse = serde_json::from_value(json!({
            "message": ["not", "text"],
            "github_token": "tok1",
            "repo_path": { "id": 1 },
        }))
        .unwrap();

        assert_eq!(response.message(), None);
        assert_eq!(response.github_token.as_deref(), Some("tok1"));
        assert_eq!(response.configuration_request(), None);
    }

    #[test]
    fn test_empty_message_counts_as_absent() {
        let response: ConfigurationResponse =
            serde_json::from_value(json!({ "message": "" })).unwrap();
        assert_eq!(response.message(), None);
    }
}
