//! reqwest implementation of `OnboardingBackend`
//!
//! Requests carry credentials: the client keeps a cookie jar for the backend
//! session, optionally seeded with a cookie captured from a browser login.

use crate::backend::OnboardingBackend;
use crate::endpoints::Endpoints;
use crate::error::{ErrorBody, TransportError};
use crate::types::{
    ConfigurationRequest, ConfigurationResponse, QueryRequest, QueryResponse, SetRepoRequest,
    SetRepoResponse,
};
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::cookie::Jar;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Onboarding backend over HTTP
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    endpoints: Endpoints,
}

impl HttpBackend {
    /// Create a backend for `base_url`
    ///
    /// `session_cookie` (`name=value`) is added to the cookie jar for the
    /// base URL so requests are sent as the logged-in session.
    pub fn new(
        base_url: impl Into<String>,
        session_cookie: Option<&str>,
    ) -> Result<Self, TransportError> {
        let endpoints = Endpoints::new(base_url);
        let jar = Arc::new(Jar::default());

        if let Some(cookie) = session_cookie {
            match reqwest::Url::parse(endpoints.base_url()) {
                Ok(url) => {
                    debug!("Seeding session cookie for {}", url);
                    jar.add_cookie_str(cookie, &url);
                }
                Err(e) => warn!(
                    "Not seeding session cookie, base URL {:?} is not absolute: {}",
                    endpoints.base_url(),
                    e
                ),
            }
        }

        let client = Client::builder().cookie_provider(jar).build()?;

        Ok(Self { client, endpoints })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    async fn execute<T>(&self, request: RequestBuilder) -> Result<T, TransportError>
    where
        T: DeserializeOwned + Default,
    {
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            debug!("Backend answered {} with body {:?}", status, text);
            return Err(TransportError::Status {
                status: status.as_u16(),
                body: ErrorBody::parse(&text),
            });
        }

        Ok(decode_success_body(&text))
    }
}

/// Decode a 2xx body, treating anything unexpected as an empty response
pub(crate) fn decode_success_body<T>(text: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match serde_json::from_str(text) {
        Ok(body) => body,
        Err(e) => {
            warn!("Unexpected success body, treating as empty: {}", e);
            T::default()
        }
    }
}

#[async_trait]
impl OnboardingBackend for HttpBackend {
    fn login_url(&self) -> String {
        self.endpoints.login()
    }

    async fn set_repo(&self, request: &SetRepoRequest) -> Result<SetRepoResponse, TransportError> {
        let url = self.endpoints.set_repo();
        debug!("POST {}", url);
        self.execute(self.client.post(url).json(request)).await
    }

    async fn configure_repo(
        &self,
        request: &ConfigurationRequest,
    ) -> Result<ConfigurationResponse, TransportError> {
        let url = self.endpoints.configuration();
        debug!("POST {}", url);
        self.execute(self.client.post(url).json(request)).await
    }

    async fn query(&self, request: &QueryRequest) -> Result<QueryResponse, TransportError> {
        let url = self.endpoints.query();
        debug!("GET {}", url);
        // The backend reads the question from a JSON body even on GET
        self.execute(self.client.get(url).json(request)).await
    }
}
