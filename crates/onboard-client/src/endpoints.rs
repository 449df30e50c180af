//! Backend endpoint URLs
//!
//! URLs are built by plain concatenation of the configured base URL and a
//! fixed path. An unconfigured base URL leaves the bare path, which fails
//! when the request is sent.

pub const LOGIN_PATH: &str = "/dissertation/login";
pub const SET_REPO_PATH: &str = "/dissertation/set_repo";
pub const CONFIGURATION_PATH: &str = "/dissertation/repo/configuration";
pub const QUERY_PATH: &str = "/dissertation/query";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn login(&self) -> String {
        self.build(LOGIN_PATH)
    }

    pub fn set_repo(&self) -> String {
        self.build(SET_REPO_PATH)
    }

    pub fn configuration(&self) -> String {
        self.build(CONFIGURATION_PATH)
    }

    pub fn query(&self) -> String {
        self.build(QUERY_PATH)
    }
}
