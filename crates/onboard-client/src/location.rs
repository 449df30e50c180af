//! Page location and navigation
//!
//! The client reads its current address once at startup and may rewrite it
//! in place. `PageLocation` is that address; `Navigator` hands the user off to
//! another URL entirely (the login redirect).

use url::Url;

/// The address the client is currently showing
pub trait PageLocation {
    /// Full address
    fn href(&self) -> String;

    /// Query string including the leading `?`, empty when there is none
    fn search(&self) -> String;

    /// Scheme, host and port, e.g. `http://localhost:3000`
    fn origin(&self) -> String;

    /// Path component, `/` for the root
    fn pathname(&self) -> String;

    /// Replace the visible address without reloading and without adding a
    /// history entry
    fn replace_state(&mut self, url: &str);
}

/// Full-page hand-off to another URL
pub trait Navigator {
    fn assign(&mut self, url: &str);
}

/// Location the application was launched with
///
/// An unparseable address is kept verbatim; it has no query string, no
/// origin and the root path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchLocation {
    raw: String,
    parsed: Option<Url>,
}

impl LaunchLocation {
    pub fn new(address: &str) -> Self {
        let parsed = Url::parse(address).ok();
        if parsed.is_none() {
            log::warn!("Location {:?} is not an absolute URL", address);
        }
        Self {
            raw: address.to_string(),
            parsed,
        }
    }
}

impl PageLocation for LaunchLocation {
    fn href(&self) -> String {
        match &self.parsed {
            Some(url) => url.to_string(),
            None => self.raw.clone(),
        }
    }

    fn search(&self) -> String {
        self.parsed
            .as_ref()
            .and_then(|url| url.query())
            .filter(|query| !query.is_empty())
            .map(|query| format!("?{}", query))
            .unwrap_or_default()
    }

    fn origin(&self) -> String {
        self.parsed
            .as_ref()
            .map(|url| url.origin().ascii_serialization())
            .filter(|origin| origin != "null")
            .unwrap_or_default()
    }

    fn pathname(&self) -> String {
        self.parsed
            .as_ref()
            .map(|url| url.path().to_string())
            .unwrap_or_else(|| "/".to_string())
    }

    fn replace_state(&mut self, url: &str) {
        *self = Self::new(url);
    }
}
