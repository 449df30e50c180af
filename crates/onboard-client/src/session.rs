//! Session detection
//!
//! The backend finishes the GitHub OAuth dance by redirecting back to the
//! frontend origin with `?auth=success`. Detection runs once per page
//! lifetime: it flips the session to authenticated and scrubs the marker (and
//! every other query parameter) from the visible address.
//!
//! The marker is matched as a substring of the query string, so any query
//! that carries `auth=success` counts, including `?oauth=success` or
//! `?auth=successful`. A marker in the fragment does not.

use crate::location::PageLocation;

const AUTH_MARKER: &str = "auth=success";

/// Whether the user came back from a successful authorization
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Unauthenticated,
    Authenticated,
}

impl SessionState {
    pub fn is_authenticated(self) -> bool {
        self == SessionState::Authenticated
    }
}

/// Detects the authorization marker once per page lifetime
#[derive(Debug, Default)]
pub struct SessionDetector {
    detected: Option<SessionState>,
}

impl SessionDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inspect the location and settle the session state
    ///
    /// Only the first call looks at the location; later calls return the
    /// state settled by the first one.
    pub fn detect(&mut self, location: &mut dyn PageLocation) -> SessionState {
        if let Some(state) = self.detected {
            return state;
        }

        let search = location.search();
        log::debug!("Detecting session from query {:?}", search);

        let state = if has_auth_marker(&search) {
            let clean_url = location.origin();
            log::info!("Authorization succeeded, cleaning up location");
            location.replace_state(&clean_url);
            SessionState::Authenticated
        } else {
            SessionState::Unauthenticated
        };

        self.detected = Some(state);
        state
    }

    pub fn state(&self) -> SessionState {
        self.detected.unwrap_or_default()
    }
}

fn has_auth_marker(search: &str) -> bool {
    search.contains(AUTH_MARKER)
}

/// Top-level route of the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        match path {
            "" | "/" => Route::Home,
            _ => Route::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::LaunchLocation;

    #[test]
    fn test_marker_authenticates_and_cleans_location() {
        let mut location = LaunchLocation::new("http://localhost:3000/?auth=success&x=1");
        let mut detector = SessionDetector::new();

        assert_eq!(detector.detect(&mut location), SessionState::Authenticated);
        assert_eq!(location.href(), "http://localhost:3000/");
        assert_eq!(location.search(), "");
        assert!(!location.href().contains("auth=success"));
    }

    #[test]
    fn test_marker_position_does_not_matter() {
        let mut location = LaunchLocation::new("http://localhost:3000/?x=1&auth=success#frag");
        let mut detector = SessionDetector::new();

        assert_eq!(detector.detect(&mut location), SessionState::Authenticated);
        assert_eq!(location.href(), "http://localhost:3000/");
    }

    #[test]
    fn test_missing_marker_leaves_location_untouched() {
        let mut location = LaunchLocation::new("http://localhost:3000/?x=1");
        let mut detector = SessionDetector::new();

        assert_eq!(detector.detect(&mut location), SessionState::Unauthenticated);
        assert_eq!(location.href(), "http://localhost:3000/?x=1");
    }

    #[test]
    fn test_marker_matches_anywhere_in_query() {
        for address in [
            "http://localhost:3000/?auth=successful",
            "http://localhost:3000/?oauth=success",
            "http://localhost:3000/?next=x&auth=success&y=2",
        ] {
            let mut location = LaunchLocation::new(address);
            let mut detector = SessionDetector::new();
            assert_eq!(
                detector.detect(&mut location),
                SessionState::Authenticated,
                "{}",
                address
            );
            assert_eq!(location.search(), "", "{}", address);
            assert!(!location.href().contains("auth=success"), "{}", address);
        }
    }

    #[test]
    fn test_fragment_and_malformed_addresses_are_ignored() {
        for address in [
            "http://localhost:3000/?auth=failure",
            "http://localhost:3000/#auth=success",
            "http://localhost:3000/?",
            "::not a url::",
        ] {
            let mut location = LaunchLocation::new(address);
            let mut detector = SessionDetector::new();
            assert_eq!(
                detector.detect(&mut location),
                SessionState::Unauthenticated,
                "{}",
                address
            );
        }
    }

    #[test]
    fn test_detection_runs_once() {
        let mut detector = SessionDetector::new();
        let mut first = LaunchLocation::new("http://localhost:3000/");
        assert_eq!(detector.detect(&mut first), SessionState::Unauthenticated);

        let mut second = LaunchLocation::new("http://localhost:3000/?auth=success");
        assert_eq!(detector.detect(&mut second), SessionState::Unauthenticated);
        assert_eq!(second.search(), "?auth=success");
        assert_eq!(detector.state(), SessionState::Unauthenticated);
    }

    #[test]
    fn test_route_from_path() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
        assert_eq!(Route::from_path("/settings"), Route::NotFound);
    }
}
