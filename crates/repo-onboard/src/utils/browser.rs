//! Browser utilities
//!
//! Login leaves the terminal: the login URL is opened in the system's default
//! browser, which finishes the OAuth flow and redirects to the frontend.

use onboard_client::Navigator;
use std::process::Command;

/// Opens URLs in the system's default browser
#[derive(Debug, Default)]
pub struct BrowserNavigator {
    last_url: Option<String>,
}

impl BrowserNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// URL of the most recent hand-off
    pub fn last_url(&self) -> Option<&str> {
        self.last_url.as_deref()
    }
}

impl Navigator for BrowserNavigator {
    fn assign(&mut self, url: &str) {
        self.last_url = Some(url.to_string());
        open_url(url);
    }
}

/// Open a URL in the system's default browser
///
/// Uses platform-specific commands:
/// - macOS: `open`
/// - Linux: `xdg-open`
/// - Windows: `cmd /C start`
pub fn open_url(url: &str) {
    #[cfg(target_os = "macos")]
    let result = Command::new("open").arg(url).spawn();

    #[cfg(target_os = "windows")]
    let result = Command::new("cmd").args(["/C", "start", url]).spawn();

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let result = Command::new("xdg-open").arg(url).spawn();

    if let Err(e) = result {
        log::error!("Failed to open URL in browser: {}", e);
    }
}
