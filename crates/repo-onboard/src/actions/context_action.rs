//! Context-sensitive actions
//!
//! `Confirm` (Enter key) means "log in" on the login view and "submit" on the
//! repository view.

/// Semantic actions that views interpret differently
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextAction {
    /// Primary action of the active view (Enter key)
    Confirm,
}
