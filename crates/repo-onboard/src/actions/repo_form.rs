//! Repository form actions

use onboard_client::RepoFormState;

/// Actions for the repository form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoFormAction {
    /// Character typed into the repository field
    Char(char),
    /// Remove the last character
    Backspace,
    /// Clear the whole field
    ClearField,
    /// Submit the entered path
    Submit,
    /// Form snapshot published by the submission owner
    Updated(RepoFormState),
}
