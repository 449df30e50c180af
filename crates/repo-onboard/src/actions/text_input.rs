//! Generic text input actions that views translate into their own actions

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInputAction {
    /// Character typed into input field
    Char(char),
    /// Backspace pressed - remove last character
    Backspace,
    /// Clear entire line (Ctrl+U or Cmd+Backspace)
    ClearLine,
}
