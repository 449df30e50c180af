pub mod repo_form_reducer;
pub mod session_reducer;
