use crate::actions::{Action, RepoFormAction};
use onboard_client::RepoFormState;

/// The form is owned by the submission; the reducer only mirrors snapshots
pub fn reduce(state: RepoFormState, action: &Action) -> RepoFormState {
    match action {
        Action::RepoForm(RepoFormAction::Updated(snapshot)) => snapshot.clone(),
        _ => state,
    }
}
