use crate::actions::{Action, SessionAction};
use crate::state::AppState;
use crate::views;

pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Session(SessionAction::Detected {
            state: session,
            location,
            route,
        }) => {
            state.session = *session;
            state.location = location.clone();
            state.route = *route;
            state.view_stack = vec![views::view_for(*session, *route)];
        }
        Action::Session(SessionAction::LoginRedirected(url)) => {
            state.login_redirect = Some(url.clone());
        }
        _ => {}
    }
    state
}
