use crate::actions::{Action, GlobalAction};
use crate::reducers::{repo_form_reducer, session_reducer};
use crate::state::AppState;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(GlobalAction::Quit) => {
            state.running = false;
            return state;
        }
        Action::Global(GlobalAction::Tick) => {
            state.tick = state.tick.wrapping_add(1);
            return state;
        }
        _ => {}
    }

    let mut state = session_reducer::reduce(state, action);
    state.form = repo_form_reducer::reduce(state.form, action);
    state
}
