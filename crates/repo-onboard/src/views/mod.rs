use crate::actions::{Action, ContextAction, TextInputAction};
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use onboard_client::{Route, SessionState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Block,
    Frame,
};

mod header;
pub mod login_view;
pub mod not_found_view;
pub mod repository_view;

pub use login_view::LoginView;
pub use not_found_view::NotFoundView;
pub use repository_view::RepositoryView;

/// View identifier - allows comparing which view is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    Login,
    Repository,
    NotFound,
}

/// View trait - defines the interface that all views must implement
///
/// Views live in `AppState`, which is shared with the background worker, so
/// they must be `Send + Sync`.
pub trait View: std::fmt::Debug + Send + Sync {
    /// Get the unique identifier for this view type
    fn view_id(&self) -> ViewId;

    /// Render this view into the body area below the header
    fn render(&self, state: &AppState, area: Rect, f: &mut Frame);

    /// Get the capabilities of this view (for keyboard handling)
    fn capabilities(&self, state: &AppState) -> PanelCapabilities;

    /// Clone this view into a Box
    fn clone_box(&self) -> Box<dyn View>;

    /// Translate a generic text input action to this view's specific action
    fn translate_text_input(&self, _input: TextInputAction) -> Option<Action> {
        None
    }

    /// Translate a context action (Enter) to this view's specific action
    fn translate_context_action(&self, _action: ContextAction) -> Option<Action> {
        None
    }
}

impl Clone for Box<dyn View> {
    fn clone(&self) -> Box<dyn View> {
        self.clone_box()
    }
}

/// The view selected by the settled session and route
pub fn view_for(session: SessionState, route: Route) -> Box<dyn View> {
    match (route, session) {
        (Route::NotFound, _) => Box::new(NotFoundView::new()),
        (Route::Home, SessionState::Authenticated) => Box::new(RepositoryView::new()),
        (Route::Home, SessionState::Unauthenticated) => Box::new(LoginView::new()),
    }
}

/// Render the entire application UI: header on top, then the view stack
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    f.render_widget(Block::default().style(state.theme.panel_background()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    header::render(state, chunks[0], f);

    for view in &state.view_stack {
        view.render(state, chunks[1], f);
    }
}

/// Centered rectangle of fixed size, clamped to `area`
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
