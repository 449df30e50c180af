//! Login view, shown until the session is authenticated

use crate::actions::{Action, ContextAction, SessionAction};
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use crate::views::{centered, View, ViewId};
use ratatui::{
    layout::{Alignment, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Default)]
pub struct LoginView;

impl LoginView {
    pub fn new() -> Self {
        Self
    }
}

impl View for LoginView {
    fn view_id(&self) -> ViewId {
        ViewId::Login
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let theme = &state.theme;
        let button_area = centered(area, 30, 5);

        let footer_hint = Line::from(vec![
            Span::styled(" Enter", theme.key_hint()),
            Span::styled(" login  ", theme.muted()),
            Span::styled("Esc", theme.key_hint()),
            Span::styled(" quit ", theme.muted()),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.panel_border())
            .title_bottom(footer_hint)
            .title_alignment(Alignment::Center);

        let content = vec![
            Line::raw(""),
            Line::from(Span::styled("Login with GitHub", theme.text().bold())),
        ];

        f.render_widget(
            Paragraph::new(content)
                .alignment(Alignment::Center)
                .block(block),
            button_area,
        );
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::empty()
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_context_action(&self, action: ContextAction) -> Option<Action> {
        match action {
            ContextAction::Confirm => Some(Action::Session(SessionAction::LoginRequested)),
        }
    }
}
