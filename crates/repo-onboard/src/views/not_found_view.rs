use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use crate::views::{centered, View, ViewId};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const NOT_FOUND: &str = "404 - Page Not Found";

/// Shown for any route other than the root
#[derive(Debug, Clone, Default)]
pub struct NotFoundView;

impl NotFoundView {
    pub fn new() -> Self {
        Self
    }
}

impl View for NotFoundView {
    fn view_id(&self) -> ViewId {
        ViewId::NotFound
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let theme = &state.theme;
        let lines = vec![
            Line::from(Span::styled(NOT_FOUND, theme.error())),
            Line::raw(""),
            Line::from(vec![
                Span::styled("Esc", theme.key_hint()),
                Span::styled(" quit", theme.muted()),
            ]),
        ];

        f.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            centered(area, area.width, 3),
        );
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::empty()
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }
}
