use crate::state::AppState;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const TITLE: &str = "GitHub Authorization";

pub(super) fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme.muted());

    let lines = vec![
        Line::from(Span::styled(TITLE, theme.panel_title())),
        Line::from(vec![
            Span::styled("at ", theme.muted()),
            Span::styled(state.location.as_str(), theme.text_secondary()),
        ]),
    ];

    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}
