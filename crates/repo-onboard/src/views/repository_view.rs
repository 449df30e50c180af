//! Repository form view
//!
//! One text field plus a submit trigger. While a submission is in flight the
//! field is dimmed, keys are ignored and a spinner replaces the hint.

use crate::actions::{Action, ContextAction, RepoFormAction, TextInputAction};
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use crate::theme::Theme;
use crate::views::{centered, View, ViewId};
use onboard_client::RepoFormState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Modifier, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const FIELD_LABEL: &str = "Repository (e.g. user/repo)";
const BUSY_LABEL: &str = "Processing...";
const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug, Clone, Default)]
pub struct RepositoryView;

impl RepositoryView {
    pub fn new() -> Self {
        Self
    }
}

impl View for RepositoryView {
    fn view_id(&self) -> ViewId {
        ViewId::Repository
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        render(&state.form, state.tick, &state.theme, area, f);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::TEXT_INPUT
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_text_input(&self, input: TextInputAction) -> Option<Action> {
        let action = match input {
            TextInputAction::Char(c) => RepoFormAction::Char(c),
            TextInputAction::Backspace => RepoFormAction::Backspace,
            TextInputAction::ClearLine => RepoFormAction::ClearField,
        };
        Some(Action::RepoForm(action))
    }

    fn translate_context_action(&self, action: ContextAction) -> Option<Action> {
        match action {
            ContextAction::Confirm => Some(Action::RepoForm(RepoFormAction::Submit)),
        }
    }
}

fn render(form: &RepoFormState, tick: usize, theme: &Theme, area: Rect, f: &mut Frame) {
    let panel = centered(area, 60, 11);
    let busy = form.is_submitting();

    let footer_hint = if busy {
        Line::from(vec![
            Span::styled(
                format!(" {} ", SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]),
                theme.accent(),
            ),
            Span::styled(format!("{} ", BUSY_LABEL), theme.muted()),
        ])
    } else {
        Line::from(vec![
            Span::styled(" Enter", theme.key_hint()),
            Span::styled(" submit  ", theme.muted()),
            Span::styled("Ctrl+C", theme.key_hint()),
            Span::styled(" quit ", theme.muted()),
        ])
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Repository ")
        .title_style(theme.panel_title())
        .title_bottom(footer_hint)
        .title_alignment(Alignment::Center)
        .border_style(theme.panel_border());
    f.render_widget(block, panel);

    let inner = panel.inner(Margin {
        horizontal: 2,
        vertical: 1,
    });

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Label
            Constraint::Length(1), // Field
            Constraint::Length(1), // Spacing
            Constraint::Min(3),    // Status message
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(Span::styled(FIELD_LABEL, theme.text_secondary())),
        chunks[0],
    );

    render_field(f, chunks[1], form.repo_path(), busy, theme);

    if !form.status_message().is_empty() {
        let status = Paragraph::new(form.status_message())
            .style(theme.info())
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.muted()),
            );
        f.render_widget(status, chunks[3]);
    }
}

fn render_field(f: &mut Frame, area: Rect, value: &str, busy: bool, theme: &Theme) {
    let line = if busy {
        Line::from(vec![
            Span::styled("  ", theme.muted()),
            Span::styled(value, theme.muted().add_modifier(Modifier::DIM)),
        ])
    } else {
        Line::from(vec![
            Span::styled("> ", theme.accent().bold()),
            Span::styled(value, theme.input_active()),
            Span::styled("▌", theme.accent()),
        ])
    };
    f.render_widget(Paragraph::new(line), area);
}
