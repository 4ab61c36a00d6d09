//! Help popup widget.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::centered_rect;
use crate::tui::state::{AppState, PopupState};
use crate::tui::style::Styles;

const KEYS: &[(&str, &str)] = &[
    ("1 / 2", "select providers / requestors"),
    ("Tab / Shift-Tab", "next / previous tab"),
    ("r", "refresh the current tab"),
    ("Up/k Down/j", "move card selection"),
    ("PgUp / PgDn", "page through cards"),
    ("Home / End", "first / last card"),
    ("Enter", "agreement details for the selected node"),
    ("Esc", "close popup"),
    ("h / ?", "this help"),
    ("q", "quit"),
];

/// Renders the help popup.
pub fn render_help(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let PopupState::Help { scroll } = &mut state.popup else {
        return;
    };

    *scroll = (*scroll).min(KEYS.len().saturating_sub(1));

    let lines: Vec<Line> = KEYS
        .iter()
        .skip(*scroll)
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!(" {:<16}", key), Styles::help_key()),
                Span::styled((*desc).to_string(), Styles::help()),
            ])
        })
        .collect();

    let popup_area = centered_rect(area, 50, 60);
    frame.render_widget(Clear, popup_area);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(" Keys ")
                .borders(Borders::ALL)
                .style(Styles::default()),
        ),
        popup_area,
    );
}
