//! Key hint footer line.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::style::Styles;

/// Renders the one-line key hints.
pub fn render_footer(frame: &mut Frame, area: Rect) {
    let hints = [
        ("1/2", "tabs"),
        ("r", "refresh"),
        ("j/k", "select"),
        ("Enter", "details"),
        ("h", "help"),
        ("q", "quit"),
    ];
    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, desc)| {
            vec![
                Span::styled(format!(" {}", key), Styles::help_key()),
                Span::styled(format!(":{} ", desc), Styles::help()),
            ]
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
