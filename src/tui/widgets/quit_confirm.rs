//! Quit confirmation popup.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::centered_rect;
use crate::tui::style::Styles;

/// Renders the quit confirmation dialog.
pub fn render_quit_confirm(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(area, 30, 20);
    frame.render_widget(Clear, popup_area);

    let text = vec![
        Line::from("Quit reputop?"),
        Line::from(""),
        Line::from("Enter/q: yes   Esc/n: no"),
    ];
    frame.render_widget(
        Paragraph::new(text)
            .style(Styles::default())
            .centered()
            .block(Block::default().borders(Borders::ALL).style(Styles::default())),
        popup_area,
    );
}
