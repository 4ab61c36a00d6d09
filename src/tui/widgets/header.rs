//! Header widget showing time, title, and tabs.

use chrono::Local;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::state::AppState;
use crate::tui::style::Styles;
use crate::view::build_tab_line;

/// Renders the header bar.
pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::horizontal([
        Constraint::Length(22), // Time
        Constraint::Length(24), // Title
        Constraint::Min(20),    // Tabs
        Constraint::Length(48), // Status
    ])
    .split(area);

    // Time
    let time_str = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    frame.render_widget(Paragraph::new(time_str).style(Styles::header()), chunks[0]);

    // Title
    frame.render_widget(
        Paragraph::new(" Reputation Aggregator ").style(Styles::header()),
        chunks[1],
    );

    // Tabs
    let tabs: Vec<Span> = build_tab_line(state.current_tab)
        .into_iter()
        .enumerate()
        .flat_map(|(i, item)| {
            let style = if item.active {
                Styles::tab_active()
            } else {
                Styles::tab_inactive()
            };
            let num = format!(" {}:", i + 1);
            let name = format!("{} ", item.title);
            vec![Span::styled(num, Styles::dim()), Span::styled(name, style)]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(tabs)).style(Styles::header()),
        chunks[2],
    );

    // Status message (fetch errors, blocked actions)
    let (status, style) = match &state.status_message {
        Some(msg) => (msg.clone(), Styles::error()),
        None => (String::new(), Styles::header()),
    };
    frame.render_widget(Paragraph::new(status).style(style), chunks[3]);
}
