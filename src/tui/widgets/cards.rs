//! Node card list widget.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use crate::tui::state::{AppState, Tab};
use crate::tui::style::Styles;
use crate::view::build_cards;

/// Renders the node card list for the current tab.
pub fn render_cards(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let title = format!(" {} ({}) ", state.current_tab.title(), state.nodes.len());

    if state.nodes.is_empty() {
        let label = match state.current_tab {
            Tab::Providers => "No providers reported",
            Tab::Requestors => "No requestors reported",
        };
        let msg = Paragraph::new(label).style(Styles::dim()).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .style(Styles::default()),
        );
        frame.render_widget(msg, area);
        return;
    }

    state.resolve_selection();

    let items: Vec<ListItem> = build_cards(&state.nodes)
        .into_iter()
        .map(|card| {
            ListItem::new(vec![
                Line::from(Span::styled(card.header, Styles::card_header())),
                Line::from(Span::styled(format!("  {}", card.body), Styles::dim())),
                Line::from(Span::styled(format!("  {}", card.action), Styles::help())),
                Line::default(),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .style(Styles::default()),
        )
        .highlight_style(Styles::selected());

    frame.render_stateful_widget(list, area, &mut state.list_state);
}
