//! Agreement detail popup for a single node.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Row, Table};

use super::centered_rect;
use crate::tui::state::{AppState, DetailData, PopupState};
use crate::tui::style::Styles;
use crate::view::{AGREEMENT_HEADERS, build_agreement_rows};

/// Renders the agreement history popup.
pub fn render_node_detail(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let PopupState::NodeDetail { node, scroll, data } = &mut state.popup else {
        return;
    };

    let popup_area = centered_rect(area, 80, 70);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" {} ", node))
        .borders(Borders::ALL)
        .style(Styles::default());

    match data {
        DetailData::Loading => {
            let msg = Paragraph::new("Loading agreement history...")
                .style(Styles::dim())
                .block(block);
            frame.render_widget(msg, popup_area);
        }
        DetailData::Failed(msg) => {
            let msg = Paragraph::new(format!("Fetch failed: {}", msg))
                .style(Styles::error())
                .block(block);
            frame.render_widget(msg, popup_area);
        }
        DetailData::Ready(agreements) if agreements.is_empty() => {
            let msg = Paragraph::new("No agreements recorded for this node")
                .style(Styles::dim())
                .block(block);
            frame.render_widget(msg, popup_area);
        }
        DetailData::Ready(agreements) => {
            let all_rows = build_agreement_rows(agreements);
            *scroll = (*scroll).min(all_rows.len().saturating_sub(1));

            let header = Row::new(
                AGREEMENT_HEADERS
                    .iter()
                    .map(|h| Span::styled(*h, Styles::table_header())),
            )
            .style(Styles::table_header());
            let rows: Vec<Row> = all_rows
                .iter()
                .skip(*scroll)
                .map(|r| Row::new(r.cells.iter().cloned()))
                .collect();
            let widths = [
                Constraint::Fill(1),
                Constraint::Length(14),
                Constraint::Length(14),
                Constraint::Length(14),
                Constraint::Length(20),
            ];
            let table = Table::new(rows, widths)
                .header(header)
                .block(block)
                .column_spacing(1);
            frame.render_widget(table, popup_area);
        }
    }
}
