//! TUI widgets.

mod cards;
mod footer;
mod header;
mod help;
mod node_detail;
mod quit_confirm;

pub use cards::render_cards;
pub use footer::render_footer;
pub use header::render_header;
pub use help::render_help;
pub use node_detail::render_node_detail;
pub use quit_confirm::render_quit_confirm;

use ratatui::layout::{Constraint, Layout, Rect};

/// Returns a centered rect using percentages of the given area.
fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);
    let horizontal = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(vertical[1]);
    horizontal[1]
}
