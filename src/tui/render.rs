//! Main rendering logic for TUI.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use super::state::{AppState, PopupState};
use super::widgets::{
    render_cards, render_footer, render_header, render_help, render_node_detail,
    render_quit_confirm,
};

/// Main render function.
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    // Main layout: header, card list, key hints
    let chunks = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Min(5),    // Card list
        Constraint::Length(1), // Key hints
    ])
    .split(area);

    render_header(frame, chunks[0], state);
    render_cards(frame, chunks[1], state);
    render_footer(frame, chunks[2]);

    // Popups (rendered last to overlay everything).
    // Copy the discriminant first to avoid borrow conflicts between
    // &state.popup and &mut state.
    #[derive(Clone, Copy)]
    enum ActivePopup {
        None,
        Help,
        NodeDetail,
        QuitConfirm,
    }
    let active = match &state.popup {
        PopupState::None => ActivePopup::None,
        PopupState::Help { .. } => ActivePopup::Help,
        PopupState::NodeDetail { .. } => ActivePopup::NodeDetail,
        PopupState::QuitConfirm => ActivePopup::QuitConfirm,
    };
    match active {
        ActivePopup::Help => render_help(frame, area, state),
        ActivePopup::NodeDetail => render_node_detail(frame, area, state),
        ActivePopup::QuitConfirm => render_quit_confirm(frame, area),
        ActivePopup::None => {}
    }
}
