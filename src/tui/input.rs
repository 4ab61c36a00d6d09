//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{AppState, PopupState, Tab};
use crate::model::NodeId;

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
    /// Fetch the node collection for a tab.
    Fetch(Tab),
    /// Fetch the agreement history of a node.
    FetchAgreements(NodeId),
}

/// Handles key input and updates state.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    if state.popup == PopupState::QuitConfirm {
        return handle_quit_confirm(state, key);
    }
    handle_normal(state, key)
}

fn handle_quit_confirm(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.popup = PopupState::None;
            KeyAction::Quit
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.popup = PopupState::None;
            KeyAction::Quit
        }
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
            state.popup = PopupState::None;
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

fn handle_normal(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.popup = PopupState::QuitConfirm;
            KeyAction::None
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,

        // Tab navigation (blocked while the detail popup is open)
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Char('1') | KeyCode::Char('2')
            if state.popup.is_detail_open() =>
        {
            state.status_message = Some("Close details (Esc) before switching tabs".to_string());
            KeyAction::None
        }
        KeyCode::Tab => switch_and_fetch(state, state.current_tab.next()),
        KeyCode::BackTab => switch_and_fetch(state, state.current_tab.prev()),
        KeyCode::Char('1') => switch_and_fetch(state, Tab::Providers),
        KeyCode::Char('2') => switch_and_fetch(state, Tab::Requestors),

        // Manual refresh of the current tab
        KeyCode::Char('r') => KeyAction::Fetch(state.current_tab),

        // Card navigation (or popup scroll if a popup is open)
        KeyCode::Up | KeyCode::Char('k') => {
            match &mut state.popup {
                PopupState::Help { scroll } | PopupState::NodeDetail { scroll, .. } => {
                    *scroll = scroll.saturating_sub(1);
                }
                _ => state.select_up(),
            }
            KeyAction::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            match &mut state.popup {
                PopupState::Help { scroll } | PopupState::NodeDetail { scroll, .. } => {
                    // Clamped during render
                    *scroll = scroll.saturating_add(1);
                }
                _ => state.select_down(),
            }
            KeyAction::None
        }
        KeyCode::PageUp => {
            match &mut state.popup {
                PopupState::Help { scroll } | PopupState::NodeDetail { scroll, .. } => {
                    *scroll = scroll.saturating_sub(10);
                }
                _ => state.page_up(10),
            }
            KeyAction::None
        }
        KeyCode::PageDown => {
            match &mut state.popup {
                PopupState::Help { scroll } | PopupState::NodeDetail { scroll, .. } => {
                    *scroll = scroll.saturating_add(10);
                }
                _ => state.page_down(10),
            }
            KeyAction::None
        }
        KeyCode::Home if !state.popup.is_open() => {
            state.home();
            KeyAction::None
        }
        KeyCode::End if !state.popup.is_open() => {
            state.end();
            KeyAction::None
        }

        // Card details
        KeyCode::Enter => {
            if state.popup.is_open() {
                KeyAction::None
            } else if let Some(node) = state.open_detail() {
                KeyAction::FetchAgreements(node)
            } else {
                KeyAction::None
            }
        }

        // Help
        KeyCode::Char('h') | KeyCode::Char('?') => {
            state.popup = PopupState::Help { scroll: 0 };
            KeyAction::None
        }

        // Close popup
        KeyCode::Esc => {
            state.popup = PopupState::None;
            KeyAction::None
        }

        _ => KeyAction::None,
    }
}

fn switch_and_fetch(state: &mut AppState, tab: Tab) -> KeyAction {
    state.switch_tab(tab);
    // Selecting the active tab again still re-issues the fetch
    KeyAction::Fetch(tab)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::state::DetailData;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn state_with_nodes(ids: &[&str]) -> AppState {
        let mut state = AppState::new();
        state.apply_nodes(ids.iter().map(|id| NodeId::new(*id)).collect());
        state
    }

    #[test]
    fn digit_keys_switch_tab_and_fetch() {
        let mut state = AppState::new();
        let action = handle_key(&mut state, key(KeyCode::Char('2')));
        assert_eq!(action, KeyAction::Fetch(Tab::Requestors));
        assert_eq!(state.current_tab, Tab::Requestors);
    }

    #[test]
    fn reselecting_the_active_tab_still_fetches() {
        let mut state = state_with_nodes(&["a", "b"]);
        state.select_down();

        let action = handle_key(&mut state, key(KeyCode::Char('1')));
        assert_eq!(action, KeyAction::Fetch(Tab::Providers));
        // State untouched by a same-tab selection
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn tab_key_cycles_through_both_tabs() {
        let mut state = AppState::new();
        assert_eq!(
            handle_key(&mut state, key(KeyCode::Tab)),
            KeyAction::Fetch(Tab::Requestors)
        );
        assert_eq!(
            handle_key(&mut state, key(KeyCode::Tab)),
            KeyAction::Fetch(Tab::Providers)
        );
    }

    #[test]
    fn refresh_fetches_the_current_tab() {
        let mut state = AppState::new();
        state.switch_tab(Tab::Requestors);
        assert_eq!(
            handle_key(&mut state, key(KeyCode::Char('r'))),
            KeyAction::Fetch(Tab::Requestors)
        );
    }

    #[test]
    fn detail_popup_blocks_tab_switching() {
        let mut state = state_with_nodes(&["a"]);
        handle_key(&mut state, key(KeyCode::Enter));
        assert!(state.popup.is_detail_open());

        let action = handle_key(&mut state, key(KeyCode::Char('2')));
        assert_eq!(action, KeyAction::None);
        assert_eq!(state.current_tab, Tab::Providers);
        assert!(state.status_message.is_some());
    }

    #[test]
    fn enter_opens_detail_and_fetches_agreements() {
        let mut state = state_with_nodes(&["a", "b"]);
        state.select_down();

        let action = handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(action, KeyAction::FetchAgreements(NodeId::new("b")));
        assert!(matches!(
            state.popup,
            PopupState::NodeDetail { data: DetailData::Loading, .. }
        ));
    }

    #[test]
    fn enter_on_an_empty_list_is_a_noop() {
        let mut state = AppState::new();
        assert_eq!(handle_key(&mut state, key(KeyCode::Enter)), KeyAction::None);
        assert_eq!(state.popup, PopupState::None);
    }

    #[test]
    fn quit_needs_confirmation() {
        let mut state = AppState::new();
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('q'))), KeyAction::None);
        assert_eq!(state.popup, PopupState::QuitConfirm);

        assert_eq!(handle_key(&mut state, key(KeyCode::Enter)), KeyAction::Quit);
        assert_eq!(state.popup, PopupState::None);
    }

    #[test]
    fn quit_confirmation_can_be_cancelled() {
        let mut state = AppState::new();
        handle_key(&mut state, key(KeyCode::Char('q')));
        assert_eq!(handle_key(&mut state, key(KeyCode::Esc)), KeyAction::None);
        assert_eq!(state.popup, PopupState::None);
    }

    #[test]
    fn ctrl_c_quits_immediately() {
        let mut state = AppState::new();
        let action = handle_key(
            &mut state,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert_eq!(action, KeyAction::Quit);
    }

    #[test]
    fn esc_closes_an_open_popup() {
        let mut state = AppState::new();
        handle_key(&mut state, key(KeyCode::Char('h')));
        assert!(state.popup.is_open());

        handle_key(&mut state, key(KeyCode::Esc));
        assert_eq!(state.popup, PopupState::None);
    }

    #[test]
    fn arrows_scroll_an_open_popup_instead_of_the_list() {
        let mut state = state_with_nodes(&["a", "b"]);
        state.popup = PopupState::Help { scroll: 0 };

        handle_key(&mut state, key(KeyCode::Down));
        assert_eq!(state.selected, 0);
        assert_eq!(state.popup, PopupState::Help { scroll: 1 });
    }
}
