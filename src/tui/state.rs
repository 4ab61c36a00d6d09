//! Application state management.

use ratatui::widgets::ListState;

use crate::model::{Agreement, NodeId, Role};
use crate::source::SourceError;

/// Available tabs in the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Providers,
    Requestors,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Providers, Tab::Requestors]
    }

    /// Returns the display name of the tab.
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Providers => "Providers",
            Tab::Requestors => "Requestors",
        }
    }

    /// Role served by this tab's endpoint.
    pub fn role(&self) -> Role {
        match self {
            Tab::Providers => Role::Provider,
            Tab::Requestors => Role::Requestor,
        }
    }

    /// Returns the next tab.
    pub fn next(&self) -> Tab {
        match self {
            Tab::Providers => Tab::Requestors,
            Tab::Requestors => Tab::Providers,
        }
    }

    /// Returns the previous tab.
    pub fn prev(&self) -> Tab {
        match self {
            Tab::Providers => Tab::Requestors,
            Tab::Requestors => Tab::Providers,
        }
    }
}

/// Agreement data shown in the node detail popup.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailData {
    /// Fetch is in flight.
    Loading,
    Ready(Vec<Agreement>),
    Failed(String),
}

/// Active popup state. Only one popup can be open at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum PopupState {
    /// No popup is open.
    None,
    /// Help popup with scroll offset.
    Help { scroll: usize },
    /// Quit confirmation dialog.
    QuitConfirm,
    /// Agreement detail popup for one node.
    NodeDetail {
        node: NodeId,
        scroll: usize,
        data: DetailData,
    },
}

impl Default for PopupState {
    fn default() -> Self {
        Self::None
    }
}

impl PopupState {
    /// Returns true if any popup is open (excluding None).
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Returns true if the node detail popup is open.
    pub fn is_detail_open(&self) -> bool {
        matches!(self, Self::NodeDetail { .. })
    }
}

/// Main application state.
///
/// All fields are owned and mutated exclusively by the UI thread.
#[derive(Debug)]
pub struct AppState {
    /// Current active tab.
    pub current_tab: Tab,
    /// Node list of the last completed fetch, replaced wholesale.
    pub nodes: Vec<NodeId>,
    /// Selected card index.
    pub selected: usize,
    /// Identifier the selection is anchored to across list replacements.
    pub tracked_node: Option<NodeId>,
    /// Ratatui list state (enables auto-scrolling).
    pub list_state: ListState,
    /// Active popup.
    pub popup: PopupState,
    /// Temporary notice shown in the header (fetch errors, blocked actions).
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            current_tab: Tab::Providers,
            nodes: Vec::new(),
            selected: 0,
            tracked_node: None,
            list_state: ListState::default(),
            popup: PopupState::None,
            status_message: None,
        }
    }

    /// Switches to a new tab, resetting selection and tracking.
    ///
    /// Selecting the already-active tab leaves the state untouched; the
    /// caller still re-issues the fetch.
    pub fn switch_tab(&mut self, new_tab: Tab) {
        if self.current_tab != new_tab {
            self.current_tab = new_tab;
            self.selected = 0;
            self.tracked_node = None;
            self.status_message = None;
            self.resolve_selection();
        }
    }

    /// Replaces the node list with a completed fetch result.
    ///
    /// Replacement is wholesale and unconditional: when fetches overlap,
    /// whichever completes last wins, regardless of the selected tab.
    pub fn apply_nodes(&mut self, nodes: Vec<NodeId>) {
        self.nodes = nodes;
        self.status_message = None;
        self.resolve_selection();
    }

    /// Records a failed fetch. The previously fetched list stays visible.
    pub fn fetch_failed(&mut self, tab: Tab, error: &SourceError) {
        self.status_message = Some(format!("{} fetch failed: {}", tab.title(), error));
    }

    /// Opens the agreement detail popup for the selected node, if any.
    pub fn open_detail(&mut self) -> Option<NodeId> {
        let node = self.selected_node()?.clone();
        self.popup = PopupState::NodeDetail {
            node: node.clone(),
            scroll: 0,
            data: DetailData::Loading,
        };
        Some(node)
    }

    /// Applies an agreement fetch result.
    ///
    /// Dropped unless the detail popup is still open on the same node.
    pub fn apply_agreements(
        &mut self,
        node: &NodeId,
        result: Result<Vec<Agreement>, SourceError>,
    ) {
        if let PopupState::NodeDetail { node: open, data, .. } = &mut self.popup
            && open == node
        {
            *data = match result {
                Ok(agreements) => DetailData::Ready(agreements),
                Err(e) => DetailData::Failed(e.to_string()),
            };
        }
    }

    /// Currently selected node, if the list is non-empty.
    pub fn selected_node(&self) -> Option<&NodeId> {
        self.nodes.get(self.selected)
    }

    pub fn select_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.tracked_node = None;
        self.resolve_selection();
    }

    pub fn select_down(&mut self) {
        self.selected = self.selected.saturating_add(1);
        self.tracked_node = None;
        self.resolve_selection();
    }

    pub fn page_up(&mut self, n: usize) {
        self.selected = self.selected.saturating_sub(n);
        self.tracked_node = None;
        self.resolve_selection();
    }

    pub fn page_down(&mut self, n: usize) {
        self.selected = self.selected.saturating_add(n);
        self.tracked_node = None;
        self.resolve_selection();
    }

    pub fn home(&mut self) {
        self.selected = 0;
        self.tracked_node = None;
        self.resolve_selection();
    }

    pub fn end(&mut self) {
        self.selected = usize::MAX;
        self.tracked_node = None;
        self.resolve_selection();
    }

    /// Resolves selection after a list replacement or manual navigation:
    /// re-anchors the tracked node, clamps the index, and syncs ratatui state.
    pub fn resolve_selection(&mut self) {
        if let Some(tracked) = self.tracked_node.as_ref() {
            if let Some(idx) = self.nodes.iter().position(|n| n == tracked) {
                self.selected = idx;
            } else {
                self.tracked_node = None;
            }
        }

        if !self.nodes.is_empty() {
            self.selected = self.selected.min(self.nodes.len() - 1);
            self.tracked_node = Some(self.nodes[self.selected].clone());
            self.list_state.select(Some(self.selected));
        } else {
            self.selected = 0;
            self.tracked_node = None;
            self.list_state.select(None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node_ids(ids: &[&str]) -> Vec<NodeId> {
        ids.iter().map(|id| NodeId::new(*id)).collect()
    }

    #[test]
    fn initial_state_is_providers_with_no_cards() {
        let state = AppState::new();
        assert_eq!(state.current_tab, Tab::Providers);
        assert!(state.nodes.is_empty());
        assert_eq!(state.popup, PopupState::None);
    }

    #[test]
    fn both_tabs_cycle_to_each_other() {
        assert_eq!(Tab::Providers.next(), Tab::Requestors);
        assert_eq!(Tab::Requestors.next(), Tab::Providers);
        assert_eq!(Tab::Providers.prev(), Tab::Requestors);
        assert_eq!(Tab::default(), Tab::Providers);
    }

    #[test]
    fn switch_tab_resets_selection() {
        let mut state = AppState::new();
        state.apply_nodes(node_ids(&["a", "b", "c"]));
        state.select_down();
        assert_eq!(state.selected, 1);

        state.switch_tab(Tab::Requestors);
        assert_eq!(state.current_tab, Tab::Requestors);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn switch_to_same_tab_keeps_state() {
        let mut state = AppState::new();
        state.apply_nodes(node_ids(&["a", "b"]));
        state.select_down();

        state.switch_tab(Tab::Providers);
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn apply_nodes_replaces_the_list_wholesale() {
        let mut state = AppState::new();
        state.apply_nodes(node_ids(&["a", "b"]));
        state.apply_nodes(node_ids(&["c"]));
        assert_eq!(state.nodes, node_ids(&["c"]));
    }

    #[test]
    fn apply_nodes_clamps_the_selection() {
        let mut state = AppState::new();
        state.apply_nodes(node_ids(&["a", "b", "c"]));
        state.end();
        assert_eq!(state.selected, 2);

        state.tracked_node = None;
        state.apply_nodes(node_ids(&["x"]));
        assert_eq!(state.selected, 0);
        assert_eq!(state.selected_node(), Some(&NodeId::new("x")));
    }

    #[test]
    fn tracked_node_survives_a_reordering_replacement() {
        let mut state = AppState::new();
        state.apply_nodes(node_ids(&["a", "b", "c"]));
        state.select_down();
        assert_eq!(state.selected_node(), Some(&NodeId::new("b")));

        state.apply_nodes(node_ids(&["b", "c", "a"]));
        assert_eq!(state.selected, 0);
        assert_eq!(state.selected_node(), Some(&NodeId::new("b")));
    }

    #[test]
    fn fetch_failure_keeps_the_list_and_sets_a_message() {
        let mut state = AppState::new();
        state.apply_nodes(node_ids(&["a"]));

        state.fetch_failed(Tab::Providers, &SourceError::Status(500));
        assert_eq!(state.nodes, node_ids(&["a"]));
        assert!(state.status_message.as_deref().unwrap().contains("Providers"));
    }

    #[test]
    fn fetch_by_tab_is_idempotent() {
        let mut state = AppState::new();
        state.apply_nodes(node_ids(&["a"]));
        state.switch_tab(Tab::Requestors);
        state.apply_nodes(node_ids(&["b"]));
        state.switch_tab(Tab::Providers);
        state.apply_nodes(node_ids(&["a"]));
        assert_eq!(state.nodes, node_ids(&["a"]));
    }

    #[test]
    fn agreements_apply_only_to_the_open_node() {
        let mut state = AppState::new();
        state.apply_nodes(node_ids(&["a", "b"]));
        let opened = state.open_detail().unwrap();
        assert_eq!(opened, NodeId::new("a"));

        // Result for another node is dropped
        state.apply_agreements(&NodeId::new("b"), Ok(Vec::new()));
        assert!(matches!(
            state.popup,
            PopupState::NodeDetail { data: DetailData::Loading, .. }
        ));

        state.apply_agreements(&NodeId::new("a"), Ok(Vec::new()));
        assert!(matches!(
            state.popup,
            PopupState::NodeDetail { data: DetailData::Ready(_), .. }
        ));
    }

    #[test]
    fn agreements_after_popup_close_are_dropped() {
        let mut state = AppState::new();
        state.apply_nodes(node_ids(&["a"]));
        state.open_detail().unwrap();
        state.popup = PopupState::None;

        state.apply_agreements(&NodeId::new("a"), Ok(Vec::new()));
        assert_eq!(state.popup, PopupState::None);
    }

    #[test]
    fn selection_navigation_saturates_at_both_ends() {
        let mut state = AppState::new();
        state.apply_nodes(node_ids(&["a", "b", "c"]));

        state.select_up();
        assert_eq!(state.selected, 0);

        state.page_down(10);
        assert_eq!(state.selected, 2);

        state.home();
        assert_eq!(state.selected, 0);
    }
}
