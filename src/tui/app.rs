//! Main TUI application.

use std::io;
use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::warn;

use crate::model::NodeId;
use crate::source::NodeSource;

use super::event::{Event, EventHandler};
use super::input::{KeyAction, handle_key};
use super::render::render;
use super::state::{AppState, Tab};

/// Main TUI application.
///
/// Owns the tab selector and node list state, maps tab selection to a
/// remote fetch, and renders the derived UI.
pub struct App {
    source: Arc<dyn NodeSource>,
    state: AppState,
    should_quit: bool,
}

impl App {
    /// Creates a new App with the given data source.
    pub fn new(source: Arc<dyn NodeSource>) -> Self {
        Self {
            source,
            state: AppState::new(),
            should_quit: false,
        }
    }

    /// Current application state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Runs the TUI application.
    pub fn run(mut self, tick_rate: Duration) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Create event handler
        let events = EventHandler::new(tick_rate);
        let fetch_tx = events.sender();

        // Initial fetch for the default tab
        self.spawn_node_fetch(&fetch_tx, self.state.current_tab);

        // Main loop
        loop {
            terminal.draw(|frame| render(frame, &mut self.state))?;

            match events.next() {
                Ok(event) => self.handle_event(event, &fetch_tx),
                Err(_) => self.should_quit = true,
            }

            if self.should_quit {
                break;
            }
        }

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    /// Applies one event to the application state.
    ///
    /// Fetch results are applied in arrival order: when fetches overlap,
    /// whichever completes last overwrites the node list, regardless of the
    /// tab selected by then.
    pub fn handle_event(&mut self, event: Event, fetch_tx: &Sender<Event>) {
        match event {
            Event::Tick => {}
            Event::Key(key) => match handle_key(&mut self.state, key) {
                KeyAction::Quit => self.should_quit = true,
                KeyAction::Fetch(tab) => self.spawn_node_fetch(fetch_tx, tab),
                KeyAction::FetchAgreements(node) => self.spawn_agreement_fetch(fetch_tx, node),
                KeyAction::None => {}
            },
            Event::Nodes { tab, result } => match result {
                Ok(nodes) => self.state.apply_nodes(nodes),
                Err(e) => {
                    warn!(tab = tab.title(), error = %e, "node fetch failed");
                    self.state.fetch_failed(tab, &e);
                }
            },
            Event::Agreements { node, result } => {
                if let Err(e) = &result {
                    warn!(node = node.as_str(), error = %e, "agreement fetch failed");
                }
                self.state.apply_agreements(&node, result);
            }
        }
    }

    /// Spawns a worker thread fetching the node collection of a tab.
    ///
    /// The UI thread never blocks on the network; the result comes back as
    /// an [`Event::Nodes`] over the event channel.
    pub fn spawn_node_fetch(&self, tx: &Sender<Event>, tab: Tab) {
        let source = Arc::clone(&self.source);
        let tx = tx.clone();
        thread::spawn(move || {
            let result = source.fetch_nodes(tab.role());
            let _ = tx.send(Event::Nodes { tab, result });
        });
    }

    /// Spawns a worker thread fetching one node's agreement history.
    pub fn spawn_agreement_fetch(&self, tx: &Sender<Event>, node: NodeId) {
        let source = Arc::clone(&self.source);
        let role = self.state.current_tab.role();
        let tx = tx.clone();
        thread::spawn(move || {
            let result = source.fetch_agreements(role, &node);
            let _ = tx.send(Event::Agreements { node, result });
        });
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;
    use crate::source::{MockSource, SourceError};

    fn node_ids(ids: &[&str]) -> Vec<NodeId> {
        ids.iter().map(|id| NodeId::new(*id)).collect()
    }

    fn dummy_tx() -> Sender<Event> {
        mpsc::channel().0
    }

    #[test]
    fn nodes_event_replaces_the_list_wholesale() {
        let mut app = App::new(Arc::new(MockSource::empty()));
        let tx = dummy_tx();

        app.handle_event(
            Event::Nodes { tab: Tab::Providers, result: Ok(node_ids(&["a", "b"])) },
            &tx,
        );
        assert_eq!(app.state().nodes, node_ids(&["a", "b"]));

        app.handle_event(
            Event::Nodes { tab: Tab::Providers, result: Ok(node_ids(&["c"])) },
            &tx,
        );
        assert_eq!(app.state().nodes, node_ids(&["c"]));
    }

    #[test]
    fn failed_fetch_leaves_the_previous_list_visible() {
        let mut app = App::new(Arc::new(MockSource::empty()));
        let tx = dummy_tx();

        app.handle_event(
            Event::Nodes { tab: Tab::Providers, result: Ok(node_ids(&["a"])) },
            &tx,
        );
        app.handle_event(
            Event::Nodes {
                tab: Tab::Providers,
                result: Err(SourceError::Http("connection refused".to_string())),
            },
            &tx,
        );

        assert_eq!(app.state().nodes, node_ids(&["a"]));
        assert!(app.state().status_message.is_some());
    }

    #[test]
    fn last_completed_fetch_wins_regardless_of_selected_tab() {
        let mut app = App::new(Arc::new(MockSource::empty()));
        let tx = dummy_tx();

        // User is on requestors and its fetch already completed...
        app.handle_event(
            Event::Key(KeyEvent::new(KeyCode::Char('2'), KeyModifiers::NONE)),
            &tx,
        );
        app.handle_event(
            Event::Nodes { tab: Tab::Requestors, result: Ok(node_ids(&["b"])) },
            &tx,
        );

        // ...when a slow providers fetch from before the switch resolves.
        app.handle_event(
            Event::Nodes { tab: Tab::Providers, result: Ok(node_ids(&["a"])) },
            &tx,
        );

        assert_eq!(app.state().current_tab, Tab::Requestors);
        assert_eq!(app.state().nodes, node_ids(&["a"]));
    }

    #[test]
    fn tab_key_round_trips_through_the_fetch_worker() {
        let (tx, rx) = mpsc::channel();
        let mut app = App::new(Arc::new(MockSource::typical_network()));

        app.handle_event(
            Event::Key(KeyEvent::new(KeyCode::Char('2'), KeyModifiers::NONE)),
            &tx,
        );
        let event = rx.recv_timeout(Duration::from_secs(5)).expect("fetch result");
        app.handle_event(event, &tx);

        assert_eq!(app.state().current_tab, Tab::Requestors);
        assert_eq!(app.state().nodes, node_ids(&["0xreq-1", "0xreq-2"]));
    }

    #[test]
    fn quit_flag_is_set_by_ctrl_c() {
        let mut app = App::new(Arc::new(MockSource::empty()));
        let tx = dummy_tx();

        app.handle_event(
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            &tx,
        );
        assert!(app.should_quit());
    }
}
