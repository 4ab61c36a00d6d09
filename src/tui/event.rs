//! Event handling for TUI.
//!
//! A separate thread polls for terminal events and timer ticks; fetch worker
//! threads report their results over the same channel.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};

use super::state::Tab;
use crate::model::{Agreement, NodeId};
use crate::source::SourceError;

/// Application events.
#[derive(Debug)]
pub enum Event {
    /// Timer tick for redraw.
    Tick,
    /// Keyboard input.
    Key(KeyEvent),
    /// A node-collection fetch completed.
    Nodes {
        tab: Tab,
        result: Result<Vec<NodeId>, SourceError>,
    },
    /// An agreement fetch completed.
    Agreements {
        node: NodeId,
        result: Result<Vec<Agreement>, SourceError>,
    },
}

/// Event handler that polls for terminal events in a separate thread.
pub struct EventHandler {
    rx: Receiver<Event>,
    /// Kept alive to prevent channel closure; cloned for fetch workers.
    tx: Sender<Event>,
}

impl EventHandler {
    /// Creates a new event handler with the specified tick rate.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            loop {
                // Poll for events with timeout
                if event::poll(tick_rate).unwrap_or(false) {
                    if let Ok(evt) = event::read() {
                        let event = match evt {
                            CrosstermEvent::Key(key) => Event::Key(key),
                            _ => continue,
                        };
                        if event_tx.send(event).is_err() {
                            break;
                        }
                    }
                } else {
                    // Timeout - send tick
                    if event_tx.send(Event::Tick).is_err() {
                        break;
                    }
                }
            }
        });

        Self { rx, tx }
    }

    /// Channel sender for fetch worker threads.
    pub fn sender(&self) -> Sender<Event> {
        self.tx.clone()
    }

    /// Receives the next event, blocking until one is available.
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.rx.recv()
    }
}
