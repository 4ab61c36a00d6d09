//! Terminal User Interface for the reputation viewer.
//!
//! This module provides an interactive two-tab card list over the provider
//! and requestor collections, in the style of atop/htop-like monitors.

mod app;
mod event;
mod input;
mod render;
mod state;
mod style;
mod widgets;

pub use app::App;
pub use event::{Event, EventHandler};
pub use state::{AppState, DetailData, PopupState, Tab};
