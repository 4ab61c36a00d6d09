//! UI-agnostic view models.
//!
//! Pure functions from application state to presentation data, kept free of
//! ratatui types so the rendering contract is testable without a terminal.

use crate::model::{Agreement, NodeId};
use crate::tui::Tab;

/// One entry of the tab navigation line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabItem {
    pub title: &'static str,
    pub active: bool,
}

/// Builds the tab line; exactly one entry is active.
pub fn build_tab_line(current: Tab) -> Vec<TabItem> {
    Tab::all()
        .iter()
        .map(|tab| TabItem {
            title: tab.title(),
            active: *tab == current,
        })
        .collect()
}

/// One node card: identifier header, placeholder body, details action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeCard {
    pub header: String,
    pub body: &'static str,
    pub action: &'static str,
}

// The backend reports no per-node summary; the card body is static.
const CARD_BODY: &str = "No summary reported for this node.";
const CARD_ACTION: &str = "[Enter] agreement details";

/// Builds one card per node, in list order.
pub fn build_cards(nodes: &[NodeId]) -> Vec<NodeCard> {
    nodes
        .iter()
        .map(|node| NodeCard {
            header: node.to_string(),
            body: CARD_BODY,
            action: CARD_ACTION,
        })
        .collect()
}

pub const AGREEMENT_HEADERS: [&str; 5] =
    ["AGREEMENT", "REQUESTED", "ACCEPTED", "CONFIRMED", "UPDATED"];

/// One row of the agreement-detail table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgreementRow {
    pub cells: [String; 5],
}

/// Builds the agreement table rows for the detail popup.
pub fn build_agreement_rows(agreements: &[Agreement]) -> Vec<AgreementRow> {
    agreements
        .iter()
        .map(|a| AgreementRow {
            cells: [
                a.agreement_id.clone(),
                a.requested.to_string(),
                a.accepted.to_string(),
                a.confirmed.to_string(),
                a.updated_ts.clone().unwrap_or_else(|| "-".to_string()),
            ],
        })
        .collect()
}
