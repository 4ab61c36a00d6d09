//! In-memory [`NodeSource`] for tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use super::{NodeSource, SourceError};
use crate::model::{Agreement, NodeId, Role};

/// Serves canned collections; optionally fails every request.
pub struct MockSource {
    providers: Vec<NodeId>,
    requestors: Vec<NodeId>,
    agreements: HashMap<String, Vec<Agreement>>,
    failing: AtomicBool,
}

impl MockSource {
    /// Empty network: both collections have no nodes.
    pub fn empty() -> Self {
        Self {
            providers: Vec::new(),
            requestors: Vec::new(),
            agreements: HashMap::new(),
            failing: AtomicBool::new(false),
        }
    }

    /// Small network with a few nodes on both sides.
    pub fn typical_network() -> Self {
        Self::empty()
            .with_providers(vec![
                NodeId::new("0xprov-1"),
                NodeId::new("0xprov-2"),
                NodeId::new("0xprov-3"),
            ])
            .with_requestors(vec![NodeId::new("0xreq-1"), NodeId::new("0xreq-2")])
    }

    pub fn with_providers(mut self, nodes: Vec<NodeId>) -> Self {
        self.providers = nodes;
        self
    }

    pub fn with_requestors(mut self, nodes: Vec<NodeId>) -> Self {
        self.requestors = nodes;
        self
    }

    pub fn with_agreements(mut self, node: &NodeId, agreements: Vec<Agreement>) -> Self {
        self.agreements.insert(node.as_str().to_string(), agreements);
        self
    }

    /// Makes every subsequent fetch fail (and back).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::Relaxed);
    }

    fn check_failing(&self) -> Result<(), SourceError> {
        if self.failing.load(Ordering::Relaxed) {
            Err(SourceError::Http("mock failure".to_string()))
        } else {
            Ok(())
        }
    }
}

impl NodeSource for MockSource {
    fn fetch_nodes(&self, role: Role) -> Result<Vec<NodeId>, SourceError> {
        self.check_failing()?;
        Ok(match role {
            Role::Provider => self.providers.clone(),
            Role::Requestor => self.requestors.clone(),
        })
    }

    fn fetch_agreements(
        &self,
        _role: Role,
        node: &NodeId,
    ) -> Result<Vec<Agreement>, SourceError> {
        self.check_failing()?;
        Ok(self.agreements.get(node.as_str()).cloned().unwrap_or_default())
    }
}
