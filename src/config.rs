//! Viewer configuration.
//!
//! The two backend endpoints are explicit construction-time values instead
//! of addresses hardcoded at the fetch site. The binary assembles them from
//! CLI arguments; tests from a mock server URI.

use url::Url;

use crate::model::{NodeId, Role};

/// The two collection endpoints the viewer talks to.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub provider: Url,
    pub requestor: Url,
}

impl Endpoints {
    /// Derives both endpoints from a base URL.
    pub fn from_base(base: &Url) -> Result<Self, url::ParseError> {
        let base = ensure_trailing_slash(base);
        Ok(Self {
            provider: base.join(Role::Provider.path_segment())?,
            requestor: base.join(Role::Requestor.path_segment())?,
        })
    }

    /// Endpoint serving the node collection for `role`.
    pub fn url_for(&self, role: Role) -> &Url {
        match role {
            Role::Provider => &self.provider,
            Role::Requestor => &self.requestor,
        }
    }

    /// Endpoint serving the agreement list of a single node.
    pub fn node_url(&self, role: Role, node: &NodeId) -> Url {
        let mut url = self.url_for(role).clone();
        // http(s) URLs always have extensible path segments
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(node.as_str());
        }
        url
    }
}

/// `Url::join` replaces the last path segment unless the base ends in `/`.
fn ensure_trailing_slash(base: &Url) -> Url {
    if base.path().ends_with('/') {
        base.clone()
    } else {
        let mut url = base.clone();
        url.set_path(&format!("{}/", base.path()));
        url
    }
}
