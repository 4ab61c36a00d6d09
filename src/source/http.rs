//! HTTP implementation of [`NodeSource`].

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use super::{NodeSource, SourceError};
use crate::config::Endpoints;
use crate::model::{Agreement, NodeId, Role};

/// Fetches collections from the aggregator REST endpoints.
pub struct HttpNodeSource {
    client: reqwest::blocking::Client,
    endpoints: Endpoints,
}

impl HttpNodeSource {
    /// Creates a source with one pooled client and a per-request timeout.
    pub fn new(endpoints: Endpoints, timeout: Duration) -> Result<Self, SourceError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Http(e.to_string()))?;
        Ok(Self { client, endpoints })
    }

    fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, SourceError> {
        debug!(%url, "fetching");
        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| SourceError::Http(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "backend returned non-success status");
            return Err(SourceError::Status(status.as_u16()));
        }
        response
            .json::<T>()
            .map_err(|e| SourceError::Decode(e.to_string()))
    }
}

impl NodeSource for HttpNodeSource {
    fn fetch_nodes(&self, role: Role) -> Result<Vec<NodeId>, SourceError> {
        self.get_json(self.endpoints.url_for(role).clone())
    }

    fn fetch_agreements(
        &self,
        role: Role,
        node: &NodeId,
    ) -> Result<Vec<Agreement>, SourceError> {
        self.get_json(self.endpoints.node_url(role, node))
    }
}
