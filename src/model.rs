//! Domain values exchanged with the aggregator backend.

use std::fmt;

use serde::{Deserialize, Deserializer};

/// Opaque node identifier reported by the backend.
///
/// Used both as the rendering key and as display content; no further
/// structure is assumed. Deserializing a JSON array element that is not a
/// string fails the whole fetch instead of letting arbitrary shapes reach
/// the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which side of an agreement a node played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Provider,
    Requestor,
}

impl Role {
    /// Path segment of the collection endpoint for this role.
    pub fn path_segment(&self) -> &'static str {
        match self {
            Role::Provider => "provider",
            Role::Requestor => "requestor",
        }
    }
}

/// Money amount as reported by the backend.
///
/// The aggregator serializes decimals as JSON strings, older deployments as
/// plain numbers. The viewer does no arithmetic, so the value is kept as a
/// display string either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Amount(String);

impl Amount {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        match value {
            serde_json::Value::String(s) => Ok(Amount(s)),
            serde_json::Value::Number(n) => Ok(Amount(n.to_string())),
            other => Err(serde::de::Error::custom(format!(
                "expected string or number amount, got {}",
                other
            ))),
        }
    }
}

/// One agreement of a node, as returned by `GET /{role}/{node_id}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Agreement {
    pub agreement_id: String,
    pub requested: Amount,
    pub accepted: Amount,
    pub confirmed: Amount,
    #[serde(default)]
    pub updated_ts: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_list_decodes_in_order() {
        let nodes: Vec<NodeId> = serde_json::from_str(r#"["n1","n2"]"#).unwrap();
        assert_eq!(nodes, vec![NodeId::new("n1"), NodeId::new("n2")]);
    }

    #[test]
    fn non_string_element_fails_the_decode() {
        let result: Result<Vec<NodeId>, _> = serde_json::from_str(r#"["n1",7]"#);
        assert!(result.is_err());
    }

    #[test]
    fn amount_accepts_string_and_number() {
        let a: Amount = serde_json::from_str(r#""1.50""#).unwrap();
        assert_eq!(a.as_str(), "1.50");
        let a: Amount = serde_json::from_str("42").unwrap();
        assert_eq!(a.as_str(), "42");
    }

    #[test]
    fn amount_rejects_other_shapes() {
        assert!(serde_json::from_str::<Amount>("true").is_err());
        assert!(serde_json::from_str::<Amount>(r#"{"v":1}"#).is_err());
    }

    #[test]
    fn agreement_decodes_with_and_without_timestamp() {
        let a: Agreement = serde_json::from_str(
            r#"{"agreement_id":"agr-1","requested":"10","accepted":"10","confirmed":"9.5","updated_ts":"2021-03-01T12:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(a.agreement_id, "agr-1");
        assert_eq!(a.confirmed.as_str(), "9.5");
        assert_eq!(a.updated_ts.as_deref(), Some("2021-03-01T12:00:00Z"));

        let a: Agreement = serde_json::from_str(
            r#"{"agreement_id":"agr-2","requested":1,"accepted":0,"confirmed":0}"#,
        )
        .unwrap();
        assert_eq!(a.updated_ts, None);
        assert_eq!(a.requested.as_str(), "1");
    }

    #[test]
    fn role_path_segments_match_the_rest_api() {
        assert_eq!(Role::Provider.path_segment(), "provider");
        assert_eq!(Role::Requestor.path_segment(), "requestor");
    }
}
