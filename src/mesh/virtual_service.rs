//! VirtualService document types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::mesh::meta::ObjectMeta;

pub const API_VERSION: &str = "networking.istio.io/v1alpha3";
pub const KIND: &str = "VirtualService";

/// A complete VirtualService document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualService {
    pub api_version: String,
    pub kind: String,
    pub metadata: ObjectMeta,
    pub spec: VirtualServiceSpec,
}

impl VirtualService {
    pub fn new(metadata: ObjectMeta, spec: VirtualServiceSpec) -> Self {
        Self {
            api_version: API_VERSION.to_string(),
            kind: KIND.to_string(),
            metadata,
            spec,
        }
    }
}

/// Gateways and hosts a rule set binds to, plus the ordered rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct VirtualServiceSpec {
    pub gateways: Vec<String>,

    pub hosts: Vec<String>,

    /// Rules in evaluation order.
    #[serde(default)]
    pub http: Vec<HttpRoute>,
}

/// One match-and-forward rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpRoute {
    /// Match predicates, OR-combined.
    #[serde(rename = "match", default)]
    pub matches: Vec<HttpMatchRequest>,

    /// Weighted destinations.
    #[serde(default)]
    pub route: Vec<DestinationWeight>,

    /// Headers appended to requests forwarded by this rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub append_headers: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct HttpMatchRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authority: Option<StringMatch>,
}

impl HttpMatchRequest {
    pub fn authority_exact(authority: impl Into<String>) -> Self {
        Self {
            authority: Some(StringMatch::exact(authority)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StringMatch {
    Exact(String),
}

impl StringMatch {
    pub fn exact(value: impl Into<String>) -> Self {
        StringMatch::Exact(value.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DestinationWeight {
    pub destination: Destination,
    pub weight: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Destination {
    pub host: String,
    pub port: PortSelector,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct PortSelector {
    pub number: u32,
}

impl DestinationWeight {
    pub fn new(host: impl Into<String>, port: u32, weight: u32) -> Self {
        Self {
            destination: Destination {
                host: host.into(),
                port: PortSelector { number: port },
            },
            weight,
        }
    }
}
